pub const BASE_COMPONENTS: &str = r#"
/* Layout */
.container {
  max-width: var(--content-width);
  margin: 0 auto;
  padding: 0 var(--space-6);
}

.page-body {
  padding-bottom: var(--space-24);
}

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  padding: var(--space-3) var(--space-8);
  border-radius: var(--radius-md);
  border: 1px solid transparent;
  font-weight: 700;
  cursor: pointer;
  transition: all var(--transition-fast) var(--easing-standard);
}

.btn:hover {
  text-decoration: none;
}

.btn-primary {
  background: linear-gradient(90deg, var(--brand-purple), var(--brand-purple-dark));
  color: var(--text-primary);
  box-shadow: 0 0 20px var(--brand-glow);
}

.btn-secondary {
  background: transparent;
  color: var(--text-primary);
  border-color: var(--border-strong);
}

.btn-secondary:hover {
  border-color: var(--brand-purple);
  background-color: rgba(255, 255, 255, 0.05);
}

.btn-light {
  background: var(--text-primary);
  color: #000;
}

.btn-lg {
  padding: var(--space-4) var(--space-12);
  font-size: 1.125rem;
}

.btn-block {
  display: flex;
  width: 100%;
}

/* Section headings */
.section-heading {
  text-align: center;
  margin-bottom: var(--space-16);
}

.section-heading.left {
  text-align: left;
}

.section-badge {
  display: inline-block;
  padding: var(--space-1) var(--space-3);
  border-radius: var(--radius-full);
  background: rgba(124, 58, 237, 0.1);
  border: 1px solid rgba(124, 58, 237, 0.2);
  color: var(--brand-purple);
  font-size: 0.75rem;
  font-weight: 700;
  letter-spacing: 0.05em;
  text-transform: uppercase;
  margin-bottom: var(--space-4);
}

.section-title {
  font-size: clamp(1.875rem, 4vw, 3rem);
  font-weight: 700;
  margin-bottom: var(--space-6);
}

.section-rule {
  height: 4px;
  width: 5rem;
  margin: 0 auto;
  border-radius: var(--radius-full);
  background: linear-gradient(90deg, var(--brand-purple), transparent);
}

.section-heading.left .section-rule {
  margin: 0;
}

/* Inner page header */
.page-header {
  padding: calc(var(--header-height) + var(--space-12)) var(--space-4) var(--space-16);
  text-align: center;
  background: linear-gradient(180deg, rgba(124, 58, 237, 0.05), transparent);
}

.page-title {
  font-size: clamp(2.25rem, 5vw, 3.75rem);
  font-weight: 700;
  margin-bottom: var(--space-4);
}

.page-subtitle {
  font-size: 1.25rem;
  color: var(--text-secondary);
  max-width: 42rem;
  margin: 0 auto;
}

/* Cards and lists */
.card {
  background-color: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius-xl);
  padding: var(--space-8);
  transition: border-color var(--transition-normal) var(--easing-standard);
}

.card:hover {
  border-color: rgba(124, 58, 237, 0.4);
}

.check-list {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: var(--space-3);
  margin-bottom: var(--space-8);
}

.check-list li {
  display: flex;
  gap: var(--space-3);
  color: var(--text-secondary);
}

.check-icon {
  color: var(--brand-purple);
  flex-shrink: 0;
}

.empty-state {
  text-align: center;
  color: var(--text-tertiary);
  padding: var(--space-12) 0;
}
"#;
