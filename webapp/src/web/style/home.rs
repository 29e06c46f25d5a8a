pub const HOME_STYLES: &str = r#"
/* Home page */
.home-container {
  overflow-x: hidden;
}

.home-container section {
  padding: var(--space-24) 0;
}

/* Hero */
.home-container .hero {
  min-height: 90vh;
  display: flex;
  align-items: center;
  justify-content: center;
  padding-top: var(--header-height);
  text-align: center;
  background: radial-gradient(circle at center, rgba(124, 58, 237, 0.2), transparent 60%);
}

.hero-badge {
  display: inline-flex;
  gap: var(--space-2);
  padding: var(--space-1) var(--space-4);
  border-radius: var(--radius-full);
  background: rgba(255, 255, 255, 0.05);
  border: 1px solid var(--border);
  color: var(--brand-accent);
  font-size: 0.875rem;
  margin-bottom: var(--space-8);
}

.hero-title {
  font-size: clamp(3rem, 8vw, 6rem);
  font-weight: 700;
  line-height: 1.1;
  letter-spacing: -0.02em;
  margin-bottom: var(--space-8);
}

.gradient-text {
  background: linear-gradient(90deg, var(--brand-purple), #A78BFA, var(--brand-accent));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.hero-subtitle {
  font-size: 1.25rem;
  color: var(--text-secondary);
  max-width: 42rem;
  margin: 0 auto var(--space-8);
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-4);
  justify-content: center;
  margin-bottom: var(--space-16);
}

.stats-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(10rem, 1fr));
  gap: var(--space-6);
  max-width: 64rem;
  margin: 0 auto;
}

.stat-card {
  padding: var(--space-4);
  border-radius: var(--radius-lg);
  background: rgba(255, 255, 255, 0.05);
  border: 1px solid var(--border);
}

.stat-value {
  font-size: 1.875rem;
  font-weight: 700;
}

.stat-label {
  font-size: 0.75rem;
  color: var(--text-secondary);
  text-transform: uppercase;
  letter-spacing: 0.05em;
}

/* Quick in-page navigation */
.quick-nav {
  position: sticky;
  top: var(--header-height);
  z-index: 40;
  background: #08080A;
  border-top: 1px solid var(--border);
  border-bottom: 1px solid var(--border);
  overflow-x: auto;
}

.quick-nav-inner {
  display: flex;
  justify-content: center;
  gap: var(--space-8);
  padding: var(--space-4);
  min-width: max-content;
}

.quick-nav a {
  font-size: 0.875rem;
  color: var(--text-tertiary);
}

.quick-nav a:hover {
  color: var(--brand-purple);
}

/* Showcase */
.showcase-grid,
.service-cards,
.process-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
  gap: var(--space-8);
}

.showcase-card {
  position: relative;
  aspect-ratio: 9 / 16;
  border-radius: var(--radius-lg);
  overflow: hidden;
  border: 1px solid var(--border);
  background: var(--surface);
}

.showcase-card img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  opacity: 0.8;
  transition: transform 700ms var(--easing-standard), opacity 700ms var(--easing-standard);
}

.showcase-card:hover img {
  opacity: 1;
  transform: scale(1.05);
}

.showcase-tag {
  position: absolute;
  top: var(--space-4);
  left: var(--space-4);
  padding: var(--space-1) var(--space-3);
  border-radius: var(--radius-full);
  background: rgba(0, 0, 0, 0.6);
  border: 1px solid var(--border);
  font-size: 0.75rem;
  font-weight: 700;
}

.showcase-meta {
  position: absolute;
  left: 0;
  right: 0;
  bottom: 0;
  padding: var(--space-6);
  display: flex;
  justify-content: space-between;
  align-items: flex-end;
  background: linear-gradient(0deg, #000, rgba(0, 0, 0, 0.8), transparent);
}

.showcase-meta p {
  color: var(--text-secondary);
  font-size: 0.875rem;
}

.showcase-result {
  color: var(--brand-accent);
  font-weight: 700;
  text-align: right;
}

.more-link {
  display: block;
  margin-top: var(--space-12);
  text-align: center;
  font-weight: 500;
}

.more-link:hover {
  color: var(--brand-purple);
}

/* Problems */
.problems {
  background: rgba(15, 15, 17, 0.5);
}

.problems-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
  gap: var(--space-6);
}

.problem-old {
  color: var(--text-tertiary);
  text-decoration: line-through;
  font-size: 0.875rem;
}

.problem-new {
  font-size: 1.25rem;
  font-weight: 700;
}

.problem-card:hover .problem-new {
  color: var(--brand-accent);
}

/* Service cards */
.service-card h3 {
  font-size: 1.5rem;
  margin-bottom: var(--space-2);
}

.service-price {
  color: var(--text-secondary);
  font-size: 0.875rem;
  margin-bottom: var(--space-6);
}

.service-price strong {
  display: block;
  margin-top: var(--space-1);
  font-size: 1.5rem;
  color: var(--brand-accent);
}

/* Process */
.process {
  background: var(--surface);
  border-top: 1px solid var(--border);
  border-bottom: 1px solid var(--border);
}

.process-step {
  text-align: center;
}

.step-number {
  width: 4rem;
  height: 4rem;
  margin: 0 auto var(--space-6);
  border-radius: var(--radius-full);
  border: 1px solid rgba(124, 58, 237, 0.3);
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 1.25rem;
  font-weight: 700;
  box-shadow: 0 0 15px rgba(124, 58, 237, 0.3);
}

.process-step p {
  color: var(--text-secondary);
}

/* Testimonials */
.testimonials-layout {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr));
  gap: var(--space-16);
  align-items: center;
}

.testimonials-intro {
  font-size: 1.125rem;
  color: var(--text-secondary);
  margin-bottom: var(--space-8);
}

.stars {
  color: #EAB308;
  margin-bottom: var(--space-4);
}

.quote {
  color: #D4D4D8;
  font-style: italic;
  margin-bottom: var(--space-6);
}

.author p {
  font-size: 0.75rem;
  color: var(--text-tertiary);
}

.metric-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-4);
}

.metric-card {
  background: var(--surface-raised);
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
  padding: var(--space-6);
}

.metric-card p {
  font-size: 0.75rem;
  color: var(--text-tertiary);
}

/* Final call to action */
.cta-box {
  max-width: 64rem;
  margin: 0 auto;
  padding: var(--space-24) var(--space-12);
  border-radius: 3rem;
  text-align: center;
  background: linear-gradient(90deg, var(--brand-purple-dark), #2E1065);
}

.cta-box h2 {
  font-size: clamp(2.25rem, 5vw, 3.75rem);
  margin-bottom: var(--space-6);
}

.cta-box p {
  font-size: 1.25rem;
  color: #E9D5FF;
  max-width: 42rem;
  margin: 0 auto var(--space-8);
}

.cta-perks {
  margin-top: var(--space-8);
  display: flex;
  justify-content: center;
  gap: var(--space-6);
  font-size: 0.875rem;
  color: rgba(233, 213, 255, 0.6);
}
"#;
