pub const PAGE_STYLES: &str = r#"
/* Services */
.service-block {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr));
  gap: var(--space-12);
  align-items: center;
  margin-bottom: var(--space-24);
}

.service-block.reverse .service-copy {
  order: 2;
}

.service-copy h2 {
  font-size: 1.875rem;
  margin-bottom: var(--space-4);
}

.service-copy > p {
  color: var(--text-secondary);
  font-size: 1.125rem;
  margin-bottom: var(--space-6);
}

.service-starts {
  font-size: 1.5rem;
  font-weight: 700;
  color: var(--brand-accent);
  margin-bottom: var(--space-6);
}

.service-media {
  aspect-ratio: 1;
  border-radius: var(--radius-xl);
  border: 1px solid var(--border);
  overflow: hidden;
  background: linear-gradient(45deg, rgba(124, 58, 237, 0.2), transparent);
}

.service-media img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  opacity: 0.6;
  mix-blend-mode: screen;
}

/* Portfolio */
.filter-bar {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: var(--space-4);
  margin-bottom: var(--space-12);
}

.filter-chip {
  padding: var(--space-2) var(--space-6);
  border-radius: var(--radius-full);
  border: 1px solid var(--border);
  background: transparent;
  color: var(--text-secondary);
  font-size: 0.875rem;
  font-weight: 500;
  cursor: pointer;
}

.filter-chip:hover {
  border-color: var(--border-strong);
}

.filter-chip.selected {
  background: var(--brand-purple);
  border-color: var(--brand-purple);
  color: var(--text-primary);
}

.portfolio-grid,
.blog-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(20rem, 1fr));
  gap: var(--space-8);
}

.portfolio-card,
.blog-card {
  display: flex;
  flex-direction: column;
  border-radius: var(--radius-lg);
  background: var(--surface);
  border: 1px solid var(--border);
  overflow: hidden;
}

.portfolio-thumb,
.blog-thumb {
  aspect-ratio: 16 / 10;
  overflow: hidden;
  background: #18181B;
}

.portfolio-thumb img,
.blog-thumb img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  transition: transform 700ms var(--easing-standard);
}

.portfolio-card:hover img,
.blog-card:hover img {
  transform: scale(1.05);
}

.portfolio-body,
.blog-body {
  flex: 1;
  display: flex;
  flex-direction: column;
  padding: var(--space-6);
}

.portfolio-meta {
  display: flex;
  justify-content: space-between;
  margin-bottom: var(--space-2);
}

.portfolio-category,
.blog-meta {
  font-size: 0.75rem;
  font-weight: 700;
  color: var(--brand-purple);
  text-transform: uppercase;
  letter-spacing: 0.05em;
}

.portfolio-result {
  font-size: 0.75rem;
  font-weight: 700;
  color: var(--success);
}

.portfolio-body p,
.blog-body p {
  color: var(--text-tertiary);
  font-size: 0.875rem;
}

/* Pricing */
.pricing-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
  gap: var(--space-8);
  margin-bottom: var(--space-24);
}

.pricing-card {
  position: relative;
}

.pricing-card.popular {
  background: var(--surface-raised);
  border-color: var(--brand-purple);
  box-shadow: 0 0 40px rgba(124, 58, 237, 0.15);
  transform: scale(1.05);
}

.popular-badge {
  position: absolute;
  top: 0;
  left: 50%;
  transform: translate(-50%, -50%);
  padding: var(--space-1) var(--space-4);
  border-radius: var(--radius-full);
  background: var(--brand-purple);
  font-size: 0.75rem;
  font-weight: 700;
  text-transform: uppercase;
}

.price {
  display: flex;
  align-items: baseline;
  gap: var(--space-1);
  margin: var(--space-2) 0 var(--space-6);
}

.price strong {
  font-size: 2.25rem;
}

.price-unit {
  color: var(--text-tertiary);
}

.pricing-tagline {
  color: var(--text-secondary);
  font-size: 0.875rem;
  padding-bottom: var(--space-8);
  margin-bottom: var(--space-8);
  border-bottom: 1px solid var(--border);
}

.faq {
  max-width: 48rem;
  margin: 0 auto;
}

.faq h3 {
  text-align: center;
  font-size: 1.5rem;
  margin-bottom: var(--space-8);
}

.faq-item {
  margin-bottom: var(--space-4);
  padding: var(--space-6);
}

.faq-item p {
  color: var(--text-secondary);
  font-size: 0.875rem;
}

/* About */
.about-copy {
  max-width: 56rem;
  margin: 0 auto var(--space-16);
  text-align: center;
  font-size: 1.25rem;
  color: #D4D4D8;
}

.about-copy p + p {
  margin-top: var(--space-6);
}

.fact-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(10rem, 1fr));
  gap: var(--space-8);
  max-width: 56rem;
  margin: 0 auto;
  text-align: center;
}

.fact-tile h3 {
  font-size: 1.875rem;
}

.fact-tile p {
  font-size: 0.75rem;
  color: var(--text-tertiary);
  text-transform: uppercase;
}

/* Blog */
.blog-body h3 {
  margin: var(--space-3) 0;
}

.blog-body p {
  flex: 1;
  margin-bottom: var(--space-6);
}

.read-more {
  width: max-content;
  font-size: 0.875rem;
  font-weight: 700;
  border-bottom: 1px solid var(--brand-purple);
  padding-bottom: var(--space-1);
}

/* Contact */
.contact-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(22rem, 1fr));
  gap: var(--space-16);
}

.contact-details h2 {
  font-size: 1.875rem;
  margin-bottom: var(--space-6);
}

.contact-item {
  display: flex;
  align-items: center;
  gap: var(--space-4);
  margin-bottom: var(--space-6);
  color: #D4D4D8;
}

.contact-icon {
  width: 3rem;
  height: 3rem;
  border-radius: var(--radius-full);
  border: 1px solid var(--border);
  background: var(--surface);
  display: flex;
  align-items: center;
  justify-content: center;
  color: var(--brand-purple);
}

.contact-label {
  font-size: 0.75rem;
  color: var(--text-tertiary);
  text-transform: uppercase;
}

.why-us {
  margin-top: var(--space-12);
}

.why-us .check-icon {
  color: var(--success);
}

.contact-form {
  display: flex;
  flex-direction: column;
  gap: var(--space-6);
}

.form-row {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr));
  gap: var(--space-6);
}

.form-field label {
  display: block;
  font-size: 0.75rem;
  font-weight: 700;
  color: var(--text-tertiary);
  text-transform: uppercase;
  margin-bottom: var(--space-2);
}

.form-input {
  width: 100%;
  padding: var(--space-3) var(--space-4);
  border-radius: var(--radius-md);
  border: 1px solid var(--border);
  background: rgba(0, 0, 0, 0.5);
  color: var(--text-primary);
  font: inherit;
}

.form-input:focus {
  outline: none;
  border-color: var(--brand-purple);
  box-shadow: 0 0 0 1px var(--brand-purple);
}

.form-status {
  font-size: 0.875rem;
  color: var(--success);
}

.form-status.error {
  color: var(--error);
}

/* Admin placeholder and not found */
.admin-stub,
.not-found {
  padding: calc(var(--header-height) + var(--space-12)) var(--space-4) var(--space-24);
  text-align: center;
}

.admin-stub p,
.not-found p {
  color: var(--text-tertiary);
  margin: var(--space-2) 0 var(--space-8);
}

.not-found code {
  color: var(--text-brand);
}
"#;
