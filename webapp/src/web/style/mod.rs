use constcat::concat;

mod components;
mod home;
mod pages;
mod variables;

pub use components::BASE_COMPONENTS;
pub use home::HOME_STYLES;
pub use pages::PAGE_STYLES;
pub use variables::CSS_VARIABLES;

pub const SITE_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.5;
}

a {
  color: inherit;
  text-decoration: none;
}

::selection {
  background: var(--brand-purple);
  color: var(--text-primary);
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    r#"
/* Navigation shell */
.site-header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 50;
  background: transparent;
  transition: all var(--transition-normal) var(--easing-standard);
}

.site-header.elevated {
  background: rgba(5, 5, 7, 0.8);
  backdrop-filter: blur(24px);
  border-bottom: 1px solid var(--border);
}

.nav-container {
  display: flex;
  height: var(--header-height);
  align-items: center;
  justify-content: space-between;
  max-width: var(--content-width);
  margin: 0 auto;
  padding: 0 var(--space-6);
}

.logo {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  font-size: 1.5rem;
  font-weight: 700;
  letter-spacing: -0.04em;
}

.logo-mark {
  color: var(--brand-purple);
}

.nav-links {
  display: flex;
  align-items: center;
  gap: var(--space-6);
}

.nav-link {
  color: var(--text-secondary);
  font-size: 0.875rem;
  font-weight: 500;
  transition: color var(--transition-fast) var(--easing-standard);
}

.nav-link:hover {
  color: var(--brand-purple);
}

.nav-link.active {
  color: var(--text-primary);
}

.nav-cta {
  padding: var(--space-2) var(--space-6);
  border-radius: var(--radius-full);
  font-size: 0.875rem;
}

.menu-toggle {
  display: none;
  background: none;
  border: none;
  color: var(--text-secondary);
  font-size: 1.5rem;
  cursor: pointer;
}

.mobile-menu {
  display: none;
  flex-direction: column;
  gap: var(--space-2);
  padding: var(--space-2) var(--space-4) var(--space-6);
  background: var(--background);
  border-bottom: 1px solid var(--border);
}

.mobile-link {
  display: block;
  padding: var(--space-3);
  border-radius: var(--radius-md);
  color: var(--text-secondary);
}

.mobile-link.active,
.mobile-link:hover {
  color: var(--text-primary);
  background: rgba(255, 255, 255, 0.05);
}

.mobile-cta {
  margin-top: var(--space-4);
  text-align: center;
  background: var(--brand-purple);
  color: var(--text-primary);
  font-weight: 700;
}

@media (max-width: 1024px) {
  .nav-links {
    display: none;
  }

  .menu-toggle {
    display: inline-flex;
  }

  .mobile-menu {
    display: flex;
  }
}

.site-footer {
  background: var(--surface-footer);
  border-top: 1px solid var(--border);
  padding: var(--space-16) 0 var(--space-8);
}

.footer-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
  gap: var(--space-12);
  margin-bottom: var(--space-16);
}

.footer-tagline {
  color: var(--text-secondary);
  font-size: 0.875rem;
  max-width: 20rem;
  margin: var(--space-6) 0;
}

.socials {
  display: flex;
  gap: var(--space-4);
}

.social-link {
  width: 2.5rem;
  height: 2.5rem;
  border-radius: var(--radius-full);
  background: rgba(255, 255, 255, 0.05);
  display: flex;
  align-items: center;
  justify-content: center;
  color: var(--text-secondary);
  font-size: 0.75rem;
  font-weight: 700;
}

.social-link:hover {
  background: var(--brand-purple);
  color: var(--text-primary);
}

.footer-group h4 {
  font-weight: 700;
  margin-bottom: var(--space-6);
}

.footer-links {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: var(--space-3);
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.footer-links a:hover {
  color: var(--brand-purple);
}

.footer-bottom {
  border-top: 1px solid var(--border);
  padding-top: var(--space-8);
  display: flex;
  flex-wrap: wrap;
  justify-content: space-between;
  gap: var(--space-4);
  font-size: 0.875rem;
  color: var(--text-tertiary);
}

.footer-legal {
  display: flex;
  gap: var(--space-6);
}

.site-error {
  max-width: 40rem;
  margin: var(--space-24) auto;
  padding: var(--space-8);
  border: 1px solid var(--error);
  border-radius: var(--radius-lg);
}

.site-error pre {
  white-space: pre-wrap;
  color: var(--error);
  margin-top: var(--space-4);
}
"#,
    PAGE_STYLES
);
