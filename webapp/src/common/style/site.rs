pub const SITE_STYLES: &str = r#"
/* Page Styles */

section {
  padding: var(--space-16) 0;
}

.section-alt {
  background-color: var(--surface-muted);
}

.section-header {
  text-align: center;
  max-width: 720px;
  margin: 0 auto var(--space-10);
}

.section-header p {
  color: var(--text-secondary);
}

/* Navigation */
.site-header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  height: var(--header-height);
  background-color: var(--surface);
  box-shadow: var(--shadow-sm);
  z-index: 20;
}

.nav-container {
  display: flex;
  height: 100%;
  align-items: center;
  justify-content: space-between;
  gap: var(--space-4);
}

.brand {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  font-weight: 700;
  font-size: 1.25rem;
  color: var(--text-primary);
}

.nav-links {
  display: flex;
  align-items: center;
  gap: var(--space-2);
}

.nav-link {
  color: var(--text-secondary);
  font-weight: 500;
  padding: var(--space-2) var(--space-3);
  border-radius: var(--radius-md);
  transition: color var(--transition-fast) var(--easing-standard),
  background-color var(--transition-fast) var(--easing-standard);
}

.nav-link:hover {
  color: var(--text-primary);
  background-color: var(--surface-muted);
  text-decoration: none;
}

.nav-link.active {
  color: var(--primary);
  background-color: rgba(14, 165, 233, 0.1);
}

.nav-toggle {
  display: none;
}

@media (max-width: 900px) {
  .nav-toggle {
    display: inline-flex;
  }

  .nav-links {
    display: none;
    position: absolute;
    top: var(--header-height);
    left: 0;
    right: 0;
    flex-direction: column;
    background-color: var(--surface);
    padding: var(--space-4);
    box-shadow: var(--shadow-md);
  }

  .nav-links.open {
    display: flex;
  }
}

.page-content {
  padding-top: var(--header-height);
  min-height: 100vh;
}

/* Hero */
.hero {
  color: white;
  padding: var(--space-16) 0;
  text-align: center;
}

.hero.hero-light {
  background: linear-gradient(135deg, var(--primary-dark), var(--primary-light));
}

.hero.hero-dark {
  background: linear-gradient(135deg, #020617, var(--primary-dark));
}

.hero-title {
  font-size: 3.25rem;
  font-weight: 700;
  margin-bottom: var(--space-4);
  letter-spacing: -0.02em;
}

.hero-subtitle {
  font-size: 1.375rem;
  margin: 0 auto var(--space-8);
  max-width: 720px;
  opacity: 0.9;
}

.hero-actions {
  display: flex;
  gap: var(--space-4);
  justify-content: center;
  flex-wrap: wrap;
}

.stats-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
  gap: var(--space-6);
  margin-top: var(--space-12);
}

.stat-value {
  font-size: 2rem;
  font-weight: 700;
}

.stat-label {
  opacity: 0.85;
}

/* Feature, service and portfolio cards */
.card-icon {
  width: 48px;
  height: 48px;
  border-radius: var(--radius-full);
  background-color: rgba(14, 165, 233, 0.15);
  color: var(--primary);
  display: flex;
  align-items: center;
  justify-content: center;
  margin-bottom: var(--space-4);
  font-weight: 700;
}

.card-title {
  font-size: 1.125rem;
  font-weight: 600;
  margin-bottom: var(--space-2);
}

.card-text {
  color: var(--text-secondary);
}

.portfolio-card {
  padding: 0;
  overflow: hidden;
}

.portfolio-card img {
  width: 100%;
  aspect-ratio: 4/3;
  object-fit: cover;
  background-color: var(--surface-muted);
}

.portfolio-card .portfolio-info {
  padding: var(--space-4);
}

.badge {
  display: inline-block;
  font-size: 0.75rem;
  font-weight: 600;
  text-transform: uppercase;
  letter-spacing: 0.05em;
  color: var(--primary);
  margin-bottom: var(--space-2);
}

/* Testimonials */
.testimonial-quote {
  font-style: italic;
  margin-bottom: var(--space-4);
}

.testimonial-author {
  font-weight: 600;
}

.testimonial-role {
  color: var(--text-tertiary);
  font-size: 0.875rem;
}

/* Quote form */
.contact-layout {
  display: grid;
  grid-template-columns: 1fr 2fr;
  gap: var(--space-10);
}

@media (max-width: 900px) {
  .contact-layout {
    grid-template-columns: 1fr;
  }
}

.contact-details p {
  margin-bottom: var(--space-3);
  color: var(--text-secondary);
}

/* Pricing */
.tabs {
  display: flex;
  justify-content: center;
  gap: var(--space-2);
  margin-bottom: var(--space-8);
  flex-wrap: wrap;
}

.tab {
  padding: var(--space-2) var(--space-5);
  border-radius: var(--radius-full);
  border: 1px solid var(--border);
  background: transparent;
  color: var(--text-secondary);
  font: inherit;
  cursor: pointer;
}

.tab.selected {
  background-color: var(--primary);
  border-color: var(--primary);
  color: white;
}

.pricing-card.highlighted {
  border: 2px solid var(--accent);
  transform: scale(1.02);
}

.pricing-price {
  font-size: 2.25rem;
  font-weight: 700;
}

.pricing-unit {
  color: var(--text-tertiary);
  margin-left: var(--space-1);
}

.pricing-card ul {
  list-style: none;
  margin: var(--space-4) 0;
}

.pricing-card li {
  padding: var(--space-1) 0;
  color: var(--text-secondary);
}

.pricing-card li::before {
  content: "\2713";
  color: var(--success);
  margin-right: var(--space-2);
}

/* About */
.team-role {
  color: var(--primary);
  font-weight: 500;
  margin-bottom: var(--space-2);
}

/* Not found */
.not-found {
  text-align: center;
  padding: var(--space-16) 0;
}

/* Footer */
.site-footer {
  background-color: var(--neutral-900);
  color: var(--neutral-300);
  padding: var(--space-12) 0 var(--space-6);
}

.site-footer a {
  color: var(--neutral-300);
}

.footer-grid {
  display: grid;
  grid-template-columns: 2fr 1fr 1fr;
  gap: var(--space-8);
  margin-bottom: var(--space-8);
}

.footer-grid h4 {
  color: white;
  margin-bottom: var(--space-3);
}

.footer-grid ul {
  list-style: none;
}

.footer-grid li {
  margin-bottom: var(--space-2);
}

.footer-bottom {
  border-top: 1px solid var(--neutral-700);
  padding-top: var(--space-4);
  font-size: 0.875rem;
  text-align: center;
}
"#;
