use constcat::concat;

mod components;
mod site;
mod variables;

pub use components::BASE_COMPONENTS;
pub use site::SITE_STYLES;
pub use variables::CSS_VARIABLES;

// everything is bundled into one sheet injected by App
pub const MODERN_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html {
  scroll-padding-top: var(--header-height);
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.5;
  transition: background-color var(--transition-normal) var(--easing-standard),
  color var(--transition-normal) var(--easing-standard);
}

a {
  color: var(--primary);
  text-decoration: none;
}

a:hover {
  text-decoration: underline;
}

h2.section-title {
  font-size: 2rem;
  font-weight: 700;
  margin-bottom: var(--space-3);
  color: var(--text-primary);
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    SITE_STYLES
);
