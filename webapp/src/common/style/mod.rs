use constcat::concat;

mod landing;
mod variables;

pub use landing::LANDING_STYLES;
pub use variables::{CSS_VARIABLES, DARK_VARIABLES};

// everything that does not depend on configuration
pub const MODERN_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  line-height: 1.5;
}

a {
  color: inherit;
  text-decoration: none;
}
"#,
    CSS_VARIABLES,
    LANDING_STYLES
);

// dark overrides for the configured root marker
pub fn dark_styles(marker: &str) -> String {
    DARK_VARIABLES.replace("{marker}", marker)
}
