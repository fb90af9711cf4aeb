use constcat::concat;

use crate::config::Theme;

pub mod header;
mod pages;

pub use header::header_styles;
pub use pages::PAGE_STYLES;

// Global resets and base styles
const RESET: &str = r#"
*,
*::before,
*::after {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html,
body {
  height: 100%;
}

body {
  font-family: 'Source Sans Pro', system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
  font-weight: 300;
  line-height: 1.2;
  overflow-x: hidden;
}

ol,
ul {
  list-style: none;
}

a {
  color: inherit;
  text-decoration: none;
}

input,
button {
  font: inherit;
  color: inherit;
  outline: none;
}
"#;

const LOGO_FLASH: &str = r#"
@keyframes logo-flash {
  0% { fill-opacity: 1; }
  50% { fill-opacity: 0; }
  100% { fill-opacity: 1; }
}
"#;

pub const GLOBAL_RESET: &str = concat!(RESET, LOGO_FLASH, PAGE_STYLES);

// the reset plus the few rules that need theme tokens
pub fn global_styles(theme: &Theme) -> String {
    format!(
        r#"{GLOBAL_RESET}
body {{
  color: {lighter};
  background-color: black;
}}
"#,
        lighter = theme.white.lighter,
    )
}
