use constcat::concat;

mod components;
mod loader;
mod page;
mod variables;

pub use loader::LOADER_STYLES;

use components::BASE_COMPONENTS;
use page::PAGE_STYLES;
use variables::CSS_VARIABLES;

// everything except the startup overlay, bundled into one stylesheet
pub const SITE_STYLES: &str = concat!(
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

img, svg, iframe {
  display: block;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    PAGE_STYLES
);
