//! Full-page navigation seam.
//!
//! The HTTP boundary needs to read `window.location` and force a reload on
//! 401 without depending on `web-sys` directly, so both go through
//! `Navigator`. Client-side (router) navigation stays with `use_navigate`.

use std::sync::Arc;

pub trait Navigator: Send + Sync {
    /// Current location path (`window.location.pathname`), if known.
    fn current_path(&self) -> Option<String>;
    /// Replace the document with `href` (full navigation, not router push).
    fn assign(&self, href: &str);
}

pub type SharedNavigator = Arc<dyn Navigator>;

/// `window.location` in the browser; inert during SSR.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn current_path(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()?.location().pathname().ok()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn assign(&self, href: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(href);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = href;
        }
    }
}
