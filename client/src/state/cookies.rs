//! Persisted key-value storage for the admin session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store only ever talks to `CookieJar`. In the browser that is
//! `document.cookie`; tests and non-browser callers use `MemoryCookieJar`.
//! SSR renders have no jar at all, which callers model as `None`.

#[cfg(test)]
#[path = "cookies_test.rs"]
mod cookies_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

pub use cookie::SameSite;
use cookie::Cookie;
use cookie::time::Duration;

/// Cookie holding the opaque bearer token.
pub const TOKEN_COOKIE: &str = "auth_token";
/// Cookie holding the JSON-serialized `UserProfile`.
pub const USER_COOKIE: &str = "auth_user";
pub const SESSION_COOKIE_DAYS: u32 = 7;

/// Expiry and scope attributes applied when writing or removing a cookie.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CookieOptions {
    /// Lifetime in days; `None` writes a browser-session cookie.
    pub expires_days: Option<u32>,
    pub path: String,
    pub same_site: Option<SameSite>,
}

impl CookieOptions {
    /// Options used for both session cookies: 7 days, whole site, same-site lax.
    #[must_use]
    pub fn session() -> Self {
        Self {
            expires_days: Some(SESSION_COOKIE_DAYS),
            path: "/".to_owned(),
            same_site: Some(SameSite::Lax),
        }
    }

    /// Scope-only options for removal; the path must match the one written.
    #[must_use]
    pub fn site_wide() -> Self {
        Self { expires_days: None, path: "/".to_owned(), same_site: None }
    }
}

/// Minimal persisted key-value interface with cookie semantics.
pub trait CookieJar: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str, options: &CookieOptions);
    fn remove(&self, key: &str, options: &CookieOptions);
}

pub type SharedCookieJar = Arc<dyn CookieJar>;

/// Remove both session cookies.
pub fn clear_session_cookies(jar: &dyn CookieJar) {
    let options = CookieOptions::site_wide();
    jar.remove(TOKEN_COOKIE, &options);
    jar.remove(USER_COOKIE, &options);
}

// =============================================================================
// In-memory jar
// =============================================================================

#[derive(Clone, Debug)]
struct StoredCookie {
    value: String,
    options: CookieOptions,
}

/// Process-local jar. Removal honours the path scope like a browser does.
#[derive(Debug, Default)]
pub struct MemoryCookieJar {
    entries: Mutex<HashMap<String, StoredCookie>>,
}

impl MemoryCookieJar {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options the cookie at `key` was last written with.
    #[must_use]
    pub fn options(&self, key: &str) -> Option<CookieOptions> {
        self.lock().get(key).map(|c| c.options.clone())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, StoredCookie>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CookieJar for MemoryCookieJar {
    fn get(&self, key: &str) -> Option<String> {
        self.lock().get(key).map(|c| c.value.clone())
    }

    fn set(&self, key: &str, value: &str, options: &CookieOptions) {
        self.lock()
            .insert(key.to_owned(), StoredCookie { value: value.to_owned(), options: options.clone() });
    }

    fn remove(&self, key: &str, options: &CookieOptions) {
        let mut entries = self.lock();
        if entries.get(key).is_some_and(|c| c.options.path == options.path) {
            entries.remove(key);
        }
    }
}

// =============================================================================
// document.cookie encoding
// =============================================================================

/// Build a `document.cookie` assignment that writes `key`.
#[must_use]
pub fn format_set_cookie(key: &str, value: &str, options: &CookieOptions) -> String {
    let mut builder = Cookie::build((key, value)).path(options.path.as_str());
    if let Some(days) = options.expires_days {
        builder = builder.max_age(Duration::days(i64::from(days)));
    }
    if let Some(same_site) = options.same_site {
        builder = builder.same_site(same_site);
    }
    builder.build().encoded().to_string()
}

/// Build a `document.cookie` assignment that expires `key` immediately.
#[must_use]
pub fn format_remove_cookie(key: &str, options: &CookieOptions) -> String {
    Cookie::build((key, ""))
        .path(options.path.as_str())
        .max_age(Duration::ZERO)
        .build()
        .encoded()
        .to_string()
}

/// Find `key` in a `document.cookie` string and percent-decode its value.
/// Malformed pairs are skipped.
#[must_use]
pub fn parse_cookie(raw: &str, key: &str) -> Option<String> {
    Cookie::split_parse_encoded(raw)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == key)
        .map(|cookie| cookie.value().to_owned())
}

// =============================================================================
// Browser jar
// =============================================================================

/// Jar backed by `document.cookie`.
#[cfg(feature = "hydrate")]
#[derive(Debug, Default)]
pub struct BrowserCookieJar;

#[cfg(feature = "hydrate")]
impl BrowserCookieJar {
    fn document() -> Option<web_sys::HtmlDocument> {
        use wasm_bindgen::JsCast;
        web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
    }
}

#[cfg(feature = "hydrate")]
impl CookieJar for BrowserCookieJar {
    fn get(&self, key: &str) -> Option<String> {
        let raw = Self::document()?.cookie().ok()?;
        parse_cookie(&raw, key)
    }

    fn set(&self, key: &str, value: &str, options: &CookieOptions) {
        if let Some(doc) = Self::document() {
            let _ = doc.set_cookie(&format_set_cookie(key, value, options));
        }
    }

    fn remove(&self, key: &str, options: &CookieOptions) {
        if let Some(doc) = Self::document() {
            let _ = doc.set_cookie(&format_remove_cookie(key, options));
        }
    }
}

/// The jar for the current execution context: `document.cookie` in the
/// browser, `None` during SSR where no persisted storage exists.
#[must_use]
pub fn browser_cookie_jar() -> Option<SharedCookieJar> {
    #[cfg(feature = "hydrate")]
    {
        BrowserCookieJar::document()?;
        Some(Arc::new(BrowserCookieJar))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
