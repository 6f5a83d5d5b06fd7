//! Client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment, so the API and asset base
//! URLs are baked in with `option_env!` when the crate is compiled. The SSR
//! build reads the same values so server and browser render identical URLs.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api";
pub const DEFAULT_STORAGE_URL: &str = "http://127.0.0.1:8000/storage";

/// Path prefix shared by every back-office route.
pub const ADMIN_PREFIX: &str = "/admin";
pub const ADMIN_LOGIN_PATH: &str = "/admin/login";
pub const ADMIN_HOME_PATH: &str = "/admin/dashboard";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL every API path is appended to, without a trailing slash.
    pub api_base_url: String,
    /// Base URL stored file paths are resolved against.
    pub storage_base_url: String,
    pub admin_prefix: String,
    pub login_path: String,
}

impl ClientConfig {
    /// Build config from `HENART_API_URL` / `HENART_STORAGE_URL` captured at
    /// compile time, falling back to the local development API.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("HENART_API_URL"), option_env!("HENART_STORAGE_URL"))
    }

    #[must_use]
    pub fn from_values(api_url: Option<&str>, storage_url: Option<&str>) -> Self {
        Self {
            api_base_url: normalize_base_url(api_url, DEFAULT_API_URL),
            storage_base_url: normalize_base_url(storage_url, DEFAULT_STORAGE_URL),
            admin_prefix: ADMIN_PREFIX.to_owned(),
            login_path: ADMIN_LOGIN_PATH.to_owned(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

fn normalize_base_url(raw: Option<&str>, default: &str) -> String {
    let value = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(default);
    value.trim_end_matches('/').to_owned()
}
