//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, listing state,
//! notifications) and delegates rendering details to `components`. Loads run
//! inside effects, so the server renders the empty shell and the browser
//! fills it in after hydration.

pub mod about;
pub mod admin_article_edit;
pub mod admin_articles;
pub mod admin_categories;
pub mod admin_dashboard;
pub mod admin_login;
pub mod admin_products;
pub mod admin_profile;
pub mod blog;
pub mod contact;
pub mod home;
pub mod products;

use crate::net::error::ApiError;

/// Public sections degrade to empty content instead of an error banner.
pub(crate) fn or_empty<T: Default>(what: &str, result: Result<T, ApiError>) -> T {
    result.unwrap_or_else(|e| {
        log::warn!("failed to load {what}: {e}");
        T::default()
    })
}
