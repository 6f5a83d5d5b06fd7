//! Wire DTOs for the REST API.
//!
//! DESIGN
//! ======
//! Every payload arrives wrapped as `{ "data": ... }`. List endpoints either
//! return a bare array or a paginator object, so `ListPayload` accepts both
//! and callers normalize through `into_page`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// The signed-in admin as returned by `/login` and `/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl UserProfile {
    /// Avatar letter shown in the admin top bar.
    #[must_use]
    pub fn initial(&self) -> char {
        self.name.chars().next().map_or('U', |c| c.to_ascii_uppercase())
    }
}

/// Standard `{ data, message? }` response wrapper.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// `data` of a successful `POST /login`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthPayload {
    pub user: UserProfile,
    pub token: String,
}

// =============================================================================
// Pagination
// =============================================================================

/// Paginator metadata for list views.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub current_page: u32,
    pub last_page: u32,
    pub total: u64,
}

impl Default for PageInfo {
    fn default() -> Self {
        Self { current_page: 1, last_page: 1, total: 0 }
    }
}

/// Rows per page used by the API's paginators.
pub const PAGE_SIZE: u64 = 10;

impl PageInfo {
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current_page < self.last_page
    }

    /// 1-based `(first, last)` row numbers on the current page.
    #[must_use]
    pub fn showing_range(&self) -> (u64, u64) {
        if self.total == 0 {
            return (0, 0);
        }
        let current = u64::from(self.current_page.max(1));
        let first = (current - 1) * PAGE_SIZE + 1;
        (first.min(self.total), (current * PAGE_SIZE).min(self.total))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub info: PageInfo,
}

/// Paginator object as serialized by the API.
#[derive(Clone, Debug, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    #[serde(default = "first_page")]
    pub current_page: u32,
    #[serde(default = "first_page")]
    pub last_page: u32,
    #[serde(default)]
    pub total: u64,
}

fn first_page() -> u32 {
    1
}

/// A list endpoint's `data`: either a paginator object or a bare array.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    Paged(Paginated<T>),
    Bare(Vec<T>),
}

impl<T> ListPayload<T> {
    #[must_use]
    pub fn into_page(self) -> Page<T> {
        match self {
            Self::Paged(p) => Page {
                items: p.data,
                info: PageInfo {
                    current_page: p.current_page.max(1),
                    last_page: p.last_page.max(1),
                    total: p.total,
                },
            },
            Self::Bare(items) => {
                let total = items.len() as u64;
                Page { items, info: PageInfo { total, ..PageInfo::default() } }
            }
        }
    }
}

// =============================================================================
// Content
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    Published,
    Scheduled,
    #[default]
    Draft,
    Trash,
    #[serde(other)]
    Unknown,
}

impl ArticleStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Published => "published",
            Self::Scheduled => "scheduled",
            Self::Draft => "draft",
            Self::Trash => "trash",
            Self::Unknown => "unknown",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    /// Storage-relative path; resolve with `storage_url`.
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub status: ArticleStatus,
    #[serde(default)]
    pub category_id: Option<u64>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default, deserialize_with = "deserialize_u64_lenient")]
    pub impressions: u64,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Article {
    #[must_use]
    pub fn author_name(&self) -> &str {
        self.author.as_ref().map_or("Admin", |a| a.name.as_str())
    }

    #[must_use]
    pub fn category_name(&self) -> &str {
        self.category.as_ref().map_or("Uncategorized", |c| c.name.as_str())
    }

    /// Date shown in listings: publish date, else creation date, `YYYY-MM-DD`.
    #[must_use]
    pub fn display_date(&self) -> &str {
        let raw = self.published_at.as_deref().or(self.created_at.as_deref()).unwrap_or("");
        raw.get(..10).unwrap_or(raw)
    }

    /// Public URL segment: slug when present, id otherwise.
    #[must_use]
    pub fn route_key(&self) -> String {
        self.slug.clone().unwrap_or_else(|| self.id.to_string())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl Product {
    /// Case-insensitive match on name or description.
    #[must_use]
    pub fn matches(&self, search: &str) -> bool {
        let needle = search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&needle)
            || self.description.as_deref().is_some_and(|d| d.to_lowercase().contains(&needle))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub id: u64,
    pub question: String,
    pub answer: String,
}

/// `data` of `GET /dashboard/stats`; absent counters read as zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_articles: u64,
    pub published_articles: u64,
    pub draft_articles: u64,
    pub total_categories: u64,
    pub total_products: u64,
    pub total_impressions: u64,
}

/// Bundled illustration used when a product or article has no image.
#[must_use]
pub fn placeholder_image(id: u64) -> String {
    format!("/Gambar/product/product ({}).svg", (id % 8) + 1)
}

/// Accept counters sent as numbers, numeric strings, or null.
fn deserialize_u64_lenient<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error as _;

    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(0),
        serde_json::Value::Number(n) => n.as_u64().ok_or_else(|| D::Error::custom("expected non-negative integer")),
        serde_json::Value::String(s) => s.trim().parse::<u64>().map_err(D::Error::custom),
        _ => Err(D::Error::custom("expected number")),
    }
}
