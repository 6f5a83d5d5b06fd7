//! Page/search/filter state behind paginated list fetches.
//!
//! DESIGN
//! ======
//! Views keep one `ListingQuery` in a signal and refetch whenever it changes.
//! Any change that alters the result set (search text, a filter) snaps back
//! to page 1 so the user never lands on a page past the new end.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use crate::net::types::PageInfo;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingQuery {
    pub page: u32,
    pub search: String,
    /// Always-sent pairs, e.g. `status=published` on the public blog.
    fixed: Vec<(String, String)>,
    /// User-controlled filters; empty values are dropped.
    filters: Vec<(String, String)>,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self { page: 1, search: String::new(), fixed: Vec::new(), filters: Vec::new() }
    }
}

impl ListingQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_fixed(mut self, key: &str, value: &str) -> Self {
        self.fixed.push((key.to_owned(), value.to_owned()));
        self
    }

    pub fn set_search(&mut self, search: &str) {
        if self.search != search {
            search.clone_into(&mut self.search);
            self.page = 1;
        }
    }

    /// Set or clear (`value` empty) a filter and reset to page 1.
    pub fn set_filter(&mut self, key: &str, value: &str) {
        self.filters.retain(|(k, _)| k != key);
        if !value.is_empty() {
            self.filters.push((key.to_owned(), value.to_owned()));
        }
        self.page = 1;
    }

    #[must_use]
    pub fn filter(&self, key: &str) -> Option<&str> {
        self.filters.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// Move to `page`, clamped to the pages the last response reported.
    pub fn go_to(&mut self, page: u32, info: &PageInfo) {
        self.page = page.clamp(1, info.last_page.max(1));
    }

    /// `page=N` first, then fixed pairs, search, and filters; percent-encoded.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut pairs = vec![("page".to_owned(), self.page.to_string())];
        pairs.extend(self.fixed.iter().cloned());
        let search = self.search.trim();
        if !search.is_empty() {
            pairs.push(("search".to_owned(), search.to_owned()));
        }
        pairs.extend(self.filters.iter().cloned());

        pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// `base?query` for the API client.
    #[must_use]
    pub fn path(&self, base: &str) -> String {
        format!("{base}?{}", self.to_query_string())
    }
}
