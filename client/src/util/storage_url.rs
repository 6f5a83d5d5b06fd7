//! Resolve stored-file paths (thumbnails, product images) to fetchable URLs.

#[cfg(test)]
#[path = "storage_url_test.rs"]
mod storage_url_test;

/// Join `path` onto the asset base URL.
///
/// Empty paths resolve to an empty string, absolute `http(s)` URLs pass
/// through, and a leading `/` is dropped so the result has no `//`.
#[must_use]
pub fn storage_url(base: &str, path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }
    if path.starts_with("http") {
        return path.to_owned();
    }
    let clean = path.strip_prefix('/').unwrap_or(path);
    format!("{}/{clean}", base.trim_end_matches('/'))
}
