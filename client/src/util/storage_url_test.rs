use super::*;

const BASE: &str = "http://host/storage";

#[test]
fn relative_path_is_joined() {
    assert_eq!(storage_url(BASE, "foo/bar.png"), "http://host/storage/foo/bar.png");
}

#[test]
fn absolute_url_passes_through() {
    assert_eq!(storage_url(BASE, "https://cdn.example.com/a.png"), "https://cdn.example.com/a.png");
    assert_eq!(storage_url(BASE, "http://other/b.png"), "http://other/b.png");
}

#[test]
fn leading_slash_does_not_double() {
    let url = storage_url(BASE, "/foo/bar.png");
    assert_eq!(url, "http://host/storage/foo/bar.png");
    assert!(!url.trim_start_matches("http://").contains("//"));
}

#[test]
fn trailing_slash_on_base_does_not_double() {
    assert_eq!(storage_url("http://host/storage/", "a.png"), "http://host/storage/a.png");
}

#[test]
fn empty_path_is_empty() {
    assert_eq!(storage_url(BASE, ""), "");
}
