use super::*;

#[test]
fn nav_link_active_on_exact_and_nested_paths() {
    assert!(is_active("/admin/articles", "/admin/articles"));
    assert!(is_active("/admin/articles/edit/4", "/admin/articles"));
}

#[test]
fn nav_link_inactive_on_sibling_prefix() {
    assert!(!is_active("/admin/articles-archive", "/admin/articles"));
    assert!(!is_active("/admin/dashboard", "/admin/articles"));
}

#[test]
fn page_title_known_routes() {
    assert_eq!(page_title("/admin/dashboard"), "Dashboard Overview");
    assert_eq!(page_title("/admin/profile/"), "Profile Settings");
    assert_eq!(page_title("/admin/products"), "Products");
    assert_eq!(page_title("/admin/articles/edit/7"), "Edit Blog");
}

#[test]
fn products_screen_is_in_the_sidebar() {
    assert!(NAV_ITEMS.contains(&("Products", "/admin/products")));
}

#[test]
fn page_title_falls_back_to_dashboard() {
    assert_eq!(page_title("/admin/unknown"), "Dashboard");
}

#[test]
fn every_nav_item_lives_under_admin() {
    assert!(NAV_ITEMS.iter().all(|(_, href)| href.starts_with("/admin/")));
}
