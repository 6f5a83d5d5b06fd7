use super::*;

#[test]
fn default_query_is_first_page_only() {
    assert_eq!(ListingQuery::new().to_query_string(), "page=1");
}

#[test]
fn query_string_orders_and_encodes_pairs() {
    let mut query = ListingQuery::new().with_fixed("status", "published");
    query.set_search("tas rajut & co");
    query.set_filter("category_id", "4");
    assert_eq!(
        query.to_query_string(),
        "page=1&status=published&search=tas%20rajut%20%26%20co&category_id=4"
    );
    assert_eq!(query.path("/articles"), format!("/articles?{}", query.to_query_string()));
}

#[test]
fn blank_search_is_not_sent() {
    let mut query = ListingQuery::new();
    query.set_search("   ");
    assert_eq!(query.to_query_string(), "page=1");
}

#[test]
fn search_change_resets_page() {
    let mut query = ListingQuery::new();
    query.page = 3;
    query.set_search("vase");
    assert_eq!(query.page, 1);

    query.page = 2;
    query.set_search("vase");
    assert_eq!(query.page, 2, "unchanged search keeps the page");
}

#[test]
fn filter_change_resets_page_and_empty_value_clears() {
    let mut query = ListingQuery::new();
    query.set_filter("status", "draft");
    query.page = 4;
    query.set_filter("status", "trash");
    assert_eq!(query.page, 1);
    assert_eq!(query.filter("status"), Some("trash"));

    query.set_filter("status", "");
    assert_eq!(query.filter("status"), None);
    assert_eq!(query.to_query_string(), "page=1");
}

#[test]
fn go_to_clamps_to_known_pages() {
    let info = PageInfo { current_page: 1, last_page: 3, total: 30 };
    let mut query = ListingQuery::new();
    query.go_to(5, &info);
    assert_eq!(query.page, 3);
    query.go_to(0, &info);
    assert_eq!(query.page, 1);
    query.go_to(2, &info);
    assert_eq!(query.page, 2);
}
