use serde_json::json;

use super::*;
use crate::net::http::Method;
use crate::test_support::Harness;

#[tokio::test]
async fn load_dashboard_combines_stats_and_recent() {
    let h = Harness::at("/admin/dashboard");
    h.transport.respond(
        Method::Get,
        "/dashboard/stats",
        200,
        json!({ "data": { "totalArticles": 12, "publishedArticles": 9, "totalImpressions": 480 } }),
    );
    h.transport.respond(
        Method::Get,
        RECENT_ARTICLES_PATH,
        200,
        json!({ "data": { "data": [{ "id": 3, "title": "Baru", "status": "draft" }], "current_page": 1, "last_page": 3, "total": 12 } }),
    );

    let content = load_dashboard(&h.client).await.unwrap();
    assert_eq!(content.stats.total_articles, 12);
    assert_eq!(content.stats.draft_articles, 0);
    assert_eq!(content.recent.len(), 1);
}

#[tokio::test]
async fn load_dashboard_fails_when_stats_fail() {
    let h = Harness::at("/admin/dashboard");
    h.transport.respond(Method::Get, "/dashboard/stats", 500, json!({ "message": "Server Error" }));
    h.transport.respond(Method::Get, RECENT_ARTICLES_PATH, 200, json!({ "data": [] }));

    let err = load_dashboard(&h.client).await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert!(h.navigator.assigned().is_empty());
}

#[test]
fn stat_tiles_follow_display_order() {
    let stats = DashboardStats { total_articles: 4, total_impressions: 99, ..DashboardStats::default() };
    let tiles = stat_tiles(&stats);
    assert_eq!(tiles[0], ("Total Blogs", 4));
    assert_eq!(tiles[5], ("Total Views", 99));
    assert_eq!(tiles.len(), 6);
}
