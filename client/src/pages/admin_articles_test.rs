use serde_json::json;

use super::*;
use crate::net::http::Method;
use crate::test_support::Harness;

#[test]
fn only_trashed_articles_offer_restore() {
    assert_eq!(row_action(ArticleStatus::Trash), RowAction::Restore);
    assert_eq!(row_action(ArticleStatus::Published), RowAction::Delete);
    assert_eq!(row_action(ArticleStatus::Draft), RowAction::Delete);
}

#[test]
fn status_tabs_drive_the_status_filter() {
    let mut query = ListingQuery::new();
    query.set_filter(STATUS_FILTER, STATUS_TABS[4].1);
    assert_eq!(query.path("/articles"), "/articles?page=1&status=trash");

    query.set_filter(STATUS_FILTER, STATUS_TABS[0].1);
    assert_eq!(query.filter(STATUS_FILTER), None);
    assert_eq!(query.path("/articles"), "/articles?page=1");
}

#[tokio::test]
async fn delete_action_sends_delete() {
    let h = Harness::at("/admin/articles");
    h.transport.respond(Method::Delete, "/articles/5", 200, json!({ "message": "Deleted" }));

    let text = apply_row_action(&h.client, RowAction::Delete, 5).await.unwrap();
    assert_eq!(text, "Article deleted successfully");
    assert_eq!(h.transport.last_sent().method, Method::Delete);
}

#[tokio::test]
async fn restore_action_posts_to_restore_endpoint() {
    let h = Harness::at("/admin/articles");
    h.transport.respond(Method::Post, "/articles/5/restore", 200, json!({ "message": "Restored" }));

    let text = apply_row_action(&h.client, RowAction::Restore, 5).await.unwrap();
    assert_eq!(text, "Article restored successfully");
    assert_eq!(h.transport.last_sent().url, "http://api.test/articles/5/restore");
}

#[tokio::test]
async fn failed_action_keeps_server_message() {
    let h = Harness::at("/admin/articles");
    h.transport.respond(Method::Delete, "/articles/5", 403, json!({ "message": "Forbidden" }));

    let err = apply_row_action(&h.client, RowAction::Delete, 5).await.unwrap_err();
    assert_eq!(err.user_message(failure_text(RowAction::Delete)), "Forbidden");
    assert!(h.navigator.assigned().is_empty());
}
