use serde_json::json;

use super::*;
use crate::net::error::ApiError;
use crate::net::http::Method;
use crate::test_support::Harness;

#[tokio::test]
async fn load_home_fills_every_section() {
    let h = Harness::at("/");
    h.transport.respond(Method::Get, "/products?limit=3", 200, json!({ "data": [{ "id": 1, "name": "Vas" }] }));
    h.transport.respond(
        Method::Get,
        LATEST_ARTICLES_PATH,
        200,
        json!({ "data": { "data": [{ "id": 7, "title": "Merajut" }], "current_page": 1, "last_page": 1, "total": 1 } }),
    );
    h.transport.respond(Method::Get, "/faqs", 200, json!({ "data": [{ "id": 2, "question": "Ship?", "answer": "Yes" }] }));

    let content = load_home(&h.client).await;
    assert_eq!(content.products.len(), 1);
    assert_eq!(content.articles[0].title, "Merajut");
    assert_eq!(content.faqs[0].answer, "Yes");
}

#[tokio::test]
async fn load_home_degrades_failed_sections_to_empty() {
    let h = Harness::at("/");
    h.transport.respond(Method::Get, "/products?limit=3", 500, json!({ "message": "boom" }));
    h.transport.fail(Method::Get, LATEST_ARTICLES_PATH);
    h.transport.respond(Method::Get, "/faqs", 200, json!({ "data": [{ "id": 2, "question": "Ship?", "answer": "Yes" }] }));

    let content = load_home(&h.client).await;
    assert!(content.products.is_empty());
    assert!(content.articles.is_empty());
    assert_eq!(content.faqs.len(), 1);
}

#[test]
fn or_empty_passes_successes_through() {
    assert_eq!(crate::pages::or_empty("n", Ok::<_, ApiError>(vec![1, 2])), vec![1, 2]);
    let failed: Result<Vec<u8>, ApiError> = Err(ApiError::Network("down".to_owned()));
    assert!(crate::pages::or_empty("n", failed).is_empty());
}
