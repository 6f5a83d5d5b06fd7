use serde_json::json;

use super::*;
use crate::net::http::Method;
use crate::test_support::Harness;

#[test]
fn endpoints_format_expected_paths() {
    assert_eq!(article_endpoint("merajut-101"), "/articles/merajut-101");
    assert_eq!(article_endpoint("a b"), "/articles/a%20b");
    assert_eq!(article_restore_endpoint(5), "/articles/5/restore");
    assert_eq!(product_endpoint(9), "/products/9");
    assert_eq!(products_endpoint(Some(3)), "/products?limit=3");
    assert_eq!(products_endpoint(None), "/products");
    assert_eq!(category_endpoint(2), "/categories/2");
    assert_eq!(related_articles_endpoint(4), "/articles?category_id=4&limit=3");
}

#[tokio::test]
async fn login_posts_credentials_and_unwraps_payload() {
    let h = Harness::at("/admin/login");
    h.transport.respond(
        Method::Post,
        "/login",
        200,
        json!({ "data": { "user": { "name": "Admin", "email": "admin@henart.test" }, "token": "t-1" } }),
    );

    let payload = login(&h.client, "admin@henart.test", "password123").await.unwrap();
    assert_eq!(payload.token, "t-1");
    assert_eq!(
        h.transport.last_sent().json(),
        Some(&json!({ "email": "admin@henart.test", "password": "password123" }))
    );
}

#[tokio::test]
async fn list_articles_sends_listing_query() {
    let h = Harness::at("/admin/articles");
    let mut query = ListingQuery::new();
    query.set_filter("status", "draft");
    h.transport.respond(
        Method::Get,
        "/articles?page=1&status=draft",
        200,
        json!({ "data": { "data": [{ "id": 1, "title": "Draft", "status": "draft" }], "current_page": 1, "last_page": 2, "total": 11 } }),
    );

    let page = list_articles(&h.client, &query).await.unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.info.last_page, 2);
    assert_eq!(page.info.total, 11);
}

#[tokio::test]
async fn list_products_accepts_bare_arrays() {
    let h = Harness::at("/");
    h.transport.respond(
        Method::Get,
        "/products?limit=3",
        200,
        json!({ "data": [{ "id": 1, "name": "Vas" }, { "id": 2, "name": "Tas" }] }),
    );
    let products = list_products(&h.client, Some(3)).await.unwrap();
    assert_eq!(products.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(), vec!["Vas", "Tas"]);
}

#[tokio::test]
async fn category_mutations_hit_expected_routes() {
    let h = Harness::at("/admin/categories");
    h.transport.respond(Method::Post, "/categories", 201, json!({ "data": { "id": 3, "name": "Keramik" } }));
    h.transport.respond(Method::Put, "/categories/3", 200, json!({ "data": { "id": 3, "name": "Gerabah" } }));
    h.transport.respond(Method::Delete, "/categories/3", 204, serde_json::Value::Null);

    create_category(&h.client, "Keramik").await.unwrap();
    update_category(&h.client, 3, "Gerabah").await.unwrap();
    delete_category(&h.client, 3).await.unwrap();

    let sent = h.transport.sent();
    assert_eq!(sent.len(), 3);
    assert_eq!(sent[1].json(), Some(&json!({ "name": "Gerabah" })));
    assert_eq!(sent[2].method, Method::Delete);
}

#[tokio::test]
async fn dashboard_stats_and_faqs_decode() {
    let h = Harness::at("/admin/dashboard");
    h.transport.respond(Method::Get, "/dashboard/stats", 200, json!({ "data": { "totalArticles": 4 } }));
    h.transport.respond(
        Method::Get,
        "/faqs",
        200,
        json!({ "data": [{ "id": 1, "question": "Custom order?", "answer": "Yes" }] }),
    );

    assert_eq!(fetch_dashboard_stats(&h.client).await.unwrap().total_articles, 4);
    assert_eq!(list_faqs(&h.client).await.unwrap()[0].answer, "Yes");
}

#[tokio::test]
async fn restore_article_posts_to_restore_route() {
    let h = Harness::at("/admin/articles");
    h.transport.respond(Method::Post, "/articles/8/restore", 200, json!({ "message": "Restored" }));
    restore_article(&h.client, 8).await.unwrap();
    assert_eq!(h.transport.last_sent().url, "http://api.test/articles/8/restore");
}

#[tokio::test]
async fn fetch_product_unwraps_single_product() {
    let h = Harness::at("/products/7");
    h.transport.respond(
        Method::Get,
        "/products/7",
        200,
        json!({ "data": { "id": 7, "name": "Vas Bambu", "description": "Anyaman", "image": "products/7.png" } }),
    );

    let product = fetch_product(&h.client, 7).await.unwrap();
    assert_eq!(product.name, "Vas Bambu");
    assert_eq!(product.image.as_deref(), Some("products/7.png"));
}

#[tokio::test]
async fn fetch_product_missing_is_http_error() {
    let h = Harness::at("/products/99");
    h.transport.respond(Method::Get, "/products/99", 404, json!({ "message": "Not found" }));

    let err = fetch_product(&h.client, 99).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn product_mutations_send_multipart_forms() {
    let h = Harness::at("/admin/products");
    h.transport.respond(Method::Post, "/products", 201, json!({ "data": { "id": 5 } }));
    h.transport.respond(Method::Post, "/products/5", 200, json!({ "data": { "id": 5 } }));
    h.transport.respond(Method::Delete, "/products/5", 204, serde_json::Value::Null);

    create_product(&h.client, MultipartForm::new().text("name", "Tas")).await.unwrap();
    update_product(&h.client, 5, MultipartForm::new().text("name", "Tas Rotan")).await.unwrap();
    delete_product(&h.client, 5).await.unwrap();

    let sent = h.transport.sent();
    assert_eq!(sent[0].form().and_then(|f| f.text_value("_method")), None);
    let update = sent[1].form().unwrap();
    assert_eq!(update.text_value("name"), Some("Tas Rotan"));
    assert_eq!(update.text_value("_method"), Some("PUT"));
    assert_eq!(sent[2].method, Method::Delete);
}

#[tokio::test]
async fn update_article_posts_with_method_override() {
    let h = Harness::at("/admin/articles/edit/8");
    h.transport.respond(Method::Post, "/articles/8", 200, json!({ "data": { "id": 8, "title": "T" } }));

    update_article(&h.client, 8, MultipartForm::new().text("title", "T")).await.unwrap();
    let sent = h.transport.last_sent();
    assert_eq!(sent.method, Method::Post);
    assert_eq!(sent.form().and_then(|f| f.text_value("_method")), Some("PUT"));
}

#[tokio::test]
async fn related_articles_exclude_the_current_post() {
    let h = Harness::at("/blog/merajut");
    h.transport.respond(
        Method::Get,
        "/articles?category_id=2&limit=3",
        200,
        json!({ "data": { "data": [{ "id": 1, "title": "Merajut" }, { "id": 3, "title": "Menganyam" }] } }),
    );
    let article: Article = serde_json::from_value(json!({ "id": 1, "title": "Merajut", "category_id": 2 })).unwrap();

    let related = list_related_articles(&h.client, &article).await.unwrap();
    assert_eq!(related.iter().map(|a| a.id).collect::<Vec<_>>(), vec![3]);
}

#[tokio::test]
async fn uncategorized_articles_have_no_related_posts() {
    let h = Harness::at("/blog/merajut");
    let article: Article = serde_json::from_value(json!({ "id": 1, "title": "Merajut" })).unwrap();

    assert!(list_related_articles(&h.client, &article).await.unwrap().is_empty());
    assert!(h.transport.sent().is_empty());
}
