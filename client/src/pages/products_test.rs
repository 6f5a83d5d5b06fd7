use serde_json::json;

use super::*;
use crate::net::http::Method;
use crate::test_support::Harness;

fn product(id: u64, name: &str, description: &str) -> Product {
    Product {
        id,
        name: name.to_owned(),
        slug: None,
        description: Some(description.to_owned()),
        image: None,
    }
}

#[test]
fn filter_matches_name_or_description_case_insensitively() {
    let all = vec![
        product(1, "Vas Rotan", "Anyaman rotan"),
        product(2, "Tas Rajut", "Tas tangan"),
        product(3, "Lampu", "Kap lampu ROTAN"),
    ];
    let ids: Vec<u64> = filter_products(&all, "rotan").iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn blank_search_keeps_everything() {
    let all = vec![product(1, "Vas", ""), product(2, "Tas", "")];
    assert_eq!(filter_products(&all, "   ").len(), 2);
}

#[test]
fn other_products_skip_current_and_cap_at_four() {
    let all: Vec<Product> = (1..=7).map(|id| product(id, "P", "")).collect();
    let ids: Vec<u64> = other_products(all, 2).iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 3, 4, 5]);
}

#[test]
fn order_link_prefills_product_name() {
    assert_eq!(
        whatsapp_order_url("Vas Rotan"),
        "https://wa.me/6281246034451?text=Hi%2C%20I%27m%20interested%20in%20the%20product%3A%20Vas%20Rotan"
    );
}

#[tokio::test]
async fn detail_loads_product_and_others() {
    let h = Harness::at("/products/2");
    h.transport.respond(Method::Get, "/products/2", 200, json!({ "data": { "id": 2, "name": "Tas Rajut" } }));
    h.transport.respond(
        Method::Get,
        "/products",
        200,
        json!({ "data": [{ "id": 1, "name": "Vas" }, { "id": 2, "name": "Tas Rajut" }, { "id": 3, "name": "Lampu" }] }),
    );

    let detail = load_product_detail(&h.client, 2).await.unwrap();
    assert_eq!(detail.product.name, "Tas Rajut");
    assert_eq!(detail.others.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 3]);
}

#[tokio::test]
async fn detail_survives_catalogue_failure() {
    let h = Harness::at("/products/2");
    h.transport.respond(Method::Get, "/products/2", 200, json!({ "data": { "id": 2, "name": "Tas Rajut" } }));
    h.transport.fail(Method::Get, "/products");

    assert!(load_product_detail(&h.client, 2).await.unwrap().others.is_empty());
}

#[tokio::test]
async fn missing_product_is_an_error() {
    let h = Harness::at("/products/404");
    h.transport.respond(Method::Get, "/products/404", 404, json!({ "message": "Not found" }));
    h.transport.respond(Method::Get, "/products", 200, json!({ "data": [] }));

    assert_eq!(load_product_detail(&h.client, 404).await.unwrap_err().status(), Some(404));
}
