use serde_json::json;

use super::*;
use crate::net::http::Method;
use crate::test_support::Harness;

fn draft(name: &str, description: &str) -> ProductDraft {
    ProductDraft { name: name.to_owned(), description: description.to_owned() }
}

fn png() -> Upload {
    Upload { file_name: "vas.png".to_owned(), content_type: "image/png".to_owned(), bytes: vec![137, 80] }
}

#[test]
fn blank_names_are_rejected() {
    assert_eq!(product_form(&draft("  ", "Anyaman"), None), Err("Product name is required"));
}

#[test]
fn form_trims_text_and_attaches_picked_image() {
    let form = product_form(&draft(" Vas Bambu ", " Anyaman tangan "), Some(png())).unwrap();
    assert_eq!(form.text_value("name"), Some("Vas Bambu"));
    assert_eq!(form.text_value("description"), Some("Anyaman tangan"));
    assert_eq!(form.file_value("image"), Some(&png()));
}

#[test]
fn form_without_new_image_keeps_the_current_one() {
    let form = product_form(&draft("Vas", ""), None).unwrap();
    assert_eq!(form.file_value("image"), None);
    assert_eq!(form.text_value("description"), Some(""));
}

#[test]
fn draft_prefills_from_existing_product() {
    let product = Product {
        id: 2,
        name: "Tas Rotan".to_owned(),
        slug: None,
        description: None,
        image: Some("products/2.png".to_owned()),
    };
    assert_eq!(ProductDraft::from_product(&product), draft("Tas Rotan", ""));
}

#[tokio::test]
async fn save_without_target_creates() {
    let h = Harness::at("/admin/products");
    h.transport.respond(Method::Post, "/products", 201, json!({ "data": { "id": 4, "name": "Vas" } }));

    let form = product_form(&draft("Vas", ""), Some(png())).unwrap();
    assert_eq!(save_product(&h.client, None, form).await.unwrap(), "Product created successfully!");
    let sent = h.transport.last_sent();
    assert_eq!(sent.header("Content-Type"), None);
    assert_eq!(sent.form().and_then(|f| f.file_value("image")), Some(&png()));
}

#[tokio::test]
async fn save_with_target_updates_through_method_override() {
    let h = Harness::at("/admin/products");
    h.transport.respond(Method::Post, "/products/4", 200, json!({ "data": { "id": 4, "name": "Vas" } }));

    let form = product_form(&draft("Vas", "Baru"), None).unwrap();
    assert_eq!(save_product(&h.client, Some(4), form).await.unwrap(), "Product updated successfully!");
    assert_eq!(h.transport.last_sent().form().and_then(|f| f.text_value("_method")), Some("PUT"));
}

#[tokio::test]
async fn save_failure_surfaces_server_message() {
    let h = Harness::at("/admin/products");
    h.transport.respond(Method::Post, "/products", 422, json!({ "message": "The image must be an image." }));

    let form = product_form(&draft("Vas", ""), None).unwrap();
    let err = save_product(&h.client, None, form).await.unwrap_err();
    assert_eq!(err.user_message("Failed to save product"), "The image must be an image.");
}
