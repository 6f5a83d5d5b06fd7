use super::*;

const BASE: &str = "http://127.0.0.1:8000/storage";

#[test]
fn stored_image_resolves_against_storage() {
    assert_eq!(
        image_src(BASE, Some("/products/vase.jpg"), 3),
        "http://127.0.0.1:8000/storage/products/vase.jpg"
    );
}

#[test]
fn absolute_image_url_passes_through() {
    assert_eq!(image_src(BASE, Some("https://cdn.test/a.png"), 3), "https://cdn.test/a.png");
}

#[test]
fn missing_or_blank_image_uses_placeholder() {
    assert_eq!(image_src(BASE, None, 3), placeholder_image(3));
    assert_eq!(image_src(BASE, Some("  "), 9), placeholder_image(9));
}

#[test]
fn product_cards_link_to_detail_page() {
    assert_eq!(product_href(14), "/products/14");
}
