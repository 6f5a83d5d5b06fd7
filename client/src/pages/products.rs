//! Public product catalogue with a client-side search box, and the
//! single-product page.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use super::contact::whatsapp_url;
use super::or_empty;
use crate::components::cards::{ProductCard, image_src};
use crate::config::ClientConfig;
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::http::ApiClient;
use crate::net::types::Product;
use crate::state::session::SessionStore;

pub const OTHER_PRODUCTS_LIMIT: usize = 4;
const DEFAULT_DESCRIPTION: &str =
    "A beautifully handcrafted eco-friendly art piece made from recycled materials by our skilled artisans in Bali.";

#[must_use]
pub fn filter_products(products: &[Product], search: &str) -> Vec<Product> {
    products.iter().filter(|p| p.matches(search)).cloned().collect()
}

#[component]
pub fn ProductsPage() -> impl IntoView {
    let client = expect_context::<SessionStore>().client().clone();
    let products = RwSignal::new(None::<Vec<Product>>);
    let error = RwSignal::new(None::<String>);
    let search = RwSignal::new(String::new());

    Effect::new(move |_| {
        let client = client.clone();
        leptos::task::spawn_local(async move {
            match api::list_products(&client, None).await {
                Ok(loaded) => products.set(Some(loaded)),
                Err(e) => {
                    error.set(Some(e.user_message("Failed to load products")));
                    products.set(Some(Vec::new()));
                }
            }
        });
    });

    let visible = move || filter_products(&products.get().unwrap_or_default(), &search.get());

    view! {
        <section class="page-header">
            <h1>"Products"</h1>
            <p>"Handmade decor, bags and gifts from our workshop."</p>
        </section>
        <div class="listing-filters">
            <input
                class="listing-filters__search"
                type="search"
                placeholder="Search products..."
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />
        </div>
        <Show when=move || error.get().is_some()>
            <p class="notice notice--error">{move || error.get().unwrap_or_default()}</p>
        </Show>
        <Show
            when=move || products.get().is_some()
            fallback=|| view! { <p class="muted">"Loading products..."</p> }
        >
            <Show when=move || !visible().is_empty() fallback=|| view! { <p class="muted">"No products found."</p> }>
                <div class="card-grid">
                    <For each=visible key=|p| p.id let:product>
                        <ProductCard product=product/>
                    </For>
                </div>
            </Show>
        </Show>
    }
}

/// Up to four products other than `id`, in catalogue order.
#[must_use]
pub fn other_products(all: Vec<Product>, id: u64) -> Vec<Product> {
    all.into_iter().filter(|p| p.id != id).take(OTHER_PRODUCTS_LIMIT).collect()
}

/// Prefilled WhatsApp chat asking about `name`.
#[must_use]
pub fn whatsapp_order_url(name: &str) -> String {
    whatsapp_url(&format!("Hi, I'm interested in the product: {name}"))
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProductDetail {
    pub product: Product,
    pub others: Vec<Product>,
}

/// Fetch the product and the catalogue together; the "other products" strip
/// renders empty when the catalogue fails.
///
/// # Errors
///
/// Returns the API error from the product fetch.
pub async fn load_product_detail(client: &ApiClient, id: u64) -> Result<ProductDetail, ApiError> {
    let (product, all) = futures::join!(api::fetch_product(client, id), api::list_products(client, None));
    Ok(ProductDetail { product: product?, others: other_products(or_empty("other products", all), id) })
}

#[component]
pub fn ProductDetailPage() -> impl IntoView {
    let client = expect_context::<SessionStore>().client().clone();
    let config = expect_context::<ClientConfig>();
    let params = use_params_map();
    let detail = RwSignal::new(None::<ProductDetail>);
    let missing = RwSignal::new(false);

    Effect::new(move |_| {
        let id = params.read().get("id").and_then(|id| id.parse::<u64>().ok());
        let client = client.clone();
        leptos::task::spawn_local(async move {
            let Some(id) = id else {
                missing.set(true);
                return;
            };
            match load_product_detail(&client, id).await {
                Ok(loaded) => {
                    detail.set(Some(loaded));
                    missing.set(false);
                }
                Err(e) => {
                    log::warn!("product {id} failed to load: {e}");
                    missing.set(true);
                }
            }
        });
    });

    view! {
        <a class="back-link" href="/products">"← Back to Products"</a>
        <Show when=move || missing.get()>
            <section class="page-header">
                <h2>"Product Not Found"</h2>
            </section>
        </Show>
        {move || {
            detail
                .get()
                .map(|ProductDetail { product, others }| {
                    let src = image_src(&config.storage_base_url, product.image.as_deref(), product.id);
                    let description = product.description.clone().unwrap_or_else(|| DEFAULT_DESCRIPTION.to_owned());
                    view! {
                        <section class="product-detail">
                            <img class="product-detail__image" src=src alt=product.name.clone()/>
                            <div class="product-detail__info">
                                <span class="product-detail__badge">"Eco-Friendly · Handcrafted"</span>
                                <h1>{product.name.clone()}</h1>
                                <p>{description}</p>
                                <div class="product-detail__actions">
                                    <a
                                        class="button"
                                        href=whatsapp_order_url(&product.name)
                                        target="_blank"
                                        rel="noopener noreferrer"
                                    >
                                        "Order via WhatsApp"
                                    </a>
                                    <a class="button button--outline" href="/contact">
                                        "Contact Us"
                                    </a>
                                </div>
                            </div>
                        </section>
                        {(!others.is_empty())
                            .then(|| {
                                view! {
                                    <section class="section">
                                        <h2>"Other Products"</h2>
                                        <div class="card-grid">
                                            {others.into_iter().map(|p| view! { <ProductCard product=p/> }).collect_view()}
                                        </div>
                                    </section>
                                }
                            })}
                    }
                })
        }}
    }
}
