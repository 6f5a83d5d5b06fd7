//! Article and product cards shared by the home, blog and products pages.

#[cfg(test)]
#[path = "cards_test.rs"]
mod cards_test;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::types::{Article, Product, placeholder_image};
use crate::util::storage_url::storage_url;

/// Stored image when the record has one, bundled illustration otherwise.
#[must_use]
pub fn image_src(storage_base: &str, path: Option<&str>, id: u64) -> String {
    match path.map(str::trim).filter(|p| !p.is_empty()) {
        Some(path) => storage_url(storage_base, path),
        None => placeholder_image(id),
    }
}

#[must_use]
pub fn product_href(id: u64) -> String {
    format!("/products/{id}")
}

#[component]
pub fn ArticleCard(article: Article) -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let src = image_src(&config.storage_base_url, article.thumbnail.as_deref(), article.id);
    let href = format!("/blog/{}", article.route_key());
    let category = article.category_name().to_owned();
    let author = article.author_name().to_owned();
    let date = article.display_date().to_owned();

    view! {
        <article class="article-card">
            <a class="article-card__image" href=href.clone()>
                <img src=src alt=article.title.clone() loading="lazy"/>
            </a>
            <div class="article-card__body">
                <span class="article-card__category">{category}</span>
                <h3 class="article-card__title">
                    <a href=href>{article.title}</a>
                </h3>
                <p class="article-card__excerpt">{article.excerpt.unwrap_or_default()}</p>
                <p class="article-card__meta">{author} " · " {date}</p>
            </div>
        </article>
    }
}

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let src = image_src(&config.storage_base_url, product.image.as_deref(), product.id);
    let href = product_href(product.id);

    view! {
        <article class="product-card">
            <a href=href.clone()>
                <img class="product-card__image" src=src alt=product.name.clone() loading="lazy"/>
            </a>
            <div class="product-card__body">
                <h3 class="product-card__name">
                    <a href=href>{product.name}</a>
                </h3>
                <p class="product-card__description">{product.description.unwrap_or_default()}</p>
            </div>
        </article>
    }
}
