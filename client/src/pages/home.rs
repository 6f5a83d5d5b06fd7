//! Public landing page: featured products, latest posts, FAQs.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use super::or_empty;
use crate::components::cards::{ArticleCard, ProductCard};
use crate::net::api;
use crate::net::http::ApiClient;
use crate::net::types::{Article, Faq, Product};
use crate::state::session::SessionStore;

pub const FEATURED_PRODUCTS: u32 = 3;
pub const LATEST_ARTICLES_PATH: &str = "/articles?limit=3&status=published";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct HomeContent {
    pub products: Vec<Product>,
    pub articles: Vec<Article>,
    pub faqs: Vec<Faq>,
}

/// Fetch all three sections concurrently; a failed section renders empty.
pub async fn load_home(client: &ApiClient) -> HomeContent {
    let (products, articles, faqs) = futures::join!(
        api::list_products(client, Some(FEATURED_PRODUCTS)),
        api::list_articles_at(client, LATEST_ARTICLES_PATH),
        api::list_faqs(client),
    );
    HomeContent {
        products: or_empty("featured products", products),
        articles: or_empty("latest articles", articles.map(|page| page.items)),
        faqs: or_empty("faqs", faqs),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let content = RwSignal::new(None::<HomeContent>);
    let open_faq = RwSignal::new(None::<u64>);

    Effect::new(move |_| {
        let client = session.client().clone();
        leptos::task::spawn_local(async move {
            content.set(Some(load_home(&client).await));
        });
    });

    let products = move || content.get().map(|c| c.products).unwrap_or_default();
    let articles = move || content.get().map(|c| c.articles).unwrap_or_default();
    let faqs = move || content.get().map(|c| c.faqs).unwrap_or_default();

    view! {
        <section class="hero">
            <h1 class="hero__title">"Handcrafted pieces for everyday living"</h1>
            <p class="hero__subtitle">"Henart Design makes small-batch decor and gifts by hand."</p>
            <div class="hero__actions">
                <a class="button" href="/products">"Browse products"</a>
                <a class="button button--outline" href="/blog">"Read the blog"</a>
            </div>
        </section>

        <section class="home-section">
            <header class="home-section__header">
                <h2>"Featured products"</h2>
                <a href="/products">"View all"</a>
            </header>
            <Show when=move || content.get().is_some() fallback=|| view! { <p class="muted">"Loading..."</p> }>
                <div class="card-grid">
                    <For each=products key=|p| p.id let:product>
                        <ProductCard product=product/>
                    </For>
                </div>
            </Show>
        </section>

        <section class="home-section">
            <header class="home-section__header">
                <h2>"From the blog"</h2>
                <a href="/blog">"All articles"</a>
            </header>
            <div class="card-grid">
                <For each=articles key=|a| a.id let:article>
                    <ArticleCard article=article/>
                </For>
            </div>
        </section>

        <section class="home-section faq">
            <h2>"Frequently asked questions"</h2>
            <For each=faqs key=|f| f.id let:faq>
                {
                    let id = faq.id;
                    let answer = faq.answer;
                    view! {
                        <div class="faq__item" class:faq__item--open=move || open_faq.get() == Some(id)>
                            <button
                                class="faq__question"
                                on:click=move |_| {
                                    open_faq.update(|open| *open = if *open == Some(id) { None } else { Some(id) });
                                }
                            >
                                {faq.question}
                            </button>
                            <Show when=move || open_faq.get() == Some(id)>
                                <p class="faq__answer">{answer.clone()}</p>
                            </Show>
                        </div>
                    }
                }
            </For>
        </section>
    }
}
