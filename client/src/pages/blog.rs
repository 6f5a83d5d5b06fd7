//! Public blog: published-article listing and the single-article view.
//!
//! The listing keeps one `ListingQuery` in a signal; the fetch effect tracks
//! it, so search, category and page changes all refetch through one path.

#[cfg(test)]
#[path = "blog_test.rs"]
mod blog_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use super::or_empty;
use crate::components::cards::{ArticleCard, image_src};
use crate::components::pagination::Pagination;
use crate::config::ClientConfig;
use crate::net::api;
use crate::net::types::{Article, Category, Page};
use crate::state::listing::ListingQuery;
use crate::state::session::SessionStore;

pub const CATEGORY_FILTER: &str = "category_id";

/// Listing state for the public blog: published articles only.
#[must_use]
pub fn blog_query() -> ListingQuery {
    ListingQuery::new().with_fixed("status", "published")
}

#[component]
pub fn BlogPage() -> impl IntoView {
    let client = expect_context::<SessionStore>().client().clone();
    let query = RwSignal::new(blog_query());
    let page = RwSignal::new(None::<Page<Article>>);
    let categories = RwSignal::new(Vec::<Category>::new());
    let error = RwSignal::new(None::<String>);

    let categories_client = client.clone();
    Effect::new(move |_| {
        let client = categories_client.clone();
        leptos::task::spawn_local(async move {
            categories.set(or_empty("categories", api::list_categories(&client).await));
        });
    });

    Effect::new(move |_| {
        let requested = query.get();
        let client = client.clone();
        leptos::task::spawn_local(async move {
            let result = api::list_articles(&client, &requested).await;
            // A newer query superseded this one while it was in flight.
            if query.get_untracked() != requested {
                return;
            }
            match result {
                Ok(loaded) => {
                    page.set(Some(loaded));
                    error.set(None);
                }
                Err(e) => error.set(Some(e.user_message("Failed to load articles"))),
            }
        });
    });

    let info = Signal::derive(move || page.get().map(|p| p.info).unwrap_or_default());
    let on_page = Callback::new(move |n: u32| query.update(|q| q.go_to(n, &info.get_untracked())));
    let articles = move || page.get().map(|p| p.items).unwrap_or_default();

    view! {
        <section class="page-header">
            <h1>"Blog"</h1>
            <p>"Stories, tutorials and news from the Henart workshop."</p>
        </section>
        <div class="listing-filters">
            <input
                class="listing-filters__search"
                type="search"
                placeholder="Search articles..."
                prop:value=move || query.get().search
                on:input=move |ev| query.update(|q| q.set_search(&event_target_value(&ev)))
            />
            <select
                class="listing-filters__select"
                on:change=move |ev| query.update(|q| q.set_filter(CATEGORY_FILTER, &event_target_value(&ev)))
            >
                <option value="">"All categories"</option>
                <For each=move || categories.get() key=|c| c.id let:category>
                    <option value=category.id.to_string()>{category.name}</option>
                </For>
            </select>
        </div>
        <Show when=move || error.get().is_some()>
            <p class="notice notice--error">{move || error.get().unwrap_or_default()}</p>
        </Show>
        <Show
            when=move || page.get().is_some()
            fallback=|| view! { <p class="muted">"Loading articles..."</p> }
        >
            <Show
                when=move || !articles().is_empty()
                fallback=|| view! { <p class="muted">"No articles found."</p> }
            >
                <div class="card-grid">
                    <For each=articles key=|a| a.id let:article>
                        <ArticleCard article=article/>
                    </For>
                </div>
            </Show>
            <Pagination info=info on_page=on_page numbered=true/>
        </Show>
    }
}

#[component]
pub fn BlogPostPage() -> impl IntoView {
    let client = expect_context::<SessionStore>().client().clone();
    let config = expect_context::<ClientConfig>();
    let params = use_params_map();
    let article = RwSignal::new(None::<Article>);
    let related = RwSignal::new(Vec::<Article>::new());
    let error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        let key = params.read().get("slug").unwrap_or_default();
        let client = client.clone();
        leptos::task::spawn_local(async move {
            match api::fetch_article(&client, &key).await {
                Ok(loaded) => {
                    related.set(or_empty("related articles", api::list_related_articles(&client, &loaded).await));
                    article.set(Some(loaded));
                }
                Err(e) => error.set(Some(e.user_message("Article not found"))),
            }
        });
    });

    view! {
        <a class="back-link" href="/blog">"← Back to blog"</a>
        <Show when=move || error.get().is_some()>
            <p class="notice notice--error">{move || error.get().unwrap_or_default()}</p>
        </Show>
        {move || {
            article
                .get()
                .map(|a| {
                    let src = image_src(&config.storage_base_url, a.thumbnail.as_deref(), a.id);
                    view! {
                        <article class="post">
                            <span class="post__category">{a.category_name().to_owned()}</span>
                            <h1 class="post__title">{a.title.clone()}</h1>
                            <p class="post__meta">
                                {a.author_name().to_owned()}
                                " · "
                                {a.display_date().to_owned()}
                            </p>
                            <img class="post__image" src=src alt=a.title.clone()/>
                            <div class="post__content" inner_html=a.content.clone().unwrap_or_default()></div>
                        </article>
                    }
                })
        }}
        <Show when=move || !related.get().is_empty()>
            <section class="section">
                <h2>"Related Articles"</h2>
                <div class="card-grid">
                    <For each=move || related.get() key=|a| a.id let:article>
                        <ArticleCard article=article/>
                    </For>
                </div>
            </section>
        </Show>
    }
}
