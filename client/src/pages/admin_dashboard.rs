//! Admin overview: stat tiles and the five most recent articles.

#[cfg(test)]
#[path = "admin_dashboard_test.rs"]
mod admin_dashboard_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::http::ApiClient;
use crate::net::types::{Article, DashboardStats};
use crate::state::session::SessionStore;

pub const RECENT_ARTICLES_PATH: &str = "/articles?per_page=5";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardContent {
    pub stats: DashboardStats,
    pub recent: Vec<Article>,
}

/// Stats and recent articles together; either failing fails the load.
///
/// # Errors
///
/// Returns the first API error.
pub async fn load_dashboard(client: &ApiClient) -> Result<DashboardContent, ApiError> {
    let (stats, recent) = futures::try_join!(
        api::fetch_dashboard_stats(client),
        api::list_articles_at(client, RECENT_ARTICLES_PATH),
    )?;
    Ok(DashboardContent { stats, recent: recent.items })
}

/// `(label, value)` tiles in display order.
#[must_use]
pub fn stat_tiles(stats: &DashboardStats) -> [(&'static str, u64); 6] {
    [
        ("Total Blogs", stats.total_articles),
        ("Published", stats.published_articles),
        ("Draft", stats.draft_articles),
        ("Categories", stats.total_categories),
        ("Products", stats.total_products),
        ("Total Views", stats.total_impressions),
    ]
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let client = expect_context::<SessionStore>().client().clone();
    let content = RwSignal::new(DashboardContent::default());
    let loading = RwSignal::new(true);

    Effect::new(move |_| {
        let client = client.clone();
        leptos::task::spawn_local(async move {
            match load_dashboard(&client).await {
                Ok(loaded) => content.set(loaded),
                Err(e) => log::warn!("dashboard load failed: {e}"),
            }
            loading.set(false);
        });
    });

    view! {
        <div class="stat-grid">
            {move || {
                stat_tiles(&content.get().stats)
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="stat-tile">
                                <p class="stat-tile__label">{label}</p>
                                <p class="stat-tile__value">{value}</p>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
        <section class="panel">
            <header class="panel__header">
                <h2>"Recent Blogs"</h2>
                <a href="/admin/articles">"View all"</a>
            </header>
            <Show when=move || !loading.get() fallback=|| view! { <p class="muted">"Loading..."</p> }>
                <Show
                    when=move || !content.get().recent.is_empty()
                    fallback=|| view! { <p class="muted">"No blogs yet."</p> }
                >
                    <ul class="recent-list">
                        <For each=move || content.get().recent key=|a| a.id let:article>
                            <li class="recent-list__item">
                                <span class="recent-list__title">{article.title.clone()}</span>
                                <span class=format!("status-badge status-badge--{}", article.status.as_str())>
                                    {article.status.as_str()}
                                </span>
                                <span class="recent-list__date">{article.display_date().to_owned()}</span>
                            </li>
                        </For>
                    </ul>
                </Show>
            </Show>
        </section>
    }
}
