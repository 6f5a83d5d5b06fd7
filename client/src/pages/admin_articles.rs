//! Admin blog management: search, status tabs, pagination, delete, restore.

#[cfg(test)]
#[path = "admin_articles_test.rs"]
mod admin_articles_test;

use leptos::prelude::*;

use crate::components::notice::{Notice, NoticeBanner};
use crate::components::pagination::Pagination;
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::http::ApiClient;
use crate::net::types::{Article, ArticleStatus, Page, PageInfo};
use crate::pages::admin_article_edit::edit_article_href;
use crate::state::listing::ListingQuery;
use crate::state::session::SessionStore;

pub const STATUS_FILTER: &str = "status";

/// `(label, status filter value)`; the empty value means every status.
pub const STATUS_TABS: [(&str, &str); 5] = [
    ("All", ""),
    ("Published", "published"),
    ("Scheduled", "scheduled"),
    ("Draft", "draft"),
    ("Trash", "trash"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowAction {
    Delete,
    Restore,
}

/// Trashed articles can only be restored; everything else can be deleted.
#[must_use]
pub fn row_action(status: ArticleStatus) -> RowAction {
    if status == ArticleStatus::Trash { RowAction::Restore } else { RowAction::Delete }
}

/// Run `action` on article `id` and return the confirmation text.
///
/// # Errors
///
/// Returns the API error from the delete or restore call.
pub async fn apply_row_action(client: &ApiClient, action: RowAction, id: u64) -> Result<&'static str, ApiError> {
    match action {
        RowAction::Delete => {
            api::delete_article(client, id).await?;
            Ok("Article deleted successfully")
        }
        RowAction::Restore => {
            api::restore_article(client, id).await?;
            Ok("Article restored successfully")
        }
    }
}

fn failure_text(action: RowAction) -> &'static str {
    match action {
        RowAction::Delete => "Failed to delete article",
        RowAction::Restore => "Failed to restore article",
    }
}

#[component]
pub fn AdminArticlesPage() -> impl IntoView {
    let client = expect_context::<SessionStore>().client().clone();
    let query = RwSignal::new(ListingQuery::new());
    let revision = RwSignal::new(0_u32);
    let page = RwSignal::new(None::<Page<Article>>);
    let notice = RwSignal::new(None::<Notice>);
    let pending_delete = RwSignal::new(None::<Article>);

    let list_client = client.clone();
    Effect::new(move |_| {
        revision.track();
        let requested = query.get();
        let client = list_client.clone();
        leptos::task::spawn_local(async move {
            let result = api::list_articles(&client, &requested).await;
            if query.get_untracked() != requested {
                return;
            }
            match result {
                Ok(loaded) => page.set(Some(loaded)),
                Err(e) => {
                    log::warn!("article listing failed: {e}");
                    notice.set(Some(Notice::Error("Failed to fetch articles".to_owned())));
                    page.set(Some(Page { items: Vec::new(), info: PageInfo::default() }));
                }
            }
        });
    });

    let run_action = Callback::new(move |(action, id): (RowAction, u64)| {
        let client = client.clone();
        leptos::task::spawn_local(async move {
            match apply_row_action(&client, action, id).await {
                Ok(text) => {
                    notice.set(Some(Notice::Success(text.to_owned())));
                    revision.update(|r| *r += 1);
                }
                Err(e) => {
                    log::warn!("article action failed: {e}");
                    notice.set(Some(Notice::Error(e.user_message(failure_text(action)))));
                }
            }
        });
    });

    let info = Signal::derive(move || page.get().map(|p| p.info).unwrap_or_default());
    let on_page = Callback::new(move |n: u32| query.update(|q| q.go_to(n, &info.get_untracked())));
    let articles = move || page.get().map(|p| p.items).unwrap_or_default();
    let active_status = move || query.with(|q| q.filter(STATUS_FILTER).unwrap_or_default().to_owned());

    view! {
        <div class="admin-page">
            <header class="admin-page__header">
                <h2>"Blogs"</h2>
                <p>"Manage your blogs"</p>
            </header>
            <NoticeBanner notice=notice/>
            <div class="panel">
                <input
                    class="listing-filters__search"
                    type="search"
                    placeholder="Search blogs..."
                    prop:value=move || query.get().search
                    on:input=move |ev| query.update(|q| q.set_search(&event_target_value(&ev)))
                />
                <nav class="tabs">
                    {STATUS_TABS
                        .into_iter()
                        .map(|(label, value)| {
                            view! {
                                <button
                                    class="tabs__tab"
                                    class:tabs__tab--active=move || active_status() == value
                                    on:click=move |_| query.update(|q| q.set_filter(STATUS_FILTER, value))
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
                <Show when=move || page.get().is_some() fallback=|| view! { <p class="muted">"Loading..."</p> }>
                    <Show when=move || !articles().is_empty() fallback=|| view! { <p class="muted">"No blogs found."</p> }>
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Title"</th>
                                    <th>"Category"</th>
                                    <th>"Status"</th>
                                    <th>"Views"</th>
                                    <th>"Date"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                <For each=articles key=|a| (a.id, a.status) let:article>
                                    <ArticleRow article=article run_action=run_action pending_delete=pending_delete/>
                                </For>
                            </tbody>
                        </table>
                        <Pagination info=info on_page=on_page/>
                    </Show>
                </Show>
            </div>
            {move || {
                pending_delete
                    .get()
                    .map(|article| {
                        let id = article.id;
                        view! {
                            <div class="modal" role="dialog" aria-modal="true">
                                <div class="modal__card">
                                    <h3>"Delete Blog"</h3>
                                    <p>
                                        {format!(
                                            "Are you sure you want to delete \"{}\"? This action cannot be undone.",
                                            article.title,
                                        )}
                                    </p>
                                    <div class="modal__actions">
                                        <button class="button button--outline" on:click=move |_| pending_delete.set(None)>
                                            "Cancel"
                                        </button>
                                        <button
                                            class="button button--danger"
                                            on:click=move |_| {
                                                pending_delete.set(None);
                                                run_action.run((RowAction::Delete, id));
                                            }
                                        >
                                            "Delete"
                                        </button>
                                    </div>
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn ArticleRow(
    article: Article,
    run_action: Callback<(RowAction, u64)>,
    pending_delete: RwSignal<Option<Article>>,
) -> impl IntoView {
    let action = row_action(article.status);
    let id = article.id;
    let badge = format!("status-badge status-badge--{}", article.status.as_str());
    let target = article.clone();

    view! {
        <tr>
            <td>{article.title.clone()}</td>
            <td>{article.category_name().to_owned()}</td>
            <td>
                <span class=badge>{article.status.as_str()}</span>
            </td>
            <td>{article.impressions}</td>
            <td>{article.display_date().to_owned()}</td>
            <td class="data-table__actions">
                <a class="link-button" href=edit_article_href(id)>"Edit"</a>
                {match action {
                    RowAction::Restore => {
                        view! {
                            <button class="link-button" on:click=move |_| run_action.run((RowAction::Restore, id))>
                                "Restore"
                            </button>
                        }
                            .into_any()
                    }
                    RowAction::Delete => {
                        view! {
                            <button
                                class="link-button link-button--danger"
                                on:click=move |_| pending_delete.set(Some(target.clone()))
                            >
                                "Delete"
                            </button>
                        }
                            .into_any()
                    }
                }}
            </td>
        </tr>
    }
}
