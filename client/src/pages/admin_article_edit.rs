//! Admin article editor: load one article, edit its fields and thumbnail,
//! and save it back as a multipart update.

#[cfg(test)]
#[path = "admin_article_edit_test.rs"]
mod admin_article_edit_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::or_empty;
use crate::components::cards::image_src;
use crate::components::notice::{Notice, NoticeBanner};
use crate::config::ClientConfig;
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::http::{ApiClient, MultipartForm, Upload};
use crate::net::types::{Article, ArticleStatus, Category};
use crate::state::session::SessionStore;
use crate::util::upload::pick_image;

pub const ARTICLES_PATH: &str = "/admin/articles";
const REQUIRED_FIELDS: &str = "Please fill in all required fields";

/// Statuses offered by the editor, in display order.
pub const EDITABLE_STATUSES: [ArticleStatus; 3] =
    [ArticleStatus::Draft, ArticleStatus::Published, ArticleStatus::Scheduled];

#[must_use]
pub fn edit_article_href(id: u64) -> String {
    format!("{ARTICLES_PATH}/edit/{id}")
}

/// Trim an API timestamp to the `YYYY-MM-DDTHH:MM` a datetime-local input
/// accepts. Both `T` and space separators are understood.
#[must_use]
pub fn datetime_local(raw: &str) -> String {
    let raw = raw.trim();
    raw.get(..16).unwrap_or(raw).replacen(' ', "T", 1)
}

/// Editable statuses by their wire name; anything else falls back to draft.
#[must_use]
pub fn parse_status(value: &str) -> ArticleStatus {
    EDITABLE_STATUSES
        .into_iter()
        .find(|status| status.as_str() == value)
        .unwrap_or(ArticleStatus::Draft)
}

/// Form state of the editor. `category_id` holds the select's raw value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArticleDraft {
    pub title: String,
    pub category_id: String,
    pub excerpt: String,
    pub content: String,
    pub status: ArticleStatus,
    pub published_at: String,
}

impl ArticleDraft {
    #[must_use]
    pub fn from_article(article: &Article) -> Self {
        let status = if EDITABLE_STATUSES.contains(&article.status) { article.status } else { ArticleStatus::Draft };
        Self {
            title: article.title.clone(),
            category_id: article.category_id.map(|id| id.to_string()).unwrap_or_default(),
            excerpt: article.excerpt.clone().unwrap_or_default(),
            content: article.content.clone().unwrap_or_default(),
            status,
            published_at: article.published_at.as_deref().map(datetime_local).unwrap_or_default(),
        }
    }
}

/// Multipart update body. Publishing without a date stamps it with `now`;
/// the thumbnail is only sent when a new one was picked.
///
/// # Errors
///
/// Returns a user-facing message when title, category or content is blank.
pub fn article_form(draft: &ArticleDraft, thumbnail: Option<Upload>, now: &str) -> Result<MultipartForm, &'static str> {
    let title = draft.title.trim();
    let category_id = draft.category_id.trim();
    if title.is_empty() || category_id.is_empty() || draft.content.trim().is_empty() {
        return Err(REQUIRED_FIELDS);
    }

    let mut form = MultipartForm::new()
        .text("title", title)
        .text("category_id", category_id)
        .text("excerpt", draft.excerpt.trim())
        .text("content", draft.content.as_str())
        .text("status", draft.status.as_str());
    let published_at = draft.published_at.trim();
    if !published_at.is_empty() {
        form = form.text("published_at", published_at);
    } else if draft.status == ArticleStatus::Published && !now.is_empty() {
        form = form.text("published_at", now);
    }
    if let Some(upload) = thumbnail {
        form = form.file("thumbnail", upload);
    }
    Ok(form)
}

/// What the editor needs on mount.
#[derive(Clone, Debug, PartialEq)]
pub struct ArticleEditor {
    pub article: Article,
    pub categories: Vec<Category>,
}

/// Fetch the article and the category choices together. Missing categories
/// leave the select empty; a missing article is an error.
///
/// # Errors
///
/// Returns the API error from the article fetch.
pub async fn load_editor(client: &ApiClient, id: u64) -> Result<ArticleEditor, ApiError> {
    let id = id.to_string();
    let (article, categories) =
        futures::join!(api::fetch_article(client, &id), api::list_categories(client));
    Ok(ArticleEditor { article: article?, categories: or_empty("categories", categories) })
}

fn now_iso() -> String {
    #[cfg(feature = "hydrate")]
    {
        String::from(js_sys::Date::new_0().to_iso_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

#[component]
pub fn AdminArticleEditPage() -> impl IntoView {
    let client = expect_context::<SessionStore>().client().clone();
    let storage_base = StoredValue::new(expect_context::<ClientConfig>().storage_base_url);
    let params = use_params_map();
    let navigate = use_navigate();
    let article = RwSignal::new(None::<Article>);
    let categories = RwSignal::new(Vec::<Category>::new());
    let draft = RwSignal::new(ArticleDraft::default());
    let thumbnail = RwSignal::new(None::<Upload>);
    let notice = RwSignal::new(None::<Notice>);
    let busy = RwSignal::new(false);

    let article_id = move || params.read().get("id").and_then(|id| id.parse::<u64>().ok());

    let load_client = client.clone();
    let load_navigate = navigate.clone();
    Effect::new(move |_| {
        let id = article_id();
        let client = load_client.clone();
        let navigate = load_navigate.clone();
        leptos::task::spawn_local(async move {
            let loaded = match id {
                Some(id) => load_editor(&client, id).await,
                None => Err(ApiError::Http { status: 404, payload: serde_json::Value::Null }),
            };
            match loaded {
                Ok(editor) => {
                    draft.set(ArticleDraft::from_article(&editor.article));
                    categories.set(editor.categories);
                    article.set(Some(editor.article));
                }
                Err(e) => {
                    log::warn!("Failed to load article: {e}");
                    navigate(ARTICLES_PATH, NavigateOptions::default());
                }
            }
        });
    });

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = article.get_untracked().map(|a| a.id) else {
            return;
        };
        let form = match article_form(&draft.get_untracked(), thumbnail.get_untracked(), &now_iso()) {
            Ok(form) => form,
            Err(message) => {
                notice.set(Some(Notice::Error(message.to_owned())));
                return;
            }
        };
        busy.set(true);
        let client = client.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::update_article(&client, id, form).await {
                Ok(()) => {
                    log::info!("Blog updated successfully!");
                    navigate(ARTICLES_PATH, NavigateOptions::default());
                }
                Err(e) => notice.set(Some(Notice::Error(e.user_message("Failed to update blog")))),
            }
            busy.set(false);
        });
    };

    let edit = move |apply: fn(&mut ArticleDraft, String), value: String| draft.update(|d| apply(d, value));
    let current_thumbnail = move || {
        let current = article.get()?;
        let path = current.thumbnail?;
        Some(storage_base.with_value(|base| image_src(base, Some(&path), current.id)))
    };

    view! {
        <div class="admin-page">
            <header class="admin-page__header">
                <div>
                    <a class="back-link" href=ARTICLES_PATH>"← Back to blogs"</a>
                    <h2>"Edit Blog"</h2>
                </div>
            </header>
            <NoticeBanner notice=notice/>
            <Show when=move || article.get().is_some() fallback=|| view! { <p class="muted">"Loading..."</p> }>
                <form class="panel editor" on:submit=on_save.clone()>
                    <label for="article-title">"Title *"</label>
                    <input
                        id="article-title"
                        type="text"
                        prop:value=move || draft.get().title
                        on:input=move |ev| edit(|d, v| d.title = v, event_target_value(&ev))
                    />
                    <label for="article-excerpt">"Excerpt"</label>
                    <textarea
                        id="article-excerpt"
                        rows="3"
                        prop:value=move || draft.get().excerpt
                        on:input=move |ev| edit(|d, v| d.excerpt = v, event_target_value(&ev))
                    ></textarea>
                    <label for="article-content">"Content *"</label>
                    <textarea
                        id="article-content"
                        rows="16"
                        prop:value=move || draft.get().content
                        on:input=move |ev| edit(|d, v| d.content = v, event_target_value(&ev))
                    ></textarea>
                    <label for="article-status">"Status"</label>
                    <select
                        id="article-status"
                        on:change=move |ev| edit(|d, v| d.status = parse_status(&v), event_target_value(&ev))
                    >
                        {EDITABLE_STATUSES
                            .into_iter()
                            .map(|status| {
                                view! {
                                    <option value=status.as_str() selected=move || draft.get().status == status>
                                        {status.as_str()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                    <Show when=move || draft.get().status == ArticleStatus::Scheduled>
                        <label for="article-published-at">"Publish at"</label>
                        <input
                            id="article-published-at"
                            type="datetime-local"
                            prop:value=move || draft.get().published_at
                            on:input=move |ev| edit(|d, v| d.published_at = v, event_target_value(&ev))
                        />
                    </Show>
                    <label for="article-category">"Category *"</label>
                    <select
                        id="article-category"
                        on:change=move |ev| edit(|d, v| d.category_id = v, event_target_value(&ev))
                    >
                        <option value="">"Select category"</option>
                        <For each=move || categories.get() key=|c| c.id let:category>
                            {
                                let value = category.id.to_string();
                                let selected = value.clone();
                                view! {
                                    <option value=value selected=move || draft.get().category_id == selected>
                                        {category.name}
                                    </option>
                                }
                            }
                        </For>
                    </select>
                    <label for="article-thumbnail">"Thumbnail"</label>
                    {move || {
                        current_thumbnail()
                            .filter(|_| thumbnail.get().is_none())
                            .map(|src| view! { <img class="editor__preview" src=src alt="Current thumbnail"/> })
                    }}
                    <input
                        id="article-thumbnail"
                        type="file"
                        accept="image/*"
                        on:change=move |ev| pick_image(&ev, thumbnail, notice)
                    />
                    <div class="editor__actions">
                        <a class="button button--outline" href=ARTICLES_PATH>"Cancel"</a>
                        <button class="button" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Saving..." } else { "Update Blog" }}
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}
