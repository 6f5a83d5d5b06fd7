//! Admin category management: filter, create, rename, delete.

#[cfg(test)]
#[path = "admin_categories_test.rs"]
mod admin_categories_test;

use leptos::prelude::*;

use crate::components::notice::{Notice, NoticeBanner};
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::http::ApiClient;
use crate::net::types::Category;
use crate::state::session::SessionStore;

/// Case-insensitive substring match on the name.
#[must_use]
pub fn filter_categories(categories: &[Category], search: &str) -> Vec<Category> {
    let needle = search.to_lowercase();
    categories.iter().filter(|c| c.name.to_lowercase().contains(&needle)).cloned().collect()
}

/// Trimmed name, or the message to show when it is blank.
///
/// # Errors
///
/// Returns a user-facing message for an empty name.
pub fn validate_category_name(name: &str) -> Result<String, &'static str> {
    let name = name.trim();
    if name.is_empty() { Err("Category name is required") } else { Ok(name.to_owned()) }
}

/// Create when `editing` is `None`, rename otherwise.
///
/// # Errors
///
/// Returns the API error from the create or update call.
pub async fn save_category(client: &ApiClient, editing: Option<u64>, name: &str) -> Result<&'static str, ApiError> {
    match editing {
        Some(id) => {
            api::update_category(client, id, name).await?;
            Ok("Category updated successfully!")
        }
        None => {
            api::create_category(client, name).await?;
            Ok("Category created successfully!")
        }
    }
}

/// Open create/rename dialog; `editing` is the category being renamed.
#[derive(Clone, Debug, PartialEq)]
struct CategoryForm {
    editing: Option<Category>,
    name: String,
}

#[component]
pub fn AdminCategoriesPage() -> impl IntoView {
    let client = expect_context::<SessionStore>().client().clone();
    let categories = RwSignal::new(None::<Vec<Category>>);
    let search = RwSignal::new(String::new());
    let revision = RwSignal::new(0_u32);
    let notice = RwSignal::new(None::<Notice>);
    let form = RwSignal::new(None::<CategoryForm>);
    let pending_delete = RwSignal::new(None::<Category>);
    let busy = RwSignal::new(false);

    let list_client = client.clone();
    Effect::new(move |_| {
        revision.track();
        let client = list_client.clone();
        leptos::task::spawn_local(async move {
            match api::list_categories(&client).await {
                Ok(loaded) => categories.set(Some(loaded)),
                Err(e) => {
                    log::warn!("category listing failed: {e}");
                    notice.set(Some(Notice::Error("Failed to fetch categories".to_owned())));
                    categories.set(Some(Vec::new()));
                }
            }
        });
    });

    let save_client = client.clone();
    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(current) = form.get_untracked() else {
            return;
        };
        let name = match validate_category_name(&current.name) {
            Ok(name) => name,
            Err(message) => {
                notice.set(Some(Notice::Error(message.to_owned())));
                return;
            }
        };
        busy.set(true);
        let client = save_client.clone();
        let editing = current.editing.map(|c| c.id);
        leptos::task::spawn_local(async move {
            match save_category(&client, editing, &name).await {
                Ok(text) => {
                    notice.set(Some(Notice::Success(text.to_owned())));
                    form.set(None);
                    revision.update(|r| *r += 1);
                }
                Err(e) => notice.set(Some(Notice::Error(e.user_message("Failed to save category")))),
            }
            busy.set(false);
        });
    };

    let on_delete = move |_| {
        let Some(category) = pending_delete.get_untracked() else {
            return;
        };
        busy.set(true);
        let client = client.clone();
        leptos::task::spawn_local(async move {
            match api::delete_category(&client, category.id).await {
                Ok(()) => {
                    notice.set(Some(Notice::Success("Category deleted successfully!".to_owned())));
                    pending_delete.set(None);
                    revision.update(|r| *r += 1);
                }
                Err(e) => notice.set(Some(Notice::Error(e.user_message("Failed to delete category")))),
            }
            busy.set(false);
        });
    };

    let visible = move || filter_categories(&categories.get().unwrap_or_default(), &search.get());

    view! {
        <div class="admin-page">
            <header class="admin-page__header">
                <div>
                    <h2>"Categories"</h2>
                    <p>"Organize your blogs"</p>
                </div>
                <button
                    class="button"
                    on:click=move |_| form.set(Some(CategoryForm { editing: None, name: String::new() }))
                >
                    "Add Category"
                </button>
            </header>
            <NoticeBanner notice=notice/>
            <div class="panel">
                <input
                    class="listing-filters__search"
                    type="search"
                    placeholder="Search categories..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <Show when=move || categories.get().is_some() fallback=|| view! { <p class="muted">"Loading..."</p> }>
                    <Show when=move || !visible().is_empty() fallback=|| view! { <p class="muted">"No categories found."</p> }>
                        <ul class="category-list">
                            <For each=visible key=|c| (c.id, c.name.clone()) let:category>
                                {
                                    let rename = category.clone();
                                    let remove = category.clone();
                                    view! {
                                        <li class="category-list__item">
                                            <span class="category-list__name">{category.name.clone()}</span>
                                            <button
                                                class="link-button"
                                                on:click=move |_| {
                                                    form.set(Some(CategoryForm { name: rename.name.clone(), editing: Some(rename.clone()) }));
                                                }
                                            >
                                                "Edit"
                                            </button>
                                            <button
                                                class="link-button link-button--danger"
                                                on:click=move |_| pending_delete.set(Some(remove.clone()))
                                            >
                                                "Delete"
                                            </button>
                                        </li>
                                    }
                                }
                            </For>
                        </ul>
                    </Show>
                </Show>
            </div>
            <Show when=move || form.get().is_some()>
                <div class="modal" role="dialog" aria-modal="true">
                    <form class="modal__card" on:submit=on_save.clone()>
                        <h3>
                            {move || {
                                if form.get().is_some_and(|f| f.editing.is_some()) { "Edit Category" } else { "Create Category" }
                            }}
                        </h3>
                        <label for="category-name">"Name"</label>
                        <input
                            id="category-name"
                            type="text"
                            prop:value=move || form.get().map(|f| f.name).unwrap_or_default()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| {
                                    if let Some(f) = f {
                                        f.name = value;
                                    }
                                });
                            }
                        />
                        <div class="modal__actions">
                            <button class="button button--outline" type="button" on:click=move |_| form.set(None)>
                                "Cancel"
                            </button>
                            <button class="button" type="submit" disabled=move || busy.get()>
                                "Save"
                            </button>
                        </div>
                    </form>
                </div>
            </Show>
            <Show when=move || pending_delete.get().is_some()>
                <div class="modal" role="dialog" aria-modal="true">
                    <div class="modal__card">
                        <h3>"Delete Category"</h3>
                        <p>
                            {move || {
                                format!(
                                    "Are you sure you want to delete \"{}\"?",
                                    pending_delete.get().map(|c| c.name).unwrap_or_default(),
                                )
                            }}
                        </p>
                        <div class="modal__actions">
                            <button class="button button--outline" on:click=move |_| pending_delete.set(None)>
                                "Cancel"
                            </button>
                            <button class="button button--danger" disabled=move || busy.get() on:click=on_delete.clone()>
                                "Delete"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
