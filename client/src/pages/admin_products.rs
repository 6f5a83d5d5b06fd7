//! Admin product management: filter, create, edit with image upload, delete.

#[cfg(test)]
#[path = "admin_products_test.rs"]
mod admin_products_test;

use leptos::prelude::*;

use crate::components::cards::image_src;
use crate::components::notice::{Notice, NoticeBanner};
use crate::config::ClientConfig;
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::http::{ApiClient, MultipartForm, Upload};
use crate::net::types::Product;
use crate::pages::products::filter_products;
use crate::state::session::SessionStore;
use crate::util::upload::pick_image;

/// Text fields of the create/edit dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
}

impl ProductDraft {
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self { name: product.name.clone(), description: product.description.clone().unwrap_or_default() }
    }
}

/// Multipart body for a create or update. The image is only sent when a new
/// one was picked; the server keeps the current image otherwise.
///
/// # Errors
///
/// Returns a user-facing message when the name is blank.
pub fn product_form(draft: &ProductDraft, image: Option<Upload>) -> Result<MultipartForm, &'static str> {
    let name = draft.name.trim();
    if name.is_empty() {
        return Err("Product name is required");
    }
    let form = MultipartForm::new().text("name", name).text("description", draft.description.trim());
    Ok(match image {
        Some(upload) => form.file("image", upload),
        None => form,
    })
}

/// Create when `editing` is `None`, update otherwise.
///
/// # Errors
///
/// Returns the API error from the create or update call.
pub async fn save_product(
    client: &ApiClient,
    editing: Option<u64>,
    form: MultipartForm,
) -> Result<&'static str, ApiError> {
    match editing {
        Some(id) => {
            api::update_product(client, id, form).await?;
            Ok("Product updated successfully!")
        }
        None => {
            api::create_product(client, form).await?;
            Ok("Product created successfully!")
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct ProductDialog {
    editing: Option<Product>,
    draft: ProductDraft,
}

#[component]
pub fn AdminProductsPage() -> impl IntoView {
    let client = expect_context::<SessionStore>().client().clone();
    let storage_base = StoredValue::new(expect_context::<ClientConfig>().storage_base_url);
    let products = RwSignal::new(None::<Vec<Product>>);
    let search = RwSignal::new(String::new());
    let revision = RwSignal::new(0_u32);
    let notice = RwSignal::new(None::<Notice>);
    let dialog = RwSignal::new(None::<ProductDialog>);
    let image = RwSignal::new(None::<Upload>);
    let pending_delete = RwSignal::new(None::<Product>);
    let busy = RwSignal::new(false);

    let list_client = client.clone();
    Effect::new(move |_| {
        revision.track();
        let client = list_client.clone();
        leptos::task::spawn_local(async move {
            match api::list_products(&client, None).await {
                Ok(loaded) => products.set(Some(loaded)),
                Err(e) => {
                    log::warn!("product listing failed: {e}");
                    notice.set(Some(Notice::Error("Failed to fetch products".to_owned())));
                    products.set(Some(Vec::new()));
                }
            }
        });
    });

    let open = move |editing: Option<Product>| {
        let draft = editing.as_ref().map(ProductDraft::from_product).unwrap_or_default();
        image.set(None);
        dialog.set(Some(ProductDialog { editing, draft }));
    };

    let save_client = client.clone();
    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(current) = dialog.get_untracked() else {
            return;
        };
        let form = match product_form(&current.draft, image.get_untracked()) {
            Ok(form) => form,
            Err(message) => {
                notice.set(Some(Notice::Error(message.to_owned())));
                return;
            }
        };
        busy.set(true);
        let client = save_client.clone();
        let editing = current.editing.map(|p| p.id);
        leptos::task::spawn_local(async move {
            match save_product(&client, editing, form).await {
                Ok(text) => {
                    notice.set(Some(Notice::Success(text.to_owned())));
                    dialog.set(None);
                    image.set(None);
                    revision.update(|r| *r += 1);
                }
                Err(e) => notice.set(Some(Notice::Error(e.user_message("Failed to save product")))),
            }
            busy.set(false);
        });
    };

    let on_delete = move |_| {
        let Some(product) = pending_delete.get_untracked() else {
            return;
        };
        busy.set(true);
        let client = client.clone();
        leptos::task::spawn_local(async move {
            match api::delete_product(&client, product.id).await {
                Ok(()) => {
                    notice.set(Some(Notice::Success("Product deleted successfully!".to_owned())));
                    pending_delete.set(None);
                    revision.update(|r| *r += 1);
                }
                Err(e) => {
                    log::warn!("product delete failed: {e}");
                    notice.set(Some(Notice::Error("Failed to delete product".to_owned())));
                }
            }
            busy.set(false);
        });
    };

    let visible = move || filter_products(&products.get().unwrap_or_default(), &search.get());
    let edit_field = move |apply: fn(&mut ProductDraft, String), value: String| {
        dialog.update(|d| {
            if let Some(d) = d {
                apply(&mut d.draft, value);
            }
        });
    };
    let current_image = move || {
        let product = dialog.get().and_then(|d| d.editing)?;
        let path = product.image?;
        Some(storage_base.with_value(|base| image_src(base, Some(&path), product.id)))
    };

    view! {
        <div class="admin-page">
            <header class="admin-page__header">
                <div>
                    <h2>"Products"</h2>
                    <p>"Manage the catalogue shown on the site"</p>
                </div>
                <button class="button" on:click=move |_| open(None)>
                    "Add Product"
                </button>
            </header>
            <NoticeBanner notice=notice/>
            <div class="panel">
                <input
                    class="listing-filters__search"
                    type="search"
                    placeholder="Search products..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <Show when=move || products.get().is_some() fallback=|| view! { <p class="muted">"Loading..."</p> }>
                    <Show when=move || !visible().is_empty() fallback=|| view! { <p class="muted">"No products found."</p> }>
                        <ul class="product-list">
                            <For each=visible key=|p| (p.id, p.name.clone(), p.image.clone()) let:product>
                                {
                                    let src = storage_base.with_value(|base| image_src(base, product.image.as_deref(), product.id));
                                    let edit = product.clone();
                                    let remove = product.clone();
                                    view! {
                                        <li class="product-list__item">
                                            <img class="product-list__thumb" src=src alt=product.name.clone()/>
                                            <div class="product-list__text">
                                                <span class="product-list__name">{product.name.clone()}</span>
                                                <span class="muted">{product.description.clone().unwrap_or_default()}</span>
                                            </div>
                                            <button class="link-button" on:click=move |_| open(Some(edit.clone()))>
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
            <Show when=move || dialog.get().is_some()>
                <div class="modal" role="dialog" aria-modal="true">
                    <form class="modal__card" on:submit=on_save.clone()>
                        <h3>
                            {move || {
                                if dialog.get().is_some_and(|d| d.editing.is_some()) { "Edit Product" } else { "Add Product" }
                            }}
                        </h3>
                        <label for="product-name">"Name"</label>
                        <input
                            id="product-name"
                            type="text"
                            prop:value=move || dialog.get().map(|d| d.draft.name).unwrap_or_default()
                            on:input=move |ev| edit_field(|d, v| d.name = v, event_target_value(&ev))
                        />
                        <label for="product-description">"Description"</label>
                        <textarea
                            id="product-description"
                            rows="4"
                            prop:value=move || dialog.get().map(|d| d.draft.description).unwrap_or_default()
                            on:input=move |ev| edit_field(|d, v| d.description = v, event_target_value(&ev))
                        ></textarea>
                        <label for="product-image">"Image"</label>
                        {move || {
                            current_image()
                                .filter(|_| image.get().is_none())
                                .map(|src| view! { <img class="modal__preview" src=src alt="Current image"/> })
                        }}
                        <input
                            id="product-image"
                            type="file"
                            accept="image/*"
                            on:change=move |ev| pick_image(&ev, image, notice)
                        />
                        <div class="modal__actions">
                            <button class="button button--outline" type="button" on:click=move |_| dialog.set(None)>
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
                        <h3>"Delete Product"</h3>
                        <p>
                            {move || {
                                format!(
                                    "Are you sure you want to delete \"{}\"?",
                                    pending_delete.get().map(|p| p.name).unwrap_or_default(),
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
