//! Admin chrome: sidebar navigation, topbar with the signed-in user, logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered inside `RequireAuth`, so a user profile is normally present.
//! Logout always lands on the login page, even when the API call fails.

#[cfg(test)]
#[path = "admin_layout_test.rs"]
mod admin_layout_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::config::ClientConfig;
use crate::state::session::SessionStore;

/// Sidebar entries as `(label, href)`.
pub const NAV_ITEMS: [(&str, &str); 5] = [
    ("Overview", "/admin/dashboard"),
    ("Blogs", "/admin/articles"),
    ("Categories", "/admin/categories"),
    ("Products", "/admin/products"),
    ("Profile", "/admin/profile"),
];

/// A nav entry is active on its own path and on any nested path.
#[must_use]
pub fn is_active(pathname: &str, href: &str) -> bool {
    pathname == href || pathname.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
}

#[must_use]
pub fn page_title(pathname: &str) -> &'static str {
    match pathname.trim_end_matches('/') {
        "/admin/dashboard" => "Dashboard Overview",
        "/admin/articles" => "Blogs",
        path if path.starts_with("/admin/articles/edit/") => "Edit Blog",
        "/admin/categories" => "Categories",
        "/admin/products" => "Products",
        "/admin/profile" => "Profile Settings",
        _ => "Dashboard",
    }
}

#[component]
pub fn AdminLayout(children: Children) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let config = expect_context::<ClientConfig>();
    let state = session.state();
    let pathname = use_location().pathname;
    let navigate = use_navigate();
    let sidebar_open = RwSignal::new(false);

    let user_name = move || state.get().user.map_or_else(|| "Admin".to_owned(), |u| u.name);
    let user_email = move || state.get().user.map(|u| u.email).unwrap_or_default();
    let user_initial = move || state.get().user.map_or('A', |u| u.initial()).to_string();

    let on_logout = move |_| {
        let session = session.clone();
        let navigate = navigate.clone();
        let login_path = config.login_path.clone();
        leptos::task::spawn_local(async move {
            session.logout().await;
            navigate(&login_path, NavigateOptions::default());
        });
    };

    view! {
        <div class="admin-shell" class:admin-shell--sidebar-open=move || sidebar_open.get()>
            <aside class="admin-sidebar">
                <a class="admin-sidebar__brand" href="/admin/dashboard">"Henart Admin"</a>
                <nav class="admin-sidebar__nav">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|(label, href)| {
                            view! {
                                <a
                                    class="admin-sidebar__link"
                                    class:admin-sidebar__link--active=move || {
                                        is_active(&pathname.get(), href)
                                    }
                                    href=href
                                    on:click=move |_| sidebar_open.set(false)
                                >
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <a class="admin-sidebar__site-link" href="/">"View site"</a>
            </aside>
            <div class="admin-main">
                <header class="admin-topbar">
                    <button
                        class="admin-topbar__menu"
                        aria-label="Open menu"
                        on:click=move |_| sidebar_open.update(|open| *open = !*open)
                    >
                        "☰"
                    </button>
                    <h1 class="admin-topbar__title">{move || page_title(&pathname.get())}</h1>
                    <div class="admin-topbar__user">
                        <div class="admin-topbar__identity">
                            <p class="admin-topbar__name">{user_name}</p>
                            <p class="admin-topbar__email">{user_email}</p>
                        </div>
                        <span class="admin-topbar__avatar">{user_initial}</span>
                        <button class="admin-topbar__logout" on:click=on_logout>
                            "Logout"
                        </button>
                    </div>
                </header>
                <main class="admin-content">{children()}</main>
            </div>
        </div>
    }
}
