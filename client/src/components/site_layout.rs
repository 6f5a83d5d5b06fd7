//! Public site chrome: navbar and footer around the marketing pages.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::admin_layout::is_active;

pub const SITE_LINKS: [(&str, &str); 5] = [
    ("Home", "/"),
    ("About", "/about"),
    ("Products", "/products"),
    ("Blog", "/blog"),
    ("Contact", "/contact"),
];

#[component]
pub fn SiteLayout(children: Children) -> impl IntoView {
    let pathname = use_location().pathname;
    let menu_open = RwSignal::new(false);

    view! {
        <header class="navbar" class:navbar--open=move || menu_open.get()>
            <a class="navbar__brand" href="/">"Henart Design"</a>
            <button
                class="navbar__toggle"
                aria-label="Toggle menu"
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                "☰"
            </button>
            <nav class="navbar__links">
                {SITE_LINKS
                    .into_iter()
                    .map(|(label, href)| {
                        view! {
                            <a
                                class="navbar__link"
                                class:navbar__link--active=move || {
                                    let current = pathname.get();
                                    if href == "/" { current == "/" } else { is_active(&current, href) }
                                }
                                href=href
                                on:click=move |_| menu_open.set(false)
                            >
                                {label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </header>
        <main class="site-content">{children()}</main>
        <footer class="footer">
            <p>"© Henart Design. Handmade in Indonesia."</p>
        </footer>
    }
}
