//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds the one `SessionStore` (and with it the API client) and
//! provides it plus `ClientConfig` through context. Admin routes are wrapped
//! in `RequireAuth` and `AdminLayout`; public routes in `SiteLayout`.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::admin_layout::AdminLayout;
use crate::components::require_auth::RequireAuth;
use crate::components::site_layout::SiteLayout;
use crate::config::ClientConfig;
use crate::net::transport::default_transport;
use crate::pages::{
    about::AboutPage,
    admin_article_edit::AdminArticleEditPage,
    admin_articles::AdminArticlesPage,
    admin_categories::AdminCategoriesPage,
    admin_dashboard::AdminDashboardPage,
    admin_login::AdminLoginPage,
    admin_products::AdminProductsPage,
    admin_profile::AdminProfilePage,
    blog::{BlogPage, BlogPostPage},
    contact::ContactPage,
    home::HomePage,
    products::{ProductDetailPage, ProductsPage},
};
use crate::state::cookies::browser_cookie_jar;
use crate::state::session::SessionStore;
use crate::util::navigation::BrowserNavigator;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let session = SessionStore::connect(
        &config,
        default_transport(),
        browser_cookie_jar(),
        Arc::new(BrowserNavigator),
    );
    provide_context(config);
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/henart.css"/>
        <Title text="Henart Design"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| public(HomePage)/>
                <Route path=StaticSegment("products") view=|| public(ProductsPage)/>
                <Route path=(StaticSegment("products"), ParamSegment("id")) view=|| public(ProductDetailPage)/>
                <Route path=StaticSegment("about") view=|| public(AboutPage)/>
                <Route path=StaticSegment("contact") view=|| public(ContactPage)/>
                <Route path=StaticSegment("blog") view=|| public(BlogPage)/>
                <Route path=(StaticSegment("blog"), ParamSegment("slug")) view=|| public(BlogPostPage)/>
                <Route path=(StaticSegment("admin"), StaticSegment("login")) view=AdminLoginPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("dashboard")) view=|| admin(AdminDashboardPage)/>
                <Route path=(StaticSegment("admin"), StaticSegment("articles")) view=|| admin(AdminArticlesPage)/>
                <Route
                    path=(StaticSegment("admin"), StaticSegment("articles"), StaticSegment("edit"), ParamSegment("id"))
                    view=|| admin(AdminArticleEditPage)
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("categories"))
                    view=|| admin(AdminCategoriesPage)
                />
                <Route path=(StaticSegment("admin"), StaticSegment("products")) view=|| admin(AdminProductsPage)/>
                <Route path=(StaticSegment("admin"), StaticSegment("profile")) view=|| admin(AdminProfilePage)/>
            </Routes>
        </Router>
    }
}

fn public<V: IntoView + 'static>(page: fn() -> V) -> impl IntoView {
    view! { <SiteLayout>{page()}</SiteLayout> }
}

fn admin<V: IntoView + 'static>(page: fn() -> V) -> impl IntoView {
    view! {
        <RequireAuth>
            <AdminLayout>{page()}</AdminLayout>
        </RequireAuth>
    }
}
