//! Route guard wrapper for admin views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every protected route in `App`. Nothing inside is rendered until the
//! session is hydrated and authenticated, so protected content never flashes
//! before the session is known.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::state::session::SessionStore;
use crate::util::auth::{GuardDecision, guard_decision, install_unauth_redirect};

/// Render `children` only for an authenticated, hydrated session.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let config = expect_context::<ClientConfig>();
    let state = session.state();

    // Effects only run in the browser, so the server always renders the
    // placeholder and the cookie jar is read exactly once per mount.
    Effect::new(move |_| session.hydrate());
    install_unauth_redirect(state, config.login_path.clone(), use_navigate());

    view! {
        <Show
            when=move || guard_decision(&state.get()) == GuardDecision::Render
            fallback=|| view! { <AuthPlaceholder/> }
        >
            {children()}
        </Show>
    }
}

#[component]
fn AuthPlaceholder() -> impl IntoView {
    view! {
        <div class="auth-placeholder" aria-busy="true">
            <span class="auth-placeholder__spinner"></span>
            <p>"Loading..."</p>
        </div>
    }
}
