//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every admin route applies the same hydrate → decide → redirect sequence.
//! This is a UX gate only; the API enforces authorization on its side.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{Session, SessionPhase};

/// What a guarded route should show for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session not known yet: neutral placeholder.
    Loading,
    /// Known and not signed in: placeholder plus redirect to login.
    Redirect,
    /// Signed in: render the protected view.
    Render,
}

#[must_use]
pub fn guard_decision(session: &Session) -> GuardDecision {
    match session.phase() {
        SessionPhase::Unhydrated => GuardDecision::Loading,
        SessionPhase::Unauthenticated => GuardDecision::Redirect,
        SessionPhase::Authenticated => GuardDecision::Render,
    }
}

/// History-replacing navigation so Back never returns to the guarded view.
#[must_use]
pub fn replace_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Redirect to `login_path` whenever the session is hydrated and signed out.
pub fn install_unauth_redirect<F>(state: RwSignal<Session>, login_path: String, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if guard_decision(&state.get()) == GuardDecision::Redirect {
            navigate(&login_path, replace_options());
        }
    });
}
