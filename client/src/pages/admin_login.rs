//! Admin sign-in form.
//!
//! Validation runs locally before any request; a rejected login leaves the
//! session untouched and shows the API's message.

#[cfg(test)]
#[path = "admin_login_test.rs"]
mod admin_login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::ADMIN_HOME_PATH;
use crate::state::session::SessionStore;

pub const MIN_PASSWORD_LEN: usize = 6;
const LOGIN_FAILED: &str = "Invalid credentials";

/// Per-field validation messages; `None` means the field is fine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoginErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl LoginErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

#[must_use]
pub fn validate_login_input(email: &str, password: &str) -> LoginErrors {
    let email = email.trim();
    LoginErrors {
        email: if email.is_empty() {
            Some("Email is required")
        } else if !is_valid_email(email) {
            Some("Invalid email address")
        } else {
            None
        },
        password: if password.is_empty() {
            Some("Password is required")
        } else if password.chars().count() < MIN_PASSWORD_LEN {
            Some("Password must be at least 6 characters")
        } else {
            None
        },
    }
}

/// `local@domain.tld` with a 2+ letter alphabetic TLD.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let local_ok = !local.is_empty()
        && local.chars().all(|c| c.is_ascii_alphanumeric() || "._%+-".contains(c));
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    let host_ok = !host.is_empty() && host.chars().all(|c| c.is_ascii_alphanumeric() || ".-".contains(c));
    local_ok && host_ok && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(LoginErrors::default());
    let message = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let email_value = email.get_untracked().trim().to_owned();
        let password_value = password.get_untracked();
        let found = validate_login_input(&email_value, &password_value);
        errors.set(found);
        if !found.is_empty() {
            return;
        }
        busy.set(true);
        message.set(None);

        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match session.login(&email_value, &password_value).await {
                Ok(_) => navigate(ADMIN_HOME_PATH, NavigateOptions::default()),
                Err(e) => {
                    log::debug!("login rejected: {e}");
                    message.set(Some(e.user_message(LOGIN_FAILED)));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1 class="login-card__brand">"Henart Design"</h1>
                <h2>"Admin Login"</h2>
                <p class="login-card__subtitle">"Sign in to access the dashboard"</p>
                <form class="login-form" on:submit=on_submit novalidate>
                    <label for="email">"Email Address"</label>
                    <input
                        id="email"
                        class="login-input"
                        type="email"
                        autocomplete="email"
                        placeholder="admin@henartdesign.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <Show when=move || errors.get().email.is_some()>
                        <p class="field-error">{move || errors.get().email.unwrap_or_default()}</p>
                    </Show>
                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || errors.get().password.is_some()>
                        <p class="field-error">{move || errors.get().password.unwrap_or_default()}</p>
                    </Show>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <Show when=move || message.get().is_some()>
                    <p class="login-message">{move || message.get().unwrap_or_default()}</p>
                </Show>
                <p class="login-card__demo">"Demo: admin@henartdesign.com / password123"</p>
            </div>
        </div>
    }
}
