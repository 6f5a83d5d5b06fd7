//! Admin session store: in-memory auth state mirrored to cookies.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `SessionStore` is built in `App` and provided through context. Route
//! guards read `state()` reactively; the login page, the admin layout's
//! logout button and the profile page call the async operations.
//!
//! LIFECYCLE
//! =========
//! `Unhydrated` at process start. `hydrate()` restores from the cookie jar
//! and always ends hydrated; `login()`/`logout()` move between
//! `Authenticated` and `Unauthenticated`. A 401 anywhere resets the state
//! through the HTTP boundary's `on_cleared` listener (see `connect`).
//!
//! INVARIANT
//! =========
//! `is_authenticated` implies both `user` and `token` are set. Failed logins
//! never touch state or cookies.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use leptos::prelude::*;

use super::cookies::{
    CookieJar, CookieOptions, SharedCookieJar, TOKEN_COOKIE, USER_COOKIE, clear_session_cookies,
};
use crate::config::ClientConfig;
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::http::{ApiClient, ClearSessionOnUnauthorized, Transport};
use crate::net::types::UserProfile;
use crate::util::navigation::SharedNavigator;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub user: Option<UserProfile>,
    pub token: Option<String>,
    pub is_authenticated: bool,
    /// Set once the first restore attempt has run; never unset.
    pub has_hydrated: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Unhydrated,
    Authenticated,
    Unauthenticated,
}

impl Session {
    fn authenticated(user: UserProfile, token: String) -> Self {
        Self { user: Some(user), token: Some(token), is_authenticated: true, has_hydrated: true }
    }

    fn signed_out() -> Self {
        Self { has_hydrated: true, ..Self::default() }
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if !self.has_hydrated {
            SessionPhase::Unhydrated
        } else if self.is_authenticated && self.token.is_some() {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Unauthenticated
        }
    }

    /// Drop credentials, keeping the hydration flag.
    pub fn expire(&mut self) {
        self.user = None;
        self.token = None;
        self.is_authenticated = false;
    }
}

#[derive(Clone)]
pub struct SessionStore {
    state: RwSignal<Session>,
    client: ApiClient,
}

impl SessionStore {
    /// Fresh `Unhydrated` store over `client` and the jar it reads tokens from.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self::with_state(RwSignal::new(Session::default()), client)
    }

    #[must_use]
    pub fn with_state(state: RwSignal<Session>, client: ApiClient) -> Self {
        Self { state, client }
    }

    /// Build the client and store together so a 401 seen by any request
    /// also resets this store's in-memory session.
    #[must_use]
    pub fn connect(
        config: &ClientConfig,
        transport: Arc<dyn Transport>,
        cookies: Option<SharedCookieJar>,
        navigator: SharedNavigator,
    ) -> Self {
        let state = RwSignal::new(Session::default());
        let policy = ClearSessionOnUnauthorized::new(cookies.clone(), navigator, config)
            .on_cleared(move || state.update(Session::expire));
        let client = ApiClient::new(config.api_base_url.clone(), transport, cookies, Arc::new(policy));
        Self::with_state(state, client)
    }

    /// Reactive handle for guards and views.
    #[must_use]
    pub fn state(&self) -> RwSignal<Session> {
        self.state
    }

    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.state.get_untracked()
    }

    #[must_use]
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    fn cookies(&self) -> Option<&SharedCookieJar> {
        self.client.cookies()
    }

    /// Restore the session from cookies. Safe to call repeatedly; each call
    /// re-derives the same result from the same cookies.
    pub fn hydrate(&self) {
        let Some(cookies) = self.cookies() else {
            self.state.update(|s| s.has_hydrated = true);
            return;
        };

        match restore(cookies.as_ref()) {
            Some((user, token)) => self.state.set(Session::authenticated(user, token)),
            None => {
                clear_session_cookies(cookies.as_ref());
                self.state.set(Session::signed_out());
            }
        }
    }

    /// Exchange credentials for a token and persist the session.
    ///
    /// # Errors
    ///
    /// Returns the API error unchanged; state and cookies are untouched.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserProfile, ApiError> {
        let payload = api::login(&self.client, email, password).await?;
        let user_json = serde_json::to_string(&payload.user)?;

        if let Some(cookies) = self.cookies() {
            let options = CookieOptions::session();
            cookies.set(TOKEN_COOKIE, &payload.token, &options);
            cookies.set(USER_COOKIE, &user_json, &options);
        }
        self.state.set(Session::authenticated(payload.user.clone(), payload.token));
        Ok(payload.user)
    }

    /// Tell the API, then clear local state whether or not that worked.
    pub async fn logout(&self) {
        if let Err(e) = api::logout(&self.client).await {
            log::warn!("logout request failed: {e}");
        }
        if let Some(cookies) = self.cookies() {
            clear_session_cookies(cookies.as_ref());
        }
        self.state.set(Session::signed_out());
    }

    /// Replace the stored profile without touching token or auth flag.
    pub fn set_user(&self, user: UserProfile) {
        if let Some(cookies) = self.cookies() {
            match serde_json::to_string(&user) {
                Ok(raw) => cookies.set(USER_COOKIE, &raw, &CookieOptions::session()),
                Err(e) => log::warn!("could not persist user profile: {e}"),
            }
        }
        self.state.update(|s| s.user = Some(user));
    }

    /// Re-read the profile from `GET /me` and store it.
    ///
    /// # Errors
    ///
    /// Returns the API error; the stored profile is left as it was.
    pub async fn refresh_profile(&self) -> Result<UserProfile, ApiError> {
        let user = api::fetch_me(&self.client).await?;
        self.set_user(user.clone());
        Ok(user)
    }

    /// Drop in-memory credentials (cookies are the caller's concern).
    pub fn expire(&self) {
        self.state.update(Session::expire);
    }
}

fn restore(jar: &dyn CookieJar) -> Option<(UserProfile, String)> {
    let token = jar.get(TOKEN_COOKIE).filter(|t| !t.is_empty())?;
    let raw_user = jar.get(USER_COOKIE)?;
    match serde_json::from_str(&raw_user) {
        Ok(user) => Some((user, token)),
        Err(e) => {
            log::debug!("discarding unreadable {USER_COOKIE} cookie: {e}");
            None
        }
    }
}
