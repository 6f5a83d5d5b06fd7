//! Signed-in user's profile, refreshed from `GET /me` on mount.

use leptos::prelude::*;

use crate::net::types::UserProfile;
use crate::state::session::SessionStore;

#[component]
pub fn AdminProfilePage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let state = session.state();

    Effect::new(move |_| {
        let session = session.clone();
        leptos::task::spawn_local(async move {
            // A 401 here is handled by the client boundary; other failures
            // keep the cookie copy of the profile on screen.
            if let Err(e) = session.refresh_profile().await {
                log::warn!("profile refresh failed: {e}");
            }
        });
    });

    let user = move || state.get().user;
    let field = move |pick: fn(&UserProfile) -> String| user().map(|u| pick(&u)).unwrap_or_default();

    view! {
        <div class="admin-page">
            <header class="admin-page__header">
                <h2>"Profile"</h2>
                <p>"View your profile details"</p>
            </header>
            <div class="panel profile">
                <div class="profile__identity">
                    <span class="profile__avatar">{move || user().map_or('U', |u| u.initial()).to_string()}</span>
                    <div>
                        <h3>{move || field(|u| u.name.clone())}</h3>
                        <p class="muted">{move || field(|u| u.email.clone())}</p>
                    </div>
                </div>
                <dl class="profile__details">
                    <dt>"Full name"</dt>
                    <dd>{move || field(|u| u.name.clone())}</dd>
                    <dt>"Email address"</dt>
                    <dd>{move || field(|u| u.email.clone())}</dd>
                    <dt>"Role"</dt>
                    <dd class="profile__role">
                        {move || field(|u| u.role.clone().unwrap_or_else(|| "Admin".to_owned()))}
                    </dd>
                </dl>
            </div>
        </div>
    }
}
