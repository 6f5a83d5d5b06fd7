//! Contact details and a message form that hands off to WhatsApp.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use leptos::prelude::*;

use crate::components::notice::{Notice, NoticeBanner};

/// Shop number enquiries and orders are sent to.
pub const WHATSAPP_NUMBER: &str = "6281246034451";

/// `(title, lines)` shown above the form.
pub const CONTACT_INFO: [(&str, [&str; 2]); 4] = [
    ("Our Location", ["Jl. Raya Ubud, Gianyar", "Bali, Indonesia 80571"]),
    ("Email Us", ["info@henartdesign.com", "order@henartdesign.com"]),
    ("Call / WhatsApp", ["+62 812-4603-4451", "+62 812-4603-4451"]),
    ("Business Hours", ["Monday – Saturday: 09:00 – 18:00", "Sunday: Closed"]),
];

/// WhatsApp chat link with `text` prefilled.
#[must_use]
pub fn whatsapp_url(text: &str) -> String {
    format!("https://wa.me/{WHATSAPP_NUMBER}?text={}", urlencoding::encode(text))
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Chat text for a contact form submission.
#[must_use]
pub fn contact_message(draft: &ContactDraft) -> String {
    format!(
        "Hello Henart Design!\n\nName: {}\nEmail: {}\nSubject: {}\n\nMessage:\n{}",
        draft.name.trim(),
        draft.email.trim(),
        draft.subject.trim(),
        draft.message.trim(),
    )
}

fn open_in_new_tab(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url_and_target(url, "_blank");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let draft = RwSignal::new(ContactDraft::default());
    let notice = RwSignal::new(None::<Notice>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        open_in_new_tab(&whatsapp_url(&contact_message(&draft.get_untracked())));
        notice.set(Some(Notice::Success("Redirecting to WhatsApp...".to_owned())));
        draft.set(ContactDraft::default());
    };
    let edit = move |apply: fn(&mut ContactDraft, String), value: String| draft.update(|d| apply(d, value));

    view! {
        <section class="page-header">
            <h1>"Get in Touch"</h1>
            <p>"Custom orders, questions or collaborations: we would love to hear from you."</p>
        </section>
        <section class="section contact">
            <div class="contact__info">
                {CONTACT_INFO
                    .into_iter()
                    .map(|(title, lines)| {
                        view! {
                            <div class="contact__card">
                                <h3>{title}</h3>
                                {lines.into_iter().map(|line| view! { <p>{line}</p> }).collect_view()}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <form class="panel contact__form" on:submit=on_submit>
                <NoticeBanner notice=notice/>
                <label for="contact-name">"Name"</label>
                <input
                    id="contact-name"
                    type="text"
                    required
                    prop:value=move || draft.get().name
                    on:input=move |ev| edit(|d, v| d.name = v, event_target_value(&ev))
                />
                <label for="contact-email">"Email"</label>
                <input
                    id="contact-email"
                    type="email"
                    required
                    prop:value=move || draft.get().email
                    on:input=move |ev| edit(|d, v| d.email = v, event_target_value(&ev))
                />
                <label for="contact-subject">"Subject"</label>
                <input
                    id="contact-subject"
                    type="text"
                    prop:value=move || draft.get().subject
                    on:input=move |ev| edit(|d, v| d.subject = v, event_target_value(&ev))
                />
                <label for="contact-message">"Message"</label>
                <textarea
                    id="contact-message"
                    rows="5"
                    required
                    prop:value=move || draft.get().message
                    on:input=move |ev| edit(|d, v| d.message = v, event_target_value(&ev))
                ></textarea>
                <button class="button" type="submit">"Send via WhatsApp"</button>
            </form>
        </section>
    }
}
