//! Image files picked through `<input type="file">`.
//!
//! The browser file is read into memory as soon as it is chosen, so forms
//! hold a plain `Upload` and submit it through `MultipartForm`.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use leptos::prelude::*;

use crate::components::notice::Notice;
use crate::net::http::Upload;

pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Accept images up to 5MB.
///
/// # Errors
///
/// Returns the message to show for a non-image or oversized file.
pub fn validate_image(upload: &Upload) -> Result<(), &'static str> {
    if !upload.content_type.starts_with("image/") {
        return Err("Please upload an image file");
    }
    if upload.bytes.len() > MAX_IMAGE_BYTES {
        return Err("File size must be less than 5MB");
    }
    Ok(())
}

/// Read the first selected file of an input element.
#[cfg(feature = "hydrate")]
pub async fn read_selected_file(input: &web_sys::HtmlInputElement) -> Option<Upload> {
    let file = input.files()?.get(0)?;
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer()).await.ok()?;
    Some(Upload {
        file_name: file.name(),
        content_type: file.type_(),
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}

/// `on:change` handler for an image input: stores the accepted file in
/// `target`, or clears the input and reports why it was rejected.
pub fn pick_image(ev: &leptos::ev::Event, target: RwSignal<Option<Upload>>, notice: RwSignal<Option<Notice>>) {
    #[cfg(feature = "hydrate")]
    {
        let input: web_sys::HtmlInputElement = event_target(ev);
        leptos::task::spawn_local(async move {
            let Some(upload) = read_selected_file(&input).await else {
                target.set(None);
                return;
            };
            match validate_image(&upload) {
                Ok(()) => target.set(Some(upload)),
                Err(message) => {
                    input.set_value("");
                    target.set(None);
                    notice.set(Some(Notice::Error(message.to_owned())));
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ev, target, notice);
    }
}
