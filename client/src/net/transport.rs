//! Concrete transports behind `ApiClient`.
//!
//! Client-side (hydrate): `fetch` via `gloo-net`.
//! Server-side (SSR): a stub that always fails, since API calls are only
//! issued from browser effects.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use super::error::ApiError;
use super::http::{ApiRequest, ApiResponse, Transport};
#[cfg(feature = "hydrate")]
use super::http::{FormValue, MultipartForm, RequestBody};

/// Decode a response body. Empty bodies are `Null`; unparseable bodies are
/// an error on success and kept as a raw string payload otherwise.
pub(crate) fn parse_body(status: u16, text: &str) -> Result<Value, ApiError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    match serde_json::from_str(text) {
        Ok(value) => Ok(value),
        Err(e) if (200..300).contains(&status) => Err(ApiError::Decode(e.to_string())),
        Err(_) => Ok(Value::String(text.to_owned())),
    }
}

/// Browser `fetch` transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use super::http::Method;
            use gloo_net::http::Request;

            let mut builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Put => Request::put(&request.url),
                Method::Delete => Request::delete(&request.url),
            };
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let prepared = match &request.body {
                Some(RequestBody::Json(body)) => builder.json(body),
                Some(RequestBody::Form(form)) => builder.body(form_data(form)?),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;

            let resp = prepared.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            let status = resp.status();
            let text = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
            Ok(ApiResponse { status, body: parse_body(status, &text)? })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Network("not available on server".to_owned()))
        }
    }
}

/// Build browser `FormData`; files become blobs carrying their file name.
#[cfg(feature = "hydrate")]
fn form_data(form: &MultipartForm) -> Result<web_sys::FormData, ApiError> {
    let data = web_sys::FormData::new().map_err(js_error)?;
    for (name, value) in form.fields() {
        match value {
            FormValue::Text(text) => data.append_with_str(name, text),
            FormValue::File(upload) => {
                let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(upload.bytes.as_slice()));
                let options = web_sys::BlobPropertyBag::new();
                options.set_type(&upload.content_type);
                let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_error)?;
                data.append_with_blob_and_filename(name, &blob, &upload.file_name)
            }
        }
        .map_err(js_error)?;
    }
    Ok(data)
}

#[cfg(feature = "hydrate")]
fn js_error(err: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Network(format!("{err:?}"))
}

#[must_use]
pub fn default_transport() -> Arc<dyn Transport> {
    Arc::new(FetchTransport)
}
