//! Single choke point for every call to the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages and the session store never talk to a transport directly. Going
//! through `ApiClient` guarantees two things for every request:
//!
//! - the persisted bearer token, when one exists, is attached as
//!   `Authorization: Bearer <token>`;
//! - any 401 triggers the configured `UnauthorizedPolicy` before the error
//!   reaches the caller. Callers cannot opt out.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become `ApiError::Http` with the decoded payload. There
//! is no retry and no timeout beyond the transport's own defaults.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::{ApiError, STATUS_UNAUTHORIZED};
use crate::config::ClientConfig;
use crate::state::cookies::{SharedCookieJar, TOKEN_COOKIE, clear_session_cookies};
use crate::util::navigation::SharedNavigator;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// A file attached to a multipart form, already read into memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Upload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormValue {
    Text(String),
    File(Upload),
}

/// Ordered multipart fields, sent as `multipart/form-data`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MultipartForm {
    fields: Vec<(String, FormValue)>,
}

impl MultipartForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.fields.push((name.to_owned(), FormValue::Text(value.into())));
        self
    }

    #[must_use]
    pub fn file(mut self, name: &str, upload: Upload) -> Self {
        self.fields.push((name.to_owned(), FormValue::File(upload)));
        self
    }

    #[must_use]
    pub fn fields(&self) -> &[(String, FormValue)] {
        &self.fields
    }

    /// First text value stored under `name`.
    #[must_use]
    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.fields.iter().find_map(|(key, value)| match value {
            FormValue::Text(text) if key == name => Some(text.as_str()),
            _ => None,
        })
    }

    /// File stored under `name`, if one was attached.
    #[must_use]
    pub fn file_value(&self, name: &str) -> Option<&Upload> {
        self.fields.iter().find_map(|(key, value)| match value {
            FormValue::File(upload) if key == name => Some(upload),
            _ => None,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    Json(Value),
    Form(MultipartForm),
}

/// A fully prepared outbound request.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<RequestBody>,
}

impl ApiRequest {
    /// Case-insensitive header lookup.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn json(&self) -> Option<&Value> {
        match &self.body {
            Some(RequestBody::Json(value)) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn form(&self) -> Option<&MultipartForm> {
        match &self.body {
            Some(RequestBody::Form(form)) => Some(form),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    /// Decoded JSON body; `Value::Null` for empty bodies.
    pub body: Value,
}

impl ApiResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a prepared request and returns whatever the server answered.
///
/// Only transport failures are errors here; status handling belongs to
/// `ApiClient`. Futures are not `Send` because browser fetch futures aren't.
#[async_trait(?Send)]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// Side effect run on every 401, regardless of endpoint.
pub trait UnauthorizedPolicy: Send + Sync {
    fn on_unauthorized(&self);
}

type ClearedListener = Arc<dyn Fn() + Send + Sync>;

/// Default 401 policy: drop the persisted session, tell listeners, and force
/// a full navigation to the admin login when the user is inside `/admin`.
///
/// Does nothing when there is no persisted storage (SSR).
pub struct ClearSessionOnUnauthorized {
    cookies: Option<SharedCookieJar>,
    navigator: SharedNavigator,
    admin_prefix: String,
    login_path: String,
    listeners: Vec<ClearedListener>,
}

impl ClearSessionOnUnauthorized {
    #[must_use]
    pub fn new(cookies: Option<SharedCookieJar>, navigator: SharedNavigator, config: &ClientConfig) -> Self {
        Self {
            cookies,
            navigator,
            admin_prefix: config.admin_prefix.clone(),
            login_path: config.login_path.clone(),
            listeners: Vec::new(),
        }
    }

    /// Register a callback run after the persisted session is removed.
    #[must_use]
    pub fn on_cleared(mut self, listener: impl Fn() + Send + Sync + 'static) -> Self {
        self.listeners.push(Arc::new(listener));
        self
    }
}

impl UnauthorizedPolicy for ClearSessionOnUnauthorized {
    fn on_unauthorized(&self) {
        let Some(cookies) = &self.cookies else {
            return;
        };
        clear_session_cookies(cookies.as_ref());
        for listener in &self.listeners {
            listener();
        }

        let in_admin = self
            .navigator
            .current_path()
            .is_some_and(|path| path.starts_with(&self.admin_prefix));
        if in_admin {
            log::info!("session rejected by api; redirecting to {}", self.login_path);
            self.navigator.assign(&self.login_path);
        }
    }
}

/// Cloneable handle to the REST API.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Arc<dyn Transport>,
    cookies: Option<SharedCookieJar>,
    unauthorized: Arc<dyn UnauthorizedPolicy>,
}

impl ApiClient {
    #[must_use]
    pub fn new(
        base_url: impl Into<String>,
        transport: Arc<dyn Transport>,
        cookies: Option<SharedCookieJar>,
        unauthorized: Arc<dyn UnauthorizedPolicy>,
    ) -> Self {
        Self { base_url: base_url.into(), transport, cookies, unauthorized }
    }

    /// Persisted storage this client reads credentials from, if any.
    #[must_use]
    pub fn cookies(&self) -> Option<&SharedCookieJar> {
        self.cookies.as_ref()
    }

    /// Resolve `path` against the base URL and attach default + bearer headers.
    ///
    /// Form bodies carry no `Content-Type`; the transport sets the multipart
    /// boundary.
    #[must_use]
    pub fn build_request(
        &self,
        method: Method,
        path: &str,
        body: Option<RequestBody>,
        headers: &[(&str, &str)],
    ) -> ApiRequest {
        let mut all_headers = Vec::with_capacity(3 + headers.len());
        if !matches!(body, Some(RequestBody::Form(_))) {
            all_headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
        }
        all_headers.push(("Accept".to_owned(), "application/json".to_owned()));
        if let Some(token) = self.cookies.as_ref().and_then(|jar| jar.get(TOKEN_COOKIE)) {
            all_headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
        }
        all_headers.extend(headers.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())));

        ApiRequest { method, url: join_url(&self.base_url, path), headers: all_headers, body }
    }

    /// Send a request and return the raw JSON body of a 2xx response.
    ///
    /// # Errors
    ///
    /// `ApiError::Network` when the transport fails, `ApiError::Http` for any
    /// non-2xx status. A 401 runs the unauthorized policy first.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<RequestBody>,
        headers: &[(&str, &str)],
    ) -> Result<Value, ApiError> {
        let request = self.build_request(method, path, body, headers);
        let response = self.transport.send(request).await?;
        if response.is_success() {
            return Ok(response.body);
        }
        if response.status == STATUS_UNAUTHORIZED {
            self.unauthorized.on_unauthorized();
        }
        Err(ApiError::Http { status: response.status, payload: response.body })
    }

    /// # Errors
    ///
    /// See [`ApiClient::request`]; also `ApiError::Decode` on shape mismatch.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        decode(self.request(Method::Get, path, None, &[]).await?)
    }

    /// # Errors
    ///
    /// See [`ApiClient::request`]; also `ApiError::Decode` on shape mismatch.
    pub async fn post<T: DeserializeOwned>(&self, path: &str, body: Option<Value>) -> Result<T, ApiError> {
        decode(self.request(Method::Post, path, body.map(RequestBody::Json), &[]).await?)
    }

    /// `POST` a multipart form. Updates pass `_method=PUT` inside the form.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`]; also `ApiError::Decode` on shape mismatch.
    pub async fn post_form<T: DeserializeOwned>(&self, path: &str, form: MultipartForm) -> Result<T, ApiError> {
        decode(self.request(Method::Post, path, Some(RequestBody::Form(form)), &[]).await?)
    }

    /// # Errors
    ///
    /// See [`ApiClient::request`]; also `ApiError::Decode` on shape mismatch.
    pub async fn put<T: DeserializeOwned>(&self, path: &str, body: Value) -> Result<T, ApiError> {
        decode(self.request(Method::Put, path, Some(RequestBody::Json(body)), &[]).await?)
    }

    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.request(Method::Delete, path, None, &[]).await
    }
}

fn decode<T: DeserializeOwned>(body: Value) -> Result<T, ApiError> {
    Ok(serde_json::from_value(body)?)
}

fn join_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_owned();
    }
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
