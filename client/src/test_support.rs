//! Fakes shared by unit tests: scripted transport and recording navigator.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::net::error::ApiError;
use crate::net::http::{ApiClient, ApiRequest, ApiResponse, ClearSessionOnUnauthorized, Method, Transport};
use crate::state::cookies::{MemoryCookieJar, SharedCookieJar};
use crate::util::navigation::Navigator;

pub const BASE_URL: &str = "http://api.test";

type Route = (Method, String, Result<ApiResponse, ApiError>);

/// Answers by exact method + URL; unknown routes fail as network errors.
#[derive(Default)]
pub struct MockTransport {
    routes: Mutex<Vec<Route>>,
    sent: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, method: Method, path: &str, status: u16, body: Value) {
        self.route(method, path, Ok(ApiResponse { status, body }));
    }

    pub fn fail(&self, method: Method, path: &str) {
        self.route(method, path, Err(ApiError::Network("connection refused".to_owned())));
    }

    fn route(&self, method: Method, path: &str, result: Result<ApiResponse, ApiError>) {
        let url = format!("{BASE_URL}{path}");
        let mut routes = self.routes.lock().unwrap();
        routes.retain(|(m, u, _)| !(*m == method && *u == url));
        routes.push((method, url, result));
    }

    pub fn sent(&self) -> Vec<ApiRequest> {
        self.sent.lock().unwrap().clone()
    }

    pub fn last_sent(&self) -> ApiRequest {
        self.sent().pop().expect("no request sent")
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.sent.lock().unwrap().push(request.clone());
        self.routes
            .lock()
            .unwrap()
            .iter()
            .find(|(m, u, _)| *m == request.method && *u == request.url)
            .map_or_else(|| Err(ApiError::Network(format!("no route for {}", request.url))), |(_, _, r)| r.clone())
    }
}

/// Navigator pinned to a fixed path that records full navigations.
pub struct RecordingNavigator {
    path: Option<String>,
    assigned: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn at(path: &str) -> Arc<Self> {
        Arc::new(Self { path: Some(path.to_owned()), assigned: Mutex::new(Vec::new()) })
    }

    pub fn assigned(&self) -> Vec<String> {
        self.assigned.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn current_path(&self) -> Option<String> {
        self.path.clone()
    }

    fn assign(&self, href: &str) {
        self.assigned.lock().unwrap().push(href.to_owned());
    }
}

/// Everything a boundary/session test needs, wired like the app wires it.
pub struct Harness {
    pub transport: Arc<MockTransport>,
    pub jar: Arc<MemoryCookieJar>,
    pub navigator: Arc<RecordingNavigator>,
    pub client: ApiClient,
}

impl Harness {
    pub fn at(path: &str) -> Self {
        Self::with_jar(path, Arc::new(MemoryCookieJar::new()))
    }

    pub fn with_jar(path: &str, jar: Arc<MemoryCookieJar>) -> Self {
        let transport = MockTransport::new();
        let navigator = RecordingNavigator::at(path);
        let cookies: SharedCookieJar = jar.clone();
        let config = ClientConfig::from_values(Some(BASE_URL), None);
        let policy = ClearSessionOnUnauthorized::new(Some(cookies.clone()), navigator.clone(), &config);
        let client = ApiClient::new(BASE_URL, transport.clone(), Some(cookies), Arc::new(policy));
        Self { transport, jar, navigator, client }
    }
}
