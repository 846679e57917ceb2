//! JSON API client with CSRF handling and error normalisation.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `ApiClient` is built by the root component and shared through
//! context. Every page and the auth context call the typed endpoint modules
//! (`net::auth`, `net::cafe`, ...), which all funnel into [`ApiClient::fetch`].
//!
//! DESIGN
//! ======
//! - Safe methods (`GET`/`HEAD`/`OPTIONS`) go out as-is plus `Accept`.
//! - Writes carry `Content-Type: application/json` and the CSRF header
//!   unless the caller set them. With neither a cached token nor a CSRF
//!   cookie, the write first awaits the shared bootstrap.
//! - Every payload is inspected for a rotated `csrf_token`.
//!
//! ERROR HANDLING
//! ==============
//! Bodies that are empty or not JSON decode to `null` instead of failing.
//! Non-2xx responses become [`ApiError::Status`] with the normalised message.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde_json::Value;

use super::csrf::{BootstrapTicket, CsrfStore, LeaderGuard};
use super::error::ApiError;
use super::transport::{DefaultTransport, HttpRequest, Method, Transport, find_header};

pub const ACCEPT_HEADER: &str = "Accept";
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
pub const JSON_MIME: &str = "application/json";

/// Static API client settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Prefix for relative paths. Empty means same-origin.
    pub base_url: String,
    pub csrf_cookie_name: String,
    pub csrf_header_name: String,
    pub csrf_bootstrap_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            csrf_cookie_name: "csrftoken".to_owned(),
            csrf_header_name: "X-CSRFToken".to_owned(),
            csrf_bootstrap_path: "/api/auth/csrf/".to_owned(),
        }
    }
}

/// Per-request options.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestInit {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    /// Send a write without first bootstrapping the CSRF cookie.
    pub skip_csrf_bootstrap: bool,
}

impl RequestInit {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }

    #[must_use]
    pub fn skip_csrf_bootstrap(mut self) -> Self {
        self.skip_csrf_bootstrap = true;
        self
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if the body cannot be serialised.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        let encoded = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.body = Some(encoded);
        Ok(self)
    }
}

/// Shared handle to the JSON API. Clones share the transport and CSRF state.
pub struct ApiClient<T: Transport = DefaultTransport> {
    transport: Arc<T>,
    config: Arc<ApiConfig>,
    csrf: Arc<CsrfStore>,
}

impl<T: Transport> Clone for ApiClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            config: Arc::clone(&self.config),
            csrf: Arc::clone(&self.csrf),
        }
    }
}

impl ApiClient<DefaultTransport> {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_transport(DefaultTransport::default(), config)
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn with_transport(transport: T, config: ApiConfig) -> Self {
        Self {
            transport: Arc::new(transport),
            config: Arc::new(config),
            csrf: Arc::new(CsrfStore::new()),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn csrf(&self) -> &CsrfStore {
        &self.csrf
    }

    /// Seed the CSRF cache, e.g. from a session payload.
    pub fn set_csrf_token(&self, token: &str) {
        self.csrf.set_token(token);
    }

    /// Resolve a path against `base_url`. Absolute URLs pass through.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_owned();
        }
        format!("{}{path}", self.config.base_url.trim_end_matches('/'))
    }

    fn csrf_cookie(&self) -> Option<String> {
        self.transport.cookie(&self.config.csrf_cookie_name)
    }

    /// Make sure the CSRF cookie has been issued. Concurrent callers share
    /// one bootstrap request.
    ///
    /// # Errors
    ///
    /// Returns the bootstrap failure, shared by every caller that waited on it.
    pub async fn ensure_csrf_cookie(&self) -> Result<(), ApiError> {
        match self.csrf.begin_bootstrap() {
            BootstrapTicket::Ready => Ok(()),
            BootstrapTicket::Wait(rx) => rx
                .await
                .unwrap_or_else(|_| Err(ApiError::Network("CSRF bootstrap was cancelled".to_owned()))),
            BootstrapTicket::Lead => {
                let guard = LeaderGuard::new(&self.csrf);
                let outcome = self.bootstrap_request().await;
                guard.finish(&outcome);
                outcome
            }
        }
    }

    async fn bootstrap_request(&self) -> Result<(), ApiError> {
        let request = HttpRequest {
            method: Method::Get,
            url: self.url(&self.config.csrf_bootstrap_path),
            headers: vec![(ACCEPT_HEADER.to_owned(), JSON_MIME.to_owned())],
            body: None,
        };
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(ApiError::CsrfBootstrap(response.status));
        }
        // An empty body is fine; the cookie is what matters.
        self.absorb_token(&parse_payload(&response.body));
        Ok(())
    }

    fn absorb_token(&self, payload: &Value) {
        if let Some(token) = payload.get("csrf_token").and_then(Value::as_str) {
            self.csrf.set_token(token);
        }
    }

    fn prepare(&self, path: &str, init: RequestInit) -> HttpRequest {
        let is_write = !init.method.is_safe();
        let mut headers: Vec<(String, String)> = init
            .headers
            .into_iter()
            .filter(|(name, _)| !name.eq_ignore_ascii_case(ACCEPT_HEADER))
            .collect();
        headers.push((ACCEPT_HEADER.to_owned(), JSON_MIME.to_owned()));

        if is_write {
            if find_header(&headers, CONTENT_TYPE_HEADER).is_none() {
                headers.push((CONTENT_TYPE_HEADER.to_owned(), JSON_MIME.to_owned()));
            }
            let csrf_header = &self.config.csrf_header_name;
            if find_header(&headers, csrf_header).is_none() {
                if let Some(token) = self.csrf.resolve(self.csrf_cookie()) {
                    headers.push((csrf_header.clone(), token));
                }
            }
        }

        HttpRequest {
            method: init.method,
            url: self.url(path),
            headers,
            body: init.body,
        }
    }

    /// Perform a request and return the raw JSON payload (`null` when the
    /// body is empty or not JSON).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] for non-2xx responses, or the transport /
    /// bootstrap failure.
    pub async fn fetch_value(&self, path: &str, init: RequestInit) -> Result<Value, ApiError> {
        let needs_bootstrap = !init.method.is_safe()
            && !init.skip_csrf_bootstrap
            && find_header(&init.headers, &self.config.csrf_header_name).is_none()
            && self.csrf.token().is_none()
            && self.csrf_cookie().is_none();
        if needs_bootstrap {
            self.ensure_csrf_cookie().await?;
        }

        let response = self.transport.send(self.prepare(path, init)).await?;
        let payload = parse_payload(&response.body);
        self.absorb_token(&payload);

        if !response.is_success() {
            return Err(ApiError::from_response(response.status, &payload));
        }
        Ok(payload)
    }

    /// Perform a request and decode the payload into `R`.
    ///
    /// # Errors
    ///
    /// As [`Self::fetch_value`], plus [`ApiError::Decode`] on shape mismatch.
    pub async fn fetch<R: DeserializeOwned>(&self, path: &str, init: RequestInit) -> Result<R, ApiError> {
        let payload = self.fetch_value(path, init).await?;
        serde_json::from_value(payload).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Perform a request and discard the payload.
    ///
    /// # Errors
    ///
    /// As [`Self::fetch_value`].
    pub async fn send(&self, path: &str, init: RequestInit) -> Result<(), ApiError> {
        self.fetch::<IgnoredAny>(path, init).await.map(|_| ())
    }

    /// # Errors
    ///
    /// As [`Self::fetch`].
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.fetch(path, RequestInit::new(Method::Get)).await
    }

    /// # Errors
    ///
    /// As [`Self::fetch`].
    pub async fn post_json<R, B>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.fetch(path, RequestInit::new(Method::Post).json(body)?).await
    }

    /// # Errors
    ///
    /// As [`Self::fetch`].
    pub async fn patch_json<R, B>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.fetch(path, RequestInit::new(Method::Patch).json(body)?).await
    }

    /// POST without a body.
    ///
    /// # Errors
    ///
    /// As [`Self::fetch`].
    pub async fn post_empty<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.fetch(path, RequestInit::new(Method::Post)).await
    }

    /// # Errors
    ///
    /// As [`Self::fetch`].
    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.fetch(path, RequestInit::new(Method::Delete)).await
    }
}

fn parse_payload(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or(Value::Null)
}
