//! HTTP transport seam between the API client and the browser.
//!
//! DESIGN
//! ======
//! `ApiClient` owns CSRF and error policy; a `Transport` only moves a
//! request out and a status + body back, and reads cookies. The browser
//! implementation uses `gloo-net` with credentials included. The server
//! render implementation refuses every request so SSR never performs
//! outbound HTTP.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::future::Future;

use super::error::ApiError;

/// HTTP method. Parsing is case-insensitive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Method {
    #[default]
    Get,
    Head,
    Options,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_uppercase().as_str() {
            "GET" => Some(Self::Get),
            "HEAD" => Some(Self::Head),
            "OPTIONS" => Some(Self::Options),
            "POST" => Some(Self::Post),
            "PUT" => Some(Self::Put),
            "PATCH" => Some(Self::Patch),
            "DELETE" => Some(Self::Delete),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// `GET`, `HEAD` and `OPTIONS` never mutate; everything else is a write.
    pub fn is_safe(self) -> bool {
        matches!(self, Self::Get | Self::Head | Self::Options)
    }
}

/// Fully prepared outbound request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

pub(crate) fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

/// Status and raw body of a completed request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Moves requests to the API host and exposes the cookie jar.
pub trait Transport: Send + Sync + 'static {
    /// Send a request with credentials (cookies) included.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] when no response was received.
    fn send(&self, request: HttpRequest) -> impl Future<Output = Result<HttpResponse, ApiError>>;

    /// Current value of a cookie visible to scripts, if any.
    fn cookie(&self, name: &str) -> Option<String>;
}

/// Read one cookie out of a `document.cookie` style string.
///
/// Pairs are separated by `;`. The first exact-name match wins; an empty
/// value counts as absent.
pub fn cookie_value(jar: &str, name: &str) -> Option<String> {
    jar.split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_owned())
        .filter(|value| !value.is_empty())
}

/// Transport used during server rendering. Every request fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct ServerTransport;

impl Transport for ServerTransport {
    async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, ApiError> {
        Err(ApiError::Network("not available on server".to_owned()))
    }

    fn cookie(&self, _name: &str) -> Option<String> {
        None
    }
}

#[cfg(feature = "hydrate")]
pub use browser::BrowserTransport;

#[cfg(feature = "hydrate")]
mod browser {
    use gloo_net::http::{Method as GlooMethod, RequestBuilder};
    use wasm_bindgen::JsCast as _;

    use super::{ApiError, HttpRequest, HttpResponse, Method, Transport, cookie_value};

    /// `fetch`-backed transport with `credentials: include`.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct BrowserTransport;

    fn gloo_method(method: Method) -> GlooMethod {
        match method {
            Method::Get => GlooMethod::GET,
            Method::Head => GlooMethod::HEAD,
            Method::Options => GlooMethod::OPTIONS,
            Method::Post => GlooMethod::POST,
            Method::Put => GlooMethod::PUT,
            Method::Patch => GlooMethod::PATCH,
            Method::Delete => GlooMethod::DELETE,
        }
    }

    impl Transport for BrowserTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            let mut builder = RequestBuilder::new(&request.url)
                .method(gloo_method(request.method))
                .credentials(web_sys::RequestCredentials::Include);
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let prepared = match request.body {
                Some(body) => builder.body(body),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;

            let resp = prepared.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            let status = resp.status();
            // Unreadable bodies are treated like empty ones.
            let body = resp.text().await.unwrap_or_default();
            log::debug!("{} {} -> {status}", request.method.as_str(), request.url);
            Ok(HttpResponse { status, body })
        }

        fn cookie(&self, name: &str) -> Option<String> {
            let document = web_sys::window()?.document()?;
            let jar = document.dyn_into::<web_sys::HtmlDocument>().ok()?.cookie().ok()?;
            cookie_value(&jar, name)
        }
    }
}

/// Transport chosen for the current build.
#[cfg(feature = "hydrate")]
pub type DefaultTransport = BrowserTransport;

/// Transport chosen for the current build.
#[cfg(not(feature = "hydrate"))]
pub type DefaultTransport = ServerTransport;
