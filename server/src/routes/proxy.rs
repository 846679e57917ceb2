//! Same-origin reverse proxy to the external API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever talks to this host. `/api`, `/admin`, `/media` and
//! `/static` are forwarded byte-for-byte so the session and CSRF cookies the
//! API sets land on this origin. Nothing is cached or rewritten; hop-by-hop
//! headers are the only thing removed in either direction.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::Json;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::header::{CONNECTION, CONTENT_LENGTH, HOST};
use axum::http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::state::AppState;

/// Path prefixes served by the upstream API.
pub const PROXIED_PREFIXES: [&str; 4] = ["api", "admin", "media", "static"];

/// Uploads (avatars, blog images) go through the admin; allow generous bodies.
pub const MAX_BODY_BYTES: usize = 25 * 1024 * 1024;

const HOP_BY_HOP: [&str; 8] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

static X_FORWARDED_HOST: HeaderName = HeaderName::from_static("x-forwarded-host");
static X_FORWARDED_PROTO: HeaderName = HeaderName::from_static("x-forwarded-proto");

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("request body unreadable: {0}")]
    RequestBody(String),

    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            Self::RequestBody(_) => (StatusCode::PAYLOAD_TOO_LARGE, "request body too large"),
            Self::Upstream(_) => (StatusCode::BAD_GATEWAY, "upstream unavailable"),
        };
        tracing::warn!(error = %self, %status, "proxy request failed");
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

/// Copy `headers`, dropping hop-by-hop headers, anything the `Connection`
/// header names, `Content-Length` (recomputed by whoever writes the body),
/// and `Host` when forwarding.
pub fn end_to_end_headers(headers: &HeaderMap, drop_host: bool) -> HeaderMap {
    let listed: Vec<String> = headers
        .get_all(CONNECTION)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .map(|name| name.trim().to_ascii_lowercase())
        .filter(|name| !name.is_empty())
        .collect();

    let mut out = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let lower = name.as_str();
        let skip = HOP_BY_HOP.contains(&lower)
            || listed.iter().any(|listed| listed == lower)
            || *name == CONTENT_LENGTH
            || (drop_host && *name == HOST);
        if !skip {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

/// Forward the request to `API_UPSTREAM_URL` and relay the answer.
///
/// # Errors
///
/// Returns [`ProxyError`] when the body cannot be buffered or the upstream
/// cannot be reached; both render as `{"detail": ...}`.
pub async fn forward(State(state): State<AppState>, request: Request) -> Result<Response, ProxyError> {
    let (parts, body) = request.into_parts();
    let path_and_query = parts.uri.path_and_query().map_or("/", |pq| pq.as_str());
    let url = format!("{}{}", state.config.api_upstream_url, path_and_query);
    let body = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| ProxyError::RequestBody(e.to_string()))?;

    let mut headers = end_to_end_headers(&parts.headers, true);
    if let Some(host) = parts.headers.get(HOST) {
        headers.entry(X_FORWARDED_HOST.clone()).or_insert(host.clone());
    }
    headers
        .entry(X_FORWARDED_PROTO.clone())
        .or_insert(HeaderValue::from_static("http"));

    tracing::debug!(method = %parts.method, %url, "proxying");
    let upstream = state
        .http
        .request(parts.method, &url)
        .headers(headers)
        .body(body)
        .send()
        .await?;

    let status = upstream.status();
    let headers = end_to_end_headers(upstream.headers(), false);
    let bytes = upstream.bytes().await?;

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}
