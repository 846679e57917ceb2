//! Response header middleware applied to every route.

#[cfg(test)]
#[path = "middleware_test.rs"]
mod middleware_test;

use axum::extract::{Request, State};
use axum::http::header::CONTENT_SECURITY_POLICY;
use axum::http::{HeaderName, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

pub static X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Tag the request and its response with `X-Request-ID`.
///
/// An incoming non-empty id is kept so traces line up with an outer proxy;
/// otherwise a fresh UUID v4 (hex, no dashes) is issued. The id is also
/// written onto the request so proxied calls carry it upstream.
pub async fn request_id(mut request: Request, next: Next) -> Response {
    let id = request
        .headers()
        .get(&X_REQUEST_ID)
        .filter(|value| !value.is_empty())
        .cloned()
        .or_else(fresh_request_id);
    let Some(id) = id else {
        return next.run(request).await;
    };
    request.headers_mut().insert(X_REQUEST_ID.clone(), id.clone());
    let mut response = next.run(request).await;
    response.headers_mut().insert(X_REQUEST_ID.clone(), id);
    response
}

fn fresh_request_id() -> Option<HeaderValue> {
    HeaderValue::from_str(&Uuid::new_v4().simple().to_string()).ok()
}

/// Add the configured policy unless the handler (or upstream) set one.
pub async fn content_security_policy(
    State(policy): State<Option<HeaderValue>>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;
    if let Some(policy) = policy {
        response.headers_mut().entry(CONTENT_SECURITY_POLICY).or_insert(policy);
    }
    response
}
