use axum::Router;
use axum::http::header::SET_COOKIE;
use axum::http::{Method, Uri};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use super::*;
use crate::config::ServerConfig;

// =============================================================================
// Helpers
// =============================================================================

async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: String) -> Response {
    let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_owned);
    let seen = json!({
        "method": method.as_str(),
        "uri": uri.to_string(),
        "body": body,
        "cookie": header("cookie"),
        "x_custom": header("x-custom"),
        "x_debug_hop": header("x-debug-hop"),
        "proxy_authorization": header("proxy-authorization"),
        "x_forwarded_host": header("x-forwarded-host"),
    });
    let mut response = (StatusCode::CREATED, Json(seen)).into_response();
    let out = response.headers_mut();
    out.append(SET_COOKIE, HeaderValue::from_static("sessionid=abc; Path=/; HttpOnly"));
    out.append(SET_COOKIE, HeaderValue::from_static("csrftoken=xyz; Path=/"));
    out.insert("keep-alive", HeaderValue::from_static("timeout=5"));
    response
}

async fn spawn_upstream() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new().fallback(echo);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn closed_upstream() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

fn proxy_app(upstream: String) -> Router {
    let config = ServerConfig {
        api_upstream_url: upstream,
        ..ServerConfig::default()
    };
    let state = AppState::new(config).unwrap();
    Router::new().fallback(forward).with_state(state)
}

async fn json_body(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// end_to_end_headers
// =============================================================================

#[test]
fn strips_hop_by_hop_and_connection_listed_headers() {
    let mut headers = HeaderMap::new();
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive, X-Debug-Hop"));
    headers.insert("keep-alive", HeaderValue::from_static("timeout=5"));
    headers.insert("x-debug-hop", HeaderValue::from_static("1"));
    headers.insert("transfer-encoding", HeaderValue::from_static("chunked"));
    headers.insert(CONTENT_LENGTH, HeaderValue::from_static("12"));
    headers.insert(HOST, HeaderValue::from_static("cowork.test"));
    headers.insert("x-custom", HeaderValue::from_static("kept"));

    let forwarded = end_to_end_headers(&headers, true);
    assert_eq!(forwarded.len(), 1);
    assert_eq!(forwarded["x-custom"], "kept");

    let relayed = end_to_end_headers(&headers, false);
    assert_eq!(relayed[HOST], "cowork.test");
}

#[test]
fn keeps_repeated_headers() {
    let mut headers = HeaderMap::new();
    headers.append(SET_COOKIE, HeaderValue::from_static("a=1"));
    headers.append(SET_COOKIE, HeaderValue::from_static("b=2"));
    let kept = end_to_end_headers(&headers, false);
    assert_eq!(kept.get_all(SET_COOKIE).iter().count(), 2);
}

// =============================================================================
// forward
// =============================================================================

#[tokio::test]
async fn forwards_method_path_query_body_and_cookies() {
    let app = proxy_app(spawn_upstream().await);
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/cafe/cart/items/?source=menu")
        .header(HOST, "cowork.test")
        .header("cookie", "sessionid=abc; csrftoken=xyz")
        .header("x-custom", "kept")
        .header(CONNECTION, "x-debug-hop")
        .header("x-debug-hop", "1")
        .header("proxy-authorization", "Basic Zm9vOmJhcg==")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"menu_item_id":3,"quantity":1}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.headers().get_all(SET_COOKIE).iter().count(), 2);
    assert!(response.headers().get("keep-alive").is_none());

    let seen = json_body(response).await;
    assert_eq!(seen["method"], "POST");
    assert_eq!(seen["uri"], "/api/cafe/cart/items/?source=menu");
    assert_eq!(seen["body"], r#"{"menu_item_id":3,"quantity":1}"#);
    assert_eq!(seen["cookie"], "sessionid=abc; csrftoken=xyz");
    assert_eq!(seen["x_custom"], "kept");
    assert_eq!(seen["x_forwarded_host"], "cowork.test");
    assert!(seen["x_debug_hop"].is_null());
    assert!(seen["proxy_authorization"].is_null());
}

#[tokio::test]
async fn unreachable_upstream_is_bad_gateway() {
    let app = proxy_app(closed_upstream().await);
    let request = axum::http::Request::builder()
        .uri("/api/auth/session/")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(json_body(response).await, json!({ "detail": "upstream unavailable" }));
}
