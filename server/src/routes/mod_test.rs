use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, LOCATION};
use http_body_util::BodyExt;
use tower::ServiceExt;

use super::*;
use crate::config::ServerConfig;
use crate::middleware::X_REQUEST_ID;

fn test_app() -> Router {
    let config = ServerConfig {
        api_upstream_url: "http://127.0.0.1:9".to_owned(),
        content_security_policy: Some("default-src 'self'".to_owned()),
        public_site_url: Some("https://cowork.example.com".to_owned()),
        ..ServerConfig::default()
    };
    let state = AppState::new(config).unwrap();
    with_layers(host_routes(state.clone()), &state)
}

fn get_request(uri: &str) -> axum::http::Request<Body> {
    axum::http::Request::builder().uri(uri).body(Body::empty()).unwrap()
}

// =============================================================================
// legacy_target
// =============================================================================

#[test]
fn legacy_target_strips_prefix_and_keeps_query() {
    assert_eq!(legacy_target("", None), "/");
    assert_eq!(legacy_target("blog/hello", None), "/blog/hello");
    assert_eq!(legacy_target("cafe/menu", Some("category=2")), "/cafe/menu?category=2");
    assert_eq!(legacy_target("cowork", Some("")), "/cowork");
}

// =============================================================================
// Router
// =============================================================================

#[tokio::test]
async fn healthz_is_ok_with_ambient_headers() {
    let response = test_app().oneshot(get_request("/healthz")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key(&X_REQUEST_ID));
    assert_eq!(response.headers()["content-security-policy"], "default-src 'self'");
}

#[tokio::test]
async fn legacy_shell_redirects_permanently() {
    let response = test_app().oneshot(get_request("/app/blog?tag=rust")).await.unwrap();
    assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(response.headers()[LOCATION], "/blog?tag=rust");

    let response = test_app().oneshot(get_request("/app")).await.unwrap();
    assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(response.headers()[LOCATION], "/");
}

#[tokio::test]
async fn robots_uses_configured_origin() {
    let response = test_app().oneshot(get_request("/robots.txt")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[CONTENT_TYPE], "text/plain; charset=utf-8");
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(body.contains("Sitemap: https://cowork.example.com/sitemap.xml"));
}

#[tokio::test]
async fn every_proxied_prefix_reaches_the_proxy() {
    for uri in ["/api/auth/session/", "/admin", "/media/avatars/1.png", "/static/admin/base.css"] {
        let response = test_app().oneshot(get_request(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY, "{uri}");
    }
}

#[tokio::test]
async fn unknown_path_without_ssr_is_not_found() {
    let response = test_app().oneshot(get_request("/cafe/menu")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
