//! Crawler files: `robots.txt` and `sitemap.xml`.

#[cfg(test)]
#[path = "seo_test.rs"]
mod seo_test;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::header::{CONTENT_TYPE, HOST};
use axum::response::IntoResponse;

use crate::state::AppState;

/// Public pages listed in the sitemap.
pub const SITEMAP_PATHS: [&str; 3] = ["/", "/blog/", "/freelancers/"];

/// Absolute origin: configured `PUBLIC_SITE_URL`, else the request `Host`
/// with the forwarded scheme (default `http`).
pub fn site_origin(configured: Option<&str>, headers: &HeaderMap) -> String {
    if let Some(url) = configured {
        return url.trim_end_matches('/').to_owned();
    }
    let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok());
    let host = header(HOST.as_str()).unwrap_or("localhost");
    let scheme = header("x-forwarded-proto")
        .and_then(|raw| raw.split(',').next())
        .map(str::trim)
        .filter(|scheme| matches!(*scheme, "http" | "https"))
        .unwrap_or("http");
    format!("{scheme}://{host}")
}

pub fn robots_body(origin: &str) -> String {
    format!("User-agent: *\nAllow: /\nDisallow: /admin/\nDisallow: /api/\n\nSitemap: {origin}/sitemap.xml\n")
}

pub fn sitemap_body(origin: &str) -> String {
    let origin = xml_escape(origin);
    let urls: String = SITEMAP_PATHS
        .iter()
        .map(|path| format!("  <url><loc>{origin}{path}</loc></url>\n"))
        .collect();
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n{urls}</urlset>\n"
    )
}

fn xml_escape(raw: &str) -> String {
    raw.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

pub async fn robots_txt(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let origin = site_origin(state.config.public_site_url.as_deref(), &headers);
    ([(CONTENT_TYPE, "text/plain; charset=utf-8")], robots_body(&origin))
}

pub async fn sitemap_xml(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let origin = site_origin(state.config.public_site_url.as_deref(), &headers);
    ([(CONTENT_TYPE, "application/xml; charset=utf-8")], sitemap_body(&origin))
}
