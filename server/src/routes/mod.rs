//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the host's own endpoints (health, crawler files,
//! legacy redirects), the same-origin API proxy, and Leptos SSR rendering
//! under a single Axum router. Every response passes through the request-id,
//! CSP, compression and trace layers.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod proxy;
pub mod seo;

use std::path::PathBuf;

use axum::Router;
use axum::extract::{Path, RawQuery};
use axum::http::{HeaderValue, StatusCode};
use axum::middleware::{from_fn, from_fn_with_state};
use axum::response::Redirect;
use axum::routing::{any, get};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::middleware;
use crate::state::AppState;

/// Host endpoints and the API proxy, without SSR.
fn host_routes(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/healthz", get(healthz))
        .route("/robots.txt", get(seo::robots_txt))
        .route("/sitemap.xml", get(seo::sitemap_xml))
        .route("/app", get(redirect_legacy_root))
        .route("/app/", get(redirect_legacy_root))
        .route("/app/{*rest}", get(redirect_legacy_path));
    for prefix in proxy::PROXIED_PREFIXES {
        router = router
            .route(&format!("/{prefix}"), any(proxy::forward))
            .route(&format!("/{prefix}/{{*path}}"), any(proxy::forward));
    }
    router.with_state(state)
}

fn with_layers(router: Router, state: &AppState) -> Router {
    let policy = state
        .config
        .content_security_policy
        .as_deref()
        .and_then(|policy| HeaderValue::from_str(policy).ok());
    router
        .layer(from_fn_with_state(policy, middleware::content_security_policy))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(from_fn(middleware::request_id))
}

/// Host routes plus Leptos SSR for every other path and `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(cowork_client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || cowork_client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let router = host_routes(state.clone())
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")));
    Ok(with_layers(router, &state))
}

/// `/app/<rest>?<query>` → `/<rest>?<query>`.
pub fn legacy_target(rest: &str, query: Option<&str>) -> String {
    let mut target = format!("/{}", rest.trim_start_matches('/'));
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        target.push('?');
        target.push_str(query);
    }
    target
}

async fn redirect_legacy_root(RawQuery(query): RawQuery) -> Redirect {
    Redirect::permanent(&legacy_target("", query.as_deref()))
}

async fn redirect_legacy_path(Path(rest): Path<String>, RawQuery(query): RawQuery) -> Redirect {
    Redirect::permanent(&legacy_target(&rest, query.as_deref()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
