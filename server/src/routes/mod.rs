//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the forwarding endpoints and stitches them with Leptos
//! SSR rendering under a single Axum router. The page is served at `/`, its
//! WASM bundle under `/pkg` and its logo from the site root.

pub mod forward;


use std::path::Path;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use client::pages::home::LOGO_PATH;

use crate::state::AppState;

/// Forwarding + health routes, usable without the Leptos site.
pub fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/predict", post(forward::predict))
        .route("/chat", post(forward::chat))
        .route("/healthz", get(healthz))
        .layer(DefaultBodyLimit::max(state.max_upload_bytes))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Leptos SSR frontend: forwarding routes + the decoder page + `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing
/// `LEPTOS_*` environment or malformed `[package.metadata.leptos]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let assets = static_assets(Path::new(leptos_options.site_root.as_ref()));

    Ok(api_routes(state).merge(leptos_router).merge(assets))
}

/// Built site files: the WASM bundle under `/pkg` and the page logo.
pub fn static_assets(site_root: &Path) -> Router {
    Router::new()
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .route_service(LOGO_PATH, ServeFile::new(site_root.join(LOGO_PATH.trim_start_matches('/'))))
        .layer(CompressionLayer::new())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
