//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the snapshot API, the static image directory, and the
//! Leptos SSR dashboard under a single Axum router. The API routes carry a
//! permissive CORS layer because the dashboard may be served from a different
//! origin than the data.

pub mod topics;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Snapshot API, static images, and health check.
pub fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    let static_service = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/api/topic_modeling", get(topics::topic_modeling))
        .route("/healthz", get(healthz))
        .nest_service("/static", static_service)
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Leptos SSR frontend: API routes + dashboard at `/` + assets at `/pkg`.
///
/// # Errors
///
/// Returns an error if a `LEPTOS_*` environment value is malformed. Site
/// options come from the environment only: cargo-leptos exports them from
/// `[[workspace.metadata.leptos]]`, and a plain `cargo run` picks them up
/// from `.env`; unset keys fall back to Leptos defaults.
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

    // Serve Leptos static assets (WASM, CSS, JS) from the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg"))))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
