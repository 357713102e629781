//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the health endpoint and the Leptos SSR routes of the
//! `client` app under a single Axum router. Compiled WASM/CSS assets are
//! served from the Leptos site root under `/pkg`.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

/// Routes that do not depend on the Leptos configuration.
fn base_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Full application router: health endpoint + Leptos SSR + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded from the
/// `LEPTOS_*` environment variables.
pub fn app() -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);
    tracing::debug!(count = routes.len(), "generated leptos routes");

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(base_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
