//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the campsite JSON API and stitches it with Leptos SSR
//! rendering under a single Axum router. Campsite images are served from the
//! configured image directory at `/images`.

pub mod campsites;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// JSON API routes plus static campsite images.
pub fn app(state: AppState, image_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/campsites", get(campsites::list_campsites))
        .route("/api/campsites/{id}", get(campsites::get_campsite))
        .route("/api/campsites/{id}/comments", get(campsites::list_comments))
        .route("/api/comments", post(campsites::post_comment))
        .route("/healthz", get(healthz))
        .nest_service("/images", ServeDir::new(image_dir))
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API routes + Leptos SSR pages + `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section / `LEPTOS_*` env vars).
pub fn leptos_app(state: AppState, image_dir: &Path) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(campsite_client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || campsite_client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Serve Leptos static assets (WASM, CSS, JS) from the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(app(state, image_dir)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg"))))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
