// src/presentation/http/routes.rs
use axum::{Extension, Json, Router, handler::HandlerWithoutStateExt, routing::get};
use serde::Serialize;
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

use crate::presentation::http::{ssr::server_renderer, state::HttpState};

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

/// `/` always goes through the bootstrap so the raw template is never served
/// for it. Any other path is a static file when one exists, and a
/// server-rendered page otherwise.
pub fn build_router(state: HttpState) -> Router {
    let static_files = ServeDir::new(state.site.root())
        .append_index_html_on_directories(false)
        .fallback(server_renderer.into_service());

    Router::new()
        .route("/", get(server_renderer))
        .route("/health", get(health))
        .fallback_service(static_files)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
