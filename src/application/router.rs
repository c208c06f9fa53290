// src/application/router.rs
//
// HTTP surface of the materials backend.
// Stored files are served read-only under /uploads.

use std::path::Path;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::application::handlers::*;
use crate::application::state::AppState;
use crate::infrastructure::UPLOADS_URL_PREFIX;

pub fn build_router(state: AppState, upload_root: &Path, max_upload_bytes: usize) -> Router {
    Router::new()
        // Health.
        .route("/health", get(health))
        // Creation.
        .route(
            "/api/materials/topic/{topic_id}/upload",
            post(upload_material).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route(
            "/api/materials/upload/pdf/{topic_id}",
            post(upload_pdf).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route("/api/materials/url/{topic_id}", post(add_url_material))
        .route(
            "/api/materials/topic/{topic_id}",
            post(add_material).get(list_materials_by_topic),
        )
        // Query and lifecycle.
        .route("/api/materials", get(list_materials))
        .route(
            "/api/materials/{id}",
            get(get_material).delete(delete_material),
        )
        .route("/api/materials/{id}/topic", get(get_material_topic))
        // Stored files.
        .nest_service(UPLOADS_URL_PREFIX, ServeDir::new(upload_root))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
