// src/application/handlers/health_handlers.rs

use axum::Json;

use crate::application::dto::HealthDto;

/// Liveness probe
pub async fn health() -> Json<HealthDto> {
    Json(HealthDto {
        status: "ok".to_string(),
    })
}
