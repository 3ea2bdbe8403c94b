//! Health check handlers

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::server::AppState;

/// Response for the basic health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Service name
    pub service: &'static str,
    /// Service version
    pub version: &'static str,
    /// Timestamp of health check
    pub timestamp: String,
}

/// Response for the readiness endpoint
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    /// Number of templates in the catalog
    pub templates: usize,
    /// Active generation mode
    pub mode: &'static str,
}

/// GET /health - Liveness probe.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "evidence-mock",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// GET /ready - Readiness probe.
pub async fn readiness_check(State(state): State<AppState>) -> Json<ReadinessResponse> {
    Json(ReadinessResponse {
        status: "ready",
        templates: state.catalog.len(),
        mode: state.mode.as_str(),
    })
}
