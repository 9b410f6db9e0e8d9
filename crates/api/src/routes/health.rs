//! Health check endpoint.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

impl HealthResponse {
    /// The fixed payload reported while the process is serving.
    pub const OK: Self = Self {
        status: "ok",
        message: "BookWorld API is running",
    };
}

/// GET /api/health — returns system health status.
pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse::OK)
}
