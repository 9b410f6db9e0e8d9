//! HTTP route handlers.

pub mod health;
pub mod index;

use axum::http::Uri;

use crate::error::ApiError;

/// Fallback for any path without a registered route.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("not found: {}", uri.path()))
}
