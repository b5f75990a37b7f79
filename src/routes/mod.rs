//! API route handlers
//!
//! This module contains all HTTP endpoint implementations for the string
//! analyzer server. Routes are organized by functionality:
//!
//! - `health`: Health checks, readiness, and uptime metrics
//! - `strings`: String analysis, lookup, listing, and deletion

pub mod health;
pub mod strings;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info
///
/// Returns server information including version and available endpoints.
/// This is the root endpoint (GET /).
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "String Analyzer",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "POST /strings",
            "GET /strings",
            "GET /strings/filter-by-natural-language",
            "GET /strings/{value}",
            "DELETE /strings/{value}",
            "GET /health",
            "GET /ready",
            "GET /metrics"
        ]
    })))
}

/// 404 Not Found handler
///
/// Returns a standardized error response for undefined routes.
pub async fn not_found() -> ServerError {
    ServerError::UnknownRoute
}
