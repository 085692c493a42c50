//! API handlers for the adboard REST endpoints

pub mod advertisements;
pub mod health;
pub mod openapi;
pub mod visitors;

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// CORS preflight response
///
/// Takes no state: a preflight never touches the database. The CORS
/// layer fills in the allow-* headers.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Fallback for HTTP methods an endpoint does not support
pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method not allowed" })),
    )
}
