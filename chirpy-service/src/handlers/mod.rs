//! HTTP handlers for chirpy-service.

pub mod admin;
pub mod chirps;
pub mod session;
pub mod users;
pub mod webhooks;

use service_core::axum::{http::StatusCode, response::IntoResponse};

pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
