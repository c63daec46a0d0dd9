use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use service_core::error::AppError;
use subtle::ConstantTimeEq;

use crate::{utils::extract_api_key, AppState};

/// Guards the payment-provider webhook with the shared `ApiKey` secret.
pub async fn polka_api_key_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let authorized = match extract_api_key(request.headers()) {
        Ok(key) => key
            .as_bytes()
            .ct_eq(state.config.polka.api_key.as_bytes())
            .into(),
        Err(_) => false,
    };

    if !authorized {
        tracing::warn!("Failed webhook authentication attempt");
        return Err(AppError::Unauthorized(anyhow::anyhow!(
            "Invalid or missing API key"
        )));
    }

    Ok(next.run(request).await)
}
