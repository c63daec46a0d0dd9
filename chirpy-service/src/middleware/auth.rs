use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use service_core::error::AppError;
use uuid::Uuid;

use crate::{
    services::AuthError,
    utils::extract_bearer,
    AppState,
};

/// Middleware to require a valid access token.
///
/// Any extraction or validation failure is a 401.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user_id = {
        let token = extract_bearer(req.headers()).map_err(|e| {
            tracing::debug!(error = %e, "Rejected request without bearer token");
            AuthError::MissingCredential
        })?;

        state.jwt.verify(token).map_err(|e| {
            tracing::debug!(error = %e, "Rejected access token");
            e
        })?
    };

    // Store the caller in request extensions so handlers can access it
    req.extensions_mut().insert(AuthUser(user_id));

    Ok(next.run(req).await)
}

/// Extractor for the authenticated user id
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub Uuid);

#[axum::async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<AuthUser>().copied().ok_or_else(|| {
            AppError::InternalError(anyhow::anyhow!(
                "Authenticated user missing from request extensions"
            ))
        })
    }
}
