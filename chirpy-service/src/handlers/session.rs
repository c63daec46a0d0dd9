use service_core::{
    axum::{
        extract::State,
        http::{HeaderMap, StatusCode},
        response::IntoResponse,
        Json,
    },
    error::AppError,
};

use crate::{
    dtos::users::{LoginRequest, LoginResponse, RefreshResponse},
    utils::{extract_bearer, Password, ValidatedJson},
    AppState,
};

/// Login with email and password
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let outcome = state
        .sessions
        .login(&req.email, &Password::new(req.password))
        .await?;
    Ok((StatusCode::OK, Json(LoginResponse::from(outcome))))
}

/// Exchange a refresh token for a new access token
pub async fn refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let refresh_token = extract_bearer(&headers).map_err(|e| e.into_bad_request_if_missing())?;

    let token = state.sessions.refresh(refresh_token).await?;
    Ok((StatusCode::OK, Json(RefreshResponse { token })))
}

/// Revoke a refresh token
pub async fn revoke(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let refresh_token = extract_bearer(&headers).map_err(|e| e.into_bad_request_if_missing())?;

    state.sessions.revoke(refresh_token).await?;
    Ok(StatusCode::NO_CONTENT)
}
