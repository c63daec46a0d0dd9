use service_core::{
    axum::{extract::State, http::StatusCode, response::IntoResponse, Json},
    error::AppError,
};

use crate::{
    dtos::users::{CreateUserRequest, UpdateUserRequest},
    middleware::AuthUser,
    models::UserResponse,
    utils::{Password, ValidatedJson},
    AppState,
};

/// Register a new account
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = state
        .users
        .register(&req.email, &Password::new(req.password))
        .await?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// Change the caller's email and password
pub async fn update_user(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ValidatedJson(req): ValidatedJson<UpdateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = state
        .users
        .update_credentials(user_id, &req.email, &Password::new(req.password))
        .await?;
    Ok((StatusCode::OK, Json(UserResponse::from(user))))
}
