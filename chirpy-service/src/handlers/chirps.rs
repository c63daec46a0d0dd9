use service_core::{
    axum::{
        extract::{Path, Query, State},
        http::StatusCode,
        response::IntoResponse,
        Json,
    },
    error::AppError,
};
use uuid::Uuid;

use crate::{
    dtos::chirps::{CreateChirpRequest, ListChirpsQuery, ValidateChirpRequest, ValidateChirpResponse},
    middleware::AuthUser,
    models::SortOrder,
    services::validate_body,
    utils::ValidatedJson,
    AppState,
};

pub async fn create_chirp(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ValidatedJson(req): ValidatedJson<CreateChirpRequest>,
) -> Result<impl IntoResponse, AppError> {
    let chirp = state.chirps.create(user_id, &req.body).await?;
    Ok((StatusCode::CREATED, Json(chirp)))
}

/// List chirps, optionally by one author, sorted by creation time
pub async fn list_chirps(
    State(state): State<AppState>,
    Query(query): Query<ListChirpsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let author_id = match query.author_id.as_deref() {
        None | Some("") => None,
        Some(raw) => Some(
            Uuid::parse_str(raw)
                .map_err(|_| AppError::BadRequest(anyhow::anyhow!("Invalid author ID")))?,
        ),
    };
    let order = SortOrder::from_query(query.sort.as_deref());

    let chirps = state.chirps.list(author_id, order).await?;
    Ok((StatusCode::OK, Json(chirps)))
}

fn parse_chirp_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::BadRequest(anyhow::anyhow!("Invalid chirp ID")))
}

pub async fn get_chirp(
    State(state): State<AppState>,
    Path(chirp_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let chirp = state.chirps.get(parse_chirp_id(&chirp_id)?).await?;
    Ok((StatusCode::OK, Json(chirp)))
}

/// Delete one of the caller's own chirps
pub async fn delete_chirp(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(chirp_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.chirps.delete(parse_chirp_id(&chirp_id)?, user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn validate_chirp(
    ValidatedJson(req): ValidatedJson<ValidateChirpRequest>,
) -> Result<impl IntoResponse, AppError> {
    let cleaned_body = validate_body(&req.body)?;
    Ok((
        StatusCode::OK,
        Json(ValidateChirpResponse {
            valid: true,
            cleaned_body,
        }),
    ))
}
