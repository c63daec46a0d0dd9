use service_core::{
    axum::{extract::State, http::StatusCode, response::IntoResponse},
    error::AppError,
};

use crate::{
    dtos::webhooks::{PolkaWebhookRequest, USER_UPGRADED_EVENT},
    utils::ValidatedJson,
    AppState,
};

/// Payment provider callback. Only `user.upgraded` has an effect; every other
/// event is acknowledged so the provider stops retrying.
pub async fn polka_webhook(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<PolkaWebhookRequest>,
) -> Result<impl IntoResponse, AppError> {
    if req.event != USER_UPGRADED_EVENT {
        tracing::debug!(event = %req.event, "Ignoring webhook event");
        return Ok(StatusCode::NO_CONTENT);
    }

    let data = req
        .data
        .ok_or_else(|| AppError::BadRequest(anyhow::anyhow!("Missing webhook data")))?;

    state.users.upgrade(data.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
