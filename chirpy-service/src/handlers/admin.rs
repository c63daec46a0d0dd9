use service_core::{
    axum::{extract::State, http::StatusCode, response::{Html, IntoResponse}},
    error::AppError,
};
use std::sync::atomic::Ordering;

use crate::AppState;

/// HTML page with the file server hit count
pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    let hits = state.file_server_hits.load(Ordering::Relaxed);
    Html(format!(
        "<html>\n  <body>\n    <h1>Welcome, Chirpy Admin</h1>\n    <p>Chirpy has been visited {} times!</p>\n  </body>\n</html>\n",
        hits
    ))
}

/// Wipe all users (and with them chirps and sessions) and zero the hit counter.
/// Only available on the dev platform.
pub async fn reset(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    if !state.config.is_dev() {
        tracing::warn!("Reset attempted outside dev platform");
        return Err(AppError::Forbidden(anyhow::anyhow!(
            "Reset is only allowed in dev environment"
        )));
    }

    state.users.delete_all().await?;
    state.file_server_hits.store(0, Ordering::Relaxed);

    Ok((StatusCode::OK, "OK"))
}
