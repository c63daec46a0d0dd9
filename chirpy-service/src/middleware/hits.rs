use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::atomic::Ordering;

use crate::AppState;

/// Counts every request routed to the static file server.
pub async fn file_server_hits_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    state.file_server_hits.fetch_add(1, Ordering::Relaxed);
    next.run(request).await
}
