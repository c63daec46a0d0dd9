use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateChirpRequest {
    pub body: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ValidateChirpRequest {
    pub body: String,
}

#[derive(Debug, Serialize)]
pub struct ValidateChirpResponse {
    pub valid: bool,
    pub cleaned_body: String,
}

/// Query string of `GET /api/chirps`. Both values are parsed by the handler.
#[derive(Debug, Default, Deserialize)]
pub struct ListChirpsQuery {
    pub author_id: Option<String>,
    pub sort: Option<String>,
}
