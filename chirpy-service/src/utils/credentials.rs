use axum::http::{header, HeaderMap};

use crate::services::AuthError;

pub const BEARER_SCHEME: &str = "Bearer";
pub const API_KEY_SCHEME: &str = "ApiKey";

/// Pull the credential following `"<scheme> "` out of the Authorization header.
///
/// The prefix match is exact and case-sensitive with a single space, and the
/// remainder is returned verbatim.
pub fn extract_scheme<'a>(headers: &'a HeaderMap, scheme: &str) -> Result<&'a str, AuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingCredential)?
        .to_str()
        .map_err(|_| AuthError::MalformedHeader)?;

    value
        .strip_prefix(scheme)
        .and_then(|rest| rest.strip_prefix(' '))
        .ok_or(AuthError::MissingCredential)
}

pub fn extract_bearer(headers: &HeaderMap) -> Result<&str, AuthError> {
    extract_scheme(headers, BEARER_SCHEME)
}

pub fn extract_api_key(headers: &HeaderMap) -> Result<&str, AuthError> {
    extract_scheme(headers, API_KEY_SCHEME)
}
