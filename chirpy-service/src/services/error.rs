use service_core::error::AppError;
use thiserror::Error;

/// Failures of the authentication and session subsystem.
///
/// Display strings are what clients see for 4xx mappings, so they stay generic
/// and never include token or hash material.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Unknown email or wrong password; the two are deliberately indistinguishable.
    #[error("Incorrect email or password")]
    AuthenticationFailed,

    #[error("Missing or invalid Authorization header")]
    MissingCredential,

    #[error("Malformed Authorization header")]
    MalformedHeader,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Invalid token issuer")]
    WrongIssuer,

    #[error("Invalid token subject")]
    InvalidSubject,

    #[error("Invalid or revoked session")]
    InvalidSession,

    #[error("Password hashing failed: {0}")]
    HashingError(String),

    #[error("Token signing failed: {0}")]
    SigningError(String),

    #[error("Random source unavailable: {0}")]
    EntropyError(String),

    #[error("Session storage error: {0}")]
    Storage(#[from] AppError),
}

impl AuthError {
    /// Mapping used by the refresh and revoke endpoints, where a missing bearer
    /// credential is a malformed request rather than a failed authentication.
    pub fn into_bad_request_if_missing(self) -> AppError {
        match self {
            AuthError::MissingCredential => {
                AppError::BadRequest(anyhow::anyhow!(AuthError::MissingCredential.to_string()))
            }
            other => other.into(),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed
            | AuthError::MissingCredential
            | AuthError::InvalidToken
            | AuthError::WrongIssuer
            | AuthError::InvalidSubject
            | AuthError::InvalidSession => AppError::Unauthorized(anyhow::anyhow!(err.to_string())),
            AuthError::MalformedHeader => AppError::BadRequest(anyhow::anyhow!(err.to_string())),
            AuthError::HashingError(_) | AuthError::SigningError(_) | AuthError::EntropyError(_) => {
                AppError::InternalError(anyhow::anyhow!(err.to_string()))
            }
            AuthError::Storage(e) => e,
        }
    }
}
