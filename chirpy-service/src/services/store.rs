//! Persistence interfaces consumed by the service layer.
//!
//! "Not found" is never an error here: lookups return `Option` and
//! conditional writes return whether a row was affected.

use async_trait::async_trait;
use service_core::error::AppError;
use uuid::Uuid;

use crate::models::{Chirp, RefreshToken, User};

/// Refresh-session state used by login, refresh and revoke.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Owner of a refresh token that exists, is unexpired and is not revoked.
    async fn find_user_by_valid_refresh_token(
        &self,
        token_hash: &str,
    ) -> Result<Option<User>, AppError>;

    async fn insert_refresh_token(&self, token: &RefreshToken) -> Result<(), AppError>;

    /// Stamp `revoked_at` unless already set. Returns true if this call revoked it.
    async fn revoke_refresh_token(&self, token_hash: &str) -> Result<bool, AppError>;
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fails with `AppError::Conflict` when the email is taken.
    async fn create_user(&self, user: &User) -> Result<User, AppError>;

    async fn update_user(
        &self,
        id: Uuid,
        email: &str,
        hashed_password: &str,
    ) -> Result<Option<User>, AppError>;

    async fn upgrade_user(&self, id: Uuid) -> Result<bool, AppError>;

    /// Removes every user together with their chirps and refresh tokens.
    async fn delete_all_users(&self) -> Result<u64, AppError>;
}

#[async_trait]
pub trait ChirpStore: Send + Sync {
    async fn create_chirp(&self, chirp: &Chirp) -> Result<Chirp, AppError>;

    async fn get_chirp(&self, id: Uuid) -> Result<Option<Chirp>, AppError>;

    /// All chirps, or only those by `author_id`, oldest first.
    async fn list_chirps(&self, author_id: Option<Uuid>) -> Result<Vec<Chirp>, AppError>;

    async fn delete_chirp(&self, id: Uuid) -> Result<bool, AppError>;
}

/// Everything the HTTP layer needs from storage.
pub trait Store: SessionStore + UserStore + ChirpStore {}

impl<T> Store for T where T: SessionStore + UserStore + ChirpStore {}
