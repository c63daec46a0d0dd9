//! In-process store used by tests and local experiments.

use async_trait::async_trait;
use chrono::Utc;
use service_core::error::AppError;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

use crate::models::{Chirp, RefreshToken, User};
use crate::services::store::{ChirpStore, SessionStore, UserStore};

#[derive(Default)]
pub struct InMemoryStore {
    pub users: Mutex<HashMap<Uuid, User>>,
    pub refresh_tokens: Mutex<HashMap<String, RefreshToken>>,
    pub chirps: Mutex<HashMap<Uuid, Chirp>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a stored refresh token by its hash.
    pub fn refresh_token(&self, token_hash: &str) -> Option<RefreshToken> {
        self.refresh_tokens
            .lock()
            .ok()
            .and_then(|tokens| tokens.get(token_hash).cloned())
    }

    /// Number of refresh tokens belonging to `user_id`.
    pub fn session_count(&self, user_id: Uuid) -> usize {
        self.refresh_tokens
            .lock()
            .map(|tokens| tokens.values().filter(|t| t.user_id == user_id).count())
            .unwrap_or(0)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, AppError> {
    mutex
        .lock()
        .map_err(|_| AppError::InternalError(anyhow::anyhow!("In-memory store lock poisoned")))
}

#[async_trait]
impl SessionStore for InMemoryStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(lock(&self.users)?
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_user_by_valid_refresh_token(
        &self,
        token_hash: &str,
    ) -> Result<Option<User>, AppError> {
        let user_id = match lock(&self.refresh_tokens)?.get(token_hash) {
            Some(token) if token.is_valid() => token.user_id,
            _ => return Ok(None),
        };
        Ok(lock(&self.users)?.get(&user_id).cloned())
    }

    async fn insert_refresh_token(&self, token: &RefreshToken) -> Result<(), AppError> {
        let mut tokens = lock(&self.refresh_tokens)?;
        if tokens.contains_key(&token.token_hash) {
            return Err(AppError::Conflict(anyhow::anyhow!(
                "Refresh token already exists"
            )));
        }
        tokens.insert(token.token_hash.clone(), token.clone());
        Ok(())
    }

    async fn revoke_refresh_token(&self, token_hash: &str) -> Result<bool, AppError> {
        let mut tokens = lock(&self.refresh_tokens)?;
        match tokens.get_mut(token_hash) {
            Some(token) if token.revoked_at.is_none() => {
                let now = Utc::now();
                token.revoked_at = Some(now);
                token.updated_at = now;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[async_trait]
impl UserStore for InMemoryStore {
    async fn create_user(&self, user: &User) -> Result<User, AppError> {
        let mut users = lock(&self.users)?;
        if users.values().any(|u| u.email == user.email) {
            return Err(AppError::Conflict(anyhow::anyhow!("Email already registered")));
        }
        users.insert(user.id, user.clone());
        Ok(user.clone())
    }

    async fn update_user(
        &self,
        id: Uuid,
        email: &str,
        hashed_password: &str,
    ) -> Result<Option<User>, AppError> {
        let mut users = lock(&self.users)?;
        if users.values().any(|u| u.email == email && u.id != id) {
            return Err(AppError::Conflict(anyhow::anyhow!("Email already registered")));
        }
        Ok(users.get_mut(&id).map(|user| {
            user.email = email.to_string();
            user.hashed_password = hashed_password.to_string();
            user.updated_at = Utc::now();
            user.clone()
        }))
    }

    async fn upgrade_user(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(lock(&self.users)?
            .get_mut(&id)
            .map(|user| {
                user.is_chirpy_red = true;
                user.updated_at = Utc::now();
            })
            .is_some())
    }

    async fn delete_all_users(&self) -> Result<u64, AppError> {
        let mut users = lock(&self.users)?;
        let removed = users.len() as u64;
        users.clear();
        lock(&self.chirps)?.clear();
        lock(&self.refresh_tokens)?.clear();
        Ok(removed)
    }
}

#[async_trait]
impl ChirpStore for InMemoryStore {
    async fn create_chirp(&self, chirp: &Chirp) -> Result<Chirp, AppError> {
        if !lock(&self.users)?.contains_key(&chirp.user_id) {
            return Err(AppError::DatabaseError(anyhow::anyhow!(
                "chirp author does not exist"
            )));
        }
        lock(&self.chirps)?.insert(chirp.id, chirp.clone());
        Ok(chirp.clone())
    }

    async fn get_chirp(&self, id: Uuid) -> Result<Option<Chirp>, AppError> {
        Ok(lock(&self.chirps)?.get(&id).cloned())
    }

    async fn list_chirps(&self, author_id: Option<Uuid>) -> Result<Vec<Chirp>, AppError> {
        let mut chirps: Vec<Chirp> = lock(&self.chirps)?
            .values()
            .filter(|c| author_id.map_or(true, |author| c.user_id == author))
            .cloned()
            .collect();
        chirps.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(chirps)
    }

    async fn delete_chirp(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(lock(&self.chirps)?.remove(&id).is_some())
    }
}
