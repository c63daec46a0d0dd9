use service_core::error::AppError;
use std::sync::Arc;
use uuid::Uuid;

use crate::models::User;
use crate::services::store::UserStore;
use crate::utils::{hash_password, Password};

/// Account registration, credential updates and subscription upgrades.
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    pub async fn register(&self, email: &str, password: &Password) -> Result<User, AppError> {
        let hash = hash_password(password)?;
        let user = self
            .store
            .create_user(&User::new(email.to_string(), hash.into_string()))
            .await?;

        tracing::info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    pub async fn update_credentials(
        &self,
        id: Uuid,
        email: &str,
        password: &Password,
    ) -> Result<User, AppError> {
        let hash = hash_password(password)?;
        let user = self
            .store
            .update_user(id, email, hash.as_str())
            .await?
            .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("User not found")))?;

        tracing::info!(user_id = %user.id, "User credentials updated");
        Ok(user)
    }

    /// Grant Chirpy Red. Upgrading an already upgraded user succeeds.
    pub async fn upgrade(&self, id: Uuid) -> Result<(), AppError> {
        if !self.store.upgrade_user(id).await? {
            return Err(AppError::NotFound(anyhow::anyhow!("User not found")));
        }

        tracing::info!(user_id = %id, "User upgraded to Chirpy Red");
        Ok(())
    }

    pub async fn delete_all(&self) -> Result<u64, AppError> {
        let removed = self.store.delete_all_users().await?;
        tracing::warn!(removed, "All users deleted");
        Ok(removed)
    }
}
