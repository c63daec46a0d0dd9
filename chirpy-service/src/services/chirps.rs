use service_core::error::AppError;
use std::sync::Arc;
use uuid::Uuid;

use crate::models::{Chirp, SortOrder, MAX_CHIRP_LENGTH};
use crate::services::{moderation::clean_body, store::ChirpStore};

/// Reject bodies over the length limit and mask profanity.
pub fn validate_body(body: &str) -> Result<String, AppError> {
    if body.chars().count() > MAX_CHIRP_LENGTH {
        return Err(AppError::BadRequest(anyhow::anyhow!("Chirp is too long")));
    }
    Ok(clean_body(body))
}

#[derive(Clone)]
pub struct ChirpService {
    store: Arc<dyn ChirpStore>,
}

impl ChirpService {
    pub fn new(store: Arc<dyn ChirpStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, author_id: Uuid, body: &str) -> Result<Chirp, AppError> {
        let cleaned = validate_body(body)?;
        let chirp = self.store.create_chirp(&Chirp::new(author_id, cleaned)).await?;
        tracing::info!(chirp_id = %chirp.id, user_id = %author_id, "Chirp created");
        Ok(chirp)
    }

    pub async fn get(&self, id: Uuid) -> Result<Chirp, AppError> {
        self.store
            .get_chirp(id)
            .await?
            .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Chirp not found")))
    }

    pub async fn list(
        &self,
        author_id: Option<Uuid>,
        order: SortOrder,
    ) -> Result<Vec<Chirp>, AppError> {
        let mut chirps = self.store.list_chirps(author_id).await?;
        order.apply(&mut chirps);
        Ok(chirps)
    }

    /// Delete a chirp owned by `requester`. A non-owner gets 403 and nothing is deleted.
    pub async fn delete(&self, id: Uuid, requester: Uuid) -> Result<(), AppError> {
        let chirp = self.get(id).await?;

        if chirp.user_id != requester {
            tracing::warn!(chirp_id = %id, user_id = %requester, "Refused to delete chirp of another user");
            return Err(AppError::Forbidden(anyhow::anyhow!(
                "You can't delete this chirp"
            )));
        }

        if !self.store.delete_chirp(id).await? {
            return Err(AppError::NotFound(anyhow::anyhow!("Chirp not found")));
        }

        tracing::info!(chirp_id = %id, user_id = %requester, "Chirp deleted");
        Ok(())
    }
}
