use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

pub const USER_UPGRADED_EVENT: &str = "user.upgraded";

#[derive(Debug, Deserialize, Validate)]
pub struct PolkaWebhookRequest {
    pub event: String,
    pub data: Option<PolkaWebhookData>,
}

#[derive(Debug, Deserialize)]
pub struct PolkaWebhookData {
    pub user_id: Uuid,
}
