//! Chirp model - short messages posted by users.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Maximum chirp length, in characters.
pub const MAX_CHIRP_LENGTH: usize = 140;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Chirp {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub body: String,
    pub user_id: Uuid,
}

impl Chirp {
    pub fn new(user_id: Uuid, body: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            body,
            user_id,
        }
    }
}

/// Ordering of chirp listings by creation time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Parses the `sort` query value. Anything other than `desc` sorts ascending.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("desc") => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }

    pub fn apply(self, chirps: &mut [Chirp]) {
        match self {
            SortOrder::Asc => chirps.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
            SortOrder::Desc => chirps.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        }
    }
}
