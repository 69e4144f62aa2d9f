use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ForumPost {
    pub id: Uuid,
    pub user_id: Uuid, // owner, fixed at creation
    pub title: String,
    pub content: String,
    pub created_at: OffsetDateTime,
}
