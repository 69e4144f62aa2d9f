use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::forum::repo_types::ForumPost;

#[async_trait]
pub trait PostStore: Send + Sync {
    async fn create(&self, user_id: Uuid, title: &str, content: &str) -> anyhow::Result<ForumPost>;
}

#[derive(Clone)]
pub struct PgPostStore {
    db: PgPool,
}

impl PgPostStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostStore for PgPostStore {
    async fn create(&self, user_id: Uuid, title: &str, content: &str) -> anyhow::Result<ForumPost> {
        let post = sqlx::query_as::<_, ForumPost>(
            r#"
            INSERT INTO forum_posts (user_id, title, content)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, title, content, created_at
            "#,
        )
        .bind(user_id)
        .bind(title)
        .bind(content)
        .fetch_one(&self.db)
        .await
        .context("insert forum post")?;
        Ok(post)
    }
}
