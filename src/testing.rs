//! In-memory stand-ins for the stores and the hasher, used by unit tests.

use std::sync::Mutex;

use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::auth::password::Hasher;
use crate::auth::repo::UserStore;
use crate::auth::repo_types::{CreateUserError, User};
use crate::forum::repo::PostStore;
use crate::forum::repo_types::ForumPost;
use crate::trends::repo::TrendReader;
use crate::trends::repo_types::{Score, Trend};

#[derive(Default)]
pub struct InMemoryUserStore {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn create(&self, email: &str, password_hash: &str) -> Result<User, CreateUserError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == email) {
            return Err(CreateUserError::EmailTaken);
        }
        let user = User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at: OffsetDateTime::now_utc(),
        };
        users.push(user.clone());
        Ok(user)
    }
}

#[derive(Default)]
pub struct InMemoryPostStore {
    posts: Mutex<Vec<ForumPost>>,
}

impl InMemoryPostStore {
    pub fn all(&self) -> Vec<ForumPost> {
        self.posts.lock().unwrap().clone()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn create(&self, user_id: Uuid, title: &str, content: &str) -> anyhow::Result<ForumPost> {
        let post = ForumPost {
            id: Uuid::new_v4(),
            user_id,
            title: title.to_string(),
            content: content.to_string(),
            created_at: OffsetDateTime::now_utc(),
        };
        self.posts.lock().unwrap().push(post.clone());
        Ok(post)
    }
}

/// Mirrors the MongoDB query: filter by category, score descending, limit.
#[derive(Default)]
pub struct InMemoryTrendReader {
    trends: Vec<Trend>,
}

impl InMemoryTrendReader {
    pub fn new(trends: Vec<Trend>) -> Self {
        Self { trends }
    }
}

#[async_trait]
impl TrendReader for InMemoryTrendReader {
    async fn top_by_category(&self, category: &str, limit: usize) -> anyhow::Result<Vec<Trend>> {
        let mut hits: Vec<Trend> = self
            .trends
            .iter()
            .filter(|t| t.category.as_deref() == Some(category))
            .cloned()
            .collect();
        hits.sort_by(|a, b| {
            let a = a.score.map_or(f64::MIN, Score::as_f64);
            let b = b.score.map_or(f64::MIN, Score::as_f64);
            b.total_cmp(&a)
        });
        hits.truncate(limit);
        Ok(hits)
    }
}

/// Stores the password behind a marker prefix; keeps router tests fast.
pub struct PlainHasher;

impl Hasher for PlainHasher {
    fn hash(&self, plain: &str) -> anyhow::Result<String> {
        Ok(format!("plain${plain}"))
    }

    fn verify(&self, plain: &str, digest: &str) -> anyhow::Result<bool> {
        let stored = digest
            .strip_prefix("plain$")
            .ok_or_else(|| anyhow::anyhow!("not a plain digest"))?;
        Ok(stored == plain)
    }
}

pub fn trend(name: &str, category: &str, score: f64) -> Trend {
    scored_trend(name, category, Score::Float(score))
}

pub fn scored_trend(name: &str, category: &str, score: Score) -> Trend {
    Trend {
        name: Some(name.to_string()),
        category: Some(category.to_string()),
        score: Some(score),
    }
}
