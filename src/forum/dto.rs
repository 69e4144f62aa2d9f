use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Default, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl CreatePostRequest {
    /// Returns `(title, content)` when both are present and non-empty.
    pub fn into_required(self) -> Option<(String, String)> {
        let title = self.title.filter(|t| !t.is_empty())?;
        let content = self.content.filter(|c| !c.is_empty())?;
        Some((title, content))
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedPostResponse {
    pub message: String,
    pub id: Uuid,
}
