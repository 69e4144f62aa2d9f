use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::middleware::AuthUser,
    error::{AppError, AppResult},
    forum::dto::{CreatePostRequest, CreatedPostResponse},
    state::AppState,
};

pub fn forum_routes() -> Router<AppState> {
    Router::new().route("/forum/posts", post(create_post))
}

#[instrument(skip(state, payload))]
pub async fn create_post(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    payload: Result<Json<CreatePostRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<CreatedPostResponse>)> {
    let Json(payload) = payload?;
    let (title, content) = payload.into_required().ok_or_else(|| {
        warn!(user_id = %user_id, "post without title or content");
        AppError::Validation("Title and content are required".into())
    })?;

    let post = state.posts.create(user_id, &title, &content).await?;

    info!(user_id = %user_id, post_id = %post.id, "forum post created");
    Ok((
        StatusCode::CREATED,
        Json(CreatedPostResponse {
            message: "Post created successfully".into(),
            id: post.id,
        }),
    ))
}
