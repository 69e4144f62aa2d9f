use axum::{extract::State, routing::get, Json, Router};
use tracing::{info, instrument};

use crate::{
    auth::middleware::AuthUser,
    error::AppResult,
    state::AppState,
    trends::dto::TrendItem,
};

pub const FASHION: &str = "fashion";
pub const TOP_TRENDS: usize = 10;

pub fn trend_routes() -> Router<AppState> {
    Router::new().route("/trends/fashion", get(fashion_trends))
}

#[instrument(skip(state))]
pub async fn fashion_trends(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> AppResult<Json<Vec<TrendItem>>> {
    info!(user_id = %user_id, "user is accessing fashion trends");

    let trends = state.trends.top_by_category(FASHION, TOP_TRENDS).await?;
    let items = trends
        .into_iter()
        .take(TOP_TRENDS)
        .map(TrendItem::from)
        .collect();
    Ok(Json(items))
}
