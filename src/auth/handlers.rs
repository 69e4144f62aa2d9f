use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{CredentialsRequest, MessageResponse, TokenResponse},
        password::{hash_blocking, verify_blocking},
        repo_types::CreateUserError,
    },
    error::{AppError, AppResult},
    state::AppState,
};

const MISSING_CREDENTIALS: &str = "Email and password are required";
const EMAIL_TAKEN: &str = "Email already registered";

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let Json(payload) = payload?;
    let (email, password) = payload.into_required().ok_or_else(|| {
        warn!("register without email or password");
        AppError::Validation(MISSING_CREDENTIALS.into())
    })?;

    if state.users.find_by_email(&email).await?.is_some() {
        warn!(email = %email, "email already registered");
        return Err(AppError::Conflict(EMAIL_TAKEN.into()));
    }

    let hash = hash_blocking(state.hasher.clone(), password).await?;

    let user = state
        .users
        .create(&email, &hash)
        .await
        .map_err(|e| match e {
            CreateUserError::EmailTaken => {
                warn!(email = %email, "email registered concurrently");
                AppError::Conflict(EMAIL_TAKEN.into())
            }
            CreateUserError::Other(e) => AppError::Internal(e),
        })?;

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: format!("User {} created successfully", user.email),
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> AppResult<Json<TokenResponse>> {
    let Json(payload) = payload?;
    let (email, password) = payload.into_required().ok_or_else(|| {
        warn!("login without email or password");
        AppError::Validation(MISSING_CREDENTIALS.into())
    })?;

    let user = state.users.find_by_email(&email).await?.ok_or_else(|| {
        warn!(email = %email, "login unknown email");
        AppError::NotFound("User not found".into())
    })?;

    let ok = verify_blocking(state.hasher.clone(), password, user.password_hash.clone()).await?;
    if !ok {
        warn!(user_id = %user.id, "login invalid password");
        return Err(AppError::Auth("Invalid credentials".into()));
    }

    let access_token = state.tokens.issue(user.id)?;

    info!(user_id = %user.id, "user logged in");
    Ok(Json(TokenResponse { access_token }))
}
