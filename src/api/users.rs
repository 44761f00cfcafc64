//! User account endpoints.

use crate::{
    api::{AppState, error::ApiResult},
    core,
    entities::user,
    errors::Error,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

/// Payload for creating a user account.
#[derive(Debug, Deserialize)]
pub struct NewUser {
    /// Email address for the account
    pub email: String,
    /// Role string: `"buyer"`, `"seller"`, or `"admin"`
    pub role: String,
}

/// `POST /users` - creates an account with the given role.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewUser>,
) -> ApiResult<(StatusCode, Json<user::Model>)> {
    let role = core::user::Role::parse(&payload.role)?;
    let account = core::user::create_user(&state.db, payload.email, role).await?;
    Ok((StatusCode::CREATED, Json(account)))
}

/// `GET /users/{user_id}` - returns an active account.
pub async fn get_one(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<Json<user::Model>> {
    let account = core::user::get_user_by_id(&state.db, user_id)
        .await?
        .filter(|account| account.is_active)
        .ok_or(Error::UserNotFound { id: user_id })?;
    Ok(Json(account))
}
