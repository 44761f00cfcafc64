//! Category endpoints.

use crate::{
    api::{AppState, error::ApiResult, require_actor},
    core,
    entities::category,
};
use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
};
use serde::Deserialize;

/// Payload for creating a category.
#[derive(Debug, Deserialize)]
pub struct NewCategory {
    /// Display name of the category
    pub name: String,
    /// Optional parent category ID
    #[serde(default)]
    pub parent_id: Option<i64>,
}

/// `GET /categories` - lists active categories.
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<category::Model>>> {
    Ok(Json(
        core::category::get_all_active_categories(&state.db).await?,
    ))
}

/// `POST /categories` - creates a category (admin only).
pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<NewCategory>,
) -> ApiResult<(StatusCode, Json<category::Model>)> {
    let actor = require_actor(&state.db, &headers).await?;
    let category =
        core::category::create_category(&state.db, &actor, payload.name, payload.parent_id)
            .await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// `DELETE /categories/{category_id}` - soft-deletes a category (admin only).
pub async fn remove(
    State(state): State<AppState>,
    Path(category_id): Path<i64>,
    headers: HeaderMap,
) -> ApiResult<Json<category::Model>> {
    let actor = require_actor(&state.db, &headers).await?;
    let category = core::category::delete_category(&state.db, &actor, category_id).await?;
    Ok(Json(category))
}
