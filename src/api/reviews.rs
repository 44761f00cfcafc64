//! Review endpoints - the HTTP face of the review lifecycle.
//!
//! Creation and deletion delegate to `core::review`, which runs the review
//! write and the rating recomputation in one transaction; by the time a
//! response leaves this module the product's rating is already consistent.

use crate::{
    api::{AppState, error::ApiResult, require_actor},
    core::{self, review::NewReview},
    entities::review,
};
use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
};

/// `GET /reviews` - lists all active reviews.
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<review::Model>>> {
    Ok(Json(core::review::get_all_active_reviews(&state.db).await?))
}

/// `GET /products/{product_id}/reviews` - lists active reviews for a product.
pub async fn list_for_product(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
) -> ApiResult<Json<Vec<review::Model>>> {
    Ok(Json(
        core::review::get_reviews_for_product(&state.db, product_id).await?,
    ))
}

/// `POST /reviews` - creates a review (buyer only).
pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<NewReview>,
) -> ApiResult<(StatusCode, Json<review::Model>)> {
    let actor = require_actor(&state.db, &headers).await?;
    let review = core::review::create_review(&state.db, &actor, payload).await?;
    Ok((StatusCode::CREATED, Json(review)))
}

/// `DELETE /reviews/{review_id}` - soft-deletes a review (admin only).
pub async fn remove(
    State(state): State<AppState>,
    Path(review_id): Path<i64>,
    headers: HeaderMap,
) -> ApiResult<Json<review::Model>> {
    let actor = require_actor(&state.db, &headers).await?;
    let review = core::review::delete_review(&state.db, &actor, review_id).await?;
    Ok(Json(review))
}
