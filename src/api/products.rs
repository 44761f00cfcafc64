//! Product endpoints.

use crate::{
    api::{AppState, error::ApiResult, require_actor},
    core::{self, product::NewProduct},
    entities::product,
    errors::Error,
};
use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
};

/// `GET /products` - lists purchasable products.
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<product::Model>>> {
    Ok(Json(core::product::get_all_active_products(&state.db).await?))
}

/// `GET /products/{product_id}` - returns an active product.
pub async fn get_one(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
) -> ApiResult<Json<product::Model>> {
    let product = core::product::get_product_by_id(&state.db, product_id)
        .await?
        .ok_or(Error::ProductNotFound { id: product_id })?;
    Ok(Json(product))
}

/// `GET /products/category/{category_id}` - lists active products in a category.
pub async fn list_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<i64>,
) -> ApiResult<Json<Vec<product::Model>>> {
    Ok(Json(
        core::product::get_products_by_category(&state.db, category_id).await?,
    ))
}

/// `POST /products` - creates a product owned by the acting seller.
pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<NewProduct>,
) -> ApiResult<(StatusCode, Json<product::Model>)> {
    let actor = require_actor(&state.db, &headers).await?;
    let product = core::product::create_product(&state.db, &actor, payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// `PUT /products/{product_id}` - updates a product owned by the acting seller.
pub async fn update(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
    headers: HeaderMap,
    Json(payload): Json<NewProduct>,
) -> ApiResult<Json<product::Model>> {
    let actor = require_actor(&state.db, &headers).await?;
    let product = core::product::update_product(&state.db, &actor, product_id, payload).await?;
    Ok(Json(product))
}

/// `DELETE /products/{product_id}` - soft-deletes a product owned by the acting seller.
pub async fn remove(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
    headers: HeaderMap,
) -> ApiResult<Json<product::Model>> {
    let actor = require_actor(&state.db, &headers).await?;
    let product = core::product::delete_product(&state.db, &actor, product_id).await?;
    Ok(Json(product))
}
