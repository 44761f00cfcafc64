//! Product business logic - Handles all product-related operations.
//!
//! This module provides functions for creating, retrieving, updating, and
//! soft-deleting products. Products are owned by sellers; only the owning
//! seller may modify or delete a listing. The cached `rating` column is never
//! touched here - it belongs to `core::rating` alone.

use crate::{
    core::{
        category::get_active_category,
        user::{Role, require_role},
    },
    entities::{Product, category, product, user},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use serde::Deserialize;

/// Payload for creating or updating a product listing.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProduct {
    /// Display name of the product
    pub name: String,
    /// Optional free-text description
    pub description: Option<String>,
    /// Price per unit, must be positive and finite
    pub price: f64,
    /// Optional URL of the product image
    pub image_url: Option<String>,
    /// Units in stock, must be non-negative
    pub stock: i32,
    /// Category the product is listed under
    pub category_id: i64,
}

fn validate_listing(payload: &NewProduct) -> Result<()> {
    if payload.name.trim().is_empty() {
        return Err(Error::Config {
            message: "Product name cannot be empty".to_string(),
        });
    }

    if !payload.price.is_finite() || payload.price <= 0.0 {
        return Err(Error::Config {
            message: format!("Product price must be positive, got {}", payload.price),
        });
    }

    if payload.stock < 0 {
        return Err(Error::Config {
            message: format!("Product stock cannot be negative, got {}", payload.stock),
        });
    }

    Ok(())
}

/// Retrieves all purchasable products: active, in stock, in an active
/// category, ordered alphabetically by name.
pub async fn get_all_active_products(db: &DatabaseConnection) -> Result<Vec<product::Model>> {
    Product::find()
        .filter(product::Column::IsActive.eq(true))
        .filter(product::Column::Stock.gt(0))
        .inner_join(category::Entity)
        .filter(category::Column::IsActive.eq(true))
        .order_by_asc(product::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all active products in a category.
///
/// # Errors
/// Returns `Error::CategoryNotFound` if the category is missing or inactive.
pub async fn get_products_by_category(
    db: &DatabaseConnection,
    category_id: i64,
) -> Result<Vec<product::Model>> {
    get_active_category(db, category_id).await?;

    Product::find()
        .filter(product::Column::IsActive.eq(true))
        .filter(product::Column::CategoryId.eq(category_id))
        .order_by_asc(product::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves an active product by ID, returning None if missing or inactive.
pub async fn get_product_by_id(
    db: &DatabaseConnection,
    product_id: i64,
) -> Result<Option<product::Model>> {
    Product::find_by_id(product_id)
        .filter(product::Column::IsActive.eq(true))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new product owned by the acting seller.
///
/// Validates the payload, requires the seller role, and checks that the
/// target category exists and is active. New products start unrated.
pub async fn create_product(
    db: &DatabaseConnection,
    actor: &user::Model,
    payload: NewProduct,
) -> Result<product::Model> {
    require_role(actor, Role::Seller)?;
    validate_listing(&payload)?;
    get_active_category(db, payload.category_id).await?;

    let product = product::ActiveModel {
        name: Set(payload.name.trim().to_string()),
        description: Set(payload.description),
        price: Set(payload.price),
        image_url: Set(payload.image_url),
        stock: Set(payload.stock),
        category_id: Set(payload.category_id),
        seller_id: Set(actor.id),
        rating: Set(0.0),
        is_active: Set(true),
        ..Default::default()
    };
    product.insert(db).await.map_err(Into::into)
}

/// Updates an existing product owned by the acting seller.
///
/// The cached rating is preserved across updates; only listing fields change.
pub async fn update_product(
    db: &DatabaseConnection,
    actor: &user::Model,
    product_id: i64,
    payload: NewProduct,
) -> Result<product::Model> {
    require_role(actor, Role::Seller)?;
    validate_listing(&payload)?;

    let existing = get_product_by_id(db, product_id)
        .await?
        .ok_or(Error::ProductNotFound { id: product_id })?;
    if existing.seller_id != actor.id {
        return Err(Error::Forbidden {
            message: "Only the owning seller can modify a product".to_string(),
        });
    }

    get_active_category(db, payload.category_id).await?;

    let mut product: product::ActiveModel = existing.into();
    product.name = Set(payload.name.trim().to_string());
    product.description = Set(payload.description);
    product.price = Set(payload.price);
    product.image_url = Set(payload.image_url);
    product.stock = Set(payload.stock);
    product.category_id = Set(payload.category_id);

    product.update(db).await.map_err(Into::into)
}

/// Soft-deletes a product owned by the acting seller.
pub async fn delete_product(
    db: &DatabaseConnection,
    actor: &user::Model,
    product_id: i64,
) -> Result<product::Model> {
    require_role(actor, Role::Seller)?;

    let existing = get_product_by_id(db, product_id)
        .await?
        .ok_or(Error::ProductNotFound { id: product_id })?;
    if existing.seller_id != actor.id {
        return Err(Error::Forbidden {
            message: "Only the owning seller can delete a product".to_string(),
        });
    }

    let mut product: product::ActiveModel = existing.into();
    product.is_active = Set(false);
    product.update(db).await.map_err(Into::into)
}
