//! Review business logic - Handles the review lifecycle and its rating triggers.
//!
//! Reviews are written once by buyers and at most soft-deleted by admins;
//! there is no edit operation. Both mutations open a database transaction,
//! perform the review write, recompute the product's cached rating, and
//! commit - so the review and the rating become visible together, and
//! concurrent review writes for the same product serialize at the storage
//! layer instead of racing on the product row.

use crate::{
    core::{
        rating::recompute_product_rating,
        user::{Role, require_role},
    },
    entities::{Product, Review, product, review, user},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use serde::Deserialize;

/// Payload for creating a review.
#[derive(Debug, Clone, Deserialize)]
pub struct NewReview {
    /// Product being reviewed
    pub product_id: i64,
    /// Optional free-text comment
    pub comment: Option<String>,
    /// Star grade, 1 through 5
    pub grade: i32,
}

/// Retrieves all active reviews, newest first.
pub async fn get_all_active_reviews(db: &DatabaseConnection) -> Result<Vec<review::Model>> {
    Review::find()
        .filter(review::Column::IsActive.eq(true))
        .order_by_desc(review::Column::CommentDate)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all active reviews for a product, newest first.
///
/// # Errors
/// Returns `Error::ProductNotFound` if the product is missing or inactive.
pub async fn get_reviews_for_product(
    db: &DatabaseConnection,
    product_id: i64,
) -> Result<Vec<review::Model>> {
    crate::core::product::get_product_by_id(db, product_id)
        .await?
        .ok_or(Error::ProductNotFound { id: product_id })?;

    Review::find()
        .filter(review::Column::IsActive.eq(true))
        .filter(review::Column::ProductId.eq(product_id))
        .order_by_desc(review::Column::CommentDate)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Creates a review and recomputes the product rating atomically.
///
/// The actor must hold the buyer role and the grade must be 1-5; both are
/// checked before any database work. The product existence check, the review
/// insert, and the rating recomputation then run inside one transaction:
/// either the review and the new rating commit together, or neither does.
pub async fn create_review(
    db: &DatabaseConnection,
    actor: &user::Model,
    payload: NewReview,
) -> Result<review::Model> {
    require_role(actor, Role::Buyer)?;

    if !(1..=5).contains(&payload.grade) {
        return Err(Error::InvalidGrade {
            grade: payload.grade,
        });
    }

    let txn = db.begin().await?;

    // Product must exist and be active, checked inside the transaction so a
    // concurrent delisting cannot slip between check and insert
    Product::find_by_id(payload.product_id)
        .filter(product::Column::IsActive.eq(true))
        .one(&txn)
        .await?
        .ok_or(Error::ProductNotFound {
            id: payload.product_id,
        })?;

    let review = review::ActiveModel {
        user_id: Set(actor.id),
        product_id: Set(payload.product_id),
        comment: Set(payload.comment),
        comment_date: Set(chrono::Utc::now()),
        grade: Set(payload.grade),
        is_active: Set(true),
        ..Default::default()
    };
    let result = review.insert(&txn).await?;

    let rating = recompute_product_rating(&txn, payload.product_id).await?;

    txn.commit().await?;
    tracing::debug!(
        product_id = payload.product_id,
        rating,
        "review created, rating recomputed"
    );

    Ok(result)
}

/// Soft-deletes a review and recomputes the product rating atomically.
///
/// The actor must hold the admin role. The review is flipped inactive rather
/// than removed, and the product's rating is recomputed over the remaining
/// active reviews before the transaction commits.
pub async fn delete_review(
    db: &DatabaseConnection,
    actor: &user::Model,
    review_id: i64,
) -> Result<review::Model> {
    require_role(actor, Role::Admin)?;

    let txn = db.begin().await?;

    let existing = Review::find_by_id(review_id)
        .filter(review::Column::IsActive.eq(true))
        .one(&txn)
        .await?
        .ok_or(Error::ReviewNotFound { id: review_id })?;
    let product_id = existing.product_id;

    let mut review: review::ActiveModel = existing.into();
    review.is_active = Set(false);
    let result = review.update(&txn).await?;

    let rating = recompute_product_rating(&txn, product_id).await?;

    txn.commit().await?;
    tracing::debug!(product_id, rating, "review deactivated, rating recomputed");

    Ok(result)
}
