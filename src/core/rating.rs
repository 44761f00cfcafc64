//! Rating aggregation - the only writer of the cached product rating.
//!
//! A product's `rating` column caches the arithmetic mean of the grades of
//! its active reviews; it is re-derivable at any time from the review table.
//! [`recompute_product_rating`] re-derives and persists it, and is invoked by
//! `core::review` after every review creation and soft-deletion, inside the
//! same database transaction as the triggering write. Running the read and
//! the update in that one transaction is what keeps two concurrent review
//! writes from losing each other's contribution to the mean.

use crate::{
    entities::{Product, Review, product, review},
    errors::{Error, Result},
};
use sea_orm::{ConnectionTrait, QuerySelect, prelude::*};

/// Recomputes and persists a product's rating from its active reviews.
///
/// Reads the grades of all active reviews for the product, averages them
/// (0.0 when there are none, never NaN), and writes the result to the
/// product row in a single UPDATE. Returns the new rating. Idempotent:
/// recomputing with no intervening review change yields the same value.
///
/// Callers mutating reviews must pass their open transaction so the review
/// write and the rating update commit together; the caller is expected to
/// have validated that the product exists, so a missing row here is an
/// integrity fault and is surfaced as `ProductNotFound` rather than ignored.
///
/// # Arguments
/// * `conn` - Database connection or open transaction
/// * `product_id` - ID of the product to recompute
///
/// # Errors
/// Returns `Error::ProductNotFound` if the product row is missing, or a
/// database error if a read or the write fails. No retries are performed;
/// on failure the previous rating is left in place.
pub async fn recompute_product_rating<C>(conn: &C, product_id: i64) -> Result<f64>
where
    C: ConnectionTrait,
{
    use sea_orm::sea_query::Expr;

    let grades: Vec<i32> = Review::find()
        .select_only()
        .column(review::Column::Grade)
        .filter(review::Column::ProductId.eq(product_id))
        .filter(review::Column::IsActive.eq(true))
        .into_tuple()
        .all(conn)
        .await?;

    // Empty review set means "unrated", not a division by zero
    #[allow(clippy::cast_precision_loss)]
    let rating = if grades.is_empty() {
        0.0
    } else {
        grades.iter().map(|g| f64::from(*g)).sum::<f64>() / grades.len() as f64
    };

    // Verify the product row exists before writing
    Product::find_by_id(product_id)
        .one(conn)
        .await?
        .ok_or(Error::ProductNotFound { id: product_id })?;

    Product::update_many()
        .col_expr(product::Column::Rating, Expr::value(rating))
        .filter(product::Column::Id.eq(product_id))
        .exec(conn)
        .await?;

    Ok(rating)
}
