//! Review entity - A buyer's graded opinion of a product.
//!
//! Reviews are append/flag-only: a review is inserted once with an immutable
//! `product_id` and `grade`, and later at most flipped inactive by an admin.
//! Grades are constrained to 1-5 at write time in `core::review`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Review database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reviews")]
pub struct Model {
    /// Unique identifier for the review
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the buyer who wrote the review
    pub user_id: i64,
    /// ID of the reviewed product, immutable after creation
    pub product_id: i64,
    /// Optional free-text comment
    pub comment: Option<String>,
    /// When the review was written
    pub comment_date: DateTimeUtc,
    /// Star grade, 1 through 5
    pub grade: i32,
    /// Soft delete flag - if false, the review is excluded from the rating
    pub is_active: bool,
}

/// Defines relationships between Review and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each review belongs to one product
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id"
    )]
    Product,
    /// Each review belongs to one user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
