//! Product entity - Represents items offered for sale by sellers.
//!
//! The `rating` column is a cached aggregate: the arithmetic mean of the
//! grades of this product's active reviews, or 0.0 when unrated. It is
//! re-derivable at any time and is written exclusively by
//! [`crate::core::rating::recompute_product_rating`].

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Unique identifier for the product
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name of the product
    pub name: String,
    /// Optional free-text description
    pub description: Option<String>,
    /// Price per unit, always positive
    pub price: f64,
    /// Optional URL of the product image
    pub image_url: Option<String>,
    /// Units in stock, never negative
    pub stock: i32,
    /// ID of the category this product belongs to
    pub category_id: i64,
    /// ID of the seller who owns this product
    pub seller_id: i64,
    /// Cached mean grade of active reviews, 0.0 when unrated
    pub rating: f64,
    /// Soft delete flag - if false, product is hidden but data is preserved
    pub is_active: bool,
}

/// Defines relationships between Product and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each product belongs to one category
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,
    /// Each product belongs to one seller
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::SellerId",
        to = "super::user::Column::Id"
    )]
    Seller,
    /// One product has many reviews
    #[sea_orm(has_many = "super::review::Entity")]
    Reviews,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Seller.def()
    }
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviews.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
