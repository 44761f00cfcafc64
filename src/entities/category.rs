//! Category entity - Organizes products into a flat list of named groups.
//!
//! A category may record a `parent_id` for display purposes; the service
//! stores it as plain data and performs no tree traversal on it.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Category database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    /// Unique identifier for the category
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name of the category (e.g., "Electronics")
    pub name: String,
    /// Optional parent category ID, stored as plain data
    pub parent_id: Option<i64>,
    /// Soft delete flag - if false, the category and its listing are hidden
    pub is_active: bool,
}

/// Defines relationships between Category and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One category has many products
    #[sea_orm(has_many = "super::product::Entity")]
    Products,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
