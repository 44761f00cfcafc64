//! User entity - Represents registered accounts and their authorization role.
//!
//! Users carry a role string (`"buyer"`, `"seller"`, or `"admin"`) that gates
//! what they may do: buyers write reviews, sellers manage products, admins
//! moderate. Credentials live in the session layer outside this service, so
//! no password material is stored here.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// User database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Unique identifier for the user
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Email address, unique across all accounts
    #[sea_orm(unique)]
    pub email: String,
    /// Authorization role: `"buyer"`, `"seller"`, or `"admin"`
    pub role: String,
    /// Soft delete flag - if false, the account is deactivated
    pub is_active: bool,
}

/// Defines relationships between User and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One seller has many products
    #[sea_orm(has_many = "super::product::Entity")]
    Products,
    /// One buyer has many reviews
    #[sea_orm(has_many = "super::review::Entity")]
    Reviews,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviews.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
