//! User business logic - account records and role-based authorization.
//!
//! Authentication (passwords, sessions, tokens) lives outside this service;
//! here a user is an ID, an email, and a role. The [`Role`] enum is the
//! single place role strings are parsed, and [`require_role`] is the check
//! every privileged core operation runs before touching the database.

use crate::{
    entities::{User, user},
    errors::{Error, Result},
};
use sea_orm::{Set, prelude::*};
use std::fmt;

/// Authorization role attached to every user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// May create reviews
    Buyer,
    /// May create and manage their own products
    Seller,
    /// May manage categories and soft-delete reviews
    Admin,
}

impl Role {
    /// Returns the canonical string stored in the `role` column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Buyer => "buyer",
            Self::Seller => "seller",
            Self::Admin => "admin",
        }
    }

    /// Parses a role column value, rejecting anything unknown.
    pub fn parse(role: &str) -> Result<Self> {
        match role {
            "buyer" => Ok(Self::Buyer),
            "seller" => Ok(Self::Seller),
            "admin" => Ok(Self::Admin),
            other => Err(Error::InvalidRole {
                role: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ensures the acting user holds the given role.
///
/// # Errors
/// Returns `Error::Forbidden` if the actor holds a different role, or
/// `Error::InvalidRole` if the stored role string is unrecognized.
pub fn require_role(actor: &user::Model, role: Role) -> Result<()> {
    if Role::parse(&actor.role)? == role {
        Ok(())
    } else {
        Err(Error::Forbidden {
            message: format!("Requires {role} role"),
        })
    }
}

/// Creates a new active user account with the given role.
///
/// The email is trimmed and must be non-empty and unused; uniqueness is
/// checked up front so callers get a clean validation error instead of a
/// constraint violation.
pub async fn create_user(db: &DatabaseConnection, email: String, role: Role) -> Result<user::Model> {
    let email = email.trim().to_string();
    if email.is_empty() {
        return Err(Error::Config {
            message: "Email cannot be empty".to_string(),
        });
    }

    let existing = User::find()
        .filter(user::Column::Email.eq(&email))
        .one(db)
        .await?;
    if existing.is_some() {
        return Err(Error::Config {
            message: format!("Email {email} is already registered"),
        });
    }

    let account = user::ActiveModel {
        email: Set(email),
        role: Set(role.as_str().to_string()),
        is_active: Set(true),
        ..Default::default()
    };
    account.insert(db).await.map_err(Into::into)
}

/// Retrieves a user by ID regardless of activation state.
pub async fn get_user_by_id(db: &DatabaseConnection, user_id: i64) -> Result<Option<user::Model>> {
    User::find_by_id(user_id).one(db).await.map_err(Into::into)
}

/// Retrieves an active user by ID, treating deactivated accounts as missing.
pub async fn get_active_user(db: &DatabaseConnection, user_id: i64) -> Result<user::Model> {
    User::find_by_id(user_id)
        .filter(user::Column::IsActive.eq(true))
        .one(db)
        .await?
        .ok_or(Error::UserNotFound { id: user_id })
}
