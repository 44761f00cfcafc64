//! Unified error type for the storefront service.
//!
//! Domain lookups distinguish "missing" from "soft-deleted" nowhere: a record
//! that has been deactivated is reported the same way as one that never
//! existed, so soft-deleted data never leaks through error messages.

use thiserror::Error;

/// All errors the service can produce.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration or input validation error
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what was invalid
        message: String,
    },

    /// Storage-layer failure surfaced from `SeaORM`
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O error (config files, network binding)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment variable error during startup
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// User does not exist or has been deactivated
    #[error("User {id} not found or inactive")]
    UserNotFound {
        /// Requested user ID
        id: i64,
    },

    /// Category does not exist or has been deactivated
    #[error("Category {id} not found or inactive")]
    CategoryNotFound {
        /// Requested category ID
        id: i64,
    },

    /// Product does not exist or has been deactivated
    #[error("Product {id} not found or inactive")]
    ProductNotFound {
        /// Requested product ID
        id: i64,
    },

    /// Review does not exist or has been deactivated
    #[error("Review {id} not found or inactive")]
    ReviewNotFound {
        /// Requested review ID
        id: i64,
    },

    /// Review grade outside the 1-5 range
    #[error("Grade should be from 1 to 5, got {grade}")]
    InvalidGrade {
        /// The rejected grade value
        grade: i32,
    },

    /// Role string that is not `buyer`, `seller`, or `admin`
    #[error("Unknown role: {role}")]
    InvalidRole {
        /// The rejected role string
        role: String,
    },

    /// Actor lacks the role required for the operation
    #[error("Forbidden: {message}")]
    Forbidden {
        /// Why the operation was refused
        message: String,
    },
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
