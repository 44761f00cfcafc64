//! Core business logic, independent of the HTTP layer.
//!
//! Each aggregate gets its own module of async free functions over a
//! database connection. Mutations that must stay consistent with the cached
//! product rating (review create and soft-delete) open a database transaction
//! and run the rating recomputation inside it before committing.

pub mod category;
pub mod product;
pub mod rating;
pub mod review;
pub mod user;
