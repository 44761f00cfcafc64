//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod category;
pub mod product;
pub mod review;
pub mod user;

// Re-export specific types to avoid conflicts
pub use category::{Column as CategoryColumn, Entity as Category, Model as CategoryModel};
pub use product::{Column as ProductColumn, Entity as Product, Model as ProductModel};
pub use review::{Column as ReviewColumn, Entity as Review, Model as ReviewModel};
pub use user::{Column as UserColumn, Entity as User, Model as UserModel};
