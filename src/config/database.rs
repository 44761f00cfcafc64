//! Database configuration module for the storefront service.
//!
//! This module handles `SQLite` database connection and table creation using
//! `SeaORM`. Table creation uses `Schema::create_table_from_entity` so the
//! schema is generated from the entity definitions without manual SQL.

use crate::entities::{Category, Product, Review, User};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Gets the database URL from environment variable or returns default `SQLite` path.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://data/storefront.sqlite".to_string())
}

/// Establishes a connection to the database using the `DATABASE_URL`
/// environment variable, falling back to a local `SQLite` file.
pub async fn create_connection() -> Result<DatabaseConnection> {
    Database::connect(get_database_url())
        .await
        .map_err(Into::into)
}

/// Creates all necessary database tables from the entity definitions.
///
/// Creates tables for users, categories, products, and reviews. Intended for
/// first run and for in-memory test databases.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let user_table = schema.create_table_from_entity(User);
    let category_table = schema.create_table_from_entity(Category);
    let product_table = schema.create_table_from_entity(Product);
    let review_table = schema.create_table_from_entity(Review);

    db.execute(builder.build(&user_table)).await?;
    db.execute(builder.build(&category_table)).await?;
    db.execute(builder.build(&product_table)).await?;
    db.execute(builder.build(&review_table)).await?;

    Ok(())
}
