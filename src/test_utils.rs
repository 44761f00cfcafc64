//! Shared test utilities for the storefront service.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    config,
    core::{
        category, product,
        product::NewProduct,
        review,
        review::NewReview,
        user,
        user::Role,
    },
    entities,
    errors::Result,
};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Creates an in-memory `SQLite` database with all tables initialized.
///
/// The pool is pinned to a single connection so every task in a test sees
/// the same in-memory database, including tests that spawn concurrent work.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1);
    let db = Database::connect(options).await?;
    config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates an active user with the given email and role.
pub async fn create_test_user(
    db: &DatabaseConnection,
    email: &str,
    role: Role,
) -> Result<entities::user::Model> {
    user::create_user(db, email.to_string(), role).await
}

/// Creates a buyer account.
pub async fn create_test_buyer(
    db: &DatabaseConnection,
    email: &str,
) -> Result<entities::user::Model> {
    create_test_user(db, email, Role::Buyer).await
}

/// Creates a seller account.
pub async fn create_test_seller(
    db: &DatabaseConnection,
    email: &str,
) -> Result<entities::user::Model> {
    create_test_user(db, email, Role::Seller).await
}

/// Creates the default admin account.
pub async fn create_test_admin(db: &DatabaseConnection) -> Result<entities::user::Model> {
    create_test_user(db, "admin@example.com", Role::Admin).await
}

/// Creates an active category owned by the given admin.
pub async fn create_test_category(
    db: &DatabaseConnection,
    admin: &entities::user::Model,
    name: &str,
) -> Result<entities::category::Model> {
    category::create_category(db, admin, name.to_string(), None).await
}

/// Returns a valid product payload for the given category.
///
/// # Defaults
/// * `name`: "Test Product"
/// * `price`: 10.0
/// * `stock`: 5
#[must_use]
pub fn new_product_payload(category_id: i64) -> NewProduct {
    NewProduct {
        name: "Test Product".to_string(),
        description: None,
        price: 10.0,
        image_url: None,
        stock: 5,
        category_id,
    }
}

/// Creates an active product with defaults and the given name.
pub async fn create_test_product(
    db: &DatabaseConnection,
    seller: &entities::user::Model,
    category_id: i64,
    name: &str,
) -> Result<entities::product::Model> {
    let mut payload = new_product_payload(category_id);
    payload.name = name.to_string();
    product::create_product(db, seller, payload).await
}

/// Creates a review with the given grade and no comment.
pub async fn create_test_review(
    db: &DatabaseConnection,
    buyer: &entities::user::Model,
    product_id: i64,
    grade: i32,
) -> Result<entities::review::Model> {
    review::create_review(
        db,
        buyer,
        NewReview {
            product_id,
            comment: None,
            grade,
        },
    )
    .await
}

/// Sets up a complete test environment with one seller and one product.
/// Returns (db, seller, product) for review and rating tests.
pub async fn setup_with_product() -> Result<(
    DatabaseConnection,
    entities::user::Model,
    entities::product::Model,
)> {
    let db = setup_test_db().await?;
    // Distinct from create_test_admin's email so tests can add their own admin
    let admin = create_test_user(&db, "setup-admin@test.example", Role::Admin).await?;
    let seller = create_test_seller(&db, "seller@test.example").await?;
    let category = create_test_category(&db, &admin, "Test Category").await?;
    let product = create_test_product(&db, &seller, category.id, "Test Product").await?;
    Ok((db, seller, product))
}
