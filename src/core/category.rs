//! Category business logic - flat category management.
//!
//! Categories group products for listing. A `parent_id` may be recorded for
//! presentation, but the service performs no hierarchy traversal on it; the
//! only check is that a named parent exists and is active.

use crate::{
    core::user::{Role, require_role},
    entities::{Category, category, user},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Retrieves all active categories, ordered alphabetically by name.
pub async fn get_all_active_categories(db: &DatabaseConnection) -> Result<Vec<category::Model>> {
    Category::find()
        .filter(category::Column::IsActive.eq(true))
        .order_by_asc(category::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves an active category by ID, treating deactivated ones as missing.
pub async fn get_active_category(
    db: &DatabaseConnection,
    category_id: i64,
) -> Result<category::Model> {
    Category::find_by_id(category_id)
        .filter(category::Column::IsActive.eq(true))
        .one(db)
        .await?
        .ok_or(Error::CategoryNotFound { id: category_id })
}

/// Finds an active category by its exact name.
pub async fn get_category_by_name(
    db: &DatabaseConnection,
    name: &str,
) -> Result<Option<category::Model>> {
    Category::find()
        .filter(category::Column::Name.eq(name))
        .filter(category::Column::IsActive.eq(true))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new category (admin only).
///
/// The name must be non-empty after trimming. When a parent is given it must
/// reference an existing active category.
pub async fn create_category(
    db: &DatabaseConnection,
    actor: &user::Model,
    name: String,
    parent_id: Option<i64>,
) -> Result<category::Model> {
    require_role(actor, Role::Admin)?;

    if name.trim().is_empty() {
        return Err(Error::Config {
            message: "Category name cannot be empty".to_string(),
        });
    }

    if let Some(parent) = parent_id {
        get_active_category(db, parent).await?;
    }

    let category = category::ActiveModel {
        name: Set(name.trim().to_string()),
        parent_id: Set(parent_id),
        is_active: Set(true),
        ..Default::default()
    };
    category.insert(db).await.map_err(Into::into)
}

/// Soft-deletes a category (admin only), hiding it and its product listing.
pub async fn delete_category(
    db: &DatabaseConnection,
    actor: &user::Model,
    category_id: i64,
) -> Result<category::Model> {
    require_role(actor, Role::Admin)?;

    let mut category: category::ActiveModel = get_active_category(db, category_id).await?.into();
    category.is_active = Set(false);
    category.update(db).await.map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{create_test_admin, create_test_buyer, setup_test_db};

    #[tokio::test]
    async fn test_create_category_requires_admin() -> Result<()> {
        let db = setup_test_db().await?;
        let buyer = create_test_buyer(&db, "buyer@example.com").await?;

        let result = create_category(&db, &buyer, "Electronics".to_string(), None).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::Forbidden { message: _ }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_category_validation() -> Result<()> {
        let db = setup_test_db().await?;
        let admin = create_test_admin(&db).await?;

        let result = create_category(&db, &admin, "   ".to_string(), None).await;
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_category_with_parent() -> Result<()> {
        let db = setup_test_db().await?;
        let admin = create_test_admin(&db).await?;

        let parent = create_category(&db, &admin, "Electronics".to_string(), None).await?;
        let child =
            create_category(&db, &admin, "Laptops".to_string(), Some(parent.id)).await?;
        assert_eq!(child.parent_id, Some(parent.id));

        // Unknown parent is rejected
        let result = create_category(&db, &admin, "Orphans".to_string(), Some(999)).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::CategoryNotFound { id: 999 }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_category_hides_it() -> Result<()> {
        let db = setup_test_db().await?;
        let admin = create_test_admin(&db).await?;

        let category = create_category(&db, &admin, "Books".to_string(), None).await?;
        let deleted = delete_category(&db, &admin, category.id).await?;
        assert!(!deleted.is_active);

        assert!(get_all_active_categories(&db).await?.is_empty());
        let result = get_active_category(&db, category.id).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::CategoryNotFound { id: _ }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_category_by_name() -> Result<()> {
        let db = setup_test_db().await?;
        let admin = create_test_admin(&db).await?;

        let created = create_category(&db, &admin, "Garden".to_string(), None).await?;
        let found = get_category_by_name(&db, "Garden").await?;
        assert_eq!(found.unwrap().id, created.id);

        assert!(get_category_by_name(&db, "Missing").await?.is_none());

        Ok(())
    }
}
