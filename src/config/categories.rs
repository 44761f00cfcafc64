//! Category seed configuration loading from categories.toml
//!
//! This module loads the initial category catalog from a TOML file and seeds
//! the database on startup. Seeding is idempotent: a category whose name is
//! already present is left untouched, so the file can grow over time and be
//! re-applied on every boot.

use crate::{
    entities::category,
    errors::{Error, Result},
};
use sea_orm::{DatabaseConnection, Set, prelude::*};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire categories.toml file
#[derive(Debug, Deserialize)]
pub struct SeedConfig {
    /// List of categories to seed
    pub categories: Vec<CategorySeed>,
}

/// Configuration for a single category
#[derive(Debug, Deserialize, Clone)]
pub struct CategorySeed {
    /// Name of the category
    pub name: String,
    /// Optional name of the parent category; must appear earlier in the file
    /// or already exist in the database
    #[serde(default)]
    pub parent: Option<String>,
}

/// Loads category seed configuration from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read or the TOML is invalid.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SeedConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read category seed file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse categories.toml: {e}"),
    })
}

/// Loads category seed configuration from the default location (./categories.toml)
pub fn load_default_config() -> Result<SeedConfig> {
    load_config("categories.toml")
}

/// Seeds the category table from the configuration, skipping names that are
/// already present. Returns the number of categories inserted.
///
/// # Errors
/// Returns `Error::Config` if a seed entry names a parent that neither
/// appears earlier in the file nor exists in the database.
pub async fn seed_categories(db: &DatabaseConnection, config: &SeedConfig) -> Result<usize> {
    let mut inserted = 0;

    for seed in &config.categories {
        if crate::core::category::get_category_by_name(db, &seed.name)
            .await?
            .is_some()
        {
            continue;
        }

        let parent_id = match &seed.parent {
            None => None,
            Some(parent_name) => {
                let parent = crate::core::category::get_category_by_name(db, parent_name)
                    .await?
                    .ok_or_else(|| Error::Config {
                        message: format!(
                            "Category '{}' references unknown parent '{parent_name}'",
                            seed.name
                        ),
                    })?;
                Some(parent.id)
            }
        };

        let category = category::ActiveModel {
            name: Set(seed.name.clone()),
            parent_id: Set(parent_id),
            is_active: Set(true),
            ..Default::default()
        };
        category.insert(db).await?;
        inserted += 1;
    }

    Ok(inserted)
}
