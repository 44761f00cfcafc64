//! Configuration management for the storefront service.

/// Category seed configuration loading from categories.toml
pub mod categories;
/// Database configuration and connection management
pub mod database;

/// Returns the HTTP listen address from `LISTEN_ADDR`, defaulting to
/// `127.0.0.1:8000`.
#[must_use]
pub fn get_listen_addr() -> String {
    std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "127.0.0.1:8000".to_string())
}
