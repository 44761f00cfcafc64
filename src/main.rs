//! Storefront service entry point.

use dotenvy::dotenv;
use storefront::{api, config, errors::Result};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();

    // 3. Initialize database
    let db = config::database::create_connection()
        .await
        .inspect(|_| info!("Database connection established."))
        .inspect_err(|e| error!("Failed to connect to database: {e}"))?;
    config::database::create_tables(&db).await?;

    // 4. Seed initial categories when a seed file is present
    match config::categories::load_default_config() {
        Ok(seed) => {
            let inserted = config::categories::seed_categories(&db, &seed).await?;
            info!("Seeded {inserted} categories from categories.toml.");
        }
        Err(e) => warn!("Skipping category seeding: {e}"),
    }

    // 5. Serve the API
    let addr = config::get_listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {addr}");
    axum::serve(listener, api::router(db)).await?;

    Ok(())
}
