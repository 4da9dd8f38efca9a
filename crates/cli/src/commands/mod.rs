//! CLI command implementations.

pub mod migrate;
pub mod seed;
pub mod stock;

use secrecy::SecretString;
use sqlx::PgPool;

use greenmarket_storefront::db::create_pool;

/// Connect to the storefront database using environment configuration.
///
/// Reads `STOREFRONT_DATABASE_URL`, falling back to `DATABASE_URL`.
///
/// # Errors
///
/// Returns an error if neither variable is set or the connection fails.
pub async fn connect() -> Result<PgPool, Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("STOREFRONT_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| "STOREFRONT_DATABASE_URL or DATABASE_URL must be set")?;

    let pool = create_pool(&database_url).await?;
    Ok(pool)
}
