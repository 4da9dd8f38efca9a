//! Seed the database with demo data.
//!
//! Creates a small grocery catalog, a lab group roster, and a demo shopper
//! account. Each section is skipped when its table already has rows, so the
//! command is safe to run repeatedly.

use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::info;

use greenmarket_storefront::db::catalog::CatalogRepository;
use greenmarket_storefront::db::lab::LabRepository;
use greenmarket_storefront::services::auth::{AuthError, AuthService};

/// Demo shopper credentials.
const DEMO_USERNAME: &str = "demo_shopper";
const DEMO_PASSWORD: &str = "greenmarket-demo";

/// Seed demo data.
///
/// # Errors
///
/// Returns an error if the database is unreachable or an insert fails.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let pool = super::connect().await?;

    seed_catalog(&pool).await?;
    seed_lab_members(&pool).await?;
    seed_demo_account(&pool).await?;

    info!("Seeding complete!");
    Ok(())
}

/// Seed categories and items, unless the catalog already has data.
async fn seed_catalog(pool: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = CatalogRepository::new(pool);

    if !catalog.list_types(1).await?.is_empty() {
        info!("Catalog already seeded, skipping");
        return Ok(());
    }

    let produce = catalog.create_type("Produce").await?;
    catalog
        .create_item(
            produce.id,
            "Gala Apples",
            Decimal::new(199, 2),
            Some("Crisp and sweet, sold per pound."),
        )
        .await?;
    catalog
        .create_item(
            produce.id,
            "Bananas",
            Decimal::new(79, 2),
            Some("Sold per pound."),
        )
        .await?;
    catalog
        .create_item(produce.id, "Baby Spinach", Decimal::new(349, 2), None)
        .await?;

    let dairy = catalog.create_type("Dairy").await?;
    catalog
        .create_item(
            dairy.id,
            "Whole Milk",
            Decimal::new(459, 2),
            Some("4 litre jug."),
        )
        .await?;
    catalog
        .create_item(dairy.id, "Old Cheddar", Decimal::new(699, 2), None)
        .await?;

    let bakery = catalog.create_type("Bakery").await?;
    catalog
        .create_item(
            bakery.id,
            "Sourdough Loaf",
            Decimal::new(549, 2),
            Some("Baked fresh daily."),
        )
        .await?;
    catalog
        .create_item(bakery.id, "Butter Croissant", Decimal::new(275, 2), None)
        .await?;

    info!("Catalog seeded: 3 categories, 7 items");
    Ok(())
}

/// Seed the lab group roster, unless it already has members.
async fn seed_lab_members(pool: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
    let lab = LabRepository::new(pool);

    if !lab.list_all().await?.is_empty() {
        info!("Lab group already seeded, skipping");
        return Ok(());
    }

    lab.create("Priya", "Sharma", Some("https://example.com/~priya"))
        .await?;
    lab.create("Marcus", "Lee", None).await?;
    lab.create("Aisha", "Khan", Some("https://example.com/~aisha"))
        .await?;

    info!("Lab group seeded: 3 members");
    Ok(())
}

/// Create the demo shopper account, unless it already exists.
async fn seed_demo_account(pool: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
    let auth = AuthService::new(pool);

    match auth.register(DEMO_USERNAME, DEMO_PASSWORD).await {
        Ok(account) => {
            info!(username = %account.username, "Demo account created");
            Ok(())
        }
        Err(AuthError::UsernameTaken) => {
            info!("Demo account already exists, skipping");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
