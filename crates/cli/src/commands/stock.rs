//! Stock management commands.

use greenmarket_core::ItemId;
use greenmarket_storefront::db::RepositoryError;
use greenmarket_storefront::db::catalog::{CatalogRepository, TOPUP_INCREMENT};

/// Add the fixed top-up amount to an item's stock.
///
/// # Errors
///
/// Returns an error if the item doesn't exist or the database is unreachable.
pub async fn topup(item_id: i32) -> Result<(), Box<dyn std::error::Error>> {
    let pool = super::connect().await?;
    let catalog = CatalogRepository::new(&pool);

    let id = ItemId::new(item_id);
    match catalog.topup(id).await {
        Ok(()) => {
            let item = catalog.get_item(id).await?;
            match item {
                Some(item) => tracing::info!(
                    item_id,
                    added = TOPUP_INCREMENT,
                    stock = item.stock,
                    "Stock topped up: {}",
                    item.name
                ),
                None => tracing::info!(item_id, added = TOPUP_INCREMENT, "Stock topped up"),
            }
            Ok(())
        }
        Err(RepositoryError::NotFound) => Err(format!("No item with id {item_id}").into()),
        Err(e) => Err(e.into()),
    }
}
