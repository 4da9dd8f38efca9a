//! Integration tests for the catalog repository.
//!
//! Run with a Postgres server available; see the crate docs.

use rust_decimal::Decimal;
use sqlx::PgPool;

use greenmarket_core::{ItemId, TypeId};
use greenmarket_storefront::db::RepositoryError;
use greenmarket_storefront::db::catalog::{CatalogRepository, TOPUP_INCREMENT};

#[sqlx::test(migrations = "../storefront/migrations")]
async fn test_interest_count_matches_yes_submissions(pool: PgPool) {
    let catalog = CatalogRepository::new(&pool);

    let produce = catalog
        .create_type("Produce")
        .await
        .expect("Failed to create category");
    let item = catalog
        .create_item(produce.id, "Gala Apples", Decimal::new(199, 2), None)
        .await
        .expect("Failed to create item");
    assert_eq!(item.interested, 0);

    for _ in 0..3 {
        catalog
            .record_interest(item.id)
            .await
            .expect("Failed to record interest");
    }

    let item = catalog
        .get_item(item.id)
        .await
        .expect("Failed to fetch item")
        .expect("Item disappeared");
    assert_eq!(item.interested, 3);
}

#[sqlx::test(migrations = "../storefront/migrations")]
async fn test_record_interest_unknown_item(pool: PgPool) {
    let catalog = CatalogRepository::new(&pool);

    let result = catalog.record_interest(ItemId::new(9999)).await;
    assert!(matches!(result, Err(RepositoryError::NotFound)));
}

#[sqlx::test(migrations = "../storefront/migrations")]
async fn test_topup_twice_adds_double_increment(pool: PgPool) {
    let catalog = CatalogRepository::new(&pool);

    let dairy = catalog
        .create_type("Dairy")
        .await
        .expect("Failed to create category");
    let item = catalog
        .create_item(dairy.id, "Whole Milk", Decimal::new(459, 2), None)
        .await
        .expect("Failed to create item");
    let starting_stock = item.stock;

    catalog.topup(item.id).await.expect("First topup failed");
    catalog.topup(item.id).await.expect("Second topup failed");

    let item = catalog
        .get_item(item.id)
        .await
        .expect("Failed to fetch item")
        .expect("Item disappeared");
    assert_eq!(item.stock, starting_stock + 2 * TOPUP_INCREMENT);
}

#[sqlx::test(migrations = "../storefront/migrations")]
async fn test_topup_unknown_item(pool: PgPool) {
    let catalog = CatalogRepository::new(&pool);

    let result = catalog.topup(ItemId::new(9999)).await;
    assert!(matches!(result, Err(RepositoryError::NotFound)));
}

#[sqlx::test(migrations = "../storefront/migrations")]
async fn test_get_type_unknown_is_none(pool: PgPool) {
    let catalog = CatalogRepository::new(&pool);

    let found = catalog
        .get_type(TypeId::new(9999))
        .await
        .expect("Query failed");
    assert!(found.is_none());
}

#[sqlx::test(migrations = "../storefront/migrations")]
async fn test_list_items_by_type_returns_only_its_items(pool: PgPool) {
    let catalog = CatalogRepository::new(&pool);

    let produce = catalog
        .create_type("Produce")
        .await
        .expect("Failed to create category");
    let bakery = catalog
        .create_type("Bakery")
        .await
        .expect("Failed to create category");

    let apples = catalog
        .create_item(produce.id, "Gala Apples", Decimal::new(199, 2), None)
        .await
        .expect("Failed to create item");
    let bananas = catalog
        .create_item(produce.id, "Bananas", Decimal::new(79, 2), None)
        .await
        .expect("Failed to create item");
    catalog
        .create_item(bakery.id, "Sourdough Loaf", Decimal::new(549, 2), None)
        .await
        .expect("Failed to create item");

    let items = catalog
        .list_items_by_type(produce.id)
        .await
        .expect("Query failed");
    let ids: Vec<ItemId> = items.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![apples.id, bananas.id]);
}

#[sqlx::test(migrations = "../storefront/migrations")]
async fn test_list_all_items_is_unpaged(pool: PgPool) {
    let catalog = CatalogRepository::new(&pool);

    let produce = catalog
        .create_type("Produce")
        .await
        .expect("Failed to create category");
    for n in 0..25 {
        catalog
            .create_item(produce.id, &format!("Item {n}"), Decimal::new(100, 2), None)
            .await
            .expect("Failed to create item");
    }

    let page = catalog.list_items(20).await.expect("Query failed");
    assert_eq!(page.len(), 20);

    let all = catalog.list_all_items().await.expect("Query failed");
    assert_eq!(all.len(), 25);
}
