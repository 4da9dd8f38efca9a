//! Integration tests for the order ledger.

use rust_decimal::Decimal;
use sqlx::PgPool;

use greenmarket_core::OrderStatus;
use greenmarket_storefront::db::catalog::CatalogRepository;
use greenmarket_storefront::db::clients::ClientRepository;
use greenmarket_storefront::db::orders::OrderRepository;
use greenmarket_storefront::models::catalog::Item;
use greenmarket_storefront::models::client::Client;
use greenmarket_storefront::services::auth::AuthService;

/// Register a shopper and return the client profile created alongside it.
async fn register_client(pool: &PgPool, username: &str) -> Client {
    let account = AuthService::new(pool)
        .register(username, "plenty-0f-groceries")
        .await
        .expect("Failed to register account");

    ClientRepository::new(pool)
        .get_by_account(account.id)
        .await
        .expect("Failed to fetch client")
        .expect("Signup did not create a client profile")
}

/// Create a category with a single item.
async fn seed_item(pool: &PgPool, name: &str) -> Item {
    let catalog = CatalogRepository::new(pool);
    let category = catalog
        .create_type("Produce")
        .await
        .expect("Failed to create category");
    catalog
        .create_item(category.id, name, Decimal::new(199, 2), None)
        .await
        .expect("Failed to create item")
}

#[sqlx::test(migrations = "../storefront/migrations")]
async fn test_create_appends_one_placed_row(pool: PgPool) {
    let client = register_client(&pool, "alice").await;
    let item = seed_item(&pool, "Gala Apples").await;
    let orders = OrderRepository::new(&pool);

    let order = orders
        .create(item.id, client.id, 2)
        .await
        .expect("Failed to place order");
    assert_eq!(order.status, OrderStatus::Placed);
    assert_eq!(order.quantity, 2);

    let history = orders
        .list_for_client(client.id)
        .await
        .expect("Failed to list orders");
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].id, order.id);
    assert_eq!(history[0].item_name, "Gala Apples");
    assert_eq!(history[0].status, OrderStatus::Placed);
}

#[sqlx::test(migrations = "../storefront/migrations")]
async fn test_history_is_scoped_to_the_client(pool: PgPool) {
    let alice = register_client(&pool, "alice").await;
    let bob = register_client(&pool, "bob").await;
    let item = seed_item(&pool, "Bananas").await;
    let orders = OrderRepository::new(&pool);

    orders
        .create(item.id, alice.id, 1)
        .await
        .expect("Failed to place order");

    let history = orders
        .list_for_client(bob.id)
        .await
        .expect("Failed to list orders");
    assert!(history.is_empty());
}

#[sqlx::test(migrations = "../storefront/migrations")]
async fn test_deleting_an_item_removes_its_orders(pool: PgPool) {
    let client = register_client(&pool, "alice").await;
    let item = seed_item(&pool, "Baby Spinach").await;
    let orders = OrderRepository::new(&pool);

    orders
        .create(item.id, client.id, 3)
        .await
        .expect("Failed to place order");

    sqlx::query("DELETE FROM item WHERE id = $1")
        .bind(item.id)
        .execute(&pool)
        .await
        .expect("Item delete was blocked");

    let history = orders
        .list_for_client(client.id)
        .await
        .expect("Failed to list orders");
    assert!(history.is_empty());
}
