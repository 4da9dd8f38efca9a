//! Integration tests for shopper profiles and category interests.

use sqlx::PgPool;

use greenmarket_core::City;
use greenmarket_storefront::db::catalog::CatalogRepository;
use greenmarket_storefront::db::clients::ClientRepository;
use greenmarket_storefront::services::auth::AuthService;

#[sqlx::test(migrations = "../storefront/migrations")]
async fn test_signup_provisions_a_client_profile(pool: PgPool) {
    let account = AuthService::new(&pool)
        .register("alice", "plenty-0f-groceries")
        .await
        .expect("Failed to register account");

    let client = ClientRepository::new(&pool)
        .get_by_account(account.id)
        .await
        .expect("Failed to fetch client")
        .expect("Signup did not create a client profile");
    assert_eq!(client.account_id, account.id);
    assert_eq!(client.city, City::default());
}

#[sqlx::test(migrations = "../storefront/migrations")]
async fn test_interests_list_recorded_categories(pool: PgPool) {
    let catalog = CatalogRepository::new(&pool);
    let produce = catalog
        .create_type("Produce")
        .await
        .expect("Failed to create category");
    let bakery = catalog
        .create_type("Bakery")
        .await
        .expect("Failed to create category");

    let account = AuthService::new(&pool)
        .register("alice", "plenty-0f-groceries")
        .await
        .expect("Failed to register account");
    let clients = ClientRepository::new(&pool);
    let client = clients
        .get_by_account(account.id)
        .await
        .expect("Failed to fetch client")
        .expect("Signup did not create a client profile");

    clients
        .add_interest(client.id, produce.id)
        .await
        .expect("Failed to add interest");
    clients
        .add_interest(client.id, bakery.id)
        .await
        .expect("Failed to add interest");
    // Recording the same pair again is a no-op
    clients
        .add_interest(client.id, produce.id)
        .await
        .expect("Duplicate interest was rejected");

    let interests = clients
        .interests(client.id)
        .await
        .expect("Failed to list interests");
    let names: Vec<&str> = interests.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Bakery", "Produce"]);
}
