//! Database integration tests for GreenMarket.
//!
//! Each test runs against its own throwaway Postgres database created by
//! `#[sqlx::test]`, with the storefront migrations applied first.
//!
//! # Running Tests
//!
//! ```bash
//! # Point sqlx at a Postgres server it may create databases on
//! export DATABASE_URL=postgres://localhost/greenmarket_test
//!
//! cargo test -p greenmarket-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `catalog_repository` - Category/item queries and the counter updates
//! - `order_repository` - Order ledger appends and history
//! - `client_repository` - Shopper profiles and category interests
