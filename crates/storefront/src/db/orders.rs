//! Order ledger repository.
//!
//! Placing an order is an independent append: no stock check, no price
//! snapshot, no duplicate detection.

use sqlx::PgPool;

use greenmarket_core::{ClientId, ItemId, OrderStatus};

use super::RepositoryError;
use crate::models::order::{OrderItem, OrderWithItem};

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Append an order to the ledger with status Placed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails (including
    /// foreign-key violations for unknown item or client IDs).
    pub async fn create(
        &self,
        item_id: ItemId,
        client_id: ClientId,
        quantity: i32,
    ) -> Result<OrderItem, RepositoryError> {
        let order = sqlx::query_as::<_, OrderItem>(
            r"
            INSERT INTO order_item (item_id, client_id, quantity, status)
            VALUES ($1, $2, $3, $4)
            RETURNING id, item_id, client_id, quantity, status, last_updated
            ",
        )
        .bind(item_id)
        .bind(client_id)
        .bind(quantity)
        .bind(OrderStatus::Placed)
        .fetch_one(self.pool)
        .await?;

        Ok(order)
    }

    /// List a client's orders joined with item details, ordered by id
    /// ascending for deterministic output.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_client(
        &self,
        client_id: ClientId,
    ) -> Result<Vec<OrderWithItem>, RepositoryError> {
        let orders = sqlx::query_as::<_, OrderWithItem>(
            r"
            SELECT o.id, i.name AS item_name, i.price AS item_price,
                   o.quantity, o.status, o.last_updated
            FROM order_item o
            JOIN item i ON i.id = o.item_id
            WHERE o.client_id = $1
            ORDER BY o.id ASC
            ",
        )
        .bind(client_id)
        .fetch_all(self.pool)
        .await?;

        Ok(orders)
    }
}
