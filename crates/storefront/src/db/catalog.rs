//! Catalog repository: item categories and items.
//!
//! The two counter mutations (`record_interest`, `topup`) are single-statement
//! `SET col = col + N` updates so concurrent requests cannot lose increments.

use sqlx::PgPool;

use greenmarket_core::{ItemId, TypeId};

use super::RepositoryError;
use crate::models::catalog::{Item, ItemType};

/// Fixed stock increment applied by [`CatalogRepository::topup`].
pub const TOPUP_INCREMENT: i32 = 50;

/// Repository for catalog database operations.
pub struct CatalogRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CatalogRepository<'a> {
    /// Create a new catalog repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List categories ordered by id, up to `limit`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_types(&self, limit: i64) -> Result<Vec<ItemType>, RepositoryError> {
        let types = sqlx::query_as::<_, ItemType>(
            r"
            SELECT id, name
            FROM item_type
            ORDER BY id ASC
            LIMIT $1
            ",
        )
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(types)
    }

    /// Get a category by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_type(&self, id: TypeId) -> Result<Option<ItemType>, RepositoryError> {
        let item_type = sqlx::query_as::<_, ItemType>(
            r"
            SELECT id, name
            FROM item_type
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(item_type)
    }

    /// List every item belonging to a category, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_items_by_type(&self, type_id: TypeId) -> Result<Vec<Item>, RepositoryError> {
        let items = sqlx::query_as::<_, Item>(
            r"
            SELECT id, type_id, name, price, stock, available, description, interested
            FROM item
            WHERE type_id = $1
            ORDER BY id ASC
            ",
        )
        .bind(type_id)
        .fetch_all(self.pool)
        .await?;

        Ok(items)
    }

    /// List items ordered by id, up to `limit`.
    ///
    /// Each item carries its interest count in the `interested` column; the
    /// count is the number of successful "yes" survey submissions.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_items(&self, limit: i64) -> Result<Vec<Item>, RepositoryError> {
        let items = sqlx::query_as::<_, Item>(
            r"
            SELECT id, type_id, name, price, stock, available, description, interested
            FROM item
            ORDER BY id ASC
            LIMIT $1
            ",
        )
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(items)
    }

    /// List every item ordered by id.
    ///
    /// The order form offers the whole catalog, so this query is unpaged.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all_items(&self) -> Result<Vec<Item>, RepositoryError> {
        let items = sqlx::query_as::<_, Item>(
            r"
            SELECT id, type_id, name, price, stock, available, description, interested
            FROM item
            ORDER BY id ASC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(items)
    }

    /// Get an item by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_item(&self, id: ItemId) -> Result<Option<Item>, RepositoryError> {
        let item = sqlx::query_as::<_, Item>(
            r"
            SELECT id, type_id, name, price, stock, available, description, interested
            FROM item
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(item)
    }

    /// Atomically increment an item's interest counter by one.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the item doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn record_interest(&self, id: ItemId) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE item
            SET interested = interested + 1
            WHERE id = $1
            ",
        )
        .bind(id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Atomically add the fixed top-up increment to an item's stock.
    ///
    /// There is no upper bound: applying the top-up twice adds 100 units.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the item doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn topup(&self, id: ItemId) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE item
            SET stock = stock + $2
            WHERE id = $1
            ",
        )
        .bind(id)
        .bind(TOPUP_INCREMENT)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Create a category (seed/admin use).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create_type(&self, name: &str) -> Result<ItemType, RepositoryError> {
        let item_type = sqlx::query_as::<_, ItemType>(
            r"
            INSERT INTO item_type (name)
            VALUES ($1)
            RETURNING id, name
            ",
        )
        .bind(name)
        .fetch_one(self.pool)
        .await?;

        Ok(item_type)
    }

    /// Create an item (seed/admin use). Stock and availability take their
    /// schema defaults (100 units, available).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create_item(
        &self,
        type_id: TypeId,
        name: &str,
        price: rust_decimal::Decimal,
        description: Option<&str>,
    ) -> Result<Item, RepositoryError> {
        let item = sqlx::query_as::<_, Item>(
            r"
            INSERT INTO item (type_id, name, price, description)
            VALUES ($1, $2, $3, $4)
            RETURNING id, type_id, name, price, stock, available, description, interested
            ",
        )
        .bind(type_id)
        .bind(name)
        .bind(price)
        .bind(description)
        .fetch_one(self.pool)
        .await?;

        Ok(item)
    }
}
