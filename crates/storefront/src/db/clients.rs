//! Client repository: shopper profiles and their category interests.

use sqlx::PgPool;

use greenmarket_core::{AccountId, ClientId, TypeId, Username};

use super::RepositoryError;
use crate::models::catalog::ItemType;
use crate::models::client::Client;

/// A client joined with its account's username, for choice lists.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ClientChoice {
    /// Client ID.
    pub id: ClientId,
    /// Username of the owning account.
    pub username: Username,
}

/// Repository for client database operations.
pub struct ClientRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ClientRepository<'a> {
    /// Create a new client repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get the client profile belonging to an account, if any.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_account(
        &self,
        account_id: AccountId,
    ) -> Result<Option<Client>, RepositoryError> {
        let client = sqlx::query_as::<_, Client>(
            r"
            SELECT id, account_id, shipping_address, city, phone_number
            FROM client
            WHERE account_id = $1
            ",
        )
        .bind(account_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(client)
    }

    /// Get a client by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: ClientId) -> Result<Option<Client>, RepositoryError> {
        let client = sqlx::query_as::<_, Client>(
            r"
            SELECT id, account_id, shipping_address, city, phone_number
            FROM client
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(client)
    }

    /// List every client with its username, ordered by username.
    ///
    /// Used to build the order form's client choice list.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_choices(&self) -> Result<Vec<ClientChoice>, RepositoryError> {
        let choices = sqlx::query_as::<_, ClientChoice>(
            r"
            SELECT c.id, a.username
            FROM client c
            JOIN account a ON a.id = c.account_id
            ORDER BY a.username ASC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(choices)
    }

    /// Record that a client is interested in a category.
    ///
    /// Inserting the same pair twice is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn add_interest(
        &self,
        client_id: ClientId,
        type_id: TypeId,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO client_interest (client_id, type_id)
            VALUES ($1, $2)
            ON CONFLICT (client_id, type_id) DO NOTHING
            ",
        )
        .bind(client_id)
        .bind(type_id)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// List the categories a client has expressed interest in, ordered by
    /// name. Shown on the order history page.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn interests(&self, client_id: ClientId) -> Result<Vec<ItemType>, RepositoryError> {
        let types = sqlx::query_as::<_, ItemType>(
            r"
            SELECT t.id, t.name
            FROM client_interest ci
            JOIN item_type t ON t.id = ci.type_id
            WHERE ci.client_id = $1
            ORDER BY t.name ASC
            ",
        )
        .bind(client_id)
        .fetch_all(self.pool)
        .await?;

        Ok(types)
    }
}
