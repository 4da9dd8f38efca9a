//! Account repository for database operations.
//!
//! Provides database access for base accounts and their password credentials.

use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use greenmarket_core::{AccountId, City, Email, Username};

use super::RepositoryError;
use crate::models::account::Account;

/// Repository for account database operations.
pub struct AccountRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AccountRepository<'a> {
    /// Create a new account repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get an account by its username.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored value is invalid.
    pub async fn get_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Account>, RepositoryError> {
        let row = sqlx::query(
            r"
            SELECT id, username, email, created_at, updated_at
            FROM account
            WHERE username = $1
            ",
        )
        .bind(username)
        .fetch_optional(self.pool)
        .await?;

        row.map(|r| account_from_row(&r)).transpose()
    }

    /// List all accounts, ordered by username ascending.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Account>, RepositoryError> {
        let rows = sqlx::query(
            r"
            SELECT id, username, email, created_at, updated_at
            FROM account
            ORDER BY username ASC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        rows.iter().map(account_from_row).collect()
    }

    /// Create an account with a password credential and its client profile.
    ///
    /// All three rows (account, password, client) are inserted in a single
    /// transaction; the client starts with the default city and no shipping
    /// details.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the username already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create_with_password(
        &self,
        username: &Username,
        password_hash: &str,
    ) -> Result<Account, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(
            r"
            INSERT INTO account (username)
            VALUES ($1)
            RETURNING id, username, email, created_at, updated_at
            ",
        )
        .bind(username)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("username already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        let account = account_from_row(&row)?;

        sqlx::query(
            r"
            INSERT INTO account_password (account_id, password_hash)
            VALUES ($1, $2)
            ",
        )
        .bind(account.id)
        .bind(password_hash)
        .execute(&mut *tx)
        .await?;

        // Every signup gets a shopper profile in the same transaction
        sqlx::query(
            r"
            INSERT INTO client (account_id, city)
            VALUES ($1, $2)
            ",
        )
        .bind(account.id)
        .bind(City::default())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(account)
    }

    /// Get an account and its password hash by username.
    ///
    /// Returns `None` if the account doesn't exist or has no password set.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_password_hash(
        &self,
        username: &Username,
    ) -> Result<Option<(Account, String)>, RepositoryError> {
        let row = sqlx::query(
            r"
            SELECT a.id, a.username, a.email, a.created_at, a.updated_at,
                   p.password_hash
            FROM account a
            LEFT JOIN account_password p ON a.id = p.account_id
            WHERE a.username = $1
            ",
        )
        .bind(username)
        .fetch_optional(self.pool)
        .await?;

        let Some(r) = row else {
            return Ok(None);
        };

        let Some(password_hash) = r.try_get::<Option<String>, _>("password_hash")? else {
            return Ok(None);
        };

        let account = account_from_row(&r)?;

        Ok(Some((account, password_hash)))
    }
}

/// Map a raw account row into the domain type, validating stored values.
fn account_from_row(row: &PgRow) -> Result<Account, RepositoryError> {
    let username: String = row.try_get("username")?;
    let username = Username::parse(&username).map_err(|e| {
        RepositoryError::DataCorruption(format!("invalid username in database: {e}"))
    })?;

    let email: Option<String> = row.try_get("email")?;
    let email = email
        .as_deref()
        .map(Email::parse)
        .transpose()
        .map_err(|e| RepositoryError::DataCorruption(format!("invalid email in database: {e}")))?;

    Ok(Account {
        id: AccountId::new(row.try_get("id")?),
        username,
        email,
        created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
        updated_at: row.try_get::<DateTime<Utc>, _>("updated_at")?,
    })
}
