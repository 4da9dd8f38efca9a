//! Lab group roster repository.

use sqlx::PgPool;

use super::RepositoryError;
use crate::models::lab::LabMember;

/// Repository for lab member database operations.
pub struct LabRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> LabRepository<'a> {
    /// Create a new lab repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all lab members, ordered by first name descending.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<LabMember>, RepositoryError> {
        let members = sqlx::query_as::<_, LabMember>(
            r"
            SELECT id, first_name, last_name, personal_page
            FROM lab_member
            ORDER BY first_name DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(members)
    }

    /// Add a lab member (seed use).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(
        &self,
        first_name: &str,
        last_name: &str,
        personal_page: Option<&str>,
    ) -> Result<LabMember, RepositoryError> {
        let member = sqlx::query_as::<_, LabMember>(
            r"
            INSERT INTO lab_member (first_name, last_name, personal_page)
            VALUES ($1, $2, $3)
            RETURNING id, first_name, last_name, personal_page
            ",
        )
        .bind(first_name)
        .bind(last_name)
        .bind(personal_page)
        .fetch_one(self.pool)
        .await?;

        Ok(member)
    }
}
