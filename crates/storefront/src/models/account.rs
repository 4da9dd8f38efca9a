//! Base account identity.
//!
//! An `Account` is the generic login identity; shopper-specific data lives
//! on [`crate::models::Client`], which references an account by id.

use chrono::{DateTime, Utc};

use greenmarket_core::{AccountId, Email, Username};

/// A registered account (domain type).
#[derive(Debug, Clone)]
pub struct Account {
    /// Unique account ID.
    pub id: AccountId,
    /// Login username.
    pub username: Username,
    /// Contact email, if one was provided.
    pub email: Option<Email>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}
