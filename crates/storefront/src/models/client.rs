//! Client (shopper) domain type.

use sqlx::FromRow;

use greenmarket_core::{AccountId, City, ClientId};

/// A registered shopper.
///
/// References its base [`super::Account`] one-to-one; login identity and
/// shopper profile live in separate tables.
#[derive(Debug, Clone, FromRow)]
pub struct Client {
    /// Unique client ID.
    pub id: ClientId,
    /// The base account this client belongs to (one-to-one).
    pub account_id: AccountId,
    /// Optional shipping address.
    pub shipping_address: Option<String>,
    /// Delivery city.
    pub city: City,
    /// Optional phone number.
    pub phone_number: Option<String>,
}
