//! Order ledger domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

use greenmarket_core::{ClientId, ItemId, OrderId, OrderStatus};

/// A single line-item order linking a client to an item.
#[derive(Debug, Clone, FromRow)]
pub struct OrderItem {
    /// Unique order ID.
    pub id: OrderId,
    /// The ordered item.
    pub item_id: ItemId,
    /// The client who placed the order.
    pub client_id: ClientId,
    /// Units ordered (always >= 1).
    pub quantity: i32,
    /// Lifecycle status.
    pub status: OrderStatus,
    /// Refreshed on every mutation of the row.
    pub last_updated: DateTime<Utc>,
}

/// An order row joined with its item, as shown on the "my orders" page.
#[derive(Debug, Clone, FromRow)]
pub struct OrderWithItem {
    /// Unique order ID.
    pub id: OrderId,
    /// Name of the ordered item.
    pub item_name: String,
    /// Current unit price of the item (not snapshotted at order time).
    pub item_price: Decimal,
    /// Units ordered.
    pub quantity: i32,
    /// Lifecycle status.
    pub status: OrderStatus,
    /// When the order was last touched.
    pub last_updated: DateTime<Utc>,
}

impl OrderWithItem {
    /// Total price of the line: quantity times the item's *current* price.
    ///
    /// The price is read at query time, so the total shifts if the catalog
    /// price changes after the order was placed.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        Decimal::from(self.quantity) * self.item_price
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn order(quantity: i32, price: &str) -> OrderWithItem {
        OrderWithItem {
            id: OrderId::new(1),
            item_name: "Apples".to_string(),
            item_price: Decimal::from_str(price).unwrap(),
            quantity,
            status: OrderStatus::Placed,
            last_updated: Utc::now(),
        }
    }

    #[test]
    fn test_total_price() {
        assert_eq!(
            order(3, "2.00").total_price(),
            Decimal::from_str("6.00").unwrap()
        );
    }

    #[test]
    fn test_total_price_single_unit() {
        assert_eq!(
            order(1, "4.99").total_price(),
            Decimal::from_str("4.99").unwrap()
        );
    }
}
