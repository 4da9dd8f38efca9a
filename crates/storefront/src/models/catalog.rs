//! Catalog domain types: item categories and items.

use rust_decimal::Decimal;
use sqlx::FromRow;

use greenmarket_core::{ItemId, TypeId};

/// A category grouping items for catalog navigation.
#[derive(Debug, Clone, FromRow)]
pub struct ItemType {
    /// Unique category ID.
    pub id: TypeId,
    /// Category name (non-empty).
    pub name: String,
}

/// A purchasable grocery item.
#[derive(Debug, Clone, FromRow)]
pub struct Item {
    /// Unique item ID.
    pub id: ItemId,
    /// Category this item belongs to.
    pub type_id: TypeId,
    /// Item name.
    pub name: String,
    /// Unit price.
    pub price: Decimal,
    /// Units in stock.
    pub stock: i32,
    /// Whether the item is currently offered.
    pub available: bool,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Count of "interested" survey submissions.
    pub interested: i32,
}
