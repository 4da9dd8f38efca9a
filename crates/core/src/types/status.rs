//! Order status enum.

use serde::{Deserialize, Serialize};

/// Lifecycle status of an order line.
///
/// Stored as a small integer; new orders default to [`OrderStatus::Placed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Cancelled,
    #[default]
    Placed,
    Shipped,
    Delivered,
}

impl OrderStatus {
    /// Get the integer code stored in the database.
    #[must_use]
    pub const fn code(self) -> i16 {
        match self {
            Self::Cancelled => 0,
            Self::Placed => 1,
            Self::Shipped => 2,
            Self::Delivered => 3,
        }
    }

    /// Decode a status from its integer code.
    #[must_use]
    pub const fn from_code(code: i16) -> Option<Self> {
        match code {
            0 => Some(Self::Cancelled),
            1 => Some(Self::Placed),
            2 => Some(Self::Shipped),
            3 => Some(Self::Delivered),
            _ => None,
        }
    }

    /// Human-readable label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cancelled => "Cancelled",
            Self::Placed => "Placed",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// SQLx support (with postgres feature): stored as SMALLINT
#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for OrderStatus {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <i16 as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <i16 as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for OrderStatus {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let code = <i16 as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        Self::from_code(code).ok_or_else(|| format!("invalid order status code: {code}").into())
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for OrderStatus {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <i16 as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.code(), buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for status in [
            OrderStatus::Cancelled,
            OrderStatus::Placed,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
        ] {
            assert_eq!(OrderStatus::from_code(status.code()), Some(status));
        }
    }

    #[test]
    fn test_from_code_invalid() {
        assert_eq!(OrderStatus::from_code(4), None);
        assert_eq!(OrderStatus::from_code(-1), None);
    }

    #[test]
    fn test_default_is_placed() {
        assert_eq!(OrderStatus::default(), OrderStatus::Placed);
        assert_eq!(OrderStatus::default().code(), 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(OrderStatus::Shipped.to_string(), "Shipped");
    }
}
