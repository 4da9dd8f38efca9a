//! Delivery city enum.

use serde::{Deserialize, Serialize};

/// Error decoding a [`City`] from its stored code.
#[derive(thiserror::Error, Debug, Clone)]
#[error("unknown city code: {0}")]
pub struct CityError(pub String);

/// Cities the store delivers to.
///
/// Stored as a two-letter code; new clients default to [`City::Chatham`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum City {
    Windsor,
    Toronto,
    #[default]
    Chatham,
    Waterloo,
}

impl City {
    /// All cities, in display order.
    pub const ALL: [Self; 4] = [Self::Windsor, Self::Toronto, Self::Chatham, Self::Waterloo];

    /// Get the two-letter code stored in the database.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Windsor => "WD",
            Self::Toronto => "TO",
            Self::Chatham => "CH",
            Self::Waterloo => "WL",
        }
    }

    /// Decode a city from its two-letter code.
    ///
    /// # Errors
    ///
    /// Returns `CityError` if the code is not one of the known cities.
    pub fn from_code(code: &str) -> Result<Self, CityError> {
        match code {
            "WD" => Ok(Self::Windsor),
            "TO" => Ok(Self::Toronto),
            "CH" => Ok(Self::Chatham),
            "WL" => Ok(Self::Waterloo),
            other => Err(CityError(other.to_owned())),
        }
    }

    /// Human-readable name for display.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Windsor => "Windsor",
            Self::Toronto => "Toronto",
            Self::Chatham => "Chatham",
            Self::Waterloo => "Waterloo",
        }
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// SQLx support (with postgres feature): stored as TEXT code
#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for City {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for City {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let code = <String as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        Ok(Self::from_code(&code)?)
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for City {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <&str as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.code(), buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for city in City::ALL {
            assert_eq!(City::from_code(city.code()).ok(), Some(city));
        }
    }

    #[test]
    fn test_from_code_invalid() {
        assert!(City::from_code("XX").is_err());
        assert!(City::from_code("").is_err());
    }

    #[test]
    fn test_default_is_chatham() {
        assert_eq!(City::default(), City::Chatham);
        assert_eq!(City::default().code(), "CH");
    }

    #[test]
    fn test_display() {
        assert_eq!(City::Windsor.to_string(), "Windsor");
    }
}
