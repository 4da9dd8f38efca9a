//! Lab group roster type.

use sqlx::FromRow;

use greenmarket_core::LabMemberId;

/// A member of the lab group page.
#[derive(Debug, Clone, FromRow)]
pub struct LabMember {
    /// Unique member ID.
    pub id: LabMemberId,
    pub first_name: String,
    pub last_name: String,
    /// Optional personal home page URL.
    pub personal_page: Option<String>,
}
