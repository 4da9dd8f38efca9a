//! Session-related types.
//!
//! Types stored in the session for authentication state.

use serde::{Deserialize, Serialize};

use greenmarket_core::{AccountId, Username};

/// Session-stored user identity.
///
/// Minimal data stored in the session to identify the logged-in user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Account database ID.
    pub id: AccountId,
    /// Login username.
    pub username: Username,
}

/// Session keys for per-session data.
pub mod keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";

    /// Key for the landing-page visit counter.
    pub const VISIT_COUNT: &str = "visit_count";
}
