//! Postgres-backed login sessions.
//!
//! Session state lives in the database (the table is created by
//! `gm-cli migrate`); the cookie carries only the session id. Visit counts
//! and the logged-in user both ride on this layer.

use sqlx::PgPool;
use tower_sessions::cookie::SameSite;
use tower_sessions::cookie::time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::PostgresStore;

use crate::config::StorefrontConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "gm_session";

/// Sessions expire after this many days without a request.
const SESSION_IDLE_DAYS: i64 = 7;

/// Build the session layer on the shared connection pool.
///
/// The cookie is host-wide, Lax, and HTTP-only, and carries the `Secure`
/// attribute when [`StorefrontConfig::serves_https`] says the deployment
/// is behind TLS.
#[must_use]
pub fn session_layer(
    pool: &PgPool,
    config: &StorefrontConfig,
) -> SessionManagerLayer<PostgresStore> {
    let store = PostgresStore::new(pool.clone());

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(Duration::days(SESSION_IDLE_DAYS)))
        .with_secure(config.serves_https())
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}
