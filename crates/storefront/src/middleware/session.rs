//! Session middleware configuration.
//!
//! Sets up `PostgreSQL`-backed sessions using tower-sessions.

use sqlx::PgPool;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::PostgresStore;

use crate::config::StoreConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "tam_session";

/// Schema holding the session table.
///
/// The store must point at the table the migrations create, not the
/// crate's `tower_sessions.session` default.
const SESSION_SCHEMA: &str = "public";

/// Session table name, created by migration `0002_sessions.sql`.
const SESSION_TABLE: &str = "sessions";

/// Session expiry time in seconds (7 days).
const SESSION_EXPIRY_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Create the session layer with `PostgreSQL` store.
///
/// The sessions table must be created via migration.
///
/// # Panics
///
/// Panics if the compile-time schema/table identifiers are rejected by the
/// store (they never are; both are fixed valid identifiers).
#[must_use]
pub fn create_session_layer(
    pool: &PgPool,
    config: &StoreConfig,
) -> SessionManagerLayer<PostgresStore> {
    let store = PostgresStore::new(pool.clone())
        .with_schema_name(SESSION_SCHEMA)
        .expect("valid session schema name")
        .with_table_name(SESSION_TABLE)
        .expect("valid session table name");

    // Secure cookies only when served over HTTPS
    let is_secure = config.base_url.starts_with("https://");

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(is_secure)
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_table_matches_sessions_migration() {
        let migration = include_str!("../../migrations/0002_sessions.sql");
        assert!(migration.contains(&format!("CREATE TABLE {SESSION_TABLE}")));
        // The migration creates the table unqualified, i.e. in `public`.
        assert_eq!(SESSION_SCHEMA, "public");
        assert!(!migration.contains("CREATE SCHEMA"));
    }
}
