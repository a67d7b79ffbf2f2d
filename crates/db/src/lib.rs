//! The action item store.
//!
//! Owns the SQLite connection pool, the schema migrations in
//! `db/migrations`, the row models and the repositories. The pool is the
//! only store handle; callers pass `&DbPool` into every repository call.

use std::path::PathBuf;
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod error;
pub mod models;
pub mod repositories;

pub use error::StoreError;

pub type DbPool = sqlx::SqlitePool;

/// Create a connection pool from a database URL.
///
/// The database file is created if it does not exist yet and foreign key
/// enforcement is switched on for every connection.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Run a trivial query to confirm the store is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations. Safe to call on an already-migrated database.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await?;
    tracing::debug!("Schema is up to date");
    Ok(())
}

/// Resolve the on-disk database file named by a SQLite URL.
///
/// Returns `None` for in-memory databases. Accepts `sqlite://path`,
/// `sqlite:path` and a bare path; query parameters are ignored.
pub fn database_file_path(database_url: &str) -> Option<PathBuf> {
    let rest = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))
        .unwrap_or(database_url);

    let (path, params) = match rest.split_once('?') {
        Some((path, params)) => (path, params),
        None => (rest, ""),
    };

    let in_memory = params.split('&').any(|p| p == "mode=memory");
    if path.is_empty() || path == ":memory:" || in_memory {
        return None;
    }

    Some(PathBuf::from(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_url_resolves_to_path() {
        assert_eq!(
            database_file_path("sqlite://action_items.db"),
            Some(PathBuf::from("action_items.db"))
        );
        assert_eq!(
            database_file_path("sqlite:data/items.db?mode=rwc"),
            Some(PathBuf::from("data/items.db"))
        );
        assert_eq!(
            database_file_path("/var/lib/actiontrack/items.db"),
            Some(PathBuf::from("/var/lib/actiontrack/items.db"))
        );
    }

    #[test]
    fn in_memory_urls_have_no_file() {
        assert_eq!(database_file_path("sqlite::memory:"), None);
        assert_eq!(database_file_path("sqlite://:memory:"), None);
        assert_eq!(database_file_path("sqlite://shared?mode=memory&cache=shared"), None);
        assert_eq!(database_file_path("sqlite://"), None);
    }
}
