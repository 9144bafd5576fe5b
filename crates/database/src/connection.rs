use crate::error::DbError;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::time::Duration;

/// Establishes a connection pool to the SQLite database at `database_url`.
///
/// Use a `?mode=rwc` suffix on file URLs to have the file created on first use.
pub async fn connect(
    database_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<SqlitePool, DbError> {
    if database_url.trim().is_empty() {
        return Err(DbError::ConnectionConfigError(
            "database url must be set.".to_string(),
        ));
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect(database_url)
        .await?;

    tracing::debug!(url = %database_url, "Connected to database.");
    Ok(pool)
}

/// A private in-memory database, mostly for tests.
///
/// Every SQLite connection to `:memory:` opens its own empty database, so the
/// pool is pinned to a single connection that is never recycled.
pub async fn connect_in_memory() -> Result<SqlitePool, DbError> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;
    Ok(pool)
}
