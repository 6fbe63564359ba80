//! Open the SQLite database backing a service. One pool is shared by every handler.

use crate::config::DatabaseConfig;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// Conflicting writers wait this long for the lock before the statement fails.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Create the parent directory of a file-backed database if it is missing.
pub fn ensure_database_dir(config: &DatabaseConfig) -> std::io::Result<()> {
    if config.is_memory() {
        return Ok(());
    }
    match Path::new(&config.path).parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

fn connect_options(config: &DatabaseConfig) -> Result<SqliteConnectOptions, sqlx::Error> {
    let opts = if config.is_memory() {
        SqliteConnectOptions::from_str("sqlite::memory:")?
    } else {
        SqliteConnectOptions::new()
            .filename(&config.path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
    };
    // Book rows point at users.lib_id, but the link is informational only.
    Ok(opts.foreign_keys(false).busy_timeout(BUSY_TIMEOUT))
}

/// Open the pool. In-memory databases keep their single connection alive for the pool's lifetime.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    ensure_database_dir(config)?;
    let opts = connect_options(config)?;
    let mut pool = SqlitePoolOptions::new().max_connections(config.max_connections.max(1));
    if config.is_memory() {
        pool = pool
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>);
    }
    let pool = pool.connect_with(opts).await?;
    tracing::info!(path = %config.path, max_connections = config.max_connections, "database opened");
    Ok(pool)
}
