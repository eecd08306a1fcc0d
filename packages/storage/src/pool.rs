// ABOUTME: SQLite connection pool setup
// ABOUTME: Creates the database file, applies connection settings, and runs embedded migrations

use std::str::FromStr;
use std::time::Duration;

use sqlx::migrate::Migrator;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};
use tracing::{debug, info};

use crate::{StorageConfig, StorageError, StorageResult};

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Open a pool for the configured database file and bring its schema up to date
pub async fn open_pool(config: &StorageConfig) -> StorageResult<SqlitePool> {
    // Ensure parent directory exists
    if let Some(parent) = config.path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    debug!("Opening database at: {}", config.path.display());

    let journal_mode = if config.enable_wal {
        SqliteJournalMode::Wal
    } else {
        SqliteJournalMode::Delete
    };

    let options = SqliteConnectOptions::new()
        .filename(&config.path)
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(journal_mode)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(config.busy_timeout_seconds));

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.busy_timeout_seconds))
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;

    info!(
        "Database ready at {} (max_connections: {}, wal: {})",
        config.path.display(),
        config.max_connections,
        config.enable_wal
    );
    Ok(pool)
}

/// Open a migrated in-memory database.
///
/// The pool holds a single connection that never expires, since every
/// SQLite in-memory connection is its own database.
pub async fn open_in_memory() -> StorageResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .map_err(|e| StorageError::InvalidConfig(e.to_string()))?
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;
    Ok(pool)
}

async fn run_migrations(pool: &SqlitePool) -> StorageResult<()> {
    debug!("Running migrations");
    MIGRATOR.run(pool).await?;
    Ok(())
}
