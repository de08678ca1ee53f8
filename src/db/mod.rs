pub mod matches;

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::{Path, PathBuf};

use crate::error::TrackerError;

/// Get the path to the database file using platform-specific data directory
pub fn default_db_path() -> Result<PathBuf> {
    let mut path =
        dirs::data_dir().context("Unable to determine data directory for your platform")?;

    path.push("gin-tracker");

    // Create directory if it doesn't exist
    std::fs::create_dir_all(&path).context("Failed to create gin-tracker data directory")?;

    path.push("gin_rummy_history.db");
    Ok(path)
}

/// Create a connection pool to the SQLite database and make sure the schema
/// exists.
pub async fn create_pool(path: &Path) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .context("Failed to connect to database")?;

    init_schema(&pool)
        .await
        .context("Failed to initialize database schema")?;

    Ok(pool)
}

/// Create the matches table if it is not there yet. Safe to run on every
/// startup.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), TrackerError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS matches (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            zayaka_score INTEGER NOT NULL,
            brian_score INTEGER NOT NULL,
            winner TEXT NOT NULL,
            match_date TEXT NOT NULL,
            game_scores TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
