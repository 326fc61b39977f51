//! Pool construction and schema creation for the movie catalog.

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Opens the SQLite database behind `url`, creating the file if missing.
pub async fn connect(url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(url)?
        .create_if_missing(true)
        .foreign_keys(true);
    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Creates the two catalog tables when absent.
///
/// `AUTOINCREMENT` keeps movie ids monotonic and never reused, and the
/// `movie_archive` primary key allows at most one marker per movie, so a
/// concurrent double-archive resolves to a single row.
pub async fn create_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS movies (
            movie_id INTEGER PRIMARY KEY AUTOINCREMENT,
            category TEXT NOT NULL CHECK (category IN ('A', 'B', 'AB')),
            title TEXT NOT NULL,
            added_at TEXT NOT NULL,
            added_by TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS movie_archive (
            movie_id INTEGER PRIMARY KEY REFERENCES movies (movie_id),
            archived_at TEXT NOT NULL,
            archived_by TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;
    Ok(())
}
