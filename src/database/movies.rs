//! Contains all database functions for the movie catalog: entry creation,
//! the archive transition, and the filtered read views.
//!
//! "Active" everywhere means: the movie id has no row in `movie_archive`.
//! Category filters match the requested category or the legacy `AB` tag,
//! so combined-list rows from older databases stay visible in both lists.

use chrono::{SubsecRound, Utc};
use sqlx::SqlitePool;
use tracing::instrument;

use super::models::{ArchivedMovie, Category, Movie};
use crate::constants::RESTRICTED_TITLE_CHARS;
use crate::error::{AppError, AppResult};

/// Rejects titles containing characters the catalog refuses to store.
pub fn validate_title(title: &str) -> AppResult<()> {
    if title.chars().any(|c| RESTRICTED_TITLE_CHARS.contains(&c)) {
        return Err(AppError::Validation(
            "Movie titles cannot contain backticks, quotes, or semicolons.".to_string(),
        ));
    }
    Ok(())
}

/// Inserts one entry per category and returns the assigned ids in insertion
/// order. The title is validated before any write, and the inserts share one
/// transaction so an expanded add either fully lands or not at all.
#[instrument(skip(pool, added_by))]
pub async fn add_movie(
    pool: &SqlitePool,
    categories: &[Category],
    title: &str,
    added_by: &str,
) -> AppResult<Vec<i64>> {
    validate_title(title)?;
    let added_at = Utc::now().trunc_subsecs(0);
    let mut tx = pool.begin().await?;
    let mut ids = Vec::with_capacity(categories.len());
    for category in categories {
        let result = sqlx::query(
            "INSERT INTO movies (category, title, added_at, added_by) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(*category)
        .bind(title)
        .bind(added_at)
        .bind(added_by)
        .execute(&mut *tx)
        .await?;
        ids.push(result.last_insert_rowid());
    }
    tx.commit().await?;
    Ok(ids)
}

/// Marks a movie as archived and returns its title.
///
/// `Ok(None)` covers both "no such id" and "already archived"; the caller
/// cannot tell them apart. The guarded `INSERT OR IGNORE ... SELECT` rides
/// on the marker table's primary key, so when two callers race on the same
/// id exactly one insert wins and the other observes zero affected rows.
#[instrument(skip(pool, archived_by))]
pub async fn archive(
    pool: &SqlitePool,
    movie_id: i64,
    archived_by: &str,
) -> AppResult<Option<String>> {
    let archived_at = Utc::now().trunc_subsecs(0);
    let mut tx = pool.begin().await?;
    let inserted = sqlx::query(
        "INSERT OR IGNORE INTO movie_archive (movie_id, archived_at, archived_by)
         SELECT movie_id, ?2, ?3 FROM movies WHERE movie_id = ?1",
    )
    .bind(movie_id)
    .bind(archived_at)
    .bind(archived_by)
    .execute(&mut *tx)
    .await?;
    if inserted.rows_affected() == 0 {
        tx.rollback().await?;
        return Ok(None);
    }
    let title = sqlx::query_scalar::<_, String>("SELECT title FROM movies WHERE movie_id = ?1")
        .bind(movie_id)
        .fetch_one(&mut *tx)
        .await?;
    tx.commit().await?;
    Ok(Some(title))
}

/// Active entries for one list, title-ascending, restricted to the
/// `[offset, offset + limit)` window. An out-of-range window is an empty
/// vec, not an error.
pub async fn list_active(
    pool: &SqlitePool,
    category: Category,
    offset: i64,
    limit: i64,
) -> AppResult<Vec<Movie>> {
    let movies = sqlx::query_as::<_, Movie>(
        "SELECT movie_id, category, title, added_at, added_by
         FROM movies
         WHERE category IN (?1, 'AB')
           AND movie_id NOT IN (SELECT movie_id FROM movie_archive)
         ORDER BY title ASC
         LIMIT ?2 OFFSET ?3",
    )
    .bind(category)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;
    Ok(movies)
}

/// Every active entry across both lists, in id order. Backs the full-dump
/// listing.
pub async fn list_all_active(pool: &SqlitePool) -> AppResult<Vec<Movie>> {
    let movies = sqlx::query_as::<_, Movie>(
        "SELECT movie_id, category, title, added_at, added_by
         FROM movies
         WHERE movie_id NOT IN (SELECT movie_id FROM movie_archive)
         ORDER BY movie_id",
    )
    .fetch_all(pool)
    .await?;
    Ok(movies)
}

/// Every archived entry joined with its marker, oldest archive first.
pub async fn list_archived(pool: &SqlitePool) -> AppResult<Vec<ArchivedMovie>> {
    let movies = sqlx::query_as::<_, ArchivedMovie>(
        "SELECT m.movie_id, m.category, m.title, m.added_at, m.added_by,
                a.archived_at, a.archived_by
         FROM movies m
         JOIN movie_archive a ON a.movie_id = m.movie_id
         ORDER BY a.archived_at, m.movie_id",
    )
    .fetch_all(pool)
    .await?;
    Ok(movies)
}

/// Uniformly picks one active entry matching the category, returning its
/// title and submitter. `None` when the filtered set is empty.
pub async fn pick_random(
    pool: &SqlitePool,
    category: Category,
) -> AppResult<Option<(String, String)>> {
    let pick = sqlx::query_as::<_, (String, String)>(
        "SELECT title, added_by
         FROM movies
         WHERE category IN (?1, 'AB')
           AND movie_id NOT IN (SELECT movie_id FROM movie_archive)
         ORDER BY RANDOM()
         LIMIT 1",
    )
    .bind(category)
    .fetch_optional(pool)
    .await?;
    Ok(pick)
}

/// Count of active entries matching the category. Shares its definition of
/// "active" with `list_active`, so status and listings can never disagree.
pub async fn count_active(pool: &SqlitePool, category: Category) -> AppResult<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*)
         FROM movies
         WHERE category IN (?1, 'AB')
           AND movie_id NOT IN (SELECT movie_id FROM movie_archive)",
    )
    .bind(category)
    .fetch_one(pool)
    .await?;
    Ok(count)
}
