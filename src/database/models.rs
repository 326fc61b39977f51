//! Contains the data structures that map to the movie catalog tables.

use sqlx::Type;
use sqlx::types::chrono::{DateTime, Utc};

/// A movie list category.
///
/// `Both` is an add-time convenience that is expanded into one `A` row and
/// one `B` row before anything is persisted. Rows tagged `AB` can still
/// appear in databases written by older versions; the queries in
/// `database::movies` count them toward both lists.
#[derive(Debug, Clone, Copy, Type, PartialEq, Eq)]
pub enum Category {
    #[sqlx(rename = "A")]
    A,
    #[sqlx(rename = "B")]
    B,
    #[sqlx(rename = "AB")]
    Both,
}

impl Category {
    /// The physical categories a new entry is stored under.
    pub fn expand(self) -> &'static [Category] {
        match self {
            Category::A => &[Category::A],
            Category::B => &[Category::B],
            Category::Both => &[Category::A, Category::B],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::A => "A",
            Category::B => "B",
            Category::Both => "AB",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An entry on the watch list. Entries are never updated or deleted; the
/// only later mutation is the creation of an archive marker for their id.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Movie {
    pub movie_id: i64,
    pub category: Category,
    pub title: String,
    pub added_at: DateTime<Utc>,
    pub added_by: String,
}

/// A movie joined with its archive marker.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct ArchivedMovie {
    pub movie_id: i64,
    pub category: Category,
    pub title: String,
    pub added_at: DateTime<Utc>,
    pub added_by: String,
    pub archived_at: DateTime<Utc>,
    pub archived_by: String,
}
