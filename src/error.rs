//! Unified application error type.
//! Every failure a command can hit collapses into one of these four
//! categories before anything user-visible is produced.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed user input: bad add syntax, restricted characters in a
    /// title, or an unknown category token. Nothing is written.
    #[error("invalid input: {0}")]
    Validation(String),

    /// A required parameter is missing or unusable. The store is not touched.
    #[error("usage: {0}")]
    Usage(&'static str),

    /// The archive target does not exist, or it already carries a marker.
    /// The two cases are deliberately not distinguished.
    #[error("movie not found")]
    NotFound,

    /// Underlying persistence failure. Full detail goes to the logs only.
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// The user-visible form of this error. Storage detail never leaks here.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(reason) => format!("❌ {reason}"),
            AppError::Usage(hint) => format!("Usage: `{hint}`"),
            AppError::NotFound => {
                "No movie found by that id (it may already be archived).".to_string()
            }
            AppError::Db(_) => {
                "The command failed due to an internal error. Please try again later.".to_string()
            }
        }
    }
}
