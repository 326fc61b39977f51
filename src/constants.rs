// Central constants for limits and configuration fallbacks.

/// Fixed size of one listing page.
pub const PAGE_SIZE: i64 = 20;

/// Characters a movie title may never contain; checked before persistence.
pub const RESTRICTED_TITLE_CHARS: [char; 4] = ['`', '\'', '"', ';'];

/// Channel the movie commands act in when `MOVIE_CHANNEL` is unset.
pub const DEFAULT_CHANNEL: &str = "movie-night";

/// Command prefix when `COMMAND_PREFIX` is unset.
pub const DEFAULT_PREFIX: &str = "!";

/// Database location when `DATABASE_URL` is unset.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://movies.db";
