//! Immutable runtime configuration, read from the environment once at
//! startup and passed into the shared state instead of re-read ad hoc.

use std::env;
use std::time::Instant;

use crate::constants::{DEFAULT_CHANNEL, DEFAULT_DATABASE_URL, DEFAULT_PREFIX};

#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the only channel the movie commands act in.
    pub designated_channel: String,
    /// Message prefix that marks a bot command.
    pub prefix: String,
    /// SQLite database location.
    pub database_url: String,
    /// Uptime origin reported by the status command.
    pub started_at: Instant,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            designated_channel: env::var("MOVIE_CHANNEL")
                .unwrap_or_else(|_| DEFAULT_CHANNEL.to_string()),
            prefix: env::var("COMMAND_PREFIX").unwrap_or_else(|_| DEFAULT_PREFIX.to_string()),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            started_at: Instant::now(),
        }
    }
}
