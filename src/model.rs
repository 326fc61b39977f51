//! This module defines the shared state stored in Serenity's global context.

use std::sync::Arc;

use serenity::prelude::TypeMapKey;
use sqlx::SqlitePool;

use crate::config::Config;

/// The central, shared state of the application.
/// An `Arc<AppState>` is stored in the global context for easy and safe
/// access from any command or event handler.
pub struct AppState {
    /// The connection pool for the SQLite movie catalog.
    pub db: SqlitePool,
    /// Startup configuration (designated channel, prefix, uptime origin).
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn from_ctx(ctx: &serenity::prelude::Context) -> Option<Arc<Self>> {
        ctx.data.read().await.get::<AppState>().cloned()
    }
}

impl TypeMapKey for AppState {
    type Value = Arc<AppState>;
}
