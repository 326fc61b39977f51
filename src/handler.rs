//! The gateway event handler: strips the command prefix from inbound
//! messages and dispatches to the command entry points. Everything
//! catalog-related beyond this point is channel-gated inside
//! `commands::movies::run`.

use std::str::FromStr;

use serenity::async_trait;
use serenity::client::Context;
use serenity::model::{channel::Message, gateway::Ready, id::GuildId};
use serenity::prelude::EventHandler;

use crate::{AppState, commands};

enum Command {
    AddMovie,
    ListMovies,
    RandomMovie,
    ArchiveMovie,
    ListArchived,
    Status,
    Help,
    Unknown,
}

impl FromStr for Command {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "addmovie" | "am" => Ok(Command::AddMovie),
            "listmovies" | "lm" => Ok(Command::ListMovies),
            "randommovie" | "rm" => Ok(Command::RandomMovie),
            "archivemovie" | "archive" => Ok(Command::ArchiveMovie),
            "listarchived" | "archived" => Ok(Command::ListArchived),
            "status" => Ok(Command::Status),
            "help" | "h" | "commands" => Ok(Command::Help),
            _ => Ok(Command::Unknown),
        }
    }
}

pub struct Handler {
    pub allowed_guild_id: GuildId,
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        if msg.guild_id != Some(self.allowed_guild_id) || msg.author.bot {
            return;
        }
        let Some(app_state) = AppState::from_ctx(&ctx).await else {
            return;
        };
        let Some(command_body) = msg.content.strip_prefix(&app_state.config.prefix) else {
            return;
        };
        // The command token ends at the first whitespace; the rest of the
        // line is kept verbatim for the add intent, whose title may contain
        // any spacing.
        let body = command_body.trim();
        let (command_str, rest) = match body.split_once(char::is_whitespace) {
            Some((command_str, rest)) => (command_str, rest.trim()),
            None => (body, ""),
        };
        if command_str.is_empty() {
            return;
        }
        let command = Command::from_str(command_str).unwrap_or(Command::Unknown);
        let args: Vec<&str> = rest.split_whitespace().collect();
        match command {
            Command::AddMovie => commands::movies::run::run_add(&ctx, &msg, rest).await,
            Command::ListMovies => commands::movies::run::run_list(&ctx, &msg, &args).await,
            Command::RandomMovie => commands::movies::run::run_random(&ctx, &msg, &args).await,
            Command::ArchiveMovie => commands::movies::run::run_archive(&ctx, &msg, &args).await,
            Command::ListArchived => commands::movies::run::run_archived(&ctx, &msg).await,
            Command::Status => commands::movies::run::run_status(&ctx, &msg).await,
            Command::Help => commands::help::run_prefix(&ctx, &msg).await,
            Command::Unknown => {}
        }
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        tracing::info!("{} is connected and ready!", ready.user.name);
    }
}
