//! The static command listing. This is the only command that is not
//! restricted to the designated movie channel.

use serenity::builder::{CreateEmbed, CreateEmbedFooter, CreateMessage};
use serenity::model::channel::Message;
use serenity::prelude::*;

use crate::model::AppState;

struct CommandInfo {
    name: &'static str,
    usage: &'static str,
    description: &'static str,
}

const COMMANDS: &[CommandInfo] = &[
    CommandInfo {
        name: "addmovie",
        usage: "addmovie <A|B|AB>: <title>",
        description: "Adds a movie to the shared watch list. `AB` puts it on both lists.",
    },
    CommandInfo {
        name: "listmovies",
        usage: "listmovies <A|B|all> [page]",
        description: "Lists active movies for a category, 20 per page, or everything with `all`.",
    },
    CommandInfo {
        name: "randommovie",
        usage: "randommovie <A|B>",
        description: "Picks a random movie from a category's active entries.",
    },
    CommandInfo {
        name: "archivemovie",
        usage: "archivemovie <id>",
        description: "Marks a movie as watched and hides it from the active lists.",
    },
    CommandInfo {
        name: "listarchived",
        usage: "listarchived",
        description: "Shows every archived movie with who archived it and when.",
    },
    CommandInfo {
        name: "status",
        usage: "status",
        description: "Shows list sizes, page counts, and bot uptime.",
    },
    CommandInfo {
        name: "help",
        usage: "help",
        description: "Shows this command listing.",
    },
];

/// Every command name, in help order. Used by the help listing test.
pub fn all_command_names() -> Vec<&'static str> {
    COMMANDS.iter().map(|command| command.name).collect()
}

pub fn create_help_embed(prefix: &str) -> CreateEmbed {
    let description = COMMANDS
        .iter()
        .map(|command| {
            format!(
                "**{}{}**\n{}",
                prefix, command.usage, command.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");
    CreateEmbed::new()
        .title("Movie bot commands")
        .description(description)
        .footer(CreateEmbedFooter::new(
            "Movie commands only work in the designated movie channel.",
        ))
}

/// The entry point for `!help`.
pub async fn run_prefix(ctx: &Context, msg: &Message) {
    let prefix = match AppState::from_ctx(ctx).await {
        Some(state) => state.config.prefix.clone(),
        None => crate::constants::DEFAULT_PREFIX.to_string(),
    };
    let builder = CreateMessage::new().embed(create_help_embed(&prefix));
    if let Err(why) = msg.channel_id.send_message(&ctx.http, builder).await {
        tracing::warn!("Error sending help response: {why:?}");
    }
}
