//! Contains the run logic for the movie commands, dispatched from the
//! message handler. Each entry point resolves the shared state, applies the
//! designated-channel gate, and translates every error into its
//! user-visible form before anything is sent.

use serenity::builder::{CreateEmbed, CreateMessage};
use serenity::model::channel::Message;
use serenity::prelude::*;

use super::intent::{self, ChannelGate, ListIntent};
use super::ui;
use crate::constants::PAGE_SIZE;
use crate::database;
use crate::database::models::Category;
use crate::error::{AppError, AppResult};
use crate::model::AppState;

/// Resolves the message's channel name and checks it against the designated
/// channel. Denied commands are logged and produce no reply at all.
async fn passes_gate(ctx: &Context, msg: &Message, state: &AppState) -> bool {
    let channel = match msg.channel_id.name(ctx).await {
        Ok(name) => name,
        Err(why) => {
            tracing::warn!("Could not resolve channel name for gating: {why:?}");
            return false;
        }
    };
    match intent::check_channel(&channel, &state.config.designated_channel) {
        ChannelGate::Allowed => true,
        ChannelGate::Denied => {
            tracing::debug!(
                channel = %channel,
                designated = %state.config.designated_channel,
                "Ignoring movie command outside the designated channel"
            );
            false
        }
    }
}

/// Converts an error into its user-visible form. Storage failures keep
/// their full detail in the logs only.
fn report(err: &AppError) -> String {
    if let AppError::Db(source) = err {
        tracing::error!(error = ?source, "Movie command failed in the storage layer");
    }
    err.user_message()
}

async fn say(ctx: &Context, msg: &Message, content: String) {
    if let Err(why) = msg.channel_id.say(&ctx.http, content).await {
        tracing::warn!("Error sending movie command response: {why:?}");
    }
}

async fn send_embed(ctx: &Context, msg: &Message, embed: CreateEmbed) {
    let builder = CreateMessage::new().embed(embed).reference_message(msg);
    if let Err(why) = msg.channel_id.send_message(&ctx.http, builder).await {
        tracing::warn!("Error sending movie command response: {why:?}");
    }
}

/// The entry point for `!addmovie <category>: <title>`. Receives the rest
/// of the line verbatim so titles keep their inner spacing and colons.
pub async fn run_add(ctx: &Context, msg: &Message, raw_arg: &str) {
    let Some(state) = AppState::from_ctx(ctx).await else {
        return;
    };
    if !passes_gate(ctx, msg, &state).await {
        return;
    }
    let reply = match add_movie(&state, msg, raw_arg).await {
        Ok(text) => text,
        Err(err) => report(&err),
    };
    say(ctx, msg, reply).await;
}

async fn add_movie(state: &AppState, msg: &Message, raw_arg: &str) -> AppResult<String> {
    let add = intent::parse_add(raw_arg)?;
    let added_by = msg.author.tag();
    let ids =
        database::movies::add_movie(&state.db, add.category.expand(), add.title, &added_by).await?;
    tracing::info!(ids = ?ids, title = %add.title, "Movie added");
    Ok(ui::add_reply(add.category))
}

/// The entry point for `!listmovies <A|B|all> [page]`.
pub async fn run_list(ctx: &Context, msg: &Message, args: &[&str]) {
    let Some(state) = AppState::from_ctx(ctx).await else {
        return;
    };
    if !passes_gate(ctx, msg, &state).await {
        return;
    }
    match list_movies(&state, args).await {
        Ok(ListReply::Embed(embed)) => send_embed(ctx, msg, embed).await,
        Ok(ListReply::Text(text)) => say(ctx, msg, text).await,
        Err(err) => say(ctx, msg, report(&err)).await,
    }
}

enum ListReply {
    Embed(CreateEmbed),
    Text(String),
}

async fn list_movies(state: &AppState, args: &[&str]) -> AppResult<ListReply> {
    match intent::parse_list_args(args)? {
        ListIntent::Page { category, page } => {
            let offset = intent::page_offset(page);
            let movies =
                database::movies::list_active(&state.db, category, offset, PAGE_SIZE).await?;
            Ok(ListReply::Embed(ui::list_embed(category, page, &movies)))
        }
        ListIntent::FullDump => {
            let movies = database::movies::list_all_active(&state.db).await?;
            Ok(ListReply::Text(ui::full_dump(&movies)))
        }
    }
}

/// The entry point for `!randommovie <A|B>`.
pub async fn run_random(ctx: &Context, msg: &Message, args: &[&str]) {
    let Some(state) = AppState::from_ctx(ctx).await else {
        return;
    };
    if !passes_gate(ctx, msg, &state).await {
        return;
    }
    let reply = match random_movie(&state, args).await {
        Ok(text) => text,
        Err(err) => report(&err),
    };
    say(ctx, msg, reply).await;
}

async fn random_movie(state: &AppState, args: &[&str]) -> AppResult<String> {
    let category = intent::parse_random_category(args)?;
    let pick = database::movies::pick_random(&state.db, category).await?;
    Ok(ui::random_reply(category, pick))
}

/// The entry point for `!archivemovie <id>`.
pub async fn run_archive(ctx: &Context, msg: &Message, args: &[&str]) {
    let Some(state) = AppState::from_ctx(ctx).await else {
        return;
    };
    if !passes_gate(ctx, msg, &state).await {
        return;
    }
    let reply = match archive_movie(&state, msg, args).await {
        Ok(text) => text,
        Err(err) => report(&err),
    };
    say(ctx, msg, reply).await;
}

async fn archive_movie(state: &AppState, msg: &Message, args: &[&str]) -> AppResult<String> {
    let movie_id = intent::parse_archive_id(args)?;
    let archived_by = msg.author.tag();
    let title = database::movies::archive(&state.db, movie_id, &archived_by)
        .await?
        .ok_or(AppError::NotFound)?;
    tracing::info!(movie_id, "Movie archived");
    Ok(ui::archive_reply(&title))
}

/// The entry point for `!listarchived`.
pub async fn run_archived(ctx: &Context, msg: &Message) {
    let Some(state) = AppState::from_ctx(ctx).await else {
        return;
    };
    if !passes_gate(ctx, msg, &state).await {
        return;
    }
    match database::movies::list_archived(&state.db).await {
        Ok(movies) => send_embed(ctx, msg, ui::archived_embed(&movies)).await,
        Err(err) => say(ctx, msg, report(&err)).await,
    }
}

/// The entry point for `!status`.
pub async fn run_status(ctx: &Context, msg: &Message) {
    let Some(state) = AppState::from_ctx(ctx).await else {
        return;
    };
    if !passes_gate(ctx, msg, &state).await {
        return;
    }
    match status(&state).await {
        Ok(embed) => send_embed(ctx, msg, embed).await,
        Err(err) => say(ctx, msg, report(&err)).await,
    }
}

async fn status(state: &AppState) -> AppResult<CreateEmbed> {
    let count_a = database::movies::count_active(&state.db, Category::A).await?;
    let count_b = database::movies::count_active(&state.db, Category::B).await?;
    let uptime = state.config.started_at.elapsed();
    Ok(ui::status_embed(count_a, count_b, uptime))
}
