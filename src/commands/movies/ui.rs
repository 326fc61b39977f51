//! Contains the response content builders for the movie commands.

use std::time::Duration;

use serenity::builder::{CreateEmbed, CreateEmbedFooter};
use serenity::model::Colour;

use super::intent::page_count;
use crate::database::models::{ArchivedMovie, Category, Movie};

fn list_name(category: Category) -> &'static str {
    match category {
        Category::A => "Active-watching (A)",
        Category::B => "Passive-watching (B)",
        Category::Both => "Combined (AB)",
    }
}

pub fn add_reply(category: Category) -> String {
    match category {
        Category::Both => "Movie added to both lists successfully!".to_string(),
        _ => "Movie added successfully!".to_string(),
    }
}

/// One page of one category's active entries.
pub fn list_embed(category: Category, page: i64, movies: &[Movie]) -> CreateEmbed {
    let description = if movies.is_empty() {
        "No movies found.".to_string()
    } else {
        movies
            .iter()
            .map(|movie| {
                format!(
                    "`{}`. **{}** (added by {} on {})",
                    movie.movie_id,
                    movie.title,
                    movie.added_by,
                    movie.added_at.format("%Y-%m-%d")
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };
    CreateEmbed::new()
        .title(format!("{}, page {}", list_name(category), page))
        .description(description)
        .colour(Colour::BLUE)
        .footer(CreateEmbedFooter::new("Archived movies are hidden."))
}

/// The unfiltered dump of every active entry, in the classic
/// `id. category: title` code-block form.
pub fn full_dump(movies: &[Movie]) -> String {
    if movies.is_empty() {
        return "No movies found.".to_string();
    }
    let mut content = String::from("```\n");
    for movie in movies {
        content.push_str(&format!(
            "{}. {}: {}\n",
            movie.movie_id, movie.category, movie.title
        ));
    }
    content.push_str("```");
    content
}

pub fn random_reply(category: Category, pick: Option<(String, String)>) -> String {
    match pick {
        Some((title, added_by)) => {
            format!("Random {category} movie: **{title}** (suggested by {added_by})")
        }
        None => format!("No movies found for type {category}."),
    }
}

pub fn archive_reply(title: &str) -> String {
    format!("🗄️ Archived: **{title}**")
}

pub fn archived_embed(movies: &[ArchivedMovie]) -> CreateEmbed {
    let description = if movies.is_empty() {
        "Nothing has been archived yet.".to_string()
    } else {
        movies
            .iter()
            .map(|movie| {
                format!(
                    "`{}`. **{}** ({}) archived by {} on {}",
                    movie.movie_id,
                    movie.title,
                    movie.category,
                    movie.archived_by,
                    movie.archived_at.format("%Y-%m-%d")
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };
    CreateEmbed::new()
        .title("Archived movies")
        .description(description)
        .colour(Colour::DARK_GREY)
}

pub fn status_embed(count_a: i64, count_b: i64, uptime: Duration) -> CreateEmbed {
    CreateEmbed::new()
        .title("Movie list status")
        .field(
            list_name(Category::A),
            format!("{} movies, {} pages", count_a, page_count(count_a)),
            true,
        )
        .field(
            list_name(Category::B),
            format!("{} movies, {} pages", count_b, page_count(count_b)),
            true,
        )
        .field("Uptime", format_uptime(uptime.as_secs()), false)
        .colour(Colour::DARK_GREEN)
}

/// Formats whole seconds as e.g. `2d 03h 04m 05s`, dropping leading zero
/// units.
pub fn format_uptime(total_secs: u64) -> String {
    let days = total_secs / 86_400;
    let hours = (total_secs % 86_400) / 3_600;
    let minutes = (total_secs % 3_600) / 60;
    let seconds = total_secs % 60;
    if days > 0 {
        format!("{days}d {hours:02}h {minutes:02}m {seconds:02}s")
    } else if hours > 0 {
        format!("{hours}h {minutes:02}m {seconds:02}s")
    } else if minutes > 0 {
        format!("{minutes}m {seconds:02}s")
    } else {
        format!("{seconds}s")
    }
}
