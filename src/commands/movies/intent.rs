//! Pure parsing and paging logic for the movie commands. Everything here is
//! synchronous and side-effect free so it can be tested without a database
//! or a gateway connection.

use crate::constants::PAGE_SIZE;
use crate::database::models::Category;
use crate::error::{AppError, AppResult};

const LIST_HINT: &str = "listmovies <A|B|all> [page]";
const RANDOM_HINT: &str = "randommovie <A|B>";
const ARCHIVE_HINT: &str = "archivemovie <id>";

/// A parsed `addmovie` argument: which list(s) to store under, and the
/// title exactly as the user wrote it.
#[derive(Debug, PartialEq, Eq)]
pub struct AddIntent<'a> {
    pub category: Category,
    pub title: &'a str,
}

/// Parses `<category>: <title>`.
///
/// The category token is case-sensitive (`A`, `B`, or `AB`) and the title is
/// everything after the first `": "` verbatim, so titles may themselves
/// contain colons.
pub fn parse_add(raw: &str) -> AppResult<AddIntent<'_>> {
    let (token, title) = raw.split_once(": ").ok_or_else(|| {
        AppError::Validation(
            "Use the format `<category>: <title>`, e.g. `A: The Matrix`.".to_string(),
        )
    })?;
    let category = match token {
        "A" => Category::A,
        "B" => Category::B,
        "AB" => Category::Both,
        other => {
            return Err(AppError::Validation(format!(
                "Unknown category `{other}`. Valid categories are A, B, and AB."
            )));
        }
    };
    Ok(AddIntent { category, title })
}

/// The listing selected by the `listmovies` arguments.
#[derive(Debug, PartialEq, Eq)]
pub enum ListIntent {
    /// One page of one category.
    Page { category: Category, page: i64 },
    /// The unfiltered dump of every active entry.
    FullDump,
}

/// Parses `listmovies <A|B|all> [page]`.
///
/// The category is required and case-insensitive; a missing category is a
/// usage failure, never a silent default. The page is 1-based and defaults
/// to 1.
pub fn parse_list_args(args: &[&str]) -> AppResult<ListIntent> {
    let Some(&first) = args.first() else {
        return Err(AppError::Usage(LIST_HINT));
    };
    if first.eq_ignore_ascii_case("all") {
        return Ok(ListIntent::FullDump);
    }
    let category = parse_list_category(first).ok_or(AppError::Usage(LIST_HINT))?;
    let page = match args.get(1) {
        None => 1,
        Some(raw) => raw
            .parse::<i64>()
            .ok()
            .filter(|page| *page >= 1)
            .ok_or(AppError::Usage(LIST_HINT))?,
    };
    Ok(ListIntent::Page { category, page })
}

fn parse_list_category(token: &str) -> Option<Category> {
    if token.eq_ignore_ascii_case("A") {
        Some(Category::A)
    } else if token.eq_ignore_ascii_case("B") {
        Some(Category::B)
    } else {
        None
    }
}

/// Parses the `randommovie` category. Matches the exact tokens `A` and `B`.
pub fn parse_random_category(args: &[&str]) -> AppResult<Category> {
    match args.first() {
        Some(&"A") => Ok(Category::A),
        Some(&"B") => Ok(Category::B),
        _ => Err(AppError::Usage(RANDOM_HINT)),
    }
}

/// Parses the numeric id argument of `archivemovie`.
pub fn parse_archive_id(args: &[&str]) -> AppResult<i64> {
    args.first()
        .and_then(|raw| raw.parse::<i64>().ok())
        .ok_or(AppError::Usage(ARCHIVE_HINT))
}

/// Row offset of a 1-based page.
pub fn page_offset(page: i64) -> i64 {
    (page - 1) * PAGE_SIZE
}

/// Number of pages needed for `total` entries.
pub fn page_count(total: i64) -> i64 {
    (total + PAGE_SIZE - 1) / PAGE_SIZE
}

/// Outcome of the designated-channel check. A denial never produces a
/// reply; the caller logs it and stays silent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelGate {
    Allowed,
    Denied,
}

pub fn check_channel(channel: &str, designated: &str) -> ChannelGate {
    if channel == designated {
        ChannelGate::Allowed
    } else {
        ChannelGate::Denied
    }
}
