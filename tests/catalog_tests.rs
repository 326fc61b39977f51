//! Store-level properties of the movie catalog, exercised against an
//! in-memory SQLite database.

use movienight_bot::database::models::Category;
use movienight_bot::database::{init, movies};
use movienight_bot::error::AppError;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

/// A single-connection pool so the `:memory:` database outlives any one
/// checkout.
async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory pool");
    init::create_schema(&pool).await.expect("schema");
    pool
}

/// Inserts a row tagged with the literal combined category, as written by
/// older versions of the bot.
async fn insert_legacy_ab_row(pool: &SqlitePool, title: &str) {
    sqlx::query(
        "INSERT INTO movies (category, title, added_at, added_by)
         VALUES ('AB', ?1, '2024-01-01T00:00:00Z', 'legacy#0')",
    )
    .bind(title)
    .execute(pool)
    .await
    .expect("legacy insert");
}

#[tokio::test]
async fn ab_expansion_creates_two_rows() {
    let pool = test_pool().await;
    let ids = movies::add_movie(&pool, Category::Both.expand(), "Dune", "alice#1111")
        .await
        .unwrap();
    assert_eq!(ids.len(), 2);
    assert_ne!(ids[0], ids[1]);

    let a = movies::list_active(&pool, Category::A, 0, 20).await.unwrap();
    let b = movies::list_active(&pool, Category::B, 0, 20).await.unwrap();
    assert_eq!(a.len(), 1);
    assert_eq!(b.len(), 1);
    assert_eq!(a[0].title, "Dune");
    assert_eq!(b[0].title, "Dune");
    assert_eq!(a[0].added_by, b[0].added_by);
    assert_eq!(a[0].added_at, b[0].added_at);
    assert_ne!(a[0].movie_id, b[0].movie_id);
}

#[tokio::test]
async fn archived_entries_leave_every_active_view() {
    let pool = test_pool().await;
    for title in ["Alien", "Blade Runner", "Coherence"] {
        movies::add_movie(&pool, Category::A.expand(), title, "bob#2222")
            .await
            .unwrap();
    }
    let active = movies::list_active(&pool, Category::A, 0, 20).await.unwrap();
    let target = active
        .iter()
        .find(|movie| movie.title == "Blade Runner")
        .unwrap()
        .movie_id;

    let title = movies::archive(&pool, target, "carol#3333").await.unwrap();
    assert_eq!(title.as_deref(), Some("Blade Runner"));

    let active = movies::list_active(&pool, Category::A, 0, 20).await.unwrap();
    assert!(active.iter().all(|movie| movie.movie_id != target));

    let all_active = movies::list_all_active(&pool).await.unwrap();
    assert!(all_active.iter().all(|movie| movie.movie_id != target));

    for _ in 0..25 {
        let (picked, _) = movies::pick_random(&pool, Category::A)
            .await
            .unwrap()
            .expect("two entries remain active");
        assert_ne!(picked, "Blade Runner");
    }

    let archived = movies::list_archived(&pool).await.unwrap();
    assert_eq!(archived.len(), 1);
    assert_eq!(archived[0].movie_id, target);
    assert_eq!(archived[0].title, "Blade Runner");
    assert_eq!(archived[0].archived_by, "carol#3333");
}

#[tokio::test]
async fn double_archive_keeps_a_single_marker() {
    let pool = test_pool().await;
    let ids = movies::add_movie(&pool, Category::B.expand(), "Heat", "bob#2222")
        .await
        .unwrap();
    let id = ids[0];

    let first = movies::archive(&pool, id, "carol#3333").await.unwrap();
    assert_eq!(first.as_deref(), Some("Heat"));

    let second = movies::archive(&pool, id, "dave#4444").await.unwrap();
    assert_eq!(second, None);

    let archived = movies::list_archived(&pool).await.unwrap();
    assert_eq!(archived.len(), 1);
    assert_eq!(archived[0].archived_by, "carol#3333");
}

#[tokio::test]
async fn archive_of_unknown_id_reports_not_found() {
    let pool = test_pool().await;
    let outcome = movies::archive(&pool, 9_999, "carol#3333").await.unwrap();
    assert_eq!(outcome, None);
    assert!(movies::list_archived(&pool).await.unwrap().is_empty());
}

#[tokio::test]
async fn listing_is_title_sorted_and_windowed() {
    let pool = test_pool().await;
    // Insert out of order; zero-padded titles make the expected sort obvious.
    for n in (1..=25).rev() {
        movies::add_movie(&pool, Category::A.expand(), &format!("Movie {n:02}"), "e#5")
            .await
            .unwrap();
    }

    let first_page = movies::list_active(&pool, Category::A, 0, 20).await.unwrap();
    assert_eq!(first_page.len(), 20);
    assert_eq!(first_page[0].title, "Movie 01");
    assert_eq!(first_page[19].title, "Movie 20");
    let mut sorted = first_page.iter().map(|m| m.title.clone()).collect::<Vec<_>>();
    sorted.sort();
    assert_eq!(
        sorted,
        first_page.iter().map(|m| m.title.clone()).collect::<Vec<_>>()
    );

    let second_page = movies::list_active(&pool, Category::A, 20, 20).await.unwrap();
    assert_eq!(second_page.len(), 5);
    assert_eq!(second_page[0].title, "Movie 21");
    assert_eq!(second_page[4].title, "Movie 25");

    let third_page = movies::list_active(&pool, Category::A, 40, 20).await.unwrap();
    assert!(third_page.is_empty());
}

#[tokio::test]
async fn random_pick_covers_only_active_entries() {
    let pool = test_pool().await;
    let mut active_ids = Vec::new();
    for title in ["Arrival", "Brazil", "Cube"] {
        let ids = movies::add_movie(&pool, Category::A.expand(), title, "f#6")
            .await
            .unwrap();
        active_ids.push(ids[0]);
    }
    for title in ["Dogtooth", "Eraserhead"] {
        let ids = movies::add_movie(&pool, Category::A.expand(), title, "f#6")
            .await
            .unwrap();
        movies::archive(&pool, ids[0], "f#6").await.unwrap();
    }

    for _ in 0..25 {
        let (title, added_by) = movies::pick_random(&pool, Category::A)
            .await
            .unwrap()
            .expect("three entries are active");
        assert!(["Arrival", "Brazil", "Cube"].contains(&title.as_str()));
        assert_eq!(added_by, "f#6");
    }

    for id in active_ids {
        movies::archive(&pool, id, "f#6").await.unwrap();
    }
    assert_eq!(movies::pick_random(&pool, Category::A).await.unwrap(), None);
}

#[tokio::test]
async fn counts_include_legacy_combined_rows_in_both_lists() {
    let pool = test_pool().await;
    movies::add_movie(&pool, Category::A.expand(), "First", "g#7")
        .await
        .unwrap();
    movies::add_movie(&pool, Category::A.expand(), "Second", "g#7")
        .await
        .unwrap();
    movies::add_movie(&pool, Category::B.expand(), "Third", "g#7")
        .await
        .unwrap();
    insert_legacy_ab_row(&pool, "Legacy Pick").await;

    assert_eq!(movies::count_active(&pool, Category::A).await.unwrap(), 3);
    assert_eq!(movies::count_active(&pool, Category::B).await.unwrap(), 2);

    // The legacy row is visible in both category listings.
    let a = movies::list_active(&pool, Category::A, 0, 20).await.unwrap();
    let b = movies::list_active(&pool, Category::B, 0, 20).await.unwrap();
    assert!(a.iter().any(|movie| movie.title == "Legacy Pick"));
    assert!(b.iter().any(|movie| movie.title == "Legacy Pick"));
}

#[tokio::test]
async fn restricted_titles_are_rejected_before_any_write() {
    let pool = test_pool().await;
    for bad in ["Bad`Title", "Don't", "Say \"hi\"", "semi;colon"] {
        let err = movies::add_movie(&pool, Category::Both.expand(), bad, "h#8")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)), "accepted {bad:?}");
    }
    assert_eq!(movies::count_active(&pool, Category::A).await.unwrap(), 0);
    assert_eq!(movies::count_active(&pool, Category::B).await.unwrap(), 0);
    assert!(movies::list_all_active(&pool).await.unwrap().is_empty());
}

#[tokio::test]
async fn ids_are_monotonic_across_archives() {
    let pool = test_pool().await;
    let first = movies::add_movie(&pool, Category::A.expand(), "One", "i#9")
        .await
        .unwrap()[0];
    movies::archive(&pool, first, "i#9").await.unwrap();
    let second = movies::add_movie(&pool, Category::A.expand(), "Two", "i#9")
        .await
        .unwrap()[0];
    assert!(second > first);
}
