#![allow(dead_code)]

use bloglist::infrastructure::hashing::Argon2Hasher;
use bloglist::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

/// Blogs every handler test starts from: 34 likes in total, the third one is
/// the favorite.
pub const INITIAL_BLOGS: [(&str, &str, &str, i64); 4] = [
    ("React patterns", "Michael Chan", "https://reactpatterns.com/", 7),
    (
        "Go To Statement Considered Harmful",
        "Edsger W. Dijkstra",
        "http://www.u.arizona.edu/~rubinson/copyright_violations/Go_To_Considered_Harmful.html",
        5,
    ),
    (
        "Canonical string reduction",
        "Edsger W. Dijkstra",
        "http://www.cs.utexas.edu/~EWD/transcriptions/EWD08xx/EWD808.html",
        12,
    ),
    (
        "First class tests",
        "Robert C. Martin",
        "http://blog.cleancoder.com/uncle-bob/2017/05/05/TestDefinitions.htmll",
        10,
    ),
];

pub async fn create_test_blog(pool: &PgPool, title: &str, url: &str, likes: i64) -> i64 {
    sqlx::query_scalar("INSERT INTO blogs (title, url, likes) VALUES ($1, $2, $3) RETURNING id")
        .bind(title)
        .bind(url)
        .bind(likes)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn seed_initial_blogs(pool: &PgPool) -> Vec<i64> {
    let mut ids = Vec::with_capacity(INITIAL_BLOGS.len());
    for (title, author, url, likes) in INITIAL_BLOGS {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO blogs (title, author, url, likes) VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(title)
        .bind(author)
        .bind(url)
        .bind(likes)
        .fetch_one(pool)
        .await
        .unwrap();
        ids.push(id);
    }
    ids
}

pub async fn blog_titles_in_db(pool: &PgPool) -> Vec<String> {
    sqlx::query_scalar("SELECT title FROM blogs ORDER BY id")
        .fetch_all(pool)
        .await
        .unwrap()
}

pub async fn count_users(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_user(pool: &PgPool, username: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO users (username, password_hash) VALUES ($1, 'not-a-real-hash') RETURNING id",
    )
    .bind(username)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    let hasher = Argon2Hasher::new(1).unwrap();
    AppState::new(Arc::new(pool), hasher)
}
