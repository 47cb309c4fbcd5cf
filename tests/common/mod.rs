#![allow(dead_code)]

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use tinylink::application::services::LinkService;
use tinylink::infrastructure::persistence::PgLinkRepository;
use tinylink::state::AppState;

pub async fn create_test_link(pool: &PgPool, code: &str, target: &str) {
    sqlx::query("INSERT INTO links (code, target) VALUES ($1, $2)")
        .bind(code)
        .bind(target)
        .execute(pool)
        .await
        .unwrap();
}

/// Inserts a link with `created_at` shifted into the past, for ordering tests.
pub async fn create_backdated_link(pool: &PgPool, code: &str, target: &str, hours_ago: i32) {
    sqlx::query(
        "INSERT INTO links (code, target, created_at) \
         VALUES ($1, $2, now() - make_interval(hours => $3))",
    )
    .bind(code)
    .bind(target)
    .bind(hours_ago)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn create_deleted_link(pool: &PgPool, code: &str, target: &str) {
    sqlx::query("INSERT INTO links (code, target, deleted) VALUES ($1, $2, TRUE)")
        .bind(code)
        .bind(target)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn fetch_clicks(pool: &PgPool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT clicks FROM links WHERE code = $1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn fetch_last_clicked_at(pool: &PgPool, code: &str) -> Option<DateTime<Utc>> {
    sqlx::query_scalar("SELECT last_clicked_at FROM links WHERE code = $1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    let pool = Arc::new(pool);
    let link_repository = Arc::new(PgLinkRepository::new(pool.clone()));
    let link_service = Arc::new(LinkService::new(link_repository));

    AppState {
        link_service,
        db: pool,
    }
}
