mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use sqlx::PgPool;
use tinylink::api::handlers::redirect_handler;

fn test_app(state: tinylink::AppState) -> Router {
    Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state)
}

#[sqlx::test]
async fn test_redirect_success(pool: PgPool) {
    common::create_test_link(&pool, "abc123", "https://example.com/target").await;

    let server = TestServer::new(test_app(common::create_test_state(pool))).unwrap();

    let response = server.get("/abc123").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[sqlx::test]
async fn test_redirect_increments_clicks_and_stamps_time(pool: PgPool) {
    common::create_test_link(&pool, "abc123", "https://example.com").await;
    assert!(common::fetch_last_clicked_at(&pool, "abc123").await.is_none());

    let server = TestServer::new(test_app(common::create_test_state(pool.clone()))).unwrap();

    let response = server.get("/abc123").await;
    assert_eq!(response.status_code(), 307);

    assert_eq!(common::fetch_clicks(&pool, "abc123").await, 1);
    assert!(common::fetch_last_clicked_at(&pool, "abc123").await.is_some());
}

#[sqlx::test]
async fn test_redirect_counts_every_hit(pool: PgPool) {
    common::create_test_link(&pool, "abc123", "https://example.com").await;

    let server = TestServer::new(test_app(common::create_test_state(pool.clone()))).unwrap();

    for _ in 0..3 {
        server.get("/abc123").await;
    }

    assert_eq!(common::fetch_clicks(&pool, "abc123").await, 3);
}

#[sqlx::test]
async fn test_redirect_not_found(pool: PgPool) {
    let server = TestServer::new(test_app(common::create_test_state(pool))).unwrap();

    let response = server.get("/nothere").await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_redirect_deleted_link_is_not_counted(pool: PgPool) {
    common::create_deleted_link(&pool, "abc123", "https://example.com").await;

    let server = TestServer::new(test_app(common::create_test_state(pool.clone()))).unwrap();

    let response = server.get("/abc123").await;

    response.assert_status_not_found();
    assert_eq!(common::fetch_clicks(&pool, "abc123").await, 0);
    assert!(common::fetch_last_clicked_at(&pool, "abc123").await.is_none());
}

#[sqlx::test]
async fn test_redirect_malformed_code_is_not_found(pool: PgPool) {
    let server = TestServer::new(test_app(common::create_test_state(pool))).unwrap();

    // Too short for the code contract; never reaches the store.
    let response = server.get("/ab").await;

    response.assert_status_not_found();
}
