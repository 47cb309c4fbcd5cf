//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on_code;

/// PostgreSQL repository for link storage and retrieval.
///
/// Every mutation is a single statement so the database's own concurrency
/// control provides the uniqueness and no-lost-update guarantees; there is no
/// check-then-act anywhere in this module.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        sqlx::query_as::<_, Link>(
            r#"
            INSERT INTO links (code, target)
            VALUES ($1, $2)
            RETURNING code, target, clicks, created_at, last_clicked_at
            "#,
        )
        .bind(&new_link.code)
        .bind(&new_link.target)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on_code(&e) {
                AppError::CodeConflict {
                    code: new_link.code.clone(),
                }
            } else {
                AppError::Database(e)
            }
        })
    }

    async fn list_active(&self) -> Result<Vec<Link>, AppError> {
        let links = sqlx::query_as::<_, Link>(
            r#"
            SELECT code, target, clicks, created_at, last_clicked_at
            FROM links
            WHERE deleted = false
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(links)
    }

    async fn find_active(&self, code: &str) -> Result<Option<Link>, AppError> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            SELECT code, target, clicks, created_at, last_clicked_at
            FROM links
            WHERE code = $1 AND deleted = false
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn soft_delete(&self, code: &str) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE links
            SET deleted = true
            WHERE code = $1 AND deleted = false
            "#,
        )
        .bind(code)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn record_hit(&self, code: &str) -> Result<Option<String>, AppError> {
        // Increment and fetch in one statement; a concurrent delete either
        // lands before (no row matches) or after (the hit counts).
        let target = sqlx::query_scalar::<_, String>(
            r#"
            UPDATE links
            SET clicks = clicks + 1, last_clicked_at = now()
            WHERE code = $1 AND deleted = false
            RETURNING target
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(target)
    }
}
