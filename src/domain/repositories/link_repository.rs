//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing short links.
///
/// All mutation atomicity is the implementation's responsibility: insert
/// uniqueness and hit recording must each be a single store-side operation,
/// never a check followed by a separate write.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link with `clicks = 0` and a server-assigned `created_at`.
    ///
    /// Uniqueness of `code` spans active and soft-deleted rows, enforced by a
    /// storage constraint so that concurrent inserts with the same code yield
    /// exactly one winner.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CodeConflict`] if the code already exists.
    /// Returns [`AppError::Database`] on other database errors.
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Lists all active (non-deleted) links, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn list_active(&self) -> Result<Vec<Link>, AppError>;

    /// Finds an active link by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if an active row matches
    /// - `Ok(None)` if the code is unknown or soft-deleted
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn find_active(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Soft-deletes an active link by setting its `deleted` flag.
    ///
    /// Returns `Ok(true)` if a row was deleted, `Ok(false)` if the code is
    /// unknown or already deleted. Calling twice never errors.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn soft_delete(&self, code: &str) -> Result<bool, AppError>;

    /// Atomically increments `clicks`, stamps `last_clicked_at`, and returns
    /// the target URL for an active row.
    ///
    /// Increment and fetch happen in one store-side statement, so concurrent
    /// hits never lose an update and a row deleted mid-flight is never
    /// incremented.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(target))` if an active row matched
    /// - `Ok(None)` if the code is unknown or soft-deleted (nothing mutated)
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn record_hit(&self, code: &str) -> Result<Option<String>, AppError>;
}
