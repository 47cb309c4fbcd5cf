//! The link entity: a short code bound to its target URL.

use chrono::{DateTime, Utc};

/// A short code mapped to a target URL, with click statistics.
///
/// This is the record shape handed back to callers. The storage layer keeps a
/// `deleted` flag alongside it for soft deletion; that flag never leaves the
/// repository, so a `Link` is always an active row from the caller's point of
/// view.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Link {
    pub code: String,
    pub target: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    pub last_clicked_at: Option<DateTime<Utc>>,
}

impl Link {
    pub fn new(
        code: String,
        target: String,
        clicks: i64,
        created_at: DateTime<Utc>,
        last_clicked_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            code,
            target,
            clicks,
            created_at,
            last_clicked_at,
        }
    }

    /// Returns true if the link has been visited at least once.
    pub fn has_been_clicked(&self) -> bool {
        self.last_clicked_at.is_some()
    }
}

/// Input data for creating a new link.
///
/// `clicks`, `created_at`, and the soft-delete flag are assigned by the store
/// on insert.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub target: String,
}
