//! DTOs for link management endpoints.

use crate::domain::entities::Link;
use crate::utils::code_generator::CODE_PATTERN;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to create a short link.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// The URL the short code redirects to (must be valid HTTP/HTTPS).
    #[validate(url(message = "Invalid URL format"))]
    pub target: String,

    /// Optional caller-chosen short code. Must match the code format
    /// contract; when absent, a random code is generated.
    #[validate(regex(
        path = "*CODE_PATTERN",
        message = "code must be 6-8 alphanumeric characters"
    ))]
    pub code: Option<String>,
}

/// JSON representation of a link.
///
/// Exactly the persisted record shape exposed outward; the soft-delete flag
/// never appears here.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub code: String,
    pub target: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    pub last_clicked_at: Option<DateTime<Utc>>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            code: link.code,
            target: link.target,
            clicks: link.clicks,
            created_at: link.created_at,
            last_clicked_at: link.last_clicked_at,
        }
    }
}

/// Response body for a successful delete.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub ok: bool,
}
