//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::code_generator::is_valid_code;

/// Redirects a short code to its target URL, counting the hit.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// The click increment, `last_clicked_at` stamp, and target fetch are one
/// atomic store operation, so concurrent hits never lose a count and a
/// deleted link is never incremented.
///
/// # Errors
///
/// Returns 404 Not Found if the code is malformed, unknown, or soft-deleted.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    // Codes outside the format contract can't exist; skip the store.
    if !is_valid_code(&code) {
        return Err(AppError::NotFound);
    }

    let target = state
        .link_service
        .record_click(&code)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Redirect::temporary(&target))
}
