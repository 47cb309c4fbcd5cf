//! Handlers for link management endpoints (create, list, get, delete).

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::links::{CreateLinkRequest, DeleteResponse, LinkResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::code_generator::validate_code;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// {
///   "target": "https://example.com/page",
///   "code": "promo24"   // optional
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the target or code fails validation.
/// Returns 409 Conflict if a supplied code is taken, or if code generation
/// exhausted its retry budget.
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .create_link(payload.target, payload.code)
        .await?;

    Ok((StatusCode::CREATED, Json(link.into())))
}

/// Lists all active links, newest first.
///
/// # Endpoint
///
/// `GET /api/links`
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.link_service.list_links().await?;

    Ok(Json(links.into_iter().map(LinkResponse::from).collect()))
}

/// Returns a single active link with its click statistics.
///
/// # Endpoint
///
/// `GET /api/links/{code}`
///
/// # Errors
///
/// Returns 400 Bad Request if the code fails the format contract.
/// Returns 404 Not Found if no active link matches.
pub async fn get_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkResponse>, AppError> {
    validate_code(&code)?;

    let link = state
        .link_service
        .get_link(&code)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(link.into()))
}

/// Soft-deletes a short link.
///
/// The row is not removed; the code stays reserved and its click history
/// persists, but the link disappears from list/get/redirect.
///
/// # Endpoint
///
/// `DELETE /api/links/{code}`
///
/// # Errors
///
/// Returns 400 Bad Request if the code fails the format contract.
/// Returns 404 Not Found if the link doesn't exist or is already deleted.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeleteResponse>, AppError> {
    validate_code(&code)?;

    let deleted = state.link_service.delete_link(&code).await?;

    if !deleted {
        return Err(AppError::NotFound);
    }

    Ok(Json(DeleteResponse { ok: true }))
}
