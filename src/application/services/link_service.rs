//! Link lifecycle service: creation, lookup, soft deletion, hit recording.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{GENERATED_CODE_LENGTH, generate_code, validate_code};
use crate::utils::target_url::validate_target;

/// Attempt ceiling for the generated-code collision retry loop. Bounds the
/// worst-case latency of a create and guarantees termination.
const MAX_CODE_ATTEMPTS: u32 = 5;

/// Service orchestrating code generation, collision retry, and link
/// lifecycle operations.
///
/// Holds no mutable state between calls; all same-code atomicity is
/// delegated to the repository's single-statement operations.
pub struct LinkService<R: LinkRepository> {
    link_repository: Arc<R>,
}

impl<R: LinkRepository> LinkService<R> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<R>) -> Self {
        Self { link_repository }
    }

    /// Creates a short link for `target`.
    ///
    /// With a caller-supplied `code`, exactly one insert is attempted: the
    /// caller chose a specific code, so a collision is their conflict to
    /// resolve. Without one, a fresh random code is generated per attempt,
    /// retrying only on duplicate-code collisions.
    ///
    /// On success, returns the record exactly as the store created it,
    /// including the server-assigned `created_at`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidTarget`] if the target is not an http(s) URL.
    /// Returns [`AppError::InvalidCode`] if a supplied code fails the format contract.
    /// Returns [`AppError::CodeConflict`] if a supplied code already exists.
    /// Returns [`AppError::CodeGenerationExhausted`] after [`MAX_CODE_ATTEMPTS`]
    /// generated-code collisions.
    pub async fn create_link(
        &self,
        target: String,
        code: Option<String>,
    ) -> Result<Link, AppError> {
        validate_target(&target)?;

        if let Some(code) = code {
            validate_code(&code)?;
            return self.link_repository.insert(NewLink { code, target }).await;
        }

        self.insert_with_generated_code(target).await
    }

    /// Lists all active links, newest first.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.link_repository.list_active().await
    }

    /// Retrieves an active link by code. Absence is `None`, not an error;
    /// the caller decides how to surface it.
    pub async fn get_link(&self, code: &str) -> Result<Option<Link>, AppError> {
        self.link_repository.find_active(code).await
    }

    /// Soft-deletes an active link, returning whether anything was deleted.
    pub async fn delete_link(&self, code: &str) -> Result<bool, AppError> {
        self.link_repository.soft_delete(code).await
    }

    /// Records a redirect hit and returns the target URL, or `None` for an
    /// unknown or deleted code.
    ///
    /// This is the redirect hot path: the increment-and-fetch stays a single
    /// repository operation and is never split into an existence check
    /// followed by a mutation.
    pub async fn record_click(&self, code: &str) -> Result<Option<String>, AppError> {
        self.link_repository.record_hit(code).await
    }

    /// Inserts with a freshly generated code, retrying on collision.
    ///
    /// Collisions in a 62^6 space are rare but expected; any store error
    /// other than a duplicate code propagates on first occurrence.
    async fn insert_with_generated_code(&self, target: String) -> Result<Link, AppError> {
        for _ in 0..MAX_CODE_ATTEMPTS {
            let code = generate_code(GENERATED_CODE_LENGTH);

            match self
                .link_repository
                .insert(NewLink {
                    code,
                    target: target.clone(),
                })
                .await
            {
                Ok(link) => return Ok(link),
                Err(AppError::CodeConflict { .. }) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(AppError::CodeGenerationExhausted {
            attempts: MAX_CODE_ATTEMPTS,
        })
    }
}
