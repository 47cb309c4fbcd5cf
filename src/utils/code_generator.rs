//! Short code generation and the shared code format contract.
//!
//! The format pattern here is the single source of truth for both generated
//! and caller-supplied codes; the request DTOs validate against the same
//! compiled regex.

use crate::error::AppError;
use rand::Rng;
use rand::distr::Alphanumeric;
use regex::Regex;
use std::sync::LazyLock;

/// Length of system-generated codes.
pub const GENERATED_CODE_LENGTH: usize = 6;

/// Code format contract: alphanumeric, length 6 to 8 inclusive.
pub static CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{6,8}$").unwrap());

/// Generates a random short code of exactly `length` characters.
///
/// Characters are drawn uniformly from the 62-character alphanumeric
/// alphabet. Not cryptographically secure; uniformity is the only guarantee,
/// and the output is never checked against the store here.
pub fn generate_code(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Returns true if `code` satisfies the code format contract.
pub fn is_valid_code(code: &str) -> bool {
    CODE_PATTERN.is_match(code)
}

/// Validates a caller-supplied code against the format contract.
///
/// The HTTP layer validates request bodies before they reach the service,
/// but the service re-checks here since it can be called directly.
///
/// # Errors
///
/// Returns [`AppError::InvalidCode`] if the code does not match.
pub fn validate_code(code: &str) -> Result<(), AppError> {
    if is_valid_code(code) {
        Ok(())
    } else {
        Err(AppError::InvalidCode {
            code: code.to_string(),
        })
    }
}
