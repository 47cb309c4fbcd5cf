//! Target URL validation.

use crate::error::AppError;
use url::Url;

/// Validates that `target` is an absolute URL with an `http` or `https`
/// scheme.
///
/// The target is stored exactly as supplied; only syntactic validity and the
/// scheme are checked. Rejecting non-HTTP(S) schemes also keeps
/// `javascript:`, `data:`, and `file:` URLs out of redirects.
///
/// # Errors
///
/// Returns [`AppError::InvalidTarget`] for malformed URLs or disallowed
/// schemes.
pub fn validate_target(target: &str) -> Result<(), AppError> {
    let url = Url::parse(target).map_err(|e| AppError::InvalidTarget {
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(AppError::InvalidTarget {
            reason: format!("unsupported scheme {other:?}"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http() {
        assert!(validate_target("http://example.com").is_ok());
    }

    #[test]
    fn test_accepts_https_with_path_and_query() {
        assert!(validate_target("https://example.com/page?q=rust#frag").is_ok());
    }

    #[test]
    fn test_accepts_custom_port() {
        assert!(validate_target("http://localhost:3000/test").is_ok());
    }

    #[test]
    fn test_rejects_missing_scheme() {
        let result = validate_target("example.com");
        assert!(matches!(result, Err(AppError::InvalidTarget { .. })));
    }

    #[test]
    fn test_rejects_not_a_url() {
        assert!(validate_target("not-a-url").is_err());
    }

    #[test]
    fn test_rejects_empty() {
        assert!(validate_target("").is_err());
    }

    #[test]
    fn test_rejects_ftp() {
        let result = validate_target("ftp://x.com");
        assert!(matches!(result, Err(AppError::InvalidTarget { .. })));
    }

    #[test]
    fn test_rejects_javascript() {
        assert!(validate_target("javascript:alert('xss')").is_err());
    }

    #[test]
    fn test_rejects_data() {
        assert!(validate_target("data:text/plain,Hello").is_err());
    }

    #[test]
    fn test_rejects_mailto() {
        assert!(validate_target("mailto:test@example.com").is_err());
    }
}
