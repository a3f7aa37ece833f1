//! Vault error types using thiserror 2.0.
//!
//! Errors from the underlying address parser and HTTP client are carried
//! as-is so callers can match on the original value.

use thiserror::Error;

/// Vault-specific errors.
#[derive(Error, Debug)]
pub enum VaultError {
    /// Address could not be parsed
    #[error(transparent)]
    InvalidAddress(#[from] url::ParseError),

    /// HTTP error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Permission denied
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Non-success response from the Vault API
    #[error("Vault returned status {status}: {}", errors.join("; "))]
    Api {
        /// HTTP status code
        status: u16,
        /// Messages from the `errors` field of the response body
        errors: Vec<String>,
    },
}

/// Result type for Vault operations.
pub type VaultResult<T> = Result<T, VaultError>;

impl VaultError {
    /// Check if error is retryable.
    ///
    /// This crate never retries on its own; the classification is for callers.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Http(_) => true,
            Self::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VaultError::Api {
            status: 500,
            errors: vec!["internal error".to_string(), "try again".to_string()],
        };
        assert_eq!(err.to_string(), "Vault returned status 500: internal error; try again");
    }

    #[test]
    fn test_invalid_address_is_transparent() {
        let parse_err = url::ParseError::RelativeUrlWithoutBase;
        let err: VaultError = parse_err.into();
        assert_eq!(err.to_string(), parse_err.to_string());
        assert!(matches!(err, VaultError::InvalidAddress(e) if e == parse_err));
    }

    #[test]
    fn test_retryable_errors() {
        assert!(VaultError::Api { status: 503, errors: vec![] }.is_retryable());
        assert!(VaultError::Api { status: 429, errors: vec![] }.is_retryable());
        assert!(!VaultError::Api { status: 400, errors: vec![] }.is_retryable());
        assert!(!VaultError::PermissionDenied("secret/app".to_string()).is_retryable());
        assert!(!VaultError::InvalidAddress(url::ParseError::EmptyHost).is_retryable());
    }
}
