//! Structured validation errors for domain-primitive construction.

use thiserror::Error;

/// Errors raised when constructing a domain primitive from raw input.
///
/// Validation happens before any network call is issued: a value that
/// fails here never reaches the content store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Server name is empty or whitespace-only.
    #[error("invalid server name: {0:?} (must be non-empty)")]
    InvalidServerName(String),

    /// Bearer token is empty.
    #[error("credential must not be empty")]
    EmptyCredential,
}
