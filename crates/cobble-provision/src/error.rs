//! Orchestration error type.

use cobble_artifact::ResolveError;
use cobble_core::ValidationError;
use cobble_store::StoreError;

/// Errors from provisioning and state toggle operations.
///
/// A thin sum over the component errors, so callers can distinguish a
/// validation rejection (nothing was written) from an upstream failure
/// (the repository may be partially populated) when deciding whether to
/// retry the whole operation.
#[derive(Debug, thiserror::Error)]
pub enum ProvisionError {
    /// The request was rejected before any network call.
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] ValidationError),

    /// A content store operation failed.
    #[error("content store operation failed: {0}")]
    Store(#[from] StoreError),

    /// Artifact resolution or download failed.
    #[error("artifact resolution failed: {0}")]
    Resolve(#[from] ResolveError),
}
