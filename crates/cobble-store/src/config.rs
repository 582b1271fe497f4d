//! Configuration for the content store client.
//!
//! All endpoints and limits are explicit values handed to the
//! constructor. Nothing in this crate reads process environment state.

/// Default content store API base.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User agent sent on every store request. The store rejects requests
/// without one.
pub const DEFAULT_USER_AGENT: &str = concat!("cobble/", env!("CARGO_PKG_VERSION"));

/// Configuration for [`ContentStoreClient`](crate::ContentStoreClient).
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL of the content store API (e.g. `https://api.github.com`).
    pub api_base: String,
    /// `User-Agent` header value sent with every request.
    pub user_agent: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl StoreConfig {
    /// Create a configuration for a non-default API base, keeping the
    /// default user agent and timeout.
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            ..Self::default()
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
