//! Artifact resolution error types.
//!
//! Two families: **fetch errors** (the upstream distribution service was
//! unreachable or answered non-2xx, carrying the offending URL and
//! status) and **resolution errors** (the upstream answered, but the
//! requested version/build/URL does not exist — each variant names the
//! lookup stage that failed).

use cobble_core::Software;

/// Errors from artifact resolution.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The HTTP client could not be constructed from the configuration.
    #[error("resolver configuration error: {reason}")]
    Client {
        /// Why construction failed.
        reason: String,
    },

    /// HTTP transport error (connection failure, timeout).
    #[error("HTTP error fetching {url}: {source}")]
    Http {
        /// The URL being fetched.
        url: String,
        /// The underlying transport error.
        source: reqwest::Error,
    },

    /// An upstream distribution service answered non-2xx.
    #[error("upstream fetch of {url} failed with status {status}")]
    Fetch {
        /// The offending URL.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// Response deserialization failed.
    #[error("failed to deserialize response from {url}: {source}")]
    Deserialization {
        /// The URL whose response could not be parsed.
        url: String,
        /// The underlying error.
        source: reqwest::Error,
    },

    /// The requested version id has no entry in the upstream index.
    #[error("artifact not found: no version {version:?} in the upstream index")]
    VersionNotFound {
        /// The version id that was looked up.
        version: String,
    },

    /// The per-version descriptor carries no server download URL.
    #[error("artifact not found: version {version:?} has no server download URL")]
    MissingServerUrl {
        /// The version whose descriptor was incomplete.
        version: String,
    },

    /// The build list for this version is empty.
    #[error("artifact not found: no builds published for version {version:?}")]
    NoBuilds {
        /// The version whose build list was empty.
        version: String,
    },

    /// `latest` was requested for a variant that requires a concrete
    /// release id.
    #[error("version \"latest\" is not supported for {software}; pass a concrete release id")]
    LatestUnsupported {
        /// The variant the request was for.
        software: Software,
    },
}
