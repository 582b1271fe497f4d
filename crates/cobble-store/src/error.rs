//! Content store error types.

/// Errors from content store operations.
///
/// The documented recoveries — 404 on a read mapping to "absent", and a
/// name collision on repository creation mapping to "reuse existing" —
/// are handled inside the client and never surface here. Everything
/// else is fatal to the enclosing operation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The HTTP client could not be constructed from the configuration.
    #[error("store client configuration error: {reason}")]
    Client {
        /// Why construction failed.
        reason: String,
    },

    /// HTTP transport error (connection failure, timeout).
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        /// The endpoint that was being called.
        endpoint: String,
        /// The underlying transport error.
        source: reqwest::Error,
    },

    /// The store returned a non-success status outside the documented
    /// 404/422 recovery cases.
    #[error("store {endpoint} returned {status}: {body}")]
    Api {
        /// The endpoint that was called.
        endpoint: String,
        /// The HTTP status code.
        status: u16,
        /// Response body text, for diagnostics.
        body: String,
    },

    /// Response deserialization failed.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        /// The endpoint whose response could not be parsed.
        endpoint: String,
        /// The underlying error.
        source: reqwest::Error,
    },

    /// The stored object's base64 payload could not be decoded.
    #[error("failed to decode content from {endpoint}: {reason}")]
    Decode {
        /// The endpoint whose payload was malformed.
        endpoint: String,
        /// Description of the decoding failure.
        reason: String,
    },

    /// A write was rejected because the supplied digest went stale — a
    /// concurrent writer got there first. Never retried by the client;
    /// the caller decides whether re-running the whole operation makes
    /// sense.
    #[error("write conflict on {path}: stale digest rejected by the store: {body}")]
    WriteConflict {
        /// Repository-relative path of the contested object.
        path: String,
        /// Response body text from the rejection.
        body: String,
    },
}
