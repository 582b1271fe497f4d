//! Configuration for the artifact resolver.
//!
//! Upstream endpoints are explicit constructor inputs so tests can point
//! the resolver at mock servers; nothing here reads process environment
//! state.

/// Default Mojang version manifest URL.
pub const DEFAULT_MOJANG_MANIFEST_URL: &str =
    "https://piston-meta.mojang.com/mc/game/version_manifest_v2.json";

/// Default PaperMC API base.
pub const DEFAULT_PAPER_API_BASE: &str = "https://api.papermc.io";

/// Default per-request timeout in seconds. Server JARs run tens of
/// megabytes, so this bounds each call generously without letting a hung
/// upstream hang the whole provisioning operation forever.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Configuration for [`ArtifactResolver`](crate::ArtifactResolver).
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Full URL of the Mojang version manifest.
    pub mojang_manifest_url: String,
    /// Base URL of the PaperMC API (e.g. `https://api.papermc.io`).
    pub paper_api_base: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl ResolverConfig {
    /// Create a configuration with non-default upstream endpoints,
    /// keeping the default timeout.
    pub fn new(
        mojang_manifest_url: impl Into<String>,
        paper_api_base: impl Into<String>,
    ) -> Self {
        Self {
            mojang_manifest_url: mojang_manifest_url.into(),
            paper_api_base: paper_api_base.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            mojang_manifest_url: DEFAULT_MOJANG_MANIFEST_URL.to_string(),
            paper_api_base: DEFAULT_PAPER_API_BASE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
