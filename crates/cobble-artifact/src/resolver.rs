//! The resolver itself: variant dispatch plus the shared HTTP plumbing
//! used by both strategies.

use std::time::Duration;

use cobble_core::{ArtifactSpec, Software};
use serde::de::DeserializeOwned;

use crate::config::ResolverConfig;
use crate::error::ResolveError;

/// A resolved, downloaded binary artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArtifact {
    /// The binary payload.
    pub bytes: Vec<u8>,
    /// Upstream's suggested filename (e.g. `paper-1.21.4-232.jar`). The
    /// orchestrator decides the stored filename; this is informational.
    pub file_name: String,
    /// The concrete release id the artifact was resolved to. Differs
    /// from the requested version when `latest` was expanded.
    pub version: String,
}

/// Resolver for server binary artifacts.
///
/// Holds one HTTP client with a bounded per-request timeout; credentials
/// are never involved — both distribution services are public.
#[derive(Debug, Clone)]
pub struct ArtifactResolver {
    pub(crate) client: reqwest::Client,
    pub(crate) mojang_manifest_url: String,
    pub(crate) paper_api_base: String,
}

impl ArtifactResolver {
    /// Build a resolver from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Client`] if the HTTP client cannot be
    /// constructed.
    pub fn new(config: ResolverConfig) -> Result<Self, ResolveError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ResolveError::Client {
                reason: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self {
            client,
            mojang_manifest_url: config.mojang_manifest_url,
            paper_api_base: config.paper_api_base.trim_end_matches('/').to_string(),
        })
    }

    /// Resolve and download the binary artifact for a spec.
    ///
    /// Dispatches on the software variant; the Spigot arm delegates to
    /// the Paper strategy since Spigot JARs are not directly
    /// downloadable through any public API.
    pub async fn resolve(&self, spec: &ArtifactSpec) -> Result<ResolvedArtifact, ResolveError> {
        match spec.software {
            Software::Vanilla => self.resolve_vanilla(&spec.version).await,
            Software::Paper => self.resolve_paper(Software::Paper, &spec.version).await,
            Software::Spigot => self.resolve_paper(Software::Spigot, &spec.version).await,
        }
    }

    /// Fetch a JSON document, mapping non-2xx to [`ResolveError::Fetch`].
    pub(crate) async fn fetch_json<T: DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<T, ResolveError> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ResolveError::Http {
                url: url.to_string(),
                source,
            })?;
        if !resp.status().is_success() {
            return Err(ResolveError::Fetch {
                url: url.to_string(),
                status: resp.status().as_u16(),
            });
        }
        resp.json()
            .await
            .map_err(|source| ResolveError::Deserialization {
                url: url.to_string(),
                source,
            })
    }

    /// Fetch a binary payload, mapping non-2xx to [`ResolveError::Fetch`].
    pub(crate) async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, ResolveError> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ResolveError::Http {
                url: url.to_string(),
                source,
            })?;
        if !resp.status().is_success() {
            return Err(ResolveError::Fetch {
                url: url.to_string(),
                status: resp.status().as_u16(),
            });
        }
        let bytes = resp.bytes().await.map_err(|source| ResolveError::Http {
            url: url.to_string(),
            source,
        })?;
        Ok(bytes.to_vec())
    }
}
