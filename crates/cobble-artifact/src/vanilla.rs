//! # Vanilla Resolution Strategy
//!
//! Resolves official Mojang server builds through the piston-meta
//! version manifest:
//!
//! 1. Fetch the manifest (`latest.release` plus the full version index).
//! 2. Expand `latest` to the current release id.
//! 3. Find the version entry by id — a miss is a resolution error, never
//!    a silent fallback to another version.
//! 4. Fetch the per-version descriptor and extract
//!    `downloads.server.url`.
//! 5. Download the server JAR.

use cobble_core::VersionSpec;
use serde::Deserialize;

use crate::error::ResolveError;
use crate::resolver::{ArtifactResolver, ResolvedArtifact};

/// Filename the Mojang distribution uses for the server binary.
const VANILLA_FILE_NAME: &str = "server.jar";

#[derive(Debug, Deserialize)]
struct VersionManifest {
    latest: LatestPointer,
    versions: Vec<VersionEntry>,
}

#[derive(Debug, Deserialize)]
struct LatestPointer {
    release: String,
}

#[derive(Debug, Deserialize)]
struct VersionEntry {
    id: String,
    url: String,
}

#[derive(Debug, Deserialize)]
struct VersionDescriptor {
    #[serde(default)]
    downloads: Downloads,
}

#[derive(Debug, Default, Deserialize)]
struct Downloads {
    server: Option<ServerDownload>,
}

#[derive(Debug, Deserialize)]
struct ServerDownload {
    url: String,
}

impl ArtifactResolver {
    /// Resolve a Vanilla server JAR via the Mojang version manifest.
    pub(crate) async fn resolve_vanilla(
        &self,
        version: &VersionSpec,
    ) -> Result<ResolvedArtifact, ResolveError> {
        let manifest: VersionManifest = self.fetch_json(&self.mojang_manifest_url).await?;

        let target = match version {
            VersionSpec::Latest => manifest.latest.release.clone(),
            VersionSpec::Exact(id) => id.clone(),
        };
        tracing::info!(version = %target, "resolving vanilla server build");

        let entry = manifest
            .versions
            .iter()
            .find(|v| v.id == target)
            .ok_or_else(|| ResolveError::VersionNotFound {
                version: target.clone(),
            })?;

        let descriptor: VersionDescriptor = self.fetch_json(&entry.url).await?;
        let download_url = descriptor
            .downloads
            .server
            .map(|s| s.url)
            .ok_or_else(|| ResolveError::MissingServerUrl {
                version: target.clone(),
            })?;

        let bytes = self.fetch_bytes(&download_url).await?;
        tracing::info!(version = %target, size = bytes.len(), "downloaded vanilla server JAR");

        Ok(ResolvedArtifact {
            bytes,
            file_name: VANILLA_FILE_NAME.to_string(),
            version: target,
        })
    }
}
