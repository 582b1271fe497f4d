//! # Paper Resolution Strategy
//!
//! Resolves PaperMC server builds through the PaperMC v2 API, and serves
//! as the Spigot compatibility path — Spigot publishes no download API,
//! and Paper is a drop-in replacement.
//!
//! 1. Fetch the build list for a concrete version (`latest` is rejected
//!    up front; only the Mojang manifest can expand it).
//! 2. Select the highest build number.
//! 3. Compose the download URL from version, build, and the
//!    `paper-{version}-{build}.jar` filename pattern.
//! 4. Download the JAR.

use cobble_core::{Software, VersionSpec};
use serde::Deserialize;

use crate::error::ResolveError;
use crate::resolver::{ArtifactResolver, ResolvedArtifact};

#[derive(Debug, Deserialize)]
struct PaperVersion {
    #[serde(default)]
    builds: Vec<u64>,
}

impl ArtifactResolver {
    /// Resolve a Paper server JAR (also the Spigot delegate).
    ///
    /// `software` is the variant the caller asked for; it only affects
    /// error reporting, the resolution steps are identical.
    pub(crate) async fn resolve_paper(
        &self,
        software: Software,
        version: &VersionSpec,
    ) -> Result<ResolvedArtifact, ResolveError> {
        let VersionSpec::Exact(version) = version else {
            return Err(ResolveError::LatestUnsupported { software });
        };

        let list_url = format!(
            "{}/v2/projects/paper/versions/{version}",
            self.paper_api_base
        );
        let info: PaperVersion = match self.fetch_json(&list_url).await {
            Err(ResolveError::Fetch { status: 404, .. }) => {
                return Err(ResolveError::VersionNotFound {
                    version: version.clone(),
                })
            }
            other => other?,
        };

        let build = info
            .builds
            .iter()
            .max()
            .copied()
            .ok_or_else(|| ResolveError::NoBuilds {
                version: version.clone(),
            })?;
        tracing::info!(%software, version = %version, build, "resolving paper server build");

        let file_name = format!("paper-{version}-{build}.jar");
        let download_url = format!(
            "{}/v2/projects/paper/versions/{version}/builds/{build}/downloads/{file_name}",
            self.paper_api_base
        );
        let bytes = self.fetch_bytes(&download_url).await?;
        tracing::info!(version = %version, build, size = bytes.len(), "downloaded paper server JAR");

        Ok(ResolvedArtifact {
            bytes,
            file_name,
            version: version.clone(),
        })
    }
}
