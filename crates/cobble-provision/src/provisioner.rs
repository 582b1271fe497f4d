//! The orchestrator: `create_server` and `set_running`.

use cobble_artifact::ArtifactResolver;
use cobble_core::{env, ArtifactSpec, Credential, RepoRef, ServerName, Software, VersionSpec};
use cobble_store::ContentStoreClient;

use crate::error::ProvisionError;
use crate::templates;

/// Commit message for the start toggle.
const START_COMMIT_MESSAGE: &str = "Start server: set START=true";
/// Commit message for the stop toggle.
const STOP_COMMIT_MESSAGE: &str = "Stop server: set START=false";

/// Drives server provisioning and the running-state toggle.
///
/// Holds no mutable state: both collaborators are plain HTTP clients,
/// and every operation re-derives what it needs from the remote store.
/// Independent invocations may run concurrently; the only cross-call
/// hazard is the store's own optimistic-concurrency check on a single
/// path, which surfaces as a write conflict rather than being retried.
#[derive(Debug, Clone)]
pub struct Provisioner {
    store: ContentStoreClient,
    resolver: ArtifactResolver,
}

impl Provisioner {
    /// Assemble an orchestrator from its two collaborators.
    pub fn new(store: ContentStoreClient, resolver: ArtifactResolver) -> Self {
        Self { store, resolver }
    }

    /// Provision a server: ensure its repository exists and populate the
    /// fixed file set, including the resolved binary artifact.
    ///
    /// Steps run strictly in order and short-circuit on the first
    /// failure. Re-running after a partial failure converges the
    /// repository — every write is an idempotent upsert, and an existing
    /// repository is reused rather than erroring.
    pub async fn create_server(
        &self,
        credential: &Credential,
        name: &str,
        software: Software,
        version: VersionSpec,
    ) -> Result<RepoRef, ProvisionError> {
        let name = ServerName::new(name)?;
        tracing::info!(server = %name, %software, %version, "provisioning server repository");

        let description = templates::repository_description(&name, software, &version);
        let repo = self
            .store
            .ensure_repository(credential, &name, &description)
            .await?;

        for (path, content) in templates::templated_files(&name, software, &version) {
            self.store
                .upsert(
                    credential,
                    &repo,
                    path,
                    content.as_bytes(),
                    &format!("Add {path}"),
                )
                .await?;
        }

        let artifact = self
            .resolver
            .resolve(&ArtifactSpec::new(software, version))
            .await?;
        tracing::info!(
            server = %name,
            resolved_version = %artifact.version,
            size = artifact.bytes.len(),
            "uploading server binary"
        );
        self.store
            .upsert(
                credential,
                &repo,
                templates::SERVER_JAR_PATH,
                &artifact.bytes,
                "Add server jar",
            )
            .await?;

        self.store
            .upsert(
                credential,
                &repo,
                templates::START_SH_PATH,
                templates::START_SH.as_bytes(),
                "Add start script (Linux/macOS)",
            )
            .await?;
        self.store
            .upsert(
                credential,
                &repo,
                templates::START_BAT_PATH,
                templates::START_BAT.as_bytes(),
                "Add start script (Windows)",
            )
            .await?;

        tracing::info!(repo = %repo, "server repository provisioned");
        Ok(repo)
    }

    /// Flip the server's nominal running state by patching the `START=`
    /// flag in the hosted `.env` file.
    ///
    /// Only the flag is touched: user-added keys survive byte-for-byte,
    /// and a missing state file is seeded with just the flag. Idempotent
    /// for a fixed `running` value.
    pub async fn set_running(
        &self,
        credential: &Credential,
        name: &str,
        running: bool,
    ) -> Result<(), ProvisionError> {
        let name = ServerName::new(name)?;
        let owner = self.store.current_user(credential).await?;
        let repo = RepoRef::new(owner, name.as_str());
        tracing::info!(repo = %repo, running, "toggling server state");

        let existing = self
            .store
            .read(credential, &repo, templates::ENV_PATH)
            .await?;
        let existing_text = existing
            .as_ref()
            .map(|object| String::from_utf8_lossy(&object.bytes));
        let next = env::set_start_flag(existing_text.as_deref(), running);

        let message = if running {
            START_COMMIT_MESSAGE
        } else {
            STOP_COMMIT_MESSAGE
        };
        self.store
            .upsert(credential, &repo, templates::ENV_PATH, next.as_bytes(), message)
            .await?;
        Ok(())
    }
}
