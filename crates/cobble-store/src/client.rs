//! The content store client itself.
//!
//! Wraps a [`reqwest::Client`] with the store's base URL and required
//! headers. The credential is supplied per call — the client holds no
//! session state and can serve any number of identities concurrently.

use std::time::Duration;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use cobble_core::{Credential, RepoRef, ServerName};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::config::StoreConfig;
use crate::error::StoreError;

/// Media type the contents API expects on every request.
const STORE_MEDIA_TYPE: &str = "application/vnd.github+json";

/// One stored object as returned by a read: raw payload bytes plus the
/// opaque digest identifying this version of the content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    /// Decoded payload bytes.
    pub bytes: Vec<u8>,
    /// Opaque version marker required to authorize an update.
    pub digest: String,
}

/// Client for the hosted-repository content API.
#[derive(Debug, Clone)]
pub struct ContentStoreClient {
    client: reqwest::Client,
    api_base: String,
}

impl ContentStoreClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Client`] if the user agent is not a valid
    /// header value or the HTTP client cannot be constructed.
    pub fn new(config: StoreConfig) -> Result<Self, StoreError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(STORE_MEDIA_TYPE));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent).map_err(|_| StoreError::Client {
                reason: "invalid user agent characters".to_string(),
            })?,
        );

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| StoreError::Client {
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        let api_base = config.api_base.trim_end_matches('/').to_string();
        Ok(Self { client, api_base })
    }

    /// Resolve the login of the identity behind a credential.
    pub async fn current_user(&self, credential: &Credential) -> Result<String, StoreError> {
        let endpoint = format!("{}/user", self.api_base);
        let request = self.client.get(&endpoint).bearer_auth(credential.expose());
        let resp = self.send(request, &endpoint).await?;
        if !resp.status().is_success() {
            return Err(api_error(&endpoint, resp).await);
        }
        let user: UserResponse = resp
            .json()
            .await
            .map_err(|source| StoreError::Deserialization {
                endpoint: endpoint.clone(),
                source,
            })?;
        Ok(user.login)
    }

    /// Create the repository for a server, or reuse it if it already
    /// exists.
    ///
    /// A name-collision rejection from the store is the one recovered
    /// error: the owner is resolved via the identity lookup and the
    /// existing `(owner, name)` pair is returned. Any other non-success
    /// status is fatal.
    pub async fn ensure_repository(
        &self,
        credential: &Credential,
        name: &ServerName,
        description: &str,
    ) -> Result<RepoRef, StoreError> {
        let endpoint = format!("{}/user/repos", self.api_base);
        let body = CreateRepoRequest {
            name: name.as_str(),
            private: true,
            auto_init: true,
            description,
        };
        let request = self
            .client
            .post(&endpoint)
            .bearer_auth(credential.expose())
            .json(&body);
        let resp = self.send(request, &endpoint).await?;

        if resp.status() == StatusCode::UNPROCESSABLE_ENTITY {
            tracing::warn!(name = %name, "repository name collision; reusing existing repository");
            let login = self.current_user(credential).await?;
            return Ok(RepoRef::new(login, name.as_str()));
        }
        if !resp.status().is_success() {
            return Err(api_error(&endpoint, resp).await);
        }

        let created: RepoResponse = resp
            .json()
            .await
            .map_err(|source| StoreError::Deserialization {
                endpoint: endpoint.clone(),
                source,
            })?;
        Ok(RepoRef::new(created.owner.login, created.name))
    }

    /// Read one object, yielding `None` if the path does not exist.
    pub async fn read(
        &self,
        credential: &Credential,
        repo: &RepoRef,
        path: &str,
    ) -> Result<Option<StoredObject>, StoreError> {
        let endpoint = self.contents_endpoint(repo, path);
        let request = self.client.get(&endpoint).bearer_auth(credential.expose());
        let resp = self.send(request, &endpoint).await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !resp.status().is_success() {
            return Err(api_error(&endpoint, resp).await);
        }

        let raw: ContentResponse = resp
            .json()
            .await
            .map_err(|source| StoreError::Deserialization {
                endpoint: endpoint.clone(),
                source,
            })?;
        let bytes = decode_transport(&raw.content).map_err(|reason| StoreError::Decode {
            endpoint: endpoint.clone(),
            reason,
        })?;
        Ok(Some(StoredObject {
            bytes,
            digest: raw.sha,
        }))
    }

    /// Read the current digest of one object, yielding `None` if the
    /// path does not exist. A not-found response is "absent", not an
    /// error.
    pub async fn read_digest(
        &self,
        credential: &Credential,
        repo: &RepoRef,
        path: &str,
    ) -> Result<Option<String>, StoreError> {
        let endpoint = self.contents_endpoint(repo, path);
        let request = self.client.get(&endpoint).bearer_auth(credential.expose());
        let resp = self.send(request, &endpoint).await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !resp.status().is_success() {
            return Err(api_error(&endpoint, resp).await);
        }

        let raw: DigestResponse = resp
            .json()
            .await
            .map_err(|source| StoreError::Deserialization {
                endpoint: endpoint.clone(),
                source,
            })?;
        Ok(Some(raw.sha))
    }

    /// Write one object, guarded by the store's optimistic-concurrency
    /// protocol: the current digest is read first and attached to the
    /// write when the path already exists.
    ///
    /// Safe to call repeatedly with identical bytes — the second write
    /// is a no-op commit that still succeeds. A stale-digest rejection
    /// surfaces as [`StoreError::WriteConflict`] and is not retried.
    pub async fn upsert(
        &self,
        credential: &Credential,
        repo: &RepoRef,
        path: &str,
        bytes: &[u8],
        message: &str,
    ) -> Result<(), StoreError> {
        let digest = self.read_digest(credential, repo, path).await?;
        let endpoint = self.contents_endpoint(repo, path);
        tracing::debug!(
            repo = %repo,
            path,
            existing = digest.is_some(),
            size = bytes.len(),
            "upserting object"
        );

        let body = PutContentRequest {
            message,
            content: BASE64.encode(bytes),
            sha: digest,
        };
        let request = self
            .client
            .put(&endpoint)
            .bearer_auth(credential.expose())
            .json(&body);
        let resp = self.send(request, &endpoint).await?;

        if resp.status() == StatusCode::CONFLICT {
            let body = resp.text().await.unwrap_or_default();
            return Err(StoreError::WriteConflict {
                path: path.to_string(),
                body,
            });
        }
        if !resp.status().is_success() {
            return Err(api_error(&endpoint, resp).await);
        }
        Ok(())
    }

    fn contents_endpoint(&self, repo: &RepoRef, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.api_base, repo.owner, repo.name, path
        )
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        endpoint: &str,
    ) -> Result<reqwest::Response, StoreError> {
        request.send().await.map_err(|source| StoreError::Http {
            endpoint: endpoint.to_string(),
            source,
        })
    }
}

/// Map a non-success response into the fatal API error, consuming the
/// body for diagnostics.
async fn api_error(endpoint: &str, resp: reqwest::Response) -> StoreError {
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap_or_default();
    StoreError::Api {
        endpoint: endpoint.to_string(),
        status,
        body,
    }
}

/// Decode a transport-encoded payload. The store wraps base64 at 60
/// columns, so embedded newlines are stripped before decoding.
fn decode_transport(content: &str) -> Result<Vec<u8>, String> {
    let cleaned: String = content
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    BASE64.decode(cleaned.as_bytes()).map_err(|e| e.to_string())
}

// ── Wire types ───────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct UserResponse {
    login: String,
}

#[derive(Debug, Serialize)]
struct CreateRepoRequest<'a> {
    name: &'a str,
    private: bool,
    auto_init: bool,
    description: &'a str,
}

#[derive(Debug, Deserialize)]
struct RepoResponse {
    name: String,
    owner: OwnerResponse,
}

#[derive(Debug, Deserialize)]
struct OwnerResponse {
    login: String,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    content: String,
    sha: String,
}

#[derive(Debug, Deserialize)]
struct DigestResponse {
    sha: String,
}

#[derive(Debug, Serialize)]
struct PutContentRequest<'a> {
    message: &'a str,
    content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    sha: Option<String>,
}
