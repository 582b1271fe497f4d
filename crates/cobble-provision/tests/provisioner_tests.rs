//! Orchestrator tests against wiremock stand-ins for the content store
//! and the artifact distribution services: full file-set provisioning,
//! ordered short-circuiting, and both state-toggle flows.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use cobble_artifact::{ArtifactResolver, ResolveError, ResolverConfig};
use cobble_core::{Credential, RepoRef, Software, VersionSpec};
use cobble_provision::{ProvisionError, Provisioner};
use cobble_store::{ContentStoreClient, StoreConfig, StoreError};
use wiremock::matchers::{body_json, method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

const JAR_BYTES: &[u8] = b"PK\x03\x04fake-server-jar";

fn provisioner(store: &MockServer, upstream: &MockServer) -> Provisioner {
    let store_client =
        ContentStoreClient::new(StoreConfig::new(store.uri())).expect("store client build");
    let resolver = ArtifactResolver::new(ResolverConfig::new(
        format!("{}/mc/manifest.json", upstream.uri()),
        upstream.uri(),
    ))
    .expect("resolver build");
    Provisioner::new(store_client, resolver)
}

fn credential() -> Credential {
    Credential::new("test-token").expect("valid token")
}

/// Store-side happy path: repository creation succeeds, every contents
/// read misses, every write is accepted.
async fn mount_store_happy_path(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/user/repos"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "name": "srv",
            "owner": {"login": "octocat"}
        })))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex("^/repos/octocat/srv/contents/.+$"))
        .respond_with(ResponseTemplate::new(404))
        .mount(server)
        .await;
    Mock::given(method("PUT"))
        .and(path_regex("^/repos/octocat/srv/contents/.+$"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({"ok": true})))
        .mount(server)
        .await;
}

/// Upstream-side happy path for Vanilla `latest` → release 1.21.4.
async fn mount_vanilla_upstream(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/mc/manifest.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "latest": {"release": "1.21.4"},
            "versions": [
                {"id": "1.21.4", "url": format!("{}/mc/1.21.4.json", server.uri())}
            ]
        })))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/mc/1.21.4.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "downloads": {"server": {"url": format!("{}/mc/server.jar", server.uri())}}
        })))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/mc/server.jar"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(JAR_BYTES))
        .mount(server)
        .await;
}

/// Paths written by `create_server`, in contract order.
const EXPECTED_UPLOADS: [&str; 8] = [
    "/repos/octocat/srv/contents/README.md",
    "/repos/octocat/srv/contents/eula.txt",
    "/repos/octocat/srv/contents/server.properties",
    "/repos/octocat/srv/contents/.env",
    "/repos/octocat/srv/contents/.github/workflows/setup.yml",
    "/repos/octocat/srv/contents/server.jar",
    "/repos/octocat/srv/contents/start.sh",
    "/repos/octocat/srv/contents/start.bat",
];

async fn recorded_put_paths(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .expect("recording enabled")
        .iter()
        .filter(|r| r.method.as_str() == "PUT")
        .map(|r| r.url.path().to_string())
        .collect()
}

// ── create_server ────────────────────────────────────────────────────────

#[tokio::test]
async fn create_server_uploads_the_full_file_set_in_order() {
    let store = MockServer::start().await;
    let upstream = MockServer::start().await;
    mount_store_happy_path(&store).await;
    mount_vanilla_upstream(&upstream).await;

    let repo = provisioner(&store, &upstream)
        .create_server(&credential(), "srv", Software::Vanilla, VersionSpec::Latest)
        .await
        .expect("provisioned");

    assert_eq!(repo, RepoRef::new("octocat", "srv"));
    assert_eq!(recorded_put_paths(&store).await, EXPECTED_UPLOADS);
}

#[tokio::test]
async fn create_server_reuses_an_existing_repository() {
    let store = MockServer::start().await;
    let upstream = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/user/repos"))
        .respond_with(ResponseTemplate::new(422).set_body_string("name already exists"))
        .expect(1)
        .mount(&store)
        .await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"login": "octocat"})),
        )
        .expect(1)
        .mount(&store)
        .await;
    Mock::given(method("GET"))
        .and(path_regex("^/repos/octocat/srv/contents/.+$"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&store)
        .await;
    Mock::given(method("PUT"))
        .and(path_regex("^/repos/octocat/srv/contents/.+$"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({"ok": true})))
        .mount(&store)
        .await;
    mount_vanilla_upstream(&upstream).await;

    let repo = provisioner(&store, &upstream)
        .create_server(&credential(), "srv", Software::Vanilla, VersionSpec::Latest)
        .await
        .expect("reprovisioned over existing repo");

    assert_eq!(repo, RepoRef::new("octocat", "srv"));
    assert_eq!(recorded_put_paths(&store).await.len(), 8);
}

#[tokio::test]
async fn create_server_rejects_blank_name_before_any_network_call() {
    let store = MockServer::start().await;
    let upstream = MockServer::start().await;

    let err = provisioner(&store, &upstream)
        .create_server(&credential(), "   ", Software::Vanilla, VersionSpec::Latest)
        .await
        .unwrap_err();

    assert!(matches!(err, ProvisionError::InvalidRequest(_)));
    let requests = store.received_requests().await.expect("recording enabled");
    assert!(requests.is_empty());
}

#[tokio::test]
async fn unrecognized_variant_falls_back_to_vanilla_resolution() {
    let store = MockServer::start().await;
    let upstream = MockServer::start().await;
    mount_store_happy_path(&store).await;
    mount_vanilla_upstream(&upstream).await;

    // "forge" is not a supported variant; the parse falls back to
    // Vanilla and provisioning proceeds against the Mojang manifest.
    let software = Software::parse("forge");
    provisioner(&store, &upstream)
        .create_server(&credential(), "srv", software, VersionSpec::Latest)
        .await
        .expect("provisioned via vanilla fallback");
}

#[tokio::test]
async fn resolution_failure_stops_before_any_binary_upload() {
    let store = MockServer::start().await;
    let upstream = MockServer::start().await;
    mount_store_happy_path(&store).await;

    Mock::given(method("GET"))
        .and(path("/v2/projects/paper/versions/1.21.4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"builds": []})))
        .expect(1)
        .mount(&upstream)
        .await;

    let err = provisioner(&store, &upstream)
        .create_server(
            &credential(),
            "srv",
            Software::Paper,
            VersionSpec::parse("1.21.4"),
        )
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ProvisionError::Resolve(ResolveError::NoBuilds { .. })
    ));
    // The five templated files were written; the binary and scripts
    // were not.
    let puts = recorded_put_paths(&store).await;
    assert_eq!(puts, EXPECTED_UPLOADS[..5]);
}

#[tokio::test]
async fn store_failure_short_circuits_the_remaining_steps() {
    let store = MockServer::start().await;
    let upstream = MockServer::start().await;
    mount_store_happy_path(&store).await;
    mount_vanilla_upstream(&upstream).await;

    // Third templated upload fails; priority beats the happy-path mock.
    Mock::given(method("PUT"))
        .and(path("/repos/octocat/srv/contents/server.properties"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .with_priority(1)
        .mount(&store)
        .await;

    let err = provisioner(&store, &upstream)
        .create_server(&credential(), "srv", Software::Vanilla, VersionSpec::Latest)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ProvisionError::Store(StoreError::Api { status: 500, .. })
    ));
    let puts = recorded_put_paths(&store).await;
    assert_eq!(puts, EXPECTED_UPLOADS[..3]);
    // The resolver was never consulted.
    let upstream_requests = upstream.received_requests().await.expect("recording enabled");
    assert!(upstream_requests.is_empty());
}

// ── set_running ──────────────────────────────────────────────────────────

#[tokio::test]
async fn set_running_replaces_the_flag_and_preserves_user_keys() {
    let store = MockServer::start().await;
    let upstream = MockServer::start().await;

    let current = "START=false\nVERSION=1.21.4\nRCON_PASSWORD=hunter2\n";
    let next = "START=true\nVERSION=1.21.4\nRCON_PASSWORD=hunter2\n";

    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"login": "octocat"})),
        )
        .expect(1)
        .mount(&store)
        .await;
    // Read once for the transform, once for the upsert's digest guard.
    Mock::given(method("GET"))
        .and(path("/repos/octocat/srv/contents/.env"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "content": BASE64.encode(current),
            "sha": "env-digest-1"
        })))
        .expect(2)
        .mount(&store)
        .await;
    Mock::given(method("PUT"))
        .and(path("/repos/octocat/srv/contents/.env"))
        .and(body_json(serde_json::json!({
            "message": "Start server: set START=true",
            "content": BASE64.encode(next),
            "sha": "env-digest-1"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .expect(1)
        .mount(&store)
        .await;

    provisioner(&store, &upstream)
        .set_running(&credential(), "srv", true)
        .await
        .expect("started");
}

#[tokio::test]
async fn set_running_seeds_a_missing_state_file() {
    let store = MockServer::start().await;
    let upstream = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"login": "octocat"})),
        )
        .expect(1)
        .mount(&store)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/octocat/srv/contents/.env"))
        .respond_with(ResponseTemplate::new(404))
        .expect(2)
        .mount(&store)
        .await;
    Mock::given(method("PUT"))
        .and(path("/repos/octocat/srv/contents/.env"))
        .and(body_json(serde_json::json!({
            "message": "Stop server: set START=false",
            "content": BASE64.encode("START=false\n")
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({"ok": true})))
        .expect(1)
        .mount(&store)
        .await;

    provisioner(&store, &upstream)
        .set_running(&credential(), "srv", false)
        .await
        .expect("seeded state file");
}

#[tokio::test]
async fn set_running_surfaces_a_write_conflict_without_retrying() {
    let store = MockServer::start().await;
    let upstream = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"login": "octocat"})),
        )
        .mount(&store)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/octocat/srv/contents/.env"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "content": BASE64.encode("START=false\n"),
            "sha": "stale"
        })))
        .mount(&store)
        .await;
    Mock::given(method("PUT"))
        .and(path("/repos/octocat/srv/contents/.env"))
        .respond_with(ResponseTemplate::new(409).set_body_string(".env is at another digest"))
        .expect(1)
        .mount(&store)
        .await;

    let err = provisioner(&store, &upstream)
        .set_running(&credential(), "srv", true)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ProvisionError::Store(StoreError::WriteConflict { .. })
    ));
}
