//! # cobble-cli — Command-Line Front End
//!
//! Argument types and subcommand handlers for the `cobble` binary. The
//! core crates take explicit configuration and per-call credentials;
//! this crate is the one place ambient process state (the
//! `GITHUB_TOKEN` fallback) is consulted.

use anyhow::Context;
use clap::Args;
use cobble_artifact::{ArtifactResolver, ResolverConfig};
use cobble_core::{Credential, Software, VersionSpec};
use cobble_provision::Provisioner;
use cobble_store::config::DEFAULT_API_BASE;
use cobble_store::{ContentStoreClient, StoreConfig};

/// Environment variable consulted when `--token` is not given.
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Connection flags shared by every subcommand.
#[derive(Args, Debug)]
pub struct ConnectionArgs {
    /// Bearer token for the content store. Falls back to $GITHUB_TOKEN.
    #[arg(long)]
    pub token: Option<String>,

    /// Content store API base URL.
    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_base: String,
}

impl ConnectionArgs {
    /// Resolve the credential from the flag or the environment fallback.
    pub fn credential(&self) -> anyhow::Result<Credential> {
        let raw = match &self.token {
            Some(token) => token.clone(),
            None => std::env::var(TOKEN_ENV_VAR)
                .with_context(|| format!("no --token given and {TOKEN_ENV_VAR} is not set"))?,
        };
        Ok(Credential::new(raw)?)
    }

    /// Assemble the orchestrator from the connection flags.
    pub fn provisioner(&self) -> anyhow::Result<Provisioner> {
        let store = ContentStoreClient::new(StoreConfig::new(self.api_base.clone()))?;
        let resolver = ArtifactResolver::new(ResolverConfig::default())?;
        Ok(Provisioner::new(store, resolver))
    }
}

/// Arguments for `cobble create`.
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Server name; becomes the repository name.
    pub name: String,

    /// Software variant: vanilla, paper, or spigot. Unrecognized values
    /// fall back to vanilla.
    #[arg(long, default_value = "vanilla")]
    pub software: String,

    /// Release id, or "latest" (Vanilla only).
    #[arg(long, default_value = "latest")]
    pub version: String,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

/// Arguments for `cobble start` / `cobble stop`.
#[derive(Args, Debug)]
pub struct ToggleArgs {
    /// Server name.
    pub name: String,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

/// Provision a server repository end to end.
pub async fn run_create(args: &CreateArgs) -> anyhow::Result<()> {
    let credential = args.connection.credential()?;
    let provisioner = args.connection.provisioner()?;
    let software = Software::parse(&args.software);
    let version = VersionSpec::parse(&args.version);

    let repo = provisioner
        .create_server(&credential, &args.name, software, version.clone())
        .await?;
    println!("Provisioned {repo} ({software} {version})");
    Ok(())
}

/// Flip the hosted `START=` flag.
pub async fn run_set_running(args: &ToggleArgs, running: bool) -> anyhow::Result<()> {
    let credential = args.connection.credential()?;
    let provisioner = args.connection.provisioner()?;

    provisioner
        .set_running(&credential, &args.name, running)
        .await?;
    if running {
        println!("Started {} (START=true)", args.name);
    } else {
        println!("Stopped {} (START=false)", args.name);
    }
    Ok(())
}
