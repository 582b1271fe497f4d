use std::process::ExitCode;

use clap::{Parser, Subcommand};
use cobble_cli::{run_create, run_set_running, CreateArgs, ToggleArgs};
use tracing_subscriber::EnvFilter;

/// Provision hosted game-server repositories and toggle their state.
#[derive(Parser, Debug)]
#[command(name = "cobble", version, about)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a server repository and populate it end to end.
    Create(CreateArgs),
    /// Set the hosted START flag to true.
    Start(ToggleArgs),
    /// Set the hosted START flag to false.
    Stop(ToggleArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match &cli.command {
        Commands::Create(args) => run_create(args).await,
        Commands::Start(args) => run_set_running(args, true).await,
        Commands::Stop(args) => run_set_running(args, false).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
