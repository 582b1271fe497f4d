//! # Provisioned Repository Layout
//!
//! The fixed file set of a server repository, and the templates that
//! fill it. Template substitution is pure string interpolation of the
//! server name, software variant, and requested version — no external
//! state.
//!
//! The paths here are a contract with everything that consumes a
//! provisioned repository (the CI workflow, the launch scripts, the
//! state toggle), not an internal detail.

use cobble_core::{ServerName, Software, VersionSpec};

/// Repository-relative path of the README.
pub const README_PATH: &str = "README.md";
/// Path of the EULA agreement flag file.
pub const EULA_PATH: &str = "eula.txt";
/// Path of the server configuration file.
pub const SERVER_PROPERTIES_PATH: &str = "server.properties";
/// Path of the environment-state file carrying the `START` flag.
pub const ENV_PATH: &str = ".env";
/// Path of the CI descriptor.
pub const WORKFLOW_PATH: &str = ".github/workflows/setup.yml";
/// Fixed filename the binary artifact is stored under, regardless of
/// upstream's suggested name.
pub const SERVER_JAR_PATH: &str = "server.jar";
/// Path of the POSIX launch script.
pub const START_SH_PATH: &str = "start.sh";
/// Path of the Windows launch script.
pub const START_BAT_PATH: &str = "start.bat";

/// POSIX launch script. Parameterized only by the fixed binary filename.
pub const START_SH: &str = "#!/usr/bin/env bash\njava -Xmx4096M -Xms4096M -jar server.jar nogui\n";
/// Windows launch script.
pub const START_BAT: &str = "@echo off\njava -Xmx4096M -Xms4096M -jar server.jar nogui\n";

/// Description attached to the repository on creation.
pub fn repository_description(
    name: &ServerName,
    software: Software,
    version: &VersionSpec,
) -> String {
    format!("Minecraft server {name} ({software} {version})")
}

/// The templated text files seeded into a fresh repository, in upsert
/// order. The `.env` seed carries `START=false`: a freshly provisioned
/// server is stopped.
pub fn templated_files(
    name: &ServerName,
    software: Software,
    version: &VersionSpec,
) -> Vec<(&'static str, String)> {
    vec![
        (
            README_PATH,
            format!("# {name}\n\nSoftware: {software}\n\nVersion: {version}\n"),
        ),
        (EULA_PATH, "eula=true\n".to_string()),
        (
            SERVER_PROPERTIES_PATH,
            format!("motd={name}\nmax-players=20\n"),
        ),
        (
            ENV_PATH,
            format!("START=false\nVERSION={version}\nSOFTWARE={software}\n"),
        ),
        (WORKFLOW_PATH, workflow(software, version)),
    ]
}

fn workflow(software: Software, version: &VersionSpec) -> String {
    format!(
        r#"name: Setup Server

on: [push]

jobs:
  build:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
      - name: Show config
        run: |
          echo "SOFTWARE={software}"
          echo "VERSION={version}"
          grep -E '^(START|VERSION|SOFTWARE)=' .env || true
"#
    )
}
