//! # Software Variant Model
//!
//! The software flavor selector driving artifact resolution. Modeled as
//! a closed enum so each variant carries exactly one resolution strategy;
//! adding a variant is a localized change to this module and to the
//! resolver's dispatch.
//!
//! ## Fallback Rule
//!
//! Unrecognized input parses as [`Software::Vanilla`] rather than
//! erroring. This matches the product's historical behavior: a request
//! with a typo'd variant still provisions a working vanilla server.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The software flavor of a provisioned server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Software {
    /// Official Mojang server, resolved via the piston-meta manifest.
    Vanilla,
    /// PaperMC server, resolved via the PaperMC builds API.
    Paper,
    /// Spigot server. No native download API exists, so resolution
    /// delegates to the Paper strategy for compatibility.
    Spigot,
}

impl Software {
    /// Parse a variant selector, case-insensitively.
    ///
    /// `"default"` and anything unrecognized fall back to `Vanilla`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "paper" => Self::Paper,
            "spigot" => Self::Spigot,
            _ => Self::Vanilla,
        }
    }

    /// Canonical display name, as echoed into provisioned files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vanilla => "Vanilla",
            Self::Paper => "Paper",
            Self::Spigot => "Spigot",
        }
    }
}

impl fmt::Display for Software {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A requested server version: either a concrete upstream release id or
/// "latest".
///
/// `Latest` is only meaningful for [`Software::Vanilla`], where it is
/// expanded to the manifest's current release id before any download.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VersionSpec {
    /// The current release, per the Mojang version manifest.
    Latest,
    /// A concrete release id, e.g. `"1.21.4"`.
    Exact(String),
}

impl VersionSpec {
    /// Parse a version selector. Empty input and `"latest"`
    /// (case-insensitive) map to `Latest`.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("latest") {
            Self::Latest
        } else {
            Self::Exact(trimmed.to_string())
        }
    }
}

impl fmt::Display for VersionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latest => f.write_str("latest"),
            Self::Exact(id) => f.write_str(id),
        }
    }
}

/// The pair that drives artifact resolution: which software flavor, at
/// which version.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArtifactSpec {
    /// Software flavor selector.
    pub software: Software,
    /// Requested version.
    pub version: VersionSpec,
}

impl ArtifactSpec {
    /// Build a spec from a software flavor and a version selector.
    pub fn new(software: Software, version: VersionSpec) -> Self {
        Self { software, version }
    }
}
