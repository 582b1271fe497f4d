//! # cobble-artifact — Artifact Resolver
//!
//! Maps `(software, version)` to a downloadable server binary plus a
//! suggested filename. One resolution strategy per software variant:
//!
//! - **Vanilla** — the Mojang piston-meta version manifest, with
//!   `latest` expanded to the manifest's current release id before any
//!   download.
//! - **Paper** — the PaperMC builds API, selecting the highest build
//!   number for a concrete version.
//! - **Spigot** — delegates to the Paper strategy; no native Spigot
//!   download API exists.
//!
//! ## Error Policy
//!
//! Any missing field — no matching version id, empty build list, absent
//! server download URL — fails with a resolution error naming the lookup
//! stage. There is no silent defaulting to a different version, and no
//! retries: the caller decides whether re-running the whole provisioning
//! operation is worthwhile.

pub mod config;
pub mod error;
pub mod paper;
pub mod resolver;
pub mod vanilla;

pub use config::ResolverConfig;
pub use error::ResolveError;
pub use resolver::{ArtifactResolver, ResolvedArtifact};
