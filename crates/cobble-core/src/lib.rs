//! # cobble-core — Foundational Types
//!
//! Domain-primitive newtypes and pure logic shared by every cobble crate:
//! validated identifiers ([`ServerName`], [`Credential`], [`RepoRef`]),
//! the software variant model ([`Software`], [`VersionSpec`],
//! [`ArtifactSpec`]), and the `.env` state-flag transform
//! ([`env::set_start_flag`]).
//!
//! This crate performs no I/O. Everything that talks to a network lives
//! in `cobble-store` and `cobble-artifact`.

pub mod env;
pub mod error;
pub mod identity;
pub mod software;

pub use error::ValidationError;
pub use identity::{Credential, RepoRef, ServerName};
pub use software::{ArtifactSpec, Software, VersionSpec};
