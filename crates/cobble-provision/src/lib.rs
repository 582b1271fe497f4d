//! # cobble-provision — Provisioning Orchestrator & State Toggle
//!
//! Drives end-to-end server creation as an ordered pipeline of fallible
//! steps, each a hard dependency on the previous one succeeding:
//!
//! 1. Validate the server name (before any network call).
//! 2. Ensure the repository exists (creating or reusing it).
//! 3. Upsert the fixed set of templated text files.
//! 4. Resolve and download the binary artifact for the chosen variant.
//! 5. Upload the binary at its fixed filename.
//! 6. Upsert the two launch scripts.
//!
//! A failure at any step aborts the whole operation and surfaces that
//! step's error verbatim. There is no partial rollback: a repository may
//! be left partially populated, and re-running `create_server` converges
//! it — every write is an idempotent upsert.
//!
//! The state toggle ([`Provisioner::set_running`]) is independent of
//! provisioning: it reads the hosted `.env`, applies the minimal
//! `START=` text transform from `cobble-core`, and upserts the result.

pub mod error;
pub mod provisioner;
pub mod templates;

pub use error::ProvisionError;
pub use provisioner::Provisioner;
