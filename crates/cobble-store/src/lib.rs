//! # cobble-store — Remote Content Store Client
//!
//! Generic operations against the hosted-repository content API (GitHub's
//! REST contents endpoints): identity lookup, repository creation with
//! name-collision recovery, object reads with digest, and digest-guarded
//! upserts.
//!
//! ## Optimistic Concurrency
//!
//! The store — not this client — is the authority for conflict detection.
//! Every write first reads the target path's current digest and attaches
//! it to the `PUT`; a write whose digest has gone stale is rejected by
//! the store with a conflict status, surfaced here as
//! [`StoreError::WriteConflict`] and never retried.
//!
//! ## Transport Encoding
//!
//! The contents API carries payloads as base64. Callers of this crate
//! deal in raw bytes; encoding and decoding stay behind
//! [`ContentStoreClient::read`] and [`ContentStoreClient::upsert`].

pub mod client;
pub mod config;
pub mod error;

pub use client::{ContentStoreClient, StoredObject};
pub use config::StoreConfig;
pub use error::StoreError;
