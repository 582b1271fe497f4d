//! # Identity Newtypes
//!
//! Domain-primitive newtypes for the values that flow through every
//! cobble operation. Each is a distinct type — you cannot pass a raw
//! token string where a [`ServerName`] is expected.
//!
//! ## Validation
//!
//! [`ServerName`] and [`Credential`] validate at construction time. The
//! content store enforces everything beyond non-emptiness (name
//! uniqueness within an owner, allowed repository characters): it is the
//! authority, and cobble does not second-guess it.

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::error::ValidationError;

/// The name of a hosted server, doubling as the repository name.
///
/// Invariant: non-empty after trimming. The stored value is the trimmed
/// input — surrounding whitespace never reaches a repository URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ServerName(String);

impl ServerName {
    /// Create a server name, rejecting empty or whitespace-only input.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidServerName`] if the trimmed
    /// input is empty.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::InvalidServerName(raw));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Access the name string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ServerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ServerName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<'de> Deserialize<'de> for ServerName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

/// An opaque bearer token authorizing content-store operations for one
/// identity.
///
/// Supplied per call and never persisted by cobble. The backing storage
/// is zeroed on drop, and the `Debug` representation is redacted so the
/// token cannot leak through logs.
#[derive(Clone)]
pub struct Credential(Zeroizing<String>);

impl Credential {
    /// Wrap a bearer token, rejecting empty input.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyCredential`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ValidationError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ValidationError::EmptyCredential);
        }
        Ok(Self(Zeroizing::new(token)))
    }

    /// Access the raw token for constructing an `Authorization` header.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// A reference to one repository in the content store.
///
/// `owner` is resolved from the credential via the identity lookup;
/// `name` equals the requested server name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoRef {
    /// Login of the repository owner.
    pub owner: String,
    /// Repository name.
    pub name: String,
}

impl RepoRef {
    /// Construct a reference from an owner login and repository name.
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for RepoRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
