use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for a product.
///
/// Wraps a random 128-bit UUID. An identifier is generated once when a
/// product is created and never reassigned afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(Uuid);

impl ProductId {
    /// Generates a new random product ID.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a product ID from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for ProductId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<ProductId> for Uuid {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

/// Error returned when a string is not a valid product ID.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid product ID: {input}")]
pub struct ProductIdParseError {
    input: String,
}

impl ProductIdParseError {
    /// Returns the text that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for ProductId {
    type Err = ProductIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| ProductIdParseError {
                input: s.to_string(),
            })
    }
}

/// Storage revision of a product, used for optimistic concurrency control.
///
/// A product that has never been stored is at version 0. Every write
/// through a repository advances the version by one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Version(u64);

impl Version {
    /// Creates a version from a raw value.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the version (0) of a product that has not been stored yet.
    pub fn initial() -> Self {
        Self(0)
    }

    /// Returns the version (1) assigned by the first write.
    pub fn first() -> Self {
        Self(1)
    }

    /// Returns the next version.
    pub fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Returns the raw version value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Version {
    fn from(value: u64) -> Self {
        Self(value)
    }
}
