//! Domain ports defining the edges of the hexagon.
//!
//! Ports describe how the domain expects to interact with driven adapters.
//! The storage port exposes strongly typed errors so adapters map their
//! failures into predictable variants instead of leaking I/O details.

use async_trait::async_trait;
use thiserror::Error;

use super::{ProfileRecord, User, UserId};

/// Errors surfaced by profile storage adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record exists for the requested identifier.
    #[error("no stored profile for {id}")]
    NotFound { id: String },
    /// A record exists but its bytes do not parse into the expected shape.
    #[error("stored profile {id} is corrupt: {message}")]
    Corrupt { id: String, message: String },
    /// The storage backend failed.
    #[error("profile storage failed: {message}")]
    Io { message: String },
}

impl StoreError {
    /// Helper for missing records.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Helper for undecodable records.
    pub fn corrupt(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Corrupt {
            id: id.into(),
            message: message.into(),
        }
    }

    /// Helper for backend failures.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }
}

/// Port for reading, writing, and enumerating stored profiles.
///
/// Implementations must replace records atomically on `put`: a reader
/// concurrent with a writer observes either the old or the new record,
/// never a partial one.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Write the canonical encoding of `user`, replacing any existing record
    /// with the same identifier.
    async fn put(&self, user: &User) -> Result<(), StoreError>;

    /// Read and decode the typed record for `id`.
    async fn get(&self, id: &UserId) -> Result<User, StoreError>;

    /// Read the raw record for `id` without full-schema validation.
    async fn get_raw(&self, id: &UserId) -> Result<ProfileRecord, StoreError>;

    /// Remove the record for `id`.
    async fn delete(&self, id: &UserId) -> Result<(), StoreError>;

    /// Enumerate the identifiers of every stored record, in no particular
    /// order.
    async fn list_ids(&self) -> Result<Vec<String>, StoreError>;
}
