//! Profile persistence adapters.
//!
//! This module provides concrete implementations of the [`ProfileStore`]
//! port: a flat-file store that keeps one JSON document per profile under a
//! capability-scoped directory, and an in-memory store for tests and
//! ephemeral deployments.
//!
//! # Architecture
//!
//! The persistence layer follows these principles:
//!
//! - **Thin adapters**: Store implementations only translate between stored
//!   JSON documents and domain types. No business logic resides here.
//! - **Capability-scoped I/O**: The flat-file store holds a [`cap_std::fs::Dir`]
//!   handle, so it can never read or write outside its storage directory.
//! - **Strongly typed errors**: All I/O and decode failures are mapped to
//!   [`StoreError`] variants.
//!
//! # Example
//!
//! ```ignore
//! use padron::outbound::persistence::DirProfileStore;
//!
//! let store = DirProfileStore::open("UserProfiles")?;
//! store.put(&user).await?;
//! ```
//!
//! [`ProfileStore`]: crate::domain::ports::ProfileStore
//! [`StoreError`]: crate::domain::ports::StoreError

mod dir_profile_store;
mod memory_profile_store;

pub use dir_profile_store::DirProfileStore;
pub use memory_profile_store::MemoryProfileStore;
