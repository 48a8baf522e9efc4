//! Flat-file `ProfileStore` implementation backed by a capability-scoped
//! directory.
//!
//! This adapter keeps one pretty-printed JSON document per profile, named
//! `<ID>.json`, inside a single [`Dir`] handle. Writes land in a dot-prefixed
//! temporary file that is renamed over the final record, so concurrent
//! readers never observe a partially written profile.

use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use serde_json::Value;
use tracing::warn;
use uuid::Uuid;

use crate::domain::ports::{ProfileStore, StoreError};
use crate::domain::{ProfileRecord, User, UserId};

/// Directory entries reserved for operator-managed templates, never listed
/// or served as profiles.
const RESERVED_ENTRIES: [&str; 2] = ["profileTemplate.json", "profileTemplate.xml"];

/// Flat-file profile store rooted at a single directory.
#[derive(Clone)]
pub struct DirProfileStore {
    dir: Arc<Dir>,
}

impl DirProfileStore {
    /// Open `root` as the storage directory, creating it when absent.
    ///
    /// # Errors
    /// Returns [`StoreError::Io`] when the directory cannot be created or
    /// opened.
    pub fn open(root: impl AsRef<Path>) -> Result<Self, StoreError> {
        let root = root.as_ref();
        Dir::create_ambient_dir_all(root, ambient_authority())
            .map_err(|err| StoreError::io(format!("create {}: {err}", root.display())))?;
        let dir = Dir::open_ambient_dir(root, ambient_authority())
            .map_err(|err| StoreError::io(format!("open {}: {err}", root.display())))?;
        Ok(Self::from_dir(dir))
    }

    /// Wrap an already-open directory handle.
    #[must_use]
    pub fn from_dir(dir: Dir) -> Self {
        Self { dir: Arc::new(dir) }
    }

    /// Run a synchronous directory operation on the blocking thread pool.
    async fn run_blocking<T, F>(&self, op: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(&Dir) -> Result<T, StoreError> + Send + 'static,
    {
        let dir = Arc::clone(&self.dir);
        tokio::task::spawn_blocking(move || op(&dir))
            .await
            .map_err(|err| StoreError::io(format!("storage task failed: {err}")))?
    }
}

/// File name of the record for `id`.
fn record_name(id: &UserId) -> String {
    format!("{id}.json")
}

/// Identifier encoded in a directory entry name, or `None` when the entry is
/// not a profile record.
fn record_id(name: &str) -> Option<&str> {
    if name.starts_with('.') || RESERVED_ENTRIES.contains(&name) {
        return None;
    }
    name.strip_suffix(".json")
}

/// Map a directory enumeration failure to a store error.
fn enumerate_error(err: std::io::Error) -> StoreError {
    StoreError::io(format!("enumerate profiles: {err}"))
}

/// Read and parse the raw JSON document for `id`.
fn read_record(dir: &Dir, id: &UserId) -> Result<Value, StoreError> {
    let file_name = record_name(id);
    let bytes = dir.read(&file_name).map_err(|err| {
        if err.kind() == ErrorKind::NotFound {
            StoreError::not_found(id.as_ref())
        } else {
            StoreError::io(format!("read {file_name}: {err}"))
        }
    })?;
    serde_json::from_slice(&bytes).map_err(|err| StoreError::corrupt(id.as_ref(), err.to_string()))
}

/// Atomically replace the record `file_name` with `bytes`.
fn replace_record(dir: &Dir, file_name: &str, bytes: &[u8]) -> Result<(), StoreError> {
    let temp_name = format!(".{}.tmp", Uuid::new_v4());
    dir.write(&temp_name, bytes)
        .map_err(|err| StoreError::io(format!("write {temp_name}: {err}")))?;
    dir.rename(&temp_name, dir, file_name).map_err(|err| {
        if let Err(cleanup) = dir.remove_file(&temp_name) {
            warn!(temp = %temp_name, error = %cleanup, "orphaned temporary record left behind");
        }
        StoreError::io(format!("rename {temp_name} to {file_name}: {err}"))
    })
}

#[async_trait]
impl ProfileStore for DirProfileStore {
    async fn put(&self, user: &User) -> Result<(), StoreError> {
        let id = user.id().clone();
        let bytes = serde_json::to_vec_pretty(user)
            .map_err(|err| StoreError::io(format!("encode {id}: {err}")))?;
        self.run_blocking(move |dir| replace_record(dir, &record_name(&id), &bytes))
            .await
    }

    async fn get(&self, id: &UserId) -> Result<User, StoreError> {
        let record = self.get_raw(id).await?;
        serde_json::from_value(record.into_value())
            .map_err(|err| StoreError::corrupt(id.as_ref(), err.to_string()))
    }

    async fn get_raw(&self, id: &UserId) -> Result<ProfileRecord, StoreError> {
        let id = id.clone();
        self.run_blocking(move |dir| match read_record(dir, &id)? {
            Value::Object(fields) => Ok(ProfileRecord::new(fields)),
            _ => Err(StoreError::corrupt(
                id.as_ref(),
                "stored value is not a JSON object",
            )),
        })
        .await
    }

    async fn delete(&self, id: &UserId) -> Result<(), StoreError> {
        let id = id.clone();
        self.run_blocking(move |dir| {
            let file_name = record_name(&id);
            dir.remove_file(&file_name).map_err(|err| {
                if err.kind() == ErrorKind::NotFound {
                    StoreError::not_found(id.as_ref())
                } else {
                    StoreError::io(format!("remove {file_name}: {err}"))
                }
            })
        })
        .await
    }

    async fn list_ids(&self) -> Result<Vec<String>, StoreError> {
        self.run_blocking(|dir| {
            let mut ids = Vec::new();
            for entry in dir.entries().map_err(enumerate_error)? {
                let entry = entry.map_err(enumerate_error)?;
                if !entry.file_type().map_err(enumerate_error)?.is_file() {
                    continue;
                }
                let name = entry.file_name();
                let Some(name) = name.to_str() else {
                    continue;
                };
                if let Some(id) = record_id(name) {
                    ids.push(id.to_owned());
                }
            }
            Ok(ids)
        })
        .await
    }
}
