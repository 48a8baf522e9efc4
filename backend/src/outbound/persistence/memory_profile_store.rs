//! In-memory `ProfileStore` implementation.
//!
//! This adapter keeps canonical JSON documents in a mutex-guarded map. It
//! backs HTTP-level tests and ephemeral deployments where durability is not
//! required; production assemblies use
//! [`DirProfileStore`](super::DirProfileStore).

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::ports::{ProfileStore, StoreError};
use crate::domain::{ProfileRecord, User, UserId};

/// Profile store holding canonical JSON documents in process memory.
#[derive(Debug, Default)]
pub struct MemoryProfileStore {
    records: Mutex<HashMap<String, Value>>,
}

impl MemoryProfileStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, Value>>, StoreError> {
        self.records
            .lock()
            .map_err(|_| StoreError::io("profile map lock poisoned"))
    }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn put(&self, user: &User) -> Result<(), StoreError> {
        let document = serde_json::to_value(user)
            .map_err(|err| StoreError::io(format!("encode {}: {err}", user.id())))?;
        self.lock()?.insert(user.id().to_string(), document);
        Ok(())
    }

    async fn get(&self, id: &UserId) -> Result<User, StoreError> {
        let record = self.get_raw(id).await?;
        serde_json::from_value(record.into_value())
            .map_err(|err| StoreError::corrupt(id.as_ref(), err.to_string()))
    }

    async fn get_raw(&self, id: &UserId) -> Result<ProfileRecord, StoreError> {
        let guard = self.lock()?;
        let document = guard
            .get(id.as_ref())
            .ok_or_else(|| StoreError::not_found(id.as_ref()))?;
        match document {
            Value::Object(fields) => Ok(ProfileRecord::new(fields.clone())),
            _ => Err(StoreError::corrupt(
                id.as_ref(),
                "stored value is not a JSON object",
            )),
        }
    }

    async fn delete(&self, id: &UserId) -> Result<(), StoreError> {
        self.lock()?
            .remove(id.as_ref())
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found(id.as_ref()))
    }

    async fn list_ids(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.lock()?.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    //! Behavioural coverage mirroring the flat-file contract tests.

    use actix_rt::System;
    use rstest::{fixture, rstest};
    use serde_json::Value;

    use super::*;
    use crate::domain::{Address, PoliticalParty, UserValidationError};

    #[fixture]
    fn resident() -> User {
        build_user("702390421", Some("Avance")).expect("valid fixture")
    }

    fn build_user(id: &str, party: Option<&str>) -> Result<User, UserValidationError> {
        let party = party.map(PoliticalParty::new).transpose()?;
        User::try_new(
            UserId::new(id)?,
            "Javier",
            "Rivas",
            Address::try_new("Limón", "Limón", "Limón")?,
            vec![84_139_034, 27_585_124],
            party,
        )
    }

    #[rstest]
    fn round_trips_a_stored_profile(resident: User) {
        let store = MemoryProfileStore::new();

        System::new().block_on(async move {
            store.put(&resident).await.expect("put succeeds");
            let loaded = store.get(resident.id()).await.expect("get succeeds");
            assert_eq!(loaded, resident);
        });
    }

    #[rstest]
    fn raw_record_exposes_canonical_field_names(resident: User) {
        let store = MemoryProfileStore::new();

        System::new().block_on(async move {
            store.put(&resident).await.expect("put succeeds");
            let record = store.get_raw(resident.id()).await.expect("raw succeeds");
            assert_eq!(
                record.fields().get("ID"),
                Some(&Value::String("702390421".into()))
            );
            assert_eq!(
                record.fields().get("politicalParty"),
                Some(&Value::String("Avance".into()))
            );
        });
    }

    #[rstest]
    fn absent_profiles_report_not_found(resident: User) {
        let store = MemoryProfileStore::new();

        System::new().block_on(async move {
            let id = resident.id().clone();
            assert!(matches!(
                store.get(&id).await,
                Err(StoreError::NotFound { .. })
            ));
            assert!(matches!(
                store.get_raw(&id).await,
                Err(StoreError::NotFound { .. })
            ));
            assert!(matches!(
                store.delete(&id).await,
                Err(StoreError::NotFound { .. })
            ));
        });
    }

    #[rstest]
    fn put_replaces_the_existing_record(resident: User) {
        let store = MemoryProfileStore::new();
        let updated = build_user("702390421", None).expect("valid fixture");

        System::new().block_on(async move {
            store.put(&resident).await.expect("first put");
            store.put(&updated).await.expect("second put");

            let loaded = store.get(resident.id()).await.expect("get succeeds");
            assert_eq!(loaded.political_party(), None);
            let ids = store.list_ids().await.expect("list succeeds");
            assert_eq!(ids, vec!["702390421".to_owned()]);
        });
    }

    #[rstest]
    fn delete_removes_the_record(resident: User) {
        let store = MemoryProfileStore::new();

        System::new().block_on(async move {
            store.put(&resident).await.expect("put succeeds");
            store.delete(resident.id()).await.expect("delete succeeds");
            assert!(store.list_ids().await.expect("list succeeds").is_empty());
        });
    }
}
