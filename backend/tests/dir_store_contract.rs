//! Contract tests for the directory-backed profile store.
//!
//! Each test opens a `DirProfileStore` over a disposable directory and
//! exercises the storage port directly: round-trips, error mapping for
//! absent and corrupt records, and the filtering rules for non-record
//! entries in the storage root.

use padron::domain::ports::{ProfileStore, StoreError};
use padron::domain::{Address, PoliticalParty, ProfileField, User, UserId};
use padron::outbound::persistence::DirProfileStore;
use padron::test_support::cap_fs::{create_directory, directory_entries, write_file};
use padron::test_support::storage::temp_profile_store;
use rstest::rstest;

fn resident(id: &str, party: Option<&str>) -> User {
    User::try_new(
        UserId::new(id).expect("valid identifier"),
        "Javier",
        "Rivas",
        Address::try_new("Limón", "Limón", "Río Blanco").expect("valid address"),
        vec![84_139_034, 27_585_124],
        party.map(|name| PoliticalParty::new(name).expect("valid party")),
    )
    .expect("valid profile")
}

#[rstest]
fn round_trips_profiles_through_the_filesystem() {
    actix_rt::System::new().block_on(async move {
        let (root, store) = temp_profile_store();
        let stored = resident("702390421", Some("Avance"));

        store.put(&stored).await.expect("store profile");
        let fetched = store.get(stored.id()).await.expect("fetch profile");
        assert_eq!(fetched, stored);

        let raw = store.get_raw(stored.id()).await.expect("fetch raw record");
        assert_eq!(
            raw.field(ProfileField::Id).and_then(|v| v.as_str()),
            Some("702390421")
        );

        // A fresh handle over the same root sees the persisted record.
        let reopened = DirProfileStore::open(root.path()).expect("reopen storage root");
        let fetched = reopened.get(stored.id()).await.expect("fetch after reopen");
        assert_eq!(fetched, stored);
    });
}

#[rstest]
fn ignores_entries_that_are_not_profile_records() {
    actix_rt::System::new().block_on(async move {
        let (root, store) = temp_profile_store();
        store
            .put(&resident("702390421", None))
            .await
            .expect("store profile");

        write_file(&root.path().join("profileTemplate.json"), b"{}").expect("write template");
        write_file(&root.path().join("profileTemplate.xml"), b"<Users/>").expect("write template");
        write_file(&root.path().join(".hidden.json"), b"{}").expect("write dot file");
        write_file(&root.path().join("notes.txt"), b"scratch").expect("write stray file");
        create_directory(&root.path().join("nested")).expect("create subdirectory");

        let ids = store.list_ids().await.expect("list identifiers");
        assert_eq!(ids, vec!["702390421".to_string()]);
    });
}

#[rstest]
fn absent_profiles_report_not_found() {
    actix_rt::System::new().block_on(async move {
        let (_root, store) = temp_profile_store();
        let id = UserId::new("999").expect("valid identifier");

        let fetch = store.get(&id).await.expect_err("nothing stored");
        assert_eq!(fetch, StoreError::not_found("999"));

        let raw = store.get_raw(&id).await.expect_err("nothing stored");
        assert_eq!(raw, StoreError::not_found("999"));

        let removal = store.delete(&id).await.expect_err("nothing stored");
        assert_eq!(removal, StoreError::not_found("999"));
    });
}

#[rstest]
#[case::unparseable(b"{ not json".as_slice())]
#[case::wrong_shape(b"[1, 2, 3]".as_slice())]
fn undecodable_records_surface_as_corrupt(#[case] bytes: &[u8]) {
    actix_rt::System::new().block_on(async move {
        let (root, store) = temp_profile_store();
        write_file(&root.path().join("666.json"), bytes).expect("plant bad record");

        let id = UserId::new("666").expect("valid identifier");
        let err = store.get_raw(&id).await.expect_err("record is unusable");
        assert!(
            matches!(err, StoreError::Corrupt { ref id, .. } if id == "666"),
            "unexpected error: {err:?}"
        );
    });
}

#[rstest]
fn schema_violations_surface_as_corrupt_on_typed_reads() {
    actix_rt::System::new().block_on(async move {
        let (root, store) = temp_profile_store();
        // A well-formed object that is not a valid profile document.
        write_file(&root.path().join("666.json"), b"{\"ID\": \"666\"}").expect("plant bad record");

        let id = UserId::new("666").expect("valid identifier");
        let err = store.get(&id).await.expect_err("record is unusable");
        assert!(
            matches!(err, StoreError::Corrupt { ref id, .. } if id == "666"),
            "unexpected error: {err:?}"
        );

        // The raw view still works; only the typed decode fails.
        store.get_raw(&id).await.expect("raw record is readable");
    });
}

#[rstest]
fn replacement_is_atomic_and_leaves_no_temp_files() {
    actix_rt::System::new().block_on(async move {
        let (root, store) = temp_profile_store();
        store
            .put(&resident("702390421", Some("Avance")))
            .await
            .expect("store first version");
        store
            .put(&resident("702390421", Some("Verde")))
            .await
            .expect("store replacement");

        let entries = directory_entries(root.path()).expect("list storage root");
        assert_eq!(entries, vec!["702390421.json".to_string()]);

        let id = UserId::new("702390421").expect("valid identifier");
        let fetched = store.get(&id).await.expect("fetch replacement");
        assert_eq!(
            fetched.political_party().map(AsRef::as_ref),
            Some("Verde")
        );
    });
}

#[rstest]
fn delete_removes_the_backing_file() {
    actix_rt::System::new().block_on(async move {
        let (root, store) = temp_profile_store();
        let stored = resident("702390421", None);
        store.put(&stored).await.expect("store profile");

        store.delete(stored.id()).await.expect("delete profile");

        let entries = directory_entries(root.path()).expect("list storage root");
        assert!(entries.is_empty(), "unexpected entries: {entries:?}");
        let err = store.get(stored.id()).await.expect_err("record removed");
        assert_eq!(err, StoreError::not_found("702390421"));
    });
}
