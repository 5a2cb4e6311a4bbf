use roster::api::RosterApi;
use roster::error::{PersistenceError, RosterError};
use roster::model::StudentForm;
use roster::store::fs::FileStore;
use roster::store::{BlobStore, DEFAULT_KEY};
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FileStore) {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("data"));
    (dir, store)
}

fn john() -> StudentForm {
    StudentForm::new("John", "123", "a@b.co", "1234567890")
}

#[test]
fn test_file_store_basic_io() {
    let (_dir, mut store) = setup();

    // 1. Missing
    assert_eq!(store.get(DEFAULT_KEY).unwrap(), None);

    // 2. Write creates the directory
    store.set(DEFAULT_KEY, "[]").unwrap();
    assert!(store.blob_path(DEFAULT_KEY).exists());

    // 3. Read back
    assert_eq!(store.get(DEFAULT_KEY).unwrap().as_deref(), Some("[]"));
}

#[test]
fn test_file_store_atomic_write_artifacts() {
    let (_dir, mut store) = setup();
    store.set(DEFAULT_KEY, "[1]").unwrap();
    store.set(DEFAULT_KEY, "[2]").unwrap();

    let entries = fs::read_dir(store.root()).unwrap();
    for entry in entries {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
    assert_eq!(store.get(DEFAULT_KEY).unwrap().as_deref(), Some("[2]"));
}

#[test]
fn test_file_store_quota_keeps_previous_blob() {
    let (_dir, store) = setup();
    let mut store = store.with_quota(16);
    store.set(DEFAULT_KEY, "[]").unwrap();

    let err = store.set(DEFAULT_KEY, &"x".repeat(17)).unwrap_err();
    assert!(matches!(
        err,
        PersistenceError::QuotaExceeded { size: 17, limit: 16 }
    ));
    assert_eq!(store.get(DEFAULT_KEY).unwrap().as_deref(), Some("[]"));
}

#[test]
fn test_file_store_rejects_path_keys() {
    let (_dir, mut store) = setup();
    assert!(matches!(
        store.set("../outside", "[]"),
        Err(PersistenceError::InvalidKey(_))
    ));
}

#[test]
fn test_roster_round_trip_through_disk() {
    let (dir, store) = setup();
    let mut api = RosterApi::open(store, DEFAULT_KEY);
    api.add(&john()).unwrap();

    let reopened = RosterApi::open(FileStore::new(dir.path().join("data")), DEFAULT_KEY);
    assert_eq!(reopened.students().len(), 1);
    assert_eq!(reopened.students()[0].name, "John");

    let raw = fs::read_to_string(reopened.store().blob_path(DEFAULT_KEY)).unwrap();
    assert!(raw.contains("\"studentId\":\"123\""));
}

#[test]
fn test_corrupt_file_loads_empty() {
    let (_dir, mut store) = setup();
    store.set(DEFAULT_KEY, "not-json").unwrap();
    let api = RosterApi::open(store, DEFAULT_KEY);
    assert!(api.is_empty());
}

#[test]
fn test_quota_failure_is_reported_and_not_committed() {
    let (_dir, store) = setup();
    let mut api = RosterApi::open(store.with_quota(10), DEFAULT_KEY);

    let err = api.add(&john()).unwrap_err();
    assert!(matches!(
        err,
        RosterError::Persistence(PersistenceError::QuotaExceeded { .. })
    ));
    assert!(api.is_empty());
    assert!(api.load().is_empty());
}
