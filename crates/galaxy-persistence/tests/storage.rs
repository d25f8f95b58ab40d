//! End-to-end tests for file-backed storage.

use std::fs;

use galaxy_model::{Mode, Table};
use galaxy_persistence::{FileStore, KeyValueStore, LocalStore, PROGRESS_KEY};
use proptest::prelude::*;
use tempfile::tempdir;

fn table(n: u32) -> Table {
    Table::new(n).unwrap()
}

#[test]
fn best_score_survives_restart() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("storage.json");

    let mut store = LocalStore::open(FileStore::open(&path));
    assert!(store.record_score(table(5), 90).unwrap());
    assert!(!store.record_score(table(5), 40).unwrap());
    store.save().unwrap();
    drop(store);

    let store = LocalStore::open(FileStore::open(&path));
    assert_eq!(store.progress().best(table(5)), 90);
    assert!(store.progress().is_mastered(table(5)));
    assert_eq!(store.progress().best(table(6)), 0);
}

#[test]
fn repeated_update_is_idempotent() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("storage.json");

    let mut store = LocalStore::open(FileStore::open(&path));
    store.record_score(table(3), 70).unwrap();
    let first = fs::read_to_string(&path).unwrap();
    store.record_score(table(3), 70).unwrap();
    let second = fs::read_to_string(&path).unwrap();

    assert_eq!(first, second);
    assert_eq!(store.progress().best(table(3)), 70);
}

#[test]
fn malformed_progress_loads_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("storage.json");
    fs::write(&path, r#"{"progress": "{oops", "hint_seen_explore": "true"}"#).unwrap();

    let store = LocalStore::open(FileStore::open(&path));
    assert!(store.progress().is_empty());
    assert!(store.hint_seen(Mode::Explore));
}

#[test]
fn dismissed_hints_persist() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("storage.json");

    let mut store = LocalStore::open(FileStore::open(&path));
    store.dismiss_hint(Mode::FingerMethod).unwrap();
    drop(store);

    let store = LocalStore::open(FileStore::open(&path));
    assert!(store.hint_seen(Mode::FingerMethod));
    assert!(!store.hint_seen(Mode::Patterns));
}

#[test]
fn unwritable_location_keeps_memory_state() {
    let dir = tempdir().unwrap();
    // A regular file where the parent directory should be.
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "").unwrap();
    let path = blocker.join("storage.json");

    let mut store = LocalStore::open(FileStore::open(&path));
    assert!(store.record_score(table(8), 60).is_err());
    assert_eq!(store.progress().best(table(8)), 60);
    assert!(store.backend().get(PROGRESS_KEY).is_some());
}

proptest! {
    #[test]
    fn best_is_max_of_recorded(scores in proptest::collection::vec(0u32..=10, 1..20)) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.json");
        let mut store = LocalStore::open(FileStore::open(&path));
        for s in &scores {
            store.record_score(table(4), s * 10).unwrap();
        }
        let expected = scores.iter().max().copied().unwrap_or(0) * 10;
        prop_assert_eq!(store.progress().best(table(4)), expected);

        let reopened = LocalStore::open(FileStore::open(&path));
        prop_assert_eq!(reopened.progress().best(table(4)), expected);
    }
}
