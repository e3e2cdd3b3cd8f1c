//! Integration tests for the file-backed favorites collection.

use titandex::error::Error;
use titandex::favorites::{FAVORITES_KEY, FavoritesStore, FileStorage, KvStorage};
use titandex::state::{Character, CharacterId};

fn character(id: u64, name: &str) -> Character {
    Character {
        id: CharacterId(id),
        name: name.to_string(),
        ..Character::default()
    }
}

#[test]
/// What: Add, duplicate add, and remove against a real file.
///
/// Inputs:
/// - Empty temp directory; add Eren, add Eren again, remove id 1
///
/// Output:
/// - [Eren], then `AlreadyExists` with one entry kept, then an empty list on disk.
fn add_duplicate_remove_on_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FavoritesStore::new(FileStorage::new(dir.path()));
    assert!(store.load().is_empty());

    store.add(character(1, "Eren Yeager")).expect("add");
    assert_eq!(store.load(), vec![character(1, "Eren Yeager")]);

    let err = store
        .add(character(1, "Eren Yeager"))
        .expect_err("duplicate");
    assert!(matches!(err, Error::AlreadyExists { id: CharacterId(1), .. }));
    assert_eq!(store.load().len(), 1);

    store.remove(CharacterId(1)).expect("remove");
    assert!(store.load().is_empty());
    let raw = std::fs::read_to_string(dir.path().join("favorites.json")).expect("read");
    let parsed: serde_json::Value = serde_json::from_str(&raw).expect("json");
    assert_eq!(parsed, serde_json::json!([]));
}

#[test]
/// What: A second store instance over the same directory sees earlier writes.
fn collection_survives_reopen() {
    let dir = tempfile::tempdir().expect("tempdir");
    {
        let store = FavoritesStore::new(FileStorage::new(dir.path()));
        store.add(character(1, "Eren Yeager")).expect("add");
        store.add(character(2, "Mikasa Ackerman")).expect("add");
        store.remove(CharacterId(99)).expect("absent removal is a no-op");
    }
    let reopened = FavoritesStore::new(FileStorage::new(dir.path()));
    let names: Vec<String> = reopened.load().into_iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["Eren Yeager", "Mikasa Ackerman"]);
    assert!(reopened.contains(CharacterId(2)));
    assert!(!reopened.contains(CharacterId(3)));
}

#[test]
/// What: Corrupt or invalid blobs load as empty or filtered, and the next write repairs them.
fn corrupt_blob_is_replaced_on_write() {
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = FileStorage::new(dir.path());
    storage.set_item(FAVORITES_KEY, "{not json").expect("seed");
    let store = FavoritesStore::new(storage);
    assert!(store.load().is_empty());

    store
        .storage()
        .set_item(FAVORITES_KEY, r#"[{"id":null,"name":"Ghost"},{"id":3,"name":"Armin Arlert"}]"#)
        .expect("seed");
    assert_eq!(store.load(), vec![character(3, "Armin Arlert")]);

    store.add(character(4, "Levi Ackerman")).expect("add");
    let raw = store
        .storage()
        .get_item(FAVORITES_KEY)
        .expect("read")
        .expect("present");
    assert!(!raw.contains("Ghost"));
}
