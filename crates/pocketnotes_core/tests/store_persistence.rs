use pocketnotes_core::{
    JsonFileStorage, MemoryStorage, Note, NotePatch, NoteStore, StorageBackend, StorageError,
    StorageResult, STORAGE_KEY,
};
use tempfile::TempDir;

/// Backend whose every write fails, as when storage quota is exhausted.
struct FailingStorage;

impl StorageBackend for FailingStorage {
    fn load(&self) -> StorageResult<Option<Vec<Note>>> {
        Ok(None)
    }

    fn save(&mut self, _notes: &[Note]) -> StorageResult<()> {
        Err(StorageError::Io(std::io::Error::other("quota exceeded")))
    }
}

#[test]
fn reopening_from_the_same_document_round_trips_the_collection() {
    let dir = TempDir::new().unwrap();

    let snapshot: Vec<Note> = {
        let mut store = NoteStore::open(JsonFileStorage::new(dir.path()));
        let first = store.create();
        store.create();
        store.update(first.id, NotePatch::title("persisted"));
        store.toggle_pin(first.id);
        store.notes().to_vec()
    };

    let reopened = NoteStore::open(JsonFileStorage::new(dir.path()));
    assert_eq!(reopened.notes(), snapshot.as_slice());
}

#[test]
fn missing_document_opens_as_an_empty_collection() {
    let dir = TempDir::new().unwrap();
    let store = NoteStore::open(JsonFileStorage::new(dir.path()));
    assert!(store.notes().is_empty());
}

#[test]
fn corrupt_document_opens_as_an_empty_collection() {
    let dir = TempDir::new().unwrap();
    let backend = JsonFileStorage::new(dir.path());
    std::fs::write(backend.path(), "{not json").unwrap();

    let mut store = NoteStore::open(backend);
    assert!(store.notes().is_empty());

    // The next commit replaces the corrupt document with a healthy one.
    store.create();
    let reopened = NoteStore::open(JsonFileStorage::new(dir.path()));
    assert_eq!(reopened.notes().len(), 1);
}

#[test]
fn document_path_carries_the_versioned_storage_key() {
    let dir = TempDir::new().unwrap();
    let backend = JsonFileStorage::new(dir.path());
    let file_name = backend.path().file_name().unwrap().to_str().unwrap();
    assert_eq!(file_name, format!("{STORAGE_KEY}.json"));
}

#[test]
fn records_without_a_pinned_field_load_as_unpinned() {
    let id_a = pocketnotes_core::NoteId::new_v4();
    let id_b = pocketnotes_core::NoteId::new_v4();
    let raw = format!(
        "[{{\"id\":\"{id_a}\",\"title\":\"old\",\"content\":\"\",\
          \"createdAt\":1,\"updatedAt\":1}},\
          {{\"id\":\"{id_b}\",\"title\":\"new\",\"content\":\"\",\
          \"createdAt\":2,\"updatedAt\":2,\"pinned\":true}}]"
    );

    let store = NoteStore::open(MemoryStorage::with_document(raw));
    assert_eq!(store.notes().len(), 2);
    assert!(store.get(id_b).unwrap().pinned);
    assert!(!store.get(id_a).unwrap().pinned);
    // Re-sorted on load: the pinned record leads despite equal group order
    // in the document.
    assert_eq!(store.notes()[0].id, id_b);
}

#[test]
fn write_failures_leave_the_in_memory_state_serving() {
    let mut store = NoteStore::open(FailingStorage);

    let created = store.create();
    store.update(created.id, NotePatch::title("still here"));

    assert_eq!(store.notes().len(), 1);
    assert_eq!(store.get(created.id).unwrap().title, "still here");
    assert!(store.revision() > 0, "mutations count even when commits fail");
}

#[test]
fn clear_all_persists_the_empty_state() {
    let dir = TempDir::new().unwrap();

    {
        let mut store = NoteStore::open(JsonFileStorage::new(dir.path()));
        store.import_sample();
        store.clear_all();
    }

    let reopened = NoteStore::open(JsonFileStorage::new(dir.path()));
    assert!(reopened.notes().is_empty());
}

#[test]
fn delete_persists_the_truncated_collection() {
    let dir = TempDir::new().unwrap();

    let kept_id = {
        let mut store = NoteStore::open(JsonFileStorage::new(dir.path()));
        let kept = store.create();
        let dropped = store.create();
        store.delete(dropped.id);
        kept.id
    };

    let reopened = NoteStore::open(JsonFileStorage::new(dir.path()));
    assert_eq!(reopened.notes().len(), 1);
    assert_eq!(reopened.notes()[0].id, kept_id);
}
