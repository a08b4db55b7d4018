//! Collection store adapters.
//!
//! The production store keeps one JSON file per collection under a data
//! directory. All access funnels through a single mutex, serialising reads
//! and writes process-wide; the concurrency model is strictly serial and the
//! domain relies on that.

mod memory;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::{fs, io};

use tracing::debug;

use crate::domain::{Collection, CollectionStore, StoreError};

pub use self::memory::MemoryStore;

/// File-backed store with one `<collection>.json` file per collection.
///
/// A missing file means the collection has never been written and loads as
/// `None`; an empty collection is the literal file content `[]`.
#[derive(Debug)]
pub struct JsonFileStore {
    data_dir: PathBuf,
    guard: Mutex<()>,
}

impl JsonFileStore {
    /// Build a store rooted at the given data directory.
    ///
    /// The directory is created lazily on first write, not here, so a
    /// read-only deployment can still serve an existing data set.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            guard: Mutex::new(()),
        }
    }

    fn path_for(&self, collection: Collection) -> PathBuf {
        self.data_dir.join(format!("{}.json", collection.key()))
    }

    fn write_atomic(&self, path: &Path, payload: &str) -> io::Result<()> {
        fs::create_dir_all(&self.data_dir)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, payload)?;
        fs::rename(&tmp, path)
    }
}

impl CollectionStore for JsonFileStore {
    fn load(&self, collection: Collection) -> Result<Option<String>, StoreError> {
        let _lock = self
            .guard
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        match fs::read_to_string(self.path_for(collection)) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::read(collection, err.to_string())),
        }
    }

    fn save(&self, collection: Collection, payload: &str) -> Result<(), StoreError> {
        let _lock = self
            .guard
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let path = self.path_for(collection);
        self.write_atomic(&path, payload)
            .map_err(|err| StoreError::write(collection, err.to_string()))?;
        debug!(collection = %collection, bytes = payload.len(), "collection saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    #[fixture]
    fn data_dir() -> TempDir {
        TempDir::new().unwrap_or_else(|err| panic!("temp dir: {err}"))
    }

    #[rstest]
    fn missing_file_loads_as_absent(data_dir: TempDir) {
        let store = JsonFileStore::new(data_dir.path());
        assert_eq!(store.load(Collection::Rooms), Ok(None));
    }

    #[rstest]
    fn save_then_load_round_trips(data_dir: TempDir) {
        let store = JsonFileStore::new(data_dir.path());
        assert_eq!(store.save(Collection::Rooms, r#"[{"id":"x"}]"#), Ok(()));
        assert_eq!(
            store.load(Collection::Rooms),
            Ok(Some(r#"[{"id":"x"}]"#.to_owned()))
        );
    }

    #[rstest]
    fn an_explicitly_empty_collection_is_not_absent(data_dir: TempDir) {
        let store = JsonFileStore::new(data_dir.path());
        assert_eq!(store.save(Collection::Users, "[]"), Ok(()));
        assert_eq!(store.load(Collection::Users), Ok(Some("[]".to_owned())));
    }

    #[rstest]
    fn collections_are_stored_in_separate_files(data_dir: TempDir) {
        let store = JsonFileStore::new(data_dir.path());
        assert_eq!(store.save(Collection::Rooms, "[1]"), Ok(()));
        assert_eq!(store.save(Collection::Bookings, "[2]"), Ok(()));
        assert!(data_dir.path().join("rooms.json").is_file());
        assert!(data_dir.path().join("bookings.json").is_file());
        assert_eq!(store.load(Collection::Rooms), Ok(Some("[1]".to_owned())));
    }

    #[rstest]
    fn the_data_directory_is_created_on_first_write(data_dir: TempDir) {
        let nested = data_dir.path().join("deep").join("data");
        let store = JsonFileStore::new(&nested);
        assert_eq!(store.save(Collection::Rooms, "[]"), Ok(()));
        assert!(nested.join("rooms.json").is_file());
    }

    #[rstest]
    fn no_temporary_file_survives_a_save(data_dir: TempDir) {
        let store = JsonFileStore::new(data_dir.path());
        assert_eq!(store.save(Collection::Rooms, "[]"), Ok(()));
        assert!(!data_dir.path().join("rooms.json.tmp").exists());
    }
}
