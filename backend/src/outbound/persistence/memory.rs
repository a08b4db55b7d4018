//! In-memory collection store.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::{Collection, CollectionStore, StoreError};

/// Process-local store backed by a map, primarily for tests.
///
/// Mirrors the file store's absent-versus-empty distinction: a collection
/// never saved loads as `None`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<&'static str, String>>,
}

impl CollectionStore for MemoryStore {
    fn load(&self, collection: Collection) -> Result<Option<String>, StoreError> {
        let guard = self
            .collections
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(guard.get(collection.key()).cloned())
    }

    fn save(&self, collection: Collection, payload: &str) -> Result<(), StoreError> {
        let mut guard = self
            .collections
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        guard.insert(collection.key(), payload.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn unsaved_collections_load_as_absent() {
        let store = MemoryStore::default();
        assert_eq!(store.load(Collection::Rooms), Ok(None));
    }

    #[rstest]
    fn saved_payloads_round_trip() {
        let store = MemoryStore::default();
        assert_eq!(store.save(Collection::Rooms, "[]"), Ok(()));
        assert_eq!(store.load(Collection::Rooms), Ok(Some("[]".to_owned())));
        assert_eq!(store.load(Collection::Users), Ok(None));
    }
}
