//! In-memory document store used by tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use paxport_core::types::{DbId, Document};
use uuid::Uuid;

use super::{DocumentStore, StoreError};

/// A [`DocumentStore`] holding records in a process-local map.
///
/// Mirrors the modified/deleted count semantics of the real store so the
/// HTTP layer can be exercised without a database.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<DbId, Document>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<DbId, Document>> {
        self.records.lock().expect("memory store lock poisoned")
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert(&self, fields: Document) -> Result<DbId, StoreError> {
        let id = Uuid::new_v4();
        self.lock().insert(id, fields);
        Ok(id)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Document>, StoreError> {
        Ok(self.lock().get(&id).cloned())
    }

    async fn merge_by_id(&self, id: DbId, fields: Document) -> Result<u64, StoreError> {
        let mut records = self.lock();
        match records.get_mut(&id) {
            Some(existing) => {
                for (key, value) in fields {
                    existing.insert(key, value);
                }
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_by_id(&self, id: DbId) -> Result<u64, StoreError> {
        Ok(u64::from(self.lock().remove(&id).is_some()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
