//! The document store seam.
//!
//! The passenger service talks to persistence only through
//! [`DocumentStore`], so the HTTP layer can be exercised against
//! [`MemoryStore`] without a running database.

use async_trait::async_trait;
use paxport_core::types::{DbId, Document};

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgDocumentStore;

/// Errors surfaced by a document store implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// A collection of passenger records addressed by store-generated ids.
///
/// Implementations are pass-throughs to the backing store: no validation
/// and no business rules live behind this trait.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Persist a new record and return the store-assigned identifier.
    /// Fails only on store-level unavailability.
    async fn insert(&self, fields: Document) -> Result<DbId, StoreError>;

    /// Fetch the current field mapping for `id`, if the record exists.
    async fn find_by_id(&self, id: DbId) -> Result<Option<Document>, StoreError>;

    /// Overwrite exactly the given fields on the record with `id`,
    /// leaving other stored fields untouched. Returns the number of
    /// records written: 1 if the record existed, 0 otherwise.
    async fn merge_by_id(&self, id: DbId, fields: Document) -> Result<u64, StoreError>;

    /// Remove the record with `id`. Returns 1 if a record was deleted,
    /// 0 if none matched.
    async fn delete_by_id(&self, id: DbId) -> Result<u64, StoreError>;

    /// Connectivity probe for health reporting.
    async fn ping(&self) -> Result<(), StoreError>;
}
