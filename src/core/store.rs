//! Store traits for persisted entities

use crate::core::entity::Entity;
use crate::core::error::StorageError;
use crate::core::query::{Page, PageRequest};
use async_trait::async_trait;

/// Persistence contract for an entity type
///
/// Implementations assign ids on first save and must never reassign them.
/// The API is agnostic to the underlying storage mechanism.
#[async_trait]
pub trait EntityStore<T: Entity>: Send + Sync {
    /// Insert a new entity or overwrite an existing one
    ///
    /// An entity without an id receives the next id of the store.
    async fn save(&self, entity: T) -> Result<T, StorageError>;

    /// Get an entity by id
    async fn find_by_id(&self, id: i64) -> Result<Option<T>, StorageError>;

    /// Get one page of entities, sorted as requested
    ///
    /// Without a sort the entities are returned in id order.
    async fn find_all(&self, request: &PageRequest) -> Result<Page<T>, StorageError>;

    /// Count all stored entities
    async fn count(&self) -> Result<usize, StorageError>;
}
