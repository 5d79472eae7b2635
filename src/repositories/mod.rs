//! Repository layer for storage operations.
//!
//! This module provides a clean separation between business logic (services)
//! and storage operations (repositories), improving testability and
//! maintainability. Services depend on the [`Repository`] trait, not on a
//! concrete backend.

pub mod memory;

pub use memory::MemoryRepository;

use crate::errors::ApiError;
use crate::models::Entity;

/// Storage-access abstraction for one entity type.
///
/// Absence is never an error on this interface: a missing id yields
/// `Ok(None)` from `find_by_id` and a no-op from `delete_by_id`. Backend
/// faults surface as [`ApiError`].
pub trait Repository<T: Entity>: Send + Sync {
    /// Return all stored records in ascending id order.
    fn find_all(&self) -> Result<Vec<T>, ApiError>;

    /// Return the record at `id`, if present.
    fn find_by_id(&self, id: i64) -> Result<Option<T>, ApiError>;

    /// Insert or overwrite the record at `entity.id`, assigning the next
    /// available id when the entity has none yet. Returns the persisted value.
    fn save(&self, entity: T) -> Result<T, ApiError>;

    /// Remove the record at `id` if present; no-op otherwise.
    fn delete_by_id(&self, id: i64) -> Result<(), ApiError>;
}
