//! In-memory storage backend.

use std::collections::BTreeMap;
use std::sync::RwLock;

use log::debug;

use crate::constants::ERR_STORE_POISONED;
use crate::errors::ApiError;
use crate::models::Entity;
use crate::repositories::Repository;

/// Map-backed store for one entity type.
///
/// An `RwLock` around a `BTreeMap` keeps every operation atomic with respect
/// to concurrent requests touching the same id, and the ordered keys give
/// `find_all` a stable ascending-id order.
pub struct MemoryRepository<T> {
    records: RwLock<BTreeMap<i64, T>>,
}

impl<T: Entity> MemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
        }
    }
}

impl<T: Entity> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Repository<T> for MemoryRepository<T> {
    fn find_all(&self) -> Result<Vec<T>, ApiError> {
        let records = self
            .records
            .read()
            .map_err(|_| ApiError::InternalServerError(ERR_STORE_POISONED.to_string()))?;
        Ok(records.values().cloned().collect())
    }

    fn find_by_id(&self, id: i64) -> Result<Option<T>, ApiError> {
        debug!("Repository: Finding {} by id: {}", T::RESOURCE, id);
        let records = self
            .records
            .read()
            .map_err(|_| ApiError::InternalServerError(ERR_STORE_POISONED.to_string()))?;
        Ok(records.get(&id).cloned())
    }

    fn save(&self, mut entity: T) -> Result<T, ApiError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| ApiError::InternalServerError(ERR_STORE_POISONED.to_string()))?;

        let id = match entity.id() {
            Some(id) => id,
            None => {
                // Ids ascend from 1; the highest key determines the next one.
                let next = records.keys().next_back().map_or(1, |last| last + 1);
                entity.assign_id(next);
                next
            }
        };

        debug!("Repository: Saving {} with id: {}", T::RESOURCE, id);
        records.insert(id, entity.clone());
        Ok(entity)
    }

    fn delete_by_id(&self, id: i64) -> Result<(), ApiError> {
        debug!("Repository: Deleting {} by id: {}", T::RESOURCE, id);
        let mut records = self
            .records
            .write()
            .map_err(|_| ApiError::InternalServerError(ERR_STORE_POISONED.to_string()))?;
        records.remove(&id);
        Ok(())
    }
}
