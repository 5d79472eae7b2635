//! Generic CRUD service shared by every resource type.

use std::sync::Arc;

use log::{debug, info, warn};

use crate::errors::ApiError;
use crate::models::Entity;
use crate::repositories::Repository;

/// Business-logic layer around one repository.
///
/// The service owns the existence rules: update fails on a missing record
/// instead of silently creating one, delete is idempotent, and create always
/// persists a record built from its input.
pub struct CrudService<T: Entity> {
    repository: Arc<dyn Repository<T>>,
}

impl<T: Entity> CrudService<T> {
    pub fn new(repository: Arc<dyn Repository<T>>) -> Self {
        Self { repository }
    }

    pub fn get_all(&self) -> Result<Vec<T>, ApiError> {
        debug!("Fetching all {} records", T::RESOURCE);
        self.repository.find_all()
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<T>, ApiError> {
        debug!("Fetching {} by id: {}", T::RESOURCE, id);
        self.repository.find_by_id(id)
    }

    /// Construct a new record from the create payload and persist it. The
    /// store assigns the id.
    pub fn create(&self, input: T::Create) -> Result<T, ApiError> {
        let created = self.repository.save(T::from_create(input))?;
        info!(
            "Created {} with id: {}",
            T::RESOURCE,
            created.id().unwrap_or_default()
        );
        Ok(created)
    }

    /// Replace the mutable fields of the record at `id`, preserving the id.
    /// Fails with `NotFound` when no record exists; never creates one.
    pub fn update(&self, id: i64, input: T::Update) -> Result<T, ApiError> {
        let mut existing = self.repository.find_by_id(id)?.ok_or_else(|| {
            warn!("Update failed: {} not found with id: {}", T::RESOURCE, id);
            ApiError::NotFound(format!("{} not found", T::RESOURCE))
        })?;

        existing.apply_update(input);
        let updated = self.repository.save(existing)?;

        info!("Successfully updated {} with id: {}", T::RESOURCE, id);
        Ok(updated)
    }

    /// Remove the record at `id`. Idempotent: deleting an absent id succeeds.
    pub fn delete(&self, id: i64) -> Result<(), ApiError> {
        info!("Deleting {} with id: {}", T::RESOURCE, id);
        self.repository.delete_by_id(id)
    }
}
