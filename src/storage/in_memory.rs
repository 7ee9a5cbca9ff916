//! In-memory implementation of ResourceService for testing and development

use crate::core::{Record, ResourceService, error::ApiError};
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory record service
///
/// Stands in for the backend API in tests and the demo. Records keep their
/// insertion order so `list` behaves like a backend returning rows in
/// creation order.
pub struct InMemoryService<T: Record> {
    records: Arc<RwLock<IndexMap<String, T>>>,
}

impl<T: Record> InMemoryService<T> {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(IndexMap::new())),
        }
    }

    /// Create a service pre-populated with `records`; missing ids are minted
    pub fn with_records(records: impl IntoIterator<Item = T>) -> Self {
        let map = records
            .into_iter()
            .map(|mut record| {
                if !record.has_id() {
                    record.set_id(Uuid::new_v4().to_string());
                }
                (record.id().to_string(), record)
            })
            .collect();
        Self {
            records: Arc::new(RwLock::new(map)),
        }
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    fn not_found(id: &str) -> ApiError {
        ApiError::NotFound {
            resource: T::resource_name_singular().to_string(),
            id: id.to_string(),
        }
    }
}

impl<T: Record> Default for InMemoryService<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> Clone for InMemoryService<T> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

#[async_trait]
impl<T: Record> ResourceService<T> for InMemoryService<T> {
    async fn list(&self) -> Result<Vec<T>, ApiError> {
        let records = self.records.read().await;
        Ok(records.values().cloned().collect())
    }

    async fn get(&self, id: &str) -> Result<T, ApiError> {
        let records = self.records.read().await;
        records.get(id).cloned().ok_or_else(|| Self::not_found(id))
    }

    async fn create(&self, mut record: T) -> Result<T, ApiError> {
        if !record.has_id() {
            record.set_id(Uuid::new_v4().to_string());
        }

        let mut records = self.records.write().await;
        records.insert(record.id().to_string(), record.clone());

        tracing::debug!(resource = T::resource_name(), id = record.id(), "record created");
        Ok(record)
    }

    async fn update(&self, id: &str, mut record: T) -> Result<T, ApiError> {
        let mut records = self.records.write().await;
        let slot = records.get_mut(id).ok_or_else(|| Self::not_found(id))?;

        record.set_id(id.to_string());
        *slot = record.clone();

        Ok(record)
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let mut records = self.records.write().await;
        records
            .shift_remove(id)
            .map(|_| ())
            .ok_or_else(|| Self::not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Amenity {
        #[serde(default)]
        id: String,
        name: String,
    }

    crate::impl_record!(Amenity, "amenity", "amenities");

    fn amenity(name: &str) -> Amenity {
        Amenity {
            id: String::new(),
            name: name.into(),
        }
    }

    #[tokio::test]
    async fn test_create_mints_id() {
        let service = InMemoryService::new();
        let created = service.create(amenity("Pool")).await.unwrap();

        assert!(Uuid::parse_str(&created.id).is_ok());
        assert_eq!(service.get(&created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_create_keeps_existing_id() {
        let service = InMemoryService::new();
        let mut laundry = amenity("Laundry");
        laundry.id = "a-1".into();

        let created = service.create(laundry).await.unwrap();
        assert_eq!(created.id, "a-1");
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let service = InMemoryService::with_records(vec![amenity("Pool"), amenity("Gym"), amenity("Dog park")]);

        let names: Vec<_> = service
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(names, vec!["Pool", "Gym", "Dog park"]);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let service = InMemoryService::new();
        let err = service.update("nope", amenity("Pool")).await.unwrap_err();

        assert_eq!(err.error_code(), "NOT_FOUND");
        assert_eq!(err.to_string(), "amenity with id 'nope' not found");
    }

    #[tokio::test]
    async fn test_update_replaces_record() {
        let service = InMemoryService::new();
        let created = service.create(amenity("Pool")).await.unwrap();

        let updated = service.update(&created.id, amenity("Heated pool")).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(service.get(&created.id).await.unwrap().name, "Heated pool");
    }

    #[tokio::test]
    async fn test_delete() {
        let service = InMemoryService::new();
        let created = service.create(amenity("Pool")).await.unwrap();

        service.delete(&created.id).await.unwrap();
        assert!(service.is_empty().await);
        assert!(matches!(
            service.delete(&created.id).await,
            Err(ApiError::NotFound { .. })
        ));
    }
}
