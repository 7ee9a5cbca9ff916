//! Service trait for record operations against the backend

use crate::core::{Record, error::ApiError};
use async_trait::async_trait;

/// Service trait for managing one kind of record
///
/// Implementations speak to the backend API (or stand in for it). The view
/// layer is agnostic to where records come from; it only needs `list`.
#[async_trait]
pub trait ResourceService<T: Record>: Send + Sync {
    /// List all records of this resource
    async fn list(&self) -> Result<Vec<T>, ApiError>;

    /// Get a record by ID
    async fn get(&self, id: &str) -> Result<T, ApiError>;

    /// Create a new record
    async fn create(&self, record: T) -> Result<T, ApiError>;

    /// Update an existing record
    async fn update(&self, id: &str, record: T) -> Result<T, ApiError>;

    /// Delete a record
    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}
