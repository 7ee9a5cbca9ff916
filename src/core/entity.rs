//! Record trait shared by every resource the portal lists

use serde::{Serialize, de::DeserializeOwned};

/// Base trait for all records fetched from the backend API.
///
/// A record has a stable string identifier and knows the REST resource it
/// lives under. Everything else (which fields are searchable, sortable,
/// groupable) is declared per screen on a [`ViewSpec`](crate::view::ViewSpec),
/// not here.
pub trait Record: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// The plural resource name used in URLs (e.g., "notices", "service-requests")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "notice", "service request")
    fn resource_name_singular() -> &'static str;

    /// Get the unique identifier for this record
    fn id(&self) -> &str;

    /// Replace the identifier (used when a store mints a new one)
    fn set_id(&mut self, id: String);

    /// Check whether the record has been persisted yet
    fn has_id(&self) -> bool {
        !self.id().trim().is_empty()
    }
}
