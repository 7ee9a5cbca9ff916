//! Maintenance and service requests filed by tenants

use super::Priority;
use crate::core::FieldValue;
use crate::view::{PaginationPolicy, ViewSpec};
use crate::{impl_record, impl_wire_enum};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl_wire_enum!(RequestStatus {
    Pending => "PENDING",
    InProgress => "IN_PROGRESS",
    Completed => "COMPLETED",
    Cancelled => "CANCELLED",
});

impl RequestStatus {
    /// Still needs attention from park staff
    pub fn is_open(&self) -> bool {
        matches!(self, RequestStatus::Pending | RequestStatus::InProgress)
    }
}

/// A maintenance or service request filed by a tenant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRequest {
    #[serde(default)]
    pub id: String,
    pub tenant_id: String,
    #[serde(default)]
    pub property_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    pub priority: Priority,
    pub status: RequestStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl_record!(ServiceRequest, "service request", "service-requests");

pub fn service_request_view_spec() -> ViewSpec<ServiceRequest> {
    ViewSpec::new("service-requests")
        .search(|r: &ServiceRequest| FieldValue::from(r.title.as_str()))
        .search(|r: &ServiceRequest| FieldValue::from(r.description.as_str()))
        .search(|r: &ServiceRequest| FieldValue::from(r.category.clone()))
        .filter("status", |r: &ServiceRequest| FieldValue::from(r.status))
        .filter("priority", |r: &ServiceRequest| FieldValue::from(r.priority))
        .filter_case_insensitive("category", |r: &ServiceRequest| {
            FieldValue::from(r.category.clone())
        })
        .filter("createdAt", |r: &ServiceRequest| FieldValue::from(r.created_at))
        .sort_key("createdAt", |r: &ServiceRequest| FieldValue::from(r.created_at))
        .sort_key("priority", |r: &ServiceRequest| r.priority.sort_value())
        .sort_key("status", |r: &ServiceRequest| FieldValue::from(r.status))
        .pagination(PaginationPolicy::Global)
}
