//! Tenants and their leases

use super::PropertyDirectory;
use crate::core::FieldValue;
use crate::view::{PaginationPolicy, ViewSpec};
use crate::{impl_record, impl_wire_enum};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TenantStatus {
    Active,
    Pending,
    Inactive,
}

impl_wire_enum!(TenantStatus {
    Active => "ACTIVE",
    Pending => "PENDING",
    Inactive => "INACTIVE",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    #[serde(default)]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub property_id: Option<String>,
    #[serde(default)]
    pub spot_id: Option<String>,
    pub status: TenantStatus,
    #[serde(default)]
    pub lease_start: Option<NaiveDate>,
    #[serde(default)]
    pub lease_end: Option<NaiveDate>,
}

impl_record!(Tenant, "tenant", "tenants");

impl Tenant {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Date columns are compared as midnight UTC
fn date_value(date: Option<NaiveDate>) -> FieldValue {
    FieldValue::from(date.and_then(|d| d.and_hms_opt(0, 0, 0)).map(|dt| dt.and_utc()))
}

pub fn tenant_view_spec(directory: &PropertyDirectory) -> ViewSpec<Tenant> {
    let directory = directory.clone();
    ViewSpec::new("tenants")
        .search(|t: &Tenant| FieldValue::from(t.full_name()))
        .search(|t: &Tenant| FieldValue::from(t.email.clone()))
        .search(|t: &Tenant| FieldValue::from(t.phone.clone()))
        .filter("status", |t: &Tenant| FieldValue::from(t.status))
        .filter("propertyId", |t: &Tenant| FieldValue::from(t.property_id.clone()))
        .filter("leaseEnd", |t: &Tenant| date_value(t.lease_end))
        .sort_key("name", |t: &Tenant| {
            FieldValue::from(format!("{} {}", t.last_name, t.first_name))
        })
        .sort_key("leaseStart", |t: &Tenant| date_value(t.lease_start))
        .sort_key("leaseEnd", |t: &Tenant| date_value(t.lease_end))
        .grouping(
            "property",
            |t: &Tenant| t.property_id.clone(),
            move |id| directory.label(id),
        )
        .pagination(PaginationPolicy::Global)
}
