//! Portal records and the view specs of the screens that list them

pub mod document;
pub mod macros;
pub mod notice;
pub mod payment;
pub mod property;
pub mod service_request;
pub mod tenant;

pub use document::{Document, document_view_spec};
pub use notice::{Notice, NoticeStatus, notice_view_spec};
pub use payment::{Payment, PaymentStatus, payment_view_spec};
pub use property::{Property, PropertyDirectory, PropertyType, Spot, SpotStatus, spot_view_spec};
pub use service_request::{RequestStatus, ServiceRequest, service_request_view_spec};
pub use tenant::{Tenant, TenantStatus, tenant_view_spec};

use crate::core::FieldValue;
use crate::impl_wire_enum;
use serde::{Deserialize, Serialize};

/// Urgency shared by notices and service requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl_wire_enum!(Priority {
    Low => "LOW",
    Medium => "MEDIUM",
    High => "HIGH",
    Urgent => "URGENT",
});

impl Priority {
    /// Severity rank, so sorting by priority is not alphabetical
    pub fn rank(&self) -> i64 {
        match self {
            Priority::Low => 0,
            Priority::Medium => 1,
            Priority::High => 2,
            Priority::Urgent => 3,
        }
    }

    pub(crate) fn sort_value(&self) -> FieldValue {
        FieldValue::Integer(self.rank())
    }
}
