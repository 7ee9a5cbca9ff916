//! Rent and fee payments made by tenants

use crate::core::FieldValue;
use crate::view::{PaginationPolicy, ViewSpec};
use crate::{impl_record, impl_wire_enum};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Completed,
    Pending,
    Failed,
    Refunded,
}

impl_wire_enum!(PaymentStatus {
    Completed => "COMPLETED",
    Pending => "PENDING",
    Failed => "FAILED",
    Refunded => "REFUNDED",
});

/// A rent or fee payment made by a tenant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(default)]
    pub id: String,
    pub tenant_id: String,
    pub amount: f64,
    #[serde(default)]
    pub date_paid: Option<DateTime<Utc>>,
    pub status: PaymentStatus,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl_record!(Payment, "payment", "payments");

/// Sum of completed payments
pub fn total_collected<'a>(payments: impl IntoIterator<Item = &'a Payment>) -> f64 {
    payments
        .into_iter()
        .filter(|p| p.status == PaymentStatus::Completed)
        .map(|p| p.amount)
        .sum()
}

/// Payment history, one flat paginated table
pub fn payment_view_spec() -> ViewSpec<Payment> {
    ViewSpec::new("payments")
        .search(|p: &Payment| FieldValue::from(p.description.clone()))
        .search(|p: &Payment| FieldValue::from(p.method.clone()))
        .filter("status", |p: &Payment| FieldValue::from(p.status))
        .filter_case_insensitive("method", |p: &Payment| FieldValue::from(p.method.clone()))
        .filter("datePaid", |p: &Payment| FieldValue::from(p.date_paid))
        .sort_key("datePaid", |p: &Payment| FieldValue::from(p.date_paid))
        .sort_key("amount", |p: &Payment| FieldValue::from(p.amount))
        .sort_key("status", |p: &Payment| FieldValue::from(p.status))
        .pagination(PaginationPolicy::Global)
}
