//! Park notices (admin notices board and tenant notice feed)

use super::{Priority, PropertyDirectory};
use crate::core::FieldValue;
use crate::view::{PaginationPolicy, ViewSpec};
use crate::{impl_record, impl_wire_enum};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NoticeStatus {
    Active,
    Draft,
    Archived,
}

impl_wire_enum!(NoticeStatus {
    Active => "ACTIVE",
    Draft => "DRAFT",
    Archived => "ARCHIVED",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub priority: Priority,
    pub status: NoticeStatus,
    #[serde(default)]
    pub tags: Vec<String>,
    /// `None` for park-wide notices that apply to every property
    #[serde(default)]
    pub property_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

impl_record!(Notice, "notice", "notices");

impl Notice {
    /// Active and not past its expiry at `now`
    pub fn is_current(&self, now: DateTime<Utc>) -> bool {
        self.status == NoticeStatus::Active && self.expires_at.is_none_or(|at| at > now)
    }
}

/// Notices table, grouped by property with one paginated table per property
pub fn notice_view_spec(directory: &PropertyDirectory) -> ViewSpec<Notice> {
    let directory = directory.clone();
    ViewSpec::new("notices")
        .search(|n: &Notice| FieldValue::from(n.title.as_str()))
        .search(|n: &Notice| FieldValue::from(n.content.as_str()))
        .search(|n: &Notice| FieldValue::List(n.tags.clone()))
        .filter("priority", |n: &Notice| FieldValue::from(n.priority))
        .filter("status", |n: &Notice| FieldValue::from(n.status))
        .filter("propertyId", |n: &Notice| FieldValue::from(n.property_id.clone()))
        .filter_case_insensitive("tag", |n: &Notice| FieldValue::List(n.tags.clone()))
        .filter("createdAt", |n: &Notice| FieldValue::from(n.created_at))
        .sort_key("createdAt", |n: &Notice| FieldValue::from(n.created_at))
        .sort_key("title", |n: &Notice| FieldValue::from(n.title.as_str()))
        .sort_key("priority", |n: &Notice| n.priority.sort_value())
        .grouping(
            "property",
            |n: &Notice| n.property_id.clone(),
            move |id| directory.label(id),
        )
        .unassigned_label("All Properties")
        .pagination(PaginationPolicy::PerGroup)
}
