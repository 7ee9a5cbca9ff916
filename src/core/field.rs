//! Field value types returned by record extractors

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::cmp::Ordering;
use uuid::Uuid;

/// A polymorphic field value that can hold different types
///
/// Every extractor registered on a [`ViewSpec`](crate::view::ViewSpec) yields
/// one of these, which is what lets the view pipeline stay agnostic of the
/// record's concrete fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Uuid(Uuid),
    DateTime(DateTime<Utc>),
    List(Vec<String>),
    Null,
}

impl FieldValue {
    /// Get the value as a string if possible
    pub fn as_string(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as an integer if possible
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the value as a number, integers included. NaN counts as absent.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(i) => Some(*i as f64),
            FieldValue::Float(f) if !f.is_nan() => Some(*f),
            _ => None,
        }
    }

    /// Get the value as a date-time if possible
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            FieldValue::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    /// Calendar date (UTC) of a date-time value
    pub fn as_date(&self) -> Option<NaiveDate> {
        self.as_datetime().map(|dt| dt.date_naive())
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Null-safe text projection used by search and equality filters
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            FieldValue::String(s) => Cow::Borrowed(s),
            FieldValue::Integer(i) => Cow::Owned(i.to_string()),
            FieldValue::Float(f) => Cow::Owned(f.to_string()),
            FieldValue::Boolean(b) => Cow::Owned(b.to_string()),
            FieldValue::Uuid(u) => Cow::Owned(u.to_string()),
            FieldValue::DateTime(dt) => Cow::Owned(dt.to_rfc3339()),
            FieldValue::List(items) => Cow::Owned(items.join(" ")),
            FieldValue::Null => Cow::Borrowed(""),
        }
    }

    /// Total ascending order between two field values.
    ///
    /// Missing values (null, NaN) sort lowest. Numbers compare numerically
    /// whether integer or float, strings and lists case-insensitively, and
    /// date-times by epoch milliseconds. Values of different kinds fall back
    /// to a fixed kind rank so the result is deterministic.
    pub fn compare(&self, other: &FieldValue) -> Ordering {
        match (self.kind_rank(), other.kind_rank()) {
            (a, b) if a != b => a.cmp(&b),
            _ => match (self, other) {
                (FieldValue::String(a), FieldValue::String(b)) => {
                    a.to_lowercase().cmp(&b.to_lowercase())
                }
                (FieldValue::Boolean(a), FieldValue::Boolean(b)) => a.cmp(b),
                (FieldValue::Uuid(a), FieldValue::Uuid(b)) => a.cmp(b),
                (FieldValue::DateTime(a), FieldValue::DateTime(b)) => {
                    a.timestamp_millis().cmp(&b.timestamp_millis())
                }
                (FieldValue::List(a), FieldValue::List(b)) => a
                    .join(" ")
                    .to_lowercase()
                    .cmp(&b.join(" ").to_lowercase()),
                (a, b) => match (a.as_number(), b.as_number()) {
                    (Some(x), Some(y)) => x.total_cmp(&y),
                    _ => Ordering::Equal,
                },
            },
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            FieldValue::Null => 0,
            FieldValue::Float(f) if f.is_nan() => 0,
            FieldValue::Boolean(_) => 1,
            FieldValue::Integer(_) | FieldValue::Float(_) => 2,
            FieldValue::DateTime(_) => 3,
            FieldValue::Uuid(_) => 4,
            FieldValue::String(_) => 5,
            FieldValue::List(_) => 6,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        FieldValue::DateTime(value)
    }
}

impl<V: Into<FieldValue>> From<Option<V>> for FieldValue {
    fn from(value: Option<V>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Null)
    }
}
