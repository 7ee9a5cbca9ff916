//! Query parameters for list views

use crate::core::QueryError;
use crate::view::{Criterion, DEFAULT_PAGE_SIZE, SortOrder, ViewCriteria};
use chrono::{DateTime, NaiveDate};
use serde::Deserialize;
use serde_json::Value;

/// Query parameters for pagination, search, sorting and filtering
///
/// This is the URL-shaped form of [`ViewCriteria`], used for deep links into
/// a list screen. All parameters are optional.
///
/// # Example
/// ```text
/// ?page=2&limit=10
/// ?search=leak&filter={"status": "PENDING"}
/// ?filter={"datePaid>=": "2024-01-01", "datePaid<": "2024-02-01"}&sort=amount:desc
/// ?group=property
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct QueryParams {
    /// Page number (starts at 1; lower values are clamped)
    pub page: Option<i64>,

    /// Number of items per page
    pub limit: Option<i64>,

    /// Free-text search
    pub search: Option<String>,

    /// Filters as JSON object
    ///
    /// # Format
    /// - Exact match: `{"field": "value"}`
    /// - Date bounds: `{"field>=": "2024-01-01", "field<": "2024-02-01"}`
    ///
    /// `"all"`, `"ALL"` and `""` mean "no constraint" and are dropped here,
    /// so they never reach the view engine as values.
    pub filter: Option<String>,

    /// Sort field and direction
    ///
    /// # Format
    /// - `field:asc` or `field` (ascending)
    /// - `field:desc` (descending)
    pub sort: Option<String>,

    /// Grouping name
    pub group: Option<String>,
}

fn is_unconstrained(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value.eq_ignore_ascii_case("all")
}

impl QueryParams {
    /// Get page number, ensuring minimum of 1
    pub fn page(&self) -> usize {
        self.page.unwrap_or(1).max(1) as usize
    }

    /// Get limit, if present; zero and negatives are kept as 0 so the view
    /// engine rejects them instead of silently paging
    pub fn limit(&self) -> Option<usize> {
        self.limit.map(|l| l.max(0) as usize)
    }

    /// Parse filter JSON string into Value
    pub fn filter_value(&self) -> Result<Option<Value>, QueryError> {
        self.filter
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(serde_json::from_str)
            .transpose()
            .map_err(|e| QueryError::InvalidFilter {
                message: e.to_string(),
            })
    }

    /// Parse the sort expression into key and order
    pub fn sort_spec(&self) -> Result<Option<(String, SortOrder)>, QueryError> {
        let Some(raw) = self.sort.as_deref().map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(None);
        };
        let invalid = || QueryError::InvalidSort {
            value: raw.to_string(),
        };
        let (key, order) = match raw.split_once(':') {
            Some((key, order)) => (key.trim(), SortOrder::parse(order).ok_or_else(invalid)?),
            None => (raw, SortOrder::Asc),
        };
        if key.is_empty() {
            return Err(invalid());
        }
        Ok(Some((key.to_string(), order)))
    }

    /// Convert into view criteria, starting from `defaults`
    ///
    /// Parameters that are present override the defaults; absent ones keep
    /// them. Names are not checked against a spec here; the pipeline does that.
    pub fn into_criteria(self, defaults: ViewCriteria) -> Result<ViewCriteria, QueryError> {
        let mut criteria = defaults;

        if let Some(search) = &self.search {
            criteria.search_term = search.trim().to_string();
        }
        if let Some((key, order)) = self.sort_spec()? {
            criteria.sort_key = Some(key);
            criteria.sort_order = order;
        }
        if let Some(group) = self.group.as_deref().map(str::trim) {
            criteria.group_by = if is_unconstrained(group) {
                None
            } else {
                Some(group.to_string())
            };
        }
        if let Some(limit) = self.limit() {
            criteria.page_size = limit;
        }
        if let Some(filter) = self.filter_value()? {
            apply_filters(&mut criteria, &filter)?;
        }
        criteria.page = self.page();

        Ok(criteria)
    }
}

impl From<QueryParams> for ViewCriteria {
    /// Lenient conversion: malformed parts are ignored
    fn from(params: QueryParams) -> Self {
        let page = params.page();
        let defaults = ViewCriteria::new().page_size(params.limit().unwrap_or(DEFAULT_PAGE_SIZE));
        params
            .into_criteria(defaults.clone())
            .unwrap_or_else(|err| {
                tracing::debug!(error = %err, "ignoring malformed query parameters");
                defaults.page(page)
            })
    }
}

fn apply_filters(criteria: &mut ViewCriteria, filter: &Value) -> Result<(), QueryError> {
    let Some(obj) = filter.as_object() else {
        return Err(QueryError::InvalidFilter {
            message: "expected an object".to_string(),
        });
    };

    for (key, value) in obj {
        // Comparisons first, longest suffix first
        if let Some(field) = key.strip_suffix(">=") {
            set_date_bound(criteria, field, value, Bound::OnOrAfter)?;
        } else if let Some(field) = key.strip_suffix('<') {
            set_date_bound(criteria, field, value, Bound::Before)?;
        } else {
            let text = match value {
                Value::String(s) => s.clone(),
                Value::Null => continue,
                other => other.to_string(),
            };
            if is_unconstrained(&text) {
                criteria.filters.shift_remove(key.as_str());
            } else {
                criteria.filters.insert(key.clone(), Criterion::Equals(text));
            }
        }
    }

    Ok(())
}

enum Bound {
    OnOrAfter,
    Before,
}

fn set_date_bound(
    criteria: &mut ViewCriteria,
    field: &str,
    value: &Value,
    bound: Bound,
) -> Result<(), QueryError> {
    let raw = match value {
        Value::String(s) if !is_unconstrained(s) => s.trim(),
        _ => return Ok(()),
    };
    let date = parse_date(raw).ok_or_else(|| QueryError::InvalidDate {
        field: field.to_string(),
        value: raw.to_string(),
    })?;

    let entry = criteria
        .filters
        .entry(field.to_string())
        .or_insert(Criterion::DateRange {
            on_or_after: None,
            before: None,
        });
    if !matches!(entry, Criterion::DateRange { .. }) {
        *entry = Criterion::DateRange {
            on_or_after: None,
            before: None,
        };
    }
    if let Criterion::DateRange {
        on_or_after,
        before,
    } = entry
    {
        match bound {
            Bound::OnOrAfter => *on_or_after = Some(date),
            Bound::Before => *before = Some(date),
        }
    }
    Ok(())
}

/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp (date part kept)
fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}
