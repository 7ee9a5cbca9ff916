//! Caller-held view criteria

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// The opposite direction
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    /// Parse `asc`/`desc` in any case
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

/// One active constraint on a filter field
///
/// There is no "all" variant: an unconstrained dimension is
/// simply absent from [`ViewCriteria::filters`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    /// Field text equals the value
    Equals(String),

    /// Field date lies in `[on_or_after, before)`, either bound optional
    DateRange {
        on_or_after: Option<NaiveDate>,
        before: Option<NaiveDate>,
    },
}

impl Criterion {
    pub fn equals(value: impl Into<String>) -> Self {
        Criterion::Equals(value.into())
    }

    pub fn on_or_after(date: NaiveDate) -> Self {
        Criterion::DateRange {
            on_or_after: Some(date),
            before: None,
        }
    }

    pub fn before(date: NaiveDate) -> Self {
        Criterion::DateRange {
            on_or_after: None,
            before: Some(date),
        }
    }

    pub fn between(on_or_after: NaiveDate, before: NaiveDate) -> Self {
        Criterion::DateRange {
            on_or_after: Some(on_or_after),
            before: Some(before),
        }
    }
}

/// Everything the caller controls about a list view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewCriteria {
    pub search_term: String,

    /// Active filters keyed by filter name, in the order they were set
    pub filters: IndexMap<String, Criterion>,

    /// `None` keeps the input order
    pub sort_key: Option<String>,
    pub sort_order: SortOrder,

    /// Name of a grouping registered on the view spec
    pub group_by: Option<String>,

    /// 1-based; 0 is treated as 1
    pub page: usize,
    pub page_size: usize,
}

impl Default for ViewCriteria {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            filters: IndexMap::new(),
            sort_key: None,
            sort_order: SortOrder::Asc,
            group_by: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Page size used when nothing else is configured
pub const DEFAULT_PAGE_SIZE: usize = 10;

impl ViewCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn filter(mut self, name: impl Into<String>, criterion: Criterion) -> Self {
        self.filters.insert(name.into(), criterion);
        self
    }

    pub fn sort(mut self, key: impl Into<String>, order: SortOrder) -> Self {
        self.sort_key = Some(key.into());
        self.sort_order = order;
        self
    }

    pub fn group_by(mut self, name: impl Into<String>) -> Self {
        self.group_by = Some(name.into());
        self
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Page number with the 1-based floor applied
    pub fn effective_page(&self) -> usize {
        self.page.max(1)
    }

    /// Whether any search term or filter narrows the collection
    pub fn is_narrowed(&self) -> bool {
        !self.search_term.trim().is_empty() || !self.filters.is_empty()
    }
}
