//! Per-screen view definitions
//!
//! A `ViewSpec` names the fields a screen can search, filter, sort and group
//! on, each as an extractor closure. Screens build one spec up front and
//! reuse it for every recomputation.

use super::grouping::UNASSIGNED_LABEL;
use super::pagination::PaginationPolicy;
use crate::core::FieldValue;
use indexmap::IndexMap;

/// Field accessor registered on a spec
pub type Extractor<T> = Box<dyn Fn(&T) -> FieldValue + Send + Sync>;

/// Group key accessor registered on a spec
pub type KeyExtractor<T> = Box<dyn Fn(&T) -> Option<String> + Send + Sync>;

/// Group label lookup
pub type LabelFn = Box<dyn Fn(&str) -> String + Send + Sync>;

/// A named filter dimension
pub struct FilterField<T> {
    pub(crate) extract: Extractor<T>,
    pub(crate) case_insensitive: bool,
}

/// A named grouping
pub struct Grouping<T> {
    pub(crate) key_of: KeyExtractor<T>,
    pub(crate) label_for: LabelFn,
}

/// Registry of extractors for one list screen
pub struct ViewSpec<T> {
    name: String,
    pub(crate) search: Vec<Extractor<T>>,
    pub(crate) filters: IndexMap<String, FilterField<T>>,
    pub(crate) sort_keys: IndexMap<String, Extractor<T>>,
    pub(crate) groupings: IndexMap<String, Grouping<T>>,
    pub(crate) unassigned_label: String,
    pub(crate) pagination: PaginationPolicy,
}

impl<T> ViewSpec<T> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            search: Vec::new(),
            filters: IndexMap::new(),
            sort_keys: IndexMap::new(),
            groupings: IndexMap::new(),
            unassigned_label: UNASSIGNED_LABEL.to_string(),
            pagination: PaginationPolicy::Global,
        }
    }

    /// Screen name, used in logs and for config lookup
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a field to the free-text search
    pub fn search(mut self, extract: impl Fn(&T) -> FieldValue + Send + Sync + 'static) -> Self {
        self.search.push(Box::new(extract));
        self
    }

    /// Register a case-sensitive filter dimension
    pub fn filter(
        mut self,
        name: impl Into<String>,
        extract: impl Fn(&T) -> FieldValue + Send + Sync + 'static,
    ) -> Self {
        self.filters.insert(
            name.into(),
            FilterField {
                extract: Box::new(extract),
                case_insensitive: false,
            },
        );
        self
    }

    /// Register a filter dimension whose equality ignores case
    pub fn filter_case_insensitive(
        mut self,
        name: impl Into<String>,
        extract: impl Fn(&T) -> FieldValue + Send + Sync + 'static,
    ) -> Self {
        self.filters.insert(
            name.into(),
            FilterField {
                extract: Box::new(extract),
                case_insensitive: true,
            },
        );
        self
    }

    pub fn sort_key(
        mut self,
        name: impl Into<String>,
        extract: impl Fn(&T) -> FieldValue + Send + Sync + 'static,
    ) -> Self {
        self.sort_keys.insert(name.into(), Box::new(extract));
        self
    }

    pub fn grouping(
        mut self,
        name: impl Into<String>,
        key_of: impl Fn(&T) -> Option<String> + Send + Sync + 'static,
        label_for: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> Self {
        self.groupings.insert(
            name.into(),
            Grouping {
                key_of: Box::new(key_of),
                label_for: Box::new(label_for),
            },
        );
        self
    }

    pub fn unassigned_label(mut self, label: impl Into<String>) -> Self {
        self.unassigned_label = label.into();
        self
    }

    pub fn pagination(mut self, policy: PaginationPolicy) -> Self {
        self.pagination = policy;
        self
    }

    pub fn pagination_policy(&self) -> PaginationPolicy {
        self.pagination
    }

    pub fn has_filter(&self, name: &str) -> bool {
        self.filters.contains_key(name)
    }

    pub fn has_sort_key(&self, name: &str) -> bool {
        self.sort_keys.contains_key(name)
    }

    pub fn has_grouping(&self, name: &str) -> bool {
        self.groupings.contains_key(name)
    }

    pub fn filter_names(&self) -> impl Iterator<Item = &str> {
        self.filters.keys().map(String::as_str)
    }

    pub fn sort_key_names(&self) -> impl Iterator<Item = &str> {
        self.sort_keys.keys().map(String::as_str)
    }

    /// Options for a filter dropdown: distinct non-empty values of the
    /// filter's field in first-seen order. List fields contribute each element.
    pub fn distinct_values(&self, items: &[T], filter: &str) -> Vec<String> {
        let Some(field) = self.filters.get(filter) else {
            return Vec::new();
        };
        let mut seen: IndexMap<String, ()> = IndexMap::new();
        for item in items {
            match (field.extract)(item) {
                FieldValue::Null => {}
                FieldValue::List(values) => {
                    for v in values {
                        seen.entry(v).or_insert(());
                    }
                }
                other => {
                    seen.entry(other.text().into_owned()).or_insert(());
                }
            }
        }
        seen.into_keys().filter(|v| !v.is_empty()).collect()
    }
}

impl<T> std::fmt::Debug for ViewSpec<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewSpec")
            .field("name", &self.name)
            .field("search_fields", &self.search.len())
            .field("filters", &self.filters.keys().collect::<Vec<_>>())
            .field("sort_keys", &self.sort_keys.keys().collect::<Vec<_>>())
            .field("groupings", &self.groupings.keys().collect::<Vec<_>>())
            .field("pagination", &self.pagination)
            .finish()
    }
}
