//! Caller-side list screen state
//!
//! A `ListScreen` is what a page component holds: the fetched records, the
//! screen's spec and the current criteria. Every mutation is followed by a
//! fresh [`compute_view`] when the screen is rendered.

use super::criteria::{Criterion, SortOrder, ViewCriteria};
use super::pipeline::{ViewResult, compute_view};
use super::spec::ViewSpec;
use crate::config::ScreenConfig;
use crate::core::{ParkError, Record, ResourceService, ViewError};

pub struct ListScreen<T: Record> {
    spec: ViewSpec<T>,
    criteria: ViewCriteria,
    items: Vec<T>,
}

impl<T: Record> ListScreen<T> {
    pub fn new(spec: ViewSpec<T>) -> Self {
        Self {
            spec,
            criteria: ViewCriteria::default(),
            items: Vec::new(),
        }
    }

    /// Build a screen with configured defaults applied
    ///
    /// Settings left unset keep the view spec's own choice. Configured names
    /// the view spec does not know are dropped with a warning so a stale
    /// config cannot break the screen.
    pub fn from_config(spec: ViewSpec<T>, config: &ScreenConfig) -> Result<Self, ViewError> {
        if config.page_size == 0 {
            return Err(ViewError::InvalidPageSize { page_size: 0 });
        }

        let mut spec = spec;
        if let Some(policy) = config.pagination {
            spec = spec.pagination(policy);
        }
        if let Some(label) = &config.unassigned_label {
            spec = spec.unassigned_label(label.clone());
        }

        let mut criteria = ViewCriteria::new().page_size(config.page_size);
        criteria.sort_order = config.sort_order;
        match &config.sort_key {
            Some(key) if spec.has_sort_key(key) => criteria.sort_key = Some(key.clone()),
            Some(key) => tracing::warn!(view = spec.name(), key = %key, "ignoring unknown configured sort key"),
            None => {}
        }
        match &config.group_by {
            Some(name) if spec.has_grouping(name) => criteria.group_by = Some(name.clone()),
            Some(name) => tracing::warn!(view = spec.name(), grouping = %name, "ignoring unknown configured grouping"),
            None => {}
        }

        Ok(Self {
            spec,
            criteria,
            items: Vec::new(),
        })
    }

    pub fn spec(&self) -> &ViewSpec<T> {
        &self.spec
    }

    pub fn criteria(&self) -> &ViewCriteria {
        &self.criteria
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Replace the records, keeping criteria but returning to page 1
    pub fn replace_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.criteria.page = 1;
    }

    /// Re-fetch the records from the backend
    pub async fn refresh(&mut self, service: &dyn ResourceService<T>) -> Result<(), ParkError> {
        match service.list().await {
            Ok(items) => {
                tracing::debug!(view = self.spec.name(), count = items.len(), "refreshed records");
                self.replace_items(items);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(view = self.spec.name(), error = %err, "failed to refresh records");
                Err(err.into())
            }
        }
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.criteria.search_term = term.into();
        self.criteria.page = 1;
    }

    /// Set or clear (`None`) one filter dimension
    pub fn set_filter(&mut self, name: &str, criterion: Option<Criterion>) -> Result<(), ViewError> {
        if !self.spec.has_filter(name) {
            return Err(ViewError::UnknownFilter {
                name: name.to_string(),
            });
        }
        match criterion {
            Some(c) => {
                self.criteria.filters.insert(name.to_string(), c);
            }
            None => {
                self.criteria.filters.shift_remove(name);
            }
        }
        self.criteria.page = 1;
        Ok(())
    }

    pub fn clear_filters(&mut self) {
        self.criteria.filters.clear();
        self.criteria.search_term.clear();
        self.criteria.page = 1;
    }

    /// Column-header behaviour: the active key flips direction, a new key
    /// starts ascending
    pub fn toggle_sort(&mut self, key: &str) -> Result<SortOrder, ViewError> {
        if !self.spec.has_sort_key(key) {
            return Err(ViewError::UnknownSortKey {
                key: key.to_string(),
            });
        }
        if self.criteria.sort_key.as_deref() == Some(key) {
            self.criteria.sort_order = self.criteria.sort_order.flipped();
        } else {
            self.criteria.sort_key = Some(key.to_string());
            self.criteria.sort_order = SortOrder::Asc;
        }
        Ok(self.criteria.sort_order)
    }

    pub fn set_page(&mut self, page: usize) {
        self.criteria.page = page.max(1);
    }

    pub fn set_page_size(&mut self, page_size: usize) -> Result<(), ViewError> {
        if page_size == 0 {
            return Err(ViewError::InvalidPageSize { page_size });
        }
        self.criteria.page_size = page_size;
        self.criteria.page = 1;
        Ok(())
    }

    pub fn set_group_by(&mut self, grouping: Option<&str>) -> Result<(), ViewError> {
        if let Some(name) = grouping.filter(|n| !self.spec.has_grouping(n)) {
            return Err(ViewError::UnknownGrouping {
                name: name.to_string(),
            });
        }
        self.criteria.group_by = grouping.map(str::to_string);
        self.criteria.page = 1;
        Ok(())
    }

    /// Compute the view for the current state
    pub fn view(&self) -> Result<ViewResult<&T>, ViewError> {
        compute_view(&self.items, &self.spec, &self.criteria)
    }

    /// Options for a filter dropdown
    pub fn filter_options(&self, name: &str) -> Vec<String> {
        self.spec.distinct_values(&self.items, name)
    }
}

impl<T: Record> std::fmt::Debug for ListScreen<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListScreen")
            .field("spec", &self.spec)
            .field("criteria", &self.criteria)
            .field("items", &self.items.len())
            .finish()
    }
}
