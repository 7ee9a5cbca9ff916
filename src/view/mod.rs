//! Collection view engine
//!
//! Filtering, sorting, grouping and pagination of records already fetched
//! from the backend. The engine is stateless: callers keep a
//! [`ViewCriteria`] and call [`compute_view`] whenever it changes, or let a
//! [`ListScreen`] do that bookkeeping.

pub mod comparator;
pub mod criteria;
pub mod grouping;
pub mod pagination;
pub mod pipeline;
pub mod predicate;
pub mod screen;
pub mod spec;

pub use comparator::{compare_by, compare_values};
pub use criteria::{Criterion, DEFAULT_PAGE_SIZE, SortOrder, ViewCriteria};
pub use grouping::{Group, GroupKey, UNASSIGNED_LABEL, group_by, single_group};
pub use pagination::{PageWindow, PaginationPolicy};
pub use pipeline::{ViewResult, compute_view, validate};
pub use predicate::{date_before, date_in_range, date_on_or_after, field_equals, text_matches};
pub use screen::ListScreen;
pub use spec::ViewSpec;
