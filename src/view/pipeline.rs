//! View pipeline: filter, sort, group, paginate
//!
//! ```text
//! items ──► validate ──► filter ──► sort ──► group ──► paginate ──► ViewResult
//!             │            │          │         │          │
//!             │            │          │         │          └─ Global | PerGroup
//!             │            │          │         └─ first-seen order, stable
//!             │            │          └─ stable, Desc = reversed Asc
//!             │            └─ search term AND every criterion
//!             └─ page_size, sort key, filters, grouping must be known
//! ```
//!
//! Every stage is pure. The stage order is fixed: grouping relies on the
//! sorted order, and pagination relies on the grouped order.

use super::comparator::compare_values;
use super::criteria::{Criterion, ViewCriteria};
use super::grouping::{Group, group_by, single_group};
use super::pagination::{PageWindow, PaginationPolicy};
use super::predicate::{date_in_range, field_equals, text_matches};
use super::spec::{FilterField, ViewSpec};
use crate::core::ViewError;
use serde::Serialize;

/// Output of one view computation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewResult<R> {
    pub groups: Vec<Group<R>>,

    /// Items that passed the filters, before pagination
    pub total_matched: usize,

    pub total_pages: usize,

    /// Effective page (after clamping 0 to 1)
    pub page: usize,

    pub page_size: usize,
}

impl<R> ViewResult<R> {
    /// Items on this page across all groups, in display order
    pub fn items(&self) -> impl Iterator<Item = &R> {
        self.groups.iter().flat_map(|g| g.items.iter())
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(Group::is_empty)
    }

    /// Whether nothing matched at all (the "no results" state)
    pub fn no_results(&self) -> bool {
        self.total_matched == 0
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Apply `f` to every item, keeping the group structure
    pub fn map<U>(self, mut f: impl FnMut(R) -> U) -> ViewResult<U> {
        ViewResult {
            groups: self.groups.into_iter().map(|g| g.map(&mut f)).collect(),
            total_matched: self.total_matched,
            total_pages: self.total_pages,
            page: self.page,
            page_size: self.page_size,
        }
    }
}

impl<R: Clone> ViewResult<&R> {
    /// Detach the result from the input collection
    pub fn cloned(self) -> ViewResult<R> {
        self.map(Clone::clone)
    }
}

/// Check criteria against the view spec without computing anything
pub fn validate<T>(spec: &ViewSpec<T>, criteria: &ViewCriteria) -> Result<(), ViewError> {
    if criteria.page_size == 0 {
        return Err(ViewError::InvalidPageSize {
            page_size: criteria.page_size,
        });
    }
    if let Some(key) = criteria.sort_key.as_ref().filter(|k| !spec.has_sort_key(k)) {
        return Err(ViewError::UnknownSortKey { key: key.clone() });
    }
    if let Some(name) = criteria.filters.keys().find(|name| !spec.has_filter(name)) {
        return Err(ViewError::UnknownFilter { name: name.clone() });
    }
    if let Some(name) = criteria.group_by.as_ref().filter(|n| !spec.has_grouping(n)) {
        return Err(ViewError::UnknownGrouping { name: name.clone() });
    }
    Ok(())
}

/// Compute the view of `items` for `criteria`
///
/// Returns references into `items`; use [`ViewResult::cloned`] to detach.
pub fn compute_view<'a, T>(
    items: &'a [T],
    spec: &ViewSpec<T>,
    criteria: &ViewCriteria,
) -> Result<ViewResult<&'a T>, ViewError> {
    if let Err(err) = validate(spec, criteria) {
        tracing::warn!(view = spec.name(), error = %err, "rejected view criteria");
        return Err(err);
    }

    let filtered = filter_items(items, spec, criteria);
    let sorted = sort_items(filtered, spec, criteria);
    let total_matched = sorted.len();
    let groups = group_items(sorted, spec, criteria);
    let result = paginate(groups, total_matched, spec.pagination, criteria);

    tracing::debug!(
        view = spec.name(),
        input = items.len(),
        matched = result.total_matched,
        groups = result.groups.len(),
        page = result.page,
        total_pages = result.total_pages,
        "computed view"
    );

    Ok(result)
}

fn filter_items<'a, T>(items: &'a [T], spec: &ViewSpec<T>, criteria: &ViewCriteria) -> Vec<&'a T> {
    // validate() has already guaranteed every filter name resolves
    let active: Vec<(&FilterField<T>, &Criterion)> = criteria
        .filters
        .iter()
        .filter_map(|(name, criterion)| spec.filters.get(name).map(|f| (f, criterion)))
        .collect();

    items
        .iter()
        .filter(|item| text_matches(*item, &spec.search, &criteria.search_term))
        .filter(|item| active.iter().all(|(field, criterion)| criterion_holds(*item, field, criterion)))
        .collect()
}

fn criterion_holds<T>(item: &T, field: &FilterField<T>, criterion: &Criterion) -> bool {
    let value = (field.extract)(item);
    match criterion {
        Criterion::Equals(expected) => field_equals(&value, Some(expected), field.case_insensitive),
        Criterion::DateRange {
            on_or_after,
            before,
        } => date_in_range(&value, *on_or_after, *before),
    }
}

fn sort_items<'a, T>(items: Vec<&'a T>, spec: &ViewSpec<T>, criteria: &ViewCriteria) -> Vec<&'a T> {
    let Some(extract) = criteria
        .sort_key
        .as_ref()
        .and_then(|key| spec.sort_keys.get(key))
    else {
        return items;
    };

    // Extract each key once; sort_by is stable
    let mut keyed: Vec<_> = items.into_iter().map(|item| (extract(item), item)).collect();
    keyed.sort_by(|(a, _), (b, _)| compare_values(a, b, criteria.sort_order));
    keyed.into_iter().map(|(_, item)| item).collect()
}

fn group_items<'a, T>(items: Vec<&'a T>, spec: &ViewSpec<T>, criteria: &ViewCriteria) -> Vec<Group<&'a T>> {
    let Some(grouping) = criteria
        .group_by
        .as_ref()
        .and_then(|name| spec.groupings.get(name))
    else {
        return if items.is_empty() {
            Vec::new()
        } else {
            vec![single_group(items)]
        };
    };

    group_by(
        items,
        |item| (grouping.key_of)(*item),
        |key| (grouping.label_for)(key),
        &spec.unassigned_label,
    )
}

fn paginate<R>(
    groups: Vec<Group<R>>,
    total_matched: usize,
    policy: PaginationPolicy,
    criteria: &ViewCriteria,
) -> ViewResult<R> {
    let page = criteria.effective_page();
    let page_size = criteria.page_size;

    match policy {
        PaginationPolicy::Global => paginate_global(groups, total_matched, page, page_size),
        PaginationPolicy::PerGroup => paginate_per_group(groups, total_matched, page, page_size),
    }
}

fn paginate_global<R>(
    groups: Vec<Group<R>>,
    total_matched: usize,
    page: usize,
    page_size: usize,
) -> ViewResult<R> {
    let window = PageWindow::new(page, page_size, total_matched);

    // Walk groups in order, keeping the part of each that overlaps the window
    let mut offset = 0;
    let mut paged = Vec::new();
    for group in groups {
        let group_start = offset;
        let group_end = offset + group.total;
        offset = group_end;

        let from = window.start.max(group_start);
        let to = window.end.min(group_end);
        if from >= to {
            continue;
        }

        let total = group.total;
        let mut kept = Group::new(group.key, group.label, Vec::with_capacity(to - from));
        kept.items.extend(
            group
                .items
                .into_iter()
                .skip(from - group_start)
                .take(to - from),
        );
        kept.total = total;
        kept.total_pages = total.div_ceil(page_size);
        paged.push(kept);
    }

    ViewResult {
        groups: paged,
        total_matched,
        total_pages: window.total_pages,
        page: window.page,
        page_size,
    }
}

fn paginate_per_group<R>(
    groups: Vec<Group<R>>,
    total_matched: usize,
    page: usize,
    page_size: usize,
) -> ViewResult<R> {
    let total_pages = groups
        .iter()
        .map(|g| g.total.div_ceil(page_size))
        .max()
        .unwrap_or(0);

    if page > total_pages {
        return ViewResult {
            groups: Vec::new(),
            total_matched,
            total_pages,
            page,
            page_size,
        };
    }

    let paged = groups
        .into_iter()
        .map(|group| {
            let window = PageWindow::new(page, page_size, group.total);
            let total = group.total;
            let mut kept = Group::new(group.key, group.label, Vec::with_capacity(window.len()));
            kept.items.extend(group.items.into_iter().skip(window.start).take(window.len()));
            kept.total = total;
            kept.total_pages = window.total_pages;
            kept
        })
        .collect();

    ViewResult {
        groups: paged,
        total_matched,
        total_pages,
        page,
        page_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FieldValue;
    use crate::view::criteria::SortOrder;
    use crate::view::grouping::GroupKey;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        property: Option<&'static str>,
        amount: i64,
    }

    fn row(id: u32, property: Option<&'static str>, amount: i64) -> Row {
        Row {
            id,
            property,
            amount,
        }
    }

    fn spec(policy: PaginationPolicy) -> ViewSpec<Row> {
        ViewSpec::new("rows")
            .filter("property", |r: &Row| FieldValue::from(r.property))
            .sort_key("amount", |r: &Row| FieldValue::Integer(r.amount))
            .grouping(
                "property",
                |r: &Row| r.property.map(str::to_string),
                |k| format!("Park {}", k),
            )
            .pagination(policy)
    }

    fn ids(result: &ViewResult<&Row>) -> Vec<u32> {
        result.items().map(|r| r.id).collect()
    }

    #[test]
    fn test_global_pagination_regroups_slice() {
        let rows = vec![
            row(1, Some("A"), 0),
            row(2, Some("B"), 0),
            row(3, Some("A"), 0),
            row(4, Some("C"), 0),
        ];
        let criteria = ViewCriteria::new().group_by("property").page_size(2).page(1);
        let result = compute_view(&rows, &spec(PaginationPolicy::Global), &criteria).unwrap();

        // Group order A, B, C; flattened: 1, 3, 2, 4
        assert_eq!(ids(&result), vec![1, 3]);
        assert_eq!(result.groups.len(), 1);
        assert_eq!(result.groups[0].key, GroupKey::Key("A".into()));
        assert_eq!(result.total_pages, 2);

        let second = compute_view(&rows, &spec(PaginationPolicy::Global), &criteria.clone().page(2)).unwrap();
        assert_eq!(ids(&second), vec![2, 4]);
        assert_eq!(second.groups.len(), 2);
        assert_eq!(second.groups[0].label, "Park B");
    }

    #[test]
    fn test_global_slice_spanning_group_boundary_keeps_group_totals() {
        let rows = vec![
            row(1, Some("A"), 0),
            row(2, Some("A"), 0),
            row(3, Some("A"), 0),
            row(4, Some("B"), 0),
        ];
        let criteria = ViewCriteria::new().group_by("property").page_size(2).page(2);
        let result = compute_view(&rows, &spec(PaginationPolicy::Global), &criteria).unwrap();
        assert_eq!(ids(&result), vec![3, 4]);
        assert_eq!(result.groups[0].total, 3);
        assert_eq!(result.groups[0].len(), 1);
    }

    #[test]
    fn test_per_group_pagination_pages_each_group() {
        let rows = vec![
            row(1, Some("A"), 0),
            row(2, Some("A"), 0),
            row(3, Some("A"), 0),
            row(4, Some("B"), 0),
        ];
        let criteria = ViewCriteria::new().group_by("property").page_size(2);
        let result = compute_view(&rows, &spec(PaginationPolicy::PerGroup), &criteria).unwrap();
        assert_eq!(result.total_pages, 2);
        assert_eq!(result.groups[0].items.len(), 2);
        assert_eq!(result.groups[1].items.len(), 1);

        let second = compute_view(&rows, &spec(PaginationPolicy::PerGroup), &criteria.clone().page(2)).unwrap();
        assert_eq!(second.groups.len(), 2);
        assert_eq!(ids(&second), vec![3]);
        assert!(second.groups[1].is_empty());
        assert_eq!(second.groups[1].total, 1);

        let third = compute_view(&rows, &spec(PaginationPolicy::PerGroup), &criteria.page(3)).unwrap();
        assert!(third.groups.is_empty());
        assert_eq!(third.total_matched, 4);
    }

    #[test]
    fn test_sort_then_group_preserves_sorted_order_within_group() {
        let rows = vec![
            row(1, Some("A"), 5),
            row(2, Some("B"), 9),
            row(3, Some("A"), 7),
        ];
        let criteria = ViewCriteria::new()
            .group_by("property")
            .sort("amount", SortOrder::Desc);
        let result = compute_view(&rows, &spec(PaginationPolicy::Global), &criteria).unwrap();
        // Sorted: 2(9), 3(7), 1(5); first-seen groups: B, A
        assert_eq!(result.groups[0].key, GroupKey::Key("B".into()));
        assert_eq!(ids(&result), vec![2, 3, 1]);
    }

    #[test]
    fn test_empty_input_yields_no_groups() {
        let rows: Vec<Row> = Vec::new();
        let result = compute_view(&rows, &spec(PaginationPolicy::Global), &ViewCriteria::new()).unwrap();
        assert!(result.groups.is_empty());
        assert!(result.no_results());
        assert_eq!(result.total_pages, 0);
    }

    #[test]
    fn test_unknown_names_are_rejected() {
        let rows = vec![row(1, None, 0)];
        let spec = spec(PaginationPolicy::Global);

        let err = compute_view(&rows, &spec, &ViewCriteria::new().sort("size", SortOrder::Asc)).unwrap_err();
        assert_eq!(err, ViewError::UnknownSortKey { key: "size".into() });

        let err = compute_view(
            &rows,
            &spec,
            &ViewCriteria::new().filter("status", Criterion::equals("ACTIVE")),
        )
        .unwrap_err();
        assert_eq!(err, ViewError::UnknownFilter { name: "status".into() });

        let err = compute_view(&rows, &spec, &ViewCriteria::new().group_by("tenant")).unwrap_err();
        assert_eq!(err, ViewError::UnknownGrouping { name: "tenant".into() });
    }

    #[test]
    fn test_cloned_detaches_result() {
        let rows = vec![row(1, Some("A"), 3)];
        let owned: ViewResult<Row> = compute_view(&rows, &spec(PaginationPolicy::Global), &ViewCriteria::new())
            .unwrap()
            .cloned();
        drop(rows);
        assert_eq!(owned.groups[0].items[0].id, 1);
    }
}
