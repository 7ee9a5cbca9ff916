//! Page boundary arithmetic

use serde::Serialize;

/// Which scope pagination applies to when results are grouped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaginationPolicy {
    /// Page through the concatenation of all groups, then regroup the slice
    #[default]
    Global,
    /// Page each group on its own, as when every group is its own table
    PerGroup,
}

/// Pagination window for one page over `total` items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    /// Current page number (starts at 1)
    pub page: usize,

    /// Number of items per page
    pub page_size: usize,

    /// Total number of items (after filters)
    pub total: usize,

    /// Total number of pages
    pub total_pages: usize,

    /// First index on this page, capped to `total`
    pub start: usize,

    /// One past the last index on this page
    pub end: usize,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_prev: bool,
}

impl PageWindow {
    /// Compute the window; `page` 0 counts as 1.
    ///
    /// `page_size` must be positive. The view pipeline rejects 0 before
    /// getting here; a stray 0 is treated as 1 rather than dividing by zero.
    pub fn new(page: usize, page_size: usize, total: usize) -> Self {
        let page = page.max(1);
        let page_size = page_size.max(1);
        let total_pages = total.div_ceil(page_size);
        let start = (page - 1).saturating_mul(page_size).min(total);
        let end = start.saturating_add(page_size).min(total);

        Self {
            page,
            page_size,
            total,
            total_pages,
            start,
            end,
            has_next: end < total,
            has_prev: page > 1,
        }
    }

    /// Whether the requested page lies past the last one
    pub fn is_beyond_end(&self) -> bool {
        self.page > self.total_pages
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Borrow this page's slice of `items`
    pub fn slice<'a, R>(&self, items: &'a [R]) -> &'a [R] {
        let end = self.end.min(items.len());
        let start = self.start.min(end);
        &items[start..end]
    }
}
