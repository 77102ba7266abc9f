//! Pagination state and the pagination planner.

use crate::domain::Launch;

/// Number of cards on one page.
pub const ITEMS_PER_PAGE: usize = 12;

/// Published pagination state.
///
/// `current_page` is stored as requested and may be out of range; readers go
/// through [`paginate`], which clamps it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub current_page: i64,
    pub items_per_page: usize,
    pub total_pages: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            current_page: 1,
            items_per_page: ITEMS_PER_PAGE,
            total_pages: 1,
        }
    }
}

impl PaginationState {
    pub fn merge(&mut self, update: PaginationUpdate) {
        if let Some(current_page) = update.current_page {
            self.current_page = current_page;
        }
        if let Some(items_per_page) = update.items_per_page {
            self.items_per_page = items_per_page;
        }
        if let Some(total_pages) = update.total_pages {
            self.total_pages = total_pages;
        }
    }
}

/// Partial [`PaginationState`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationUpdate {
    pub current_page: Option<i64>,
    pub items_per_page: Option<usize>,
    pub total_pages: Option<usize>,
}

/// One page of a filtered sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a> {
    pub items: &'a [Launch],
    /// Requested page clamped into `1..=total_pages`.
    pub page: usize,
    pub total_pages: usize,
}

impl Page<'_> {
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Number of pages needed for `count` items; never less than one.
#[must_use]
pub const fn total_pages(count: usize, items_per_page: usize) -> usize {
    let per_page = if items_per_page == 0 { 1 } else { items_per_page };
    let pages = count.div_ceil(per_page);
    if pages == 0 {
        1
    } else {
        pages
    }
}

/// Slices `filtered` into the page nearest to `requested_page`.
///
/// # Examples
///
/// ```
/// use launchdeck::app::pagination::paginate;
/// use launchdeck::domain::{Launch, LaunchOutcome};
///
/// let launches: Vec<Launch> = (0..25)
///     .map(|i| Launch::new(i.to_string(), "x", "2020-01-01T00:00:00Z", LaunchOutcome::Success))
///     .collect();
///
/// let page = paginate(&launches, 12, 3);
/// assert_eq!(page.total_pages, 3);
/// assert_eq!(page.items.len(), 1);
/// assert_eq!(page.items[0].id, "24");
/// ```
#[must_use]
pub fn paginate(filtered: &[Launch], items_per_page: usize, requested_page: i64) -> Page<'_> {
    let per_page = items_per_page.max(1);
    let total_pages = total_pages(filtered.len(), per_page);

    let page = usize::try_from(requested_page.max(1))
        .unwrap_or(usize::MAX)
        .min(total_pages);

    let start = ((page - 1) * per_page).min(filtered.len());
    let end = start.saturating_add(per_page).min(filtered.len());

    Page {
        items: &filtered[start..end],
        page,
        total_pages,
    }
}
