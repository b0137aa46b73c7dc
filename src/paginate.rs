//! Pagination Calculator.
//!
//! Computes a bounded window into an ordered collection. Page numbers are
//! 1-based and requests outside `1..=total_pages` are rejected rather than
//! clamped: an out-of-range page is treated like a missing resource.
//!
//! `total_pages` is floored at 1, so page 1 of an empty collection is valid
//! and yields an empty window.
//!
//! ```text
//! 11 items, 6 per page
//! page 1 → [0..6)   featured = item 0, regular = items 1..6
//! page 2 → [6..11)  featured = none,   regular = items 6..11
//! page 3 → OutOfRange
//! ```

use crate::routes::RouteError;
use std::num::NonZeroUsize;
use std::ops::RangeInclusive;

/// Page size of the resources index.
pub const RESOURCES_PER_PAGE: NonZeroUsize = match NonZeroUsize::new(6) {
    Some(n) => n,
    None => panic!("page size must be non-zero"),
};

/// Index bounds of one page, independent of the items themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageBounds {
    pub page: usize,
    pub total_pages: usize,
    /// First index of the window (inclusive).
    pub start: usize,
    /// End of the window (exclusive), clipped to the item count.
    pub end: usize,
}

impl PageBounds {
    /// Page 1 with at least one item puts its first item in the featured slot.
    pub fn has_featured(&self) -> bool {
        self.page == 1 && self.end > self.start
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Number of pages for `total_items`, never less than 1.
pub fn total_pages(total_items: usize, page_size: NonZeroUsize) -> usize {
    total_items.div_ceil(page_size.get()).max(1)
}

pub fn paginate(
    total_items: usize,
    page_size: NonZeroUsize,
    requested_page: i64,
) -> Result<PageBounds, RouteError> {
    let total_pages = total_pages(total_items, page_size);
    let out_of_range = || RouteError::OutOfRange {
        requested: requested_page.to_string(),
        total_pages,
    };
    let page = usize::try_from(requested_page).map_err(|_| out_of_range())?;
    if page < 1 || page > total_pages {
        return Err(out_of_range());
    }

    let start = ((page - 1) * page_size.get()).min(total_items);
    let end = (start + page_size.get()).min(total_items);
    Ok(PageBounds {
        page,
        total_pages,
        start,
        end,
    })
}

/// Paginate from a raw `?page=` value.
///
/// A missing or empty value means page 1. Anything that is not an integer
/// (`"abc"`, `"1.5"`) is out of range.
pub fn paginate_query(
    total_items: usize,
    page_size: NonZeroUsize,
    raw_page: Option<&str>,
) -> Result<PageBounds, RouteError> {
    let raw = raw_page.map(str::trim).unwrap_or("");
    if raw.is_empty() {
        return paginate(total_items, page_size, 1);
    }
    match raw.parse::<i64>() {
        Ok(page) => paginate(total_items, page_size, page),
        Err(_) => Err(RouteError::OutOfRange {
            requested: raw.to_string(),
            total_pages: total_pages(total_items, page_size),
        }),
    }
}

/// One page of items, split into the featured item and the regular rest.
#[derive(Debug, Clone, Copy)]
pub struct PageWindow<'a, T> {
    pub bounds: PageBounds,
    /// Every item on this page, featured included.
    pub items: &'a [T],
    pub featured: Option<&'a T>,
    pub regular: &'a [T],
}

impl<'a, T> PageWindow<'a, T> {
    pub fn new(items: &'a [T], bounds: PageBounds) -> Self {
        let window = &items[bounds.start..bounds.end];
        let (featured, regular) = match window.split_first() {
            Some((first, rest)) if bounds.has_featured() => (Some(first), rest),
            _ => (None, window),
        };
        Self {
            bounds,
            items: window,
            featured,
            regular,
        }
    }

    pub fn page(&self) -> usize {
        self.bounds.page
    }

    pub fn total_pages(&self) -> usize {
        self.bounds.total_pages
    }

    pub fn prev_page(&self) -> Option<usize> {
        (self.bounds.page > 1).then(|| self.bounds.page - 1)
    }

    pub fn next_page(&self) -> Option<usize> {
        (self.bounds.page < self.bounds.total_pages).then(|| self.bounds.page + 1)
    }

    pub fn page_numbers(&self) -> RangeInclusive<usize> {
        1..=self.bounds.total_pages
    }
}

pub fn paginate_items<T>(
    items: &[T],
    page_size: NonZeroUsize,
    requested_page: i64,
) -> Result<PageWindow<'_, T>, RouteError> {
    let bounds = paginate(items.len(), page_size, requested_page)?;
    Ok(PageWindow::new(items, bounds))
}
