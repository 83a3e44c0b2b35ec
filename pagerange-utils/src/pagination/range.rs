//! Page-range shaping: which page numbers and gap markers a pager shows.
//!
//! The range always keeps the first and last page reachable and shows
//! `sibling_count` pages on each side of the current page. Each hidden run
//! collapses into a single [`PageMarker::Ellipsis`].

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::DEFAULT_SIBLING_COUNT;
use super::page::total_pages;

/// Fixed slots besides the siblings: first, last, current, and two ellipses.
const FIXED_SLOTS: usize = 5;

/// One entry of a rendered pager, in left-to-right order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageMarker {
    /// A concrete, one-based page number.
    Page(usize),
    /// An elided run of page numbers.
    Ellipsis,
}

impl PageMarker {
    /// The page number, if this marker is a concrete page.
    pub fn page(self) -> Option<usize> {
        match self {
            Self::Page(page) => Some(page),
            Self::Ellipsis => None,
        }
    }

    pub fn is_ellipsis(self) -> bool {
        matches!(self, Self::Ellipsis)
    }
}

impl fmt::Display for PageMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(page) => write!(f, "{page}"),
            Self::Ellipsis => f.write_str("…"),
        }
    }
}

/// Ordered markers for one pager render.
pub type PaginationRange = Vec<PageMarker>;

/// Inputs for [`compute_range`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaginationOptions {
    /// Total number of items being paginated.
    pub total_count: usize,
    /// Items per page. Must be non-zero.
    pub page_size: usize,
    /// Pages shown on each side of the current page.
    #[serde(default = "default_sibling_count")]
    pub sibling_count: usize,
    /// Currently selected page, one-based. Not bounds-checked.
    pub current_page: usize,
}

fn default_sibling_count() -> usize {
    DEFAULT_SIBLING_COUNT
}

impl PaginationOptions {
    /// Options with the default sibling count.
    pub fn new(total_count: usize, page_size: usize, current_page: usize) -> Self {
        Self {
            total_count,
            page_size,
            sibling_count: DEFAULT_SIBLING_COUNT,
            current_page,
        }
    }

    pub fn with_sibling_count(mut self, sibling_count: usize) -> Self {
        self.sibling_count = sibling_count;
        self
    }

    /// `ceil(total_count / page_size)`.
    pub fn total_page_count(&self) -> usize {
        total_pages(self.total_count, self.page_size)
    }
}

/// Failure building a pagination range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("page size must be at least 1 (got {0})")]
    InvalidPageSize(usize),
}

/// Compute the markers a pager should display for `options`.
///
/// Only a zero page size is rejected. A current page outside
/// `[1, total_page_count]` still produces a best-effort range.
pub fn compute_range(options: &PaginationOptions) -> Result<PaginationRange, RangeError> {
    if options.page_size == 0 {
        return Err(RangeError::InvalidPageSize(options.page_size));
    }

    let PaginationOptions {
        sibling_count,
        current_page,
        ..
    } = *options;
    let total_page_count = options.total_page_count();
    let total_page_numbers = sibling_count.saturating_add(FIXED_SLOTS);

    if total_page_numbers >= total_page_count {
        return Ok(pages(1, total_page_count));
    }

    let left_sibling_index = current_page.saturating_sub(sibling_count).max(1);
    let right_sibling_index = current_page
        .saturating_add(sibling_count)
        .min(total_page_count);

    let show_left_dots = left_sibling_index > 2;
    let show_right_dots = right_sibling_index < total_page_count.saturating_sub(2);

    // Width of the edge block when only one side is truncated. Wide windows
    // are cut so the block never overlaps the page kept beyond the ellipsis.
    let edge_item_count = sibling_count.saturating_mul(2).saturating_add(2);

    let range = match (show_left_dots, show_right_dots) {
        (false, true) => {
            let mut range = pages(1, edge_item_count.min(total_page_count - 2));
            range.extend([PageMarker::Ellipsis, PageMarker::Page(total_page_count)]);
            range
        }
        (true, false) => {
            let mut range = vec![PageMarker::Page(1), PageMarker::Ellipsis];
            let first = (total_page_count.saturating_sub(edge_item_count) + 1).max(3);
            range.extend(pages(first, total_page_count));
            range
        }
        (true, true) => {
            let mut range = vec![PageMarker::Page(1), PageMarker::Ellipsis];
            range.extend(pages(left_sibling_index, right_sibling_index));
            range.extend([PageMarker::Ellipsis, PageMarker::Page(total_page_count)]);
            range
        }
        (false, false) => Vec::new(),
    };

    debug!(
        total_page_count,
        current_page,
        sibling_count,
        show_left_dots,
        show_right_dots,
        markers = range.len(),
        "computed pagination range"
    );

    Ok(range)
}

/// Concrete pages `start..=end`; empty when `end < start`.
fn pages(start: usize, end: usize) -> PaginationRange {
    (start..=end).map(PageMarker::Page).collect()
}
