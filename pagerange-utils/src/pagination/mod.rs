//! Stable facade for pagination helpers used by front ends.

/// Neighbouring pages shown on each side of the current page when unset.
pub const DEFAULT_SIBLING_COUNT: usize = 1;

mod memo;
mod nav;
mod page;
pub mod range;

pub use memo::RangeMemo;
pub use nav::{PageNav, page_nav};
pub use page::{clamp_page, page_window, parse_one_based_page, total_pages};
pub use range::{PageMarker, PaginationOptions, PaginationRange, RangeError, compute_range};
