//! Previous/next navigation targets for a pager.

use serde::Serialize;

/// Pages reachable from the current page with a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageNav {
    pub prev: Option<usize>,
    pub next: Option<usize>,
}

/// Compute previous/next targets for `current_page` out of `total_pages`.
///
/// The current page is clamped first, so stale pages still navigate sensibly.
pub fn page_nav(current_page: usize, total_pages: usize) -> PageNav {
    if total_pages <= 1 {
        return PageNav {
            prev: None,
            next: None,
        };
    }

    let current_page = super::clamp_page(current_page, total_pages);

    PageNav {
        prev: (current_page > 1).then(|| current_page - 1),
        next: (current_page < total_pages).then(|| current_page + 1),
    }
}
