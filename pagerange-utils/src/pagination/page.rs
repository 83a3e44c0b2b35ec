//! Pure page-count math and page-window helpers.

/// Compute the number of pages needed for `item_count` items.
///
/// A zero `per_page` is treated as one item per page.
pub fn total_pages(item_count: usize, per_page: usize) -> usize {
    item_count.div_ceil(per_page.max(1))
}

/// Clamp a requested page into `[1, total_pages]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Return the `[start, end)` item indices shown on a one-based page.
pub fn page_window(total_items: usize, per_page: usize, page: usize) -> (usize, usize) {
    let safe_per_page = per_page.max(1);
    let start = page
        .saturating_sub(1)
        .saturating_mul(safe_per_page)
        .min(total_items);
    let end = start.saturating_add(safe_per_page).min(total_items);
    (start, end)
}

/// Parse a one-based page argument.
///
/// A missing argument means the first page. Zero or non-numeric input yields `None`.
pub fn parse_one_based_page(raw: Option<&str>) -> Option<usize> {
    match raw {
        Some(value) => value.trim().parse::<usize>().ok().filter(|page| *page >= 1),
        None => Some(1),
    }
}
