//! Text and JSON renderings of a computed range.

use std::ops::Range;

use serde::Serialize;

use pagerange_utils::pagination::{PageMarker, PageNav};

/// Machine-readable summary printed with `--json`.
#[derive(Debug, Serialize)]
pub struct RangeReport<'a> {
    pub total_pages: usize,
    pub current_page: usize,
    pub range: &'a [PageMarker],
    pub nav: PageNav,
    /// Zero-based `[start, end)` item indices on the current page.
    pub items: Range<usize>,
}

/// Join markers with spaces, bracketing the current page.
pub fn format_range(range: &[PageMarker], current_page: usize) -> String {
    range
        .iter()
        .map(|marker| match marker {
            PageMarker::Page(page) if *page == current_page => format!("[{page}]"),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use pagerange_utils::pagination::PageMarker::{Ellipsis, Page};

    use super::*;

    #[test]
    fn current_page_is_bracketed() {
        let range = [Page(1), Ellipsis, Page(24), Page(25), Page(26), Ellipsis, Page(50)];
        assert_eq!(format_range(&range, 25), "1 … 24 [25] 26 … 50");
    }

    #[test]
    fn empty_range_renders_empty() {
        assert_eq!(format_range(&[], 1), "");
    }

    #[test]
    fn report_serializes_markers_and_nav() {
        let range = [Page(1), Page(2)];
        let report = RangeReport {
            total_pages: 2,
            current_page: 1,
            range: &range,
            nav: PageNav {
                prev: None,
                next: Some(2),
            },
            items: 0..10,
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["range"][1]["page"], 2);
        assert_eq!(json["nav"]["next"], 2);
        assert!(json["nav"]["prev"].is_null());
        assert_eq!(json["items"]["start"], 0);
        assert_eq!(json["items"]["end"], 10);
    }
}
