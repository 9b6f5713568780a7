//! Page math shared by the post and preview listings.
//!
//! Pages are 0-indexed. An empty listing still has one (empty) page.

use serde::Serialize;
use std::ops::Range;

/// Navigation fields of a page envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub has_next: bool,
    pub has_previous: bool,
    /// Present only when `has_next`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<usize>,
    /// Present only when `has_previous`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_page: Option<usize>,
}

/// One page: its envelope fields and the item range it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSpan {
    pub info: PaginationInfo,
    pub range: Range<usize>,
}

/// `max(1, ceil(total / page_size))`
pub fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// Split `total` items into pages of `page_size`.
pub fn paginate(total: usize, page_size: usize) -> Vec<PageSpan> {
    let page_size = page_size.max(1);
    let total_pages = total_pages(total, page_size);

    (0..total_pages)
        .map(|page| {
            let start = (page * page_size).min(total);
            let end = (start + page_size).min(total);
            let has_next = page + 1 < total_pages;
            let has_previous = page > 0;

            PageSpan {
                info: PaginationInfo {
                    page,
                    total_pages,
                    total_items: total,
                    has_next,
                    has_previous,
                    next_page: has_next.then_some(page + 1),
                    prev_page: has_previous.then(|| page - 1),
                },
                range: start..end,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twenty_five_items_in_pages_of_ten() {
        let pages = paginate(25, 10);
        assert_eq!(pages.len(), 3);

        let last = &pages[2];
        assert_eq!(last.range, 20..25);
        assert_eq!(last.range.len(), 5);
        assert!(!last.info.has_next);
        assert!(last.info.has_previous);
        assert_eq!(last.info.next_page, None);
        assert_eq!(last.info.prev_page, Some(1));

        let first = &pages[0];
        assert_eq!(first.range, 0..10);
        assert!(first.info.has_next);
        assert!(!first.info.has_previous);
        assert_eq!(first.info.next_page, Some(1));
        assert_eq!(first.info.prev_page, None);
    }

    #[test]
    fn test_empty_listing_has_one_page() {
        let pages = paginate(0, 10);
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].range, 0..0);
        assert_eq!(pages[0].info.total_pages, 1);
        assert!(!pages[0].info.has_next);
        assert!(!pages[0].info.has_previous);
    }

    #[test]
    fn test_page_math_holds_for_many_sizes() {
        for total in 0..40 {
            for size in 1..12 {
                let pages = paginate(total, size);
                let expected = if total == 0 { 1 } else { total.div_ceil(size) };
                assert_eq!(pages.len(), expected);
                assert_eq!(total_pages(total, size), expected);

                let last = pages.last().unwrap();
                assert_eq!(last.range.len(), total - size * (expected - 1));

                let covered: usize = pages.iter().map(|p| p.range.len()).sum();
                assert_eq!(covered, total);

                for (index, span) in pages.iter().enumerate() {
                    assert_eq!(span.info.page, index);
                    assert_eq!(span.info.has_next, span.info.next_page.is_some());
                    assert_eq!(span.info.has_previous, span.info.prev_page.is_some());
                }
            }
        }
    }

    #[test]
    fn test_wire_shape_omits_absent_neighbours() {
        let pages = paginate(5, 10);
        let json = serde_json::to_value(pages[0].info).unwrap();

        assert_eq!(json["page"], 0);
        assert_eq!(json["totalPages"], 1);
        assert_eq!(json["totalItems"], 5);
        assert_eq!(json["hasNext"], false);
        assert!(json.get("nextPage").is_none());
        assert!(json.get("prevPage").is_none());
    }
}
