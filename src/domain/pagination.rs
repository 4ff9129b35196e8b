//! Page arithmetic: validated page requests, offsets and page metadata.
//!
//! A [`PageRequest`] is the typed result of parsing the loosely-typed
//! `page` / `pageSize` query fields. Absent or unparseable fields take the
//! declared defaults; values below 1 are clamped to 1.

use serde::Serialize;
use utoipa::ToSchema;

/// Page number used when the request does not carry one.
pub const DEFAULT_PAGE: u64 = 1;

/// Page size used when the request does not carry one.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Validated pagination parameters. Both fields are always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    page: u64,
    page_size: u64,
}

impl PageRequest {
    /// Creates a page request, clamping both values to a minimum of 1.
    #[must_use]
    pub const fn new(page: u64, page_size: u64) -> Self {
        Self {
            page: if page == 0 { 1 } else { page },
            page_size: if page_size == 0 { 1 } else { page_size },
        }
    }

    /// Builds a page request from optional signed values as they come off
    /// the wire. `None` selects the default; anything below 1 becomes 1.
    #[must_use]
    pub fn from_optional(page: Option<i64>, page_size: Option<i64>) -> Self {
        Self::new(
            page.map_or(DEFAULT_PAGE, clamp_positive),
            page_size.map_or(DEFAULT_PAGE_SIZE, clamp_positive),
        )
    }

    /// 1-based page number.
    #[must_use]
    pub const fn page(&self) -> u64 {
        self.page
    }

    /// Number of items per page.
    #[must_use]
    pub const fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Number of items to skip before this page begins.
    ///
    /// Saturates at `u64::MAX` rather than overflowing.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.page_size)
    }

    /// Maximum number of items on this page.
    #[must_use]
    pub const fn limit(&self) -> u64 {
        self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_PAGE_SIZE)
    }
}

fn clamp_positive(value: i64) -> u64 {
    u64::try_from(value).map_or(1, |v| v.max(1))
}

/// Pagination metadata attached to list responses.
///
/// ```json
/// { "page": 2, "pageCount": 3, "pageSize": 10, "count": 25 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMetadata {
    /// Current page number (1-based).
    pub page: u64,
    /// Total number of pages; 0 when there are no items.
    pub page_count: u64,
    /// Items per page.
    pub page_size: u64,
    /// Total number of items across all pages.
    pub count: u64,
}

impl PaginationMetadata {
    /// Computes the metadata for `request` over a collection of `count` items.
    #[must_use]
    pub const fn new(request: &PageRequest, count: u64) -> Self {
        Self {
            page: request.page(),
            page_count: count.div_ceil(request.page_size()),
            page_size: request.page_size(),
            count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_first_page_of_ten() {
        let req = PageRequest::default();
        assert_eq!(req.page(), 1);
        assert_eq!(req.page_size(), 10);
        assert_eq!(req.offset(), 0);
    }

    #[test]
    fn offset_skips_previous_pages() {
        assert_eq!(PageRequest::new(2, 10).offset(), 10);
        assert_eq!(PageRequest::new(5, 7).offset(), 28);
        assert_eq!(PageRequest::new(1, 50).offset(), 0);
    }

    #[test]
    fn offset_saturates_on_huge_values() {
        let req = PageRequest::new(u64::MAX, u64::MAX);
        assert_eq!(req.offset(), u64::MAX);
    }

    #[test]
    fn zero_values_clamp_to_one() {
        let req = PageRequest::new(0, 0);
        assert_eq!(req.page(), 1);
        assert_eq!(req.page_size(), 1);
    }

    #[test]
    fn optional_values_default_and_clamp() {
        assert_eq!(PageRequest::from_optional(None, None), PageRequest::default());
        assert_eq!(
            PageRequest::from_optional(Some(3), None),
            PageRequest::new(3, DEFAULT_PAGE_SIZE)
        );
        assert_eq!(
            PageRequest::from_optional(Some(-4), Some(-1)),
            PageRequest::new(1, 1)
        );
        assert_eq!(
            PageRequest::from_optional(Some(0), Some(25)),
            PageRequest::new(1, 25)
        );
    }

    #[test]
    fn metadata_rounds_page_count_up() {
        let meta = PaginationMetadata::new(&PageRequest::new(2, 10), 25);
        assert_eq!(
            meta,
            PaginationMetadata {
                page: 2,
                page_count: 3,
                page_size: 10,
                count: 25,
            }
        );
    }

    #[test]
    fn page_count_is_zero_only_for_empty_collections() {
        for page_size in 1..=12 {
            let req = PageRequest::new(1, page_size);
            for count in 0..=60 {
                let meta = PaginationMetadata::new(&req, count);
                assert_eq!(meta.page_count, count.div_ceil(page_size));
                assert_eq!(meta.page_count == 0, count == 0);
                assert!(meta.page_count * page_size >= count);
            }
        }
    }

    #[test]
    fn metadata_serializes_camel_case_in_order() {
        let meta = PaginationMetadata::new(&PageRequest::new(2, 10), 25);
        let json = serde_json::to_string(&meta).ok();
        assert_eq!(
            json.as_deref(),
            Some(r#"{"page":2,"pageCount":3,"pageSize":10,"count":25}"#)
        );
    }
}
