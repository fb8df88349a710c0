//! Page/limit clamping and pagination metadata for list endpoints.

use serde::Serialize;

/// Default number of records per page.
pub const DEFAULT_PAGE_LIMIT: i64 = 10;

/// Maximum number of records per page.
pub const MAX_PAGE_LIMIT: i64 = 50;

/// Clamp a user-provided page number to >= 1.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}

/// Clamp a user-provided limit to `1..=MAX_PAGE_LIMIT`.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_PAGE_LIMIT).clamp(1, MAX_PAGE_LIMIT)
}

/// Pagination metadata returned alongside list results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// The page that was returned (1-based).
    pub current: i64,
    /// Total number of pages.
    pub pages: i64,
    /// Total number of matching records across all pages.
    pub total: i64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PageInfo {
    /// Compute pagination metadata for a clamped page/limit and total count.
    pub fn compute(page: i64, limit: i64, total: i64) -> Self {
        let pages = (total + limit - 1) / limit;
        Self {
            current: page,
            pages,
            total,
            has_next: page < pages,
            has_prev: page > 1,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_clamps_to_one() {
        assert_eq!(clamp_page(None), 1);
        assert_eq!(clamp_page(Some(0)), 1);
        assert_eq!(clamp_page(Some(-3)), 1);
        assert_eq!(clamp_page(Some(7)), 7);
    }

    #[test]
    fn limit_clamps_to_bounds() {
        assert_eq!(clamp_limit(None), DEFAULT_PAGE_LIMIT);
        assert_eq!(clamp_limit(Some(0)), 1);
        assert_eq!(clamp_limit(Some(200)), MAX_PAGE_LIMIT);
        assert_eq!(clamp_limit(Some(25)), 25);
    }

    #[test]
    fn second_page_of_fifteen_records() {
        let info = PageInfo::compute(2, 10, 15);
        assert_eq!(info.current, 2);
        assert_eq!(info.pages, 2);
        assert_eq!(info.total, 15);
        assert!(!info.has_next);
        assert!(info.has_prev);
    }

    #[test]
    fn first_page_with_more_available() {
        let info = PageInfo::compute(1, 10, 15);
        assert!(info.has_next);
        assert!(!info.has_prev);
    }

    #[test]
    fn empty_result_set() {
        let info = PageInfo::compute(1, 10, 0);
        assert_eq!(info.pages, 0);
        assert!(!info.has_next);
        assert!(!info.has_prev);
    }
}
