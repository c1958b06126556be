//! Page cursor for paginated tables.

/// Page sizes offered by every table.
pub const PAGE_SIZE_OPTIONS: [u32; 4] = [10, 20, 50, 100];

pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Current page (1-based), page size and the total reported by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    page_size: u32,
    total: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    /// First page with `page_size` rows. Sizes outside [`PAGE_SIZE_OPTIONS`]
    /// fall back to [`DEFAULT_PAGE_SIZE`].
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size: normalize_page_size(page_size),
            total: 0,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of pages; at least one so an empty table still has "page 1 of 1".
    pub fn page_count(&self) -> u32 {
        let pages = self.total.div_ceil(u64::from(self.page_size)).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count()
    }

    /// Jump to `page`, clamped to the known range.
    pub fn go_to(self, page: u32) -> Self {
        Self {
            page: page.clamp(1, self.page_count()),
            ..self
        }
    }

    pub fn next(self) -> Self {
        self.go_to(self.page.saturating_add(1))
    }

    pub fn previous(self) -> Self {
        self.go_to(self.page.saturating_sub(1))
    }

    /// Change the page size, keeping the current page if it still exists.
    pub fn with_page_size(self, page_size: u32) -> Self {
        let resized = Self {
            page_size: normalize_page_size(page_size),
            ..self
        };
        resized.go_to(self.page)
    }

    /// Record the total from a fresh response. A shrinking total (for example
    /// after deleting the last row of the last page) pulls the page back in range.
    pub fn with_total(self, total: u64) -> Self {
        let updated = Self { total, ..self };
        updated.go_to(self.page)
    }

    /// Query arguments understood by the backend.
    pub fn query(&self) -> [(&'static str, String); 2] {
        [
            ("page", self.page.to_string()),
            ("limit", self.page_size.to_string()),
        ]
    }

    /// 1-based index range of the rows on this page, for "11–20 of 57" labels.
    pub fn visible_range(&self) -> Option<(u64, u64)> {
        if self.total == 0 {
            return None;
        }
        let size = u64::from(self.page_size);
        let first = u64::from(self.page - 1) * size + 1;
        let last = (first + size - 1).min(self.total);
        Some((first, last))
    }
}

fn normalize_page_size(page_size: u32) -> u32 {
    if PAGE_SIZE_OPTIONS.contains(&page_size) {
        page_size
    } else {
        DEFAULT_PAGE_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let p = Pagination::default();
        assert_eq!(p.page(), 1);
        assert_eq!(p.page_size(), 10);
        assert_eq!(p.page_count(), 1);
        assert!(!p.has_previous());
        assert!(!p.has_next());
        assert_eq!(p.visible_range(), None);
    }

    #[test]
    fn test_navigation_is_clamped() {
        let p = Pagination::new(10).with_total(35);
        assert_eq!(p.page_count(), 4);
        assert_eq!(p.next().next().next().next().page(), 4);
        assert_eq!(p.previous().page(), 1);
        assert_eq!(p.go_to(0).page(), 1);
        assert_eq!(p.go_to(99).page(), 4);
    }

    #[test]
    fn test_page_size_change_keeps_page_in_range() {
        let p = Pagination::new(10).with_total(95).go_to(8);
        assert_eq!(p.with_page_size(20).page(), 5);
        assert_eq!(p.with_page_size(50).page(), 2);
        let p = Pagination::new(10).with_total(95).go_to(2);
        assert_eq!(p.with_page_size(20).page(), 2);
    }

    #[test]
    fn test_unknown_page_size_falls_back() {
        assert_eq!(Pagination::new(7).page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(Pagination::new(50).with_page_size(3).page_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_shrinking_total_pulls_page_back() {
        let p = Pagination::new(10).with_total(21).go_to(3);
        assert_eq!(p.page(), 3);
        assert_eq!(p.with_total(20).page(), 2);
        assert_eq!(p.with_total(0).page(), 1);
    }

    #[test]
    fn test_query_and_range() {
        let p = Pagination::new(20).with_total(57).go_to(3);
        assert_eq!(
            p.query(),
            [("page", "3".to_string()), ("limit", "20".to_string())]
        );
        assert_eq!(p.visible_range(), Some((41, 57)));
    }
}
