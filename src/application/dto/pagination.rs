/// Offset pagination arithmetic for the comment listings.
///
/// Requested page and size are optional; anything absent or zero falls back
/// to the defaults. The limit can never be zero, so `total_pages` never
/// divides by zero and the offset never goes negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub page: u32,
    pub limit: u32,
    pub offset: u64,
    pub total_pages: u64,
}

impl PageInfo {
    pub const DEFAULT_PAGE: u32 = 1;
    pub const DEFAULT_SIZE: u32 = 20;

    pub fn compute(page: Option<u32>, size: Option<u32>, total: u64) -> Self {
        let page = page.filter(|p| *p >= 1).unwrap_or(Self::DEFAULT_PAGE);
        let limit = size.filter(|s| *s >= 1).unwrap_or(Self::DEFAULT_SIZE);
        let offset = u64::from(page - 1) * u64::from(limit);
        let total_pages = total.div_ceil(u64::from(limit));

        Self {
            page,
            limit,
            offset,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_and_total_pages_follow_the_contract() {
        for page in 1..=7u32 {
            for size in 1..=9u32 {
                for total in 0..=40u64 {
                    let info = PageInfo::compute(Some(page), Some(size), total);
                    assert_eq!(info.limit, size);
                    assert_eq!(info.offset, u64::from(page - 1) * u64::from(size));
                    assert_eq!(info.total_pages, total.div_ceil(u64::from(size)));
                }
            }
        }
    }

    #[test]
    fn missing_values_use_defaults() {
        let info = PageInfo::compute(None, None, 100);
        assert_eq!(info.page, PageInfo::DEFAULT_PAGE);
        assert_eq!(info.limit, PageInfo::DEFAULT_SIZE);
        assert_eq!(info.offset, 0);
        assert_eq!(info.total_pages, 5);
    }

    #[test]
    fn zero_page_and_size_are_coerced() {
        let info = PageInfo::compute(Some(0), Some(0), 10);
        assert_eq!(info.page, 1);
        assert_eq!(info.limit, PageInfo::DEFAULT_SIZE);
        assert_eq!(info.total_pages, 1);
    }

    #[test]
    fn three_items_at_size_two_span_two_pages() {
        let info = PageInfo::compute(Some(1), Some(2), 3);
        assert_eq!(info.total_pages, 2);
        assert_eq!(info.offset, 0);
        let second = PageInfo::compute(Some(2), Some(2), 3);
        assert_eq!(second.offset, 2);
    }

    #[test]
    fn zero_total_yields_zero_pages() {
        let info = PageInfo::compute(Some(1), Some(5), 0);
        assert_eq!(info.total_pages, 0);
        assert!(info.limit >= 1);
    }
}
