//! Strategies for items-per-page and page count

/// Decides the effective page size and the number of pages
///
/// Implementations are injected into [`crate::Page::with_sizing`]; the
/// default methods give the standard arithmetic.
pub trait Sizing: Send + Sync {
    /// Effective items per page for a validated request (`requested >= 1`)
    fn items(&self, requested: u64) -> u64 {
        requested
    }

    /// Number of pages for `count` items, `items` per page.
    ///
    /// Returning more pages than `count` fills is allowed; offsets past the
    /// end saturate at `u64::MAX` and the item range clamps to `count`.
    fn pages(&self, count: u64, items: u64) -> u64 {
        standard_pages(count, items)
    }
}

/// `max(ceil(count / items), 1)`
pub fn standard_pages(count: u64, items: u64) -> u64 {
    count.div_ceil(items.max(1)).max(1)
}

/// Plain arithmetic, no limits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Standard;

impl Sizing for Standard {}

/// Limits client-controlled page sizes and deep pagination
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capped {
    /// Upper bound for items per page
    pub max_items: Option<u64>,
    /// Upper bound for the number of pages
    pub max_pages: Option<u64>,
}

impl Capped {
    pub fn new(max_items: Option<u64>, max_pages: Option<u64>) -> Self {
        Self {
            max_items,
            max_pages,
        }
    }
}

impl Sizing for Capped {
    fn items(&self, requested: u64) -> u64 {
        match self.max_items {
            Some(max) => requested.min(max).max(1),
            None => requested,
        }
    }

    fn pages(&self, count: u64, items: u64) -> u64 {
        let pages = standard_pages(count, items);
        match self.max_pages {
            Some(max) => pages.min(max).max(1),
            None => pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_pages() {
        assert_eq!(standard_pages(0, 20), 1);
        assert_eq!(standard_pages(1, 20), 1);
        assert_eq!(standard_pages(20, 20), 1);
        assert_eq!(standard_pages(21, 20), 2);
        assert_eq!(standard_pages(100, 20), 5);
    }

    #[test]
    fn test_standard_is_identity() {
        assert_eq!(Standard.items(37), 37);
        assert_eq!(Standard.pages(101, 10), 11);
    }

    #[test]
    fn test_capped() {
        let capped = Capped::new(Some(50), Some(3));
        assert_eq!(capped.items(500), 50);
        assert_eq!(capped.items(10), 10);
        assert_eq!(capped.pages(1000, 10), 3);
        assert_eq!(capped.pages(0, 10), 1);
    }

    #[test]
    fn test_capped_zero_limits_still_give_one_page() {
        let capped = Capped::new(Some(0), Some(0));
        assert_eq!(capped.items(20), 1);
        assert_eq!(capped.pages(100, 1), 1);
    }
}
