use serde::{Deserialize, Serialize};

/// Page sizes offered on the orders screen.
pub const ORDER_PAGE_SIZES: [usize; 4] = [50, 100, 200, 500];
pub const DEFAULT_ORDER_PAGE_SIZE: usize = 100;
pub const DEFAULT_HR_PAGE_SIZE: usize = 20;

/// 1-based page cursor over an in-memory list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub number: usize,
    pub size: usize,
}

impl Page {
    pub fn first(size: usize) -> Self {
        Self { number: 1, size: size.max(1) }
    }

    pub fn total_pages(&self, total_items: usize) -> usize {
        total_items.div_ceil(self.size.max(1))
    }

    /// Clamp the page number into `1..=total_pages` (page 1 for empty lists).
    pub fn clamped(self, total_items: usize) -> Self {
        let last = self.total_pages(total_items).max(1);
        Self {
            number: self.number.clamp(1, last),
            ..self
        }
    }

    /// Index range of this page in a list of `total_items` elements.
    pub fn range(&self, total_items: usize) -> std::ops::Range<usize> {
        let size = self.size.max(1);
        let start = (self.number.max(1) - 1).saturating_mul(size).min(total_items);
        let end = start.saturating_add(size).min(total_items);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.range(items.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        let page = Page::first(100);
        assert_eq!(page.total_pages(0), 0);
        assert_eq!(page.total_pages(100), 1);
        assert_eq!(page.total_pages(101), 2);
    }

    #[test]
    fn test_slice() {
        let items: Vec<u32> = (0..250).collect();
        let page = Page { number: 3, size: 100 };
        assert_eq!(page.slice(&items), &items[200..250]);

        let beyond = Page { number: 9, size: 100 };
        assert!(beyond.slice(&items).is_empty());
    }

    #[test]
    fn test_clamped() {
        let page = Page { number: 7, size: 50 };
        assert_eq!(page.clamped(120).number, 3);
        assert_eq!(page.clamped(0).number, 1);
        assert_eq!(Page { number: 0, size: 50 }.clamped(10).number, 1);
    }
}
