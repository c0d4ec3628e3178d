//! Page arithmetic over an already-filtered result population.
//!
//! Page state is owned by the caller; this module only turns a
//! `(page, page_size)` pair into totals and slice bounds.

use std::ops::Range;

/// Caller-supplied page state. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PageRequest {
    pub page: usize,
    pub page_size: usize,
}

impl PageRequest {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self { page, page_size }
    }

    /// Page size with zero treated as one.
    fn effective_size(&self) -> usize {
        self.page_size.max(1)
    }

    /// `max(1, ceil(count / page_size))`.
    pub fn total_pages(&self, count: usize) -> usize {
        count.div_ceil(self.effective_size()).max(1)
    }

    /// Index range of the current page within a population of `count`.
    ///
    /// Page 0 and pages past the end yield an empty range.
    pub fn slice_range(&self, count: usize) -> Range<usize> {
        if self.page == 0 {
            return 0..0;
        }
        let size = self.effective_size();
        let start = (self.page - 1).saturating_mul(size).min(count);
        let end = self.page.saturating_mul(size).min(count);
        start..end
    }

    /// Borrow the current page out of `items`.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.slice_range(items.len())]
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self, count: usize) -> bool {
        self.page < self.total_pages(count)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: crate::util::constants::DEFAULT_PAGE_SIZE,
        }
    }
}
