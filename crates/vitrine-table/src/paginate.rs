//! Pagination math and pager-bar helpers.
//!
//! # Design
//! - Page numbers are 1-based everywhere; out-of-range requests clamp.
//! - An empty result still has one (empty) page so controls stay consistent.

use serde::{Deserialize, Serialize};

use crate::error::{TableError, TableResult};

/// Rows per page offered by the page-size selector.
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 20, 50];

/// Page size used when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Number of page buttons rendered in the pager bar.
pub const DEFAULT_PAGER_BUTTONS: usize = 5;

/// Resolved pagination for one derivation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Effective (clamped) 1-based page.
    pub page: usize,
    /// Rows per page.
    pub page_size: usize,
    /// Rows that survived filtering.
    pub total_matched: usize,
    /// Page count; never below one.
    pub total_pages: usize,
    /// 1-based index of the first visible row, or 0 when nothing matched.
    pub range_start: usize,
    /// 1-based index of the last visible row.
    pub range_end: usize,
}

impl Pagination {
    /// Resolve pagination for `total_matched` rows at the requested page.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidPageSize`] when `page_size` is zero.
    pub fn compute(
        total_matched: usize,
        requested_page: usize,
        page_size: usize,
    ) -> TableResult<Self> {
        if page_size == 0 {
            return Err(TableError::InvalidPageSize { page_size });
        }
        let total_pages = total_matched.div_ceil(page_size).max(1);
        let page = requested_page.clamp(1, total_pages);
        let offset = (page - 1) * page_size;
        let range_end = page.saturating_mul(page_size).min(total_matched);
        let range_start = if total_matched == 0 { 0 } else { offset + 1 };
        Ok(Self {
            page,
            page_size,
            total_matched,
            total_pages,
            range_start,
            range_end,
        })
    }

    /// Zero-based index of the first row on the effective page.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }

    /// Rows belonging to the effective page.
    #[must_use]
    pub fn slice<'s, T>(&self, items: &'s [T]) -> &'s [T] {
        let start = self.offset().min(items.len());
        let end = start.saturating_add(self.page_size).min(items.len());
        &items[start..end]
    }

    /// Whether a previous page exists.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Whether a next page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Page after `current`, clamped to the last page.
#[must_use]
pub fn next_page(current: usize, total_pages: usize) -> usize {
    current.saturating_add(1).clamp(1, total_pages.max(1))
}

/// Page before `current`, clamped to the first page.
#[must_use]
pub fn previous_page(current: usize, total_pages: usize) -> usize {
    current.saturating_sub(1).clamp(1, total_pages.max(1))
}

/// Contiguous page numbers for the pager bar.
///
/// Shows at most `max_buttons` pages: pinned to the start near the first
/// page, pinned to the end near the last page, otherwise centred on `current`.
#[must_use]
pub fn page_window(current: usize, total_pages: usize, max_buttons: usize) -> Vec<usize> {
    let total_pages = total_pages.max(1);
    if max_buttons == 0 {
        return Vec::new();
    }
    if total_pages <= max_buttons {
        return (1..=total_pages).collect();
    }
    let current = current.clamp(1, total_pages);
    let half = max_buttons / 2;
    let first = if current <= half + 1 {
        1
    } else if current >= total_pages - half {
        total_pages - max_buttons + 1
    } else {
        current - half
    };
    (first..first + max_buttons).collect()
}
