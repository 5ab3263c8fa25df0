//! View state and the filter → sort → paginate derivation.
//!
//! # Design
//! - `derive_view` is pure: the same records and state always yield the same view.
//! - Visible rows borrow from the caller's record slice; nothing is cloned.
//! - The effective page is reported back so callers can store the clamped value.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{TableError, TableResult};
use crate::filter::filter_records;
use crate::paginate::{DEFAULT_PAGE_SIZE, Pagination};
use crate::record::Record;
use crate::schema::TableSchema;
use crate::sort::{SortDirection, sort_records};

/// Mutable parameters driving which rows are shown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    /// Case-insensitive substring query; empty matches everything.
    pub search_query: String,
    /// Column to sort by; `None` keeps filtered order.
    pub sort_key: Option<String>,
    /// Direction applied to `sort_key`.
    pub sort_direction: SortDirection,
    /// Requested 1-based page.
    pub page: usize,
    /// Rows per page; must be positive.
    pub page_size: usize,
}

impl ViewState {
    /// Fresh session state: empty query, ascending on `sort_key`, first page.
    #[must_use]
    pub fn new(sort_key: Option<&str>, page_size: usize) -> Self {
        Self {
            search_query: String::new(),
            sort_key: sort_key.map(str::to_string),
            sort_direction: SortDirection::Ascending,
            page: 1,
            page_size,
        }
    }

    /// Reject states the engine cannot paginate.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidPageSize`] when `page_size` is zero.
    pub const fn validate(&self) -> TableResult<()> {
        if self.page_size == 0 {
            return Err(TableError::InvalidPageSize {
                page_size: self.page_size,
            });
        }
        Ok(())
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(None, DEFAULT_PAGE_SIZE)
    }
}

/// Display-ready slice of rows plus pagination metadata.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DerivedView<'a, R> {
    /// Rows on the effective page, in display order.
    pub visible_records: Vec<&'a R>,
    /// Rows that survived filtering.
    pub total_matched: usize,
    /// Page count; never below one.
    pub total_pages: usize,
    /// Effective (clamped) 1-based page.
    pub page: usize,
    /// 1-based index of the first visible row, or 0 when nothing matched.
    pub range_start: usize,
    /// 1-based index of the last visible row.
    pub range_end: usize,
}

impl<R> DerivedView<'_, R> {
    /// Whether the page shows no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible_records.is_empty()
    }

    /// Footer text such as `Showing 1-5 of 12`.
    #[must_use]
    pub fn range_label(&self) -> String {
        format!(
            "Showing {}-{} of {}",
            self.range_start, self.range_end, self.total_matched
        )
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

impl<R: Record> DerivedView<'_, R> {
    /// Identifiers of the visible rows, in display order.
    #[must_use]
    pub fn visible_ids(&self) -> Vec<R::Id> {
        self.visible_records.iter().map(|record| record.id()).collect()
    }
}

/// Derive the visible page: filter, then stable sort, then paginate.
///
/// An unknown or unsortable `sort_key` keeps the filtered order.
///
/// # Errors
///
/// Returns [`TableError::InvalidPageSize`] when the state's page size is zero.
pub fn derive_view<'a, R>(
    records: &'a [R],
    schema: &TableSchema<R>,
    state: &ViewState,
) -> TableResult<DerivedView<'a, R>> {
    state.validate()?;

    let mut rows = filter_records(records, schema, &state.search_query);
    if let Some(key) = state.sort_key.as_deref()
        && !sort_records(&mut rows, schema, key, state.sort_direction)
    {
        warn!(sort_key = key, "unknown sort key; keeping filtered order");
    }

    let pagination = Pagination::compute(rows.len(), state.page, state.page_size)?;
    let visible_records = pagination.slice(&rows).to_vec();
    debug!(
        query = %state.search_query,
        matched = pagination.total_matched,
        page = pagination.page,
        total_pages = pagination.total_pages,
        "derived table view"
    );

    Ok(DerivedView {
        visible_records,
        total_matched: pagination.total_matched,
        total_pages: pagination.total_pages,
        page: pagination.page,
        range_start: pagination.range_start,
        range_end: pagination.range_end,
    })
}
