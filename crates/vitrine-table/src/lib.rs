#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]

//! Client-side table engine for the Vitrine component showcase.
//!
//! Layout: `schema.rs` (typed columns and field values), `filter.rs`,
//! `sort.rs`, `paginate.rs` (pipeline stages), `view.rs` (`ViewState` and
//! `derive_view`), `selection.rs` (selection/expansion sets), `session.rs`
//! (`TableSession` reducer composing all of the above).

pub mod error;
pub mod filter;
pub mod paginate;
pub mod record;
pub mod schema;
pub mod selection;
pub mod session;
pub mod sort;
pub mod view;

pub use error::{TableError, TableResult};
pub use filter::filter_records;
pub use paginate::{
    DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZE_OPTIONS, DEFAULT_PAGER_BUTTONS, Pagination, next_page,
    page_window, previous_page,
};
pub use record::Record;
pub use schema::{Column, Extractor, FieldValue, TableSchema};
pub use selection::{
    ExpansionSet, SelectionSet, all_visible_selected, select_all_visible, toggle,
    visible_selected_count,
};
pub use session::{TableEvent, TableSession};
pub use sort::{SortDirection, sort_records, toggle_sort};
pub use view::{DerivedView, ViewState, derive_view};
