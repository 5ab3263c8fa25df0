//! Default values and environment variable names for table settings.
//!
//! # Design
//! - Page-size defaults mirror the table engine's pager constants.
//! - Environment keys share the `VITRINE_` prefix.

/// Column the users table sorts by on first render.
pub(crate) const DEFAULT_SORT_KEY: &str = "name";
/// Overrides `default_page_size`.
pub const ENV_PAGE_SIZE: &str = "VITRINE_PAGE_SIZE";
/// Overrides `default_sort_key`; an empty value clears it.
pub const ENV_SORT_KEY: &str = "VITRINE_SORT_KEY";
/// Overrides `default_sort_direction`.
pub const ENV_SORT_DIRECTION: &str = "VITRINE_SORT_DIRECTION";
