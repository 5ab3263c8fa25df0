//! Typed settings model for interactive tables.

use serde::{Deserialize, Serialize};
use vitrine_table::{
    DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZE_OPTIONS, DEFAULT_PAGER_BUTTONS, SortDirection, ViewState,
};

use crate::defaults::DEFAULT_SORT_KEY;

/// Table defaults applied when a session starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableSettings {
    /// Rows per page on first render.
    pub default_page_size: usize,
    /// Choices offered by the rows-per-page selector.
    pub page_size_options: Vec<usize>,
    /// Column sorted on first render; `None` keeps data order.
    pub default_sort_key: Option<String>,
    /// Direction applied to `default_sort_key`.
    pub default_sort_direction: SortDirection,
    /// Maximum numbered buttons in the pager.
    pub pager_buttons: usize,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            default_sort_key: Some(DEFAULT_SORT_KEY.to_string()),
            default_sort_direction: SortDirection::Ascending,
            pager_buttons: DEFAULT_PAGER_BUTTONS,
        }
    }
}

impl TableSettings {
    /// View state a new session starts from.
    #[must_use]
    pub fn initial_view_state(&self) -> ViewState {
        let mut state = ViewState::new(self.default_sort_key.as_deref(), self.default_page_size);
        state.sort_direction = self.default_sort_direction;
        state
    }

    /// Whether the rows-per-page selector offers `page_size`.
    #[must_use]
    pub fn offers_page_size(&self, page_size: usize) -> bool {
        self.page_size_options.contains(&page_size)
    }
}
