//! Interactive table session composing view state with row trackers.
//!
//! # Design
//! - Owns the records, schema, view state, and both id sets for one table.
//! - Every interaction is a `TableEvent` applied through one reducer.
//! - After view-affecting events the effective page is written back into state.
//! - Selection and expansion survive search and sort changes.

use tracing::debug;

use crate::error::{TableError, TableResult};
use crate::paginate::{next_page, previous_page};
use crate::record::Record;
use crate::schema::TableSchema;
use crate::selection::{
    ExpansionSet, SelectionSet, all_visible_selected, select_all_visible, toggle,
};
use crate::sort::toggle_sort;
use crate::view::{DerivedView, ViewState, derive_view};

/// User interactions understood by [`TableSession::apply`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableEvent<Id> {
    /// Search box edited; returns to the first page.
    Search(String),
    /// Column header clicked.
    SortBy(String),
    /// Page button clicked.
    GoToPage(usize),
    /// Next-page chevron clicked.
    NextPage,
    /// Previous-page chevron clicked.
    PreviousPage,
    /// Rows-per-page selector changed; returns to the first page.
    SetPageSize(usize),
    /// Row checkbox clicked.
    ToggleRow(Id),
    /// Header checkbox clicked.
    ToggleAllVisible,
    /// Expand caret clicked.
    ToggleExpanded(Id),
    /// Bulk action finished; drop every selected id.
    ClearSelection,
    /// Collapse every open detail panel.
    ClearExpansion,
}

impl<Id> TableEvent<Id> {
    const fn name(&self) -> &'static str {
        match self {
            Self::Search(_) => "search",
            Self::SortBy(_) => "sort_by",
            Self::GoToPage(_) => "go_to_page",
            Self::NextPage => "next_page",
            Self::PreviousPage => "previous_page",
            Self::SetPageSize(_) => "set_page_size",
            Self::ToggleRow(_) => "toggle_row",
            Self::ToggleAllVisible => "toggle_all_visible",
            Self::ToggleExpanded(_) => "toggle_expanded",
            Self::ClearSelection => "clear_selection",
            Self::ClearExpansion => "clear_expansion",
        }
    }
}

/// State for one interactive table.
#[derive(Debug)]
pub struct TableSession<R: Record> {
    records: Vec<R>,
    schema: TableSchema<R>,
    state: ViewState,
    selected: SelectionSet<R::Id>,
    expanded: ExpansionSet<R::Id>,
}

impl<R: Record> TableSession<R> {
    /// Start a session; the initial page is clamped against the data.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidPageSize`] when `state` has a zero page size.
    pub fn new(records: Vec<R>, schema: TableSchema<R>, state: ViewState) -> TableResult<Self> {
        state.validate()?;
        let mut session = Self {
            records,
            schema,
            state,
            selected: SelectionSet::new(),
            expanded: ExpansionSet::new(),
        };
        session.sync_page()?;
        Ok(session)
    }

    /// Current view state.
    #[must_use]
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    /// All rows backing the table.
    #[must_use]
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Column schema.
    #[must_use]
    pub const fn schema(&self) -> &TableSchema<R> {
        &self.schema
    }

    /// Selected ids, including rows on other pages or filtered out.
    #[must_use]
    pub const fn selected(&self) -> &SelectionSet<R::Id> {
        &self.selected
    }

    /// Expanded ids.
    #[must_use]
    pub const fn expanded(&self) -> &ExpansionSet<R::Id> {
        &self.expanded
    }

    /// Whether `id` is selected.
    #[must_use]
    pub fn is_selected(&self, id: &R::Id) -> bool {
        self.selected.contains(id)
    }

    /// Whether `id` is expanded.
    #[must_use]
    pub fn is_expanded(&self, id: &R::Id) -> bool {
        self.expanded.contains(id)
    }

    /// Derive the current page.
    ///
    /// # Errors
    ///
    /// Propagates [`derive_view`] errors; a validated session never produces one.
    pub fn view(&self) -> TableResult<DerivedView<'_, R>> {
        derive_view(&self.records, &self.schema, &self.state)
    }

    /// Checked state of the header checkbox for the current page.
    ///
    /// # Errors
    ///
    /// Propagates [`derive_view`] errors.
    pub fn all_visible_selected(&self) -> TableResult<bool> {
        let visible = self.view()?.visible_ids();
        Ok(all_visible_selected(&self.selected, &visible))
    }

    /// Apply one interaction.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidPageSize`] for `SetPageSize(0)`; the session
    /// is left unchanged in that case.
    pub fn apply(&mut self, event: TableEvent<R::Id>) -> TableResult<()> {
        debug!(event = event.name(), "applying table event");
        match event {
            TableEvent::Search(query) => {
                self.state.search_query = query;
                self.state.page = 1;
                self.sync_page()?;
            }
            TableEvent::SortBy(key) => {
                let (key, direction) = toggle_sort(
                    self.state.sort_key.as_deref(),
                    self.state.sort_direction,
                    &key,
                );
                self.state.sort_key = Some(key);
                self.state.sort_direction = direction;
            }
            TableEvent::GoToPage(page) => {
                self.state.page = page;
                self.sync_page()?;
            }
            TableEvent::NextPage => {
                let total_pages = self.view()?.total_pages;
                self.state.page = next_page(self.state.page, total_pages);
            }
            TableEvent::PreviousPage => {
                let total_pages = self.view()?.total_pages;
                self.state.page = previous_page(self.state.page, total_pages);
            }
            TableEvent::SetPageSize(page_size) => {
                if page_size == 0 {
                    return Err(TableError::InvalidPageSize { page_size });
                }
                self.state.page_size = page_size;
                self.state.page = 1;
            }
            TableEvent::ToggleRow(id) => {
                self.selected = toggle(&self.selected, &id);
            }
            TableEvent::ToggleAllVisible => {
                let visible = self.view()?.visible_ids();
                self.selected = select_all_visible(&self.selected, &visible);
            }
            TableEvent::ToggleExpanded(id) => {
                self.expanded = toggle(&self.expanded, &id);
            }
            TableEvent::ClearSelection => self.selected.clear(),
            TableEvent::ClearExpansion => self.expanded.clear(),
        }
        Ok(())
    }

    fn sync_page(&mut self) -> TableResult<()> {
        let page = self.view()?.page;
        self.state.page = page;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Column, FieldValue};

    #[derive(Debug, Clone, PartialEq)]
    struct Ticket {
        id: u32,
        title: String,
    }

    impl Record for Ticket {
        type Id = u32;

        fn id(&self) -> u32 {
            self.id
        }
    }

    fn ticket_title(ticket: &Ticket) -> FieldValue<'_> {
        FieldValue::text(&ticket.title)
    }

    fn ticket_id(ticket: &Ticket) -> FieldValue<'_> {
        FieldValue::number(ticket.id)
    }

    fn session(count: u32, page_size: usize) -> TableSession<Ticket> {
        let records = (1..=count)
            .map(|id| Ticket {
                id,
                title: format!("ticket {id:02}"),
            })
            .collect();
        let schema = TableSchema::new(vec![
            Column::new("id", "Id", ticket_id),
            Column::new("title", "Title", ticket_title).searchable(),
        ])
        .unwrap();
        TableSession::new(records, schema, ViewState::new(Some("id"), page_size)).unwrap()
    }

    #[test]
    fn new_rejects_zero_page_size() {
        let err = TableSession::<Ticket>::new(
            Vec::new(),
            TableSchema::new(Vec::new()).unwrap(),
            ViewState::new(None, 0),
        )
        .unwrap_err();
        assert_eq!(err, TableError::InvalidPageSize { page_size: 0 });
    }

    #[test]
    fn search_resets_to_first_page() {
        let mut session = session(12, 5);
        session.apply(TableEvent::GoToPage(3)).unwrap();
        assert_eq!(session.state().page, 3);
        session.apply(TableEvent::Search("ticket 1".into())).unwrap();
        assert_eq!(session.state().page, 1);
        assert_eq!(session.view().unwrap().total_matched, 3);
    }

    #[test]
    fn out_of_range_page_is_written_back_clamped() {
        let mut session = session(12, 5);
        session.apply(TableEvent::GoToPage(40)).unwrap();
        assert_eq!(session.state().page, 3);
        session.apply(TableEvent::NextPage).unwrap();
        assert_eq!(session.state().page, 3);
        session.apply(TableEvent::PreviousPage).unwrap();
        assert_eq!(session.state().page, 2);
    }

    #[test]
    fn page_size_change_validates_and_resets() {
        let mut session = session(12, 5);
        session.apply(TableEvent::GoToPage(2)).unwrap();
        assert_eq!(
            session.apply(TableEvent::SetPageSize(0)),
            Err(TableError::InvalidPageSize { page_size: 0 })
        );
        assert_eq!(session.state().page_size, 5);
        assert_eq!(session.state().page, 2);
        session.apply(TableEvent::SetPageSize(10)).unwrap();
        assert_eq!(session.state().page, 1);
        assert_eq!(session.view().unwrap().total_pages, 2);
    }

    #[test]
    fn sort_clicks_toggle_direction() {
        let mut session = session(3, 5);
        session.apply(TableEvent::SortBy("id".into())).unwrap();
        assert_eq!(session.view().unwrap().visible_ids(), vec![3, 2, 1]);
        session.apply(TableEvent::SortBy("title".into())).unwrap();
        assert_eq!(session.state().sort_key.as_deref(), Some("title"));
        assert_eq!(session.view().unwrap().visible_ids(), vec![1, 2, 3]);
    }

    #[test]
    fn selection_persists_across_pages_and_searches() {
        let mut session = session(12, 5);
        session.apply(TableEvent::ToggleRow(2)).unwrap();
        session.apply(TableEvent::NextPage).unwrap();
        session.apply(TableEvent::ToggleAllVisible).unwrap();
        assert!(session.all_visible_selected().unwrap());
        assert_eq!(session.selected().len(), 6);

        session.apply(TableEvent::Search("ticket 12".into())).unwrap();
        assert!(session.is_selected(&2));
        assert!(!session.all_visible_selected().unwrap());

        session.apply(TableEvent::Search(String::new())).unwrap();
        session.apply(TableEvent::GoToPage(2)).unwrap();
        session.apply(TableEvent::ToggleAllVisible).unwrap();
        assert_eq!(session.selected().iter().copied().collect::<Vec<_>>(), vec![2]);

        session.apply(TableEvent::ClearSelection).unwrap();
        assert!(session.selected().is_empty());
    }

    #[test]
    fn expansion_is_independent_of_selection() {
        let mut session = session(4, 5);
        session.apply(TableEvent::ToggleExpanded(1)).unwrap();
        session.apply(TableEvent::ToggleRow(2)).unwrap();
        assert!(session.is_expanded(&1));
        assert!(!session.is_expanded(&2));
        assert!(!session.is_selected(&1));
        session.apply(TableEvent::ToggleExpanded(1)).unwrap();
        assert!(session.expanded().is_empty());
        session.apply(TableEvent::ToggleExpanded(3)).unwrap();
        session.apply(TableEvent::ClearExpansion).unwrap();
        assert!(session.expanded().is_empty());
        assert_eq!(session.selected().len(), 1);
    }
}
