use anyhow::anyhow;
use serde::Serialize;
use vitrine_config::TableSettings;
use vitrine_showcase::{User, user_schema, users};
use vitrine_table::{
    SortDirection, TableError, TableEvent, TableSession, page_window, visible_selected_count,
};

use crate::cli::{OutputFormat, UsersArgs};
use crate::error::{CliError, CliResult};
use crate::output::render_users;

#[derive(Debug, Serialize)]
pub(crate) struct UsersReport {
    pub(crate) query: String,
    pub(crate) sort_key: Option<String>,
    pub(crate) sort_direction: SortDirection,
    pub(crate) page: usize,
    pub(crate) page_size: usize,
    pub(crate) total_pages: usize,
    pub(crate) total_matched: usize,
    pub(crate) range_start: usize,
    pub(crate) range_end: usize,
    pub(crate) range_label: String,
    pub(crate) pager: Vec<usize>,
    pub(crate) has_previous: bool,
    pub(crate) has_next: bool,
    pub(crate) rows: Vec<UserRow>,
    pub(crate) selected: Vec<u32>,
    pub(crate) selected_on_page: usize,
    pub(crate) all_visible_selected: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct UserRow {
    pub(crate) selected: bool,
    #[serde(flatten)]
    pub(crate) user: User,
}

pub(crate) fn handle_users(
    args: UsersArgs,
    settings: &TableSettings,
    format: OutputFormat,
) -> CliResult<String> {
    let report = build_users_report(args, settings)?;
    render_users(&report, format)
}

pub(crate) fn build_users_report(
    args: UsersArgs,
    settings: &TableSettings,
) -> CliResult<UsersReport> {
    let schema = user_schema().map_err(table_error)?;
    let mut session =
        TableSession::new(users(), schema, settings.initial_view_state()).map_err(table_error)?;

    if let Some(query) = args.query {
        session.apply(TableEvent::Search(query)).map_err(table_error)?;
    }
    for key in args.sort {
        session.apply(TableEvent::SortBy(key)).map_err(table_error)?;
    }
    if let Some(page_size) = args.page_size {
        session
            .apply(TableEvent::SetPageSize(page_size))
            .map_err(table_error)?;
    }
    if let Some(page) = args.page {
        session.apply(TableEvent::GoToPage(page)).map_err(table_error)?;
    }
    for id in args.select {
        session.apply(TableEvent::ToggleRow(id)).map_err(table_error)?;
    }
    if args.select_all_visible {
        session
            .apply(TableEvent::ToggleAllVisible)
            .map_err(table_error)?;
    }

    let all_visible_selected = session.all_visible_selected().map_err(table_error)?;
    let view = session.view().map_err(table_error)?;
    let visible_ids = view.visible_ids();
    let state = session.state();

    Ok(UsersReport {
        query: state.search_query.clone(),
        sort_key: state.sort_key.clone(),
        sort_direction: state.sort_direction,
        page: view.page,
        page_size: state.page_size,
        total_pages: view.total_pages,
        total_matched: view.total_matched,
        range_start: view.range_start,
        range_end: view.range_end,
        range_label: view.range_label(),
        pager: page_window(view.page, view.total_pages, settings.pager_buttons),
        has_previous: view.has_previous(),
        has_next: view.has_next(),
        rows: view
            .visible_records
            .iter()
            .map(|user| UserRow {
                selected: session.is_selected(&user.id),
                user: (*user).clone(),
            })
            .collect(),
        selected: session.selected().iter().copied().collect(),
        selected_on_page: visible_selected_count(session.selected(), &visible_ids),
        all_visible_selected,
    })
}

fn table_error(err: TableError) -> CliError {
    match err {
        TableError::InvalidPageSize { page_size } => {
            CliError::validation(format!("page size must be positive (got {page_size})"))
        }
        TableError::DuplicateColumn { key } => {
            CliError::failure(anyhow!("table schema repeats column '{key}'"))
        }
    }
}
