//! Users and projects demo tables driven through the table engine.

use vitrine_showcase::{Project, User, project_schema, projects, user_schema, users};
use vitrine_table::{SortDirection, TableEvent, TableSession, ViewState, derive_view, toggle_sort};
use vitrine_test_support::assert::{assert_relative_order, assert_visible_ids};

fn names<'a>(rows: &[&'a User]) -> Vec<&'a str> {
    rows.iter().map(|user| user.name.as_str()).collect()
}

#[test]
fn first_page_sorted_by_name() {
    let all = users();
    let schema = user_schema().unwrap();
    let view = derive_view(&all, &schema, &ViewState::new(Some("name"), 5)).unwrap();

    assert_eq!(
        names(&view.visible_records),
        vec![
            "Alice Smith",
            "Bob Johnson",
            "Charlie Brown",
            "Diana Miller",
            "Edward Wilson"
        ]
    );
    assert_eq!((view.range_start, view.range_end), (1, 5));
    assert_eq!(view.total_pages, 3);
    assert_eq!(view.range_label(), "Showing 1-5 of 12");
}

#[test]
fn search_alice_yields_single_page() {
    let all = users();
    let schema = user_schema().unwrap();
    let mut state = ViewState::new(Some("name"), 5);
    state.search_query = "alice".into();
    state.page = 2;

    let view = derive_view(&all, &schema, &state).unwrap();
    assert_eq!(view.total_matched, 1);
    assert_eq!(view.total_pages, 1);
    assert_eq!(view.page, 1);
    assert_visible_ids(&view, &[1]);
}

#[test]
fn role_is_searchable_status_is_not() {
    let all = users();
    let schema = user_schema().unwrap();
    let mut state = ViewState::new(None, 20);

    state.search_query = "EDITOR".into();
    let view = derive_view(&all, &schema, &state).unwrap();
    assert_visible_ids(&view, &[4, 8, 12]);

    state.search_query = "inactive".into();
    let view = derive_view(&all, &schema, &state).unwrap();
    assert!(view.is_empty());
    assert_eq!(view.range_label(), "Showing 0-0 of 0");
}

#[test]
fn email_header_clicks() {
    let first = toggle_sort(Some("name"), SortDirection::Ascending, "email");
    assert_eq!(first, ("email".to_string(), SortDirection::Ascending));
    let second = toggle_sort(Some(&first.0), first.1, "email");
    assert_eq!(second, ("email".to_string(), SortDirection::Descending));
}

#[test]
fn status_sort_keeps_directory_order_within_ties() {
    let all = users();
    let schema = user_schema().unwrap();
    let view = derive_view(&all, &schema, &ViewState::new(Some("status"), 20)).unwrap();
    let ids = view.visible_ids();

    assert_relative_order(&ids, &[1, 2, 4, 5, 7, 8, 9, 11, 12]);
    assert_relative_order(&ids, &[3, 6, 10]);
    assert_eq!(&ids[9..], &[3, 6, 10]);
}

#[test]
fn bulk_selection_on_users_table() {
    let schema = user_schema().unwrap();
    let mut session = TableSession::new(users(), schema, ViewState::new(Some("name"), 5)).unwrap();

    session.apply(TableEvent::ToggleAllVisible).unwrap();
    assert_eq!(session.selected().len(), 5);
    session.apply(TableEvent::NextPage).unwrap();
    session.apply(TableEvent::ToggleRow(6)).unwrap();
    assert_eq!(session.selected().len(), 6);

    session.apply(TableEvent::PreviousPage).unwrap();
    assert!(session.all_visible_selected().unwrap());
    session.apply(TableEvent::ToggleAllVisible).unwrap();
    assert_eq!(session.selected().iter().copied().collect::<Vec<_>>(), vec![6]);
}

#[test]
fn projects_expand_independently() {
    let schema = project_schema().unwrap();
    let mut session: TableSession<Project> =
        TableSession::new(projects(), schema, ViewState::new(Some("progress"), 10)).unwrap();

    assert_visible_ids(&session.view().unwrap(), &[3, 2, 1, 4]);
    session.apply(TableEvent::ToggleExpanded(2)).unwrap();
    session.apply(TableEvent::ToggleExpanded(4)).unwrap();
    session.apply(TableEvent::SortBy("progress".into())).unwrap();

    assert_visible_ids(&session.view().unwrap(), &[4, 1, 2, 3]);
    assert!(session.is_expanded(&2));
    assert!(session.is_expanded(&4));
    assert!(!session.is_expanded(&1));
}
