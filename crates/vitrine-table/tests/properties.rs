//! Property tests for the pipeline and selection invariants.

use std::collections::BTreeSet;

use proptest::prelude::*;
use vitrine_table::{SortDirection, ViewState, derive_view, select_all_visible, toggle};
use vitrine_test_support::assert::assert_relative_order;
use vitrine_test_support::fixtures::{member_schema, members};

prop_compose! {
    fn arbitrary_names()(names in prop::collection::vec("[A-Za-z]{1,8}", 0..40)) -> Vec<String> {
        names
    }
}

prop_compose! {
    fn arbitrary_state()(
        query in "[a-zA-Z@.]{0,3}",
        sort_key in prop::option::of(prop::sample::select(vec!["name", "email", "team", "score", "bogus"])),
        descending in any::<bool>(),
        page in 0usize..12,
        page_size in 1usize..8,
    ) -> ViewState {
        ViewState {
            search_query: query,
            sort_key: sort_key.map(str::to_string),
            sort_direction: if descending { SortDirection::Descending } else { SortDirection::Ascending },
            page,
            page_size,
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn derivation_is_deterministic(names in arbitrary_names(), state in arbitrary_state()) {
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let rows = members(&refs);
        let schema = member_schema().unwrap();
        let first = derive_view(&rows, &schema, &state).unwrap();
        let second = derive_view(&rows, &schema, &state).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn pagination_bounds_hold(names in arbitrary_names(), state in arbitrary_state()) {
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let rows = members(&refs);
        let schema = member_schema().unwrap();
        let view = derive_view(&rows, &schema, &state).unwrap();

        prop_assert!(view.visible_records.len() <= state.page_size);
        prop_assert_eq!(view.total_pages, view.total_matched.div_ceil(state.page_size).max(1));
        prop_assert!(view.page >= 1 && view.page <= view.total_pages);
        if view.total_matched > 0 {
            prop_assert!(!view.visible_records.is_empty());
            prop_assert_eq!(view.range_end - view.range_start + 1, view.visible_records.len());
        } else {
            prop_assert_eq!(view.range_start, 0);
        }
    }

    #[test]
    fn filter_keeps_exactly_the_matching_rows(names in arbitrary_names(), query in "[a-zA-Z]{0,2}") {
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let rows = members(&refs);
        let schema = member_schema().unwrap();
        let mut state = ViewState::new(None, rows.len().max(1));
        state.search_query = query.clone();
        let view = derive_view(&rows, &schema, &state).unwrap();

        let needle = query.to_lowercase();
        let expected: Vec<u32> = rows
            .iter()
            .filter(|member| {
                [&member.name, &member.email, &member.team]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            })
            .map(|member| member.id)
            .collect();
        prop_assert_eq!(view.visible_ids(), expected);
    }

    #[test]
    fn equal_sort_values_keep_input_order(names in arbitrary_names(), descending in any::<bool>()) {
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let rows = members(&refs);
        let schema = member_schema().unwrap();
        let mut state = ViewState::new(Some("score"), rows.len().max(1));
        if descending {
            state.sort_direction = SortDirection::Descending;
        }
        let view = derive_view(&rows, &schema, &state).unwrap();
        let ids = view.visible_ids();
        for residue in 0..3 {
            let tied: Vec<u32> = rows.iter().filter(|m| m.score == residue).map(|m| m.id).collect();
            assert_relative_order(&ids, &tied);
        }
    }

    #[test]
    fn toggle_twice_is_identity(initial in prop::collection::btree_set(0u32..20, 0..10), id in 0u32..20) {
        prop_assert_eq!(toggle(&toggle(&initial, &id), &id), initial);
    }

    #[test]
    fn select_all_twice_removes_visible(
        initial in prop::collection::btree_set(0u32..20, 0..10),
        visible in prop::collection::btree_set(0u32..20, 1..6),
    ) {
        let visible: Vec<u32> = visible.into_iter().collect();
        prop_assume!(!visible.iter().all(|id| initial.contains(id)));
        let twice = select_all_visible(&select_all_visible(&initial, &visible), &visible);
        let expected: BTreeSet<u32> = initial.iter().copied().filter(|id| !visible.contains(id)).collect();
        prop_assert_eq!(twice, expected);
    }
}
