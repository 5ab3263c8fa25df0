//! Assertions over derived views.

use vitrine_table::{DerivedView, Record};

use crate::fixtures::Member;

/// Names of the visible members in display order.
#[must_use]
pub fn visible_names<'a>(view: &DerivedView<'a, Member>) -> Vec<&'a str> {
    view.visible_records
        .iter()
        .map(|member| member.name.as_str())
        .collect()
}

/// Panic unless the visible ids equal `expected`, in order.
///
/// # Panics
///
/// Panics with both id lists when they differ.
pub fn assert_visible_ids<R: Record>(view: &DerivedView<'_, R>, expected: &[R::Id]) {
    let actual = view.visible_ids();
    assert_eq!(actual.as_slice(), expected, "visible ids differ");
}

/// Panic unless every id in `ids` appears in `order` in the same relative order.
///
/// # Panics
///
/// Panics when an id is missing from `order` or appears out of sequence.
pub fn assert_relative_order<Id: PartialEq + std::fmt::Debug>(order: &[Id], ids: &[Id]) {
    let mut cursor = 0;
    for id in ids {
        let Some(position) = order[cursor..].iter().position(|candidate| candidate == id) else {
            panic!("{id:?} missing or out of order in {order:?}");
        };
        cursor += position + 1;
    }
}
