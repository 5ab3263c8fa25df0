//! Row selection and expansion sets.
//!
//! Transitions return new sets rather than mutating in place, so reactive
//! view layers can detect changes by comparing values.

use std::collections::BTreeSet;

/// Ids of rows whose checkbox is ticked.
pub type SelectionSet<Id> = BTreeSet<Id>;

/// Ids of rows whose detail panel is open.
pub type ExpansionSet<Id> = BTreeSet<Id>;

/// Toggle the presence of an id in the set.
#[must_use]
pub fn toggle<Id: Ord + Clone>(set: &BTreeSet<Id>, id: &Id) -> BTreeSet<Id> {
    let mut next = set.clone();
    if !next.remove(id) {
        next.insert(id.clone());
    }
    next
}

/// Header-checkbox transition scoped to the visible page.
///
/// When every visible id is already present, exactly those ids are removed;
/// otherwise all visible ids are added. Ids from other pages are untouched.
#[must_use]
pub fn select_all_visible<Id: Ord + Clone>(set: &BTreeSet<Id>, visible_ids: &[Id]) -> BTreeSet<Id> {
    let mut next = set.clone();
    if visible_ids.iter().all(|id| set.contains(id)) {
        for id in visible_ids {
            next.remove(id);
        }
    } else {
        next.extend(visible_ids.iter().cloned());
    }
    next
}

/// Checked state of the header checkbox: a non-empty page that is fully selected.
#[must_use]
pub fn all_visible_selected<Id: Ord>(set: &BTreeSet<Id>, visible_ids: &[Id]) -> bool {
    !visible_ids.is_empty() && visible_ids.iter().all(|id| set.contains(id))
}

/// Number of visible ids present in the set.
#[must_use]
pub fn visible_selected_count<Id: Ord>(set: &BTreeSet<Id>, visible_ids: &[Id]) -> usize {
    visible_ids.iter().filter(|id| set.contains(*id)).count()
}
