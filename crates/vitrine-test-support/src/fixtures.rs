//! Sample rows and schema for table engine tests.

use serde::Serialize;
use vitrine_table::{Column, FieldValue, Record, TableResult, TableSchema};

/// Twelve first names, deliberately out of alphabetical order.
pub const ROSTER: [&str; 12] = [
    "Laura", "Bob", "Ian", "Alice", "Kevin", "Diana", "George", "Charlie", "Julie", "Edward",
    "Hannah", "Fiona",
];

/// Team member row used by engine tests.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Member {
    /// 1-based identifier.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Lowercase email derived from the name.
    pub email: String,
    /// Team label; rotates through three teams.
    pub team: String,
    /// Score with frequent ties, for stability checks.
    pub score: u32,
}

impl Record for Member {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}

const TEAMS: [&str; 3] = ["Platform", "Design", "Growth"];

/// Build members from names; ids follow input order starting at 1.
#[must_use]
pub fn members(names: &[&str]) -> Vec<Member> {
    names
        .iter()
        .zip(1_u32..)
        .map(|(name, id)| Member {
            id,
            name: (*name).to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            team: TEAMS[(id as usize - 1) % TEAMS.len()].to_string(),
            score: id % 3,
        })
        .collect()
}

/// The twelve-member roster.
#[must_use]
pub fn roster() -> Vec<Member> {
    members(&ROSTER)
}

fn member_name(member: &Member) -> FieldValue<'_> {
    FieldValue::text(&member.name)
}

fn member_email(member: &Member) -> FieldValue<'_> {
    FieldValue::text(&member.email)
}

fn member_team(member: &Member) -> FieldValue<'_> {
    FieldValue::text(&member.team)
}

fn member_score(member: &Member) -> FieldValue<'_> {
    FieldValue::number(member.score)
}

/// Schema searching name, email, and team; every column sortable.
///
/// # Errors
///
/// Never fails in practice; column keys are unique.
pub fn member_schema() -> TableResult<TableSchema<Member>> {
    TableSchema::new(vec![
        Column::new("name", "Name", member_name).searchable(),
        Column::new("email", "Email", member_email).searchable(),
        Column::new("team", "Team", member_team).searchable(),
        Column::new("score", "Score", member_score),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn members_get_sequential_ids_and_derived_fields() {
        let built = members(&["Ada", "Grace"]);
        assert_eq!(built[0].id, 1);
        assert_eq!(built[1].email, "grace@example.com");
        assert_eq!(built[1].team, "Design");
        assert_eq!(built[0].score, 1);
    }

    #[test]
    fn roster_has_twelve_unique_ids() {
        let roster = roster();
        assert_eq!(roster.len(), 12);
        let mut ids: Vec<_> = roster.iter().map(Record::id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 12);
    }

    #[test]
    fn schema_builds() {
        let schema = member_schema().unwrap();
        assert_eq!(schema.searchable_keys(), vec!["name", "email", "team"]);
    }
}
