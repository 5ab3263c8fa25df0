//! Search-query filtering over searchable columns.

use crate::schema::TableSchema;

/// Keep rows where any searchable column contains `query`, ignoring case.
///
/// An empty query keeps every row. Input order is preserved.
#[must_use]
pub fn filter_records<'a, R>(records: &'a [R], schema: &TableSchema<R>, query: &str) -> Vec<&'a R> {
    if query.is_empty() {
        return records.iter().collect();
    }
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| matches_query(*record, schema, &needle))
        .collect()
}

/// Whether `record` matches an already-lowercased needle.
fn matches_query<R>(record: &R, schema: &TableSchema<R>, needle: &str) -> bool {
    schema
        .searchable_columns()
        .any(|column| column.value(record).contains_folded(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Column, FieldValue};

    struct Contact {
        name: &'static str,
        email: &'static str,
        team: &'static str,
    }

    fn contact_name(contact: &Contact) -> FieldValue<'_> {
        FieldValue::text(contact.name)
    }

    fn contact_email(contact: &Contact) -> FieldValue<'_> {
        FieldValue::text(contact.email)
    }

    fn contact_team(contact: &Contact) -> FieldValue<'_> {
        FieldValue::text(contact.team)
    }

    fn schema() -> TableSchema<Contact> {
        TableSchema::new(vec![
            Column::new("name", "Name", contact_name).searchable(),
            Column::new("email", "Email", contact_email).searchable(),
            Column::new("team", "Team", contact_team),
        ])
        .unwrap()
    }

    fn contacts() -> Vec<Contact> {
        vec![
            Contact {
                name: "Alice Smith",
                email: "alice@example.com",
                team: "Platform",
            },
            Contact {
                name: "Bob Johnson",
                email: "bob@example.com",
                team: "Design",
            },
        ]
    }

    #[test]
    fn empty_query_keeps_everything() {
        let rows = contacts();
        assert_eq!(filter_records(&rows, &schema(), "").len(), 2);
    }

    #[test]
    fn query_matches_any_searchable_column_case_insensitively() {
        let rows = contacts();
        let by_name = filter_records(&rows, &schema(), "ALICE");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Alice Smith");

        let by_email = filter_records(&rows, &schema(), "bob@");
        assert_eq!(by_email.len(), 1);
        assert_eq!(by_email[0].name, "Bob Johnson");
    }

    #[test]
    fn non_searchable_columns_are_ignored() {
        let rows = contacts();
        assert!(filter_records(&rows, &schema(), "design").is_empty());
    }

    #[test]
    fn shared_substring_keeps_input_order() {
        let rows = contacts();
        let matched = filter_records(&rows, &schema(), "example");
        let names: Vec<_> = matched.iter().map(|contact| contact.name).collect();
        assert_eq!(names, vec!["Alice Smith", "Bob Johnson"]);
    }
}
