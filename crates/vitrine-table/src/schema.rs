//! Typed column schema replacing dynamic field lookups.
//!
//! # Design
//! - Each column maps a stable key to an extraction function over the row type.
//! - Search and sort eligibility are flags on the column, not separate lists.
//! - Values compare with native string/number ordering; mixed columns rank
//!   numbers before text so the order stays total.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt::{self, Debug, Formatter};

use crate::error::{TableError, TableResult};

/// Primitive value extracted from a row for searching and sorting.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue<'a> {
    /// Text value (names, emails, enumerated statuses).
    Text(Cow<'a, str>),
    /// Numeric value.
    Number(f64),
}

impl<'a> FieldValue<'a> {
    /// Borrow a string slice as a text value.
    #[must_use]
    pub const fn text(value: &'a str) -> Self {
        Self::Text(Cow::Borrowed(value))
    }

    /// Wrap any losslessly convertible number.
    #[must_use]
    pub fn number(value: impl Into<f64>) -> Self {
        Self::Number(value.into())
    }

    /// Compare two values using native `<`/`>` semantics.
    ///
    /// NaN falls back to IEEE total ordering so sorting never observes an
    /// inconsistent comparator.
    #[must_use]
    pub fn native_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Text(left), Self::Text(right)) => left.as_ref().cmp(right.as_ref()),
            (Self::Number(left), Self::Number(right)) => left
                .partial_cmp(right)
                .unwrap_or_else(|| left.total_cmp(right)),
            (Self::Number(_), Self::Text(_)) => Ordering::Less,
            (Self::Text(_), Self::Number(_)) => Ordering::Greater,
        }
    }

    /// Render the value the way it is matched against search queries.
    #[must_use]
    pub fn display(&self) -> Cow<'_, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text.as_ref()),
            Self::Number(number) => Cow::Owned(number.to_string()),
        }
    }

    /// Case-insensitive substring test; `needle` must already be lowercase.
    pub(crate) fn contains_folded(&self, needle: &str) -> bool {
        self.display().to_lowercase().contains(needle)
    }
}

/// Extraction function reading one field from a row.
pub type Extractor<R> = for<'r> fn(&'r R) -> FieldValue<'r>;

/// A named, typed column over rows of type `R`.
pub struct Column<R> {
    key: &'static str,
    label: &'static str,
    extract: Extractor<R>,
    searchable: bool,
    sortable: bool,
}

impl<R> Column<R> {
    /// Sortable, non-searchable column.
    #[must_use]
    pub const fn new(key: &'static str, label: &'static str, extract: Extractor<R>) -> Self {
        Self {
            key,
            label,
            extract,
            searchable: false,
            sortable: true,
        }
    }

    /// Include this column in search-query matching.
    #[must_use]
    pub const fn searchable(mut self) -> Self {
        self.searchable = true;
        self
    }

    /// Exclude this column from sorting; sort requests against it become no-ops.
    #[must_use]
    pub const fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    /// Stable key used in view state and sort requests.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        self.key
    }

    /// Header label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.label
    }

    /// Whether search queries consider this column.
    #[must_use]
    pub const fn is_searchable(&self) -> bool {
        self.searchable
    }

    /// Whether sort requests may target this column.
    #[must_use]
    pub const fn is_sortable(&self) -> bool {
        self.sortable
    }

    /// Read this column's value from `record`.
    #[must_use]
    pub fn value<'r>(&self, record: &'r R) -> FieldValue<'r> {
        (self.extract)(record)
    }
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Column<R> {}

impl<R> Debug for Column<R> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Column")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("searchable", &self.searchable)
            .field("sortable", &self.sortable)
            .finish_non_exhaustive()
    }
}

/// Ordered set of columns describing a table.
pub struct TableSchema<R> {
    columns: Vec<Column<R>>,
}

impl<R> TableSchema<R> {
    /// Build a schema, rejecting duplicate column keys.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::DuplicateColumn`] when two columns share a key.
    pub fn new(columns: Vec<Column<R>>) -> TableResult<Self> {
        let mut seen = BTreeSet::new();
        for column in &columns {
            if !seen.insert(column.key) {
                return Err(TableError::DuplicateColumn { key: column.key });
            }
        }
        Ok(Self { columns })
    }

    /// All columns in display order.
    #[must_use]
    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    /// Look up a column by key.
    #[must_use]
    pub fn column(&self, key: &str) -> Option<&Column<R>> {
        self.columns.iter().find(|column| column.key == key)
    }

    /// Look up a column that may be sorted on.
    #[must_use]
    pub fn sort_column(&self, key: &str) -> Option<&Column<R>> {
        self.column(key).filter(|column| column.sortable)
    }

    /// Columns consulted by search queries.
    pub fn searchable_columns(&self) -> impl Iterator<Item = &Column<R>> {
        self.columns.iter().filter(|column| column.searchable)
    }

    /// Keys of searchable columns in display order.
    #[must_use]
    pub fn searchable_keys(&self) -> Vec<&'static str> {
        self.searchable_columns().map(Column::key).collect()
    }

    /// Keys of sortable columns in display order.
    #[must_use]
    pub fn sortable_keys(&self) -> Vec<&'static str> {
        self.columns
            .iter()
            .filter(|column| column.sortable)
            .map(Column::key)
            .collect()
    }
}

impl<R> Clone for TableSchema<R> {
    fn clone(&self) -> Self {
        Self {
            columns: self.columns.clone(),
        }
    }
}

impl<R> Debug for TableSchema<R> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("TableSchema")
            .field("columns", &self.columns)
            .finish()
    }
}
