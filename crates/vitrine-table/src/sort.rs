//! Sort direction, header-click transitions, and the stable column sort.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::schema::TableSchema;

/// Sort direction for the active column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest values first.
    #[default]
    Ascending,
    /// Largest values first.
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Short lowercase label (`asc` / `desc`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

impl Display for SortDirection {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            other => Err(format!("unknown sort direction '{other}'")),
        }
    }
}

/// Header-click transition.
///
/// Clicking the active column flips its direction; clicking any other column
/// adopts it in ascending order.
#[must_use]
pub fn toggle_sort(
    current_key: Option<&str>,
    current_direction: SortDirection,
    clicked_key: &str,
) -> (String, SortDirection) {
    if current_key == Some(clicked_key) {
        (clicked_key.to_string(), current_direction.flipped())
    } else {
        (clicked_key.to_string(), SortDirection::Ascending)
    }
}

/// Stable in-place sort of `rows` by the column named `key`.
///
/// Returns `false` without reordering when `key` names no sortable column.
pub fn sort_records<R>(
    rows: &mut [&R],
    schema: &TableSchema<R>,
    key: &str,
    direction: SortDirection,
) -> bool {
    let Some(column) = schema.sort_column(key) else {
        return false;
    };
    rows.sort_by(|left, right| {
        let ordering = column.value(*left).native_cmp(&column.value(*right));
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    true
}
