//! Sample user directory backing the tables demo.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::Serialize;
use vitrine_table::{Column, FieldValue, Record, TableResult, TableSchema};

use crate::error::ShowcaseError;

/// Access level shown in the role badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Role {
    /// Full administrative access.
    Admin,
    /// Regular account.
    User,
    /// Content editor.
    Editor,
}

impl Role {
    /// Display and sort text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::User => "User",
            Self::Editor => "Editor",
        }
    }
}

impl Display for Role {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ShowcaseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            "editor" => Ok(Self::Editor),
            _ => Err(ShowcaseError::UnknownRole {
                value: value.to_string(),
            }),
        }
    }
}

/// Account status shown in the status badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    /// Account in use.
    Active,
    /// Account disabled.
    Inactive,
}

impl UserStatus {
    /// Lowercase key used for sorting.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    /// Badge label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

impl FromStr for UserStatus {
    type Err = ShowcaseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            _ => Err(ShowcaseError::UnknownStatus {
                value: value.to_string(),
            }),
        }
    }
}

/// One row of the user directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct User {
    /// Stable identifier.
    pub id: u32,
    /// Full name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Access level.
    pub role: Role,
    /// Account status.
    pub status: UserStatus,
    /// Join date as displayed (`Mar 14, 2022`).
    pub joined: String,
}

impl Record for User {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}

const DIRECTORY: [(&str, &str, Role, UserStatus, &str); 12] = [
    ("Alice Smith", "alice@example.com", Role::Admin, UserStatus::Active, "Mar 14, 2022"),
    ("Bob Johnson", "bob@example.com", Role::User, UserStatus::Active, "Apr 21, 2022"),
    ("Charlie Brown", "charlie@example.com", Role::User, UserStatus::Inactive, "May 04, 2022"),
    ("Diana Miller", "diana@example.com", Role::Editor, UserStatus::Active, "Jun 18, 2022"),
    ("Edward Wilson", "edward@example.com", Role::User, UserStatus::Active, "Jul 02, 2022"),
    ("Fiona Taylor", "fiona@example.com", Role::Admin, UserStatus::Inactive, "Aug 11, 2022"),
    ("George Davis", "george@example.com", Role::User, UserStatus::Active, "Sep 30, 2022"),
    ("Hannah Clark", "hannah@example.com", Role::Editor, UserStatus::Active, "Oct 15, 2022"),
    ("Ian Moore", "ian@example.com", Role::User, UserStatus::Active, "Nov 23, 2022"),
    ("Julie Adams", "julie@example.com", Role::Admin, UserStatus::Inactive, "Dec 07, 2022"),
    ("Kevin Nelson", "kevin@example.com", Role::User, UserStatus::Active, "Jan 19, 2023"),
    ("Laura Hill", "laura@example.com", Role::Editor, UserStatus::Active, "Feb 28, 2023"),
];

/// The twelve demo users, ids 1 through 12.
#[must_use]
pub fn users() -> Vec<User> {
    DIRECTORY
        .iter()
        .zip(1_u32..)
        .map(|(&(name, email, role, status, joined), id)| User {
            id,
            name: name.to_string(),
            email: email.to_string(),
            role,
            status,
            joined: joined.to_string(),
        })
        .collect()
}

fn user_name(user: &User) -> FieldValue<'_> {
    FieldValue::text(&user.name)
}

fn user_email(user: &User) -> FieldValue<'_> {
    FieldValue::text(&user.email)
}

fn user_role(user: &User) -> FieldValue<'_> {
    FieldValue::text(user.role.as_str())
}

fn user_status(user: &User) -> FieldValue<'_> {
    FieldValue::text(user.status.as_str())
}

fn user_joined(user: &User) -> FieldValue<'_> {
    FieldValue::text(&user.joined)
}

/// Columns of the advanced users table.
///
/// Name, email, and role are searchable; every column is sortable. The join
/// date sorts by its display text.
///
/// # Errors
///
/// Propagates schema construction errors; the keys here are unique.
pub fn user_schema() -> TableResult<TableSchema<User>> {
    TableSchema::new(vec![
        Column::new("name", "Name", user_name).searchable(),
        Column::new("email", "Email", user_email).searchable(),
        Column::new("role", "Role", user_role).searchable(),
        Column::new("status", "Status", user_status),
        Column::new("joined", "Joined", user_joined),
    ])
}
