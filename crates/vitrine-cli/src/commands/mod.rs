//! Command handlers grouped by showcase page.

pub(crate) mod password;
pub(crate) mod projects;
pub(crate) mod themes;
pub(crate) mod users;
