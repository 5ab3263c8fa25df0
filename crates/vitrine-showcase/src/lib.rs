#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]

//! Demo datasets and form helpers for the Vitrine component showcase.

pub mod error;
pub mod password;
pub mod projects;
pub mod theme;
pub mod users;

pub use error::{ShowcaseError, ShowcaseResult};
pub use password::{StrengthLevel, password_strength};
pub use projects::{Project, ProjectTask, WorkStatus, project_schema, projects};
pub use theme::{
    DEFAULT_RADIUS_PX, Rgb, SHADE_PERCENT, Theme, ThemeBuilder, apply_theme,
};
pub use users::{Role, User, UserStatus, user_schema, users};
