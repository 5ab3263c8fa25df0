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

//! Table settings loaded from an optional JSON document and `VITRINE_*`
//! environment overrides.
//!
//! Layout: `model.rs` (typed settings), `validate.rs` (parsing and
//! cross-field checks), `loader.rs` (file + environment assembly).

pub mod defaults;
pub mod error;
pub mod loader;
pub mod model;
pub mod validate;

pub use defaults::{ENV_PAGE_SIZE, ENV_SORT_DIRECTION, ENV_SORT_KEY};
pub use error::{ConfigError, ConfigResult};
pub use loader::{apply_overrides, load_settings, load_settings_with, read_settings_file};
pub use model::TableSettings;
pub use validate::validate_settings;
