//! Settings loader: JSON document, then environment overrides, then validation.
//!
//! # Design
//! - A missing path yields defaults; a path that cannot be read is an error.
//! - Overrides are read through a lookup function so callers and tests can
//!   supply their own environment.

use std::env;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::defaults::{ENV_PAGE_SIZE, ENV_SORT_DIRECTION, ENV_SORT_KEY};
use crate::error::{ConfigError, ConfigResult};
use crate::model::TableSettings;
use crate::validate::{parse_direction, parse_positive, validate_settings};

/// Load settings from `path` (when given) and the process environment.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] or [`ConfigError::Parse`] when the document
/// cannot be read, and [`ConfigError::InvalidField`] when an override or the
/// assembled settings fail validation.
pub fn load_settings(path: Option<&Path>) -> ConfigResult<TableSettings> {
    load_settings_with(path, |key| env::var(key).ok())
}

/// Same as [`load_settings`] with an explicit environment lookup.
///
/// # Errors
///
/// See [`load_settings`].
pub fn load_settings_with<F>(path: Option<&Path>, lookup: F) -> ConfigResult<TableSettings>
where
    F: Fn(&str) -> Option<String>,
{
    let mut settings = match path {
        Some(path) => read_settings_file(path)?,
        None => TableSettings::default(),
    };
    apply_overrides(&mut settings, lookup)?;
    validate_settings(&settings)?;
    Ok(settings)
}

/// Parse a settings document; omitted fields keep their defaults.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] when the file cannot be read and
/// [`ConfigError::Parse`] when it is not a valid settings document.
pub fn read_settings_file(path: &Path) -> ConfigResult<TableSettings> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        operation: "settings.read",
        source,
    })?;
    let settings =
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse { source })?;
    debug!(path = %path.display(), "loaded table settings document");
    Ok(settings)
}

/// Apply `VITRINE_*` overrides on top of `settings`.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] when an override cannot be parsed.
pub fn apply_overrides<F>(settings: &mut TableSettings, lookup: F) -> ConfigResult<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(raw) = lookup(ENV_PAGE_SIZE) {
        settings.default_page_size = parse_positive("default_page_size", &raw)?;
        debug!(page_size = settings.default_page_size, "page size overridden from environment");
    }
    if let Some(raw) = lookup(ENV_SORT_KEY) {
        let key = raw.trim();
        settings.default_sort_key = (!key.is_empty()).then(|| key.to_string());
        debug!(sort_key = key, "sort key overridden from environment");
    }
    if let Some(raw) = lookup(ENV_SORT_DIRECTION) {
        settings.default_sort_direction = parse_direction("default_sort_direction", &raw)?;
        debug!(
            sort_direction = settings.default_sort_direction.as_str(),
            "sort direction overridden from environment"
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_table::SortDirection;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_without_document_or_env() {
        let settings = load_settings_with(None, no_env).unwrap();
        assert_eq!(settings, TableSettings::default());
    }

    #[test]
    fn env_overrides_apply() {
        let settings = load_settings_with(None, |key| match key {
            ENV_PAGE_SIZE => Some("20".into()),
            ENV_SORT_KEY => Some("email".into()),
            ENV_SORT_DIRECTION => Some("desc".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(settings.default_page_size, 20);
        assert_eq!(settings.default_sort_key.as_deref(), Some("email"));
        assert_eq!(settings.default_sort_direction, SortDirection::Descending);
    }

    #[test]
    fn blank_sort_key_clears_default() {
        let mut settings = TableSettings::default();
        apply_overrides(&mut settings, |key| (key == ENV_SORT_KEY).then(String::new)).unwrap();
        assert_eq!(settings.default_sort_key, None);
    }

    #[test]
    fn zero_page_size_override_is_rejected() {
        let err = load_settings_with(None, |key| (key == ENV_PAGE_SIZE).then(|| "0".into()))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidField {
                field: "default_page_size",
                reason: "must be positive",
                ..
            }
        ));
    }

    #[test]
    fn unlisted_page_size_override_fails_validation() {
        let err = load_settings_with(None, |key| (key == ENV_PAGE_SIZE).then(|| "7".into()))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidField {
                reason: "must be one of page_size_options",
                ..
            }
        ));
    }
}
