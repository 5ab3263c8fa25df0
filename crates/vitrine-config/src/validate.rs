//! Validation helpers and parsing utilities for settings overrides.

use vitrine_table::SortDirection;

use crate::error::{ConfigError, ConfigResult};
use crate::model::TableSettings;

fn invalid(field: &'static str, value: impl ToString, reason: &'static str) -> ConfigError {
    ConfigError::InvalidField {
        field,
        value: Some(value.to_string()),
        reason,
    }
}

/// Parse a strictly positive count.
pub(crate) fn parse_positive(field: &'static str, raw: &str) -> ConfigResult<usize> {
    let value = raw
        .trim()
        .parse::<usize>()
        .map_err(|_| invalid(field, raw, "must be an integer"))?;
    if value == 0 {
        return Err(invalid(field, raw, "must be positive"));
    }
    Ok(value)
}

/// Parse `asc`/`desc` (long forms accepted).
pub(crate) fn parse_direction(field: &'static str, raw: &str) -> ConfigResult<SortDirection> {
    raw.parse::<SortDirection>()
        .map_err(|_| invalid(field, raw, "must be asc or desc"))
}

/// Check cross-field invariants of a fully assembled settings value.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] naming the first offending field.
pub fn validate_settings(settings: &TableSettings) -> ConfigResult<()> {
    if settings.default_page_size == 0 {
        return Err(invalid("default_page_size", 0, "must be positive"));
    }
    if settings.pager_buttons == 0 {
        return Err(invalid("pager_buttons", 0, "must be positive"));
    }
    if settings.page_size_options.is_empty() {
        return Err(ConfigError::InvalidField {
            field: "page_size_options",
            value: None,
            reason: "must not be empty",
        });
    }
    if let Some(zero) = settings.page_size_options.iter().find(|size| **size == 0) {
        return Err(invalid("page_size_options", zero, "must be positive"));
    }
    if !settings.offers_page_size(settings.default_page_size) {
        return Err(invalid(
            "default_page_size",
            settings.default_page_size,
            "must be one of page_size_options",
        ));
    }
    if let Some(key) = &settings.default_sort_key
        && key.trim().is_empty()
    {
        return Err(invalid("default_sort_key", key, "must not be blank"));
    }
    Ok(())
}
