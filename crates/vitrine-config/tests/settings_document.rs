use std::io::Write;

use anyhow::Result;
use tempfile::NamedTempFile;
use vitrine_config::{ConfigError, ENV_PAGE_SIZE, TableSettings, load_settings_with};
use vitrine_table::SortDirection;

fn document(body: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(body.as_bytes())?;
    Ok(file)
}

#[test]
fn document_then_environment() -> Result<()> {
    let file = document(
        r#"{
            "default_page_size": 10,
            "page_size_options": [10, 25],
            "default_sort_key": "joined",
            "default_sort_direction": "descending",
            "pager_buttons": 7
        }"#,
    )?;

    let settings = load_settings_with(Some(file.path()), |_| None)?;
    assert_eq!(settings.default_page_size, 10);
    assert_eq!(settings.page_size_options, vec![10, 25]);
    assert_eq!(settings.pager_buttons, 7);
    assert_eq!(settings.default_sort_direction, SortDirection::Descending);

    let overridden =
        load_settings_with(Some(file.path()), |key| (key == ENV_PAGE_SIZE).then(|| "25".into()))?;
    assert_eq!(overridden.default_page_size, 25);
    assert_eq!(overridden.initial_view_state().page_size, 25);
    assert_eq!(overridden.default_sort_key.as_deref(), Some("joined"));
    Ok(())
}

#[test]
fn missing_document_is_an_io_error() {
    let err = load_settings_with(
        Some(std::path::Path::new("/nonexistent/vitrine/settings.json")),
        |_| None,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Io {
            operation: "settings.read",
            ..
        }
    ));
}

#[test]
fn unknown_fields_are_parse_errors() -> Result<()> {
    let file = document(r#"{"rows_per_page": 10}"#)?;
    let err = load_settings_with(Some(file.path()), |_| None).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    Ok(())
}

#[test]
fn document_violating_invariants_is_rejected() -> Result<()> {
    let file = document(r#"{"default_page_size": 15}"#)?;
    let err = load_settings_with(Some(file.path()), |_| None).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidField {
            field: "default_page_size",
            ..
        }
    ));
    Ok(())
}

#[test]
fn empty_document_yields_defaults() -> Result<()> {
    let file = document("{}")?;
    let settings = load_settings_with(Some(file.path()), |_| None)?;
    assert_eq!(settings, TableSettings::default());
    Ok(())
}
