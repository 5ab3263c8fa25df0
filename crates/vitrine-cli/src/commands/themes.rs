use std::collections::BTreeSet;

use serde::Serialize;
use vitrine_showcase::{Rgb, ShowcaseError, Theme, ThemeBuilder, apply_theme};

use crate::cli::{OutputFormat, ThemesArgs};
use crate::error::{CliError, CliResult};
use crate::output::render_themes;

#[derive(Debug, Serialize)]
pub(crate) struct ThemesReport {
    pub(crate) themes: Vec<ThemeEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) applied: Option<AppliedTheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) built: Option<BuiltTheme>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ThemeEntry {
    pub(crate) theme: Theme,
    pub(crate) class_name: Option<&'static str>,
    pub(crate) palette: [&'static str; 3],
    pub(crate) description: &'static str,
    pub(crate) in_switcher: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct AppliedTheme {
    pub(crate) theme: Theme,
    pub(crate) classes: Vec<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct BuiltTheme {
    pub(crate) primary: String,
    pub(crate) primary_light: String,
    pub(crate) primary_dark: String,
    pub(crate) secondary: String,
    pub(crate) tertiary: String,
    pub(crate) radius_rem: f64,
    pub(crate) css: String,
}

pub(crate) fn handle_themes(args: &ThemesArgs, format: OutputFormat) -> CliResult<String> {
    render_themes(&build_themes_report(args)?, format)
}

pub(crate) fn build_themes_report(args: &ThemesArgs) -> CliResult<ThemesReport> {
    let applied = match &args.apply {
        Some(name) => {
            let theme = name.parse::<Theme>().map_err(|err| match err {
                ShowcaseError::UnknownTheme { value } => CliError::validation(format!(
                    "unknown theme '{value}' (expected default, blue, purple, or red)"
                )),
                other => CliError::failure(other),
            })?;
            let current: BTreeSet<String> = args.classes.iter().cloned().collect();
            Some(AppliedTheme {
                theme,
                classes: apply_theme(&current, theme).into_iter().collect(),
            })
        }
        None => None,
    };

    let built = if args.build {
        Some(build_custom_theme(args)?)
    } else {
        None
    };

    Ok(ThemesReport {
        themes: Theme::ALL
            .iter()
            .map(|theme| ThemeEntry {
                theme: *theme,
                class_name: theme.class_name(),
                palette: theme.palette(),
                description: theme.description(),
                in_switcher: Theme::SWITCHER.contains(theme),
            })
            .collect(),
        applied,
        built,
    })
}

fn build_custom_theme(args: &ThemesArgs) -> CliResult<BuiltTheme> {
    let defaults = ThemeBuilder::default();
    let builder = ThemeBuilder {
        primary: colour_arg("primary", args.primary.as_deref(), defaults.primary)?,
        secondary: colour_arg("secondary", args.secondary.as_deref(), defaults.secondary)?,
        tertiary: colour_arg("tertiary", args.tertiary.as_deref(), defaults.tertiary)?,
        radius_px: args.radius.unwrap_or(defaults.radius_px),
    };
    Ok(BuiltTheme {
        primary: builder.primary.to_hex(),
        primary_light: builder.primary_light().to_hex(),
        primary_dark: builder.primary_dark().to_hex(),
        secondary: builder.secondary.to_hex(),
        tertiary: builder.tertiary.to_hex(),
        radius_rem: builder.radius_rem(),
        css: builder.to_css(),
    })
}

fn colour_arg(flag: &str, value: Option<&str>, fallback: Rgb) -> CliResult<Rgb> {
    value.map_or(Ok(fallback), |text| {
        Rgb::from_hex(text).map_err(|err| match err {
            ShowcaseError::InvalidColor { value } => CliError::validation(format!(
                "--{flag} must be a #rrggbb colour (got '{value}')"
            )),
            other => CliError::failure(other),
        })
    })
}
