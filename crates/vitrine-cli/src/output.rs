//! Output renderers and formatting helpers for CLI commands.

use anyhow::anyhow;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::commands::password::PasswordReport;
use crate::commands::projects::ProjectsReport;
use crate::commands::themes::ThemesReport;
use crate::commands::users::UsersReport;
use crate::error::{CliError, CliResult};

const METER_WIDTH: usize = 10;

fn to_json<T: Serialize>(value: &T) -> CliResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|err| CliError::failure(anyhow!("failed to format JSON: {err}")))
}

pub(crate) fn render_users(report: &UsersReport, format: OutputFormat) -> CliResult<String> {
    if format == OutputFormat::Json {
        return to_json(report);
    }

    let mut lines = Vec::new();
    let sort = report.sort_key.as_deref().map_or_else(
        || "none".to_string(),
        |key| format!("{key} {}", report.sort_direction),
    );
    if report.query.is_empty() {
        lines.push(format!("sort: {sort}"));
    } else {
        lines.push(format!("sort: {sort}  query: \"{}\"", report.query));
    }
    lines.push(format!(
        "{:<4}{:>3}  {:<16} {:<22} {:<7} {:<9} JOINED",
        checkbox(report.all_visible_selected),
        "ID",
        "NAME",
        "EMAIL",
        "ROLE",
        "STATUS"
    ));
    if report.rows.is_empty() {
        lines.push("no users match the current search".to_string());
    }
    for row in &report.rows {
        let user = &row.user;
        lines.push(format!(
            "{:<4}{:>3}  {:<16} {:<22} {:<7} {:<9} {}",
            checkbox(row.selected),
            user.id,
            user.name,
            user.email,
            user.role.as_str(),
            user.status.label(),
            user.joined
        ));
    }
    lines.push(report.range_label.clone());
    lines.push(format!(
        "pages: {}",
        pager_line(&report.pager, report.page, report.has_previous, report.has_next)
    ));
    lines.push(format!(
        "selected: {} total, {} on this page",
        report.selected.len(),
        report.selected_on_page
    ));
    Ok(lines.join("\n"))
}

pub(crate) fn render_projects(report: &ProjectsReport, format: OutputFormat) -> CliResult<String> {
    if format == OutputFormat::Json {
        return to_json(report);
    }

    let mut lines = vec![format!(
        "    {:>3}  {:<24} {:<18} {:<14} {:>8}  STATUS",
        "ID", "PROJECT", "CLIENT", "DEADLINE", "PROGRESS"
    )];
    for row in &report.rows {
        let project = &row.project;
        lines.push(format!(
            " {}  {:>3}  {:<24} {:<18} {:<14} {:>7}%  {}",
            if row.expanded { 'v' } else { '>' },
            project.id,
            project.name,
            project.client,
            project.deadline,
            project.progress,
            project.status.label()
        ));
        if row.expanded {
            lines.push(format!("        {}", project.description));
            lines.push(format!(
                "        tasks ({}/{} completed):",
                row.completed_tasks,
                project.tasks.len()
            ));
            for task in &project.tasks {
                lines.push(format!("          - {} [{}]", task.name, task.status.label()));
            }
            lines.push(format!("        team: {}", project.team.join(", ")));
        }
    }
    Ok(lines.join("\n"))
}

pub(crate) fn render_password(report: &PasswordReport, format: OutputFormat) -> CliResult<String> {
    if format == OutputFormat::Json {
        return to_json(report);
    }
    Ok(format!(
        "strength: {}/100 {} {} ({})",
        report.score,
        meter(report.score),
        report.label,
        report.tone
    ))
}

pub(crate) fn render_themes(report: &ThemesReport, format: OutputFormat) -> CliResult<String> {
    if format == OutputFormat::Json {
        return to_json(report);
    }

    let mut lines = vec![format!(
        "{:<9} {:<14} {:<27} {:<8} DESCRIPTION",
        "THEME", "CLASS", "PALETTE", "SWITCHER"
    )];
    for entry in &report.themes {
        lines.push(format!(
            "{:<9} {:<14} {:<27} {:<8} {}",
            entry.theme.as_str(),
            entry.class_name.unwrap_or("-"),
            entry.palette.join(" "),
            if entry.in_switcher { "yes" } else { "no" },
            entry.description
        ));
    }
    if let Some(applied) = &report.applied {
        lines.push(format!(
            "applied {}: {}",
            applied.theme,
            applied.classes.join(" ")
        ));
    }
    if let Some(built) = &report.built {
        lines.push(format!(
            "built: primary {} light {} dark {} secondary {} tertiary {} radius {}rem",
            built.primary,
            built.primary_light,
            built.primary_dark,
            built.secondary,
            built.tertiary,
            built.radius_rem
        ));
        lines.push(built.css.clone());
    }
    Ok(lines.join("\n"))
}

const fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

fn pager_line(pages: &[usize], current: usize, has_previous: bool, has_next: bool) -> String {
    let mut parts = vec![if has_previous { "<" } else { "-" }.to_string()];
    parts.extend(pages.iter().map(|page| {
        if *page == current {
            format!("[{page}]")
        } else {
            page.to_string()
        }
    }));
    parts.push(if has_next { ">" } else { "-" }.to_string());
    parts.join(" ")
}

fn meter(score: u8) -> String {
    let filled = usize::from(score.min(100)) * METER_WIDTH / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(METER_WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{ProjectsArgs, ThemesArgs, UsersArgs};
    use crate::commands::password::score_password;
    use crate::commands::projects::build_projects_report;
    use crate::commands::themes::build_themes_report;
    use crate::commands::users::build_users_report;
    use vitrine_config::TableSettings;

    #[test]
    fn pager_marks_current_page_and_bounds() {
        assert_eq!(pager_line(&[1, 2, 3], 1, false, true), "- [1] 2 3 >");
        assert_eq!(pager_line(&[4, 5, 6], 6, true, false), "< 4 5 [6] -");
    }

    #[test]
    fn meter_scales_to_width() {
        assert_eq!(meter(0), "[----------]");
        assert_eq!(meter(60), "[######----]");
        assert_eq!(meter(100), "[##########]");
    }

    #[test]
    fn users_table_shows_selection_and_footer() {
        let report = build_users_report(
            UsersArgs {
                select: vec![2],
                ..UsersArgs::default()
            },
            &TableSettings::default(),
        )
        .expect("report");
        let text = render_users(&report, OutputFormat::Table).expect("render");
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "sort: name asc");
        assert!(lines[1].starts_with("[ ]"));
        assert!(lines[2].starts_with("[ ]") && lines[2].contains("Alice Smith"));
        assert!(lines[3].starts_with("[x]") && lines[3].contains("Bob Johnson"));
        assert!(text.contains("Showing 1-5 of 12"));
        assert!(text.contains("pages: - [1] 2 3 >"));
        assert!(text.ends_with("selected: 1 total, 1 on this page"));
    }

    #[test]
    fn empty_search_renders_placeholder() {
        let report = build_users_report(
            UsersArgs {
                query: Some("zzz".into()),
                ..UsersArgs::default()
            },
            &TableSettings::default(),
        )
        .expect("report");
        let text = render_users(&report, OutputFormat::Table).expect("render");
        assert!(text.contains("query: \"zzz\""));
        assert!(text.contains("no users match the current search"));
        assert!(text.contains("Showing 0-0 of 0"));
        assert!(text.contains("pages: - [1] -"));
    }

    #[test]
    fn users_json_flattens_rows() {
        let report =
            build_users_report(UsersArgs::default(), &TableSettings::default()).expect("report");
        let text = render_users(&report, OutputFormat::Json).expect("render");
        let value: serde_json::Value = serde_json::from_str(&text).expect("json");
        assert_eq!(value["rows"][0]["name"], "Alice Smith");
        assert_eq!(value["rows"][0]["selected"], false);
        assert_eq!(value["rows"][0]["status"], "active");
        assert_eq!(value["sort_direction"], "ascending");
        assert_eq!(value["range_label"], "Showing 1-5 of 12");
    }

    #[test]
    fn expanded_project_shows_details() {
        let report = build_projects_report(&ProjectsArgs { expand: vec![1] }).expect("report");
        let text = render_projects(&report, OutputFormat::Table).expect("render");
        assert!(text.contains(" v    1  Website Redesign"));
        assert!(text.contains("tasks (2/4 completed):"));
        assert!(text.contains("- Frontend Development [In Progress]"));
        assert!(text.contains("team: Alice Smith, Bob Johnson, Charlie Brown"));
        assert!(!text.contains("Requirements Gathering"));
    }

    #[test]
    fn password_line_includes_meter() {
        let text = render_password(&score_password("Abcdef1!"), OutputFormat::Table)
            .expect("render");
        assert_eq!(text, "strength: 100/100 [##########] Strong (success)");
    }

    #[test]
    fn themes_table_and_applied_classes() {
        let report = build_themes_report(&ThemesArgs {
            apply: Some("red".into()),
            classes: vec!["theme-blue".into()],
            ..ThemesArgs::default()
        })
        .expect("report");
        let text = render_themes(&report, OutputFormat::Table).expect("render");
        assert!(text.contains("purple    theme-purple"));
        assert!(text.ends_with("applied red: theme-red"));

        let json = render_themes(&report, OutputFormat::Json).expect("render");
        let value: serde_json::Value = serde_json::from_str(&json).expect("json");
        assert_eq!(value["themes"][0]["theme"], "default");
        assert_eq!(value["applied"]["classes"][0], "theme-red");
        assert!(value.get("built").is_none());
    }

    #[test]
    fn built_theme_renders_summary_and_css() {
        let report = build_themes_report(&ThemesArgs {
            build: true,
            ..ThemesArgs::default()
        })
        .expect("report");
        let text = render_themes(&report, OutputFormat::Table).expect("render");
        assert!(text.contains(
            "built: primary #1fa37c light #28d4a1 dark #167257 secondary #333333 tertiary #006a76 radius 0.5rem"
        ));
        assert!(text.contains("    --brand-primary-light: 40 212 161; /* #28d4a1 */"));
        assert!(text.ends_with("  }\n}"));

        let json = render_themes(&report, OutputFormat::Json).expect("render");
        let value: serde_json::Value = serde_json::from_str(&json).expect("json");
        assert_eq!(value["built"]["primary_dark"], "#167257");
        assert_eq!(value["built"]["radius_rem"], 0.5);
    }
}
