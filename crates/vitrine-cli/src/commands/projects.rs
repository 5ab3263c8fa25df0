use anyhow::anyhow;
use serde::Serialize;
use tracing::warn;
use vitrine_showcase::{Project, project_schema, projects};
use vitrine_table::{TableEvent, TableSession, ViewState};

use crate::cli::{OutputFormat, ProjectsArgs};
use crate::error::{CliError, CliResult};
use crate::output::render_projects;

#[derive(Debug, Serialize)]
pub(crate) struct ProjectsReport {
    pub(crate) rows: Vec<ProjectRow>,
    pub(crate) expanded: Vec<u32>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ProjectRow {
    pub(crate) expanded: bool,
    pub(crate) completed_tasks: usize,
    #[serde(flatten)]
    pub(crate) project: Project,
}

pub(crate) fn handle_projects(args: &ProjectsArgs, format: OutputFormat) -> CliResult<String> {
    let report = build_projects_report(args)?;
    render_projects(&report, format)
}

pub(crate) fn build_projects_report(args: &ProjectsArgs) -> CliResult<ProjectsReport> {
    let rows = projects();
    let page_size = rows.len().max(1);
    let schema = project_schema()
        .map_err(|err| CliError::failure(anyhow!("failed to build project schema: {err}")))?;
    let mut session = TableSession::new(rows, schema, ViewState::new(None, page_size))
        .map_err(|err| CliError::failure(anyhow!("failed to open projects table: {err}")))?;

    for id in &args.expand {
        if !session.records().iter().any(|project| project.id == *id) {
            warn!(project_id = id, "no project with this id");
        }
        session
            .apply(TableEvent::ToggleExpanded(*id))
            .map_err(|err| CliError::failure(anyhow!("failed to expand project {id}: {err}")))?;
    }

    let view = session
        .view()
        .map_err(|err| CliError::failure(anyhow!("failed to derive projects view: {err}")))?;
    Ok(ProjectsReport {
        rows: view
            .visible_records
            .iter()
            .map(|project| ProjectRow {
                expanded: session.is_expanded(&project.id),
                completed_tasks: project.completed_tasks(),
                project: (*project).clone(),
            })
            .collect(),
        expanded: session.expanded().iter().copied().collect(),
    })
}
