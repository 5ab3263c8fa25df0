//! Sample projects backing the expandable table.

use std::str::FromStr;

use serde::Serialize;
use vitrine_table::{Column, FieldValue, Record, TableResult, TableSchema};

use crate::error::ShowcaseError;

/// Lifecycle status shared by projects and their tasks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkStatus {
    /// Finished.
    Completed,
    /// Underway.
    InProgress,
    /// Behind schedule.
    Delayed,
    /// Not started.
    Pending,
}

impl WorkStatus {
    /// Kebab-case key (`in-progress`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::InProgress => "in-progress",
            Self::Delayed => "delayed",
            Self::Pending => "pending",
        }
    }

    /// Badge label (`In Progress`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::InProgress => "In Progress",
            Self::Delayed => "Delayed",
            Self::Pending => "Pending",
        }
    }
}

impl FromStr for WorkStatus {
    type Err = ShowcaseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "completed" => Ok(Self::Completed),
            "in-progress" => Ok(Self::InProgress),
            "delayed" => Ok(Self::Delayed),
            "pending" => Ok(Self::Pending),
            _ => Err(ShowcaseError::UnknownStatus {
                value: value.to_string(),
            }),
        }
    }
}

/// A task listed in a project's detail panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProjectTask {
    /// Identifier within the project.
    pub id: u32,
    /// Task name.
    pub name: String,
    /// Task status.
    pub status: WorkStatus,
}

/// One row of the expandable projects table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Project {
    /// Stable identifier.
    pub id: u32,
    /// Project name.
    pub name: String,
    /// Client organisation.
    pub client: String,
    /// Deadline as displayed.
    pub deadline: String,
    /// Completion percentage, 0 to 100.
    pub progress: u8,
    /// Overall status.
    pub status: WorkStatus,
    /// Detail panel description.
    pub description: String,
    /// Detail panel task list.
    pub tasks: Vec<ProjectTask>,
    /// Detail panel team members.
    pub team: Vec<String>,
}

impl Project {
    /// Number of tasks already completed.
    #[must_use]
    pub fn completed_tasks(&self) -> usize {
        self.tasks
            .iter()
            .filter(|task| task.status == WorkStatus::Completed)
            .count()
    }
}

impl Record for Project {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}

struct ProjectSeed {
    name: &'static str,
    client: &'static str,
    deadline: &'static str,
    progress: u8,
    status: WorkStatus,
    description: &'static str,
    tasks: &'static [(&'static str, WorkStatus)],
    team: [&'static str; 3],
}

const SEEDS: [ProjectSeed; 4] = [
    ProjectSeed {
        name: "Website Redesign",
        client: "Acme Corporation",
        deadline: "Aug 15, 2023",
        progress: 75,
        status: WorkStatus::InProgress,
        description: "Complete overhaul of corporate website with focus on improved UX and mobile responsiveness.",
        tasks: &[
            ("Wireframing", WorkStatus::Completed),
            ("UI Design", WorkStatus::Completed),
            ("Frontend Development", WorkStatus::InProgress),
            ("Backend Integration", WorkStatus::Pending),
        ],
        team: ["Alice Smith", "Bob Johnson", "Charlie Brown"],
    },
    ProjectSeed {
        name: "Mobile App Development",
        client: "TechStart Inc.",
        deadline: "Sep 30, 2023",
        progress: 45,
        status: WorkStatus::InProgress,
        description: "Developing a cross-platform mobile application for inventory management.",
        tasks: &[
            ("Requirements Gathering", WorkStatus::Completed),
            ("App Architecture", WorkStatus::Completed),
            ("UI Implementation", WorkStatus::InProgress),
            ("API Integration", WorkStatus::Pending),
            ("Testing", WorkStatus::Pending),
        ],
        team: ["Diana Miller", "Edward Wilson", "Fiona Taylor"],
    },
    ProjectSeed {
        name: "E-commerce Platform",
        client: "Retail Solutions",
        deadline: "Oct 15, 2023",
        progress: 20,
        status: WorkStatus::Delayed,
        description: "Building a comprehensive e-commerce solution with payment processing and inventory management.",
        tasks: &[
            ("System Design", WorkStatus::Completed),
            ("Database Setup", WorkStatus::InProgress),
            ("Frontend Development", WorkStatus::Delayed),
            ("Payment Gateway Integration", WorkStatus::Pending),
            ("Admin Dashboard", WorkStatus::Pending),
        ],
        team: ["George Davis", "Hannah Clark", "Ian Moore"],
    },
    ProjectSeed {
        name: "CRM Implementation",
        client: "Global Services",
        deadline: "Dec 01, 2023",
        progress: 90,
        status: WorkStatus::Completed,
        description: "Implementing and customizing a CRM solution for sales team with reporting capabilities.",
        tasks: &[
            ("Requirements Analysis", WorkStatus::Completed),
            ("System Configuration", WorkStatus::Completed),
            ("Data Migration", WorkStatus::Completed),
            ("User Training", WorkStatus::Completed),
            ("Final Review", WorkStatus::InProgress),
        ],
        team: ["Julie Adams", "Kevin Nelson", "Laura Hill"],
    },
];

/// The four demo projects, ids 1 through 4.
#[must_use]
pub fn projects() -> Vec<Project> {
    SEEDS
        .iter()
        .zip(1_u32..)
        .map(|(seed, id)| Project {
            id,
            name: seed.name.to_string(),
            client: seed.client.to_string(),
            deadline: seed.deadline.to_string(),
            progress: seed.progress,
            status: seed.status,
            description: seed.description.to_string(),
            tasks: seed
                .tasks
                .iter()
                .zip(1_u32..)
                .map(|(&(name, status), task_id)| ProjectTask {
                    id: task_id,
                    name: name.to_string(),
                    status,
                })
                .collect(),
            team: seed.team.iter().map(|member| (*member).to_string()).collect(),
        })
        .collect()
}

fn project_name(project: &Project) -> FieldValue<'_> {
    FieldValue::text(&project.name)
}

fn project_client(project: &Project) -> FieldValue<'_> {
    FieldValue::text(&project.client)
}

fn project_deadline(project: &Project) -> FieldValue<'_> {
    FieldValue::text(&project.deadline)
}

fn project_progress(project: &Project) -> FieldValue<'_> {
    FieldValue::number(project.progress)
}

fn project_status(project: &Project) -> FieldValue<'_> {
    FieldValue::text(project.status.as_str())
}

/// Columns of the expandable projects table.
///
/// # Errors
///
/// Propagates schema construction errors; the keys here are unique.
pub fn project_schema() -> TableResult<TableSchema<Project>> {
    TableSchema::new(vec![
        Column::new("name", "Project", project_name).searchable(),
        Column::new("client", "Client", project_client).searchable(),
        Column::new("deadline", "Deadline", project_deadline),
        Column::new("progress", "Progress", project_progress),
        Column::new("status", "Status", project_status),
    ])
}
