//! Argument parsing, logging setup, and command dispatch.

use std::path::PathBuf;

use anyhow::anyhow;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::debug;
use vitrine_config::{ConfigError, TableSettings, load_settings};
use vitrine_telemetry::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, build_sha, init_logging};

use crate::commands::password::handle_password;
use crate::commands::projects::handle_projects;
use crate::commands::themes::handle_themes;
use crate::commands::users::handle_users;
use crate::error::{CliError, CliResult};

/// Parses CLI arguments, executes the requested command, and returns the
/// process exit code.
#[must_use]
pub fn run() -> i32 {
    let cli = Cli::parse();

    if let Err(err) = install_logging(&cli) {
        eprintln!("error: {}", err.display_message());
        return err.exit_code();
    }

    match execute(cli) {
        Ok(rendered) => {
            println!("{rendered}");
            0
        }
        Err(err) => {
            eprintln!("error: {}", err.display_message());
            err.exit_code()
        }
    }
}

fn install_logging(cli: &Cli) -> CliResult<()> {
    let config = LoggingConfig {
        level: &cli.log_level,
        format: cli.log_format.unwrap_or_else(LogFormat::infer),
        build_sha: option_env!("VITRINE_BUILD_SHA").unwrap_or("dev"),
    };
    init_logging(&config).map_err(CliError::failure)?;
    debug!(build_sha = build_sha(), "logging initialised");
    Ok(())
}

pub(crate) fn execute(cli: Cli) -> CliResult<String> {
    let settings = load_settings(cli.config.as_deref()).map_err(settings_error)?;
    debug!(command = command_label(&cli.command), "dispatching command");
    dispatch(cli.command, &settings, cli.output)
}

pub(crate) fn dispatch(
    command: Command,
    settings: &TableSettings,
    format: OutputFormat,
) -> CliResult<String> {
    match command {
        Command::Users(args) => handle_users(args, settings, format),
        Command::Projects(args) => handle_projects(&args, format),
        Command::Password(args) => handle_password(&args, format),
        Command::Themes(args) => handle_themes(&args, format),
    }
}

fn settings_error(err: ConfigError) -> CliError {
    match err {
        ConfigError::InvalidField {
            field,
            value,
            reason,
        } => CliError::validation(match value {
            Some(value) => format!("invalid settings: {field} {reason} (got '{value}')"),
            None => format!("invalid settings: {field} {reason}"),
        }),
        ConfigError::Parse { source } => {
            CliError::validation(format!("invalid settings: {source}"))
        }
        ConfigError::Io { operation, source } => {
            CliError::failure(anyhow!("{operation} failed: {source}"))
        }
    }
}

const fn command_label(command: &Command) -> &'static str {
    match command {
        Command::Users(_) => "users",
        Command::Projects(_) => "projects",
        Command::Password(_) => "password",
        Command::Themes(_) => "themes",
    }
}

#[derive(Parser)]
#[command(name = "vitrine", about = "Terminal renderer for the Vitrine showcase demos")]
pub(crate) struct Cli {
    #[arg(long, global = true, env = "VITRINE_CONFIG", help = "Table settings JSON document")]
    pub(crate) config: Option<PathBuf>,
    #[arg(
        long = "output",
        alias = "format",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Table,
        help = "Select output format for commands that render structured data"
    )]
    pub(crate) output: OutputFormat,
    #[arg(long, global = true, env = "VITRINE_LOG_LEVEL", default_value = DEFAULT_LOG_LEVEL)]
    pub(crate) log_level: String,
    #[arg(long, global = true, env = "VITRINE_LOG_FORMAT", help = "pretty or json")]
    pub(crate) log_format: Option<LogFormat>,
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Render the advanced users table.
    Users(UsersArgs),
    /// Render the expandable projects table.
    Projects(ProjectsArgs),
    /// Score a password with the sign-up form meter.
    Password(PasswordArgs),
    /// List the brand themes or apply one to a class list.
    Themes(ThemesArgs),
}

#[derive(Args, Default)]
pub(crate) struct UsersArgs {
    #[arg(long, short = 'q', help = "Case-insensitive search over name, email, and role")]
    pub(crate) query: Option<String>,
    #[arg(long = "sort", help = "Column header click; repeat to replay several clicks")]
    pub(crate) sort: Vec<String>,
    #[arg(long, help = "1-based page; out-of-range pages are clamped")]
    pub(crate) page: Option<usize>,
    #[arg(long)]
    pub(crate) page_size: Option<usize>,
    #[arg(long = "select", value_delimiter = ',', help = "Toggle selection of user ids")]
    pub(crate) select: Vec<u32>,
    #[arg(long, help = "Click the header checkbox for the current page")]
    pub(crate) select_all_visible: bool,
}

#[derive(Args, Default)]
pub(crate) struct ProjectsArgs {
    #[arg(long = "expand", value_delimiter = ',', help = "Toggle the detail panel of project ids")]
    pub(crate) expand: Vec<u32>,
}

#[derive(Args)]
pub(crate) struct PasswordArgs {
    #[arg(help = "Password to score")]
    pub(crate) value: String,
}

#[derive(Args, Default)]
pub(crate) struct ThemesArgs {
    #[arg(long, help = "Theme to apply: default, blue, purple, or red")]
    pub(crate) apply: Option<String>,
    #[arg(long = "class", value_delimiter = ',', help = "Existing root element classes")]
    pub(crate) classes: Vec<String>,
    #[arg(long, help = "Generate CSS variables for a custom brand theme")]
    pub(crate) build: bool,
    #[arg(long, requires = "build", help = "Primary colour as #rrggbb")]
    pub(crate) primary: Option<String>,
    #[arg(long, requires = "build", help = "Secondary colour as #rrggbb")]
    pub(crate) secondary: Option<String>,
    #[arg(long, requires = "build", help = "Tertiary colour as #rrggbb")]
    pub(crate) tertiary: Option<String>,
    #[arg(long, requires = "build", help = "Corner radius in pixels")]
    pub(crate) radius: Option<u32>,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Table,
    Json,
}
