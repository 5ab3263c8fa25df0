use serde::Serialize;
use vitrine_showcase::{StrengthLevel, password_strength};

use crate::cli::{OutputFormat, PasswordArgs};
use crate::error::CliResult;
use crate::output::render_password;

#[derive(Debug, Serialize)]
pub(crate) struct PasswordReport {
    pub(crate) score: u8,
    pub(crate) level: StrengthLevel,
    pub(crate) label: &'static str,
    pub(crate) tone: &'static str,
}

pub(crate) fn handle_password(args: &PasswordArgs, format: OutputFormat) -> CliResult<String> {
    render_password(&score_password(&args.value), format)
}

pub(crate) fn score_password(value: &str) -> PasswordReport {
    let score = password_strength(value);
    let level = StrengthLevel::from_score(score);
    PasswordReport {
        score,
        level,
        label: level.label(),
        tone: level.tone(),
    }
}
