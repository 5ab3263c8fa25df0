//! Password strength meter for the sign-up form.

use serde::Serialize;

const STEP: u8 = 20;
const MIN_LENGTH: usize = 8;

/// Score a password from 0 to 100 in steps of 20.
///
/// One step each for: non-empty, at least eight UTF-16 code units, an ASCII
/// uppercase letter, an ASCII digit, and any character outside `[A-Za-z0-9]`.
/// A character outside the Basic Multilingual Plane counts as two units.
#[must_use]
pub fn password_strength(value: &str) -> u8 {
    let checks = [
        !value.is_empty(),
        value.encode_utf16().count() >= MIN_LENGTH,
        value.chars().any(|c| c.is_ascii_uppercase()),
        value.chars().any(|c| c.is_ascii_digit()),
        value.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    checks
        .iter()
        .filter(|passed| **passed)
        .fold(0, |score, _| score + STEP)
}

/// Meter bucket derived from a strength score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthLevel {
    /// Below 40.
    Weak,
    /// 40 to 79.
    Medium,
    /// 80 and above.
    Strong,
}

impl StrengthLevel {
    /// Bucket a score.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        if score < 40 {
            Self::Weak
        } else if score < 80 {
            Self::Medium
        } else {
            Self::Strong
        }
    }

    /// Label shown next to the meter.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
        }
    }

    /// Colour token for the progress bar.
    #[must_use]
    pub const fn tone(self) -> &'static str {
        match self {
            Self::Weak => "error",
            Self::Medium => "warning",
            Self::Strong => "success",
        }
    }
}
