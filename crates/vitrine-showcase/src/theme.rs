//! Brand theme catalog and root class management.
//!
//! # Design
//! - The default theme carries no class; every other theme maps to `theme-<name>`.
//! - Purple is catalogued but not offered by the switcher.
//! - The builder derives light and dark primary shades by scaling each channel
//!   by ±30% and emits CSS custom properties as space-separated `r g b` triplets.

use std::collections::BTreeSet;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::error::{ShowcaseError, ShowcaseResult};

/// Percentage applied to the primary colour for its light and dark shades.
pub const SHADE_PERCENT: i32 = 30;

/// Corner radius, in pixels, restored by the builder's reset.
pub const DEFAULT_RADIUS_PX: u32 = 8;

const ROOT_FONT_PX: f64 = 16.0;

/// Brand colour themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Green brand theme.
    #[default]
    Default,
    /// Blue theme.
    Blue,
    /// Purple theme.
    Purple,
    /// Red theme.
    Red,
}

impl Theme {
    /// Every catalogued theme.
    pub const ALL: [Self; 4] = [Self::Default, Self::Blue, Self::Purple, Self::Red];

    /// Themes offered by the switcher.
    pub const SWITCHER: [Self; 3] = [Self::Default, Self::Blue, Self::Red];

    /// Lowercase theme name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Red => "red",
        }
    }

    /// Root element class, if the theme needs one.
    #[must_use]
    pub const fn class_name(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::Blue => Some("theme-blue"),
            Self::Purple => Some("theme-purple"),
            Self::Red => Some("theme-red"),
        }
    }

    /// Primary brand colour.
    #[must_use]
    pub const fn swatch(self) -> &'static str {
        self.palette()[0]
    }

    /// Primary, secondary and accent colours shown on the theme card.
    #[must_use]
    pub const fn palette(self) -> [&'static str; 3] {
        match self {
            Self::Default => ["#1FA37C", "#333333", "#006A76"],
            Self::Blue => ["#1971C2", "#2C3E50", "#3498DB"],
            Self::Purple => ["#805AD5", "#2C2C54", "#9F7AEA"],
            Self::Red => ["#ED1C24", "#333333", "#DC3545"],
        }
    }

    /// Card tagline.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Default => "Primary green theme",
            Self::Blue => "Clean and professional",
            Self::Purple => "Creative and bold",
            Self::Red => "Energetic and vibrant",
        }
    }
}

impl Display for Theme {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ShowcaseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "default" | "green" => Ok(Self::Default),
            "blue" => Ok(Self::Blue),
            "purple" => Ok(Self::Purple),
            "red" => Ok(Self::Red),
            _ => Err(ShowcaseError::UnknownTheme {
                value: value.to_string(),
            }),
        }
    }
}

/// Swap the theme class on a root element's class list.
///
/// Every managed `theme-*` class is removed before the selected one is added;
/// unrelated classes are kept.
#[must_use]
pub fn apply_theme(classes: &BTreeSet<String>, theme: Theme) -> BTreeSet<String> {
    let mut next: BTreeSet<String> = classes
        .iter()
        .filter(|class| {
            !Theme::ALL
                .iter()
                .filter_map(|candidate| candidate.class_name())
                .any(|managed| managed == class.as_str())
        })
        .cloned()
        .collect();
    if let Some(class) = theme.class_name() {
        next.insert(class.to_string());
    }
    next
}

/// An opaque sRGB colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
}

impl Rgb {
    /// Build a colour from its channels.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parse `#rrggbb` (the leading `#` is optional, digits are case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`ShowcaseError::InvalidColor`] unless the text is exactly six hex digits.
    pub fn from_hex(value: &str) -> ShowcaseResult<Self> {
        let invalid = || ShowcaseError::InvalidColor {
            value: value.to_string(),
        };
        let digits = value.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |range: std::ops::Range<usize>| {
            digits
                .get(range)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(invalid)
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// Space-separated channels (`31 163 124`), the form CSS variables expect.
    #[must_use]
    pub fn channels(self) -> String {
        format!("{} {} {}", self.red, self.green, self.blue)
    }

    /// Scale every channel by `percent` (negative darkens), clamping to `0..=255`.
    #[must_use]
    pub fn adjust_brightness(self, percent: i32) -> Self {
        let scale = |channel: u8| {
            let value = f64::from(channel);
            clamp_channel(value + value * f64::from(percent) / 100.0)
        };
        Self::new(scale(self.red), scale(self.green), scale(self.blue))
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0).round() as u8
}

impl Display for Rgb {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ShowcaseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_hex(value)
    }
}

/// Custom brand theme assembled from three colours and a corner radius.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeBuilder {
    /// Brand primary colour.
    pub primary: Rgb,
    /// Brand secondary colour.
    pub secondary: Rgb,
    /// Brand tertiary colour.
    pub tertiary: Rgb,
    /// Corner radius in pixels.
    pub radius_px: u32,
}

impl Default for ThemeBuilder {
    fn default() -> Self {
        Self {
            primary: Rgb::new(0x1f, 0xa3, 0x7c),
            secondary: Rgb::new(0x33, 0x33, 0x33),
            tertiary: Rgb::new(0x00, 0x6a, 0x76),
            radius_px: DEFAULT_RADIUS_PX,
        }
    }
}

impl ThemeBuilder {
    /// Primary lightened by [`SHADE_PERCENT`].
    #[must_use]
    pub fn primary_light(&self) -> Rgb {
        self.primary.adjust_brightness(SHADE_PERCENT)
    }

    /// Primary darkened by [`SHADE_PERCENT`].
    #[must_use]
    pub fn primary_dark(&self) -> Rgb {
        self.primary.adjust_brightness(-SHADE_PERCENT)
    }

    /// Radius in `rem`, assuming a 16px root font.
    #[must_use]
    pub fn radius_rem(&self) -> f64 {
        f64::from(self.radius_px) / ROOT_FONT_PX
    }

    /// Brand custom properties in emission order.
    #[must_use]
    pub fn brand_variables(&self) -> [(&'static str, Rgb); 5] {
        [
            ("--brand-primary", self.primary),
            ("--brand-primary-light", self.primary_light()),
            ("--brand-primary-dark", self.primary_dark()),
            ("--brand-secondary", self.secondary),
            ("--brand-tertiary", self.tertiary),
        ]
    }

    /// Stylesheet snippet overriding the root variables.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut lines = vec![
            "@layer base {".to_string(),
            "  :root {".to_string(),
            format!("    --radius: {}rem;", self.radius_rem()),
        ];
        lines.extend(
            self.brand_variables()
                .iter()
                .map(|(name, colour)| format!("    {name}: {}; /* {colour} */", colour.channels())),
        );
        lines.push("  }".to_string());
        lines.push("}".to_string());
        lines.join("\n")
    }
}
