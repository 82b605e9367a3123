//! Theme validation rules
//!
//! A fixed, ordered list. Each rule inspects one preset and reports whether
//! it holds, with a message carrying the measured value.

pub mod contrast;
pub mod palette;

use crate::themes::{PaletteSlot, ThemeColors, ThemePreset};
use crate::types::{IssueCategory, Rgb};

pub struct RuleOutcome {
    pub passed: bool,
    pub message: String,
    pub suggestion: Option<String>,
}

impl RuleOutcome {
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            passed: true,
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn fail(message: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: message.into(),
            suggestion: Some(suggestion.into()),
        }
    }

    fn unparseable(mode: Mode) -> Self {
        Self::fail(
            format!("{} palette holds a color that is not valid hex", mode),
            "Use #rrggbb values for every palette slot",
        )
    }
}

/// Light or dark half of a preset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Light,
    Dark,
}

impl Mode {
    pub fn colors(self, preset: &ThemePreset) -> &ThemeColors {
        match self {
            Self::Light => &preset.colors.light,
            Self::Dark => &preset.colors.dark,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => write!(f, "Light"),
            Self::Dark => write!(f, "Dark"),
        }
    }
}

pub struct Rule {
    pub name: &'static str,
    pub category: IssueCategory,
    pub check: fn(&ThemePreset) -> RuleOutcome,
}

pub const RULES: &[Rule] = &[
    Rule {
        name: "light-text-contrast",
        category: IssueCategory::Contrast,
        check: |p| contrast::text(p, Mode::Light),
    },
    Rule {
        name: "dark-text-contrast",
        category: IssueCategory::Contrast,
        check: |p| contrast::text(p, Mode::Dark),
    },
    Rule {
        name: "light-button-contrast",
        category: IssueCategory::Contrast,
        check: |p| contrast::button(p, Mode::Light),
    },
    Rule {
        name: "dark-button-contrast",
        category: IssueCategory::Contrast,
        check: |p| contrast::button(p, Mode::Dark),
    },
    Rule {
        name: "light-primary-accent-distinct",
        category: IssueCategory::Color,
        check: |p| palette::primary_accent_distinct(p, Mode::Light),
    },
    Rule {
        name: "dark-primary-accent-distinct",
        category: IssueCategory::Color,
        check: |p| palette::primary_accent_distinct(p, Mode::Dark),
    },
    Rule {
        name: "light-border-foreground-distinct",
        category: IssueCategory::Semantic,
        check: |p| palette::border_foreground_distinct(p, Mode::Light),
    },
    Rule {
        name: "dark-border-foreground-distinct",
        category: IssueCategory::Semantic,
        check: |p| palette::border_foreground_distinct(p, Mode::Dark),
    },
    Rule {
        name: "mode-polarity",
        category: IssueCategory::Semantic,
        check: palette::polarity,
    },
    Rule {
        name: "accent-harmony",
        category: IssueCategory::Harmony,
        check: palette::accent_harmony,
    },
];

/// Parse two slots of one mode
fn pair(preset: &ThemePreset, mode: Mode, a: PaletteSlot, b: PaletteSlot) -> Option<(Rgb, Rgb)> {
    let colors = mode.colors(preset);
    Some((colors.rgb(a)?, colors.rgb(b)?))
}
