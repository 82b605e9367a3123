//! Theme validation value types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Error,
    Warning,
    Info,
}

impl fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
            Self::Info => write!(f, "info"),
        }
    }
}

impl FromStr for IssueSeverity {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warning" | "warn" => Ok(Self::Warning),
            "info" => Ok(Self::Info),
            _ => Err(format!(
                "Invalid severity '{}'. Valid values: error, warning, info",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueCategory {
    Contrast,
    Color,
    Semantic,
    Harmony,
}

impl IssueCategory {
    /// Severity of a failed rule in this category
    pub fn severity(&self) -> IssueSeverity {
        match self {
            Self::Contrast => IssueSeverity::Error,
            Self::Color | Self::Semantic => IssueSeverity::Warning,
            Self::Harmony => IssueSeverity::Info,
        }
    }
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Contrast => write!(f, "contrast"),
            Self::Color => write!(f, "color"),
            Self::Semantic => write!(f, "semantic"),
            Self::Harmony => write!(f, "harmony"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub rule: String,
    pub category: IssueCategory,
    pub severity: IssueSeverity,
    pub message: String,
    pub suggestion: Option<String>,
}

impl ValidationIssue {
    pub fn new(rule: impl Into<String>, category: IssueCategory, message: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            category,
            severity: category.severity(),
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Letter grade bands, worst first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    F,
    D,
    C,
    #[serde(rename = "C+")]
    CPlus,
    B,
    #[serde(rename = "B+")]
    BPlus,
    A,
    #[serde(rename = "A+")]
    APlus,
}

impl Grade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::F => "F",
            Self::D => "D",
            Self::C => "C",
            Self::CPlus => "C+",
            Self::B => "B",
            Self::BPlus => "B+",
            Self::A => "A",
            Self::APlus => "A+",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeValidationResult {
    pub theme_id: String,
    pub score: u8,
    pub grade: Grade,
    pub passed: bool,
    pub rules_total: usize,
    pub rules_passed: usize,
    pub issues: Vec<ValidationIssue>,
}

impl ThemeValidationResult {
    pub fn error_count(&self) -> usize {
        self.count(IssueSeverity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(IssueSeverity::Warning)
    }

    fn count(&self, severity: IssueSeverity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }
}

/// Catalog validation plus the mapping-table audit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub generated_at: DateTime<Utc>,
    pub results: Vec<ThemeValidationResult>,
    pub mapping_issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn new(results: Vec<ThemeValidationResult>, mapping_issues: Vec<ValidationIssue>) -> Self {
        Self {
            generated_at: Utc::now(),
            results,
            mapping_issues,
        }
    }

    /// Every preset passed and the mapping table has no contrast errors
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|r| r.passed)
            && !self
                .mapping_issues
                .iter()
                .any(|i| i.severity == IssueSeverity::Error)
    }

    pub fn failed(&self) -> impl Iterator<Item = &ThemeValidationResult> {
        self.results.iter().filter(|r| !r.passed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_severity() {
        assert_eq!(IssueCategory::Contrast.severity(), IssueSeverity::Error);
        assert_eq!(IssueCategory::Semantic.severity(), IssueSeverity::Warning);
        assert_eq!(IssueCategory::Harmony.severity(), IssueSeverity::Info);
    }

    #[test]
    fn test_severity_parse() {
        assert_eq!("WARN".parse::<IssueSeverity>().unwrap(), IssueSeverity::Warning);
        assert_eq!("error".parse::<IssueSeverity>().unwrap(), IssueSeverity::Error);
        assert!("fatal".parse::<IssueSeverity>().is_err());
    }

    #[test]
    fn test_grade_serializes_as_letter() {
        assert_eq!(serde_json::to_string(&Grade::APlus).unwrap(), "\"A+\"");
        assert_eq!(serde_json::to_string(&Grade::D).unwrap(), "\"D\"");
        assert!(Grade::APlus > Grade::A && Grade::D > Grade::F);
    }
}
