//! Validate Command
//!
//! Score theme presets against the quality rules and audit the mapping
//! table. Fails when any selected preset scores below the pass mark.

use std::path::PathBuf;

use crate::cli::util::{CommandContext, OutputFormat};
use crate::config::ConfigLoader;
use crate::themes::{ThemePreset, preset};
use crate::types::{IssueSeverity, NightshiftError, Result, ValidationReport};
use crate::validator::{Reporter, build_report};

#[derive(Debug, Clone, Default)]
pub struct ValidateOptions {
    /// Single preset id; every preset when absent
    pub theme: Option<String>,
    /// Write the JSON report here
    pub report: Option<PathBuf>,
    pub format: OutputFormat,
    /// Only print issues at this severity or worse
    pub severity: Option<IssueSeverity>,
}

pub fn run(options: ValidateOptions) -> Result<()> {
    let ctx = CommandContext::with_config(std::env::current_dir()?, ConfigLoader::load()?);
    let presets = select_presets(options.theme.as_deref())?;
    let report = build_report(&presets);

    // The configured report path is only used inside an initialized project
    if options.report.is_some() || ctx.is_initialized() {
        Reporter::generate_json(&report, ctx.report_path(options.report.as_deref()))?;
    }

    if options.format.is_json() {
        println!("{}", Reporter::to_json(&report)?);
    } else if let Some(severity) = options.severity {
        Reporter::print_filtered(&report, severity);
    } else {
        Reporter::print_summary(&report);
    }

    check(&report)
}

fn select_presets(theme: Option<&str>) -> Result<Vec<&'static ThemePreset>> {
    match theme {
        None => Ok(preset::catalog().iter().collect()),
        Some(id) => preset::find(id)
            .map(|p| vec![p])
            .ok_or_else(|| NightshiftError::Config(format!("Unknown theme '{}'", id))),
    }
}

/// Non-zero exit for any failing preset
fn check(report: &ValidationReport) -> Result<()> {
    let failed: Vec<&str> = report.failed().map(|r| r.theme_id.as_str()).collect();
    if failed.is_empty() {
        Ok(())
    } else {
        Err(NightshiftError::ThemeValidation(format!(
            "{} of {} theme(s) below the passing score: {}",
            failed.len(),
            report.results.len(),
            failed.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::validate;

    #[test]
    fn test_select_presets() {
        assert_eq!(select_presets(None).unwrap().len(), preset::catalog().len());
        assert_eq!(select_presets(Some("sunset")).unwrap()[0].id, "sunset");
        assert!(select_presets(Some("midnight")).is_err());
    }

    #[test]
    fn test_catalog_report_passes() {
        let report = build_report(&select_presets(None).unwrap());
        assert!(check(&report).is_ok());
    }

    #[test]
    fn test_failing_preset_errors() {
        let mut weak = preset::find("professional").unwrap().clone();
        weak.colors.light.foreground = "#f5f5f5";
        weak.colors.dark.foreground = "#0f172a";
        let report = ValidationReport::new(vec![validate(&weak)], Vec::new());
        let err = check(&report).unwrap_err();
        assert!(matches!(err, NightshiftError::ThemeValidation(_)));
        assert!(err.to_string().contains("professional"));
    }
}
