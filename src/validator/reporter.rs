use std::fs;
use std::path::Path;

use crate::types::{IssueSeverity, Result, ThemeValidationResult, ValidationIssue, ValidationReport};

pub struct Reporter;

impl Reporter {
    pub fn to_json(report: &ValidationReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }

    pub fn generate_json<P: AsRef<Path>>(report: &ValidationReport, output_path: P) -> Result<()> {
        let output_path = output_path.as_ref();
        if let Some(parent) = output_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(output_path, Self::to_json(report)?)?;
        tracing::info!(path = %output_path.display(), "Wrote theme report");
        Ok(())
    }

    pub fn print_summary(report: &ValidationReport) {
        println!("Theme Validation Report");
        println!("══════════════════════════════════════");
        println!();

        for result in &report.results {
            Self::print_result(result);
        }

        if !report.mapping_issues.is_empty() {
            println!("Mapping table ({} issues):", report.mapping_issues.len());
            println!();
            for issue in &report.mapping_issues {
                Self::print_issue(issue);
            }
        }

        println!("══════════════════════════════════════");

        let failed = report.failed().count();
        if failed > 0 {
            println!("Result: FAILED ({} of {} themes)", failed, report.results.len());
        } else if report.results.iter().any(|r| !r.issues.is_empty()) {
            println!("Result: PASSED with issues");
        } else {
            println!("Result: PASSED ✓");
        }
    }

    pub fn print_result(result: &ThemeValidationResult) {
        let icon = if !result.passed {
            "✗"
        } else if result.issues.is_empty() {
            "✓"
        } else {
            "⚠"
        };
        println!(
            "{} {}  {} ({}/100, {}/{} rules)",
            icon, result.theme_id, result.grade, result.score, result.rules_passed, result.rules_total
        );
        println!();

        for issue in &result.issues {
            Self::print_issue(issue);
        }
    }

    /// Print only issues at `min_severity` or worse
    pub fn print_filtered(report: &ValidationReport, min_severity: IssueSeverity) {
        let filtered: Vec<_> = report
            .results
            .iter()
            .flat_map(|r| r.issues.iter())
            .chain(report.mapping_issues.iter())
            .filter(|i| i.severity <= min_severity)
            .collect();

        if filtered.is_empty() {
            println!("No issues at severity {} or higher.", min_severity);
            return;
        }

        println!("Issues ({}):", filtered.len());
        println!();

        for issue in filtered {
            Self::print_issue(issue);
        }
    }

    fn print_issue(issue: &ValidationIssue) {
        let icon = match issue.severity {
            IssueSeverity::Error => "✗",
            IssueSeverity::Warning => "⚠",
            IssueSeverity::Info => "ℹ",
        };

        println!(
            "  {} [{}] {}: {}",
            icon,
            issue.severity.to_string().to_uppercase(),
            issue.rule,
            issue.message
        );

        if let Some(ref suggestion) = issue.suggestion {
            println!("    → {}", suggestion);
        }

        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::engine::{build_report, validate};
    use crate::themes::preset;
    use tempfile::TempDir;

    #[test]
    fn test_json_report_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reports/theme-report.json");
        let presets: Vec<_> = preset::catalog().iter().collect();
        let report = build_report(&presets);

        Reporter::generate_json(&report, &path).unwrap();
        let parsed: ValidationReport =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed.results.len(), 4);
        assert_eq!(parsed.results[0].theme_id, "professional");
    }

    #[test]
    fn test_json_uses_letter_grades() {
        let result = validate(preset::find("terminal").unwrap());
        let report = ValidationReport::new(vec![result], Vec::new());
        let json = Reporter::to_json(&report).unwrap();
        assert!(json.contains("\"grade\": \"A+\""));
        assert!(json.contains("\"passed\": true"));
    }
}
