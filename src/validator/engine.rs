use crate::constants::validation::PASS_SCORE;
use crate::themes::{ThemePreset, preset};
use crate::types::{Grade, ThemeValidationResult, ValidationIssue, ValidationReport};

use super::audit::audit_mapping;
use super::rules::RULES;

/// Letter grade for a 0-100 score
pub fn grade(score: u8) -> Grade {
    match score {
        97.. => Grade::APlus,
        93..=96 => Grade::A,
        90..=92 => Grade::BPlus,
        87..=89 => Grade::B,
        83..=86 => Grade::CPlus,
        80..=82 => Grade::C,
        70..=79 => Grade::D,
        _ => Grade::F,
    }
}

/// Run every rule against one preset
pub fn validate(preset: &ThemePreset) -> ThemeValidationResult {
    let mut issues = Vec::new();
    let mut rules_passed = 0;

    for rule in RULES {
        let outcome = (rule.check)(preset);
        if outcome.passed {
            rules_passed += 1;
            continue;
        }

        tracing::debug!(theme = preset.id, rule = rule.name, "{}", outcome.message);
        let mut issue = ValidationIssue::new(rule.name, rule.category, outcome.message);
        if let Some(suggestion) = outcome.suggestion {
            issue = issue.with_suggestion(suggestion);
        }
        issues.push(issue);
    }

    let rules_total = RULES.len();
    let score = if rules_total == 0 {
        100
    } else {
        (100.0 * rules_passed as f64 / rules_total as f64).round() as u8
    };

    ThemeValidationResult {
        theme_id: preset.id.to_string(),
        score,
        grade: grade(score),
        passed: score >= PASS_SCORE,
        rules_total,
        rules_passed,
        issues,
    }
}

/// Validate every built-in preset, in catalog order
pub fn validate_theme_catalog() -> Vec<ThemeValidationResult> {
    preset::catalog().iter().map(validate).collect()
}

/// Results for `presets` plus the mapping-table audit
pub fn build_report(presets: &[&ThemePreset]) -> ValidationReport {
    let results = presets.iter().map(|p| validate(p)).collect();
    ValidationReport::new(results, audit_mapping())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{IssueCategory, IssueSeverity};

    #[test]
    fn test_grade_bands() {
        let cases = [
            (100, Grade::APlus),
            (97, Grade::APlus),
            (96, Grade::A),
            (93, Grade::A),
            (90, Grade::BPlus),
            (87, Grade::B),
            (83, Grade::CPlus),
            (80, Grade::C),
            (79, Grade::D),
            (70, Grade::D),
            (69, Grade::F),
            (0, Grade::F),
        ];
        for (score, expected) in cases {
            assert_eq!(grade(score), expected, "score {}", score);
        }
    }

    #[test]
    fn test_catalog_presets_pass() {
        for result in validate_theme_catalog() {
            assert_eq!(result.score, 100, "{}: {:?}", result.theme_id, result.issues);
            assert_eq!(result.grade, Grade::APlus);
            assert!(result.passed);
        }
    }

    #[test]
    fn test_low_contrast_preset_fails() {
        let mut weak = preset::find("professional").unwrap().clone();
        weak.id = "washed-out";
        weak.colors.light.background = "#ffffff";
        weak.colors.light.foreground = "#949494";
        weak.colors.light.primary = "#a0a0a0";
        weak.colors.light.accent = "#a0a0a0";
        weak.colors.light.border = "#949494";

        let result = validate(&weak);
        assert!(!result.passed);
        assert_eq!(result.rules_passed, 6);
        assert_eq!(result.score, 60);
        assert!(result.grade <= Grade::D);

        let text = result
            .issues
            .iter()
            .find(|i| i.rule == "light-text-contrast")
            .unwrap();
        assert_eq!(text.severity, IssueSeverity::Error);
        assert!(text.message.contains("3.03:1"));

        let border = result
            .issues
            .iter()
            .find(|i| i.category == IssueCategory::Semantic)
            .unwrap();
        assert_eq!(border.severity, IssueSeverity::Warning);
        assert_eq!(result.error_count(), 2);
        assert_eq!(result.warning_count(), 2);
    }

    #[test]
    fn test_report_covers_catalog() {
        let presets: Vec<&ThemePreset> = preset::catalog().iter().collect();
        let report = build_report(&presets);
        assert_eq!(report.results.len(), presets.len());
        assert!(report.all_passed());
    }
}
