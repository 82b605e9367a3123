//! Transformation result types

use serde::Serialize;
use std::path::PathBuf;

use crate::transform::source::ExtractionStrategy;

/// Outcome of transforming one file. Immutable once created.
#[derive(Debug, Clone, Serialize)]
pub struct TransformationResult {
    pub path: PathBuf,
    pub success: bool,
    #[serde(skip)]
    pub original_content: String,
    #[serde(skip)]
    pub transformed_content: String,
    pub changes_count: usize,
    /// Source tokens that were rewritten, in file order
    pub transformed_tokens: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<ExtractionStrategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TransformationResult {
    pub fn success(
        path: PathBuf,
        original_content: String,
        transformed_content: String,
        transformed_tokens: Vec<String>,
        strategy: ExtractionStrategy,
    ) -> Self {
        Self {
            path,
            success: true,
            original_content,
            transformed_content,
            changes_count: transformed_tokens.len(),
            transformed_tokens,
            strategy: Some(strategy),
            error: None,
        }
    }

    pub fn failure(path: PathBuf, original_content: String, error: impl Into<String>) -> Self {
        Self {
            path,
            success: false,
            transformed_content: original_content.clone(),
            original_content,
            changes_count: 0,
            transformed_tokens: Vec::new(),
            strategy: None,
            error: Some(error.into()),
        }
    }

    /// Whether the writer has anything to do for this file
    pub fn needs_write(&self) -> bool {
        self.success && self.changes_count > 0
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TransformationSummary {
    pub theme: Option<String>,
    pub total_files: usize,
    pub success_count: usize,
    pub failure_count: usize,
    pub total_changes: usize,
    pub results: Vec<TransformationResult>,
}

impl TransformationSummary {
    /// Summarize per-file results, sorted by path
    pub fn from_results(mut results: Vec<TransformationResult>, theme: Option<String>) -> Self {
        results.sort_by(|a, b| a.path.cmp(&b.path));
        let success_count = results.iter().filter(|r| r.success).count();
        Self {
            theme,
            total_files: results.len(),
            success_count,
            failure_count: results.len() - success_count,
            total_changes: results.iter().map(|r| r.changes_count).sum(),
            results,
        }
    }

    pub fn changed(&self) -> impl Iterator<Item = &TransformationResult> {
        self.results.iter().filter(|r| r.needs_write())
    }

    pub fn failures(&self) -> impl Iterator<Item = &TransformationResult> {
        self.results.iter().filter(|r| !r.success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts() {
        let results = vec![
            TransformationResult::success(
                PathBuf::from("b.tsx"),
                "a".into(),
                "b".into(),
                vec!["bg-white".into(), "text-black".into()],
                ExtractionStrategy::Syntax,
            ),
            TransformationResult::failure(PathBuf::from("a.tsx"), String::new(), "bad utf-8"),
            TransformationResult::success(
                PathBuf::from("c.html"),
                "x".into(),
                "x".into(),
                vec![],
                ExtractionStrategy::Pattern,
            ),
        ];
        let summary = TransformationSummary::from_results(results, None);
        assert_eq!(summary.total_files, 3);
        assert_eq!(summary.success_count, 2);
        assert_eq!(summary.failure_count, 1);
        assert_eq!(summary.total_changes, 2);
        assert_eq!(summary.results[0].path, PathBuf::from("a.tsx"));
        assert_eq!(summary.changed().count(), 1);
    }
}
