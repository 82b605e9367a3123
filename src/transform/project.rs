//! Project-level transformation
//!
//! `transform_project` is the pure core over in-memory files.
//! `ProjectTransformer` reads files from disk with a bounded worker pool and
//! reports progress. Neither writes anything; writing happens afterwards in
//! `FileWriter`, once the whole batch is known.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::StreamExt;

use super::class_string::ClassTransformer;
use super::progress::{Phase, ProgressTracker};
use super::source::{
    Extraction, ExtractionStrategy, extract_class_spans, extract_with_pattern, rewrite_spans,
};
use crate::constants::transform::DEFAULT_CONCURRENCY;
use crate::types::{SourceFile, TransformationResult, TransformationSummary};

/// Rewrite every literal class string in one file
pub fn transform_file(
    path: &Path,
    content: &str,
    transformer: &ClassTransformer,
) -> TransformationResult {
    let extraction = extract_class_spans(path, content);
    let strategy = extraction.strategy;

    match apply(content, &extraction, transformer) {
        Ok((output, tokens)) => TransformationResult::success(
            path.to_path_buf(),
            content.to_string(),
            output,
            tokens,
            strategy,
        ),
        Err(e) if strategy == ExtractionStrategy::Syntax => {
            // Syntax spans failed to rewrite; retry on attribute text alone
            let fallback = Extraction {
                spans: extract_with_pattern(content),
                strategy: ExtractionStrategy::Pattern,
            };
            match apply(content, &fallback, transformer) {
                Ok((output, tokens)) => {
                    tracing::debug!(path = %path.display(), error = %e, "Recovered with pattern rewrite");
                    TransformationResult::success(
                        path.to_path_buf(),
                        content.to_string(),
                        output,
                        tokens,
                        ExtractionStrategy::Pattern,
                    )
                }
                Err(_) => {
                    TransformationResult::failure(path.to_path_buf(), content.to_string(), e.to_string())
                }
            }
        }
        Err(e) => TransformationResult::failure(path.to_path_buf(), content.to_string(), e.to_string()),
    }
}

fn apply(
    content: &str,
    extraction: &Extraction,
    transformer: &ClassTransformer,
) -> crate::types::Result<(String, Vec<String>)> {
    let mut edits = Vec::new();
    let mut tokens = Vec::new();

    for span in &extraction.spans {
        let detail = transformer.transform_detailed(&span.value);
        if detail.is_changed() {
            edits.push((span.range(), detail.output));
            tokens.extend(detail.transformed);
        }
    }

    if edits.is_empty() {
        return Ok((content.to_string(), tokens));
    }
    Ok((rewrite_spans(content, &edits)?, tokens))
}

/// Transform a batch of in-memory files; one file's failure never aborts
/// the others
pub fn transform_project(files: &[SourceFile], theme: Option<&str>) -> TransformationSummary {
    let transformer = ClassTransformer::new(theme);
    let results = files
        .iter()
        .map(|f| transform_file(&f.path, &f.content, &transformer))
        .collect();
    TransformationSummary::from_results(results, transformer.theme().map(String::from))
}

/// Concurrent file-system runner
pub struct ProjectTransformer {
    transformer: Arc<ClassTransformer>,
    concurrency: usize,
    tracker: Option<ProgressTracker>,
}

impl ProjectTransformer {
    pub fn new(theme: Option<&str>) -> Self {
        Self {
            transformer: Arc::new(ClassTransformer::new(theme)),
            concurrency: DEFAULT_CONCURRENCY,
            tracker: None,
        }
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn with_progress(mut self, tracker: ProgressTracker) -> Self {
        self.tracker = Some(tracker);
        self
    }

    pub fn theme(&self) -> Option<&'static str> {
        self.transformer.theme()
    }

    /// Read and transform every path. Unreadable or non-UTF-8 files become
    /// failed results.
    pub async fn run(&self, paths: Vec<PathBuf>) -> TransformationSummary {
        if let Some(tracker) = &self.tracker {
            tracker.start_phase(Phase::Transform, paths.len());
        }

        let mut stream = futures::stream::iter(paths)
            .map(|path| {
                let transformer = Arc::clone(&self.transformer);
                async move {
                    match tokio::fs::read(&path).await {
                        Ok(bytes) => match String::from_utf8(bytes) {
                            Ok(content) => transform_file(&path, &content, &transformer),
                            Err(_) => TransformationResult::failure(
                                path,
                                String::new(),
                                "File is not valid UTF-8",
                            ),
                        },
                        Err(e) => TransformationResult::failure(path, String::new(), e.to_string()),
                    }
                }
            })
            .buffer_unordered(self.concurrency);

        let mut results = Vec::new();
        while let Some(result) = stream.next().await {
            let item = result.path.display().to_string();
            if let Some(error) = &result.error {
                tracing::warn!(path = %item, error = %error, "Failed to transform file");
                if let Some(tracker) = &self.tracker {
                    tracker.report_error(&item, error);
                }
            }
            if let Some(tracker) = &self.tracker {
                tracker.advance(&item);
            }
            results.push(result);
        }

        let summary =
            TransformationSummary::from_results(results, self.transformer.theme().map(String::from));
        tracing::info!(
            files = summary.total_files,
            failed = summary.failure_count,
            changes = summary.total_changes,
            "Transformation complete"
        );
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::scanner::FileKind;
    use tempfile::TempDir;

    fn source(path: &str, content: &str) -> SourceFile {
        SourceFile {
            path: PathBuf::from(path),
            relative: PathBuf::from(path),
            kind: FileKind::Markup,
            content: content.to_string(),
            class_strings: vec![],
        }
    }

    #[test]
    fn test_transform_file_rewrites_only_class_spans() {
        let content = r#"<div class="bg-white p-4">bg-white</div>"#;
        let result = transform_file(Path::new("a.html"), content, &ClassTransformer::generic());
        assert!(result.success);
        assert_eq!(
            result.transformed_content,
            r#"<div class="bg-white dark:bg-gray-900 p-4">bg-white</div>"#
        );
        assert_eq!(result.changes_count, 1);
        assert_eq!(result.transformed_tokens, vec!["bg-white"]);
    }

    #[test]
    fn test_unchanged_file_keeps_formatting() {
        let content = r#"<div class="  p-4   flex ">x</div>"#;
        let result = transform_file(Path::new("a.html"), content, &ClassTransformer::generic());
        assert_eq!(result.transformed_content, content);
        assert!(!result.needs_write());
    }

    #[test]
    fn test_transform_project_summary() {
        let files = vec![
            source("b.tsx", r#"export const B = () => <p className="text-gray-900">b</p>;"#),
            source("a.html", r#"<body class="bg-white text-black"></body>"#),
        ];
        let summary = transform_project(&files, Some("professional"));
        assert_eq!(summary.theme.as_deref(), Some("professional"));
        assert_eq!(summary.total_files, 2);
        assert_eq!(summary.success_count, 2);
        assert_eq!(summary.total_changes, 3);
        assert_eq!(summary.results[0].path, PathBuf::from("a.html"));
    }

    #[test]
    fn test_rerun_reports_no_changes() {
        let files = vec![source("a.html", r#"<body class="bg-white text-gray-700"></body>"#)];
        let first = transform_project(&files, None);
        let again = vec![source("a.html", &first.results[0].transformed_content)];
        assert_eq!(transform_project(&again, None).total_changes, 0);
    }

    #[tokio::test]
    async fn test_runner_records_failures_and_continues() {
        let dir = TempDir::new().unwrap();
        let good = dir.path().join("good.html");
        let binary = dir.path().join("bad.html");
        std::fs::write(&good, r#"<p class="text-gray-900"></p>"#).unwrap();
        std::fs::write(&binary, [0xff, 0xfe, 0x00]).unwrap();
        let missing = dir.path().join("missing.html");

        let tracker = ProgressTracker::new();
        let summary = ProjectTransformer::new(None)
            .with_concurrency(2)
            .with_progress(tracker.clone())
            .run(vec![good, binary, missing])
            .await;

        assert_eq!(summary.total_files, 3);
        assert_eq!(summary.success_count, 1);
        assert_eq!(summary.failure_count, 2);
        assert_eq!(summary.total_changes, 1);
        assert_eq!(tracker.state().completed, 3);
        assert_eq!(tracker.state().errors, 2);
    }
}
