//! Scan Command
//!
//! Report what nightshift sees in a project without changing anything.

use std::path::PathBuf;

use serde::Serialize;

use crate::analyzer::ProjectScanner;
use crate::cli::ui::Output;
use crate::cli::util::{CommandContext, OutputFormat};
use crate::constants::DARK_PREFIX;
use crate::types::{Framework, Result, ScanResult};

/// Files listed in text output before the remainder is summarized
const LISTED_FILES: usize = 20;

#[derive(Debug, Serialize)]
struct ScanSummary<'a> {
    root: &'a std::path::Path,
    framework: Framework,
    alternate_mode_enabled: bool,
    total_files: usize,
    transformable_files: usize,
    class_strings: usize,
    dark_tokens: usize,
    files: Vec<FileSummary>,
}

#[derive(Debug, Serialize)]
struct FileSummary {
    path: String,
    class_strings: usize,
}

impl<'a> ScanSummary<'a> {
    fn from_scan(scan: &'a ScanResult) -> Self {
        let files: Vec<FileSummary> = scan
            .markup_files()
            .filter(|f| !f.class_strings.is_empty())
            .map(|f| FileSummary {
                path: f.display_path(),
                class_strings: f.class_strings.len(),
            })
            .collect();

        Self {
            root: &scan.root,
            framework: scan.framework,
            alternate_mode_enabled: scan.alternate_mode_enabled,
            total_files: scan.total_files,
            transformable_files: scan.transformable_files,
            class_strings: files.iter().map(|f| f.class_strings).sum(),
            dark_tokens: scan
                .class_tokens()
                .filter(|t| t.contains(DARK_PREFIX))
                .count(),
            files,
        }
    }
}

pub fn run(path: Option<PathBuf>, format: OutputFormat) -> Result<()> {
    let ctx = CommandContext::load(path)?;
    let scan = ProjectScanner::scan(&ctx.project_root, &ctx.config.scan)?;
    let summary = ScanSummary::from_scan(&scan);

    if format.is_json() {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let out = Output::new();
    out.header("Project Scan");
    out.field("Root", summary.root.display());
    out.field("Framework", summary.framework);
    out.field("Files", summary.total_files);
    out.field("Transformable", summary.transformable_files);
    out.field("Class strings", summary.class_strings);
    out.field(
        "Dark mode",
        if summary.alternate_mode_enabled {
            format!("enabled ({} dark: tokens)", summary.dark_tokens)
        } else {
            "not configured".to_string()
        },
    );

    if !summary.files.is_empty() {
        out.section("Files with class strings");
        for file in summary.files.iter().take(LISTED_FILES) {
            out.item(&format!("{} ({})", file.path, file.class_strings));
        }
        if summary.files.len() > LISTED_FILES {
            out.item(&format!("… {} more", summary.files.len() - LISTED_FILES));
        }
    }

    if summary.transformable_files == 0 {
        println!();
        out.warning("No literal class strings found; nothing to transform");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScanConfig;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_summary_counts_dark_tokens() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("index.html"),
            r#"<div class="bg-white dark:bg-gray-900 p-4"></div><p class="text-black"></p>"#,
        )
        .unwrap();
        fs::write(dir.path().join("notes.html"), "<p>plain</p>").unwrap();

        let scan = ProjectScanner::scan(dir.path(), &ScanConfig::default()).unwrap();
        let summary = ScanSummary::from_scan(&scan);
        assert_eq!(summary.files.len(), 1);
        assert_eq!(summary.class_strings, 2);
        assert_eq!(summary.dark_tokens, 1);
        assert!(summary.alternate_mode_enabled);
    }
}
