//! Apply Command
//!
//! Add dark variants to every class string in a project.
//!
//! Usage:
//!   nightshift apply [PATH] [--theme <id|auto>] [--dry-run] [--backup]
//!                    [--on-conflict continue|overwrite|cancel] [--enable-dark-mode]

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::analyzer::ProjectScanner;
use crate::cli::progress::ConsoleRenderer;
use crate::cli::ui::Output;
use crate::cli::util::{CommandContext, OutputFormat};
use crate::themes::{preset, recommender::recommend_theme_with};
use crate::transform::{
    ApplyReport, ConfigPatcher, ConflictResolution, FileWriter, PatchOutcome, ProgressTracker,
    ProjectTransformer,
};
use crate::types::{NightshiftError, Result, ScanResult, TransformationSummary};

/// Theme argument that asks for the recommended preset
pub const AUTO_THEME: &str = "auto";

/// Rewritten tokens listed per file in text output
const LISTED_TOKENS: usize = 6;

#[derive(Debug, Clone, Default)]
pub struct ApplyOptions {
    pub path: Option<PathBuf>,
    pub theme: Option<String>,
    pub dry_run: bool,
    /// Overrides `transform.backup` from config
    pub backup: Option<bool>,
    /// Overrides `transform.on_conflict` from config
    pub on_conflict: Option<ConflictResolution>,
    pub enable_dark_mode: bool,
    pub format: OutputFormat,
    pub quiet: bool,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DarkModeStatus {
    Enabled { path: PathBuf },
    AlreadyEnabled { path: PathBuf },
    NotFound { message: String },
    /// Transformed files are kept; only the patch was skipped
    Failed { message: String },
}

impl From<PatchOutcome> for DarkModeStatus {
    fn from(outcome: PatchOutcome) -> Self {
        match outcome {
            PatchOutcome::Enabled(path) => Self::Enabled { path },
            PatchOutcome::AlreadyEnabled(path) => Self::AlreadyEnabled { path },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApplyOutcome {
    pub dry_run: bool,
    pub summary: TransformationSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub written: Option<ApplyReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<DarkModeStatus>,
}

impl ApplyOutcome {
    fn headline(&self) -> String {
        let files = self.summary.changed().count();
        if self.dry_run {
            format!(
                "Dry run: {} change(s) in {} file(s)",
                self.summary.total_changes, files
            )
        } else {
            let written = self.written.as_ref().map_or(0, |r| r.written.len());
            format!(
                "{} change(s) written to {} file(s)",
                self.summary.total_changes, written
            )
        }
    }
}

pub async fn run(options: ApplyOptions) -> Result<()> {
    let ctx = CommandContext::load(options.path.clone())?;
    let scan = ProjectScanner::scan(&ctx.project_root, &ctx.config.scan)?;
    let theme = resolve_theme(&ctx, &scan, options.theme.as_deref())?;

    let tracker = ProgressTracker::new();
    let renderer = (!options.quiet && !options.format.is_json())
        .then(|| ConsoleRenderer::new(tracker.clone()).start_render_loop());
    tracker.start();

    let outcome = execute(&ctx, &scan, theme, &options, &tracker).await;
    match &outcome {
        Ok(outcome) => tracker.finish(true, &outcome.headline()),
        Err(e) => tracker.finish(false, &e.to_string()),
    }
    if let Some(handle) = renderer
        && let Err(e) = handle.await
    {
        tracing::debug!("Progress renderer stopped: {}", e);
    }
    let outcome = outcome?;

    if options.format.is_json() {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_outcome(&outcome, &ctx.project_root, options.quiet);
    }
    Ok(())
}

/// `None` means generic mode
fn resolve_theme(
    ctx: &CommandContext,
    scan: &ScanResult,
    requested: Option<&str>,
) -> Result<Option<&'static str>> {
    let requested = requested.or(ctx.config.transform.theme.as_deref());
    match requested {
        None => Ok(None),
        Some(AUTO_THEME) => {
            let recommendation = recommend_theme_with(scan, &ctx.config.brand)?;
            let id = preset::find(&recommendation.recommended.theme_id).map(|p| p.id);
            tracing::info!(theme = ?id, "Using recommended theme");
            Ok(id)
        }
        Some(id) => preset::find(id).map(|p| Some(p.id)).ok_or_else(|| {
            let known: Vec<&str> = preset::catalog().iter().map(|p| p.id).collect();
            NightshiftError::Config(format!(
                "Unknown theme '{}'. Available: {}, {}",
                id,
                known.join(", "),
                AUTO_THEME
            ))
        }),
    }
}

async fn execute(
    ctx: &CommandContext,
    scan: &ScanResult,
    theme: Option<&'static str>,
    options: &ApplyOptions,
    tracker: &ProgressTracker,
) -> Result<ApplyOutcome> {
    let paths: Vec<PathBuf> = scan
        .markup_files()
        .filter(|f| !f.class_strings.is_empty())
        .map(|f| f.path.clone())
        .collect();

    let summary = ProjectTransformer::new(theme)
        .with_concurrency(ctx.config.transform.concurrency)
        .with_progress(tracker.clone())
        .run(paths)
        .await;

    if options.dry_run {
        return Ok(ApplyOutcome {
            dry_run: true,
            summary,
            written: None,
            dark_mode: None,
        });
    }

    let resolution = options
        .on_conflict
        .unwrap_or(ctx.config.transform.on_conflict);
    let written = FileWriter::new(&ctx.project_root)
        .with_backups(options.backup.unwrap_or(ctx.config.transform.backup))
        .with_progress(tracker.clone())
        .apply(&summary.results, resolution)?;

    let dark_mode = options
        .enable_dark_mode
        .then(|| enable_dark_mode(&ctx.project_root));

    Ok(ApplyOutcome {
        dry_run: false,
        summary,
        written: Some(written),
        dark_mode,
    })
}

/// Runs after files are written, so patch errors are reported, never returned
fn enable_dark_mode(root: &Path) -> DarkModeStatus {
    match ConfigPatcher::enable_alternate_mode(root) {
        Ok(outcome) => outcome.into(),
        Err(e @ NightshiftError::MissingConfigTarget { .. }) => {
            tracing::warn!("{}", e);
            DarkModeStatus::NotFound {
                message: e.to_string(),
            }
        }
        Err(e) => {
            tracing::warn!("Could not enable dark mode: {}", e);
            DarkModeStatus::Failed {
                message: e.to_string(),
            }
        }
    }
}

fn print_outcome(outcome: &ApplyOutcome, root: &Path, quiet: bool) {
    let out = Output::new().quiet(quiet);
    let summary = &outcome.summary;

    out.header(if outcome.dry_run {
        "Dark Mode Preview"
    } else {
        "Dark Mode Applied"
    });
    out.field("Theme", summary.theme.as_deref().unwrap_or("generic"));
    out.field("Files", summary.total_files);
    out.field("Changes", summary.total_changes);

    let changed: Vec<_> = summary.changed().collect();
    if !changed.is_empty() {
        out.section("Changed files");
        for result in &changed {
            let path = result.path.strip_prefix(root).unwrap_or(&result.path);
            let mut tokens: Vec<&str> = result
                .transformed_tokens
                .iter()
                .take(LISTED_TOKENS)
                .map(String::as_str)
                .collect();
            if result.transformed_tokens.len() > LISTED_TOKENS {
                tokens.push("…");
            }
            out.item(&format!(
                "{} ({}): {}",
                path.display(),
                result.changes_count,
                tokens.join(" ")
            ));
        }
    }

    let failures: Vec<_> = summary.failures().collect();
    if !failures.is_empty() {
        out.section("Failed files");
        for result in failures {
            out.warning(&format!(
                "{}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            ));
        }
    }

    if let Some(report) = &outcome.written {
        for path in &report.skipped_conflicts {
            out.warning(&format!("Skipped (changed on disk): {}", path.display()));
        }
        if let Some(dir) = &report.backup_dir
            && !report.written.is_empty()
        {
            out.info(&format!("Backups: {}", dir.display()));
        }
    }

    match &outcome.dark_mode {
        Some(DarkModeStatus::Enabled { path }) => {
            out.success(&format!("Enabled class-based dark mode in {}", path.display()))
        }
        Some(DarkModeStatus::AlreadyEnabled { path }) => {
            out.info(&format!("Dark mode already enabled in {}", path.display()))
        }
        Some(DarkModeStatus::NotFound { message }) => {
            out.warning(message);
            out.info("Add `darkMode: 'class'` to your Tailwind config manually");
        }
        Some(DarkModeStatus::Failed { message }) => {
            out.warning(&format!("Dark mode not enabled: {}", message));
            out.info("Add `darkMode: 'class'` to your Tailwind config manually");
        }
        None => {}
    }

    println!();
    if outcome.dry_run {
        out.info("Dry run: no files were written");
    } else {
        out.success(&outcome.headline());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::fs;
    use tempfile::TempDir;

    fn project() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("index.html"),
            r#"<body class="bg-white text-gray-900"><p class="p-4">hi</p></body>"#,
        )
        .unwrap();
        dir
    }

    fn options(dir: &TempDir) -> ApplyOptions {
        ApplyOptions {
            path: Some(dir.path().to_path_buf()),
            quiet: true,
            format: OutputFormat::Json,
            ..ApplyOptions::default()
        }
    }

    #[tokio::test]
    async fn test_dry_run_leaves_files_untouched() {
        let dir = project();
        let before = fs::read_to_string(dir.path().join("index.html")).unwrap();
        run(ApplyOptions {
            dry_run: true,
            ..options(&dir)
        })
        .await
        .unwrap();
        assert_eq!(
            fs::read_to_string(dir.path().join("index.html")).unwrap(),
            before
        );
    }

    #[tokio::test]
    async fn test_apply_writes_dark_variants() {
        let dir = project();
        run(options(&dir)).await.unwrap();
        let after = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(after.contains("dark:bg-"), "{}", after);
        assert!(after.contains(r#"class="p-4""#));
    }

    #[test]
    fn test_missing_dark_mode_target_is_reported() {
        let dir = project();
        let status = enable_dark_mode(dir.path());
        assert!(matches!(status, DarkModeStatus::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_named_export_config_is_patched_on_apply() {
        let dir = project();
        let config = dir.path().join("tailwind.config.ts");
        fs::write(
            &config,
            "const config: Config = {\n  content: [],\n};\nexport default config;\n",
        )
        .unwrap();

        run(ApplyOptions {
            enable_dark_mode: true,
            ..options(&dir)
        })
        .await
        .unwrap();
        assert!(fs::read_to_string(&config).unwrap().contains("darkMode: 'class'"));
    }

    #[tokio::test]
    async fn test_patch_failure_keeps_written_files() {
        let dir = project();
        fs::write(dir.path().join("tailwind.config.js"), "module.exports = makeConfig\n").unwrap();
        assert!(matches!(
            enable_dark_mode(dir.path()),
            DarkModeStatus::Failed { .. }
        ));

        run(ApplyOptions {
            enable_dark_mode: true,
            ..options(&dir)
        })
        .await
        .unwrap();
        let after = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(after.contains("dark:bg-"));
    }

    #[test]
    fn test_unknown_theme_is_rejected() {
        let dir = project();
        let ctx = CommandContext::with_config(dir.path().to_path_buf(), Config::default());
        let scan = ProjectScanner::scan(dir.path(), &ctx.config.scan).unwrap();
        assert!(resolve_theme(&ctx, &scan, Some("midnight")).is_err());
        assert_eq!(
            resolve_theme(&ctx, &scan, Some("aurora")).unwrap(),
            Some("aurora")
        );
        assert!(resolve_theme(&ctx, &scan, Some(AUTO_THEME)).unwrap().is_some());
        assert_eq!(resolve_theme(&ctx, &scan, None).unwrap(), None);
    }
}
