//! Apply a computed batch to disk
//!
//! Only successful results with changes are written. Each target's current
//! content is compared with the content the transform started from; a
//! mismatch means the file changed underneath us and is a conflict.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::Local;
use serde::{Deserialize, Serialize};

use super::progress::{Phase, ProgressTracker};
use crate::types::{NightshiftError, Result, TransformationResult};

/// What to do when a file changed on disk since it was transformed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictResolution {
    /// Skip conflicting files, write the rest
    Continue,
    /// Write anyway
    Overwrite,
    /// Write nothing and report the conflicts
    #[default]
    Cancel,
}

impl fmt::Display for ConflictResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Continue => write!(f, "continue"),
            Self::Overwrite => write!(f, "overwrite"),
            Self::Cancel => write!(f, "cancel"),
        }
    }
}

impl FromStr for ConflictResolution {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "continue" | "skip" => Ok(Self::Continue),
            "overwrite" | "force" => Ok(Self::Overwrite),
            "cancel" | "abort" => Ok(Self::Cancel),
            _ => Err(format!(
                "Unknown conflict resolution: {}. Use continue, overwrite or cancel",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ApplyReport {
    pub written: Vec<PathBuf>,
    pub skipped_conflicts: Vec<PathBuf>,
    pub backup_dir: Option<PathBuf>,
}

pub struct FileWriter {
    root: PathBuf,
    backup_dir: Option<PathBuf>,
    tracker: Option<ProgressTracker>,
}

impl FileWriter {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            backup_dir: None,
            tracker: None,
        }
    }

    /// Copy originals into `.nightshift/backups/<timestamp>/` before writing
    pub fn with_backups(mut self, enabled: bool) -> Self {
        self.backup_dir = enabled.then(|| {
            self.root
                .join(".nightshift")
                .join("backups")
                .join(Local::now().format("%Y%m%d-%H%M%S").to_string())
        });
        self
    }

    pub fn with_progress(mut self, tracker: ProgressTracker) -> Self {
        self.tracker = Some(tracker);
        self
    }

    pub fn apply(
        &self,
        results: &[TransformationResult],
        resolution: ConflictResolution,
    ) -> Result<ApplyReport> {
        let pending: Vec<&TransformationResult> =
            results.iter().filter(|r| r.needs_write()).collect();

        let conflicts: Vec<&Path> = pending
            .iter()
            .filter(|r| self.has_conflict(r))
            .map(|r| r.path.as_path())
            .collect();

        if !conflicts.is_empty() && resolution == ConflictResolution::Cancel {
            return Err(NightshiftError::WriteConflict {
                paths: conflicts.iter().map(|p| p.display().to_string()).collect(),
            });
        }

        if let Some(tracker) = &self.tracker {
            tracker.start_phase(Phase::Write, pending.len());
        }

        let mut report = ApplyReport {
            backup_dir: self.backup_dir.clone(),
            ..ApplyReport::default()
        };

        for result in pending {
            let item = result.path.display().to_string();
            if conflicts.contains(&result.path.as_path())
                && resolution == ConflictResolution::Continue
            {
                tracing::warn!(path = %item, "Skipping file changed on disk");
                report.skipped_conflicts.push(result.path.clone());
            } else {
                self.backup(&result.path)?;
                fs::write(&result.path, &result.transformed_content)?;
                tracing::debug!(path = %item, changes = result.changes_count, "Wrote file");
                report.written.push(result.path.clone());
            }
            if let Some(tracker) = &self.tracker {
                tracker.advance(&item);
            }
        }

        Ok(report)
    }

    fn has_conflict(&self, result: &TransformationResult) -> bool {
        match fs::read_to_string(&result.path) {
            Ok(current) => current != result.original_content,
            Err(_) => true,
        }
    }

    fn backup(&self, path: &Path) -> Result<()> {
        let Some(dir) = &self.backup_dir else {
            return Ok(());
        };
        if !path.exists() {
            return Ok(());
        }
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        let relative = relative
            .components()
            .filter(|c| matches!(c, std::path::Component::Normal(_)))
            .collect::<PathBuf>();
        let target = dir.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(path, &target)?;
        Ok(())
    }
}
