//! Unified Error Type System
//!
//! Centralized error types for the entire application.
//!
//! ## Error Classes
//!
//! - **Fatal**: a required input is missing (project root does not exist)
//! - **Per-file**: parse/transform/IO problems on a single file, recorded as a
//!   failed `TransformationResult` while the batch continues
//! - **Decision points**: missing config target and write conflicts, surfaced
//!   to the caller because each needs different user guidance

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Application Error
// =============================================================================

#[derive(Debug, Error)]
pub enum NightshiftError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    #[error("Project path does not exist: {}", .0.display())]
    ProjectNotFound(PathBuf),

    #[error("Config error: {0}")]
    Config(String),

    // -------------------------------------------------------------------------
    // Per-file Errors
    // -------------------------------------------------------------------------
    #[error("Parse error in {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Transform failed for {path}: {message}")]
    Transform { path: String, message: String },

    // -------------------------------------------------------------------------
    // Decision Points
    // -------------------------------------------------------------------------
    /// No Tailwind config or entry stylesheet to enable dark mode in.
    /// Distinct from "already enabled", which is a successful outcome.
    #[error("No dark-mode configuration target found under {} (looked for: {})", root.display(), searched.join(", "))]
    MissingConfigTarget { root: PathBuf, searched: Vec<String> },

    /// Files changed on disk between scan and write
    #[error("{} file(s) changed on disk since they were scanned: {}", paths.len(), paths.join(", "))]
    WriteConflict { paths: Vec<String> },

    #[error("Theme validation failed: {0}")]
    ThemeValidation(String),
}

pub type Result<T> = std::result::Result<T, NightshiftError>;

// =============================================================================
// Helper Functions
// =============================================================================

impl NightshiftError {
    /// Create a per-file transform error
    pub fn transform(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transform {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Whether this error aborts the whole run rather than a single file
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::ProjectNotFound(_))
    }

    /// Whether the caller can resolve this by choosing a different option
    pub fn is_decision_point(&self) -> bool {
        matches!(
            self,
            Self::MissingConfigTarget { .. } | Self::WriteConflict { .. }
        )
    }
}

/// Context extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn with_context<C: Into<String>>(self, context: C) -> Result<T>;
}

impl<T, E: std::error::Error + Send + Sync + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn with_context<C: Into<String>>(self, context: C) -> Result<T> {
        self.map_err(|e| NightshiftError::Config(format!("{}: {}", context.into(), e)))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_missing_project_is_fatal() {
        assert!(NightshiftError::ProjectNotFound(PathBuf::from("/nope")).is_fatal());
        assert!(!NightshiftError::transform("a.tsx", "bad span").is_fatal());
        assert!(
            !NightshiftError::WriteConflict {
                paths: vec!["a.html".to_string()]
            }
            .is_fatal()
        );
    }

    #[test]
    fn test_decision_points() {
        let missing = NightshiftError::MissingConfigTarget {
            root: PathBuf::from("."),
            searched: vec!["tailwind.config.js".to_string()],
        };
        assert!(missing.is_decision_point());
        assert!(!NightshiftError::Config("x".to_string()).is_decision_point());
    }

    #[test]
    fn test_error_display() {
        let err = NightshiftError::WriteConflict {
            paths: vec!["a.html".to_string(), "b.tsx".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "2 file(s) changed on disk since they were scanned: a.html, b.tsx"
        );

        let err = NightshiftError::parse("src/App.tsx", "syntax error");
        assert_eq!(err.to_string(), "Parse error in src/App.tsx: syntax error");
    }

    #[test]
    fn test_with_context() {
        let raw: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::other("disk full"));
        let err = raw.with_context("writing backup").unwrap_err();
        assert_eq!(err.to_string(), "Config error: writing backup: disk full");
    }
}
