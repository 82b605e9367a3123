//! CLI Common Utilities
//!
//! Shared context and argument helpers for command handlers.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::config::{Config, ConfigLoader};
use crate::types::{NightshiftError, Result};

/// Output format for commands that can emit JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn is_json(&self) -> bool {
        *self == Self::Json
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format '{}'. Valid values: text, json", s)),
        }
    }
}

/// Command execution context
///
/// Resolves the project root and loads the layered configuration for it.
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Project root directory
    pub project_root: PathBuf,
    /// Loaded configuration
    pub config: Config,
}

impl CommandContext {
    /// Load context for `path`, or the current directory
    ///
    /// A missing root is fatal.
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let project_root = resolve_root(path)?;
        let config = ConfigLoader::load_for(&project_root)?;
        Ok(Self {
            project_root,
            config,
        })
    }

    /// Context from an already loaded config
    pub fn with_config(project_root: PathBuf, config: Config) -> Self {
        Self {
            project_root,
            config,
        }
    }

    pub fn is_initialized(&self) -> bool {
        ConfigLoader::is_project_initialized(&self.project_root)
    }

    /// Validation report path, resolved against the project root
    pub fn report_path(&self, override_path: Option<&Path>) -> PathBuf {
        let path = override_path.unwrap_or(&self.config.validation.report_path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_root.join(path)
        }
    }
}

/// Project root from an optional argument, defaulting to the working directory
pub fn resolve_root(path: Option<PathBuf>) -> Result<PathBuf> {
    let root = match path {
        Some(path) => path,
        None => std::env::current_dir()?,
    };
    if !root.is_dir() {
        return Err(NightshiftError::ProjectNotFound(root));
    }
    Ok(root)
}

/// Directory name used as the default project name
pub fn project_name(root: &Path) -> String {
    root.canonicalize()
        .ok()
        .as_deref()
        .and_then(Path::file_name)
        .and_then(|n| n.to_str())
        .unwrap_or("project")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_output_format_parse() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let dir = TempDir::new().unwrap();
        let err = resolve_root(Some(dir.path().join("nope"))).unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_report_path_is_rooted() {
        let dir = TempDir::new().unwrap();
        let ctx = CommandContext::with_config(dir.path().to_path_buf(), Config::default());
        assert!(ctx.report_path(None).starts_with(dir.path()));
        assert_eq!(
            ctx.report_path(Some(Path::new("out/r.json"))),
            dir.path().join("out/r.json")
        );
    }

    #[test]
    fn test_project_name_from_directory() {
        let dir = TempDir::new().unwrap();
        let app = dir.path().join("storefront");
        std::fs::create_dir(&app).unwrap();
        assert_eq!(project_name(&app), "storefront");
    }
}
