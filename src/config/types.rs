//! Configuration Types
//!
//! All configuration structures with sensible defaults.
//! Supports global (~/.config/nightshift/) and project (.nightshift/) level configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::analyzer::scanner::file_scanner::{DEFAULT_MAX_FILE_SIZE, DEFAULT_SKIP_DIRS};
use crate::constants::{brand, transform};
use crate::transform::writer::ConflictResolution;
use crate::types::{NightshiftError, Result};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// Project-specific settings
    pub project: ProjectConfig,

    /// File discovery
    pub scan: ScanConfig,

    /// Class-string rewriting and writing
    pub transform: TransformConfig,

    /// Brand color extraction thresholds
    pub brand: BrandConfig,

    /// Theme validation reports
    pub validation: ValidationConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            project: ProjectConfig::default(),
            scan: ScanConfig::default(),
            transform: TransformConfig::default(),
            brand: BrandConfig::default(),
            validation: ValidationConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values are within acceptable ranges.
    /// Returns `NightshiftError::Config` on validation failure.
    pub fn validate(&self) -> Result<()> {
        if self.transform.concurrency == 0 {
            return Err(NightshiftError::Config(
                "transform.concurrency must be greater than 0".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.brand.min_saturation) {
            return Err(NightshiftError::Config(format!(
                "brand.min_saturation must be between 0.0 and 1.0, got {}",
                self.brand.min_saturation
            )));
        }

        let (low, high) = (self.brand.min_luminance, self.brand.max_luminance);
        if !(0.0..=1.0).contains(&low) || !(0.0..=1.0).contains(&high) || low >= high {
            return Err(NightshiftError::Config(format!(
                "brand luminance window must satisfy 0 <= min < max <= 1, got ({}, {})",
                low, high
            )));
        }

        if self.brand.min_usage == 0 {
            return Err(NightshiftError::Config(
                "brand.min_usage must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

// =============================================================================
// Project Configuration
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Project name (defaults to directory name)
    pub name: Option<String>,
}

// =============================================================================
// Scan Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Glob patterns (relative to the project root) to include
    pub include: Vec<String>,

    /// Glob patterns to exclude
    pub exclude: Vec<String>,

    /// Files larger than this many bytes are skipped
    pub max_file_size: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            include: vec!["**/*".to_string()],
            exclude: DEFAULT_SKIP_DIRS
                .iter()
                .map(|d| format!("**/{}/**", d))
                .collect(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

// =============================================================================
// Transform Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    /// Preset id; unset means the generic mapping
    pub theme: Option<String>,

    /// Files processed concurrently
    pub concurrency: usize,

    /// Copy originals to .nightshift/backups before writing
    pub backup: bool,

    /// What to do with files that changed on disk since the scan
    pub on_conflict: ConflictResolution,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            theme: None,
            concurrency: transform::DEFAULT_CONCURRENCY,
            backup: false,
            on_conflict: ConflictResolution::Cancel,
        }
    }
}

// =============================================================================
// Brand Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandConfig {
    pub min_usage: u32,
    pub min_saturation: f64,
    /// Exclusive lower lightness bound
    pub min_luminance: f64,
    /// Exclusive upper lightness bound
    pub max_luminance: f64,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            min_usage: brand::MIN_USAGE,
            min_saturation: brand::MIN_SATURATION,
            min_luminance: brand::MIN_LUMINANCE,
            max_luminance: brand::MAX_LUMINANCE,
        }
    }
}

// =============================================================================
// Validation Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Where `validate --report` writes the JSON report
    pub report_path: PathBuf,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            report_path: PathBuf::from(".nightshift/theme-report.json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.transform.concurrency, 8);
        assert_eq!(config.brand.min_usage, 2);
        assert_eq!(config.transform.on_conflict, ConflictResolution::Cancel);
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = Config::default();
        config.transform.concurrency = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.brand.min_luminance = 0.9;
        config.brand.max_luminance = 0.1;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.brand.min_saturation = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml() {
        let config: Config = toml::from_str(
            r#"
[transform]
theme = "aurora"
on_conflict = "overwrite"
"#,
        )
        .unwrap();
        assert_eq!(config.transform.theme.as_deref(), Some("aurora"));
        assert_eq!(config.transform.on_conflict, ConflictResolution::Overwrite);
        assert_eq!(config.transform.concurrency, 8);
        assert_eq!(config.scan.max_file_size, DEFAULT_MAX_FILE_SIZE);
    }
}
