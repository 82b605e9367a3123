//! Nightshift - Dark-Mode Variants for Utility-Class Front Ends
//!
//! Rewrites Tailwind class strings so every light-mode color utility gains a
//! `dark:` counterpart, either from a generic mapping table or from a theme
//! preset chosen to fit the project's brand colors and design style.
//!
//! ## Core Features
//!
//! - **Class-String Transformer**: generic, themed and re-theming rewrites that
//!   are idempotent and keep every base token in place
//! - **Brand Analysis**: dominant colors, hue temperature and confidence from
//!   literal colors and color utilities
//! - **Archetype Classification**: corporate, modern, developer or creative,
//!   from a four-feature design vector
//! - **Theme Recommendation**: brand, archetype and accessibility fit per preset
//! - **Theme Validation**: rule-based scoring with letter grades
//!
//! ## Quick Start
//!
//! ```
//! use nightshift::transform;
//!
//! let out = transform("bg-white text-gray-900 p-4", None);
//! assert!(out.starts_with("bg-white dark:bg-"));
//! ```
//!
//! ## Modules
//!
//! - [`tokens`]: utility-token parsing and the light → dark mapping table
//! - [`transform`]: class-string rewriting, file extraction and project runs
//! - [`analyzer`]: project scanning, brand colors and design archetypes
//! - [`themes`]: preset catalog and recommendation
//! - [`validator`]: theme quality rules and reports
//! - [`config`]: layered configuration

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod constants;
pub mod themes;
pub mod tokens;
pub mod transform;
pub mod types;
pub mod validator;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{Config, ConfigLoader};

// Error Types
pub use types::error::{NightshiftError, Result, ResultExt};

// =============================================================================
// Transformation Re-exports
// =============================================================================

pub use transform::{
    ClassTransformer, ConflictResolution, FileWriter, ProjectTransformer, transform,
    transform_project,
};
pub use types::{TransformationResult, TransformationSummary};

// =============================================================================
// Analysis Re-exports
// =============================================================================

pub use analyzer::{
    Archetype, ArchetypeClassification, BrandColorProfile, DesignFeatureVector, ProjectScanner,
    classify,
};
pub use themes::{SmartRecommendation, ThemePreset, recommend_theme};
pub use validator::validate_theme_catalog;
