//! Project Analyzer Module
//!
//! Turns a project root into typed analysis values:
//! - File scanning with gitignore support
//! - Project scan (framework, class strings, dark-mode detection)
//! - Brand color extraction
//! - Design features and archetype classification

pub mod archetype;
pub mod brand;
pub mod features;
pub mod project;
pub mod scanner;

pub use archetype::{Archetype, ArchetypeClassification, ArchetypeScore, classify};
pub use brand::{BrandColorProfile, BrandExtractor, ColorSample, Temperature};
pub use features::{DesignFeatureVector, extract_features};
pub use project::ProjectScanner;
