//! Theme Quality Validator
//!
//! Rule-based scoring of theme presets (contrast, distinctness, polarity,
//! harmony) and an audit of the mapping table's contrast targets.

pub mod audit;
pub mod engine;
pub mod reporter;
pub mod rules;

pub use audit::audit_mapping;
pub use engine::{build_report, grade, validate, validate_theme_catalog};
pub use reporter::Reporter;
