pub mod color;
pub mod error;
pub mod scan;
pub mod transform;
pub mod validation;

pub use color::{Hsl, Oklch, Rgb, contrast};
pub use error::{NightshiftError, Result, ResultExt};
pub use scan::{Framework, ScanResult, SourceFile};
pub use transform::{TransformationResult, TransformationSummary};
pub use validation::{
    Grade, IssueCategory, IssueSeverity, ThemeValidationResult, ValidationIssue, ValidationReport,
};
