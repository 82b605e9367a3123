//! Class-string transformation pipeline
//!
//! - [`class_string`]: single class-string rewrite (pure)
//! - [`source`]: class-string extraction and span rewriting per file
//! - [`project`]: batch transformation, in memory or from disk
//! - [`writer`]: conflict-checked writes with optional backups
//! - [`config_patch`]: enabling the dark variant in the project's Tailwind setup
//! - [`progress`]: progress events for renderers

pub mod class_string;
pub mod config_patch;
pub mod progress;
pub mod project;
pub mod source;
pub mod writer;

pub use class_string::{ClassTransform, ClassTransformer, transform};
pub use config_patch::{ConfigPatcher, PatchOutcome};
pub use progress::{Phase, ProgressEvent, ProgressTracker};
pub use project::{ProjectTransformer, transform_file, transform_project};
pub use writer::{ApplyReport, ConflictResolution, FileWriter};
