//! Utility tokens: mapping table, theme overrides and token anatomy

pub mod mapping;
pub mod overrides;
pub mod palette;
pub mod utility;

pub use mapping::{MappingEntry, TokenCategory};
pub use overrides::{OverrideRecord, OverrideResolver};
