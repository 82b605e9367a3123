//! Theme presets and recommendation

pub mod preset;
pub mod recommender;

pub use preset::{ColorSpace, PaletteSlot, ThemeColors, ThemePalette, ThemePreset};
pub use recommender::{SmartRecommendation, ThemeRecommendation, recommend, recommend_theme};
