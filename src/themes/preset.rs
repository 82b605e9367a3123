//! Theme preset catalog
//!
//! Each preset is a fixed 14-color palette: seven semantic slots for the
//! light mode and the same seven for the dark mode. Presets are immutable;
//! the catalog is the single source for overrides, recommendation and
//! validation.

use serde::Serialize;

use crate::types::color::Rgb;

/// Semantic palette slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteSlot {
    Background,
    Foreground,
    Primary,
    Secondary,
    Accent,
    Muted,
    Border,
}

impl PaletteSlot {
    pub const ALL: [PaletteSlot; 7] = [
        Self::Background,
        Self::Foreground,
        Self::Primary,
        Self::Secondary,
        Self::Accent,
        Self::Muted,
        Self::Border,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Foreground => "foreground",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Muted => "muted",
            Self::Border => "border",
        }
    }
}

/// How a preset renders its dark colors inside arbitrary-value tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSpace {
    /// `bg-[#0b1120]`
    Hex,
    /// `bg-[oklch(0.160_0.026_264.1)]`
    Oklch,
}

/// Seven-slot palette (hex strings)
#[derive(Debug, Clone, Serialize)]
pub struct ThemeColors {
    pub background: &'static str,
    pub foreground: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub muted: &'static str,
    pub border: &'static str,
}

impl ThemeColors {
    pub fn get(&self, slot: PaletteSlot) -> &'static str {
        match slot {
            PaletteSlot::Background => self.background,
            PaletteSlot::Foreground => self.foreground,
            PaletteSlot::Primary => self.primary,
            PaletteSlot::Secondary => self.secondary,
            PaletteSlot::Accent => self.accent,
            PaletteSlot::Muted => self.muted,
            PaletteSlot::Border => self.border,
        }
    }

    /// Parsed color of a slot; `None` if the stored value is malformed
    pub fn rgb(&self, slot: PaletteSlot) -> Option<Rgb> {
        Rgb::parse_hex(self.get(slot))
    }
}

/// Light and dark palettes of a preset
#[derive(Debug, Clone, Serialize)]
pub struct ThemePalette {
    pub light: ThemeColors,
    pub dark: ThemeColors,
}

#[derive(Debug, Clone, Serialize)]
pub struct ThemePreset {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub color_space: ColorSpace,
    pub colors: ThemePalette,
}

const CATALOG: &[ThemePreset] = &[
    ThemePreset {
        id: "professional",
        name: "Professional",
        description: "Restrained slate and blue for business and enterprise interfaces",
        color_space: ColorSpace::Hex,
        colors: ThemePalette {
            light: ThemeColors {
                background: "#ffffff",
                foreground: "#0f172a",
                primary: "#2563eb",
                secondary: "#f1f5f9",
                accent: "#0ea5e9",
                muted: "#64748b",
                border: "#e2e8f0",
            },
            dark: ThemeColors {
                background: "#0b1120",
                foreground: "#e2e8f0",
                primary: "#60a5fa",
                secondary: "#1e293b",
                accent: "#38bdf8",
                muted: "#94a3b8",
                border: "#1e293b",
            },
        },
    },
    ThemePreset {
        id: "aurora",
        name: "Aurora",
        description: "Violet and pink on deep ink, expressed in OKLCH",
        color_space: ColorSpace::Oklch,
        colors: ThemePalette {
            light: ThemeColors {
                background: "#ffffff",
                foreground: "#18181b",
                primary: "#7c3aed",
                secondary: "#f4f4f5",
                accent: "#db2777",
                muted: "#71717a",
                border: "#e4e4e7",
            },
            dark: ThemeColors {
                background: "#0c0a14",
                foreground: "#f4f4f5",
                primary: "#a78bfa",
                secondary: "#27272a",
                accent: "#f472b6",
                muted: "#a1a1aa",
                border: "#27272a",
            },
        },
    },
    ThemePreset {
        id: "terminal",
        name: "Terminal",
        description: "High-contrast zinc with emerald and cyan, for developer tools",
        color_space: ColorSpace::Hex,
        colors: ThemePalette {
            light: ThemeColors {
                background: "#fafafa",
                foreground: "#09090b",
                primary: "#047857",
                secondary: "#f4f4f5",
                accent: "#0891b2",
                muted: "#52525b",
                border: "#d4d4d8",
            },
            dark: ThemeColors {
                background: "#09090b",
                foreground: "#e4e4e7",
                primary: "#34d399",
                secondary: "#18181b",
                accent: "#22d3ee",
                muted: "#a1a1aa",
                border: "#27272a",
            },
        },
    },
    ThemePreset {
        id: "sunset",
        name: "Sunset",
        description: "Warm orange and rose on stone, for expressive creative work",
        color_space: ColorSpace::Oklch,
        colors: ThemePalette {
            light: ThemeColors {
                background: "#fffbf5",
                foreground: "#1c1917",
                primary: "#c2410c",
                secondary: "#fef3c7",
                accent: "#be185d",
                muted: "#78716c",
                border: "#e7e5e4",
            },
            dark: ThemeColors {
                background: "#1c1412",
                foreground: "#fafaf9",
                primary: "#fb923c",
                secondary: "#292524",
                accent: "#f472b6",
                muted: "#a8a29e",
                border: "#3a2f2b",
            },
        },
    },
];

/// All built-in presets in catalog order
pub fn catalog() -> &'static [ThemePreset] {
    CATALOG
}

/// Find a preset by id (case-insensitive)
pub fn find(id: &str) -> Option<&'static ThemePreset> {
    CATALOG.iter().find(|p| p.id.eq_ignore_ascii_case(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_unique() {
        let mut ids: Vec<_> = catalog().iter().map(|p| p.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), catalog().len());
    }

    #[test]
    fn test_every_slot_parses() {
        for preset in catalog() {
            for slot in PaletteSlot::ALL {
                assert!(preset.colors.light.rgb(slot).is_some(), "{} light {:?}", preset.id, slot);
                assert!(preset.colors.dark.rgb(slot).is_some(), "{} dark {:?}", preset.id, slot);
            }
        }
    }

    #[test]
    fn test_find_is_case_insensitive() {
        assert_eq!(find("Aurora").map(|p| p.id), Some("aurora"));
        assert!(find("unknown").is_none());
    }
}
