//! Theme-Specific Override Resolver
//!
//! Each preset binds a fixed set of base tokens to one of its seven palette
//! slots. The override keeps the base (light) token and replaces the dark
//! half with the preset's exact dark color as an arbitrary value:
//!
//! ```text
//! bg-white  --professional-->  bg-white dark:bg-[#0b1120]
//! bg-white  --aurora-------->  bg-white dark:bg-[oklch(0.153_0.021_292.9)]
//! ```
//!
//! Records are built once from the preset catalog into an ordered list and
//! indexed by `(theme_id, token)`.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

use super::utility::{property, split_variants, to_dark};
use crate::themes::preset::{self, ColorSpace, PaletteSlot, ThemePreset};
use crate::types::color::Rgb;

/// Base tokens each preset overrides, and the palette slot they draw from
const SLOT_BINDINGS: &[(&str, PaletteSlot)] = &[
    ("bg-white", PaletteSlot::Background),
    ("bg-gray-50", PaletteSlot::Background),
    ("bg-slate-50", PaletteSlot::Background),
    ("text-gray-900", PaletteSlot::Foreground),
    ("text-black", PaletteSlot::Foreground),
    ("text-slate-900", PaletteSlot::Foreground),
    ("bg-blue-600", PaletteSlot::Primary),
    ("bg-blue-500", PaletteSlot::Primary),
    ("text-blue-600", PaletteSlot::Primary),
    ("ring-blue-500", PaletteSlot::Primary),
    ("bg-gray-100", PaletteSlot::Secondary),
    ("bg-slate-100", PaletteSlot::Secondary),
    ("bg-indigo-500", PaletteSlot::Accent),
    ("text-indigo-600", PaletteSlot::Accent),
    ("text-gray-500", PaletteSlot::Muted),
    ("text-gray-600", PaletteSlot::Muted),
    ("text-slate-500", PaletteSlot::Muted),
    ("border-gray-200", PaletteSlot::Border),
    ("border-gray-300", PaletteSlot::Border),
    ("divide-gray-200", PaletteSlot::Border),
    ("border-slate-200", PaletteSlot::Border),
];

/// One `{match key, replacement}` record
#[derive(Debug, Clone, Serialize)]
pub struct OverrideRecord {
    pub theme_id: &'static str,
    pub token: &'static str,
    pub slot: PaletteSlot,
    /// Dark half only, e.g. `dark:bg-[#0b1120]`
    pub dark: String,
    /// Base token and dark half joined with a space
    pub replacement: String,
}

pub struct OverrideResolver {
    records: Vec<OverrideRecord>,
    index: HashMap<&'static str, HashMap<&'static str, usize>>,
}

static RESOLVER: LazyLock<OverrideResolver> =
    LazyLock::new(|| OverrideResolver::from_catalog(preset::catalog()));

impl OverrideResolver {
    /// Process-wide resolver over the built-in catalog
    pub fn global() -> &'static OverrideResolver {
        &RESOLVER
    }

    pub fn from_catalog(catalog: &'static [ThemePreset]) -> Self {
        let mut records = Vec::with_capacity(catalog.len() * SLOT_BINDINGS.len());
        let mut index: HashMap<&'static str, HashMap<&'static str, usize>> = HashMap::new();

        for theme in catalog {
            for &(token, slot) in SLOT_BINDINGS {
                let Some(color) = theme.colors.dark.rgb(slot) else {
                    tracing::warn!(theme = theme.id, slot = slot.as_str(), "Malformed preset color");
                    continue;
                };
                let dark = dark_half(token, color, theme.color_space);
                let replacement = format!("{} {}", token, dark);
                index
                    .entry(theme.id)
                    .or_default()
                    .insert(token, records.len());
                records.push(OverrideRecord {
                    theme_id: theme.id,
                    token,
                    slot,
                    dark,
                    replacement,
                });
            }
        }

        Self { records, index }
    }

    /// Theme-colored replacement for `token`, or `None` for unknown pairs
    pub fn resolve(&self, token: &str, theme_id: &str) -> Option<&str> {
        self.record(token, theme_id).map(|r| r.replacement.as_str())
    }

    pub fn record(&self, token: &str, theme_id: &str) -> Option<&OverrideRecord> {
        let theme_id = theme_id.to_ascii_lowercase();
        let idx = self.index.get(theme_id.as_str())?.get(token)?;
        self.records.get(*idx)
    }

    /// Every record, in catalog then binding order
    pub fn records(&self) -> &[OverrideRecord] {
        &self.records
    }
}

/// `resolve` against the built-in catalog
pub fn resolve(token: &str, theme_id: &str) -> Option<&'static str> {
    RESOLVER.resolve(token, theme_id)
}

fn dark_half(token: &str, color: Rgb, space: ColorSpace) -> String {
    let (variants, utility) = split_variants(token);
    let value = match space {
        ColorSpace::Hex => color.to_hex(),
        ColorSpace::Oklch => color.to_oklch().to_arbitrary_value(),
    };
    let mut utility_part = String::new();
    for variant in variants {
        utility_part.push_str(variant);
        utility_part.push(':');
    }
    utility_part.push_str(&format!("{}-[{}]", property(utility), value));
    to_dark(&utility_part)
}
