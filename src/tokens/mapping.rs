//! Token Mapping Table
//!
//! Static dictionary from a single-mode utility token to its dual-mode form,
//! e.g. `bg-white` → `bg-white dark:bg-gray-900`.
//!
//! The table is declared as shade-inversion rules per category and expanded
//! once for every neutral scale (gray, slate, zinc, neutral). Each entry
//! records the contrast ratio its dark half is expected to reach so the
//! validator can audit the table against real palette values.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::Serialize;

use super::palette::NEUTRAL_FAMILIES;
use super::utility::to_dark;
use crate::constants::contrast;

/// Utility category of a mapped token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenCategory {
    Background,
    Text,
    Border,
    Ring,
    Divide,
    Placeholder,
    Interactive,
    Shadow,
    Gradient,
}

impl TokenCategory {
    /// Contrast the dark half must reach against its reference color.
    /// Text is measured against the dark background, backgrounds against
    /// the dark foreground.
    pub fn target_contrast(&self) -> f64 {
        match self {
            Self::Text | Self::Background => contrast::AA_TEXT,
            Self::Placeholder | Self::Ring => contrast::AA_UI,
            Self::Interactive => contrast::AA_UI,
            Self::Border | Self::Divide | Self::Shadow | Self::Gradient => contrast::NONE,
        }
    }
}

impl std::fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Background => "background",
            Self::Text => "text",
            Self::Border => "border",
            Self::Ring => "ring",
            Self::Divide => "divide",
            Self::Placeholder => "placeholder",
            Self::Interactive => "interactive",
            Self::Shadow => "shadow",
            Self::Gradient => "gradient",
        };
        write!(f, "{}", name)
    }
}

/// One row of the mapping table
#[derive(Debug, Clone, Serialize)]
pub struct MappingEntry {
    /// Single-mode source token
    pub token: String,
    /// Alternate-mode token (`dark:` prefixed)
    pub dark: String,
    /// Source and alternate-mode token joined with a space
    pub dual: String,
    pub category: TokenCategory,
    pub target_contrast: f64,
}

impl MappingEntry {
    fn new(token: String, dark_utility: String, category: TokenCategory) -> Self {
        let dark = to_dark(&dark_utility);
        let dual = format!("{} {}", token, dark);
        Self {
            token,
            dark,
            dual,
            category,
            target_contrast: category.target_contrast(),
        }
    }
}

/// Shade inversion rule: `{prefix}-{family}-{from}` → `dark:{prefix}-{family}-{to}`
struct ScaleRule {
    prefix: &'static str,
    category: TokenCategory,
    shades: &'static [(&'static str, &'static str)],
}

const SCALE_RULES: &[ScaleRule] = &[
    ScaleRule {
        prefix: "bg",
        category: TokenCategory::Background,
        shades: &[
            ("50", "950"),
            ("100", "800"),
            ("200", "700"),
            ("300", "600"),
            ("400", "600"),
        ],
    },
    ScaleRule {
        prefix: "text",
        category: TokenCategory::Text,
        shades: &[
            ("950", "50"),
            ("900", "100"),
            ("800", "200"),
            ("700", "300"),
            ("600", "400"),
            ("500", "400"),
        ],
    },
    ScaleRule {
        prefix: "border",
        category: TokenCategory::Border,
        shades: &[
            ("50", "900"),
            ("100", "800"),
            ("200", "700"),
            ("300", "600"),
            ("400", "500"),
        ],
    },
    ScaleRule {
        prefix: "divide",
        category: TokenCategory::Divide,
        shades: &[("100", "800"), ("200", "700"), ("300", "600")],
    },
    ScaleRule {
        prefix: "ring",
        category: TokenCategory::Ring,
        shades: &[("200", "500"), ("300", "500"), ("400", "400"), ("500", "400")],
    },
    ScaleRule {
        prefix: "placeholder",
        category: TokenCategory::Placeholder,
        shades: &[("400", "500"), ("500", "400")],
    },
    ScaleRule {
        prefix: "hover:bg",
        category: TokenCategory::Interactive,
        shades: &[("50", "800"), ("100", "700"), ("200", "600")],
    },
    ScaleRule {
        prefix: "hover:text",
        category: TokenCategory::Interactive,
        shades: &[("900", "100"), ("700", "200")],
    },
    ScaleRule {
        prefix: "hover:border",
        category: TokenCategory::Interactive,
        shades: &[("300", "500")],
    },
    ScaleRule {
        prefix: "from",
        category: TokenCategory::Gradient,
        shades: &[("50", "900"), ("100", "800")],
    },
    ScaleRule {
        prefix: "via",
        category: TokenCategory::Gradient,
        shades: &[("50", "900"), ("100", "800")],
    },
    ScaleRule {
        prefix: "to",
        category: TokenCategory::Gradient,
        shades: &[("50", "900"), ("100", "800")],
    },
];

/// Literal entries that are not shade inversions
const LITERAL_ENTRIES: &[(&str, &str, TokenCategory)] = &[
    ("bg-white", "bg-gray-900", TokenCategory::Background),
    ("text-black", "text-white", TokenCategory::Text),
    ("hover:bg-white", "hover:bg-gray-800", TokenCategory::Interactive),
    ("from-white", "from-gray-900", TokenCategory::Gradient),
    ("via-white", "via-gray-900", TokenCategory::Gradient),
    ("to-white", "to-gray-900", TokenCategory::Gradient),
    ("shadow-sm", "shadow-black/40", TokenCategory::Shadow),
    ("shadow", "shadow-black/40", TokenCategory::Shadow),
    ("shadow-md", "shadow-black/40", TokenCategory::Shadow),
    ("shadow-lg", "shadow-black/50", TokenCategory::Shadow),
    ("shadow-xl", "shadow-black/50", TokenCategory::Shadow),
];

static TABLE: LazyLock<BTreeMap<String, MappingEntry>> = LazyLock::new(build_table);

fn build_table() -> BTreeMap<String, MappingEntry> {
    let mut table = BTreeMap::new();

    for rule in SCALE_RULES {
        for family in NEUTRAL_FAMILIES {
            for (from, to) in rule.shades {
                let token = format!("{}-{}-{}", rule.prefix, family, from);
                let dark = format!("{}-{}-{}", rule.prefix, family, to);
                table.insert(token.clone(), MappingEntry::new(token, dark, rule.category));
            }
        }
    }

    for (token, dark, category) in LITERAL_ENTRIES {
        table.insert(
            token.to_string(),
            MappingEntry::new(token.to_string(), dark.to_string(), *category),
        );
    }

    table
}

/// Dual-mode replacement for a token, e.g. `bg-white dark:bg-gray-900`
pub fn lookup(token: &str) -> Option<&'static str> {
    TABLE.get(token).map(|e| e.dual.as_str())
}

/// Full table row for a token
pub fn entry(token: &str) -> Option<&'static MappingEntry> {
    TABLE.get(token)
}

/// All entries, sorted by source token
pub fn entries() -> impl Iterator<Item = &'static MappingEntry> {
    TABLE.values()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::utility::{is_counterpart, slot};

    #[test]
    fn test_lookup_known_tokens() {
        assert_eq!(lookup("bg-white"), Some("bg-white dark:bg-gray-900"));
        assert_eq!(
            lookup("text-gray-900"),
            Some("text-gray-900 dark:text-gray-100")
        );
        assert_eq!(
            lookup("border-slate-200"),
            Some("border-slate-200 dark:border-slate-700")
        );
        assert_eq!(
            lookup("hover:bg-zinc-100"),
            Some("hover:bg-zinc-100 dark:hover:bg-zinc-700")
        );
    }

    #[test]
    fn test_lookup_unknown_is_absent() {
        assert_eq!(lookup("p-4"), None);
        assert_eq!(lookup("bg-blue-500"), None);
        assert_eq!(lookup("dark:bg-gray-900"), None);
    }

    #[test]
    fn test_every_dark_half_is_a_counterpart_of_its_key() {
        for entry in entries() {
            assert!(
                is_counterpart(&entry.token, &entry.dark),
                "{} -> {} does not share a slot ({:?} vs {:?})",
                entry.token,
                entry.dark,
                slot(&entry.token),
                slot(&entry.dark)
            );
        }
    }

    #[test]
    fn test_covers_all_neutral_families() {
        for family in NEUTRAL_FAMILIES {
            assert!(lookup(&format!("bg-{}-50", family)).is_some());
            assert!(lookup(&format!("text-{}-900", family)).is_some());
            assert!(lookup(&format!("divide-{}-200", family)).is_some());
            assert!(lookup(&format!("placeholder-{}-400", family)).is_some());
        }
    }

    #[test]
    fn test_entry_metadata() {
        let text = entry("text-gray-700").unwrap();
        assert_eq!(text.category, TokenCategory::Text);
        assert_eq!(text.target_contrast, 4.5);

        let border = entry("border-gray-200").unwrap();
        assert_eq!(border.target_contrast, 1.0);
    }
}
