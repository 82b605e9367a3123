//! Utility palette reference values
//!
//! Representative hex values for the named color scales the mapping table and
//! brand extractor understand. Neutral scales cover every shade step; brand
//! families cover the steps commonly used for brand fills and text.

/// Gray-family scales the mapping table rewrites
pub const NEUTRAL_FAMILIES: &[&str] = &["gray", "slate", "zinc", "neutral"];

/// Shade steps of the neutral scales
pub const NEUTRAL_SHADES: &[&str] = &[
    "50", "100", "200", "300", "400", "500", "600", "700", "800", "900", "950",
];

/// Families that can carry brand identity
pub const BRAND_FAMILIES: &[&str] = &[
    "blue", "red", "green", "purple", "yellow", "pink", "indigo", "teal", "orange", "violet",
    "emerald", "cyan", "amber", "rose", "sky",
];

/// Shade steps recognized for brand families
pub const BRAND_SHADES: &[&str] = &["400", "500", "600", "700"];

const NEUTRALS: &[(&str, [&str; 11])] = &[
    (
        "gray",
        [
            "#f9fafb", "#f3f4f6", "#e5e7eb", "#d1d5db", "#9ca3af", "#6b7280", "#4b5563", "#374151",
            "#1f2937", "#111827", "#030712",
        ],
    ),
    (
        "slate",
        [
            "#f8fafc", "#f1f5f9", "#e2e8f0", "#cbd5e1", "#94a3b8", "#64748b", "#475569", "#334155",
            "#1e293b", "#0f172a", "#020617",
        ],
    ),
    (
        "zinc",
        [
            "#fafafa", "#f4f4f5", "#e4e4e7", "#d4d4d8", "#a1a1aa", "#71717a", "#52525b", "#3f3f46",
            "#27272a", "#18181b", "#09090b",
        ],
    ),
    (
        "neutral",
        [
            "#fafafa", "#f5f5f5", "#e5e5e5", "#d4d4d4", "#a3a3a3", "#737373", "#525252", "#404040",
            "#262626", "#171717", "#0a0a0a",
        ],
    ),
];

const BRANDS: &[(&str, [&str; 4])] = &[
    ("blue", ["#60a5fa", "#3b82f6", "#2563eb", "#1d4ed8"]),
    ("red", ["#f87171", "#ef4444", "#dc2626", "#b91c1c"]),
    ("green", ["#4ade80", "#22c55e", "#16a34a", "#15803d"]),
    ("purple", ["#c084fc", "#a855f7", "#9333ea", "#7e22ce"]),
    ("yellow", ["#facc15", "#eab308", "#ca8a04", "#a16207"]),
    ("pink", ["#f472b6", "#ec4899", "#db2777", "#be185d"]),
    ("indigo", ["#818cf8", "#6366f1", "#4f46e5", "#4338ca"]),
    ("teal", ["#2dd4bf", "#14b8a6", "#0d9488", "#0f766e"]),
    ("orange", ["#fb923c", "#f97316", "#ea580c", "#c2410c"]),
    ("violet", ["#a78bfa", "#8b5cf6", "#7c3aed", "#6d28d9"]),
    ("emerald", ["#34d399", "#10b981", "#059669", "#047857"]),
    ("cyan", ["#22d3ee", "#06b6d4", "#0891b2", "#0e7490"]),
    ("amber", ["#fbbf24", "#f59e0b", "#d97706", "#b45309"]),
    ("rose", ["#fb7185", "#f43f5e", "#e11d48", "#be123c"]),
    ("sky", ["#38bdf8", "#0ea5e9", "#0284c7", "#0369a1"]),
];

/// Look up the hex value of `family-shade`, or of `white`/`black`
pub fn hex(family: &str, shade: Option<&str>) -> Option<&'static str> {
    match (family, shade) {
        ("white", None) => return Some("#ffffff"),
        ("black", None) => return Some("#000000"),
        (_, None) => return None,
        _ => {}
    }
    let shade = shade?;

    if let Some((_, scale)) = NEUTRALS.iter().find(|(name, _)| *name == family) {
        let idx = NEUTRAL_SHADES.iter().position(|s| *s == shade)?;
        return Some(scale[idx]);
    }

    let (_, scale) = BRANDS.iter().find(|(name, _)| *name == family)?;
    let idx = BRAND_SHADES.iter().position(|s| *s == shade)?;
    Some(scale[idx])
}

/// Parse a color utility such as `bg-gray-900`, `text-white` or `from-blue-500`
/// into `(family, shade)` and resolve it to hex
pub fn utility_hex(utility: &str) -> Option<&'static str> {
    let (_, color) = utility.split_once('-')?;
    let color = color.split('/').next()?;
    match color.rsplit_once('-') {
        Some((family, shade)) if shade.chars().all(|c| c.is_ascii_digit()) => {
            hex(family, Some(shade))
        }
        _ => hex(color, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_lookup() {
        assert_eq!(hex("gray", Some("900")), Some("#111827"));
        assert_eq!(hex("violet", Some("500")), Some("#8b5cf6"));
        assert_eq!(hex("white", None), Some("#ffffff"));
        assert_eq!(hex("violet", Some("50")), None);
        assert_eq!(hex("mauve", Some("500")), None);
    }

    #[test]
    fn test_utility_hex() {
        assert_eq!(utility_hex("bg-slate-800"), Some("#1e293b"));
        assert_eq!(utility_hex("text-white"), Some("#ffffff"));
        assert_eq!(utility_hex("bg-blue-600/50"), Some("#2563eb"));
        assert_eq!(utility_hex("text-lg"), None);
        assert_eq!(utility_hex("shadow-black/30"), Some("#000000"));
    }
}
