//! Mapping table audit
//!
//! Checks each entry's dark half against the contrast its category targets.
//! Text and interactive text are measured against the family's 900 shade
//! (the dark surface they land on), backgrounds against the family's 100
//! shade (the text drawn on them). Decorative categories are skipped.

use crate::tokens::mapping::{self, MappingEntry, TokenCategory};
use crate::tokens::palette::{self, utility_hex};
use crate::tokens::utility::split_variants;
use crate::types::{IssueCategory, Rgb, ValidationIssue, contrast};

const FALLBACK_FAMILY: &str = "gray";

pub fn audit_mapping() -> Vec<ValidationIssue> {
    mapping::entries().filter_map(audit_entry).collect()
}

/// Issue for an entry whose dark half misses its target contrast
pub fn audit_entry(entry: &MappingEntry) -> Option<ValidationIssue> {
    if entry.target_contrast <= 1.0 {
        return None;
    }

    let utility = split_variants(&entry.dark).1;
    let dark = utility_hex(utility).and_then(Rgb::parse_hex)?;
    let reference_shade = match reference_for(entry.category, utility) {
        Reference::DarkSurface => "900",
        Reference::LightText => "100",
    };
    let family = family_of(utility).unwrap_or(FALLBACK_FAMILY);
    let reference = palette::hex(family, Some(reference_shade))
        .or_else(|| palette::hex(FALLBACK_FAMILY, Some(reference_shade)))
        .and_then(Rgb::parse_hex)?;

    let ratio = contrast(dark, reference);
    if ratio >= entry.target_contrast {
        return None;
    }

    Some(
        ValidationIssue::new(
            format!("mapping:{}", entry.token),
            IssueCategory::Contrast,
            format!(
                "{} maps to {} at {:.2}:1 against {}-{}, below {}:1",
                entry.token, entry.dark, ratio, family, reference_shade, entry.target_contrast
            ),
        )
        .with_suggestion("Move the dark shade further from the reference shade"),
    )
}

/// What the dark color is measured against
enum Reference {
    /// Foregrounds land on the family's darkest surface
    DarkSurface,
    /// Fills carry the family's lightest text
    LightText,
}

fn reference_for(category: TokenCategory, utility: &str) -> Reference {
    match category {
        TokenCategory::Background => Reference::LightText,
        TokenCategory::Interactive if utility.starts_with("bg-") => Reference::LightText,
        _ => Reference::DarkSurface,
    }
}

/// `bg-zinc-800` → `zinc`; `None` for `white`/`black` and other shadeless colors
fn family_of(utility: &str) -> Option<&str> {
    let (_, color) = utility.split_once('-')?;
    let (family, shade) = color.rsplit_once('-')?;
    shade.chars().all(|c| c.is_ascii_digit()).then_some(family)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(token: &str, dark: &str, category: TokenCategory) -> MappingEntry {
        MappingEntry {
            token: token.to_string(),
            dark: dark.to_string(),
            dual: format!("{} {}", token, dark),
            category,
            target_contrast: category.target_contrast(),
        }
    }

    #[test]
    fn test_builtin_table_meets_targets() {
        assert!(audit_mapping().is_empty(), "{:?}", audit_mapping());
    }

    #[test]
    fn test_flags_low_contrast_text() {
        let issue = audit_entry(&entry(
            "text-slate-500",
            "dark:text-slate-700",
            TokenCategory::Text,
        ))
        .unwrap();
        assert_eq!(issue.category, IssueCategory::Contrast);
        assert!(issue.message.contains("against slate-900"), "{}", issue.message);
    }

    #[test]
    fn test_background_measured_against_light_text() {
        let weak = entry("bg-gray-100", "dark:bg-gray-300", TokenCategory::Background);
        assert!(audit_entry(&weak).is_some());
        let strong = entry("bg-gray-100", "dark:bg-gray-800", TokenCategory::Background);
        assert!(audit_entry(&strong).is_none());
    }

    #[test]
    fn test_decorative_entries_are_skipped() {
        let border = entry("border-gray-200", "dark:border-gray-900", TokenCategory::Border);
        assert!(audit_entry(&border).is_none());
    }

    #[test]
    fn test_family_of() {
        assert_eq!(family_of("bg-zinc-800"), Some("zinc"));
        assert_eq!(family_of("text-white"), None);
    }
}
