//! Utility token anatomy
//!
//! Splits a class token into its variant chain (`hover:`, `md:`, `dark:`) and
//! the utility itself, and derives the slot used to pair a base token with its
//! alternate-mode counterpart.

use crate::constants::DARK_PREFIX;

/// Variant that selects the alternate (dark) mode
const DARK_VARIANT: &str = "dark";

/// Split `md:hover:bg-gray-50` into (`["md", "hover"]`, `bg-gray-50`).
/// Colons inside arbitrary values (`bg-[url(a:b)]`) are not separators.
pub fn split_variants(token: &str) -> (Vec<&str>, &str) {
    let mut variants = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;

    for (idx, ch) in token.char_indices() {
        match ch {
            '[' | '(' => depth += 1,
            ']' | ')' => depth -= 1,
            ':' if depth == 0 => {
                variants.push(&token[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }

    (variants, &token[start..])
}

/// Whether the token is already an alternate-mode token
pub fn is_dark(token: &str) -> bool {
    token.starts_with(DARK_PREFIX) || split_variants(token).0.contains(&DARK_VARIANT)
}

/// Utility property: `bg` for `bg-gray-50`, `text` for `!text-sm`
pub fn property(utility: &str) -> &str {
    let utility = utility.trim_start_matches('!').trim_start_matches('-');
    utility.split('-').next().unwrap_or(utility)
}

/// Pairing slot of a token: its non-dark variants plus the utility property.
/// `hover:bg-gray-50` and `dark:hover:bg-gray-800` share a slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub variants: Vec<String>,
    pub property: String,
}

pub fn slot(token: &str) -> Slot {
    let (variants, utility) = split_variants(token);
    Slot {
        variants: variants
            .into_iter()
            .filter(|v| *v != DARK_VARIANT)
            .map(String::from)
            .collect(),
        property: property(utility).to_string(),
    }
}

/// Whether `candidate` is the alternate-mode counterpart of `base`
pub fn is_counterpart(base: &str, candidate: &str) -> bool {
    !is_dark(base) && is_dark(candidate) && slot(base) == slot(candidate)
}

/// Prefix a token with the dark variant
pub fn to_dark(token: &str) -> String {
    format!("{}{}", DARK_PREFIX, token)
}
