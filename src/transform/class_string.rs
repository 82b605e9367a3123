//! Class-String Transformer
//!
//! Rewrites one class-attribute value so every mappable token gains its
//! alternate-mode (`dark:`) counterpart. Token order is preserved and
//! tokens are re-joined with single spaces.
//!
//! ## Modes
//!
//! - **Generic** (no theme): each token goes through the mapping table. A
//!   base token whose slot already has a `dark:` token anywhere in the string
//!   is left alone, so running the transform twice changes nothing.
//! - **Themed** (theme given, no `dark:` tokens yet): override, then mapping
//!   table, then pass-through.
//! - **Re-theming** (theme given, `dark:` tokens present): adjacent
//!   base + counterpart pairs are consumed together and replaced by the
//!   preset's override. Pairs separated by other tokens are not consolidated.

use serde::Serialize;

use crate::themes::preset;
use crate::tokens::mapping;
use crate::tokens::overrides;
use crate::tokens::utility::{Slot, is_counterpart, is_dark, slot};

/// Output of one class-string rewrite
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClassTransform {
    pub output: String,
    /// Source tokens whose emitted form differs from the input
    pub transformed: Vec<String>,
}

impl ClassTransform {
    pub fn changes(&self) -> usize {
        self.transformed.len()
    }

    pub fn is_changed(&self) -> bool {
        !self.transformed.is_empty()
    }
}

/// Class-string transformer bound to an optional theme preset
#[derive(Debug, Clone, Default)]
pub struct ClassTransformer {
    theme: Option<&'static str>,
}

impl ClassTransformer {
    /// Unknown theme ids fall back to the generic mapping
    pub fn new(theme_id: Option<&str>) -> Self {
        let theme = theme_id.and_then(|id| match preset::find(id) {
            Some(preset) => Some(preset.id),
            None => {
                tracing::warn!(theme = id, "Unknown theme, using generic mapping");
                None
            }
        });
        Self { theme }
    }

    pub fn generic() -> Self {
        Self { theme: None }
    }

    /// Resolved preset id, `None` in generic mode
    pub fn theme(&self) -> Option<&'static str> {
        self.theme
    }

    pub fn transform(&self, class_string: &str) -> String {
        self.transform_detailed(class_string).output
    }

    pub fn transform_detailed(&self, class_string: &str) -> ClassTransform {
        let tokens: Vec<&str> = class_string.split_whitespace().collect();
        let mut emitter = Emitter::with_capacity(tokens.len());

        match self.theme {
            None => map_generic(&tokens, &mut emitter),
            Some(theme) if !tokens.iter().any(|t| is_dark(t)) => {
                map_themed(&tokens, theme, &mut emitter)
            }
            Some(theme) => retheme(&tokens, theme, &mut emitter),
        }

        emitter.finish()
    }
}

/// Transform a class string, optionally toward a theme preset
pub fn transform(class_string: &str, theme_id: Option<&str>) -> String {
    ClassTransformer::new(theme_id).transform(class_string)
}

fn map_generic(tokens: &[&str], out: &mut Emitter) {
    let dark_slots: Vec<Slot> = tokens.iter().filter(|t| is_dark(t)).map(|t| slot(t)).collect();

    for &token in tokens {
        if is_dark(token) || dark_slots.contains(&slot(token)) {
            out.keep(token);
            continue;
        }
        match mapping::lookup(token) {
            Some(dual) => out.replace(token, dual),
            None => out.keep(token),
        }
    }
}

fn map_themed(tokens: &[&str], theme: &str, out: &mut Emitter) {
    for &token in tokens {
        match themed_replacement(token, theme) {
            Some(replacement) => out.replace(token, replacement),
            None => out.keep(token),
        }
    }
}

fn retheme(tokens: &[&str], theme: &str, out: &mut Emitter) {
    let mut idx = 0;
    while idx < tokens.len() {
        let token = tokens[idx];

        if is_dark(token) {
            out.keep(token);
            idx += 1;
            continue;
        }

        let paired = tokens
            .get(idx + 1)
            .copied()
            .filter(|next| is_counterpart(token, next));

        match paired {
            Some(dark) => {
                match overrides::resolve(token, theme) {
                    Some(replacement) => out.replace_pair(token, dark, replacement),
                    None => {
                        out.keep(token);
                        out.keep(dark);
                    }
                }
                idx += 2;
            }
            None => {
                match themed_replacement(token, theme) {
                    Some(replacement) => out.replace(token, replacement),
                    None => out.keep(token),
                }
                idx += 1;
            }
        }
    }
}

fn themed_replacement(token: &str, theme: &str) -> Option<&'static str> {
    overrides::resolve(token, theme).or_else(|| mapping::lookup(token))
}

/// Accumulates output pieces and the tokens that actually changed
struct Emitter {
    parts: Vec<String>,
    transformed: Vec<String>,
}

impl Emitter {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            parts: Vec::with_capacity(capacity),
            transformed: Vec::new(),
        }
    }

    fn keep(&mut self, token: &str) {
        self.parts.push(token.to_string());
    }

    fn replace(&mut self, token: &str, replacement: &str) {
        if replacement != token {
            self.transformed.push(token.to_string());
        }
        self.parts.push(replacement.to_string());
    }

    fn replace_pair(&mut self, base: &str, dark: &str, replacement: &str) {
        let unchanged = replacement
            .split_once(' ')
            .is_some_and(|(b, d)| b == base && d == dark);
        if !unchanged {
            self.transformed.push(base.to_string());
        }
        self.parts.push(replacement.to_string());
    }

    fn finish(self) -> ClassTransform {
        ClassTransform {
            output: self.parts.join(" "),
            transformed: self.transformed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_maps_in_order() {
        assert_eq!(
            transform("bg-white text-gray-900", None),
            "bg-white dark:bg-gray-900 text-gray-900 dark:text-gray-100"
        );
    }

    #[test]
    fn test_already_annotated_is_unchanged() {
        let detail = ClassTransformer::generic().transform_detailed("bg-white dark:bg-gray-900");
        assert_eq!(detail.output, "bg-white dark:bg-gray-900");
        assert_eq!(detail.changes(), 0);
    }

    #[test]
    fn test_generic_is_idempotent() {
        let once = transform("flex bg-gray-50 p-4 text-slate-700 border-zinc-200", None);
        assert_eq!(transform(&once, None), once);
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(transform("", None), "");
        assert_eq!(transform("   ", Some("aurora")), "");
        assert_eq!(transform("  p-4\n\tbg-white ", None), "p-4 bg-white dark:bg-gray-900");
    }

    #[test]
    fn test_unknown_tokens_pass_through() {
        let detail = ClassTransformer::generic().transform_detailed("p-4 flex md:bg-white");
        assert_eq!(detail.output, "p-4 flex md:bg-white");
        assert!(!detail.is_changed());
    }

    #[test]
    fn test_duplicates_preserved() {
        assert_eq!(
            transform("bg-white bg-white", None),
            "bg-white dark:bg-gray-900 bg-white dark:bg-gray-900"
        );
    }

    #[test]
    fn test_themed_prefers_override_then_mapping() {
        let detail = ClassTransformer::new(Some("professional"))
            .transform_detailed("bg-white text-gray-700 p-4");
        assert_eq!(
            detail.output,
            "bg-white dark:bg-[#0b1120] text-gray-700 dark:text-gray-300 p-4"
        );
        assert_eq!(detail.transformed, vec!["bg-white", "text-gray-700"]);
    }

    #[test]
    fn test_retheme_consumes_adjacent_pair() {
        let themed = transform("bg-white text-gray-900", Some("professional"));
        let rethemed = transform(&themed, Some("terminal"));
        assert_eq!(
            rethemed,
            "bg-white dark:bg-[#09090b] text-gray-900 dark:text-[#e4e4e7]"
        );
    }

    #[test]
    fn test_retheme_same_theme_is_stable() {
        let themed = transform("bg-white text-gray-900 border-gray-200", Some("aurora"));
        let detail = ClassTransformer::new(Some("aurora")).transform_detailed(&themed);
        assert_eq!(detail.output, themed);
        assert_eq!(detail.changes(), 0);
    }

    #[test]
    fn test_retheme_lone_base_gets_override() {
        assert_eq!(
            transform("dark:text-white bg-white", Some("professional")),
            "dark:text-white bg-white dark:bg-[#0b1120]"
        );
    }

    #[test]
    fn test_retheme_keeps_pair_without_override() {
        assert_eq!(
            transform("text-gray-700 dark:text-gray-200 bg-white", Some("terminal")),
            "text-gray-700 dark:text-gray-200 bg-white dark:bg-[#09090b]"
        );
    }

    #[test]
    fn test_non_adjacent_pair_is_not_consolidated() {
        assert_eq!(
            transform("bg-white p-4 dark:bg-gray-800", Some("professional")),
            "bg-white dark:bg-[#0b1120] p-4 dark:bg-gray-800"
        );
    }

    #[test]
    fn test_unknown_theme_falls_back_to_generic() {
        let transformer = ClassTransformer::new(Some("neon"));
        assert_eq!(transformer.theme(), None);
        assert_eq!(
            transformer.transform("bg-white dark:bg-gray-900 text-black"),
            "bg-white dark:bg-gray-900 text-black dark:text-white"
        );
    }

    #[test]
    fn test_variant_slots_pair_independently() {
        assert_eq!(
            transform("hover:bg-gray-50 dark:bg-gray-900", None),
            "hover:bg-gray-50 dark:hover:bg-gray-800 dark:bg-gray-900"
        );
    }
}
