//! WCAG contrast rules

use super::{Mode, RuleOutcome, pair};
use crate::constants::contrast::{AA_TEXT, AA_UI};
use crate::themes::{PaletteSlot, ThemePreset};
use crate::types::contrast;

/// Foreground on background must reach AA for normal text
pub fn text(preset: &ThemePreset, mode: Mode) -> RuleOutcome {
    let Some((fg, bg)) = pair(preset, mode, PaletteSlot::Foreground, PaletteSlot::Background)
    else {
        return RuleOutcome::unparseable(mode);
    };
    let ratio = contrast(fg, bg);

    if ratio >= AA_TEXT {
        RuleOutcome::pass(format!("{} text contrast {:.2}:1", mode, ratio))
    } else {
        RuleOutcome::fail(
            format!(
                "{} text contrast {:.2}:1 is below {}:1 ({} on {})",
                mode, ratio, AA_TEXT, fg, bg
            ),
            match mode {
                Mode::Light => "Darken the foreground or lighten the background",
                Mode::Dark => "Lighten the foreground or darken the background",
            },
        )
    }
}

/// Primary fills against the page background carry button labels
pub fn button(preset: &ThemePreset, mode: Mode) -> RuleOutcome {
    let Some((primary, bg)) = pair(preset, mode, PaletteSlot::Primary, PaletteSlot::Background)
    else {
        return RuleOutcome::unparseable(mode);
    };
    let ratio = contrast(primary, bg);

    if ratio >= AA_UI {
        RuleOutcome::pass(format!("{} button contrast {:.2}:1", mode, ratio))
    } else {
        RuleOutcome::fail(
            format!(
                "{} button contrast {:.2}:1 is below {}:1 ({} on {})",
                mode, ratio, AA_UI, primary, bg
            ),
            "Pick a primary with more luminance difference from the background",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::preset;

    #[test]
    fn test_catalog_text_contrast() {
        for p in preset::catalog() {
            assert!(text(p, Mode::Light).passed, "{}", p.id);
            assert!(text(p, Mode::Dark).passed, "{}", p.id);
            assert!(button(p, Mode::Light).passed, "{}", p.id);
        }
    }

    #[test]
    fn test_failure_reports_ratio() {
        let mut weak = preset::find("professional").unwrap().clone();
        weak.colors.light.foreground = "#949494";
        let outcome = text(&weak, Mode::Light);
        assert!(!outcome.passed);
        assert!(outcome.message.contains("3.03:1"), "{}", outcome.message);
        assert!(outcome.suggestion.is_some());
    }
}
