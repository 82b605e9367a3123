//! Palette distinctness, polarity and harmony rules

use super::{Mode, RuleOutcome, pair};
use crate::constants::validation::MIN_DISTINCT_DISTANCE;
use crate::themes::{PaletteSlot, ThemePreset};

/// Hue distances (degrees) read as harmonious: analogous, triadic,
/// complementary and split-complementary
const HARMONIOUS_HUE_DISTANCES: &[(f64, f64)] = &[(0.0, 75.0), (100.0, 140.0), (150.0, 180.0)];

pub fn primary_accent_distinct(preset: &ThemePreset, mode: Mode) -> RuleOutcome {
    let Some((primary, accent)) = pair(preset, mode, PaletteSlot::Primary, PaletteSlot::Accent)
    else {
        return RuleOutcome::unparseable(mode);
    };
    let distance = primary.distance(&accent);

    if distance >= MIN_DISTINCT_DISTANCE {
        RuleOutcome::pass(format!("{} primary and accent differ ({:.0})", mode, distance))
    } else {
        RuleOutcome::fail(
            format!(
                "{} primary {} and accent {} are nearly identical (distance {:.0})",
                mode, primary, accent, distance
            ),
            "Give the accent its own hue so highlights stand apart from actions",
        )
    }
}

pub fn border_foreground_distinct(preset: &ThemePreset, mode: Mode) -> RuleOutcome {
    let Some((border, fg)) = pair(preset, mode, PaletteSlot::Border, PaletteSlot::Foreground)
    else {
        return RuleOutcome::unparseable(mode);
    };
    let distance = border.distance(&fg);

    if distance >= MIN_DISTINCT_DISTANCE {
        RuleOutcome::pass(format!("{} border and foreground differ ({:.0})", mode, distance))
    } else {
        RuleOutcome::fail(
            format!(
                "{} border {} is indistinguishable from the foreground {}",
                mode, border, fg
            ),
            "Use a border closer to the background than to the text color",
        )
    }
}

/// The dark background must be darker than the light one
pub fn polarity(preset: &ThemePreset) -> RuleOutcome {
    let light = preset.colors.light.rgb(PaletteSlot::Background);
    let dark = preset.colors.dark.rgb(PaletteSlot::Background);
    let (Some(light), Some(dark)) = (light, dark) else {
        return RuleOutcome::unparseable(if light.is_none() { Mode::Light } else { Mode::Dark });
    };

    if dark.relative_luminance() < light.relative_luminance() {
        RuleOutcome::pass("Dark background is darker than the light background")
    } else {
        RuleOutcome::fail(
            format!("Dark background {} is not darker than light background {}", dark, light),
            "Swap or darken the dark-mode background",
        )
    }
}

pub fn accent_harmony(preset: &ThemePreset) -> RuleOutcome {
    let Some((primary, accent)) =
        pair(preset, Mode::Light, PaletteSlot::Primary, PaletteSlot::Accent)
    else {
        return RuleOutcome::unparseable(Mode::Light);
    };
    let distance = hue_distance(primary.to_hsl().h, accent.to_hsl().h);

    if HARMONIOUS_HUE_DISTANCES
        .iter()
        .any(|(low, high)| (*low..=*high).contains(&distance))
    {
        RuleOutcome::pass(format!("Accent sits {:.0}° from primary", distance))
    } else {
        RuleOutcome::fail(
            format!("Accent sits {:.0}° from primary, between harmonic intervals", distance),
            "Move the accent hue closer to the primary or toward a triadic or complementary position",
        )
    }
}

/// Shortest distance around the hue circle, in [0, 180]
pub fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::preset;

    #[test]
    fn test_hue_distance_wraps() {
        assert_eq!(hue_distance(350.0, 10.0), 20.0);
        assert_eq!(hue_distance(0.0, 180.0), 180.0);
        assert_eq!(hue_distance(90.0, 90.0), 0.0);
    }

    #[test]
    fn test_identical_primary_and_accent() {
        let mut same = preset::find("terminal").unwrap().clone();
        same.colors.dark.accent = same.colors.dark.primary;
        assert!(!primary_accent_distinct(&same, Mode::Dark).passed);
        assert!(primary_accent_distinct(&same, Mode::Light).passed);
    }

    #[test]
    fn test_inverted_polarity() {
        let mut inverted = preset::find("aurora").unwrap().clone();
        std::mem::swap(
            &mut inverted.colors.light.background,
            &mut inverted.colors.dark.background,
        );
        assert!(!polarity(&inverted).passed);
    }

    #[test]
    fn test_harmony_gap() {
        let mut clash = preset::find("professional").unwrap().clone();
        // lime sits about 83° from red
        clash.colors.light.primary = "#ff0000";
        clash.colors.light.accent = "#a3e635";
        let outcome = accent_harmony(&clash);
        assert!(!outcome.passed, "{}", outcome.message);
    }
}
