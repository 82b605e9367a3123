//! Themes Command
//!
//! List the built-in presets with their palettes and quality grades.

use serde::Serialize;

use crate::cli::ui::Output;
use crate::cli::util::OutputFormat;
use crate::themes::{PaletteSlot, ThemeColors, ThemePreset, preset};
use crate::types::{Grade, Result};
use crate::validator::validate;

#[derive(Debug, Serialize)]
struct ThemeListing<'a> {
    #[serde(flatten)]
    preset: &'a ThemePreset,
    score: u8,
    grade: Grade,
}

const SHOWN_SLOTS: [PaletteSlot; 4] = [
    PaletteSlot::Background,
    PaletteSlot::Foreground,
    PaletteSlot::Primary,
    PaletteSlot::Accent,
];

pub fn run(format: OutputFormat) -> Result<()> {
    let listings: Vec<ThemeListing> = preset::catalog()
        .iter()
        .map(|preset| {
            let result = validate(preset);
            ThemeListing {
                preset,
                score: result.score,
                grade: result.grade,
            }
        })
        .collect();

    if format.is_json() {
        println!("{}", serde_json::to_string_pretty(&listings)?);
        return Ok(());
    }

    let out = Output::new();
    out.header("Theme Presets");
    for listing in &listings {
        let preset = listing.preset;
        out.section(&format!(
            "{} ({})  {}",
            preset.name,
            preset.id,
            Output::grade(listing.grade)
        ));
        println!("  {}", preset.description);
        out.field("Light", palette_line(&preset.colors.light));
        out.field("Dark", palette_line(&preset.colors.dark));
    }
    println!();
    out.info("Use one with: nightshift apply --theme <id>");
    Ok(())
}

fn palette_line(colors: &ThemeColors) -> String {
    SHOWN_SLOTS
        .iter()
        .map(|slot| Output::swatch(colors.get(*slot)))
        .collect::<Vec<_>>()
        .join("  ")
}
