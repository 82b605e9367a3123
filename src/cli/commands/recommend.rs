//! Recommend Command
//!
//! Scan a project, profile its brand colors and design archetype, and rank
//! the theme catalog.

use std::path::PathBuf;

use crate::analyzer::{BrandColorProfile, ProjectScanner};
use crate::cli::ui::Output;
use crate::cli::util::{CommandContext, OutputFormat};
use crate::themes::recommender::recommend_theme_with;
use crate::themes::{SmartRecommendation, ThemeRecommendation};
use crate::types::Result;

pub fn run(path: Option<PathBuf>, format: OutputFormat) -> Result<()> {
    let ctx = CommandContext::load(path)?;
    let scan = ProjectScanner::scan(&ctx.project_root, &ctx.config.scan)?;
    let recommendation = recommend_theme_with(&scan, &ctx.config.brand)?;

    if format.is_json() {
        println!("{}", serde_json::to_string_pretty(&recommendation)?);
    } else {
        print_recommendation(&recommendation);
    }
    Ok(())
}

fn print_recommendation(rec: &SmartRecommendation) {
    let out = Output::new();

    out.header("Theme Recommendation");
    out.success(&format!(
        "{} ({}) · score {:.2} · confidence {:.0}%",
        rec.recommended.name,
        rec.recommended.theme_id,
        rec.recommended.score,
        rec.confidence * 100.0
    ));
    for reason in &rec.recommended.reasoning {
        out.item(reason);
    }

    out.section("Brand");
    print_brand(&out, &rec.brand_profile);

    out.section("Design");
    out.field(
        "Archetype",
        format!(
            "{} ({:.0}% confidence)",
            rec.archetype.archetype,
            rec.archetype.confidence * 100.0
        ),
    );
    out.field("Colors", format!("{:.2}", rec.features.color_complexity));
    out.field("Spacing", format!("{:.2}", rec.features.spacing_patterns));
    out.field("Typography", format!("{:.2}", rec.features.typography_variance));
    out.field("Components", format!("{:.2}", rec.features.component_complexity));

    if !rec.alternatives.is_empty() {
        out.section("Alternatives");
        for alt in &rec.alternatives {
            out.item(&alternative_line(alt));
        }
    }

    println!();
    out.info(&format!(
        "Apply with: nightshift apply --theme {}",
        rec.recommended.theme_id
    ));
}

fn print_brand(out: &Output, profile: &BrandColorProfile) {
    let Some(primary) = &profile.primary else {
        out.info("No brand colors detected");
        return;
    };

    out.field("Primary", Output::swatch(&primary.value));
    if let Some(secondary) = &profile.secondary {
        out.field("Secondary", Output::swatch(&secondary.value));
    }
    if let Some(accent) = &profile.accent {
        out.field("Accent", Output::swatch(&accent.value));
    }
    out.field("Temperature", profile.temperature);
    out.field("Confidence", format!("{:.0}%", profile.confidence * 100.0));
}

fn alternative_line(alt: &ThemeRecommendation) -> String {
    format!(
        "{} ({}) · {:.2} · brand {:.2} · archetype {:.2} · a11y {:.2}",
        alt.name,
        alt.theme_id,
        alt.score,
        alt.brand_match,
        alt.archetype_match,
        alt.accessibility_score
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::Archetype;
    use crate::themes::{preset, recommend};

    #[test]
    fn test_alternative_line_lists_components() {
        let ranked = recommend(
            &BrandColorProfile::empty(),
            Archetype::Developer,
            preset::catalog(),
        );
        let line = alternative_line(&ranked[0]);
        assert!(line.starts_with("Terminal (terminal)"), "{}", line);
        assert!(line.contains("a11y 1.00"));
    }
}
