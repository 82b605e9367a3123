//! Theme recommendation
//!
//! Ranks catalog presets by
//! `0.4 × brand match + 0.35 × archetype match + 0.25 × accessibility`.
//! Scoring is pure; only [`recommend_theme`] touches a scan.

use serde::Serialize;

use super::preset::{self, PaletteSlot, ThemeColors, ThemePreset};
use crate::analyzer::archetype::{Archetype, ArchetypeClassification, classify};
use crate::analyzer::brand::{BrandColorProfile, BrandExtractor, Temperature};
use crate::analyzer::features::DesignFeatureVector;
use crate::config::BrandConfig;
use crate::constants::{contrast as wcag, recommend as weights};
use crate::types::color::contrast;
use crate::types::{NightshiftError, Result, ScanResult};

/// Primary-hue ranges (degrees, inclusive) where a preset fits the brand best
struct BrandAffinity {
    theme_id: &'static str,
    sweet_spots: &'static [(f64, f64)],
    temperature: Temperature,
}

const BRAND_AFFINITY: &[BrandAffinity] = &[
    BrandAffinity {
        theme_id: "professional",
        sweet_spots: &[(190.0, 250.0)],
        temperature: Temperature::Cool,
    },
    BrandAffinity {
        theme_id: "aurora",
        sweet_spots: &[(250.0, 300.0)],
        temperature: Temperature::Neutral,
    },
    BrandAffinity {
        theme_id: "terminal",
        sweet_spots: &[(120.0, 190.0)],
        temperature: Temperature::Cool,
    },
    BrandAffinity {
        theme_id: "sunset",
        sweet_spots: &[(0.0, 50.0), (300.0, 360.0)],
        temperature: Temperature::Warm,
    },
];

const IN_SWEET_SPOT: f64 = 0.95;
const SAME_TEMPERATURE: f64 = 0.75;
const OUTSIDE_SWEET_SPOT: f64 = 0.6;

/// Preset × archetype compatibility, columns in [`Archetype::ALL`] order
const ARCHETYPE_MATRIX: &[(&str, [f64; 4])] = &[
    ("professional", [0.95, 0.75, 0.6, 0.4]),
    ("aurora", [0.5, 0.9, 0.65, 0.85]),
    ("terminal", [0.45, 0.6, 0.95, 0.55]),
    ("sunset", [0.4, 0.7, 0.45, 0.95]),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeRecommendation {
    pub theme_id: String,
    pub name: String,
    pub score: f64,
    pub brand_match: f64,
    pub archetype_match: f64,
    pub accessibility_score: f64,
    pub reasoning: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SmartRecommendation {
    pub recommended: ThemeRecommendation,
    pub alternatives: Vec<ThemeRecommendation>,
    pub brand_profile: BrandColorProfile,
    pub features: DesignFeatureVector,
    pub archetype: ArchetypeClassification,
    /// Mean of archetype and brand confidence
    pub confidence: f64,
}

// =============================================================================
// Scoring
// =============================================================================

pub fn brand_match(profile: &BrandColorProfile, preset: &ThemePreset) -> f64 {
    let Some(hue) = profile.primary_hue() else {
        return weights::NO_PRIMARY_BRAND_MATCH;
    };
    let Some(affinity) = BRAND_AFFINITY.iter().find(|a| a.theme_id == preset.id) else {
        return OUTSIDE_SWEET_SPOT;
    };

    if affinity
        .sweet_spots
        .iter()
        .any(|(low, high)| (*low..=*high).contains(&hue))
    {
        IN_SWEET_SPOT
    } else if affinity.temperature == profile.temperature {
        SAME_TEMPERATURE
    } else {
        OUTSIDE_SWEET_SPOT
    }
}

pub fn archetype_match(preset: &ThemePreset, archetype: Archetype) -> f64 {
    let column = Archetype::ALL.iter().position(|a| *a == archetype);
    ARCHETYPE_MATRIX
        .iter()
        .find(|(id, _)| *id == preset.id)
        .zip(column)
        .map(|((_, row), col)| row[col])
        .unwrap_or(weights::UNKNOWN_ARCHETYPE_MATCH)
}

/// Mean of light and dark text contrast, each scaled by AA and capped at 1
pub fn accessibility_score(preset: &ThemePreset) -> f64 {
    let text = |colors: &ThemeColors| -> f64 {
        match (
            colors.rgb(PaletteSlot::Foreground),
            colors.rgb(PaletteSlot::Background),
        ) {
            (Some(fg), Some(bg)) => (contrast(fg, bg) / wcag::AA_TEXT).min(1.0),
            _ => 0.0,
        }
    };
    (text(&preset.colors.light) + text(&preset.colors.dark)) / 2.0
}

/// Score every preset, best first; equal scores keep catalog order
pub fn recommend(
    profile: &BrandColorProfile,
    archetype: Archetype,
    catalog: &[ThemePreset],
) -> Vec<ThemeRecommendation> {
    let mut ranked: Vec<ThemeRecommendation> = catalog
        .iter()
        .map(|preset| {
            let brand = brand_match(profile, preset);
            let fit = archetype_match(preset, archetype);
            let accessibility = accessibility_score(preset);
            let score = weights::BRAND_WEIGHT * brand
                + weights::ARCHETYPE_WEIGHT * fit
                + weights::ACCESSIBILITY_WEIGHT * accessibility;

            ThemeRecommendation {
                theme_id: preset.id.to_string(),
                name: preset.name.to_string(),
                score,
                brand_match: brand,
                archetype_match: fit,
                accessibility_score: accessibility,
                reasoning: reasoning(profile, archetype, brand, fit, accessibility),
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}

fn reasoning(
    profile: &BrandColorProfile,
    archetype: Archetype,
    brand: f64,
    fit: f64,
    accessibility: f64,
) -> Vec<String> {
    let mut reasons = Vec::new();

    match &profile.primary {
        None => reasons.push("No brand color detected; brand fit is neutral".to_string()),
        Some(primary) if brand >= IN_SWEET_SPOT => reasons.push(format!(
            "Brand primary {} sits in this theme's hue range",
            primary.value
        )),
        Some(primary) if brand >= SAME_TEMPERATURE => reasons.push(format!(
            "Brand primary {} shares this theme's {} temperature",
            primary.value, profile.temperature
        )),
        Some(primary) => reasons.push(format!(
            "Brand primary {} falls outside this theme's hue range",
            primary.value
        )),
    }

    if fit >= 0.85 {
        reasons.push(format!("Strong fit for a {} project", archetype));
    } else if fit <= 0.5 {
        reasons.push(format!("Weak fit for a {} project", archetype));
    }

    if accessibility >= 1.0 {
        reasons.push("Text meets WCAG AA in both modes".to_string());
    } else {
        reasons.push(format!(
            "Text contrast reaches {:.0}% of WCAG AA",
            accessibility * 100.0
        ));
    }

    reasons
}

// =============================================================================
// Project Recommendation
// =============================================================================

pub fn recommend_theme(scan: &ScanResult) -> Result<SmartRecommendation> {
    recommend_theme_with(scan, &BrandConfig::default())
}

pub fn recommend_theme_with(scan: &ScanResult, brand: &BrandConfig) -> Result<SmartRecommendation> {
    let brand_profile = BrandExtractor::new(brand.clone()).extract(&scan.texts());
    let features = DesignFeatureVector::from_scan(scan);
    let archetype = classify(&features);

    let mut ranked =
        recommend(&brand_profile, archetype.archetype, preset::catalog()).into_iter();
    let recommended = ranked
        .next()
        .ok_or_else(|| NightshiftError::Config("Theme catalog is empty".to_string()))?;
    let alternatives: Vec<_> = ranked.take(weights::ALTERNATIVES).collect();

    let confidence = ((archetype.confidence + brand_profile.confidence) / 2.0).clamp(0.0, 1.0);

    tracing::info!(
        theme = %recommended.theme_id,
        score = recommended.score,
        archetype = %archetype.archetype,
        confidence,
        "Recommended theme"
    );

    Ok(SmartRecommendation {
        recommended,
        alternatives,
        brand_profile,
        features,
        archetype,
        confidence,
    })
}
