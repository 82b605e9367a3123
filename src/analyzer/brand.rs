//! Brand color extraction
//!
//! Collects literal colors (`#hex`, `rgb()`, `hsl()`) and brand-family
//! utility tokens (`bg-violet-500`, `text-blue-600`, ...) from project text,
//! groups them by canonical hex and ranks the survivors of the usage,
//! saturation and lightness filters by `usage × saturation`.
//!
//! Temperature is the majority bucket over the classified colors. Ties go to
//! the first bucket in `Temperature::ORDER` (warm, cool, neutral).

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::config::BrandConfig;
use crate::constants::brand;
use crate::tokens::palette::{BRAND_FAMILIES, BRAND_SHADES, utility_hex};
use crate::types::color::Rgb;

/// Group 1 is the literal; `&#169;`-style entities and `id#abc` are not colors
static HEX_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^&\w])(#(?:[0-9a-fA-F]{6}|[0-9a-fA-F]{3}))\b").ok()
});

static FUNCTION_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:rgba?|hsla?)\([^()]*\)").ok());

static BRAND_TOKEN_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(&format!(
        r"\b(?:bg|text|border|ring|outline|divide|fill|stroke|from|via|to|accent|decoration|shadow)-(?:{})-(?:{})\b",
        BRAND_FAMILIES.join("|"),
        BRAND_SHADES.join("|"),
    ))
    .ok()
});

// =============================================================================
// Types
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Temperature {
    Warm,
    Cool,
    Neutral,
}

impl Temperature {
    /// Enumeration order, also the tie-break order for majority votes
    pub const ORDER: [Temperature; 3] = [Self::Warm, Self::Cool, Self::Neutral];

    /// Warm: [0, 60) or [300, 360). Cool: [120, 240]. Neutral otherwise.
    pub fn from_hue(hue: f64) -> Self {
        let hue = hue.rem_euclid(360.0);
        if hue < 60.0 || hue >= 300.0 {
            Self::Warm
        } else if (120.0..=240.0).contains(&hue) {
            Self::Cool
        } else {
            Self::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warm => "warm",
            Self::Cool => "cool",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One normalized color with its aggregated occurrences
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorSample {
    /// Canonical lowercase `#rrggbb`
    pub value: String,
    pub usage_count: u32,
    pub locations: BTreeSet<String>,
    pub hue: f64,
    pub saturation: f64,
    /// HSL lightness
    pub luminance: f64,
    pub temperature: Temperature,
}

impl ColorSample {
    fn new(rgb: Rgb) -> Self {
        let hsl = rgb.to_hsl();
        Self {
            value: rgb.to_hex(),
            usage_count: 0,
            locations: BTreeSet::new(),
            hue: hsl.h,
            saturation: hsl.s,
            luminance: hsl.l,
            temperature: Temperature::from_hue(hsl.h),
        }
    }

    /// Ranking key
    pub fn weight(&self) -> f64 {
        self.usage_count as f64 * self.saturation
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandColorProfile {
    pub primary: Option<ColorSample>,
    pub secondary: Option<ColorSample>,
    pub accent: Option<ColorSample>,
    /// Sorted by `usage × saturation`, descending
    pub palette: Vec<ColorSample>,
    pub temperature: Temperature,
    pub confidence: f64,
}

impl BrandColorProfile {
    /// Profile of a project with no qualifying colors
    pub fn empty() -> Self {
        Self {
            primary: None,
            secondary: None,
            accent: None,
            palette: Vec::new(),
            temperature: Temperature::Neutral,
            confidence: 0.0,
        }
    }

    pub fn primary_hue(&self) -> Option<f64> {
        self.primary.as_ref().map(|c| c.hue)
    }
}

// =============================================================================
// Extraction
// =============================================================================

pub struct BrandExtractor {
    config: BrandConfig,
}

impl Default for BrandExtractor {
    fn default() -> Self {
        Self::new(BrandConfig::default())
    }
}

impl BrandExtractor {
    pub fn new(config: BrandConfig) -> Self {
        Self { config }
    }

    /// Build a brand profile from `(path, content)` pairs
    pub fn extract<P, C>(&self, files: &[(P, C)]) -> BrandColorProfile
    where
        P: AsRef<str>,
        C: AsRef<str>,
    {
        let mut palette: Vec<ColorSample> = collect_samples(files)
            .into_iter()
            .filter(|s| self.qualifies(s))
            .collect();

        if palette.is_empty() {
            tracing::debug!("No brand color candidates found");
            return BrandColorProfile::empty();
        }

        // Stable: equal weights keep canonical hex order
        palette.sort_by(|a, b| b.weight().total_cmp(&a.weight()));
        palette.truncate(brand::MAX_PALETTE);

        let primary = palette.first().cloned();
        let secondary = palette.get(1).cloned();
        let accents: Vec<&ColorSample> = palette
            .iter()
            .skip(2)
            .filter(|s| s.saturation > brand::ACCENT_MIN_SATURATION)
            .collect();
        let accent = accents.first().map(|s| (*s).clone());

        let classified = primary
            .iter()
            .chain(secondary.iter())
            .chain(accents.iter().copied());
        let temperature = majority_temperature(classified);
        let confidence = primary.as_ref().map(confidence).unwrap_or(0.0);

        tracing::debug!(
            candidates = palette.len(),
            primary = ?primary.as_ref().map(|p| p.value.as_str()),
            %temperature,
            confidence,
            "Extracted brand profile"
        );

        BrandColorProfile {
            primary,
            secondary,
            accent,
            palette,
            temperature,
            confidence,
        }
    }

    /// Usage, saturation and (exclusive) lightness window
    pub fn qualifies(&self, sample: &ColorSample) -> bool {
        sample.usage_count >= self.config.min_usage
            && sample.saturation >= self.config.min_saturation
            && sample.luminance > self.config.min_luminance
            && sample.luminance < self.config.max_luminance
    }
}

/// Extract with default thresholds
pub fn extract<P: AsRef<str>, C: AsRef<str>>(files: &[(P, C)]) -> BrandColorProfile {
    BrandExtractor::default().extract(files)
}

/// Every color occurrence grouped by canonical hex, unfiltered
pub fn collect_samples<P, C>(files: &[(P, C)]) -> Vec<ColorSample>
where
    P: AsRef<str>,
    C: AsRef<str>,
{
    let mut samples: BTreeMap<String, ColorSample> = BTreeMap::new();

    for (path, content) in files {
        for rgb in colors_in(content.as_ref()) {
            let sample = samples
                .entry(rgb.to_hex())
                .or_insert_with(|| ColorSample::new(rgb));
            sample.usage_count += 1;
            sample.locations.insert(path.as_ref().to_string());
        }
    }

    samples.into_values().collect()
}

/// Colors occurring in `content`: literals first, then brand-family tokens.
/// Literals that fail to parse are skipped.
pub fn colors_in(content: &str) -> Vec<Rgb> {
    let mut colors = Vec::new();

    if let Some(re) = HEX_RE.as_ref() {
        colors.extend(
            re.captures_iter(content)
                .filter_map(|c| c.get(1))
                .filter_map(|m| Rgb::parse_hex(m.as_str())),
        );
    }
    if let Some(re) = FUNCTION_RE.as_ref() {
        colors.extend(
            re.find_iter(content)
                .filter_map(|m| Rgb::parse_literal(m.as_str())),
        );
    }
    if let Some(re) = BRAND_TOKEN_RE.as_ref() {
        colors.extend(
            re.find_iter(content)
                .filter_map(|m| utility_hex(m.as_str()))
                .filter_map(Rgb::parse_hex),
        );
    }

    colors
}

fn majority_temperature<'a>(samples: impl Iterator<Item = &'a ColorSample>) -> Temperature {
    let mut counts = [0usize; 3];
    for sample in samples {
        if let Some(idx) = Temperature::ORDER
            .iter()
            .position(|t| *t == sample.temperature)
        {
            counts[idx] += 1;
        }
    }

    let mut best = Temperature::Neutral;
    let mut best_count = 0;
    for (temperature, count) in Temperature::ORDER.iter().zip(counts) {
        if count > best_count {
            best = *temperature;
            best_count = count;
        }
    }
    best
}

fn confidence(primary: &ColorSample) -> f64 {
    let (w_usage, w_saturation, w_spread) = brand::CONFIDENCE_WEIGHTS;
    let usage = (primary.usage_count as f64 / brand::CONFIDENCE_USAGE_CAP as f64).min(1.0);
    let spread =
        (primary.locations.len() as f64 / brand::CONFIDENCE_LOCATION_CAP as f64).min(1.0);
    (w_usage * usage + w_saturation * primary.saturation + w_spread * spread).clamp(0.0, 1.0)
}
