//! Design feature extraction
//!
//! Reduces a scanned project to four normalized features in [0, 1]:
//!
//! - **color complexity**: hue-bucket diversity of chromatic colors blended
//!   with saturation variance
//! - **spacing patterns**: how tightly numeric spacing-scale tokens cluster
//! - **typography variance**: distinct font-size and font-weight tokens
//! - **component complexity**: `(lines + tags) / 100` averaged over markup files

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::brand::colors_in;
use super::scanner::FileKind;
use crate::constants::features;
use crate::tokens::palette::utility_hex;
use crate::tokens::utility::split_variants;
use crate::types::color::Rgb;
use crate::types::{Framework, ScanResult};

static SPACING_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"^-?(?:p[xytrblse]?|m[xytrblse]?|gap(?:-[xy])?|space-[xy])-(\d+(?:\.\d+)?)$",
    )
    .ok()
});

static TYPOGRAPHY_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"^(?:text-(?:xs|sm|base|lg|xl|[2-9]xl)|font-(?:thin|extralight|light|normal|medium|semibold|bold|extrabold|black))$",
    )
    .ok()
});

static TAG_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"<[A-Za-z]").ok());

/// Feature selector used by archetype rubrics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    ColorComplexity,
    SpacingPatterns,
    TypographyVariance,
    ComponentComplexity,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignFeatureVector {
    pub framework: Framework,
    pub component_count: usize,
    pub color_complexity: f64,
    pub spacing_patterns: f64,
    pub typography_variance: f64,
    pub component_complexity: f64,
}

impl DesignFeatureVector {
    /// Vector with the given features and no project context
    pub fn new(
        color_complexity: f64,
        spacing_patterns: f64,
        typography_variance: f64,
        component_complexity: f64,
    ) -> Self {
        Self {
            framework: Framework::Unknown,
            component_count: 0,
            color_complexity,
            spacing_patterns,
            typography_variance,
            component_complexity,
        }
    }

    pub fn get(&self, feature: Feature) -> f64 {
        match feature {
            Feature::ColorComplexity => self.color_complexity,
            Feature::SpacingPatterns => self.spacing_patterns,
            Feature::TypographyVariance => self.typography_variance,
            Feature::ComponentComplexity => self.component_complexity,
        }
    }

    pub fn from_scan(scan: &ScanResult) -> Self {
        let tokens: Vec<&str> = scan.class_tokens().collect();
        let files: Vec<(FileKind, &str)> = scan
            .files
            .iter()
            .map(|f| (f.kind, f.content.as_str()))
            .collect();
        extract_features(scan.framework, &tokens, &files)
    }
}

/// Deterministic feature extraction over class tokens and file contents
pub fn extract_features(
    framework: Framework,
    tokens: &[&str],
    files: &[(FileKind, &str)],
) -> DesignFeatureVector {
    let markup: Vec<&str> = files
        .iter()
        .filter(|(kind, _)| *kind == FileKind::Markup)
        .map(|(_, content)| *content)
        .collect();

    let mut colors: BTreeSet<Rgb> = BTreeSet::new();
    for (_, content) in files {
        colors.extend(colors_in(content));
    }
    colors.extend(
        tokens
            .iter()
            .filter_map(|t| utility_hex(split_variants(t).1))
            .filter_map(Rgb::parse_hex),
    );

    DesignFeatureVector {
        framework,
        component_count: markup.len(),
        color_complexity: color_complexity(&colors),
        spacing_patterns: spacing_consistency(tokens),
        typography_variance: typography_variance(tokens),
        component_complexity: component_complexity(&markup),
    }
}

fn color_complexity(colors: &BTreeSet<Rgb>) -> f64 {
    if colors.is_empty() {
        return 0.0;
    }
    let hsl: Vec<_> = colors.iter().map(Rgb::to_hsl).collect();

    let buckets: BTreeSet<usize> = hsl
        .iter()
        .filter(|c| c.s > features::CHROMATIC_SATURATION)
        .map(|c| ((c.h / 360.0 * features::HUE_BUCKETS as f64) as usize).min(features::HUE_BUCKETS - 1))
        .collect();
    let diversity = buckets.len() as f64 / features::HUE_BUCKETS as f64;

    let saturations: Vec<f64> = hsl.iter().map(|c| c.s).collect();
    let spread = (variance(&saturations) / features::MAX_UNIT_VARIANCE).min(1.0);

    let w = features::HUE_DIVERSITY_WEIGHT;
    (w * diversity + (1.0 - w) * spread).clamp(0.0, 1.0)
}

fn spacing_consistency(tokens: &[&str]) -> f64 {
    let Some(re) = SPACING_RE.as_ref() else {
        return features::SPACING_UNKNOWN;
    };
    let values: Vec<f64> = tokens
        .iter()
        .filter_map(|t| re.captures(split_variants(t).1))
        .filter_map(|c| c.get(1)?.as_str().parse().ok())
        .collect();

    if values.len() < 2 {
        return features::SPACING_UNKNOWN;
    }
    1.0 - (variance(&values) / features::SPACING_VARIANCE_CEILING).min(1.0)
}

fn typography_variance(tokens: &[&str]) -> f64 {
    let Some(re) = TYPOGRAPHY_RE.as_ref() else {
        return 0.0;
    };
    let distinct: BTreeSet<&str> = tokens
        .iter()
        .map(|t| split_variants(t).1)
        .filter(|u| re.is_match(u))
        .collect();
    (distinct.len() as f64 / features::TYPOGRAPHY_TOKEN_CAP).min(1.0)
}

fn component_complexity(markup: &[&str]) -> f64 {
    if markup.is_empty() {
        return 0.0;
    }
    let total: f64 = markup
        .iter()
        .map(|content| {
            let tags = TAG_RE
                .as_ref()
                .map(|re| re.find_iter(content).count())
                .unwrap_or(0);
            let size = (content.lines().count() + tags) as f64;
            (size / features::COMPONENT_COMPLEXITY_DIVISOR).min(1.0)
        })
        .sum();
    total / markup.len() as f64
}

/// Population variance
fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n
}
