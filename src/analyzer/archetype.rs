//! Project archetype classification
//!
//! Each archetype is a rubric: a table of `(feature, threshold, weight)`
//! checks. A rubric's score is the sum of the weights of the checks that
//! hold, clamped to [0, 1].
//!
//! The winner is the archetype with the strictly greatest score; ties go to
//! the earlier archetype in [`Archetype::ALL`]. Confidence is
//! `winner − runner-up + 0.5`, clamped to [0, 1].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::features::{DesignFeatureVector, Feature};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Archetype {
    Corporate,
    Modern,
    Developer,
    Creative,
}

impl Archetype {
    /// Enumeration order, also the tie-break order
    pub const ALL: [Archetype; 4] = [
        Self::Corporate,
        Self::Modern,
        Self::Developer,
        Self::Creative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Corporate => "corporate",
            Self::Modern => "modern",
            Self::Developer => "developer",
            Self::Creative => "creative",
        }
    }

    pub fn rubric(&self) -> &'static [Check] {
        match self {
            Self::Corporate => CORPORATE,
            Self::Modern => MODERN,
            Self::Developer => DEVELOPER,
            Self::Creative => CREATIVE,
        }
    }

    pub fn score(&self, features: &DesignFeatureVector) -> f64 {
        self.rubric()
            .iter()
            .filter(|check| check.holds(features))
            .map(|check| check.weight)
            .sum::<f64>()
            .clamp(0.0, 1.0)
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Archetype {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown archetype: {}", s))
    }
}

// =============================================================================
// Rubrics
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Threshold {
    Below(f64),
    Above(f64),
    /// Inclusive range
    Within(f64, f64),
}

impl Threshold {
    pub fn holds(&self, value: f64) -> bool {
        match *self {
            Self::Below(limit) => value < limit,
            Self::Above(limit) => value > limit,
            Self::Within(low, high) => (low..=high).contains(&value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Check {
    pub feature: Feature,
    pub threshold: Threshold,
    pub weight: f64,
}

impl Check {
    const fn new(feature: Feature, threshold: Threshold, weight: f64) -> Self {
        Self {
            feature,
            threshold,
            weight,
        }
    }

    pub fn holds(&self, features: &DesignFeatureVector) -> bool {
        self.threshold.holds(features.get(self.feature))
    }
}

use Feature::{ColorComplexity, ComponentComplexity, SpacingPatterns, TypographyVariance};
use Threshold::{Above, Below, Within};

const CORPORATE: &[Check] = &[
    Check::new(ColorComplexity, Below(0.3), 0.25),
    Check::new(SpacingPatterns, Above(0.8), 0.25),
    Check::new(TypographyVariance, Below(0.3), 0.25),
    Check::new(ComponentComplexity, Below(0.4), 0.25),
];

const MODERN: &[Check] = &[
    Check::new(ColorComplexity, Within(0.3, 0.6), 0.3),
    Check::new(SpacingPatterns, Above(0.6), 0.25),
    Check::new(TypographyVariance, Within(0.2, 0.5), 0.2),
    Check::new(ComponentComplexity, Within(0.3, 0.7), 0.25),
];

const DEVELOPER: &[Check] = &[
    Check::new(ColorComplexity, Below(0.25), 0.3),
    Check::new(SpacingPatterns, Within(0.4, 0.8), 0.2),
    Check::new(TypographyVariance, Below(0.25), 0.2),
    Check::new(ComponentComplexity, Above(0.5), 0.3),
];

const CREATIVE: &[Check] = &[
    Check::new(ColorComplexity, Above(0.6), 0.35),
    Check::new(SpacingPatterns, Below(0.5), 0.2),
    Check::new(TypographyVariance, Above(0.5), 0.25),
    Check::new(ComponentComplexity, Above(0.6), 0.2),
];

// =============================================================================
// Classification
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArchetypeScore {
    pub archetype: Archetype,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArchetypeClassification {
    pub archetype: Archetype,
    pub confidence: f64,
    /// In [`Archetype::ALL`] order
    pub scores: Vec<ArchetypeScore>,
}

impl ArchetypeClassification {
    pub fn score_of(&self, archetype: Archetype) -> f64 {
        self.scores
            .iter()
            .find(|s| s.archetype == archetype)
            .map(|s| s.score)
            .unwrap_or(0.0)
    }
}

pub fn classify(features: &DesignFeatureVector) -> ArchetypeClassification {
    let scores: Vec<ArchetypeScore> = Archetype::ALL
        .iter()
        .map(|a| ArchetypeScore {
            archetype: *a,
            score: a.score(features),
        })
        .collect();

    let mut winner = scores[0];
    for candidate in &scores[1..] {
        if candidate.score > winner.score {
            winner = *candidate;
        }
    }

    let runner_up = scores
        .iter()
        .filter(|s| s.archetype != winner.archetype)
        .map(|s| s.score)
        .fold(0.0_f64, f64::max);
    let confidence = (winner.score - runner_up + 0.5).clamp(0.0, 1.0);

    tracing::debug!(
        archetype = %winner.archetype,
        score = winner.score,
        confidence,
        "Classified project archetype"
    );

    ArchetypeClassification {
        archetype: winner.archetype,
        confidence,
        scores,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corporate_profile() {
        let features = DesignFeatureVector::new(0.2, 0.9, 0.1, 0.2);
        let result = classify(&features);

        assert_eq!(result.archetype, Archetype::Corporate);
        assert_eq!(result.score_of(Archetype::Corporate), 1.0);
        assert!(CORPORATE.iter().all(|c| c.holds(&features)));
        assert!(result.score_of(Archetype::Developer) <= 0.5);
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn test_creative_profile() {
        let result = classify(&DesignFeatureVector::new(0.8, 0.3, 0.7, 0.8));
        assert_eq!(result.archetype, Archetype::Creative);
        assert!((result.score_of(Archetype::Creative) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_developer_profile() {
        let result = classify(&DesignFeatureVector::new(0.1, 0.6, 0.1, 0.9));
        assert_eq!(result.archetype, Archetype::Developer);
        // corporate still collects the color and typography checks
        assert_eq!(result.score_of(Archetype::Corporate), 0.5);
        assert!((result.confidence - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_tie_goes_to_enumeration_order() {
        let features = DesignFeatureVector::new(0.28, 0.7, 0.6, 0.35);
        assert_eq!(Archetype::Corporate.score(&features), 0.5);
        assert_eq!(Archetype::Modern.score(&features), 0.5);

        let result = classify(&features);
        assert_eq!(result.archetype, Archetype::Corporate);
        assert_eq!(result.confidence, 0.5);
    }

    #[test]
    fn test_rubric_weights_sum_to_one() {
        for archetype in Archetype::ALL {
            let total: f64 = archetype.rubric().iter().map(|c| c.weight).sum();
            assert!((total - 1.0).abs() < 1e-9, "{}", archetype);
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("Modern".parse::<Archetype>().unwrap(), Archetype::Modern);
        assert!("brutalist".parse::<Archetype>().is_err());
    }
}
