//! Global Constants
//!
//! Centralized constants for thresholds and scoring weights.
//! All magic numbers should be defined here with documentation.

/// Alternate-mode (dark theme) variant prefix
pub const DARK_PREFIX: &str = "dark:";

/// Brand color extraction thresholds
pub mod brand {
    /// Minimum occurrences for a color to count as a brand candidate
    pub const MIN_USAGE: u32 = 2;

    /// Minimum HSL saturation for a brand candidate
    pub const MIN_SATURATION: f64 = 0.2;

    /// Exclusive lower bound on HSL lightness (drops near-black)
    pub const MIN_LUMINANCE: f64 = 0.1;

    /// Exclusive upper bound on HSL lightness (drops near-white)
    pub const MAX_LUMINANCE: f64 = 0.9;

    /// Maximum palette length
    pub const MAX_PALETTE: usize = 5;

    /// Accents need more saturation than primary/secondary
    pub const ACCENT_MIN_SATURATION: f64 = 0.6;

    /// Usage count at which the usage confidence component saturates
    pub const CONFIDENCE_USAGE_CAP: u32 = 10;

    /// Distinct-location count at which the spread component saturates
    pub const CONFIDENCE_LOCATION_CAP: usize = 3;

    /// Confidence weights: usage, saturation, location spread (sum to 1)
    pub const CONFIDENCE_WEIGHTS: (f64, f64, f64) = (0.4, 0.3, 0.3);
}

/// Design feature extraction tuning
pub mod features {
    /// Hue buckets used for color diversity (30° each)
    pub const HUE_BUCKETS: usize = 12;

    /// Colors below this saturation are treated as achromatic
    pub const CHROMATIC_SATURATION: f64 = 0.1;

    /// Weight of hue diversity vs. saturation variance in color complexity
    pub const HUE_DIVERSITY_WEIGHT: f64 = 0.6;

    /// Largest possible variance of values in [0, 1]
    pub const MAX_UNIT_VARIANCE: f64 = 0.25;

    /// Spacing-scale variance at which consistency reaches zero
    pub const SPACING_VARIANCE_CEILING: f64 = 64.0;

    /// Consistency reported when fewer than two spacing tokens exist
    pub const SPACING_UNKNOWN: f64 = 0.5;

    /// Distinct font-size/weight tokens at which typography variance saturates
    pub const TYPOGRAPHY_TOKEN_CAP: f64 = 12.0;

    /// Divisor for the (lines + tags) component complexity heuristic
    pub const COMPONENT_COMPLEXITY_DIVISOR: f64 = 100.0;
}

/// Theme recommendation weights
pub mod recommend {
    pub const BRAND_WEIGHT: f64 = 0.4;
    pub const ARCHETYPE_WEIGHT: f64 = 0.35;
    pub const ACCESSIBILITY_WEIGHT: f64 = 0.25;

    /// Brand match when the project has no primary color
    pub const NO_PRIMARY_BRAND_MATCH: f64 = 0.7;

    /// Archetype match for combinations missing from the matrix
    pub const UNKNOWN_ARCHETYPE_MATCH: f64 = 0.5;

    /// Number of alternatives reported after the top pick
    pub const ALTERNATIVES: usize = 3;
}

/// WCAG thresholds
pub mod contrast {
    /// AA normal text
    pub const AA_TEXT: f64 = 4.5;

    /// AA large text and UI components
    pub const AA_UI: f64 = 3.0;

    /// No requirement (decorative)
    pub const NONE: f64 = 1.0;
}

/// Theme validation tuning
pub mod validation {
    /// Minimum score for a preset to pass
    pub const PASS_SCORE: u8 = 80;

    /// RGB distance under which two palette colors read as the same color
    pub const MIN_DISTINCT_DISTANCE: f64 = 40.0;
}

/// Project transformation
pub mod transform {
    /// Default number of files processed concurrently
    pub const DEFAULT_CONCURRENCY: usize = 8;

    /// Progress channel capacity
    pub const PROGRESS_CHANNEL_CAPACITY: usize = 256;
}
