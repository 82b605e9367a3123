use nightshift::analyzer::brand;
use nightshift::analyzer::{DesignFeatureVector, classify};
use nightshift::tokens::utility::is_dark;
use nightshift::transform;
use nightshift::types::Rgb;
use nightshift::validator::grade;
use proptest::prelude::*;

const THEMES: &[&str] = &["professional", "aurora", "terminal", "sunset"];

/// Mapped, overridden, variant, pre-annotated and unmapped tokens
const TOKENS: &[&str] = &[
    "bg-white",
    "bg-gray-50",
    "bg-gray-100",
    "bg-slate-200",
    "bg-zinc-300",
    "bg-blue-600",
    "text-black",
    "text-gray-900",
    "text-gray-600",
    "text-slate-500",
    "text-neutral-700",
    "border-gray-200",
    "border-zinc-300",
    "divide-gray-200",
    "ring-gray-300",
    "placeholder-gray-400",
    "hover:bg-gray-100",
    "hover:text-gray-900",
    "dark:bg-gray-900",
    "dark:text-gray-100",
    "dark:hover:bg-gray-700",
    "p-4",
    "flex",
    "md:flex",
    "rounded-lg",
    "font-semibold",
    "bg-[#123456]",
];

fn arb_class_string() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(TOKENS), 0..12).prop_map(|tokens| tokens.join(" "))
}

fn arb_light_class_string() -> impl Strategy<Value = String> {
    let light: Vec<&'static str> = TOKENS.iter().copied().filter(|t| !is_dark(t)).collect();
    prop::collection::vec(prop::sample::select(light), 0..12).prop_map(|tokens| tokens.join(" "))
}

fn arb_theme() -> impl Strategy<Value = &'static str> {
    prop::sample::select(THEMES)
}

fn base_tokens(class_string: &str) -> Vec<&str> {
    class_string
        .split_whitespace()
        .filter(|t| !is_dark(t))
        .collect()
}

// ── Transformer laws ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn generic_transform_is_idempotent(s in arb_class_string()) {
        let once = transform(&s, None);
        let twice = transform(&once, None);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn base_tokens_keep_their_order(s in arb_class_string(), theme in arb_theme()) {
        let generic = transform(&s, None);
        prop_assert_eq!(base_tokens(&generic), base_tokens(&s));

        let themed = transform(&s, Some(theme));
        prop_assert_eq!(base_tokens(&themed), base_tokens(&s));
    }

    #[test]
    fn retheming_is_stable(
        s in arb_class_string(),
        from in arb_theme(),
        to in arb_theme(),
    ) {
        let rethemed = transform(&transform(&s, Some(from)), Some(to));
        let again = transform(&rethemed, Some(to));
        prop_assert_eq!(again, rethemed);
    }

    #[test]
    fn retheming_matches_direct_theming(
        s in arb_light_class_string(),
        from in arb_theme(),
        to in arb_theme(),
    ) {
        let via = transform(&transform(&s, Some(from)), Some(to));
        let direct = transform(&s, Some(to));
        prop_assert_eq!(via, direct);
    }

    #[test]
    fn output_is_single_space_joined(s in arb_class_string(), theme in arb_theme()) {
        let out = transform(&format!("  {}\t\n", s), Some(theme));
        prop_assert!(!out.starts_with(' ') && !out.ends_with(' '));
        prop_assert!(!out.contains("  "));
    }
}

// ── Confidence bounds ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn archetype_confidence_is_bounded(
        cc in 0.0f64..=1.0,
        sp in 0.0f64..=1.0,
        ty in 0.0f64..=1.0,
        comp in 0.0f64..=1.0,
    ) {
        let result = classify(&DesignFeatureVector::new(cc, sp, ty, comp));
        prop_assert!((0.0..=1.0).contains(&result.confidence), "{}", result.confidence);
        for score in &result.scores {
            prop_assert!((0.0..=1.0 + 1e-9).contains(&score.score));
        }
    }

    #[test]
    fn brand_confidence_is_bounded(
        colors in prop::collection::vec((0u32..0x0100_0000, 1usize..15, 0usize..3), 0..8),
    ) {
        let mut files = vec![String::new(), String::new(), String::new()];
        for (value, count, file) in &colors {
            for _ in 0..*count {
                files[*file].push_str(&format!("#{:06x} ", value));
            }
        }
        let inputs: Vec<(String, String)> = files
            .into_iter()
            .enumerate()
            .map(|(idx, content)| (format!("src/{}.css", idx), content))
            .collect();

        let profile = brand::extract(&inputs);
        prop_assert!((0.0..=1.0).contains(&profile.confidence));
        prop_assert!(profile.palette.len() <= 5);
    }
}

// ── Brand usage threshold ────────────────────────────────────────────────

proptest! {
    #[test]
    fn single_use_colors_never_reach_the_palette(value in 0u32..0x0100_0000) {
        let hex = format!("#{:06x}", value);
        let profile = brand::extract(&[("a.css", format!("color: {};", hex))]);
        prop_assert!(profile.palette.iter().all(|s| s.value != hex));
        prop_assert!(profile.primary.is_none());
    }

    #[test]
    fn qualifying_color_becomes_primary(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let rgb = Rgb::new(r, g, b);
        let hsl = rgb.to_hsl();
        prop_assume!(hsl.s >= 0.2 && hsl.l > 0.1 && hsl.l < 0.9);

        let hex = rgb.to_hex();
        let profile = brand::extract(&[("a.css", format!("{} {}", hex, hex))]);
        let primary = profile.primary.map(|p| p.value);
        prop_assert_eq!(primary, Some(hex));
    }
}

// ── Grades ───────────────────────────────────────────────────────────────

#[test]
fn grade_is_monotonic_in_score() {
    for score in 0u8..100 {
        assert!(
            grade(score) <= grade(score + 1),
            "grade drops between {} and {}",
            score,
            score + 1
        );
    }
}
