//! Property-based tests for scale generation
//!
//! Uses proptest to check the invariants every generated scale must hold.

use chromascale::{generate_scale, Color, Step};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Any `#RRGGBB` string, mixed case
fn hex6_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("#[0-9a-fA-F]{6}").expect("valid regex")
}

/// Any `#RGB` string
fn hex3_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("#[0-9a-fA-F]{3}").expect("valid regex")
}

/// Strings that are never a valid hex color
fn invalid_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        // no leading '#'
        prop::string::string_regex("[0-9a-fA-F]{3}|[0-9a-fA-F]{6}").expect("valid regex"),
        // wrong digit count
        prop::string::string_regex("#([0-9a-fA-F]{0,2}|[0-9a-fA-F]{4,5}|[0-9a-fA-F]{7,10})")
            .expect("valid regex"),
        // at least one non-hex character
        prop::string::string_regex("#[0-9a-f]{0,2}[g-zG-Z ][0-9a-f]{2,3}").expect("valid regex"),
        // surrounding whitespace
        prop::string::string_regex("[ \t]#[0-9a-f]{6}|#[0-9a-f]{6}[ \t\n]").expect("valid regex"),
    ]
}

fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs();
    d.min(360.0 - d)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Every valid input yields exactly the ten steps, ascending
    #[test]
    fn keys_are_fixed_and_ascending(input in hex6_strategy()) {
        let scale = generate_scale(&input).unwrap();
        let keys: Vec<&str> = scale.entries().map(|(k, _)| k).collect();
        prop_assert_eq!(
            keys,
            vec!["50", "100", "200", "300", "400", "500", "600", "700", "800", "900"]
        );
    }

    /// Every entry is `#` plus six uppercase hex digits
    #[test]
    fn entries_are_hex6(input in hex6_strategy()) {
        let scale = generate_scale(&input).unwrap();
        for (_, hex) in scale.entries() {
            prop_assert_eq!(hex.len(), 7);
            prop_assert!(hex.starts_with('#'));
            prop_assert!(hex[1..].chars().all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
        }
    }

    /// Hue and saturation survive, up to 8 bit rounding
    #[test]
    fn hue_and_saturation_preserved(input in hex6_strategy()) {
        let scale = generate_scale(&input).unwrap();
        let [h, s, _] = scale.base().into_hsl_f64();

        for (_, color) in &scale {
            let [r, g, b] = color.into_rgb();
            let chroma = r.max(g).max(b) - r.min(g).min(b);
            // below this the rounded channels can't carry the hue
            if chroma < 40 {
                continue;
            }
            let [h2, s2, _] = color.into_hsl_f64();
            prop_assert!(hue_distance(h, h2) <= 2.0, "hue {} vs {}", h, h2);
            prop_assert!((s - s2).abs() <= 0.03, "saturation {} vs {}", s, s2);
        }
    }

    /// Lightness follows the table and gets darker with every step
    #[test]
    fn lightness_follows_table(input in hex6_strategy()) {
        let scale = generate_scale(&input).unwrap();
        let mut prev = f64::INFINITY;

        for (step, color) in &scale {
            let [_, _, l] = color.into_hsl_f64();
            let target = f64::from(step.lightness()) / 100.0;
            prop_assert!((l - target).abs() <= 1.0 / 255.0, "{} lightness {} vs {}", step, l, target);
            prop_assert!(l < prev);
            prev = l;
        }
    }

    /// Same input, same output
    #[test]
    fn generation_is_deterministic(input in hex6_strategy()) {
        prop_assert_eq!(generate_scale(&input).unwrap(), generate_scale(&input).unwrap());
    }

    /// Case of the input digits doesn't matter
    #[test]
    fn input_case_is_ignored(input in hex6_strategy()) {
        prop_assert_eq!(
            generate_scale(&input.to_ascii_lowercase()).unwrap(),
            generate_scale(&input.to_ascii_uppercase()).unwrap()
        );
    }

    /// `#RGB` behaves exactly like its `#RRGGBB` expansion
    #[test]
    fn short_form_matches_expansion(input in hex3_strategy()) {
        let expanded: String = std::iter::once('#')
            .chain(input[1..].chars().flat_map(|c| [c, c]))
            .collect();

        prop_assert_eq!(generate_scale(&input).unwrap(), generate_scale(&expanded).unwrap());
    }

    /// Anything outside the hex grammar is rejected, and the error keeps the input
    #[test]
    fn invalid_input_rejected(input in invalid_strategy()) {
        let err = generate_scale(&input).unwrap_err();
        prop_assert_eq!(err.input(), input.as_str());
    }

    /// Scales of grays never pick up a tint
    #[test]
    fn grays_stay_gray(v in any::<u8>()) {
        let scale = generate_scale(&Color::rgb(v, v, v).to_hex()).unwrap();
        for (_, color) in &scale {
            prop_assert_eq!(color.r, color.g);
            prop_assert_eq!(color.g, color.b);
        }
        prop_assert_eq!(scale.get(Step::S50), Color::rgb(245, 245, 245));
    }
}
