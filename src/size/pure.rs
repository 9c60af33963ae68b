//! Pure classification functions

use super::{SizeLabel, SizeThresholds};

/// Classify `n` using the default thresholds
pub fn classify(n: i64) -> SizeLabel {
    classify_with(n, &SizeThresholds::default())
}

/// Classify `n` against explicit thresholds
///
/// Total over `i64`: the sign checks run first, so no threshold value can
/// leave an input unlabelled.
pub fn classify_with(n: i64, thresholds: &SizeThresholds) -> SizeLabel {
    match n {
        n if n < 0 => SizeLabel::Negative,
        0 => SizeLabel::Zero,
        n if n < thresholds.small_below => SizeLabel::Small,
        n if n < thresholds.big_below => SizeLabel::Big,
        _ => SizeLabel::Huge,
    }
}

/// Label string for `n` under the default thresholds
pub fn size(n: i64) -> &'static str {
    classify(n).as_str()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    struct Test {
        input: i64,
        output: &'static str,
    }

    const TESTS: [Test; 5] = [
        Test {
            input: -1,
            output: "negative",
        },
        Test {
            input: 5,
            output: "small",
        },
        Test {
            input: 0,
            output: "zero",
        },
        Test {
            input: 99,
            output: "big",
        },
        Test {
            input: 999,
            output: "huge",
        },
    ];

    #[test]
    fn test_size_table() {
        for (i, test) in TESTS.iter().enumerate() {
            let got = size(test.input);
            assert_eq!(
                got, test.output,
                "#{}: Size({})={}; want {}",
                i, test.input, got, test.output
            );
        }
    }

    #[test]
    fn test_default_boundaries() {
        assert_eq!(classify(1), SizeLabel::Small);
        assert_eq!(classify(9), SizeLabel::Small);
        assert_eq!(classify(10), SizeLabel::Big);
        assert_eq!(classify(99), SizeLabel::Big);
        assert_eq!(classify(100), SizeLabel::Huge);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(classify(i64::MIN), SizeLabel::Negative);
        assert_eq!(classify(i64::MAX), SizeLabel::Huge);
    }

    #[test]
    fn test_custom_thresholds() {
        let t = SizeThresholds::new(50, 500).unwrap();
        assert_eq!(classify_with(49, &t), SizeLabel::Small);
        assert_eq!(classify_with(50, &t), SizeLabel::Big);
        assert_eq!(classify_with(499, &t), SizeLabel::Big);
        assert_eq!(classify_with(500, &t), SizeLabel::Huge);
    }

    #[test]
    fn test_equal_bounds_leave_big_empty() {
        let t = SizeThresholds::new(10, 10).unwrap();
        assert_eq!(classify_with(9, &t), SizeLabel::Small);
        assert_eq!(classify_with(10, &t), SizeLabel::Huge);
    }

    #[test]
    fn test_small_below_one_means_no_small_values() {
        let t = SizeThresholds::new(1, 5).unwrap();
        assert_eq!(classify_with(1, &t), SizeLabel::Big);
        assert_eq!(classify_with(0, &t), SizeLabel::Zero);
    }

    proptest! {
        #[test]
        fn prop_negative_inputs_are_negative(n in i64::MIN..0) {
            prop_assert_eq!(size(n), "negative");
        }

        #[test]
        fn prop_classification_is_deterministic(n in any::<i64>()) {
            prop_assert_eq!(classify(n), classify(n));
        }

        #[test]
        fn prop_classification_is_monotonic(a in any::<i64>(), b in any::<i64>()) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(classify(lo) <= classify(hi));
        }

        #[test]
        fn prop_positive_inputs_never_negative_or_zero(
            n in 1i64..,
            small in 1i64..1_000,
            extra in 0i64..1_000,
        ) {
            let t = SizeThresholds::new(small, small + extra).unwrap();
            let label = classify_with(n, &t);
            prop_assert!(label >= SizeLabel::Small);
        }
    }
}
