//! Rounding and saturating conversions shared by the scoring formulas.
//!
//! Rounding is half-up towards positive infinity, so `-2.5` rounds to `-2`
//! and `2.5` to `3`. Conversions saturate; callers feed them finite values.

/// Smallest magnitude that no longer fits a `u64` (2^64).
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;
/// Smallest magnitude that no longer fits an `i64` (2^63).
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Round to the nearest integer, ties towards positive infinity.
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round to one decimal place, ties towards positive infinity.
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}

/// Clamp to `[0, 100]` and convert to a percentage.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is clamped to 0..=100 first"
)]
pub(crate) fn to_percent(value: f64) -> u8 {
    value.clamp(0.0, 100.0) as u8
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "negative values are floored at zero; larger ones saturate"
)]
pub(crate) fn to_u64(value: f64) -> u64 {
    value.max(0.0) as u64
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "negative values are floored at zero; larger ones saturate"
)]
pub(crate) fn to_u32(value: f64) -> u32 {
    value.max(0.0) as u32
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "values beyond the i64 range saturate"
)]
pub(crate) const fn to_i64(value: f64) -> i64 {
    value as i64
}

#[expect(
    clippy::cast_precision_loss,
    reason = "currency figures stay far below 2^53"
)]
pub(crate) const fn u64_as_f64(value: u64) -> f64 {
    value as f64
}

/// Whether `to_u64` would clip `value` at the top of the range.
pub(crate) const fn saturates_u64(value: f64) -> bool {
    value.is_nan() || value >= U64_LIMIT
}

/// Whether `to_i64` would clip `value` at either end of the range.
pub(crate) const fn saturates_i64(value: f64) -> bool {
    value.is_nan() || value < -I64_LIMIT || value >= I64_LIMIT
}

#[expect(
    clippy::cast_precision_loss,
    reason = "growth figures stay far below 2^53"
)]
pub(crate) const fn i64_as_f64(value: i64) -> f64 {
    value as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(2.5, 3.0)]
    #[case(2.4999, 2.0)]
    #[case(-2.5, -2.0)]
    #[case(-2.6, -3.0)]
    #[case(57.5, 58.0)]
    fn rounds_ties_upwards(#[case] input: f64, #[case] expected: f64) {
        assert!((round_half_up(input) - expected).abs() < f64::EPSILON);
    }

    #[rstest]
    fn tenths_keep_one_decimal() {
        assert!((round_to_tenth(3.14159) - 3.1).abs() < 1e-12);
        assert!((round_to_tenth(4.96) - 5.0).abs() < 1e-12);
    }

    #[rstest]
    #[case(-4.0, 0)]
    #[case(55.0, 55)]
    #[case(180.0, 100)]
    fn percentages_are_clamped(#[case] input: f64, #[case] expected: u8) {
        assert_eq!(to_percent(input), expected);
    }

    #[rstest]
    fn unsigned_conversions_floor_negatives() {
        assert_eq!(to_u64(-1.0), 0);
        assert_eq!(to_u32(-0.5), 0);
        assert_eq!(to_i64(-20.0), -20);
    }

    #[rstest]
    #[case(1.0e19, false)]
    #[case(U64_LIMIT, true)]
    #[case(f64::INFINITY, true)]
    #[case(-5.0, false)]
    fn unsigned_saturation_is_detected(#[case] input: f64, #[case] saturated: bool) {
        assert_eq!(saturates_u64(input), saturated);
        if saturated {
            assert_eq!(to_u64(input), u64::MAX);
        }
    }

    #[rstest]
    #[case(-I64_LIMIT, false)]
    #[case(I64_LIMIT, true)]
    #[case(-1.0e19, true)]
    #[case(f64::NEG_INFINITY, true)]
    #[case(42.0, false)]
    fn signed_saturation_is_detected(#[case] input: f64, #[case] saturated: bool) {
        assert_eq!(saturates_i64(input), saturated);
    }
}
