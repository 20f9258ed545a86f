//! Integer rounding and cast helpers shared by aggregation and the packed codec.
//!
//! Official results are computed on integers only. Rounding is half-up: ties
//! move toward positive infinity.

use num_traits::cast::cast;

/// Divide `numerator` by `denominator`, rounding half-up.
///
/// Returns 0 when `denominator` is not positive.
#[must_use]
pub fn round_half_up_div(numerator: i64, denominator: i64) -> i64 {
    if denominator <= 0 {
        return 0;
    }
    (numerator.saturating_mul(2) + denominator).div_euclid(denominator.saturating_mul(2))
}

/// Round `value` to the nearest multiple of `step`, rounding half-up.
#[must_use]
pub fn round_to_multiple(value: i64, step: i64) -> i64 {
    round_half_up_div(value, step).saturating_mul(step)
}

/// Clamp an i64 into the i32 range.
#[must_use]
pub fn i64_to_i32(value: i64) -> i32 {
    let clamped = value.clamp(i64::from(i32::MIN), i64::from(i32::MAX));
    cast::<i64, i32>(clamped).unwrap_or(0)
}

/// Convert a length into an i64 divisor.
#[must_use]
pub fn len_to_i64(len: usize) -> i64 {
    cast::<usize, i64>(len).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_up_division_breaks_ties_upward() {
        assert_eq!(round_half_up_div(5, 2), 3);
        assert_eq!(round_half_up_div(7300, 3), 2433);
        assert_eq!(round_half_up_div(-3, 2), -1);
        assert_eq!(round_half_up_div(10, 0), 0);
    }

    #[test]
    fn multiples_round_to_nearest_step() {
        assert_eq!(round_to_multiple(60_041, 100), 60_000);
        assert_eq!(round_to_multiple(60_050, 100), 60_100);
        assert_eq!(round_to_multiple(348_049, 100), 348_000);
    }

    #[test]
    fn casts_clamp_to_range() {
        assert_eq!(i64_to_i32(i64::MAX), i32::MAX);
        assert_eq!(i64_to_i32(-42), -42);
        assert_eq!(len_to_i64(5), 5);
    }
}
