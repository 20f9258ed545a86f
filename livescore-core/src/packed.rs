//! Packed multi-blind encoding.
//!
//! A successful attempt stores `(99 - points) * 10^7 + seconds * 10^2 + missed`
//! in a single integer, where `points = solved - missed`. Sentinel values
//! (skipped, DNF, DNS) bypass the arithmetic.
use serde::{Deserialize, Serialize};

use crate::config::PackedBudget;
use crate::constants::{
    CENTISECONDS_PER_SECOND, DNF_VALUE, PACKED_POINTS_BASE, PACKED_POINTS_FACTOR,
    PACKED_SECONDS_FACTOR,
};
use crate::numbers::{i64_to_i32, round_half_up_div};
use crate::value::AttemptResult;

/// Decoded multi-blind attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DecodedPacked {
    pub solved: u32,
    pub attempted: u32,
    /// Duration, or the sentinel value for skipped/DNF/DNS attempts.
    pub centiseconds: i32,
}

impl DecodedPacked {
    #[must_use]
    pub const fn new(solved: u32, attempted: u32, centiseconds: i32) -> Self {
        Self {
            solved,
            attempted,
            centiseconds,
        }
    }

    /// Sentinel triple carrying `value` as its duration.
    #[must_use]
    pub const fn sentinel(value: AttemptResult) -> Self {
        Self::new(0, 0, value)
    }

    #[must_use]
    pub const fn dnf() -> Self {
        Self::sentinel(DNF_VALUE)
    }

    #[must_use]
    pub const fn is_sentinel(&self) -> bool {
        self.centiseconds <= 0
    }

    /// Net score: solved minus missed.
    #[must_use]
    pub fn points(&self) -> i64 {
        2 * i64::from(self.solved) - i64::from(self.attempted)
    }

    #[must_use]
    pub fn missed(&self) -> i64 {
        i64::from(self.attempted) - i64::from(self.solved)
    }
}

#[must_use]
pub fn decode(value: AttemptResult) -> DecodedPacked {
    if value <= 0 {
        return DecodedPacked::sentinel(value);
    }
    let value = i64::from(value);
    let points = PACKED_POINTS_BASE - value / PACKED_POINTS_FACTOR;
    let remainder = value % PACKED_POINTS_FACTOR;
    let missed = remainder % PACKED_SECONDS_FACTOR;
    let seconds = remainder / PACKED_SECONDS_FACTOR;
    DecodedPacked {
        solved: u32::try_from(points + missed).unwrap_or(0),
        attempted: u32::try_from(points + 2 * missed).unwrap_or(0),
        centiseconds: i64_to_i32(seconds * i64::from(CENTISECONDS_PER_SECOND)),
    }
}

fn rounded_seconds(decoded: &DecodedPacked) -> i64 {
    round_half_up_div(
        i64::from(decoded.centiseconds),
        i64::from(CENTISECONDS_PER_SECOND),
    )
}

/// Whether a successful triple fits the packed layout: 0 to 99 points, 0 to
/// 99 missed and 1 to 99 999 whole seconds. Sentinels always fit.
#[must_use]
pub fn is_encodable(decoded: &DecodedPacked) -> bool {
    if decoded.is_sentinel() {
        return true;
    }
    (0..=PACKED_POINTS_BASE).contains(&decoded.points())
        && (0..PACKED_SECONDS_FACTOR).contains(&decoded.missed())
        && (1..PACKED_POINTS_FACTOR / PACKED_SECONDS_FACTOR).contains(&rounded_seconds(decoded))
}

/// Encode a decoded triple. Durations are rounded to whole seconds.
///
/// Triples outside the packed layout (see [`is_encodable`]) encode as DNF.
#[must_use]
pub fn encode(decoded: &DecodedPacked) -> AttemptResult {
    if decoded.is_sentinel() {
        return decoded.centiseconds;
    }
    if !is_encodable(decoded) {
        log::warn!(
            "packed {}/{} in {}cs does not fit the packed layout, encoding DNF",
            decoded.solved,
            decoded.attempted,
            decoded.centiseconds
        );
        return DNF_VALUE;
    }
    let seconds = rounded_seconds(decoded);
    i64_to_i32(
        (PACKED_POINTS_BASE - decoded.points()) * PACKED_POINTS_FACTOR
            + seconds * PACKED_SECONDS_FACTOR
            + decoded.missed(),
    )
}

/// Auto-correct a freshly typed triple.
///
/// Fills in `attempted` when it is missing or smaller than `solved`, and turns
/// the attempt into DNF when it scores below zero points, is a 1/2, or runs
/// past the time budget for the attempted count.
#[must_use]
pub fn autocomplete(decoded: DecodedPacked, budget: &PackedBudget) -> DecodedPacked {
    if decoded.is_sentinel() {
        return decoded;
    }
    let mut completed = decoded;
    if completed.attempted == 0 || completed.solved > completed.attempted {
        completed.attempted = completed.solved;
    }
    if completed.points() < 0 || (completed.solved == 1 && completed.attempted == 2) {
        log::debug!(
            "packed {}/{} scores too few points, forcing DNF",
            completed.solved,
            completed.attempted
        );
        return DecodedPacked::dnf();
    }
    let limit = budget.limit_for(completed.attempted);
    if i64::from(completed.centiseconds) > limit {
        log::debug!(
            "packed {}/{} took {}cs, over the {}cs budget, forcing DNF",
            completed.solved,
            completed.attempted,
            completed.centiseconds,
            limit
        );
        return DecodedPacked::dnf();
    }
    completed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_decode_to_themselves() {
        assert_eq!(decode(0), DecodedPacked::new(0, 0, 0));
        assert_eq!(decode(-1), DecodedPacked::new(0, 0, -1));
        assert_eq!(decode(-2), DecodedPacked::new(0, 0, -2));
    }

    #[test]
    fn decodes_successful_attempt() {
        assert_eq!(decode(900_348_002), DecodedPacked::new(11, 13, 348_000));
        assert_eq!(decode(970_360_001), DecodedPacked::new(3, 4, 360_000));
    }

    #[test]
    fn encodes_sentinels_and_successes() {
        assert_eq!(encode(&DecodedPacked::sentinel(0)), 0);
        assert_eq!(encode(&DecodedPacked::sentinel(-1)), -1);
        assert_eq!(encode(&DecodedPacked::sentinel(-2)), -2);
        assert_eq!(encode(&DecodedPacked::new(11, 13, 348_000)), 900_348_002);
    }

    #[test]
    fn encode_rounds_centiseconds_to_seconds() {
        assert_eq!(encode(&DecodedPacked::new(11, 13, 348_050)), 900_348_102);
        assert_eq!(encode(&DecodedPacked::new(11, 13, 348_049)), 900_348_002);
    }

    #[test]
    fn triples_outside_the_layout_encode_as_dnf() {
        let too_many_points = DecodedPacked::new(100, 100, 300_000);
        assert!(!is_encodable(&too_many_points));
        assert_eq!(encode(&too_many_points), -1);

        let too_many_missed = DecodedPacked::new(100, 100 + 100, 300_000);
        assert!(!is_encodable(&too_many_missed));
        assert_eq!(encode(&too_many_missed), -1);

        let more_solved_than_attempted = DecodedPacked::new(60, 21, 6_000);
        assert!(!is_encodable(&more_solved_than_attempted));
        assert_eq!(encode(&more_solved_than_attempted), -1);

        let under_a_second = DecodedPacked::new(2, 2, 40);
        assert_eq!(encode(&under_a_second), -1);

        let too_slow = DecodedPacked::new(2, 2, 100_000 * 100);
        assert!(!is_encodable(&too_slow));
        assert_eq!(encode(&too_slow), -1);

        let largest = DecodedPacked::new(99, 99, 99_999 * 100);
        assert!(is_encodable(&largest));
        assert_eq!(encode(&largest), 9_999_900);
        assert_eq!(decode(encode(&largest)), largest);
    }

    #[test]
    fn autocomplete_fills_attempted_from_solved() {
        let budget = PackedBudget::default();
        assert_eq!(
            autocomplete(DecodedPacked::new(2, 0, 6_000), &budget),
            DecodedPacked::new(2, 2, 6_000)
        );
        assert_eq!(
            autocomplete(DecodedPacked::new(3, 2, 6_000), &budget),
            DecodedPacked::new(3, 3, 6_000)
        );
    }

    #[test]
    fn autocomplete_forces_dnf_for_low_scores() {
        let budget = PackedBudget::default();
        assert_eq!(
            autocomplete(DecodedPacked::new(2, 5, 6_000), &budget),
            DecodedPacked::dnf()
        );
        assert_eq!(
            autocomplete(DecodedPacked::new(1, 2, 6_000), &budget),
            DecodedPacked::dnf()
        );
    }

    #[test]
    fn autocomplete_applies_time_budget_with_grace() {
        let budget = PackedBudget::default();
        assert_eq!(
            autocomplete(DecodedPacked::new(2, 3, 40 * 60 * 100), &budget),
            DecodedPacked::dnf()
        );
        let plus_twos = DecodedPacked::new(2, 3, 30 * 60 * 100 + 12 * 100);
        assert_eq!(autocomplete(plus_twos, &budget), plus_twos);
        let capped = DecodedPacked::new(11, 12, 60 * 60 * 100);
        assert_eq!(autocomplete(capped, &budget), capped);
    }

    #[test]
    fn autocomplete_leaves_sentinels_alone() {
        let budget = PackedBudget::default();
        assert_eq!(
            autocomplete(DecodedPacked::sentinel(-2), &budget),
            DecodedPacked::sentinel(-2)
        );
    }
}
