//! Cutoff and time-limit enforcement over an attempt sequence.
use serde::{Deserialize, Serialize};

use crate::constants::{DNF_VALUE, SKIPPED_VALUE};
use crate::value::{AttemptResult, Attempts, is_complete};

/// Competitors must beat `attempt_result` within the first
/// `number_of_attempts` attempts to continue the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cutoff {
    pub number_of_attempts: usize,
    pub attempt_result: AttemptResult,
}

impl Cutoff {
    #[must_use]
    pub const fn new(number_of_attempts: usize, attempt_result: AttemptResult) -> Self {
        Self {
            number_of_attempts,
            attempt_result,
        }
    }
}

/// Time limit applied per attempt, or cumulatively over a set of rounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeLimit {
    pub centiseconds: i32,
    /// Rounds sharing the limit; empty for a per-attempt limit.
    #[serde(default)]
    pub cumulative_round_ids: Vec<String>,
}

impl TimeLimit {
    #[must_use]
    pub const fn per_attempt(centiseconds: i32) -> Self {
        Self {
            centiseconds,
            cumulative_round_ids: Vec::new(),
        }
    }

    #[must_use]
    pub fn cumulative<I, S>(centiseconds: i32, round_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            centiseconds,
            cumulative_round_ids: round_ids.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn is_cumulative(&self) -> bool {
        !self.cumulative_round_ids.is_empty()
    }
}

/// Whether the attempts satisfy `cutoff`. No cutoff is always met.
#[must_use]
pub fn meets_cutoff(results: &[AttemptResult], cutoff: Option<&Cutoff>) -> bool {
    let Some(cutoff) = cutoff else {
        return true;
    };
    results
        .iter()
        .take(cutoff.number_of_attempts)
        .any(|&value| is_complete(value) && value < cutoff.attempt_result)
}

/// Skip every attempt after the cutoff window when the cutoff is not met.
#[must_use]
pub fn apply_cutoff(results: &[AttemptResult], cutoff: &Cutoff) -> Attempts {
    if meets_cutoff(results, Some(cutoff)) {
        return results.iter().copied().collect();
    }
    log::trace!(
        "cutoff of {} within {} attempts not met, skipping the rest",
        cutoff.attempt_result,
        cutoff.number_of_attempts
    );
    results
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            if index < cutoff.number_of_attempts {
                value
            } else {
                SKIPPED_VALUE
            }
        })
        .collect()
}

/// Turn attempts that reach the time limit into DNF.
///
/// A per-attempt limit checks each success on its own. A cumulative limit
/// keeps a running total of successes; the attempt that brings the total to
/// the limit becomes DNF, as does every later success, since the total stays
/// at or above the limit. Cross-round limits are evaluated over the sequence
/// given, so callers pass one round at a time.
#[must_use]
pub fn apply_time_limit(results: &[AttemptResult], time_limit: &TimeLimit) -> Attempts {
    let limit = i64::from(time_limit.centiseconds);
    if !time_limit.is_cumulative() {
        return results
            .iter()
            .map(|&value| {
                if is_complete(value) && i64::from(value) >= limit {
                    log::trace!("{value} reaches the {limit} time limit, marking DNF");
                    DNF_VALUE
                } else {
                    value
                }
            })
            .collect();
    }

    let mut total: i64 = 0;
    results
        .iter()
        .map(|&value| {
            if !is_complete(value) {
                return value;
            }
            total += i64::from(value);
            if total >= limit {
                log::trace!("cumulative total {total} reaches the {limit} time limit, marking DNF");
                DNF_VALUE
            } else {
                value
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_cutoff_is_always_met() {
        assert!(meets_cutoff(&[-1, -1], None));
    }

    #[test]
    fn cutoff_requires_a_strictly_better_attempt_in_the_window() {
        let cutoff = Cutoff::new(2, 900);
        assert!(meets_cutoff(&[1000, 850, 0, 0, 0], Some(&cutoff)));
        assert!(!meets_cutoff(&[1000, 950, 800, 0, 0], Some(&cutoff)));
        assert!(!meets_cutoff(&[900, 700, 0], Some(&Cutoff::new(2, 700))));
        assert!(!meets_cutoff(&[-1, -2, 500], Some(&cutoff)));
    }

    #[test]
    fn unmet_cutoff_skips_later_attempts() {
        let cutoff = Cutoff::new(2, 800);
        assert_eq!(
            apply_cutoff(&[1000, 800, 1200, 0, 0], &cutoff).as_slice(),
            &[1000, 800, 0, 0, 0]
        );
        assert_eq!(
            apply_cutoff(&[1000, 799, 1200, 1000, 900], &cutoff).as_slice(),
            &[1000, 799, 1200, 1000, 900]
        );
    }

    #[test]
    fn per_attempt_limit_marks_attempts_at_or_over_the_limit() {
        let limit = TimeLimit::per_attempt(1250);
        assert_eq!(
            apply_time_limit(&[1000, 1250, 1100, 1300, 0], &limit).as_slice(),
            &[1000, -1, 1100, -1, 0]
        );
    }

    #[test]
    fn cumulative_limit_marks_the_attempt_reaching_the_total() {
        let limit = TimeLimit::cumulative(20000, ["333bf-r1"]);
        assert_eq!(
            apply_time_limit(&[3000, 12000, 5000], &limit).as_slice(),
            &[3000, 12000, -1]
        );
        assert_eq!(
            apply_time_limit(&[15000, -1, 6000, 1000], &limit).as_slice(),
            &[15000, -1, -1, -1]
        );
    }

    #[test]
    fn inputs_are_never_mutated() {
        let input = [1000, 2000, 3000];
        let _ = apply_time_limit(&input, &TimeLimit::per_attempt(1500));
        assert_eq!(input, [1000, 2000, 3000]);
    }
}
