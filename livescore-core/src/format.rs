//! Result formats and the single ordering predicate shared by every component.
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::packed;
use crate::value::{self, AttemptResult, Outcome, is_complete};

/// How a positive attempt result is to be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    /// Centiseconds.
    Duration,
    /// Plain move count; averages carry two implied decimals.
    MoveCount,
    /// Packed multi-blind value, see [`crate::packed`].
    Packed,
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Duration => write!(f, "duration"),
            Self::MoveCount => write!(f, "move_count"),
            Self::Packed => write!(f, "packed"),
        }
    }
}

impl Format {
    /// Order two attempt results, better first.
    ///
    /// Every success beats every unsuccessful value, DNS sorts before DNF and
    /// skipped sorts last. Packed successes are compared on their decoded
    /// triples: more points, then less time, then fewer misses.
    #[must_use]
    pub fn compare(self, a: AttemptResult, b: AttemptResult) -> Ordering {
        match (Outcome::of(a), Outcome::of(b)) {
            (Outcome::Success(x), Outcome::Success(y)) => self.compare_successes(x, y),
            (lhs, rhs) => lhs.failure_rank().cmp(&rhs.failure_rank()),
        }
    }

    fn compare_successes(self, a: AttemptResult, b: AttemptResult) -> Ordering {
        match self {
            Self::Duration | Self::MoveCount => a.cmp(&b),
            Self::Packed => {
                let (lhs, rhs) = (packed::decode(a), packed::decode(b));
                rhs.points()
                    .cmp(&lhs.points())
                    .then(lhs.centiseconds.cmp(&rhs.centiseconds))
                    .then(lhs.missed().cmp(&rhs.missed()))
            }
        }
    }

    /// Best result under this format's ordering.
    ///
    /// Without any success the sentinel precedence of [`value::best`] applies.
    #[must_use]
    pub fn best(self, results: &[AttemptResult]) -> AttemptResult {
        results
            .iter()
            .copied()
            .filter(|&v| is_complete(v))
            .min_by(|&a, &b| self.compare(a, b))
            .unwrap_or_else(|| value::best(results))
    }

    /// Averages are not defined for packed results.
    #[must_use]
    pub const fn has_average(self) -> bool {
        !matches!(self, Self::Packed)
    }
}
