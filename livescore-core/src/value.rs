//! Attempt-result values and their sentinel space.
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::constants::{DNF_VALUE, DNS_VALUE, SKIPPED_VALUE};

/// A single attempt result.
///
/// `0` is skipped, `-1` is DNF, `-2` is DNS, and positive values are
/// successes whose unit depends on the event's [`crate::Format`].
pub type AttemptResult = i32;

/// Attempt sequences are at most five long, so they live inline.
pub type Attempts = SmallVec<[AttemptResult; 5]>;

/// Classification of a raw attempt result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Skipped,
    Dnf,
    Dns,
    Success(AttemptResult),
}

impl Outcome {
    /// Classify a raw value. Unknown negative values count as DNF.
    #[must_use]
    pub const fn of(value: AttemptResult) -> Self {
        match value {
            SKIPPED_VALUE => Self::Skipped,
            DNS_VALUE => Self::Dns,
            v if v > 0 => Self::Success(v),
            _ => Self::Dnf,
        }
    }

    /// The canonical raw value for this outcome.
    #[must_use]
    pub const fn value(self) -> AttemptResult {
        match self {
            Self::Skipped => SKIPPED_VALUE,
            Self::Dnf => DNF_VALUE,
            Self::Dns => DNS_VALUE,
            Self::Success(v) => v,
        }
    }

    /// Rank among unsuccessful outcomes when sorting: DNS sorts before DNF.
    pub(crate) const fn failure_rank(self) -> u8 {
        match self {
            Self::Success(_) => 0,
            Self::Dns => 1,
            Self::Dnf => 2,
            Self::Skipped => 3,
        }
    }
}

#[must_use]
pub const fn is_complete(value: AttemptResult) -> bool {
    value > 0
}

#[must_use]
pub const fn is_skipped(value: AttemptResult) -> bool {
    value == SKIPPED_VALUE
}

/// Best result of a sequence.
///
/// Skipped values are ignored. With no success at all, DNF wins over DNS, and
/// an empty or fully skipped sequence is itself skipped.
#[must_use]
pub fn best(results: &[AttemptResult]) -> AttemptResult {
    let mut best: Option<AttemptResult> = None;
    let mut saw_dnf = false;
    let mut saw_dns = false;
    for &value in results {
        match Outcome::of(value) {
            Outcome::Success(v) => best = Some(best.map_or(v, |b| b.min(v))),
            Outcome::Dnf => saw_dnf = true,
            Outcome::Dns => saw_dns = true,
            Outcome::Skipped => {}
        }
    }
    match best {
        Some(v) => v,
        None if saw_dnf => DNF_VALUE,
        None if saw_dns => DNS_VALUE,
        None => SKIPPED_VALUE,
    }
}
