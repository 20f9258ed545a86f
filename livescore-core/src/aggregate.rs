//! Best and average computation.
use crate::constants::{
    AVERAGE_TRIMMED_LEN, AVERAGE_UNTRIMMED_LEN, CENTISECONDS_PER_SECOND, DNF_VALUE,
    MOVE_COUNT_AVERAGE_SCALE, ROUND_TO_SECONDS_THRESHOLD, SKIPPED_VALUE,
};
use crate::error::ScoringError;
use crate::format::Format;
use crate::numbers::{i64_to_i32, len_to_i64, round_half_up_div, round_to_multiple};
use crate::value::{AttemptResult, Attempts, is_complete, is_skipped};

/// Best result under `format`'s ordering.
#[must_use]
pub fn best(results: &[AttemptResult], format: Format) -> AttemptResult {
    format.best(results)
}

/// Average of three or five attempts.
///
/// Five attempts drop one best and one worst before averaging; three are
/// averaged as they are. Packed results and sequences with a skipped attempt
/// have no average (`0`), and any unsuccessful counting attempt makes the
/// average DNF.
///
/// # Errors
///
/// Returns `ScoringError::InvalidAttemptCount` unless there are exactly three
/// or five results.
pub fn average(results: &[AttemptResult], format: Format) -> Result<AttemptResult, ScoringError> {
    let len = results.len();
    if len != AVERAGE_TRIMMED_LEN && len != AVERAGE_UNTRIMMED_LEN {
        return Err(ScoringError::InvalidAttemptCount { given: len });
    }
    if !format.has_average() || results.iter().copied().any(is_skipped) {
        return Ok(SKIPPED_VALUE);
    }

    let mut sorted: Attempts = results.iter().copied().collect();
    sorted.sort_by(|&a, &b| format.compare(a, b));
    let counted = if len == AVERAGE_TRIMMED_LEN {
        &sorted[1..len - 1]
    } else {
        &sorted[..]
    };
    if !counted.iter().copied().all(is_complete) {
        return Ok(DNF_VALUE);
    }

    let sum: i64 = counted.iter().copied().map(i64::from).sum();
    let count = len_to_i64(counted.len());
    let mean = match format {
        Format::MoveCount => {
            i64_to_i32(round_half_up_div(sum * MOVE_COUNT_AVERAGE_SCALE, count))
        }
        Format::Duration => round_over_ten_minutes(i64_to_i32(round_half_up_div(sum, count))),
        Format::Packed => SKIPPED_VALUE,
    };
    Ok(mean)
}

/// Round durations of ten minutes or more to the nearest second.
#[must_use]
pub fn round_over_ten_minutes(centiseconds: AttemptResult) -> AttemptResult {
    if centiseconds < ROUND_TO_SECONDS_THRESHOLD {
        return centiseconds;
    }
    i64_to_i32(round_to_multiple(
        i64::from(centiseconds),
        i64::from(CENTISECONDS_PER_SECOND),
    ))
}

/// Normalize a typed-in duration.
#[must_use]
pub fn autocomplete_duration(value: AttemptResult) -> AttemptResult {
    if is_complete(value) {
        round_over_ten_minutes(value)
    } else {
        value
    }
}

/// Normalize a typed-in move count; anything above `max_moves` is DNF.
#[must_use]
pub fn autocomplete_move_count(value: AttemptResult, max_moves: i32) -> AttemptResult {
    if value > max_moves {
        log::debug!("{value} moves exceeds the {max_moves} move limit, forcing DNF");
        DNF_VALUE
    } else {
        value
    }
}
