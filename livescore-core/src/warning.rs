//! Heuristic checks that flag suspicious data entry.
//!
//! Warnings are advisory: they never change a value or block a computation.
use serde::{Deserialize, Serialize};

use crate::config::AnalyzerConfig;
use crate::constants::CENTISECONDS_PER_SECOND;
use crate::display::format_attempt_result;
use crate::format::Format;
use crate::packed;
use crate::value::{AttemptResult, is_complete, is_skipped};

/// A suspicious pattern found in an attempt sequence. Attempt numbers are
/// 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AttemptWarning {
    ImprobablePace { attempt: usize, floor_seconds: i32 },
    WideSpread { best: String, worst: String },
    Omitted { attempt: usize },
}

impl std::fmt::Display for AttemptWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ImprobablePace {
                attempt,
                floor_seconds,
            } => write!(
                f,
                "The result you're trying to submit seems to be impossible: attempt {attempt} \
                 is done in less than {floor_seconds} seconds per cube tried. \
                 Make sure you entered the results in the correct order."
            ),
            Self::WideSpread { best, worst } => write!(
                f,
                "There's a big difference between the best single ({best}) and the worst \
                 single ({worst}). Make sure you entered the results in the correct order."
            ),
            Self::Omitted { attempt } => write!(
                f,
                "You've omitted attempt {attempt}. Make sure it's intentional."
            ),
        }
    }
}

/// Run the checks in priority order and return the first that fires.
#[must_use]
pub fn attempt_results_warning(
    results: &[AttemptResult],
    format: Format,
    config: &AnalyzerConfig,
) -> Option<AttemptWarning> {
    let warning = match format {
        Format::Packed => improbable_pace(results, config),
        Format::Duration | Format::MoveCount => wide_spread(results, format, config),
    }
    .or_else(|| omitted_attempt(results));
    if let Some(warning) = &warning {
        log::debug!("attempt results look suspicious: {warning:?}");
    }
    warning
}

fn improbable_pace(results: &[AttemptResult], config: &AnalyzerConfig) -> Option<AttemptWarning> {
    let floor = i64::from(config.packed_pace_floor_centiseconds);
    results
        .iter()
        .position(|&value| {
            if !is_complete(value) {
                return false;
            }
            let decoded = packed::decode(value);
            decoded.attempted > 0
                && i64::from(decoded.centiseconds) < floor * i64::from(decoded.attempted)
        })
        .map(|index| AttemptWarning::ImprobablePace {
            attempt: index + 1,
            floor_seconds: config.packed_pace_floor_centiseconds / CENTISECONDS_PER_SECOND,
        })
}

fn wide_spread(
    results: &[AttemptResult],
    format: Format,
    config: &AnalyzerConfig,
) -> Option<AttemptWarning> {
    let successes = || results.iter().copied().filter(|&v| is_complete(v));
    let best = successes().min()?;
    let worst = successes().max()?;
    if i64::from(worst) < i64::from(best) * i64::from(config.spread_factor) {
        return None;
    }
    Some(AttemptWarning::WideSpread {
        best: format_attempt_result(best, format, false),
        worst: format_attempt_result(worst, format, false),
    })
}

fn omitted_attempt(results: &[AttemptResult]) -> Option<AttemptWarning> {
    let entered = results
        .iter()
        .rposition(|&value| !is_skipped(value))
        .map_or(0, |last| last + 1);
    results[..entered]
        .iter()
        .position(|&value| is_skipped(value))
        .map(|index| AttemptWarning::Omitted { attempt: index + 1 })
}
