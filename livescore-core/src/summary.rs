//! Full computation for one competitor's round: enforcement, aggregation and
//! the data-entry warning.
use serde::{Deserialize, Serialize};

use crate::aggregate;
use crate::config::ScoringConfig;
use crate::format::Format;
use crate::qualification::{Cutoff, TimeLimit, apply_cutoff, apply_time_limit, meets_cutoff};
use crate::value::{AttemptResult, Attempts};
use crate::warning::attempt_results_warning;

/// Qualification rules attached to a round.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RoundRules {
    #[serde(default)]
    pub cutoff: Option<Cutoff>,
    #[serde(default)]
    pub time_limit: Option<TimeLimit>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptSummary {
    pub format: Format,
    /// Attempts after the cutoff and time limit were applied.
    pub attempts: Attempts,
    pub meets_cutoff: bool,
    pub best: AttemptResult,
    /// Present only for three or five attempts.
    pub average: Option<AttemptResult>,
    /// Warning about the attempts as entered, before enforcement.
    pub warning: Option<String>,
}

/// Summarize a competitor's entered attempts for a round.
#[must_use]
pub fn summarize(
    results: &[AttemptResult],
    format: Format,
    rules: &RoundRules,
    config: &ScoringConfig,
) -> AttemptSummary {
    let meets = meets_cutoff(results, rules.cutoff.as_ref());
    let mut attempts: Attempts = match &rules.cutoff {
        Some(cutoff) => apply_cutoff(results, cutoff),
        None => results.iter().copied().collect(),
    };
    if let Some(time_limit) = &rules.time_limit {
        attempts = apply_time_limit(&attempts, time_limit);
    }

    let best = aggregate::best(&attempts, format);
    let average = aggregate::average(&attempts, format).ok();
    let warning = attempt_results_warning(results, format, &config.analyzer)
        .map(|warning| warning.to_string());

    AttemptSummary {
        format,
        attempts,
        meets_cutoff: meets,
        best,
        average,
        warning,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enforcement_runs_before_aggregation() {
        let rules = RoundRules {
            cutoff: Some(Cutoff::new(2, 800)),
            time_limit: Some(TimeLimit::per_attempt(1100)),
        };
        let summary = summarize(
            &[1000, 1200, 700, 0, 0],
            Format::Duration,
            &rules,
            ScoringConfig::default_config(),
        );
        assert!(!summary.meets_cutoff);
        assert_eq!(summary.attempts.as_slice(), &[1000, -1, 0, 0, 0]);
        assert_eq!(summary.best, 1000);
        assert_eq!(summary.average, Some(0));
        assert_eq!(summary.warning, None);
    }

    #[test]
    fn average_is_absent_for_other_lengths() {
        let summary = summarize(
            &[1000, 0, 900, 950],
            Format::Duration,
            &RoundRules::default(),
            ScoringConfig::default_config(),
        );
        assert_eq!(summary.average, None);
        assert_eq!(summary.best, 900);
        assert!(summary.warning.unwrap().contains("omitted attempt 2"));
    }

    #[test]
    fn summary_serializes_for_reports() {
        let summary = summarize(
            &[900, 800, 700, 4000, 600],
            Format::Duration,
            &RoundRules::default(),
            ScoringConfig::default_config(),
        );
        assert_eq!(summary.average, Some(800));
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["best"], 600);
        assert_eq!(json["format"], "duration");
        assert_eq!(json["attempts"][3], 4000);
    }
}
