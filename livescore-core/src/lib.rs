//! Livescore Core
//!
//! Platform-agnostic attempt-result logic for competition scoring: best and
//! average computation, cutoff and time-limit enforcement, the packed
//! multi-blind codec, result formatting and data-entry warnings.
//! This crate performs no I/O; persistence and UI live with the caller.

pub mod aggregate;
pub mod config;
pub mod constants;
pub mod display;
pub mod error;
pub mod events;
pub mod format;
pub mod numbers;
pub mod packed;
pub mod parse;
pub mod qualification;
pub mod summary;
pub mod value;
pub mod warning;

// Re-export commonly used types
pub use aggregate::round_over_ten_minutes;
pub use config::{AnalyzerConfig, PackedBudget, ScoringConfig};
pub use display::centiseconds_to_clock_format;
pub use error::{ConfigError, ParseError, ScoringError};
pub use events::{EventCatalog, EventInfo, FormatLookup};
pub use format::Format;
pub use packed::DecodedPacked;
pub use qualification::{Cutoff, TimeLimit, apply_cutoff, apply_time_limit, meets_cutoff};
pub use summary::{AttemptSummary, RoundRules};
pub use value::{AttemptResult, Attempts, Outcome, best, is_complete, is_skipped};
pub use warning::AttemptWarning;

/// Scoring engine bound to an event lookup and a configuration.
///
/// Every event-keyed operation resolves the event's [`Format`] once and
/// dispatches on it.
#[derive(Debug, Clone)]
pub struct Scorer<L>
where
    L: FormatLookup,
{
    lookup: L,
    config: ScoringConfig,
}

impl Scorer<&'static EventCatalog> {
    /// Scorer over the embedded event catalog and scoring configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(
            EventCatalog::default_catalog(),
            *ScoringConfig::default_config(),
        )
    }
}

impl<L> Scorer<L>
where
    L: FormatLookup,
{
    /// Create a scorer with the provided lookup and configuration
    pub const fn new(lookup: L, config: ScoringConfig) -> Self {
        Self { lookup, config }
    }

    #[must_use]
    pub const fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Resolve the format for `event_id`.
    ///
    /// # Errors
    ///
    /// Returns `MissingEventId` for a blank id and `UnknownEvent` when the
    /// lookup does not know the event.
    pub fn format_for(&self, event_id: &str) -> Result<Format, ScoringError> {
        let event_id = event_id.trim();
        if event_id.is_empty() {
            return Err(ScoringError::MissingEventId);
        }
        self.lookup
            .format_for(event_id)
            .ok_or_else(|| ScoringError::UnknownEvent(event_id.to_string()))
    }

    /// Best result under the event's ordering.
    ///
    /// # Errors
    ///
    /// Returns an error if the event cannot be resolved.
    pub fn best(
        &self,
        results: &[AttemptResult],
        event_id: &str,
    ) -> Result<AttemptResult, ScoringError> {
        Ok(aggregate::best(results, self.format_for(event_id)?))
    }

    /// Average of three or five attempts.
    ///
    /// # Errors
    ///
    /// Returns an error if the event cannot be resolved or the number of
    /// results is neither 3 nor 5.
    pub fn average(
        &self,
        results: &[AttemptResult],
        event_id: &str,
    ) -> Result<AttemptResult, ScoringError> {
        aggregate::average(results, self.format_for(event_id)?)
    }

    /// Render a result for display.
    ///
    /// # Errors
    ///
    /// Returns an error if the event cannot be resolved.
    pub fn format_attempt_result(
        &self,
        value: AttemptResult,
        event_id: &str,
        is_average: bool,
    ) -> Result<String, ScoringError> {
        Ok(display::format_attempt_result(
            value,
            self.format_for(event_id)?,
            is_average,
        ))
    }

    /// Check entered attempts for suspicious patterns.
    ///
    /// # Errors
    ///
    /// Returns an error if the event cannot be resolved.
    pub fn attempt_results_warning(
        &self,
        results: &[AttemptResult],
        event_id: &str,
    ) -> Result<Option<AttemptWarning>, ScoringError> {
        Ok(warning::attempt_results_warning(
            results,
            self.format_for(event_id)?,
            &self.config.analyzer,
        ))
    }

    /// Auto-correct a freshly decoded multi-blind triple.
    #[must_use]
    pub fn autocomplete_mbld_decoded_value(&self, decoded: DecodedPacked) -> DecodedPacked {
        packed::autocomplete(decoded, &self.config.packed_budget)
    }

    /// DNF for move counts over the configured limit.
    #[must_use]
    pub fn autocomplete_fm_attempt_result(&self, value: AttemptResult) -> AttemptResult {
        aggregate::autocomplete_move_count(value, self.config.max_moves)
    }

    /// Parse a typed-in result for the event.
    ///
    /// # Errors
    ///
    /// Returns an error if the event cannot be resolved or the input does not
    /// match the event's format.
    pub fn parse_attempt_result(
        &self,
        input: &str,
        event_id: &str,
    ) -> Result<AttemptResult, ParseOrScoringError> {
        let format = self.format_for(event_id)?;
        Ok(parse::parse_attempt_result(input, format, &self.config)?)
    }

    /// Enforce the round rules and compute best, average and warning.
    ///
    /// # Errors
    ///
    /// Returns an error if the event cannot be resolved.
    pub fn summarize(
        &self,
        results: &[AttemptResult],
        event_id: &str,
        rules: &RoundRules,
    ) -> Result<AttemptSummary, ScoringError> {
        Ok(summary::summarize(
            results,
            self.format_for(event_id)?,
            rules,
            &self.config,
        ))
    }
}

/// Failure of [`Scorer::parse_attempt_result`].
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ParseOrScoringError {
    #[error(transparent)]
    Scoring(#[from] ScoringError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Average of three or five attempts for `event_id`, using the embedded
/// event catalog.
///
/// # Errors
///
/// Returns an error if `event_id` is blank or unknown, or the number of
/// results is neither 3 nor 5.
pub fn average(results: &[AttemptResult], event_id: &str) -> Result<AttemptResult, ScoringError> {
    Scorer::with_defaults().average(results, event_id)
}

/// Render `value` for `event_id`, using the embedded event catalog.
///
/// # Errors
///
/// Returns an error if `event_id` is blank or unknown.
pub fn format_attempt_result(
    value: AttemptResult,
    event_id: &str,
    is_average: bool,
) -> Result<String, ScoringError> {
    Scorer::with_defaults().format_attempt_result(value, event_id, is_average)
}

/// Data-entry warning for `event_id`, using the embedded event catalog.
///
/// # Errors
///
/// Returns an error if `event_id` is blank or unknown.
pub fn attempt_results_warning(
    results: &[AttemptResult],
    event_id: &str,
) -> Result<Option<AttemptWarning>, ScoringError> {
    Scorer::with_defaults().attempt_results_warning(results, event_id)
}

#[must_use]
pub fn decode_mbld_attempt_result(value: AttemptResult) -> DecodedPacked {
    packed::decode(value)
}

#[must_use]
pub fn encode_mbld_attempt_result(decoded: &DecodedPacked) -> AttemptResult {
    packed::encode(decoded)
}

#[must_use]
pub fn autocomplete_mbld_decoded_value(decoded: DecodedPacked) -> DecodedPacked {
    Scorer::with_defaults().autocomplete_mbld_decoded_value(decoded)
}

#[must_use]
pub fn autocomplete_fm_attempt_result(value: AttemptResult) -> AttemptResult {
    Scorer::with_defaults().autocomplete_fm_attempt_result(value)
}

#[must_use]
pub fn autocomplete_time_attempt_result(value: AttemptResult) -> AttemptResult {
    aggregate::autocomplete_duration(value)
}
