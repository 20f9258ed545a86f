//! Parsing typed-in attempt results, the inverse of [`crate::display`].
//!
//! Parsed values go through the same auto-correction as entry forms, so a
//! parsed result is always ready to store.
use regex::Regex;
use std::sync::OnceLock;

use crate::aggregate::{autocomplete_duration, autocomplete_move_count};
use crate::config::ScoringConfig;
use crate::constants::{
    CENTISECONDS_PER_HOUR, CENTISECONDS_PER_MINUTE, CENTISECONDS_PER_SECOND, DNF_VALUE,
    DNS_VALUE, SKIPPED_VALUE,
};
use crate::error::ParseError;
use crate::format::Format;
use crate::packed::{self, DecodedPacked};
use crate::value::AttemptResult;

fn clock_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(?:(?:(\d+):)?(\d+):)?(\d+)(?:\.(\d{1,2}))?$").ok())
        .as_ref()
}

fn packed_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d+)\s*/\s*(\d+)\s+(\S+)$").ok())
        .as_ref()
}

/// Parse one attempt result as typed by a scorer.
///
/// Accepts an empty string (skipped), `DNF`, `DNS`, and per format:
/// `[[H:]M:]S[.cc]` for durations, a plain integer for move counts and
/// `solved/attempted [H:]M:SS` for packed results.
///
/// # Errors
///
/// Returns `ParseError` when the input does not match the format.
pub fn parse_attempt_result(
    input: &str,
    format: Format,
    config: &ScoringConfig,
) -> Result<AttemptResult, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(SKIPPED_VALUE);
    }
    if trimmed.eq_ignore_ascii_case("dnf") {
        return Ok(DNF_VALUE);
    }
    if trimmed.eq_ignore_ascii_case("dns") {
        return Ok(DNS_VALUE);
    }
    match format {
        Format::Duration => parse_clock(trimmed).map(autocomplete_duration),
        Format::MoveCount => {
            let moves: i32 = trimmed
                .parse()
                .ok()
                .filter(|&moves| moves >= 0)
                .ok_or_else(|| ParseError::InvalidMoveCount(trimmed.to_string()))?;
            Ok(autocomplete_move_count(moves, config.max_moves))
        }
        Format::Packed => parse_packed(trimmed, config),
    }
}

/// Parse `[[H:]M:]S[.cc]` into centiseconds.
///
/// # Errors
///
/// Returns `ParseError` for malformed clocks, minutes/seconds of 60 or more
/// below a higher unit, or totals that do not fit the result range.
pub fn parse_clock(input: &str) -> Result<i32, ParseError> {
    let invalid = || ParseError::InvalidTime(input.to_string());
    let caps = clock_regex()
        .and_then(|re| re.captures(input))
        .ok_or_else(invalid)?;
    let group = |index: usize| -> Result<Option<i64>, ParseError> {
        caps.get(index)
            .map(|m| m.as_str().parse::<i64>().map_err(|_| invalid()))
            .transpose()
    };
    let hours = group(1)?;
    let minutes = group(2)?;
    let seconds = group(3)?.unwrap_or(0);
    let fraction = caps.get(4).map_or(Ok(0), |m| {
        let digits = m.as_str();
        let value = digits.parse::<i64>().map_err(|_| invalid())?;
        Ok(if digits.len() == 1 { value * 10 } else { value })
    })?;

    let out_of_range = |field| ParseError::OutOfRange {
        field,
        input: input.to_string(),
    };
    if hours.is_some() && minutes.is_some_and(|m| m >= 60) {
        return Err(out_of_range("minutes"));
    }
    if minutes.is_some() && seconds >= 60 {
        return Err(out_of_range("seconds"));
    }

    let scaled = |value: Option<i64>, unit: i32| value.unwrap_or(0).checked_mul(i64::from(unit));
    let total = scaled(hours, CENTISECONDS_PER_HOUR)
        .zip(scaled(minutes, CENTISECONDS_PER_MINUTE))
        .and_then(|(h, m)| h.checked_add(m))
        .zip(scaled(Some(seconds), CENTISECONDS_PER_SECOND))
        .and_then(|(hm, s)| hm.checked_add(s))
        .and_then(|total| total.checked_add(fraction))
        .ok_or_else(|| out_of_range("time"))?;
    i32::try_from(total).map_err(|_| out_of_range("time"))
}

fn parse_packed(input: &str, config: &ScoringConfig) -> Result<AttemptResult, ParseError> {
    let invalid = || ParseError::InvalidPacked(input.to_string());
    let caps = packed_regex()
        .and_then(|re| re.captures(input))
        .ok_or_else(invalid)?;
    let count = |index: usize| -> Result<u32, ParseError> {
        caps.get(index)
            .and_then(|m| m.as_str().parse().ok())
            .ok_or_else(invalid)
    };
    let solved = count(1)?;
    let attempted = count(2)?;
    let time = caps.get(3).map(|m| m.as_str()).ok_or_else(invalid)?;
    let centiseconds = parse_clock(time)?;
    if centiseconds == 0 {
        return Err(invalid());
    }
    let decoded = packed::autocomplete(
        DecodedPacked::new(solved, attempted, centiseconds),
        &config.packed_budget,
    );
    if !packed::is_encodable(&decoded) {
        return Err(ParseError::OutOfRange {
            field: "result",
            input: input.to_string(),
        });
    }
    Ok(packed::encode(&decoded))
}
