//! Human-readable rendering of attempt results.
use crate::constants::{
    CENTISECONDS_PER_HOUR, CENTISECONDS_PER_MINUTE, CENTISECONDS_PER_SECOND,
};
use crate::format::Format;
use crate::packed;
use crate::value::{AttemptResult, Outcome};

/// Render a single result or an average.
///
/// Skipped renders empty, unsuccessful attempts render as `DNF`/`DNS`.
#[must_use]
pub fn format_attempt_result(value: AttemptResult, format: Format, is_average: bool) -> String {
    let success = match Outcome::of(value) {
        Outcome::Skipped => return String::new(),
        Outcome::Dnf => return "DNF".to_string(),
        Outcome::Dns => return "DNS".to_string(),
        Outcome::Success(v) => v,
    };
    match format {
        Format::Duration => centiseconds_to_clock_format(success),
        Format::MoveCount if is_average => format!("{}.{:02}", success / 100, success % 100),
        Format::MoveCount => success.to_string(),
        Format::Packed => {
            let decoded = packed::decode(success);
            format!(
                "{}/{} {}",
                decoded.solved,
                decoded.attempted,
                seconds_clock_format(decoded.centiseconds)
            )
        }
    }
}

/// `H:MM:SS.cc` with leading zero units stripped, always keeping `S.cc`.
#[must_use]
pub fn centiseconds_to_clock_format(centiseconds: i32) -> String {
    let clock = ClockParts::from_centiseconds(centiseconds);
    let centis = clock.centiseconds;
    format!("{}.{centis:02}", clock.without_fraction())
}

/// Clock format without the hundredths, as used for multi-blind times.
fn seconds_clock_format(centiseconds: i32) -> String {
    ClockParts::from_centiseconds(centiseconds).without_fraction()
}

struct ClockParts {
    hours: i32,
    minutes: i32,
    seconds: i32,
    centiseconds: i32,
}

impl ClockParts {
    const fn from_centiseconds(total: i32) -> Self {
        Self {
            hours: total / CENTISECONDS_PER_HOUR,
            minutes: total % CENTISECONDS_PER_HOUR / CENTISECONDS_PER_MINUTE,
            seconds: total % CENTISECONDS_PER_MINUTE / CENTISECONDS_PER_SECOND,
            centiseconds: total % CENTISECONDS_PER_SECOND,
        }
    }

    fn without_fraction(&self) -> String {
        let Self {
            hours,
            minutes,
            seconds,
            ..
        } = *self;
        if hours > 0 {
            format!("{hours}:{minutes:02}:{seconds:02}")
        } else if minutes > 0 {
            format!("{minutes}:{seconds:02}")
        } else {
            seconds.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_render_as_labels() {
        assert_eq!(format_attempt_result(0, Format::Duration, false), "");
        assert_eq!(format_attempt_result(-1, Format::Duration, false), "DNF");
        assert_eq!(format_attempt_result(-2, Format::Packed, false), "DNS");
    }

    #[test]
    fn durations_strip_leading_zeros() {
        assert_eq!(format_attempt_result(150, Format::Duration, false), "1.50");
        assert_eq!(format_attempt_result(6000, Format::Duration, false), "1:00.00");
        assert_eq!(
            format_attempt_result(60 * 60 * 100 + 15, Format::Duration, false),
            "1:00:00.15"
        );
        assert_eq!(format_attempt_result(15, Format::Duration, false), "0.15");
    }

    #[test]
    fn move_counts_render_singles_and_averages() {
        assert_eq!(format_attempt_result(28, Format::MoveCount, false), "28");
        assert_eq!(format_attempt_result(2833, Format::MoveCount, true), "28.33");
        assert_eq!(format_attempt_result(2500, Format::MoveCount, true), "25.00");
    }

    #[test]
    fn packed_renders_counts_and_time_without_hundredths() {
        assert_eq!(
            format_attempt_result(900_348_002, Format::Packed, false),
            "11/13 58:00"
        );
        assert_eq!(
            format_attempt_result(970_360_001, Format::Packed, false),
            "3/4 1:00:00"
        );
    }
}
