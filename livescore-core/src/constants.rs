//! Centralized sentinel values and tuning defaults for attempt-result logic.
//!
//! Runtime overrides go through [`crate::config::ScoringConfig`], which takes
//! its defaults from these constants.

use crate::value::AttemptResult;

// Sentinels -----------------------------------------------------------------
pub const SKIPPED_VALUE: AttemptResult = 0;
pub const DNF_VALUE: AttemptResult = -1;
pub const DNS_VALUE: AttemptResult = -2;

// Clock units (centiseconds) ------------------------------------------------
pub const CENTISECONDS_PER_SECOND: i32 = 100;
pub const CENTISECONDS_PER_MINUTE: i32 = 60 * CENTISECONDS_PER_SECOND;
pub const CENTISECONDS_PER_HOUR: i32 = 60 * CENTISECONDS_PER_MINUTE;

// Averages ------------------------------------------------------------------
pub(crate) const AVERAGE_TRIMMED_LEN: usize = 5;
pub(crate) const AVERAGE_UNTRIMMED_LEN: usize = 3;
/// Averages at or above ten minutes are rounded to whole seconds.
pub const ROUND_TO_SECONDS_THRESHOLD: i32 = 10 * CENTISECONDS_PER_MINUTE;
/// Move-count averages carry two implied decimal places.
pub const MOVE_COUNT_AVERAGE_SCALE: i64 = 100;

// Move-count entry ----------------------------------------------------------
pub const DEFAULT_MAX_MOVES: i32 = 80;

// Packed (multi-blind) layout -----------------------------------------------
pub(crate) const PACKED_POINTS_BASE: i64 = 99;
pub(crate) const PACKED_POINTS_FACTOR: i64 = 10_000_000;
pub(crate) const PACKED_SECONDS_FACTOR: i64 = 100;

// Packed auto-correction budget ---------------------------------------------
pub const DEFAULT_PACKED_PER_ITEM_CENTISECONDS: i32 = 10 * CENTISECONDS_PER_MINUTE;
pub const DEFAULT_PACKED_CAP_CENTISECONDS: i32 = 60 * CENTISECONDS_PER_MINUTE;
pub const DEFAULT_PACKED_GRACE_PER_ITEM_CENTISECONDS: i32 = 5 * CENTISECONDS_PER_SECOND;

// Anomaly analysis ----------------------------------------------------------
pub const DEFAULT_PACKED_PACE_FLOOR_CENTISECONDS: i32 = 30 * CENTISECONDS_PER_SECOND;
pub const DEFAULT_SPREAD_FACTOR: i32 = 4;
