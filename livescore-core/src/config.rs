//! Tunable scoring configuration.
//!
//! Holds the packed-format time budget, the move-count ceiling and the
//! anomaly thresholds. Defaults come from [`crate::constants`] and the
//! embedded `data/scoring.json`.
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::constants::{
    DEFAULT_MAX_MOVES, DEFAULT_PACKED_CAP_CENTISECONDS, DEFAULT_PACKED_GRACE_PER_ITEM_CENTISECONDS,
    DEFAULT_PACKED_PACE_FLOOR_CENTISECONDS, DEFAULT_PACKED_PER_ITEM_CENTISECONDS,
    DEFAULT_SPREAD_FACTOR,
};
use crate::error::ConfigError;

const DEFAULT_SCORING_DATA: &str = include_str!("../data/scoring.json");

/// Time allowance used when auto-correcting a packed (multi-blind) entry.
///
/// The budget for `n` attempted items is
/// `min(n * per_item, cap) + n * grace_per_item`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackedBudget {
    pub per_item_centiseconds: i32,
    pub cap_centiseconds: i32,
    pub grace_per_item_centiseconds: i32,
}

impl Default for PackedBudget {
    fn default() -> Self {
        Self {
            per_item_centiseconds: DEFAULT_PACKED_PER_ITEM_CENTISECONDS,
            cap_centiseconds: DEFAULT_PACKED_CAP_CENTISECONDS,
            grace_per_item_centiseconds: DEFAULT_PACKED_GRACE_PER_ITEM_CENTISECONDS,
        }
    }
}

impl PackedBudget {
    /// Maximum accepted duration for `attempted` items.
    #[must_use]
    pub fn limit_for(&self, attempted: u32) -> i64 {
        let attempted = i64::from(attempted);
        let base = (attempted * i64::from(self.per_item_centiseconds))
            .min(i64::from(self.cap_centiseconds));
        base + attempted * i64::from(self.grace_per_item_centiseconds)
    }
}

/// Thresholds for the data-entry anomaly checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Packed attempts faster than this per attempted item look impossible.
    pub packed_pace_floor_centiseconds: i32,
    /// Worst single at or above `best * spread_factor` looks misordered.
    pub spread_factor: i32,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            packed_pace_floor_centiseconds: DEFAULT_PACKED_PACE_FLOOR_CENTISECONDS,
            spread_factor: DEFAULT_SPREAD_FACTOR,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Move-count entries above this become DNF.
    pub max_moves: i32,
    pub packed_budget: PackedBudget,
    pub analyzer: AnalyzerConfig,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            max_moves: DEFAULT_MAX_MOVES,
            packed_budget: PackedBudget::default(),
            analyzer: AnalyzerConfig::default(),
        }
    }
}

impl ScoringConfig {
    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(DEFAULT_SCORING_DATA).unwrap_or_default()
    }

    /// Shared instance of the embedded configuration.
    #[must_use]
    pub fn default_config() -> &'static Self {
        static CONFIG: OnceLock<ScoringConfig> = OnceLock::new();
        CONFIG.get_or_init(Self::load_from_static)
    }

    /// Parse and validate a configuration document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the JSON is malformed or a value violates
    /// the documented bounds.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Validate configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when any field violates the documented bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_min("max_moves", 1, self.max_moves)?;
        check_min(
            "packed_budget.per_item_centiseconds",
            1,
            self.packed_budget.per_item_centiseconds,
        )?;
        check_min(
            "packed_budget.grace_per_item_centiseconds",
            0,
            self.packed_budget.grace_per_item_centiseconds,
        )?;
        if self.packed_budget.cap_centiseconds < self.packed_budget.per_item_centiseconds {
            return Err(ConfigError::PackedCapBelowPerItem {
                cap: self.packed_budget.cap_centiseconds,
                per_item: self.packed_budget.per_item_centiseconds,
            });
        }
        check_min(
            "analyzer.packed_pace_floor_centiseconds",
            0,
            self.analyzer.packed_pace_floor_centiseconds,
        )?;
        check_min("analyzer.spread_factor", 1, self.analyzer.spread_factor)?;
        Ok(())
    }
}

fn check_min(field: &'static str, min: i32, value: i32) -> Result<(), ConfigError> {
    if value < min {
        return Err(ConfigError::MinViolation { field, min, value });
    }
    Ok(())
}
