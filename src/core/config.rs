//! Engine configuration.
//!
//! Callers configure the table layout and the drag-capacity rule at
//! construction time. Defaults give the classic table: 8 columns, 4 free
//! cells, and a base drag capacity of 5.
//!
//! ```
//! use freecell_engine::core::{CapacityRule, EngineConfig};
//!
//! let config = EngineConfig::default()
//!     .with_seed(42)
//!     .with_capacity_rule(CapacityRule::Doubling);
//! assert!(config.validate().is_ok());
//! ```

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Maximum number of tableau columns.
pub const MAX_COLUMNS: usize = 16;
/// Maximum number of free cells.
pub const MAX_FREE_CELLS: usize = 8;
/// Number of foundations (one per suit).
pub const FOUNDATION_COUNT: usize = 4;

/// How many cards a tableau run may contain when lifted as a unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CapacityRule {
    /// `base - occupied free cells`, floored at zero.
    #[default]
    FreeCellsOnly,
    /// `(1 + empty free cells) * 2^(empty columns)`.
    Doubling,
}

impl CapacityRule {
    /// Compute the capacity for the given table occupancy.
    #[must_use]
    pub fn capacity(self, base: usize, free_cells: usize, occupied: usize, empty_columns: usize) -> usize {
        match self {
            CapacityRule::FreeCellsOnly => base.saturating_sub(occupied),
            CapacityRule::Doubling => {
                let empty_cells = free_cells.saturating_sub(occupied);
                (1 + empty_cells).saturating_mul(1usize << empty_columns.min(16))
            }
        }
    }
}

/// Invalid configuration value.
#[derive(Clone, Debug, PartialEq, Eq, Display)]
pub enum ConfigError {
    #[display("column count must be 1-{}, got {}", MAX_COLUMNS, _0)]
    Columns(usize),

    #[display("free cell count must be 0-{}, got {}", MAX_FREE_CELLS, _0)]
    FreeCells(usize),

    #[display("base drag capacity must be at least 1")]
    BaseCapacity,
}

impl std::error::Error for ConfigError {}

/// Table and rule configuration for an `Engine`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Number of tableau columns.
    pub columns: usize,

    /// Number of free cells.
    pub free_cells: usize,

    /// Base drag capacity for `CapacityRule::FreeCellsOnly`.
    pub base_drag_capacity: usize,

    pub capacity_rule: CapacityRule,

    /// Shuffle seed. `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            columns: 8,
            free_cells: 4,
            base_drag_capacity: 5,
            capacity_rule: CapacityRule::FreeCellsOnly,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    #[must_use]
    pub fn with_free_cells(mut self, free_cells: usize) -> Self {
        self.free_cells = free_cells;
        self
    }

    #[must_use]
    pub fn with_base_drag_capacity(mut self, capacity: usize) -> Self {
        self.base_drag_capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_capacity_rule(mut self, rule: CapacityRule) -> Self {
        self.capacity_rule = rule;
        self
    }

    /// Check every value is in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_COLUMNS).contains(&self.columns) {
            return Err(ConfigError::Columns(self.columns));
        }
        if self.free_cells > MAX_FREE_CELLS {
            return Err(ConfigError::FreeCells(self.free_cells));
        }
        if self.base_drag_capacity == 0 {
            return Err(ConfigError::BaseCapacity);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_classic_table() {
        let config = EngineConfig::default();
        assert_eq!(config.columns, 8);
        assert_eq!(config.free_cells, 4);
        assert_eq!(config.base_drag_capacity, 5);
        assert_eq!(config.capacity_rule, CapacityRule::FreeCellsOnly);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        assert_eq!(
            EngineConfig::new().with_columns(0).validate(),
            Err(ConfigError::Columns(0))
        );
        assert_eq!(
            EngineConfig::new().with_columns(17).validate(),
            Err(ConfigError::Columns(17))
        );
        assert_eq!(
            EngineConfig::new().with_free_cells(9).validate(),
            Err(ConfigError::FreeCells(9))
        );
        assert_eq!(
            EngineConfig::new().with_base_drag_capacity(0).validate(),
            Err(ConfigError::BaseCapacity)
        );
        assert!(EngineConfig::new().with_free_cells(0).validate().is_ok());
    }

    #[test]
    fn test_free_cells_only_capacity() {
        let rule = CapacityRule::FreeCellsOnly;
        assert_eq!(rule.capacity(5, 4, 0, 0), 5);
        assert_eq!(rule.capacity(5, 4, 3, 0), 2);
        // Empty columns do not scale the literal rule
        assert_eq!(rule.capacity(5, 4, 3, 2), 2);
        assert_eq!(rule.capacity(2, 4, 4, 0), 0);
    }

    #[test]
    fn test_doubling_capacity() {
        let rule = CapacityRule::Doubling;
        assert_eq!(rule.capacity(5, 4, 0, 0), 5);
        assert_eq!(rule.capacity(5, 4, 3, 0), 2);
        assert_eq!(rule.capacity(5, 4, 3, 1), 4);
        assert_eq!(rule.capacity(5, 4, 4, 2), 4);
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"seed": 7, "capacity_rule": "Doubling"}"#).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.columns, 8);
        assert_eq!(config.capacity_rule, CapacityRule::Doubling);
    }

    #[test]
    fn test_config_error_display() {
        assert_eq!(
            ConfigError::Columns(0).to_string(),
            "column count must be 1-16, got 0"
        );
    }
}
