//! xp_tables_core - Read-only XP tables for encounter calculation
//!
//! Holds the 2024 budgets, 2014 thresholds, and 2014 multiplier bands behind
//! the `RulesRepository` trait. Tables are built in once and never mutated,
//! so `rules()` can be shared across threads without locking.

mod config;
mod multiplier;
mod repository;
mod standard;
mod table;

pub use multiplier::{MultiplierBand, MultiplierBands};
pub use repository::{
    init_rules, init_rules_default, rules, rules_initialized, RulesRepository, RulesTables,
};
pub use table::LevelTable;

use ruleset_core::{Difficulty, Level, Ruleset};
use std::path::PathBuf;
use thiserror::Error;

/// Error loading rules table configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading '{path:?}': {error}")]
    Io {
        error: std::io::Error,
        path: Option<PathBuf>,
    },
    #[error("Parse error in '{path:?}': {error}")]
    Parse {
        error: toml::de::Error,
        path: Option<PathBuf>,
    },
    #[error("Validation error in '{path:?}': {message}")]
    Validation {
        message: String,
        path: Option<PathBuf>,
    },
    #[error("Rules tables already initialized")]
    AlreadyInitialized,
}

/// A valid input that falls outside the populated tables
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("unsupported character level {level} for {ruleset} ruleset")]
    UnsupportedLevel { ruleset: Ruleset, level: Level },
    #[error("unsupported difficulty {difficulty} for {ruleset} ruleset")]
    UnsupportedDifficulty {
        ruleset: Ruleset,
        difficulty: Difficulty,
    },
    #[error("number of monsters must be at least 1, got {0}")]
    InvalidMonsterCount(i32),
}
