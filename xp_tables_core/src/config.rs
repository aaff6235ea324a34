use serde::Deserialize;
use std::collections::BTreeMap;

/// TOML configuration for a rules tables file
#[derive(Debug, Deserialize)]
pub struct RulesFileConfig {
    #[serde(default)]
    pub budgets_2024: Vec<LevelRowConfig>,
    #[serde(default)]
    pub thresholds_2014: Vec<LevelRowConfig>,
    #[serde(default)]
    pub multipliers: Vec<MultiplierBandConfig>,
}

/// XP values for one character level, keyed by difficulty label
#[derive(Debug, Deserialize)]
pub struct LevelRowConfig {
    pub level: i32,
    #[serde(default)]
    pub xp: BTreeMap<String, u32>,
}

/// One step of the monster-count multiplier
#[derive(Debug, Deserialize)]
pub struct MultiplierBandConfig {
    pub max_monsters: i32,
    pub multiplier: f64,
}
