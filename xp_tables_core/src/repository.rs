use crate::config::RulesFileConfig;
use crate::multiplier::{MultiplierBand, MultiplierBands};
use crate::standard::{BUDGETS_2024, MULTIPLIER_BANDS, THRESHOLDS_2014};
use crate::table::LevelTable;
use crate::{ConfigError, LookupError};
use ruleset_core::{Difficulty, Level, Ruleset};
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::OnceLock;

/// Global rules tables instance
static RULES: OnceLock<RulesTables> = OnceLock::new();

/// Read accessors the calculation engine needs from the rules tables
pub trait RulesRepository {
    /// 2024 XP budget for one character
    fn xp_budget_2024(&self, level: Level, difficulty: Difficulty) -> Result<u32, LookupError>;

    /// 2014 XP threshold for one character
    fn xp_threshold_2014(&self, level: Level, difficulty: Difficulty) -> Result<u32, LookupError>;

    /// 2014 encounter multiplier for a monster count
    fn multiplier_for(&self, num_monsters: i32) -> Result<f64, LookupError>;

    /// The multiplier step table, ascending
    fn multiplier_bands(&self) -> Vec<MultiplierBand>;

    /// Difficulties of a ruleset in canonical order
    fn all_difficulties(&self, ruleset: Ruleset) -> Vec<Difficulty> {
        ruleset.difficulties().to_vec()
    }

    /// Levels covered by the tables, ascending
    fn supported_levels(&self) -> Vec<Level>;
}

impl<T: RulesRepository + ?Sized> RulesRepository for &T {
    fn xp_budget_2024(&self, level: Level, difficulty: Difficulty) -> Result<u32, LookupError> {
        (**self).xp_budget_2024(level, difficulty)
    }

    fn xp_threshold_2014(&self, level: Level, difficulty: Difficulty) -> Result<u32, LookupError> {
        (**self).xp_threshold_2014(level, difficulty)
    }

    fn multiplier_for(&self, num_monsters: i32) -> Result<f64, LookupError> {
        (**self).multiplier_for(num_monsters)
    }

    fn multiplier_bands(&self) -> Vec<MultiplierBand> {
        (**self).multiplier_bands()
    }

    fn all_difficulties(&self, ruleset: Ruleset) -> Vec<Difficulty> {
        (**self).all_difficulties(ruleset)
    }

    fn supported_levels(&self) -> Vec<Level> {
        (**self).supported_levels()
    }
}

/// Immutable XP tables for both rulesets plus the multiplier bands
#[derive(Debug, Clone)]
pub struct RulesTables {
    budgets_2024: LevelTable,
    thresholds_2014: LevelTable,
    multipliers: MultiplierBands,
}

impl RulesTables {
    /// The tables as printed in the rules text
    pub fn standard() -> Self {
        RulesTables {
            budgets_2024: LevelTable::from_rows(Ruleset::Edition2024, BUDGETS_2024),
            thresholds_2014: LevelTable::from_rows(Ruleset::Edition2014, THRESHOLDS_2014),
            multipliers: MultiplierBands::from_literal(MULTIPLIER_BANDS),
        }
    }

    /// Load tables from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            error: e,
            path: Some(path.to_path_buf()),
        })?;

        let tables = Self::parse(&content, Some(path))?;
        tracing::debug!(
            "Loaded rules tables from {:?}: {} levels (2024), {} levels (2014), {} multiplier bands",
            path,
            tables.budgets_2024.len(),
            tables.thresholds_2014.len(),
            tables.multipliers.bands().len()
        );
        Ok(tables)
    }

    /// Parse tables from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Self::parse(content, None)
    }

    fn parse(content: &str, path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(Path::to_path_buf);

        let config: RulesFileConfig = toml::from_str(content).map_err(|e| ConfigError::Parse {
            error: e,
            path: path.clone(),
        })?;

        let validation = |message: String| ConfigError::Validation {
            message,
            path: path.clone(),
        };

        let budgets_2024 =
            LevelTable::from_config(Ruleset::Edition2024, config.budgets_2024).map_err(validation)?;
        let thresholds_2014 = LevelTable::from_config(Ruleset::Edition2014, config.thresholds_2014)
            .map_err(validation)?;
        let multipliers = MultiplierBands::from_config(config.multipliers).map_err(validation)?;

        Ok(RulesTables {
            budgets_2024,
            thresholds_2014,
            multipliers,
        })
    }

    /// Get the table for a ruleset
    pub fn table(&self, ruleset: Ruleset) -> &LevelTable {
        match ruleset {
            Ruleset::Edition2024 => &self.budgets_2024,
            Ruleset::Edition2014 => &self.thresholds_2014,
        }
    }
}

impl Default for RulesTables {
    fn default() -> Self {
        Self::standard()
    }
}

impl RulesRepository for RulesTables {
    fn xp_budget_2024(&self, level: Level, difficulty: Difficulty) -> Result<u32, LookupError> {
        self.budgets_2024.get(level, difficulty)
    }

    fn xp_threshold_2014(&self, level: Level, difficulty: Difficulty) -> Result<u32, LookupError> {
        self.thresholds_2014.get(level, difficulty)
    }

    fn multiplier_for(&self, num_monsters: i32) -> Result<f64, LookupError> {
        self.multipliers.multiplier_for(num_monsters)
    }

    fn multiplier_bands(&self) -> Vec<MultiplierBand> {
        self.multipliers.bands().to_vec()
    }

    fn supported_levels(&self) -> Vec<Level> {
        self.budgets_2024
            .levels()
            .chain(self.thresholds_2014.levels())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// Initialize the global rules tables from a TOML file
///
/// Must be called once at startup before any calculation reads `rules()`.
/// Returns error if already initialized or if loading fails.
pub fn init_rules(path: &Path) -> Result<(), ConfigError> {
    let tables = RulesTables::load(path)?;
    RULES
        .set(tables)
        .map_err(|_| ConfigError::AlreadyInitialized)
}

/// Initialize the global rules tables with the standard tables
pub fn init_rules_default() -> Result<(), ConfigError> {
    RULES
        .set(RulesTables::standard())
        .map_err(|_| ConfigError::AlreadyInitialized)
}

/// Get a reference to the global rules tables
///
/// Falls back to the standard tables if nothing was initialized.
pub fn rules() -> &'static RulesTables {
    RULES.get_or_init(RulesTables::standard)
}

/// Check if the rules tables have been initialized
pub fn rules_initialized() -> bool {
    RULES.get().is_some()
}
