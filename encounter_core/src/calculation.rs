//! XP calculation - one algorithm per ruleset behind a shared trait
//!
//! - 2024: sum of per-character budgets, no party-size scaling
//! - 2014: sum of per-character thresholds, scaled by the monster-count
//!   multiplier and truncated toward zero

use crate::party::Party;
use ruleset_core::{Difficulty, Ruleset};
use xp_tables_core::{LookupError, RulesRepository};

/// A ruleset's encounter XP algorithm
pub trait XpCalculator: Sync {
    fn ruleset(&self) -> Ruleset;

    /// Total XP for `party` at `difficulty`
    ///
    /// Any unresolved table entry aborts the whole calculation.
    fn total_xp(
        &self,
        repo: &dyn RulesRepository,
        party: &Party,
        difficulty: Difficulty,
        num_monsters: i32,
    ) -> Result<u64, LookupError>;
}

/// 2024 rules: additive per-character budget
#[derive(Debug, Clone, Copy, Default)]
pub struct AdditiveBudget;

impl XpCalculator for AdditiveBudget {
    fn ruleset(&self) -> Ruleset {
        Ruleset::Edition2024
    }

    fn total_xp(
        &self,
        repo: &dyn RulesRepository,
        party: &Party,
        difficulty: Difficulty,
        _num_monsters: i32,
    ) -> Result<u64, LookupError> {
        party.characters().iter().try_fold(0u64, |total, character| {
            let xp = repo.xp_budget_2024(character.level(), difficulty)?;
            Ok(total + xp as u64)
        })
    }
}

/// 2014 rules: summed thresholds times the encounter multiplier
#[derive(Debug, Clone, Copy, Default)]
pub struct ThresholdMultiplier;

impl ThresholdMultiplier {
    /// Sum of every character's threshold, failing on the first gap
    pub fn party_threshold(
        repo: &dyn RulesRepository,
        party: &Party,
        difficulty: Difficulty,
    ) -> Result<u64, LookupError> {
        party.characters().iter().try_fold(0u64, |total, character| {
            let threshold = repo.xp_threshold_2014(character.level(), difficulty)?;
            Ok(total + threshold as u64)
        })
    }
}

impl XpCalculator for ThresholdMultiplier {
    fn ruleset(&self) -> Ruleset {
        Ruleset::Edition2014
    }

    fn total_xp(
        &self,
        repo: &dyn RulesRepository,
        party: &Party,
        difficulty: Difficulty,
        num_monsters: i32,
    ) -> Result<u64, LookupError> {
        let total_threshold = Self::party_threshold(repo, party, difficulty)?;
        let multiplier = repo.multiplier_for(num_monsters)?;

        // Truncate, never round: 2075 * 2.5 must give 5187
        Ok((total_threshold as f64 * multiplier).floor() as u64)
    }
}

/// Select the algorithm for a ruleset
pub fn calculator_for(ruleset: Ruleset) -> &'static dyn XpCalculator {
    match ruleset {
        Ruleset::Edition2024 => &AdditiveBudget,
        Ruleset::Edition2014 => &ThresholdMultiplier,
    }
}

/// Compute the total XP of an encounter
///
/// `num_monsters` is only read by the 2014 algorithm.
pub fn calculate_xp(
    repo: &dyn RulesRepository,
    ruleset: Ruleset,
    party: &Party,
    difficulty: Difficulty,
    num_monsters: i32,
) -> Result<u64, LookupError> {
    calculator_for(ruleset).total_xp(repo, party, difficulty, num_monsters)
}
