//! One-shot encounter and its calculation result

use crate::calculation::calculator_for;
use crate::party::Party;
use ruleset_core::{Difficulty, Ruleset};
use serde::Serialize;
use xp_tables_core::{LookupError, RulesRepository};

/// An encounter built for a single calculation request
#[derive(Debug, Clone)]
pub struct Encounter {
    pub party: Party,
    pub ruleset: Ruleset,
    pub difficulty: Difficulty,
    /// Only read by the 2014 rules
    pub num_monsters: i32,
    /// Set by `calculate_xp`
    pub total_xp: Option<u64>,
}

impl Encounter {
    pub fn new(party: Party, ruleset: Ruleset, difficulty: Difficulty) -> Self {
        Encounter {
            party,
            ruleset,
            difficulty,
            num_monsters: 0,
            total_xp: None,
        }
    }

    pub fn with_monsters(mut self, num_monsters: i32) -> Self {
        self.num_monsters = num_monsters;
        self
    }

    /// Run the ruleset's algorithm and store the total
    ///
    /// On error the previous total is left untouched.
    pub fn calculate_xp(&mut self, repo: &dyn RulesRepository) -> Result<u64, LookupError> {
        let total = calculator_for(self.ruleset).total_xp(
            repo,
            &self.party,
            self.difficulty,
            self.num_monsters,
        )?;
        self.total_xp = Some(total);
        Ok(total)
    }

    /// Snapshot as a result record
    ///
    /// `total_xp` is 0 until [`Encounter::calculate_xp`] has succeeded; check
    /// the `total_xp` field to tell an uncalculated encounter from a real 0.
    pub fn to_result(&self) -> XpCalculationResult {
        XpCalculationResult {
            ruleset: self.ruleset,
            total_xp: self.total_xp.unwrap_or(0),
            party_size: self.party.size(),
            character_levels: self.party.levels(),
            calculated_difficulty: None,
        }
    }
}

/// Outcome of an encounter XP calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XpCalculationResult {
    pub ruleset: Ruleset,
    pub total_xp: u64,
    pub party_size: usize,
    pub character_levels: Vec<u8>,
    /// Inferred difficulty, 2014 rules only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calculated_difficulty: Option<Difficulty>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use xp_tables_core::RulesTables;

    #[test]
    fn test_new_encounter() {
        let party = Party::new(&[5, 5, 5, 5]).unwrap();
        let encounter = Encounter::new(party, Ruleset::Edition2024, Difficulty::Moderate);
        assert_eq!(encounter.party.size(), 4);
        assert_eq!(encounter.total_xp, None);
        assert_eq!(encounter.num_monsters, 0);
    }

    #[test]
    fn test_calculate_and_convert() {
        let tables = RulesTables::standard();
        let party = Party::new(&[5, 5, 5, 5]).unwrap();
        let mut encounter =
            Encounter::new(party, Ruleset::Edition2014, Difficulty::Media).with_monsters(2);

        assert_eq!(encounter.calculate_xp(&tables).unwrap(), 3000);
        assert_eq!(encounter.total_xp, Some(3000));

        let result = encounter.to_result();
        assert_eq!(result.ruleset, Ruleset::Edition2014);
        assert_eq!(result.total_xp, 3000);
        assert_eq!(result.party_size, 4);
        assert_eq!(result.character_levels, vec![5, 5, 5, 5]);
        assert_eq!(result.calculated_difficulty, None);
    }

    #[test]
    fn test_failed_calculation_keeps_total_absent() {
        let tables = RulesTables::standard();
        let party = Party::new(&[5]).unwrap();
        let mut encounter = Encounter::new(party, Ruleset::Edition2014, Difficulty::Media);

        assert!(encounter.calculate_xp(&tables).is_err());
        assert_eq!(encounter.total_xp, None);
    }

    #[test]
    fn test_uncalculated_result_reports_zero() {
        let party = Party::new(&[3]).unwrap();
        let encounter = Encounter::new(party, Ruleset::Edition2024, Difficulty::Low);

        assert_eq!(encounter.total_xp, None);
        assert_eq!(encounter.to_result().total_xp, 0);
    }

    #[test]
    fn test_result_json_omits_missing_difficulty() {
        let result = XpCalculationResult {
            ruleset: Ruleset::Edition2024,
            total_xp: 750,
            party_size: 1,
            character_levels: vec![5],
            calculated_difficulty: None,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["ruleset"], "2024");
        assert_eq!(json["total_xp"], 750);
        assert!(json.get("calculated_difficulty").is_none());

        let with_difficulty = XpCalculationResult {
            calculated_difficulty: Some(Difficulty::Letale),
            ..result
        };
        let json = serde_json::to_value(&with_difficulty).unwrap();
        assert_eq!(json["calculated_difficulty"], "Letale");
    }
}
