//! Party aggregate - validated characters taking part in an encounter

use ruleset_core::{Level, PartyMode, ValidationError};
use serde::Serialize;

/// A single party member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Character {
    level: Level,
}

impl Character {
    pub fn new(level: Level) -> Self {
        Character { level }
    }

    pub fn level(&self) -> Level {
        self.level
    }
}

/// Non-empty, ordered group of characters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Party {
    characters: Vec<Character>,
}

impl Party {
    /// Create a party from raw character levels, keeping input order
    ///
    /// Fails on an empty list, or on the first level outside 1..=20 with its
    /// 1-based position.
    pub fn new(levels: &[i32]) -> Result<Self, ValidationError> {
        if levels.is_empty() {
            return Err(ValidationError::EmptyParty);
        }

        let characters = levels
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                Level::new(value)
                    .map(Character::new)
                    .map_err(|_| ValidationError::InvalidCharacterLevel {
                        position: i + 1,
                        value,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Party { characters })
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn size(&self) -> usize {
        self.characters.len()
    }

    /// Levels in input order
    pub fn levels(&self) -> Vec<u8> {
        self.characters.iter().map(|c| c.level.get()).collect()
    }

    /// Arithmetic mean of the levels (0 for an empty party)
    pub fn average_level(&self) -> f64 {
        if self.characters.is_empty() {
            return 0.0;
        }

        let total: u32 = self.characters.iter().map(|c| c.level.get() as u32).sum();
        total as f64 / self.characters.len() as f64
    }
}

/// How a caller describes the party before it is validated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartyComposition {
    /// `count` characters sharing one level
    Same { level: i32, count: i32 },
    /// One explicit level per character
    Different { levels: Vec<i32> },
}

impl PartyComposition {
    pub fn mode(&self) -> PartyMode {
        match self {
            PartyComposition::Same { .. } => PartyMode::Same,
            PartyComposition::Different { .. } => PartyMode::Different,
        }
    }

    /// Expand into one raw level per character
    ///
    /// A `Same` count is clamped to `0..=max_size`; run the composition
    /// through `EncounterService::validate_composition` to reject it instead.
    pub fn levels(&self, max_size: usize) -> Vec<i32> {
        match self {
            PartyComposition::Same { level, count } => {
                let count = usize::try_from(*count).unwrap_or(0).min(max_size);
                vec![*level; count]
            }
            PartyComposition::Different { levels } => levels.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_party_keeps_order() {
        let party = Party::new(&[1, 5, 10, 20]).unwrap();
        assert_eq!(party.size(), 4);
        assert_eq!(party.levels(), vec![1, 5, 10, 20]);
        assert_eq!(party.characters()[2].level().get(), 10);
    }

    #[test]
    fn test_single_character() {
        let party = Party::new(&[5]).unwrap();
        assert_eq!(party.size(), 1);
        assert_eq!(party.levels(), vec![5]);
    }

    #[test]
    fn test_empty_party() {
        assert_eq!(Party::new(&[]), Err(ValidationError::EmptyParty));
    }

    #[test]
    fn test_invalid_level_reports_position() {
        assert_eq!(
            Party::new(&[0, 5]),
            Err(ValidationError::InvalidCharacterLevel {
                position: 1,
                value: 0
            })
        );
        assert_eq!(
            Party::new(&[5, 21]),
            Err(ValidationError::InvalidCharacterLevel {
                position: 2,
                value: 21
            })
        );
    }

    #[test]
    fn test_first_invalid_level_wins() {
        let err = Party::new(&[3, -1, 40]).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidCharacterLevel {
                position: 2,
                value: -1
            }
        );
    }

    #[test]
    fn test_average_level() {
        let cases: [(&[i32], f64); 3] = [
            (&[10], 10.0),
            (&[5, 5, 5, 5], 5.0),
            (&[1, 5, 10, 20], 9.0),
        ];
        for (levels, expected) in cases {
            let party = Party::new(levels).unwrap();
            assert!((party.average_level() - expected).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_average_level_of_empty_party() {
        let party = Party { characters: Vec::new() };
        assert!((party.average_level() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_same_composition_expands() {
        let composition = PartyComposition::Same { level: 3, count: 4 };
        assert_eq!(composition.mode(), PartyMode::Same);
        assert_eq!(composition.levels(100), vec![3, 3, 3, 3]);
    }

    #[test]
    fn test_same_composition_negative_count() {
        let composition = PartyComposition::Same { level: 3, count: -2 };
        assert!(composition.levels(100).is_empty());
    }

    #[test]
    fn test_same_composition_count_capped() {
        let composition = PartyComposition::Same {
            level: 3,
            count: i32::MAX,
        };
        assert_eq!(composition.levels(100).len(), 100);
        assert_eq!(composition.levels(6), vec![3; 6]);
    }

    #[test]
    fn test_different_composition() {
        let composition = PartyComposition::Different {
            levels: vec![2, 7, 9],
        };
        assert_eq!(composition.mode(), PartyMode::Different);
        assert_eq!(composition.levels(100), vec![2, 7, 9]);
    }
}
