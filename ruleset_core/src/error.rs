use crate::types::Ruleset;
use thiserror::Error;

/// Malformed or out-of-domain input, detected before any table lookup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid ruleset '{0}': must be '2024' or '2014'")]
    InvalidRuleset(String),
    #[error("invalid difficulty '{value}' for {ruleset} ruleset: must be one of {}", valid_labels(.ruleset))]
    InvalidDifficulty { ruleset: Ruleset, value: String },
    #[error("level {0} out of range: must be between 1 and 20")]
    LevelOutOfRange(i32),
    #[error("invalid party mode '{0}': must be 'same' or 'different'")]
    InvalidPartyMode(String),
    #[error("party must have at least one character")]
    EmptyParty,
    #[error("character {position} has invalid level {value}: must be between 1 and 20")]
    InvalidCharacterLevel { position: usize, value: i32 },
    #[error("party size {size} out of range: must be between 1 and {max}")]
    PartySizeOutOfRange { size: usize, max: usize },
    #[error("character level {0} out of range: must be between 1 and 20")]
    SameLevelOutOfRange(i32),
    #[error("party size {count} out of range: must be between 1 and {max}")]
    SameCountOutOfRange { count: i32, max: usize },
}

fn valid_labels(ruleset: &Ruleset) -> String {
    ruleset
        .difficulties()
        .iter()
        .map(|d| format!("'{}'", d))
        .collect::<Vec<_>>()
        .join(", ")
}
