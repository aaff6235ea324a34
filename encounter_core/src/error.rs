use ruleset_core::ValidationError;
use thiserror::Error;
use xp_tables_core::LookupError;

/// Error from an encounter calculation
///
/// Both kinds are terminal for the request that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncounterError {
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),
    #[error("lookup failed: {0}")]
    Lookup(#[from] LookupError),
}

impl EncounterError {
    pub fn is_validation(&self) -> bool {
        matches!(self, EncounterError::Validation(_))
    }

    pub fn is_lookup(&self) -> bool {
        matches!(self, EncounterError::Lookup(_))
    }
}
