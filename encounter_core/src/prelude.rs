//! Prelude module for convenient imports
//!
//! ```rust
//! use encounter_core::prelude::*;
//! ```

// Entry points
pub use crate::queries::QueryHandler;
pub use crate::service::{CalculateXpRequest, EncounterService};

// Domain
pub use crate::encounter::{Encounter, XpCalculationResult};
pub use crate::party::{Party, PartyComposition};

// Errors
pub use crate::error::EncounterError;

// Re-exports from the value and table crates
pub use ruleset_core::{Difficulty, Level, PartyMode, Ruleset, ValidationError};
pub use xp_tables_core::{rules, LookupError, RulesRepository, RulesTables};
