//! ruleset_core - Validated inputs for encounter XP calculation
//!
//! Every raw value (ruleset id, difficulty label, character level, party
//! mode) is parsed into one of the types here before any table lookup runs.

mod error;
pub mod types;

pub use error::ValidationError;
pub use types::{Difficulty, Level, PartyMode, Ruleset};
