//! encounter_core - Encounter XP calculation for the 2024 and 2014 rules
//!
//! This library provides:
//! - Party: Validated characters taking part in an encounter
//! - Calculation: One XP algorithm per ruleset (additive budget for 2024,
//!   threshold times monster multiplier for 2014)
//! - Inference: Nearest-threshold difficulty for a 2014 total
//! - EncounterService / QueryHandler: Entry points for presentation layers
//!
//! # Quick Start
//!
//! ```rust
//! use encounter_core::prelude::*;
//!
//! let service = EncounterService::new(RulesTables::standard());
//! let result = service
//!     .calculate_xp(&CalculateXpRequest {
//!         ruleset: "2014".to_string(),
//!         party_mode: "different".to_string(),
//!         difficulty: "Difficile".to_string(),
//!         character_levels: vec![3, 5, 7],
//!         num_monsters: Some(5),
//!     })
//!     .unwrap();
//! assert_eq!(result.total_xp, 5187);
//! ```

pub mod calculation;
pub mod config;
pub mod encounter;
pub mod error;
pub mod inference;
pub mod party;
pub mod prelude;
pub mod queries;
pub mod service;

// Core API - what most callers need
pub use service::{CalculateXpRequest, EncounterService};
pub use queries::QueryHandler;
pub use encounter::{Encounter, XpCalculationResult};
pub use error::EncounterError;
pub use party::{Character, Party, PartyComposition};

// Algorithms
pub use calculation::{calculate_xp, calculator_for, XpCalculator};
pub use inference::infer_difficulty_2014;

pub use config::EngineConfig;

// Re-export commonly needed types from the value and table crates
pub use ruleset_core::{Difficulty, Level, PartyMode, Ruleset, ValidationError};
pub use xp_tables_core::{LookupError, RulesRepository, RulesTables};
