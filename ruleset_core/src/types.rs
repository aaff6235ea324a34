use crate::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Encounter-balancing rule system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Ruleset {
    #[serde(rename = "2024")]
    Edition2024,
    #[serde(rename = "2014")]
    Edition2014,
}

impl Ruleset {
    /// Parse a ruleset id, ignoring case
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        match value.to_lowercase().as_str() {
            "2024" => Ok(Ruleset::Edition2024),
            "2014" => Ok(Ruleset::Edition2014),
            _ => Err(ValidationError::InvalidRuleset(value.to_string())),
        }
    }

    /// Get all rulesets
    pub fn all() -> &'static [Ruleset] {
        &[Ruleset::Edition2024, Ruleset::Edition2014]
    }

    /// Difficulties owned by this ruleset, in canonical order
    pub fn difficulties(&self) -> &'static [Difficulty] {
        match self {
            Ruleset::Edition2024 => &[Difficulty::Low, Difficulty::Moderate, Difficulty::High],
            Ruleset::Edition2014 => &[
                Difficulty::Facile,
                Difficulty::Media,
                Difficulty::Difficile,
                Difficulty::Letale,
            ],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Ruleset::Edition2024 => "2024",
            Ruleset::Edition2014 => "2014",
        }
    }
}

impl fmt::Display for Ruleset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Ruleset {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ruleset::parse(s)
    }
}

/// Encounter difficulty label, scoped to the ruleset that owns it
///
/// The 2014 labels keep the names of the rules text they come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Difficulty {
    // 2024
    Low,
    Moderate,
    High,
    // 2014
    Facile,
    Media,
    Difficile,
    Letale,
}

impl Difficulty {
    /// Parse a label that must belong to `ruleset`
    ///
    /// Labels are matched exactly. A valid label of the other ruleset is
    /// rejected.
    pub fn parse(value: &str, ruleset: Ruleset) -> Result<Self, ValidationError> {
        ruleset
            .difficulties()
            .iter()
            .copied()
            .find(|d| d.label() == value)
            .ok_or_else(|| ValidationError::InvalidDifficulty {
                ruleset,
                value: value.to_string(),
            })
    }

    /// The ruleset this label belongs to
    pub fn ruleset(&self) -> Ruleset {
        match self {
            Difficulty::Low | Difficulty::Moderate | Difficulty::High => Ruleset::Edition2024,
            Difficulty::Facile | Difficulty::Media | Difficulty::Difficile | Difficulty::Letale => {
                Ruleset::Edition2014
            }
        }
    }

    pub fn is_valid_for(&self, ruleset: Ruleset) -> bool {
        self.ruleset() == ruleset
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Low => "Low",
            Difficulty::Moderate => "Moderate",
            Difficulty::High => "High",
            Difficulty::Facile => "Facile",
            Difficulty::Media => "Media",
            Difficulty::Difficile => "Difficile",
            Difficulty::Letale => "Letale",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Character level, always within 1..=20
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "u8")]
pub struct Level(u8);

impl Level {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 20;

    pub fn new(value: i32) -> Result<Self, ValidationError> {
        if value < Self::MIN as i32 || value > Self::MAX as i32 {
            return Err(ValidationError::LevelOutOfRange(value));
        }
        Ok(Level(value as u8))
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    /// Every valid level, ascending
    pub fn all() -> impl Iterator<Item = Level> {
        (Self::MIN..=Self::MAX).map(Level)
    }
}

impl TryFrom<i32> for Level {
    type Error = ValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Level::new(value)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> u8 {
        level.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How the caller assembled the party's levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartyMode {
    /// Every character shares one level
    Same,
    /// Each character's level is given explicitly
    Different,
}

impl PartyMode {
    /// Parse a party mode, ignoring case
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        match value.to_lowercase().as_str() {
            "same" => Ok(PartyMode::Same),
            "different" => Ok(PartyMode::Different),
            _ => Err(ValidationError::InvalidPartyMode(value.to_string())),
        }
    }

    pub fn all() -> &'static [PartyMode] {
        &[PartyMode::Same, PartyMode::Different]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PartyMode::Same => "same",
            PartyMode::Different => "different",
        }
    }
}

impl fmt::Display for PartyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartyMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PartyMode::parse(s)
    }
}
