//! Read-only option lists and single-entry lookups for presentation layers

use crate::error::EncounterError;
use ruleset_core::{Difficulty, Level, PartyMode, Ruleset};
use serde::Serialize;
use xp_tables_core::{MultiplierBand, RulesRepository};

/// A value and its display label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption<T> {
    pub value: T,
    pub label: String,
}

impl<T> SelectOption<T> {
    fn new(value: T, label: impl Into<String>) -> Self {
        SelectOption {
            value,
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct QueryHandler<R> {
    repository: R,
}

impl<R: RulesRepository> QueryHandler<R> {
    pub fn new(repository: R) -> Self {
        QueryHandler { repository }
    }

    pub fn ruleset_options(&self) -> Vec<SelectOption<String>> {
        Ruleset::all()
            .iter()
            .map(|ruleset| SelectOption::new(ruleset.to_string(), ruleset_label(*ruleset)))
            .collect()
    }

    /// Difficulty options for a ruleset, empty if the ruleset is invalid
    pub fn difficulty_options(&self, ruleset: &str) -> Vec<SelectOption<String>> {
        match Ruleset::parse(ruleset) {
            Ok(ruleset) => self
                .repository
                .all_difficulties(ruleset)
                .iter()
                .map(|d| SelectOption::new(d.to_string(), d.label()))
                .collect(),
            Err(e) => {
                tracing::warn!("Invalid ruleset for difficulty options: {}", e);
                Vec::new()
            }
        }
    }

    pub fn level_options(&self) -> Vec<SelectOption<u8>> {
        self.repository
            .supported_levels()
            .into_iter()
            .map(|level| SelectOption::new(level.get(), level_label(level)))
            .collect()
    }

    pub fn party_mode_options(&self) -> Vec<SelectOption<String>> {
        PartyMode::all()
            .iter()
            .map(|mode| {
                let label = match mode {
                    PartyMode::Same => "All characters same level",
                    PartyMode::Different => "Characters different levels",
                };
                SelectOption::new(mode.to_string(), label)
            })
            .collect()
    }

    /// Single table entry: a 2024 budget or a 2014 threshold
    pub fn xp_threshold(
        &self,
        level: i32,
        difficulty: &str,
        ruleset: &str,
    ) -> Result<u32, EncounterError> {
        let ruleset = Ruleset::parse(ruleset)?;
        let difficulty = Difficulty::parse(difficulty, ruleset)?;
        let level = Level::new(level)?;

        let xp = match ruleset {
            Ruleset::Edition2024 => self.repository.xp_budget_2024(level, difficulty)?,
            Ruleset::Edition2014 => self.repository.xp_threshold_2014(level, difficulty)?,
        };
        Ok(xp)
    }

    pub fn multiplier_ranges(&self) -> Vec<MultiplierBand> {
        self.repository.multiplier_bands()
    }
}

fn ruleset_label(ruleset: Ruleset) -> &'static str {
    match ruleset {
        Ruleset::Edition2024 => "D&D 2024 (One D&D)",
        Ruleset::Edition2014 => "D&D 2014 (5th Edition)",
    }
}

/// "1st Level", "2nd Level", ..., "11th Level", ..., "20th Level"
fn level_label(level: Level) -> String {
    let n = level.get();
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{} Level", n, suffix)
}
