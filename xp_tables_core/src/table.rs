use crate::config::LevelRowConfig;
use crate::LookupError;
use ruleset_core::{Difficulty, Level, Ruleset};
use std::collections::{BTreeMap, HashMap};

/// Per-level, per-difficulty XP values for one ruleset
///
/// Rows may be sparse: a level can be absent, or present without every
/// difficulty. Missing pairs surface as [`LookupError`].
#[derive(Debug, Clone)]
pub struct LevelTable {
    ruleset: Ruleset,
    rows: BTreeMap<Level, HashMap<Difficulty, u32>>,
}

impl LevelTable {
    /// Build a table from literal `(level, [xp per canonical difficulty])` rows
    pub(crate) fn from_rows<const N: usize>(ruleset: Ruleset, rows: &[(u8, [u32; N])]) -> Self {
        let difficulties = ruleset.difficulties();
        let rows: BTreeMap<Level, HashMap<Difficulty, u32>> = rows
            .iter()
            .filter_map(|(level, values)| {
                let level = Level::new(*level as i32).ok()?;
                let row: HashMap<Difficulty, u32> = difficulties
                    .iter()
                    .copied()
                    .zip(values.iter().copied())
                    .collect();
                Some((level, row))
            })
            .collect();

        LevelTable { ruleset, rows }
    }

    /// Parse a table from config rows, validating levels and labels
    pub(crate) fn from_config(
        ruleset: Ruleset,
        config: Vec<LevelRowConfig>,
    ) -> Result<Self, String> {
        let mut rows = BTreeMap::new();

        for row in config {
            let level = Level::new(row.level).map_err(|e| e.to_string())?;
            if rows.contains_key(&level) {
                return Err(format!("duplicate level {} in {} table", level, ruleset));
            }

            let values = row
                .xp
                .into_iter()
                .map(|(label, xp)| {
                    Difficulty::parse(&label, ruleset)
                        .map(|difficulty| (difficulty, xp))
                        .map_err(|e| e.to_string())
                })
                .collect::<Result<HashMap<_, _>, _>>()?;

            rows.insert(level, values);
        }

        Ok(LevelTable { ruleset, rows })
    }

    pub fn ruleset(&self) -> Ruleset {
        self.ruleset
    }

    /// Look up the XP value for a level and difficulty
    pub fn get(&self, level: Level, difficulty: Difficulty) -> Result<u32, LookupError> {
        let row = self.rows.get(&level).ok_or(LookupError::UnsupportedLevel {
            ruleset: self.ruleset,
            level,
        })?;

        row.get(&difficulty)
            .copied()
            .ok_or(LookupError::UnsupportedDifficulty {
                ruleset: self.ruleset,
                difficulty,
            })
    }

    /// Levels with at least one row, ascending
    pub fn levels(&self) -> impl Iterator<Item = Level> + '_ {
        self.rows.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
