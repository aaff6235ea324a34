//! Application service - the entry point presentation layers call

use crate::config::EngineConfig;
use crate::encounter::{Encounter, XpCalculationResult};
use crate::error::EncounterError;
use crate::inference::infer_difficulty_2014;
use crate::party::{Party, PartyComposition};
use ruleset_core::{Difficulty, Level, PartyMode, Ruleset, ValidationError};
use serde::{Deserialize, Serialize};
use xp_tables_core::RulesRepository;

/// Raw request to calculate encounter XP
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculateXpRequest {
    pub ruleset: String,
    pub party_mode: String,
    pub difficulty: String,
    pub character_levels: Vec<i32>,
    /// Read for the 2014 rules only; absent counts as 0
    #[serde(default)]
    pub num_monsters: Option<i32>,
}

/// Encounter use cases over a shared, read-only rules repository
#[derive(Debug, Clone)]
pub struct EncounterService<R> {
    repository: R,
    config: EngineConfig,
}

impl<R: RulesRepository> EncounterService<R> {
    pub fn new(repository: R) -> Self {
        Self::with_config(repository, EngineConfig::default())
    }

    pub fn with_config(repository: R, config: EngineConfig) -> Self {
        EncounterService { repository, config }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validate a request, compute its total XP, and for 2014 infer the
    /// difficulty the total actually lands in
    pub fn calculate_xp(
        &self,
        request: &CalculateXpRequest,
    ) -> Result<XpCalculationResult, EncounterError> {
        tracing::debug!(
            ruleset = %request.ruleset,
            difficulty = %request.difficulty,
            character_levels = ?request.character_levels,
            num_monsters = ?request.num_monsters,
            "Calculating XP"
        );

        let ruleset = Ruleset::parse(&request.ruleset)?;
        PartyMode::parse(&request.party_mode)?;
        let difficulty = Difficulty::parse(&request.difficulty, ruleset)?;
        let party = Party::new(&request.character_levels)?;

        let mut encounter = Encounter::new(party, ruleset, difficulty);
        if ruleset == Ruleset::Edition2014 {
            encounter = encounter.with_monsters(request.num_monsters.unwrap_or(0));
        }

        let total_xp = encounter.calculate_xp(&self.repository)?;
        let mut result = encounter.to_result();

        if ruleset == Ruleset::Edition2014 {
            result.calculated_difficulty =
                infer_difficulty_2014(&self.repository, &encounter.party, total_xp);
            if result.calculated_difficulty.is_none() {
                tracing::warn!("Failed to infer 2014 difficulty for total {}", total_xp);
            }
        }

        tracing::info!(
            total_xp,
            party_size = result.party_size,
            ruleset = %ruleset,
            "XP calculation completed"
        );

        Ok(result)
    }

    /// Difficulty labels of a ruleset in canonical order
    pub fn available_difficulties(&self, ruleset: &str) -> Result<Vec<String>, ValidationError> {
        let ruleset = Ruleset::parse(ruleset)?;
        Ok(self
            .repository
            .all_difficulties(ruleset)
            .iter()
            .map(|d| d.to_string())
            .collect())
    }

    pub fn supported_levels(&self) -> Vec<u8> {
        self.repository
            .supported_levels()
            .into_iter()
            .map(|level| level.get())
            .collect()
    }

    /// Pre-flight check of raw party inputs before a `Party` is built
    ///
    /// `levels` is read in different mode, `same_level`/`same_count` in
    /// same mode.
    pub fn validate_party_composition(
        &self,
        party_mode: &str,
        levels: &[i32],
        same_level: i32,
        same_count: i32,
    ) -> Result<(), ValidationError> {
        let composition = match PartyMode::parse(party_mode)? {
            PartyMode::Same => PartyComposition::Same {
                level: same_level,
                count: same_count,
            },
            PartyMode::Different => PartyComposition::Different {
                levels: levels.to_vec(),
            },
        };
        self.validate_composition(&composition)
    }

    /// Check a composition against the level range and party size limit
    pub fn validate_composition(
        &self,
        composition: &PartyComposition,
    ) -> Result<(), ValidationError> {
        let max = self.config.max_party_size;

        match composition {
            PartyComposition::Same { level, count } => {
                if Level::new(*level).is_err() {
                    return Err(ValidationError::SameLevelOutOfRange(*level));
                }
                if *count < 1 || *count as usize > max {
                    return Err(ValidationError::SameCountOutOfRange { count: *count, max });
                }
            }
            PartyComposition::Different { levels } => {
                if levels.is_empty() {
                    return Err(ValidationError::EmptyParty);
                }
                if levels.len() > max {
                    return Err(ValidationError::PartySizeOutOfRange {
                        size: levels.len(),
                        max,
                    });
                }
                for (i, &value) in levels.iter().enumerate() {
                    if Level::new(value).is_err() {
                        return Err(ValidationError::InvalidCharacterLevel {
                            position: i + 1,
                            value,
                        });
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xp_tables_core::{LookupError, RulesTables};

    fn service() -> EncounterService<RulesTables> {
        EncounterService::new(RulesTables::standard())
    }

    fn request(
        ruleset: &str,
        difficulty: &str,
        levels: &[i32],
        monsters: Option<i32>,
    ) -> CalculateXpRequest {
        CalculateXpRequest {
            ruleset: ruleset.to_string(),
            party_mode: "different".to_string(),
            difficulty: difficulty.to_string(),
            character_levels: levels.to_vec(),
            num_monsters: monsters,
        }
    }

    #[test]
    fn test_calculate_xp_2024() {
        let cases: [(&[i32], &str, u64); 3] = [
            (&[5], "Moderate", 750),
            (&[3, 3, 3, 3], "High", 1600),
            (&[1, 5, 10, 20], "Low", 5200),
        ];
        for (levels, difficulty, expected) in cases {
            let result = service()
                .calculate_xp(&request("2024", difficulty, levels, None))
                .unwrap();
            assert_eq!(result.total_xp, expected);
            assert_eq!(result.ruleset, Ruleset::Edition2024);
            assert_eq!(result.party_size, levels.len());
            assert_eq!(result.calculated_difficulty, None);
        }
    }

    #[test]
    fn test_calculate_xp_2014() {
        let cases: [(&[i32], &str, i32, u64); 3] = [
            (&[5], "Media", 1, 500),
            (&[5, 5, 5, 5], "Media", 2, 3000),
            (&[3, 5, 7], "Difficile", 5, 5187),
        ];
        for (levels, difficulty, monsters, expected) in cases {
            let result = service()
                .calculate_xp(&request("2014", difficulty, levels, Some(monsters)))
                .unwrap();
            assert_eq!(result.total_xp, expected);
            assert!(result.calculated_difficulty.is_some());
        }
    }

    #[test]
    fn test_calculate_xp_2014_infers_difficulty() {
        let result = service()
            .calculate_xp(&request("2014", "Media", &[5, 5, 5, 5], Some(2)))
            .unwrap();
        assert_eq!(result.calculated_difficulty, Some(Difficulty::Difficile));

        let result = service()
            .calculate_xp(&request("2014", "Media", &[5], Some(1)))
            .unwrap();
        assert_eq!(result.calculated_difficulty, Some(Difficulty::Media));
    }

    #[test]
    fn test_cross_ruleset_difficulty_is_validation_error() {
        let err = service()
            .calculate_xp(&request("2024", "Facile", &[5], None))
            .unwrap_err();
        assert!(err.is_validation());
        assert!(matches!(
            err,
            EncounterError::Validation(ValidationError::InvalidDifficulty { .. })
        ));

        let err = service()
            .calculate_xp(&request("2014", "Moderate", &[5], Some(1)))
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_out_of_range_levels() {
        for ruleset in ["2024", "2014"] {
            let difficulty = if ruleset == "2024" { "Low" } else { "Facile" };
            for level in [0, 21] {
                let err = service()
                    .calculate_xp(&request(ruleset, difficulty, &[level], Some(1)))
                    .unwrap_err();
                assert!(err.is_validation(), "{} level {}", ruleset, level);
            }
        }
    }

    #[test]
    fn test_invalid_ruleset_and_mode() {
        let err = service()
            .calculate_xp(&request("5e", "Low", &[5], None))
            .unwrap_err();
        assert_eq!(
            err,
            EncounterError::Validation(ValidationError::InvalidRuleset("5e".to_string()))
        );

        let mut req = request("2024", "Low", &[5], None);
        req.party_mode = "mixed".to_string();
        assert!(service().calculate_xp(&req).unwrap_err().is_validation());
    }

    #[test]
    fn test_empty_party() {
        let err = service()
            .calculate_xp(&request("2024", "Low", &[], None))
            .unwrap_err();
        assert_eq!(err, EncounterError::Validation(ValidationError::EmptyParty));
    }

    #[test]
    fn test_2014_missing_monster_count_is_lookup_error() {
        let err = service()
            .calculate_xp(&request("2014", "Media", &[5], None))
            .unwrap_err();
        assert_eq!(err, EncounterError::Lookup(LookupError::InvalidMonsterCount(0)));
        assert!(err.is_lookup());
    }

    #[test]
    fn test_2024_ignores_monster_count() {
        let result = service()
            .calculate_xp(&request("2024", "Moderate", &[5], Some(0)))
            .unwrap();
        assert_eq!(result.total_xp, 750);
    }

    #[test]
    fn test_request_from_json() {
        let req: CalculateXpRequest = serde_json::from_str(
            r#"{"ruleset":"2014","party_mode":"same","difficulty":"Media","character_levels":[5,5]}"#,
        )
        .unwrap();
        assert_eq!(req.num_monsters, None);
        assert_eq!(req.character_levels, vec![5, 5]);
    }

    #[test]
    fn test_available_difficulties() {
        assert_eq!(
            service().available_difficulties("2024").unwrap(),
            vec!["Low", "Moderate", "High"]
        );
        assert_eq!(
            service().available_difficulties("2014").unwrap(),
            vec!["Facile", "Media", "Difficile", "Letale"]
        );
        assert!(service().available_difficulties("1999").is_err());
    }

    #[test]
    fn test_available_difficulties_round_trip() {
        for &ruleset in Ruleset::all() {
            for label in service().available_difficulties(ruleset.as_str()).unwrap() {
                assert!(Difficulty::parse(&label, ruleset).is_ok(), "{} {}", ruleset, label);
            }
        }
    }

    #[test]
    fn test_supported_levels() {
        assert_eq!(service().supported_levels(), (1..=20).collect::<Vec<u8>>());
    }

    #[test]
    fn test_validate_party_composition() {
        let svc = service();
        assert!(svc.validate_party_composition("same", &[], 5, 4).is_ok());
        assert!(svc
            .validate_party_composition("different", &[1, 5, 10, 20], 0, 0)
            .is_ok());

        assert!(matches!(
            svc.validate_party_composition("invalid", &[], 5, 4),
            Err(ValidationError::InvalidPartyMode(_))
        ));
        assert_eq!(
            svc.validate_party_composition("same", &[], 0, 4),
            Err(ValidationError::SameLevelOutOfRange(0))
        );
        assert_eq!(
            svc.validate_party_composition("same", &[], 5, 0),
            Err(ValidationError::SameCountOutOfRange { count: 0, max: 100 })
        );
        assert_eq!(
            svc.validate_party_composition("same", &[], 5, 101),
            Err(ValidationError::SameCountOutOfRange { count: 101, max: 100 })
        );
        assert_eq!(
            svc.validate_party_composition("different", &[], 0, 0),
            Err(ValidationError::EmptyParty)
        );
        assert_eq!(
            svc.validate_party_composition("different", &[1, 0, 10], 0, 0),
            Err(ValidationError::InvalidCharacterLevel {
                position: 2,
                value: 0
            })
        );
    }

    #[test]
    fn test_party_size_limit() {
        let svc = service();
        assert!(svc
            .validate_party_composition("different", &vec![5; 100], 0, 0)
            .is_ok());
        assert_eq!(
            svc.validate_party_composition("different", &vec![5; 101], 0, 0),
            Err(ValidationError::PartySizeOutOfRange { size: 101, max: 100 })
        );
    }

    #[test]
    fn test_configured_party_size_limit() {
        let config = EngineConfig {
            max_party_size: 6,
            ..EngineConfig::default()
        };
        let svc = EncounterService::with_config(RulesTables::standard(), config);
        assert!(svc.validate_party_composition("same", &[], 5, 6).is_ok());
        assert!(svc.validate_party_composition("same", &[], 5, 7).is_err());
    }

    #[test]
    fn test_shared_global_rules() {
        let svc = EncounterService::new(xp_tables_core::rules());
        let result = svc
            .calculate_xp(&request("2024", "Moderate", &[5], None))
            .unwrap();
        assert_eq!(result.total_xp, 750);
    }
}
