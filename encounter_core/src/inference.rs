//! 2014 difficulty inference
//!
//! Finds the difficulty whose summed party threshold lies nearest to a
//! computed total. Ties keep the earlier difficulty in canonical order
//! (Facile, Media, Difficile, Letale).

use crate::party::Party;
use ruleset_core::{Difficulty, Ruleset};
use xp_tables_core::RulesRepository;

/// Party threshold for one difficulty, counting unresolved entries as 0
///
/// An unresolved entry understates the sum and can bias the match toward
/// a difficulty with more gaps in the table. Callers rely on this, so it
/// is kept.
fn lenient_party_threshold(
    repo: &dyn RulesRepository,
    party: &Party,
    difficulty: Difficulty,
) -> u64 {
    party
        .characters()
        .iter()
        .map(|character| match repo.xp_threshold_2014(character.level(), difficulty) {
            Ok(threshold) => threshold as u64,
            Err(e) => {
                tracing::debug!("Skipping unresolved 2014 threshold: {}", e);
                0
            }
        })
        .sum()
}

/// Infer which 2014 difficulty `total_xp` corresponds to for `party`
///
/// Returns `None` only if the repository lists no 2014 difficulties.
pub fn infer_difficulty_2014(
    repo: &dyn RulesRepository,
    party: &Party,
    total_xp: u64,
) -> Option<Difficulty> {
    let mut best: Option<(Difficulty, u64)> = None;

    for difficulty in repo.all_difficulties(Ruleset::Edition2014) {
        let candidate = lenient_party_threshold(repo, party, difficulty);
        let difference = total_xp.abs_diff(candidate);

        // Strictly smaller only, so the first minimum wins ties
        if best.map_or(true, |(_, min)| difference < min) {
            best = Some((difficulty, difference));
        }
    }

    best.map(|(difficulty, _)| difficulty)
}
