use super::constants::{BRACKET_SIZE, FIRST_ROUND_PAIRINGS, MIN_ENTRANTS};
use super::types::{Entrant, GenerationMode, Match};
use crate::roster::Participant;
use crate::types::AppResult;
use anyhow::anyhow;
use rand::{seq::SliceRandom, Rng};

/// Builds the 8-match first round over 16 seeds from an input pool and a
/// generation mode. Pure: the only state it touches is the caller's RNG, and
/// that only in `Random` mode.
pub fn generate(
    participants: &[Participant],
    mode: GenerationMode,
    rng: &mut impl Rng,
) -> AppResult<Vec<Match>> {
    if participants.len() < MIN_ENTRANTS {
        return Err(anyhow!(
            "At least {MIN_ENTRANTS} entrants are required to build a bracket."
        ));
    }

    let mut ordered = participants.to_vec();
    match mode {
        // Stable sort: equal scores keep their presented order.
        GenerationMode::SkillOrdered => ordered.sort_by(|a, b| b.score.cmp(&a.score)),
        GenerationMode::Random => ordered.shuffle(rng),
    }

    if ordered.len() > BRACKET_SIZE {
        log::info!(
            "{} entrants past seed {BRACKET_SIZE} dropped from the bracket",
            ordered.len() - BRACKET_SIZE
        );
    }

    let seeds = assign_seeds(ordered);

    Ok(FIRST_ROUND_PAIRINGS
        .iter()
        .map(|&(home_seed, away_seed)| Match {
            label: format!("S{home_seed} vs S{away_seed}"),
            home_seed,
            away_seed,
            home: seeds[home_seed - 1].clone(),
            away: seeds[away_seed - 1].clone(),
        })
        .collect())
}

// Seed i+1 = i-th entrant in presented order; seats past the entrant count
// hold byes.
fn assign_seeds(ordered: Vec<Participant>) -> [Entrant; BRACKET_SIZE] {
    let mut seeds: [Entrant; BRACKET_SIZE] = std::array::from_fn(|_| Entrant::Bye);
    for (idx, participant) in ordered.into_iter().take(BRACKET_SIZE).enumerate() {
        seeds[idx] = Entrant::Player(participant);
    }
    seeds
}
