//! Knockout bracket generation - seeding, byes, pools and placeholder rounds
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: generate_knockout (orchestration, pooling)
//! - Level 2: build_bracket (one bracket from one field)
//! - Level 3: rank_field, place_field, first_round, later_rounds (steps)
//! - Level 4: slot arithmetic lives in `seeding`

use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::Result;
use crate::fixture::{Bracket, Entry, KnockoutResult, Match, Pool, Round, Stage};
use crate::pools::split_pools;
use crate::rng::RandomSource;
use crate::seeding::{assign_byes, next_power_of_two, seed_positions};
use crate::validate::{validate_pool_threshold, validate_teams};

// ============================================================================
// Level 1 - Orchestration
// ============================================================================

/// Generate knockout fixtures for `teams`.
///
/// Fields above `pool_threshold` are split into pools first and every pool
/// gets its own bracket. `seeds` ranks the strongest teams (index 0 = seed 1);
/// names that do not appear among `teams` are ignored.
///
/// # Errors
/// `InvalidInput` for a blank team name, `Configuration` for a threshold that
/// is not a power of two >= 2. Nothing is generated in either case.
pub fn generate_knockout<R: RandomSource>(
    teams: &[String],
    seeds: &[String],
    pool_threshold: usize,
    rng: &mut R,
) -> Result<KnockoutResult> {
    validate_pool_threshold(pool_threshold)?;
    validate_teams(teams)?;

    if teams.len() <= pool_threshold {
        return Ok(KnockoutResult::Single(build_bracket(teams, seeds, rng)));
    }

    let seeds = known_seeds(teams, seeds);
    let pools = split_pools(teams, pool_threshold, rng)
        .into_iter()
        .map(|draw| {
            let pool_seeds = seeds_in_pool(&draw.teams, &seeds);
            let bracket = build_bracket(&draw.teams, &pool_seeds, rng);
            Pool {
                name: draw.name,
                teams: draw.teams,
                bracket,
            }
        })
        .collect();

    Ok(KnockoutResult::Pooled { pools })
}

/// Seeds naming a team somewhere in the full field, in rank order
fn known_seeds(teams: &[String], seeds: &[String]) -> Vec<String> {
    let field: FxHashSet<&str> = teams.iter().map(String::as_str).collect();
    seeds
        .iter()
        .filter(|seed| {
            let known = field.contains(seed.as_str());
            if !known {
                tracing::warn!("Ignoring seed '{}': not among the entered teams", seed);
            }
            known
        })
        .cloned()
        .collect()
}

/// The seeds drawn into one pool, keeping their relative rank
fn seeds_in_pool(pool_teams: &[String], seeds: &[String]) -> Vec<String> {
    seeds
        .iter()
        .filter(|seed| pool_teams.contains(*seed))
        .cloned()
        .collect()
}

// ============================================================================
// Level 2 - Phases
// ============================================================================

/// Build a single bracket, ignoring any pool threshold.
///
/// - 0 teams: no rounds
/// - 1 team: no rounds, that team is the champion
/// - otherwise round 1 over `next_power_of_two(n)` slots followed by
///   placeholder rounds down to the final
pub fn build_bracket<R: RandomSource>(teams: &[String], seeds: &[String], rng: &mut R) -> Bracket {
    match teams.len() {
        0 => return Bracket::empty(),
        1 => return Bracket::walkover(teams[0].clone()),
        _ => {}
    }

    let field = rank_field(teams, seeds);
    let slots = place_field(teams, field, rng);

    let first = first_round(slots);
    let mut rounds = later_rounds(first.matches.len());
    rounds.insert(0, first);
    label_closing_rounds(&mut rounds);

    Bracket {
        rounds,
        champion: None,
    }
}

// ============================================================================
// Level 3 - Steps
// ============================================================================

/// Team indices split into explicit seeds (rank order) and the rest (input order)
#[derive(Clone, Debug, PartialEq, Eq)]
struct RankedField {
    seeded: Vec<usize>,
    unseeded: Vec<usize>,
}

/// Match seed names to team entries.
///
/// Each seed claims the first unclaimed entry with exactly that name, so
/// duplicate team names can be seeded separately. Seed ranks are compacted:
/// the k-th matched seed is rank k.
fn rank_field(teams: &[String], seeds: &[String]) -> RankedField {
    // name -> entry indices, earliest last so `pop` yields input order
    let mut by_name: FxHashMap<&str, Vec<usize>> = FxHashMap::default();
    for (index, name) in teams.iter().enumerate().rev() {
        by_name.entry(name.as_str()).or_default().push(index);
    }

    let mut claimed = vec![false; teams.len()];
    let mut seeded = Vec::new();

    for seed in seeds {
        match by_name.get_mut(seed.as_str()).and_then(|entries| entries.pop()) {
            Some(index) => {
                claimed[index] = true;
                seeded.push(index);
            }
            None => {
                tracing::warn!("Ignoring seed '{}': not among the entered teams", seed);
            }
        }
    }

    let unseeded = (0..teams.len()).filter(|&i| !claimed[i]).collect();

    RankedField { seeded, unseeded }
}

/// Fill the `next_power_of_two(n)` round-1 slots.
///
/// 1. Bye slots: the partner slot of every bye anchor from `assign_byes`.
/// 2. Seeds: canonical position from `seed_positions`. A seed whose canonical
///    slot is already a bye joins the draw instead.
/// 3. Draw: everyone else is shuffled into the remaining slots, top to bottom.
fn place_field<R: RandomSource>(teams: &[String], field: RankedField, rng: &mut R) -> Vec<Entry> {
    let entrant_count = teams.len();
    let slot_count = next_power_of_two(entrant_count);
    let positions = seed_positions(slot_count);

    let mut slots: Vec<Option<Entry>> = vec![None; slot_count];

    for anchor in assign_byes(entrant_count, slot_count) {
        let partner_rank = slot_count + 1 - anchor;
        slots[positions[partner_rank - 1] - 1] = Some(Entry::Bye);
    }

    let mut draw = Vec::with_capacity(entrant_count);
    for (rank0, &team) in field.seeded.iter().enumerate() {
        let slot = positions[rank0] - 1;
        if slots[slot].is_none() {
            slots[slot] = Some(Entry::Team(teams[team].clone()));
        } else {
            tracing::debug!(
                "Seed {} ({}) lands on a bye slot, drawing it with the field",
                rank0 + 1,
                teams[team]
            );
            draw.push(team);
        }
    }
    draw.extend(field.unseeded);
    rng.shuffle(&mut draw);

    let mut draw = draw.into_iter();
    slots
        .into_iter()
        .map(|slot| match slot {
            Some(entry) => entry,
            // Bye slots + entrants == slot_count, so the draw never runs dry
            None => draw
                .next()
                .map(|team| Entry::Team(teams[team].clone()))
                .unwrap_or(Entry::Bye),
        })
        .collect()
}

/// Pair adjacent slots into round-1 matches
fn first_round(slots: Vec<Entry>) -> Round {
    let mut matches = Vec::with_capacity(slots.len() / 2);
    let mut slots = slots.into_iter();
    while let (Some(home), Some(away)) = (slots.next(), slots.next()) {
        matches.push(Match::new(home, away));
    }
    Round::new(1, Stage::Knockout, matches)
}

/// Placeholder rounds fed by the winners of the previous round.
///
/// Each round halves the match count (rounding up), ending at the final.
fn later_rounds(first_round_size: usize) -> Vec<Round> {
    let mut rounds = Vec::new();
    let mut previous = first_round_size;
    let mut number = 1;

    while previous > 1 {
        let size = (previous + 1) / 2;
        let matches = (0..size)
            .map(|i| {
                let home = Entry::Winner {
                    round: number,
                    match_number: 2 * i + 1,
                };
                let away = if 2 * i + 2 <= previous {
                    Entry::Winner {
                        round: number,
                        match_number: 2 * i + 2,
                    }
                } else {
                    Entry::Bye
                };
                Match::new(home, away)
            })
            .collect();

        number += 1;
        rounds.push(Round::new(number, Stage::Knockout, matches));
        previous = size;
    }

    rounds
}

/// Mark the last round as the final and a two-match round before it as semi-finals
fn label_closing_rounds(rounds: &mut [Round]) {
    let count = rounds.len();
    if let Some(last) = rounds.last_mut() {
        last.stage = Stage::Final;
    }
    if count >= 2 && rounds[count - 2].matches.len() == 2 {
        rounds[count - 2].stage = Stage::Semifinal;
    }
}
