//! Round-robin league schedule (circle method) and its playoff stage
//!
//! Level 2 - Phases and Level 3 - Steps

use crate::error::Result;
use crate::fixture::{Entry, Match, Round, Schedule, Stage};
use crate::validate::validate_teams;

/// Generate a full league plus playoffs for `teams`.
///
/// Every unordered pair of entries meets exactly once across the league
/// rounds. Odd fields get a synthetic bye and one team sits out each round.
///
/// # Errors
/// `InvalidInput` for a blank team name.
pub fn generate_round_robin(teams: &[String]) -> Result<Schedule> {
    validate_teams(teams)?;

    let league = league_rounds(teams);
    let playoffs = playoff_rounds(teams.len(), league.len());

    tracing::debug!(
        "Round robin: {} teams, {} league rounds, {} playoff rounds",
        teams.len(),
        league.len(),
        playoffs.len()
    );

    Ok(Schedule { league, playoffs })
}

/// Circle method: fix slot 0, rotate the rest one step per round
fn league_rounds(teams: &[String]) -> Vec<Round> {
    let mut slots: Vec<Entry> = teams.iter().cloned().map(Entry::Team).collect();
    if slots.len() % 2 == 1 {
        slots.push(Entry::Bye);
    }

    let n = slots.len();
    let mut rounds = Vec::with_capacity(n.saturating_sub(1));

    for number in 1..n {
        let matches = (0..n / 2)
            .filter_map(|j| {
                let (home, away) = (&slots[j], &slots[n - 1 - j]);
                if home.is_bye() || away.is_bye() {
                    None
                } else {
                    Some(Match::new(home.clone(), away.clone()))
                }
            })
            .collect();
        rounds.push(Round::new(number, Stage::League, matches));

        if let Some(last) = slots.pop() {
            slots.insert(1, last);
        }
    }

    rounds
}

/// Playoffs keyed by final league standing.
///
/// - 5+ teams: semi-finals (1st v 4th, 2nd v 3rd) then a final
/// - 2-4 teams: a final, 1st v 2nd
/// - fewer: nothing
fn playoff_rounds(team_count: usize, league_rounds: usize) -> Vec<Round> {
    let next = league_rounds + 1;

    if team_count >= 5 {
        vec![
            Round::new(
                next,
                Stage::Semifinal,
                vec![
                    Match::new(Entry::Standing(1), Entry::Standing(4)),
                    Match::new(Entry::Standing(2), Entry::Standing(3)),
                ],
            ),
            Round::new(
                next + 1,
                Stage::Final,
                vec![Match::new(
                    Entry::SemifinalWinner(1),
                    Entry::SemifinalWinner(2),
                )],
            ),
        ]
    } else if team_count >= 2 {
        vec![Round::new(
            next,
            Stage::Final,
            vec![Match::new(Entry::Standing(1), Entry::Standing(2))],
        )]
    } else {
        Vec::new()
    }
}
