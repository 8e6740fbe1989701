//! Fixture data model - entries, matches, rounds, brackets, pools, schedules
//!
//! Level 4 - Data types shared by every generator

use std::fmt;

use serde::{Serialize, Serializer};

/// One side of a match
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Entry {
    /// A concrete entrant
    Team(String),
    /// Empty slot; the opponent advances automatically
    Bye,
    /// Winner of an earlier knockout match (both numbers 1-based)
    Winner { round: usize, match_number: usize },
    /// Final league position, resolved once the league is played
    Standing(usize),
    /// Winner of a playoff semi-final
    SemifinalWinner(usize),
}

impl Entry {
    pub fn team(name: impl Into<String>) -> Self {
        Entry::Team(name.into())
    }

    pub fn is_bye(&self) -> bool {
        matches!(self, Entry::Bye)
    }

    /// Team name, if this entry is a concrete team
    pub fn team_name(&self) -> Option<&str> {
        match self {
            Entry::Team(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Team(name) => f.write_str(name),
            Entry::Bye => f.write_str("BYE"),
            Entry::Winner {
                round,
                match_number,
            } => write!(f, "Winner of Match {}, Round {}", match_number, round),
            Entry::Standing(rank) => write!(f, "{} Place", ordinal(*rank)),
            Entry::SemifinalWinner(n) => write!(f, "Winner of Semifinal {}", n),
        }
    }
}

impl Serialize for Entry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// English ordinal: 1st, 2nd, 3rd, 4th, 11th, 21st, ...
fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

/// A pairing of two entries
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Match {
    pub home: Entry,
    pub away: Entry,
}

impl Match {
    pub fn new(home: Entry, away: Entry) -> Self {
        Self { home, away }
    }

    /// Exactly one side is a bye
    pub fn is_bye(&self) -> bool {
        self.home.is_bye() != self.away.is_bye()
    }

    /// The side that advances without playing, for bye matches
    pub fn walkover(&self) -> Option<&Entry> {
        match (&self.home, &self.away) {
            (Entry::Bye, Entry::Bye) => None,
            (Entry::Bye, other) | (other, Entry::Bye) => Some(other),
            _ => None,
        }
    }

    /// Whether the named team appears on either side
    pub fn involves(&self, team: &str) -> bool {
        self.home.team_name() == Some(team) || self.away.team_name() == Some(team)
    }
}

/// Which phase of a competition a round belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Knockout,
    League,
    Semifinal,
    Final,
}

/// An ordered list of matches played together
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Round {
    /// 1-based position within its bracket or schedule
    pub number: usize,
    pub stage: Stage,
    pub matches: Vec<Match>,
}

impl Round {
    pub fn new(number: usize, stage: Stage, matches: Vec<Match>) -> Self {
        Self {
            number,
            stage,
            matches,
        }
    }

    /// Matches that need both sides to turn up
    pub fn playable(&self) -> impl Iterator<Item = &Match> {
        self.matches.iter().filter(|m| !m.is_bye())
    }

    pub fn bye_count(&self) -> usize {
        self.matches.iter().filter(|m| m.is_bye()).count()
    }

    /// Heading used by text renderers
    pub fn title(&self) -> String {
        match self.stage {
            Stage::Semifinal => "Semifinals".to_string(),
            Stage::Final => "Final".to_string(),
            Stage::Knockout | Stage::League => format!("Round {}", self.number),
        }
    }
}

/// Single-elimination bracket, round 1 first
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Bracket {
    pub rounds: Vec<Round>,
    /// Set only when the field was a single team
    #[serde(skip_serializing_if = "Option::is_none")]
    pub champion: Option<String>,
}

impl Bracket {
    pub fn empty() -> Self {
        Self::default()
    }

    /// One-team field: no matches, the team wins by default
    pub fn walkover(team: String) -> Self {
        Self {
            rounds: Vec::new(),
            champion: Some(team),
        }
    }

    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    pub fn first_round(&self) -> Option<&Round> {
        self.rounds.first()
    }

    pub fn final_match(&self) -> Option<&Match> {
        self.rounds
            .last()
            .filter(|r| r.matches.len() == 1)
            .and_then(|r| r.matches.first())
    }

    /// Round-1 slots in bracket order, two per match
    pub fn slots(&self) -> Vec<&Entry> {
        self.first_round()
            .map(|r| r.matches.iter().flat_map(|m| [&m.home, &m.away]).collect())
            .unwrap_or_default()
    }
}

/// Independently bracketed subset of a large field
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Pool {
    pub name: String,
    pub teams: Vec<String>,
    #[serde(flatten)]
    pub bracket: Bracket,
}

/// Output of knockout generation
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum KnockoutResult {
    Single(Bracket),
    Pooled { pools: Vec<Pool> },
}

impl KnockoutResult {
    /// Every bracket with its pool name (`None` for a single bracket)
    pub fn brackets(&self) -> Vec<(Option<&str>, &Bracket)> {
        match self {
            KnockoutResult::Single(bracket) => vec![(None, bracket)],
            KnockoutResult::Pooled { pools } => pools
                .iter()
                .map(|p| (Some(p.name.as_str()), &p.bracket))
                .collect(),
        }
    }

    pub fn is_pooled(&self) -> bool {
        matches!(self, KnockoutResult::Pooled { .. })
    }
}

/// Round-robin league followed by its playoff stage
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Schedule {
    pub league: Vec<Round>,
    pub playoffs: Vec<Round>,
}

impl Schedule {
    /// League rounds then playoff rounds, as one sequence
    pub fn rounds(&self) -> impl Iterator<Item = &Round> {
        self.league.iter().chain(self.playoffs.iter())
    }

    pub fn into_rounds(self) -> Vec<Round> {
        let mut rounds = self.league;
        rounds.extend(self.playoffs);
        rounds
    }

    pub fn league_match_count(&self) -> usize {
        self.league.iter().map(|r| r.matches.len()).sum()
    }
}
