//! Fixture commands - generate knockout or round-robin fixtures
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run_knockout(), run_round_robin() - orchestration
//! - Level 2: load_teams(), report_knockout(), report_schedule()
//! - Level 3: render_knockout() (bracket drawing), render_rounds()
//! - Level 4: formatting utilities

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use bracketeer_core::{
    parse_list, FixtureGenerator, GeneratorConfig, KnockoutResult, Round, Schedule,
};
use bracketeer_server::{KnockoutResponse, RoundRobinResponse};

use crate::bracket_art::draw_bracket;
use crate::roster::load_roster;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct RosterArgs {
    /// Team list file (.txt one per line, .csv first column)
    #[arg(long, value_name = "FILE", conflicts_with = "teams")]
    pub teams_file: Option<PathBuf>,

    /// Comma-separated team names
    #[arg(long, value_name = "A,B,C")]
    pub teams: Option<String>,

    /// Tournament name shown in the output
    #[arg(long, default_value = "Tournament")]
    pub name: String,

    /// Output fixtures as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct KnockoutArgs {
    #[command(flatten)]
    pub roster: RosterArgs,

    /// Comma-separated seeded teams, strongest first
    #[arg(long, value_name = "A,B")]
    pub seeds: Option<String>,
}

#[derive(Args)]
pub struct RoundRobinArgs {
    #[command(flatten)]
    pub roster: RosterArgs,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run knockout command
///
/// 1. Load teams and seeds
/// 2. Generate the bracket(s)
/// 3. Report fixtures
pub fn run_knockout(args: KnockoutArgs, config: GeneratorConfig) -> Result<()> {
    let teams = load_teams(&args.roster)?;
    let seeds = args.seeds.as_deref().map(parse_list).unwrap_or_default();

    tracing::info!(
        "Generating knockout '{}' ({} teams, {} seeds)",
        args.roster.name,
        teams.len(),
        seeds.len()
    );

    let mut generator = FixtureGenerator::new(config)?;
    let fixtures = generator.knockout(&teams, &seeds)?;

    report_knockout(&args.roster, fixtures)
}

/// Run round-robin command
///
/// 1. Load teams
/// 2. Generate league and playoffs
/// 3. Report fixtures
pub fn run_round_robin(args: RoundRobinArgs, config: GeneratorConfig) -> Result<()> {
    let teams = load_teams(&args.roster)?;

    tracing::info!(
        "Generating round robin '{}' ({} teams)",
        args.roster.name,
        teams.len()
    );

    let generator = FixtureGenerator::new(config)?;
    let schedule = generator.round_robin(&teams)?;

    report_schedule(&args.roster, schedule)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Teams from --teams-file or --teams; one of them is required
fn load_teams(args: &RosterArgs) -> Result<Vec<String>> {
    match (&args.teams_file, &args.teams) {
        (Some(path), _) => load_roster(path),
        (None, Some(list)) => Ok(parse_list(list)),
        (None, None) => anyhow::bail!("Provide teams with --teams-file or --teams"),
    }
}

fn report_knockout(args: &RosterArgs, fixtures: KnockoutResult) -> Result<()> {
    if args.json {
        let output = KnockoutResponse {
            name: args.name.clone(),
            format: "knockout",
            fixtures,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", render_knockout(&args.name, &fixtures));
    }
    Ok(())
}

fn report_schedule(args: &RosterArgs, schedule: Schedule) -> Result<()> {
    if args.json {
        let output = RoundRobinResponse {
            name: args.name.clone(),
            format: "round_robin",
            rounds: schedule.into_rounds(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        let rounds: Vec<&Round> = schedule.rounds().collect();
        let mut out = heading(&args.name, "Round Robin");
        render_rounds(&mut out, &rounds);
        print!("{}", out);
    }
    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Text rendering of a single bracket or of every pool
fn render_knockout(name: &str, fixtures: &KnockoutResult) -> String {
    let mut out = heading(name, "Knockout");

    for (pool, bracket) in fixtures.brackets() {
        if let Some(pool) = pool {
            let _ = writeln!(out, "--- {} ---\n", pool);
        }
        if let Some(champion) = &bracket.champion {
            let _ = writeln!(out, "{} advances unopposed\n", champion);
        }
        if !bracket.rounds.is_empty() {
            out.push_str(&draw_bracket(bracket));
            out.push('\n');
        }
    }

    out
}

fn render_rounds(out: &mut String, rounds: &[&Round]) {
    for round in rounds {
        let _ = writeln!(out, "{}", round.title());
        for m in &round.matches {
            let _ = writeln!(out, "  {} vs {}", m.home, m.away);
        }
        out.push('\n');
    }
}

// ============================================================================
// LEVEL 4 - FORMATTING
// ============================================================================

fn heading(name: &str, format: &str) -> String {
    format!("=== {} ({}) ===\n\n", name, format)
}

// ============================================================================
// TESTS
// ============================================================================
