//! Bracketeer Core - Fixture generation for tournaments
//!
//! This crate turns a list of team names into fixtures:
//! - Knockout brackets with canonical seeding and byes
//! - Pool splitting for fields too large for one bracket
//! - Round-robin leagues (circle method) with a playoff stage
//! - Roster parsing for plain-text and CSV team lists
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: FixtureGenerator, generate_knockout (orchestration)
//! - Level 2: build_bracket, generate_round_robin (phases)
//! - Level 3: split_pools, seeding and placement steps
//! - Level 4: slot arithmetic, validation, configuration

mod config;
mod error;
mod fixture;
mod generator;
mod knockout;
mod pools;
mod rng;
mod roster;
mod round_robin;
mod seeding;
mod validate;

pub use config::{parse_seed, GeneratorConfig, TournamentFormat};
pub use error::{FixtureError, Result};
pub use fixture::{Bracket, Entry, KnockoutResult, Match, Pool, Round, Schedule, Stage};
pub use generator::{FixtureGenerator, Fixtures};
pub use knockout::{build_bracket, generate_knockout};
pub use pools::{pool_count, pool_label, split_pools, PoolDraw, DEFAULT_POOL_THRESHOLD};
pub use rng::{NoShuffle, RandomSource, SeededRng};
pub use roster::{parse_csv, parse_lines, parse_list, parse_roster, RosterFormat};
pub use round_robin::generate_round_robin;
pub use seeding::{assign_byes, next_power_of_two, seed_positions};
