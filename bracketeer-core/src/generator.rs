//! Fixture generator - the entry point adapters talk to
//!
//! Level 1 - Orchestration

use serde::Serialize;

use crate::config::{GeneratorConfig, TournamentFormat};
use crate::error::Result;
use crate::fixture::{KnockoutResult, Schedule};
use crate::knockout::generate_knockout;
use crate::rng::SeededRng;
use crate::round_robin::generate_round_robin;

/// Fixtures for either format
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Fixtures {
    Knockout(KnockoutResult),
    RoundRobin(Schedule),
}

/// Owns a validated configuration and its own random source.
///
/// One generator per tournament request: nothing is shared between
/// instances, so separate generators can run on separate threads.
#[derive(Clone, Debug)]
pub struct FixtureGenerator {
    config: GeneratorConfig,
    rng: SeededRng,
}

impl FixtureGenerator {
    /// Validate `config` and seed the random source
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        let rng = SeededRng::from_option(config.seed);
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Knockout bracket(s) for `teams` with optional ranked `seeds`
    pub fn knockout(&mut self, teams: &[String], seeds: &[String]) -> Result<KnockoutResult> {
        tracing::debug!(
            "Generating knockout: {} teams, {} seeds",
            teams.len(),
            seeds.len()
        );
        generate_knockout(teams, seeds, self.config.pool_threshold, &mut self.rng)
    }

    /// League schedule plus playoffs for `teams`
    pub fn round_robin(&self, teams: &[String]) -> Result<Schedule> {
        generate_round_robin(teams)
    }

    /// Dispatch on `format`; seeds only matter for knockouts
    pub fn generate(
        &mut self,
        format: TournamentFormat,
        teams: &[String],
        seeds: &[String],
    ) -> Result<Fixtures> {
        match format {
            TournamentFormat::Knockout => self.knockout(teams, seeds).map(Fixtures::Knockout),
            TournamentFormat::RoundRobin => self.round_robin(teams).map(Fixtures::RoundRobin),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FixtureError;

    fn teams(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("Team {}", i)).collect()
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let result = FixtureGenerator::new(GeneratorConfig::default().with_pool_threshold(3));
        assert!(matches!(result, Err(FixtureError::Configuration(_))));
    }

    #[test]
    fn test_same_seed_same_bracket() {
        let config = GeneratorConfig::default().with_seed(42);
        let mut a = FixtureGenerator::new(config.clone()).unwrap();
        let mut b = FixtureGenerator::new(config).unwrap();

        assert_eq!(
            a.knockout(&teams(13), &[]).unwrap(),
            b.knockout(&teams(13), &[]).unwrap()
        );
    }

    #[test]
    fn test_generate_dispatch() {
        let mut generator = FixtureGenerator::new(GeneratorConfig::default().with_seed(1)).unwrap();

        let knockout = generator
            .generate(TournamentFormat::Knockout, &teams(4), &[])
            .unwrap();
        assert!(matches!(knockout, Fixtures::Knockout(KnockoutResult::Single(_))));

        let league = generator
            .generate(TournamentFormat::RoundRobin, &teams(4), &[])
            .unwrap();
        assert!(matches!(league, Fixtures::RoundRobin(_)));
    }
}
