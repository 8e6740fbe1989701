//! Configuration types for fixture generation
//!
//! Level 4 - Utilities and configuration

use crate::error::{FixtureError, Result};
use crate::pools::DEFAULT_POOL_THRESHOLD;
use crate::validate::validate_pool_threshold;

/// Tournament format
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TournamentFormat {
    /// Single elimination, pooled for large fields
    Knockout,
    /// Everyone plays everyone, then playoffs
    RoundRobin,
}

impl Default for TournamentFormat {
    fn default() -> Self {
        TournamentFormat::Knockout
    }
}

impl std::str::FromStr for TournamentFormat {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "knockout" => Ok(TournamentFormat::Knockout),
            "round_robin" | "league" => Ok(TournamentFormat::RoundRobin),
            other => Err(FixtureError::Configuration(format!(
                "unknown tournament format '{}'",
                other
            ))),
        }
    }
}

/// Generator configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Largest field bracketed without pools (power of two)
    pub pool_threshold: usize,
    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            pool_threshold: DEFAULT_POOL_THRESHOLD,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Set pool threshold
    pub fn with_pool_threshold(mut self, pool_threshold: usize) -> Self {
        self.pool_threshold = pool_threshold;
        self
    }

    /// Set random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check every field before any generation runs
    pub fn validate(&self) -> Result<()> {
        validate_pool_threshold(self.pool_threshold)
    }
}

/// Parse a textual RNG seed (decimal or `0x` hex)
pub fn parse_seed(raw: &str) -> Result<u64> {
    let trimmed = raw.trim();
    let parsed = match trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => trimmed.parse::<u64>(),
    };
    parsed.map_err(|e| FixtureError::Configuration(format!("invalid seed '{}': {}", raw, e)))
}
