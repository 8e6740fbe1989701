//! Server state
//!
//! Read-only settings shared by every request. Each request builds its own
//! `FixtureGenerator`, so no random state is shared between requests.

use bracketeer_core::{FixtureGenerator, GeneratorConfig, Result};

/// Server-wide shared state
#[derive(Clone, Debug, Default)]
pub struct ServerState {
    /// Defaults applied to every request (pool threshold, fallback seed)
    pub generator: GeneratorConfig,
}

impl ServerState {
    /// Fails if `generator` is invalid, before the server accepts requests
    pub fn new(generator: GeneratorConfig) -> Result<Self> {
        generator.validate()?;
        Ok(Self { generator })
    }

    /// Fresh generator for one request; `seed` overrides the configured one
    pub fn generator_for(&self, seed: Option<u64>) -> Result<FixtureGenerator> {
        let mut config = self.generator.clone();
        if seed.is_some() {
            config.seed = seed;
        }
        FixtureGenerator::new(config)
    }
}
