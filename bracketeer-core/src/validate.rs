//! Input and configuration checks run before any generation
//!
//! Level 4 - Utilities

use crate::error::{FixtureError, Result};

/// Every team name must contain something other than whitespace
pub fn validate_teams(teams: &[String]) -> Result<()> {
    match teams.iter().position(|t| t.trim().is_empty()) {
        Some(index) => Err(FixtureError::InvalidInput(format!(
            "team name at position {} is blank",
            index + 1
        ))),
        None => Ok(()),
    }
}

/// Pool threshold must be a power of two, at least 2
pub fn validate_pool_threshold(threshold: usize) -> Result<()> {
    if threshold < 2 || !threshold.is_power_of_two() {
        return Err(FixtureError::Configuration(format!(
            "pool threshold must be a power of two >= 2, got {}",
            threshold
        )));
    }
    Ok(())
}
