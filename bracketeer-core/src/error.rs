//! Error types for fixture generation

/// Errors surfaced by the fixture core.
///
/// Degenerate fields (zero or one team) and unknown seed names are not
/// errors; they are handled by policy inside the generators.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FixtureError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

pub type Result<T> = std::result::Result<T, FixtureError>;
