//! Team roster loading from disk

use std::path::Path;

use anyhow::{Context, Result};

use bracketeer_core::{parse_roster, RosterFormat};

/// Load team names from a `.txt` or `.csv` file
pub fn load_roster(path: &Path) -> Result<Vec<String>> {
    let format = RosterFormat::from_file_name(&path.to_string_lossy())?;
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read team file: {}", path.display()))?;

    let teams = parse_roster(&text, format);
    tracing::debug!("Loaded {} teams from {}", teams.len(), path.display());
    Ok(teams)
}
