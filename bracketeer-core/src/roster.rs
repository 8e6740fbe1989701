//! Team roster parsing
//!
//! Plain text holds one team per line; CSV contributes the first column of
//! each row. Blank entries are dropped and names trimmed.
//!
//! Level 4 - Utilities

use crate::error::{FixtureError, Result};

/// Layout of an uploaded or on-disk team list
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RosterFormat {
    Text,
    Csv,
}

impl RosterFormat {
    /// Pick the layout from a file name's extension (none means plain text)
    pub fn from_file_name(name: &str) -> Result<Self> {
        let extension = std::path::Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("csv") => Ok(RosterFormat::Csv),
            Some("txt") | None => Ok(RosterFormat::Text),
            Some(other) => Err(FixtureError::InvalidInput(format!(
                "unsupported team file type '.{}' in '{}' (expected .txt or .csv)",
                other, name
            ))),
        }
    }
}

/// Team names from `text` laid out as `format`
pub fn parse_roster(text: &str, format: RosterFormat) -> Vec<String> {
    match format {
        RosterFormat::Text => parse_lines(text),
        RosterFormat::Csv => parse_csv(text),
    }
}

/// One team per line
pub fn parse_lines(text: &str) -> Vec<String> {
    text.lines().filter_map(clean).collect()
}

/// First column of each CSV row
pub fn parse_csv(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| clean(&first_field(line)))
        .collect()
}

/// Comma-separated list, as typed on a command line or form field
pub fn parse_list(list: &str) -> Vec<String> {
    list.split(',').filter_map(clean).collect()
}

fn clean(raw: &str) -> Option<String> {
    let name = raw.trim();
    (!name.is_empty()).then(|| name.to_string())
}

/// First CSV field, honoring double quotes and `""` escapes
fn first_field(line: &str) -> String {
    let line = line.trim_start();
    let Some(quoted) = line.strip_prefix('"') else {
        return line.split(',').next().unwrap_or_default().to_string();
    };

    let mut field = String::new();
    let mut chars = quoted.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' if chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            '"' => break,
            c => field.push(c),
        }
    }
    field
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lines_drops_blanks_and_trims() {
        let teams = parse_lines("  Lions \n\nTigers\r\n   \nBears\n");
        assert_eq!(teams, vec!["Lions", "Tigers", "Bears"]);
    }

    #[test]
    fn test_parse_csv_first_column() {
        let teams = parse_csv("Lions,London,1\nTigers, Leeds\n,empty\n\"Bears, The\",York\n");
        assert_eq!(teams, vec!["Lions", "Tigers", "Bears, The"]);
    }

    #[test]
    fn test_first_field_escaped_quotes() {
        assert_eq!(first_field("\"The \"\"Best\"\" XI\",x"), "The \"Best\" XI");
        assert_eq!(first_field("plain"), "plain");
    }

    #[test]
    fn test_parse_list() {
        assert_eq!(parse_list("A, B,,C "), vec!["A", "B", "C"]);
        assert!(parse_list("").is_empty());
    }

    #[test]
    fn test_format_from_file_name() {
        assert_eq!(RosterFormat::from_file_name("teams.CSV").unwrap(), RosterFormat::Csv);
        assert_eq!(RosterFormat::from_file_name("teams.txt").unwrap(), RosterFormat::Text);
        assert_eq!(RosterFormat::from_file_name("teams").unwrap(), RosterFormat::Text);

        let err = RosterFormat::from_file_name("teams.pdf").unwrap_err();
        assert!(matches!(err, FixtureError::InvalidInput(_)));
    }

    #[test]
    fn test_parse_roster_dispatch() {
        assert_eq!(parse_roster("A,1\nB,2\n", RosterFormat::Csv), vec!["A", "B"]);
        assert_eq!(parse_roster("A,1\nB,2\n", RosterFormat::Text), vec!["A,1", "B,2"]);
    }
}
