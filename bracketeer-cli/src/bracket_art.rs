//! Terminal bracket drawing
//!
//! One column per round, left to right, joined by box-drawing connectors:
//!
//! ```text
//! A───┐
//!     ├─
//! B───┘
//! ```
//!
//! Round-1 slot k sits on row 2k. Column r entry k sits on row
//! `k * 2^(r+1) + 2^r - 1`, the midpoint of the pair feeding it. Placeholder
//! entries are drawn as bare lines; a team that advanced on a bye is named.

use bracketeer_core::{Bracket, Entry};

/// Narrowest column, so empty placeholders still show as a line
const MIN_WIDTH: usize = 3;

/// Draw `bracket` as text; empty for brackets without rounds
pub fn draw_bracket(bracket: &Bracket) -> String {
    let Some(first) = bracket.first_round() else {
        return String::new();
    };
    let height = first.matches.len() * 4 - 1;
    let columns = column_labels(bracket);

    let mut lines = vec![String::new(); height];
    for (r, labels) in columns.iter().enumerate() {
        let last = r + 1 == columns.len();
        let width = labels
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0)
            .max(MIN_WIDTH);

        for (row, line) in lines.iter_mut().enumerate() {
            line.push_str(&cell(labels, r, row, width, last));
        }
    }

    let mut out = String::new();
    for line in lines {
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Labels per column: round 1 slots, each later round's entries, the winner
fn column_labels(bracket: &Bracket) -> Vec<Vec<String>> {
    let mut columns: Vec<Vec<String>> = Vec::with_capacity(bracket.rounds.len() + 1);

    for (index, round) in bracket.rounds.iter().enumerate() {
        let entries = round.matches.iter().flat_map(|m| [&m.home, &m.away]);
        let labels = if index == 0 {
            entries.map(ToString::to_string).collect()
        } else {
            entries.map(|e| advanced(bracket, e)).collect()
        };
        columns.push(labels);
    }

    let champion = bracket
        .final_match()
        .and_then(|m| m.walkover())
        .map(ToString::to_string)
        .unwrap_or_default();
    columns.push(vec![champion]);

    columns
}

/// Name of the team behind a winner placeholder, when a bye decided it
fn advanced(bracket: &Bracket, entry: &Entry) -> String {
    let Entry::Winner {
        round,
        match_number,
    } = entry
    else {
        return String::new();
    };

    bracket
        .rounds
        .get(round - 1)
        .and_then(|r| r.matches.get(match_number - 1))
        .and_then(|m| m.walkover())
        .map(ToString::to_string)
        .unwrap_or_default()
}

/// Text of column `r` on `row`, including the connector to its right
fn cell(labels: &[String], r: usize, row: usize, width: usize, last: bool) -> String {
    let step = 1usize << (r + 1);
    let offset = (1usize << r) - 1;

    if row >= offset && (row - offset) % step == 0 {
        let k = (row - offset) / step;
        let label = labels.get(k).map(String::as_str).unwrap_or_default();
        if last {
            return label.to_string();
        }
        let fill = "─".repeat(width - label.chars().count());
        let corner = if k % 2 == 0 { "─┐ " } else { "─┘ " };
        return format!("{}{}{}", label, fill, corner);
    }

    if last {
        return String::new();
    }

    // Rows strictly between a pair's two entries carry the vertical line
    let pad = " ".repeat(width);
    if row >= offset {
        let inner = (row - offset) % (step * 2);
        if inner > 0 && inner < step {
            let joint = if inner == step / 2 { " ├─" } else { " │ " };
            return format!("{}{}", pad, joint);
        }
    }
    format!("{}   ", pad)
}
