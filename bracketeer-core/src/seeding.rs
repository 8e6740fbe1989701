//! Slot arithmetic - bracket size, canonical seed placement, bye allocation
//!
//! Level 4 - Pure utilities used by every knockout path

use std::collections::BTreeSet;

/// Smallest power of two >= `n`; 1 for `n == 0`.
pub fn next_power_of_two(n: usize) -> usize {
    n.next_power_of_two()
}

/// Seed numbers in bracket order (top slot first).
///
/// Built by repeated halving: every seed `s` of the half-size bracket is
/// followed by its first-round opponent `size + 1 - s`, so seeds 1 and 2
/// end up in opposite halves, 3 and 4 in the remaining quarters, and so on.
fn bracket_order(slot_count: usize) -> Vec<usize> {
    let mut order = vec![1];
    while order.len() < slot_count {
        let size = order.len() * 2;
        order = order.iter().flat_map(|&s| [s, size + 1 - s]).collect();
    }
    order
}

/// Canonical 1-indexed bracket position for every seed rank `1..=slot_count`.
///
/// `positions[r - 1]` is where rank `r` sits. A `slot_count` that is not a
/// power of two is rounded up first.
///
/// # Example
/// ```
/// use bracketeer_core::seed_positions;
/// assert_eq!(seed_positions(4), vec![1, 3, 4, 2]);
/// ```
pub fn seed_positions(slot_count: usize) -> Vec<usize> {
    let slot_count = next_power_of_two(slot_count);
    let order = bracket_order(slot_count);

    let mut positions = vec![0; slot_count];
    for (index, &seed) in order.iter().enumerate() {
        positions[seed - 1] = index + 1;
    }
    positions
}

/// Seed ranks whose first-round match is a bye.
///
/// Every first-round match is anchored by a rank `q` in `1..=slot_count / 2`.
/// The strongest `entrant_count - slot_count / 2` anchors play a real
/// opponent; the remaining (weakest) anchors get the byes, so the set holds
/// exactly `slot_count - entrant_count` ranks.
pub fn assign_byes(entrant_count: usize, slot_count: usize) -> BTreeSet<usize> {
    if entrant_count <= 1 || entrant_count >= slot_count {
        return BTreeSet::new();
    }

    let anchors = slot_count / 2;
    let bye_count = slot_count - entrant_count;
    let first = anchors.saturating_sub(bye_count) + 1;

    (first..=anchors).collect()
}
