//! Pool splitting for fields too large for one bracket
//!
//! Level 3 - Steps

use crate::rng::RandomSource;
use crate::seeding::next_power_of_two;

/// Largest field bracketed without pools
pub const DEFAULT_POOL_THRESHOLD: usize = 32;

/// Teams drawn into one pool, before bracketing
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolDraw {
    pub name: String,
    pub teams: Vec<String>,
}

/// Number of pools for a field of `entrant_count` teams
pub fn pool_count(entrant_count: usize, threshold: usize) -> usize {
    if entrant_count <= threshold {
        return 1;
    }
    (next_power_of_two(entrant_count) / threshold).max(1)
}

/// Partition `teams` into balanced pools.
///
/// Fields at or below `threshold` come back as a single pool in input order.
/// Larger fields are shuffled, then cut into `pool_count` contiguous chunks
/// whose sizes differ by at most one, the earlier pools taking the remainder.
pub fn split_pools<R: RandomSource>(
    teams: &[String],
    threshold: usize,
    rng: &mut R,
) -> Vec<PoolDraw> {
    let count = pool_count(teams.len(), threshold);
    if count == 1 {
        return vec![PoolDraw {
            name: pool_label(0),
            teams: teams.to_vec(),
        }];
    }

    let mut shuffled = teams.to_vec();
    rng.shuffle(&mut shuffled);

    let base = shuffled.len() / count;
    let remainder = shuffled.len() % count;

    tracing::info!(
        "Splitting {} teams into {} pools of {}-{}",
        teams.len(),
        count,
        base,
        if remainder > 0 { base + 1 } else { base }
    );

    let mut rest = shuffled.into_iter();
    (0..count)
        .map(|i| {
            let size = if i < remainder { base + 1 } else { base };
            PoolDraw {
                name: pool_label(i),
                teams: rest.by_ref().take(size).collect(),
            }
        })
        .collect()
}

/// `Pool A` .. `Pool Z`, then `Pool AA`, `Pool AB`, ...
pub fn pool_label(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push((b'A' + rem as u8) as char);
        n = (n - 1) / 26;
    }
    let suffix: String = letters.into_iter().rev().collect();
    format!("Pool {}", suffix)
}
