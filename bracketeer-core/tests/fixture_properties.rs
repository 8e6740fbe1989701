//! Integration tests for the Bracketeer fixture core
//!
//! Exercises the public entry points end to end: knockout brackets, pools,
//! round-robin schedules and reproducibility.

use std::collections::HashSet;

use bracketeer_core::{
    assign_byes, generate_knockout, generate_round_robin, next_power_of_two, seed_positions,
    Bracket, Entry, FixtureError, FixtureGenerator, GeneratorConfig, KnockoutResult, SeededRng,
    Stage,
};

// ============================================================================
// TEST FIXTURES
// ============================================================================

fn field(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("Club {:02}", i)).collect()
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn single(result: KnockoutResult) -> Bracket {
    match result {
        KnockoutResult::Single(bracket) => bracket,
        KnockoutResult::Pooled { .. } => panic!("expected a single bracket"),
    }
}

/// 1-based slot of `team` in round 1
fn slot_of(bracket: &Bracket, team: &str) -> usize {
    bracket
        .slots()
        .iter()
        .position(|e| e.team_name() == Some(team))
        .map(|i| i + 1)
        .expect("team should be placed")
}

/// Slots holding a bye, 1-based
fn bye_slots(bracket: &Bracket) -> Vec<usize> {
    bracket
        .slots()
        .iter()
        .enumerate()
        .filter(|(_, e)| e.is_bye())
        .map(|(i, _)| i + 1)
        .collect()
}

// ============================================================================
// SLOT ARITHMETIC
// ============================================================================

#[test]
fn test_power_of_two_properties() {
    assert_eq!(next_power_of_two(0), 1);
    assert_eq!(next_power_of_two(1), 1);
    for n in 2..=4096usize {
        let p = next_power_of_two(n);
        assert!(p.is_power_of_two());
        assert!(p / 2 < n && n <= p);
    }
}

#[test]
fn test_seed_positions_permutation_and_halves() {
    for exp in 0..=8 {
        let n = 1usize << exp;
        let positions = seed_positions(n);
        let unique: HashSet<usize> = positions.iter().copied().collect();
        assert_eq!(unique.len(), n);
        assert!(positions.iter().all(|&p| (1..=n).contains(&p)));

        if n >= 2 {
            assert_ne!(positions[0] <= n / 2, positions[1] <= n / 2);
        }
    }
}

#[test]
fn test_assign_byes_properties() {
    for e in 1..=32usize {
        let slots = next_power_of_two(e);
        let byes = assign_byes(e, slots);
        assert_eq!(byes.len(), slots - e);
        assert!(byes.iter().all(|&r| r <= e));
    }
}

// ============================================================================
// KNOCKOUT
// ============================================================================

#[test]
fn test_knockout_five_entrants() {
    let mut rng = SeededRng::from_seed(42);
    let bracket = single(generate_knockout(&field(5), &[], 32, &mut rng).unwrap());

    let round1 = &bracket.rounds[0];
    assert_eq!(round1.matches.len(), 4);
    assert_eq!(round1.matches.iter().filter(|m| m.is_bye()).count(), 3);
    assert_eq!(round1.playable().count(), 1);

    assert_eq!(bracket.rounds[1].matches.len(), 2);
    assert_eq!(bracket.rounds[2].matches.len(), 1);
    assert_eq!(bracket.rounds[2].stage, Stage::Final);
    assert_eq!(bracket.round_count(), 3);
}

#[test]
fn test_knockout_ten_entrants_four_seeds() {
    let teams = field(10);
    let seeds = names(&["Club 03", "Club 07", "Club 01", "Club 10"]);
    let mut rng = SeededRng::from_seed(42);
    let bracket = single(generate_knockout(&teams, &seeds, 32, &mut rng).unwrap());

    assert_eq!(bracket.slots().len(), 16);
    assert_eq!(bracket.rounds[0].bye_count(), 6);

    let s1 = slot_of(&bracket, "Club 03");
    let s2 = slot_of(&bracket, "Club 07");
    let s3 = slot_of(&bracket, "Club 01");
    let s4 = slot_of(&bracket, "Club 10");

    // Opposite halves
    assert_ne!(s1 <= 8, s2 <= 8);

    // Four distinct quarters
    let quarter = |slot: usize| (slot - 1) / 4;
    let quarters: HashSet<usize> = [s1, s2, s3, s4].iter().map(|&s| quarter(s)).collect();
    assert_eq!(quarters.len(), 4);

    // Seeds 3 and 4 sit in the halves not anchored by 1 and 2 respectively
    assert_ne!(quarter(s3), quarter(s1));
    assert_ne!(quarter(s3), quarter(s2));
    assert_ne!(s3 <= 8, s4 <= 8);
}

#[test]
fn test_unknown_seeds_are_ignored() {
    let teams = field(6);
    let seeds = names(&["Nobody", "Club 05"]);
    let mut rng = SeededRng::from_seed(3);
    let bracket = single(generate_knockout(&teams, &seeds, 32, &mut rng).unwrap());

    // Club 05 is the only matched seed and therefore rank 1
    assert_eq!(slot_of(&bracket, "Club 05"), 1);
    assert!(bracket.slots().iter().all(|e| e.team_name() != Some("Nobody")));
}

#[test]
fn test_duplicate_team_names_are_distinct_entrants() {
    let teams = names(&["Rovers", "Rovers", "United"]);
    let mut rng = SeededRng::from_seed(1);
    let bracket = single(generate_knockout(&teams, &[], 32, &mut rng).unwrap());

    let rovers = bracket
        .slots()
        .iter()
        .filter(|e| e.team_name() == Some("Rovers"))
        .count();
    assert_eq!(rovers, 2);
    assert_eq!(bracket.rounds[0].bye_count(), 1);
}

#[test]
fn test_degenerate_knockouts() {
    let mut rng = SeededRng::from_seed(0);

    let empty = single(generate_knockout(&[], &[], 32, &mut rng).unwrap());
    assert!(empty.rounds.is_empty());

    let solo = single(generate_knockout(&names(&["Only"]), &[], 32, &mut rng).unwrap());
    assert!(solo.rounds.is_empty());
    assert_eq!(solo.champion.as_deref(), Some("Only"));
}

#[test]
fn test_knockout_seventy_entrants_pooled() {
    let teams = field(70);
    let mut rng = SeededRng::from_seed(42);
    let result = generate_knockout(&teams, &[], 32, &mut rng).unwrap();

    let pools = match result {
        KnockoutResult::Pooled { pools } => pools,
        KnockoutResult::Single(_) => panic!("expected pools"),
    };

    let sizes: Vec<usize> = pools.iter().map(|p| p.teams.len()).collect();
    assert_eq!(sizes, vec![18, 18, 17, 17]);
    assert_eq!(sizes.iter().sum::<usize>(), 70);

    for pool in &pools {
        let placed: Vec<&str> = pool
            .bracket
            .slots()
            .iter()
            .filter_map(|e| e.team_name())
            .collect();
        assert_eq!(placed.len(), pool.teams.len());
        assert_eq!(pool.bracket.rounds[0].matches.len(), 16);
    }
}

#[test]
fn test_seeds_are_honored_inside_pools() {
    let teams = field(40);
    let seeds = names(&["Club 01", "Club 02"]);
    let mut rng = SeededRng::from_seed(17);
    let result = generate_knockout(&teams, &seeds, 32, &mut rng).unwrap();

    let KnockoutResult::Pooled { pools } = result else {
        panic!("expected pools");
    };
    for pool in &pools {
        let present: Vec<&String> = seeds.iter().filter(|s| pool.teams.contains(s)).collect();
        if let Some(top) = present.first() {
            assert_eq!(slot_of(&pool.bracket, top), 1, "top seed of {}", pool.name);
        }
    }
}

#[test]
fn test_reproducible_with_same_seed() {
    let teams = field(23);
    let seeds = names(&["Club 05", "Club 11"]);

    let a = generate_knockout(&teams, &seeds, 32, &mut SeededRng::from_seed(99)).unwrap();
    let b = generate_knockout(&teams, &seeds, 32, &mut SeededRng::from_seed(99)).unwrap();
    assert_eq!(a, b);

    let large = field(90);
    let a = generate_knockout(&large, &seeds, 32, &mut SeededRng::from_seed(5)).unwrap();
    let b = generate_knockout(&large, &seeds, 32, &mut SeededRng::from_seed(5)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_different_seed_keeps_seeds_and_byes_fixed() {
    let teams = field(21);
    let seeds = names(&["Club 09", "Club 02", "Club 15"]);

    let a = single(generate_knockout(&teams, &seeds, 32, &mut SeededRng::from_seed(1)).unwrap());
    let b = single(generate_knockout(&teams, &seeds, 32, &mut SeededRng::from_seed(2)).unwrap());

    for seed in &seeds {
        assert_eq!(slot_of(&a, seed), slot_of(&b, seed));
    }
    assert_eq!(bye_slots(&a), bye_slots(&b));
    assert_ne!(a.slots(), b.slots(), "unseeded draw should differ");
}

#[test]
fn test_generator_rejects_blank_team() {
    let mut generator = FixtureGenerator::new(GeneratorConfig::default().with_seed(1)).unwrap();
    let err = generator.knockout(&names(&["A", ""]), &[]).unwrap_err();
    assert!(matches!(err, FixtureError::InvalidInput(_)));
}

#[test]
fn test_smaller_pool_threshold() {
    let mut generator = FixtureGenerator::new(
        GeneratorConfig::default().with_pool_threshold(8).with_seed(4),
    )
    .unwrap();
    let result = generator.knockout(&field(20), &[]).unwrap();
    assert!(result.is_pooled());
    assert_eq!(result.brackets().len(), 4);
}

// ============================================================================
// ROUND ROBIN
// ============================================================================

#[test]
fn test_round_robin_every_pair_once() {
    for n in 0..=16 {
        let teams = field(n);
        let schedule = generate_round_robin(&teams).unwrap();

        let expected_rounds = match n {
            0 => 0,
            n if n % 2 == 0 => n - 1,
            n => n,
        };
        assert_eq!(schedule.league.len(), expected_rounds);

        let mut pairs = HashSet::new();
        for round in &schedule.league {
            for m in &round.matches {
                assert!(!m.home.is_bye() && !m.away.is_bye());
                let mut key = [m.home.to_string(), m.away.to_string()];
                key.sort();
                assert!(pairs.insert(key));
            }
        }
        assert_eq!(pairs.len(), n * n.saturating_sub(1) / 2);
    }
}

#[test]
fn test_round_robin_five_teams_with_playoffs() {
    let schedule = generate_round_robin(&names(&["A", "B", "C", "D", "E"])).unwrap();

    assert_eq!(schedule.league.len(), 5);
    for round in &schedule.league {
        assert_eq!(round.matches.len(), 2);
    }

    let rounds = schedule.into_rounds();
    assert_eq!(rounds.len(), 7);

    let semis = &rounds[5];
    assert_eq!(semis.matches[0].home, Entry::Standing(1));
    assert_eq!(semis.matches[0].away, Entry::Standing(4));
    assert_eq!(semis.matches[1].home.to_string(), "2nd Place");
    assert_eq!(semis.matches[1].away.to_string(), "3rd Place");

    let fin = &rounds[6];
    assert_eq!(fin.matches.len(), 1);
    assert_eq!(fin.matches[0].home.to_string(), "Winner of Semifinal 1");
    assert_eq!(fin.matches[0].away.to_string(), "Winner of Semifinal 2");
}

#[test]
fn test_round_robin_playoff_sizes() {
    for (n, playoff_rounds) in [(0, 0), (1, 0), (2, 1), (3, 1), (4, 1), (5, 2), (9, 2)] {
        let schedule = generate_round_robin(&field(n)).unwrap();
        assert_eq!(schedule.playoffs.len(), playoff_rounds, "n={}", n);
    }
}
