//! Property-based tests for the solver and verifier.
//!
//! Instances are kept small: the active-path visited set lets sibling
//! branches re-explore shared configurations, so unsolvable instances grow
//! quickly with the disk count. An expansion ceiling keeps runs bounded and
//! aborted searches are discarded.

use color_hanoi::{
    find_solution, replay, try_move, verify, Color, Configuration, Disk, PuzzleConfig,
    SearchOutcome, Solution, SolverConfig, START_PEG,
};
use proptest::prelude::*;

const EXPANSION_CEILING: usize = 50_000;

/// Generates arbitrary colors from a small palette so collisions are common.
fn arb_color() -> impl Strategy<Value = Color> {
    prop_oneof![Just(Color::Red), Just(Color::Blue), Just(Color::Green)]
}

fn arb_disk() -> impl Strategy<Value = Disk> {
    (1u32..=4, arb_color()).prop_map(|(size, color)| Disk::new(size, color))
}

fn arb_disks(max: usize) -> impl Strategy<Value = Vec<Disk>> {
    prop::collection::vec(arb_disk(), 0..=max)
}

fn bounded() -> SolverConfig {
    SolverConfig {
        max_expansions: Some(EXPANSION_CEILING),
        ..Default::default()
    }
}

fn sorted(disks: impl IntoIterator<Item = Disk>) -> Vec<Disk> {
    let mut disks: Vec<Disk> = disks.into_iter().collect();
    disks.sort();
    disks
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every solution the solver returns passes verification.
    #[test]
    fn prop_solutions_verify(disks in arb_disks(4)) {
        let result = find_solution(&PuzzleConfig::new(disks.clone()), &bounded()).unwrap();
        prop_assume!(!matches!(result.outcome, SearchOutcome::Aborted(_)));

        if let SearchOutcome::Solved(moves) = result.outcome {
            prop_assert!(verify(&disks, &Solution::Moves(moves)));
        }
    }

    /// No disk is created, lost or duplicated by any move of a solution.
    #[test]
    fn prop_moves_conserve_disks(disks in arb_disks(4)) {
        let result = find_solution(&PuzzleConfig::new(disks.clone()), &bounded()).unwrap();
        let SearchOutcome::Solved(moves) = result.outcome else {
            return Ok(());
        };

        let expected = sorted(disks.iter().copied());
        let mut config = Configuration::stacked_on(START_PEG, &disks);
        for mv in &moves {
            try_move(&mut config, mv).unwrap();
            prop_assert_eq!(sorted(config.disks().copied()), expected.clone());
        }
    }

    /// More than one disk of a single color is rejected before any expansion.
    #[test]
    fn prop_monochrome_is_unsolvable_without_search(
        sizes in prop::collection::vec(1u32..=9, 2..=8),
        color in arb_color(),
    ) {
        let disks: Vec<Disk> = sizes.into_iter().map(|size| Disk::new(size, color)).collect();
        let result = find_solution(&PuzzleConfig::new(disks), &SolverConfig::default()).unwrap();

        prop_assert_eq!(result.outcome, SearchOutcome::Unsolvable);
        prop_assert_eq!(result.stats.states_expanded, 0);
    }

    /// Replaying the same move list twice gives the same verdict.
    #[test]
    fn prop_verification_is_idempotent(
        disks in arb_disks(4),
        raw_moves in prop::collection::vec((1u32..=4, 0usize..3, 0usize..3), 0..8),
    ) {
        let pegs = color_hanoi::PegId::ALL;
        let moves: Vec<color_hanoi::Move> = raw_moves
            .into_iter()
            .map(|(size, from, to)| color_hanoi::Move::new(size, pegs[from], pegs[to]))
            .collect();

        let first = replay(&disks, &moves);
        let second = replay(&disks, &moves);
        prop_assert_eq!(first.status, second.status);
        prop_assert_eq!(first.moves_replayed, second.moves_replayed);
        prop_assert_eq!(first.final_config, second.final_config);
    }
}
