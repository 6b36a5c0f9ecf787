//! End-to-end scenarios through the public entry points.

use color_hanoi::{solve, verify, Color, Disk, HanoiError, Move, PegId, Solution};

fn disk(size: u32, color: Color) -> Disk {
    Disk::new(size, color)
}

#[test]
fn test_empty_puzzle_is_trivially_solved() {
    let solution = solve(0, &[]).unwrap();
    assert_eq!(solution, Solution::Moves(vec![]));
    assert_ne!(solution, Solution::Unsolvable);
    assert!(verify(&[], &solution));
}

#[test]
fn test_single_red_disk() {
    let disks = [disk(5, Color::Red)];
    let solution = solve(1, &disks).unwrap();
    assert_eq!(solution, Solution::Moves(vec![Move::new(5, PegId::A, PegId::C)]));
    assert!(verify(&disks, &solution));
}

#[test]
fn test_red_blue_red_tower_is_solvable() {
    let disks = [
        disk(3, Color::Red),
        disk(2, Color::Blue),
        disk(1, Color::Red),
    ];
    let solution = solve(3, &disks).unwrap();
    assert!(solution.moves().is_some());
    assert!(verify(&disks, &solution));
}

#[test]
fn test_all_red_tower_is_unsolvable() {
    let disks = [
        disk(3, Color::Red),
        disk(2, Color::Red),
        disk(1, Color::Red),
    ];
    let solution = solve(3, &disks).unwrap();
    assert_eq!(solution, Solution::Unsolvable);
    assert!(!verify(&disks, &solution));
}

#[test]
fn test_equal_sized_disks_of_different_colors() {
    let disks = [disk(4, Color::Green), disk(4, Color::Yellow)];
    let solution = solve(2, &disks).unwrap();
    assert!(verify(&disks, &solution));
}

#[test]
fn test_tampered_solution_fails_verification() {
    let disks = [
        disk(3, Color::Red),
        disk(2, Color::Blue),
        disk(1, Color::Red),
    ];
    let Solution::Moves(mut moves) = solve(3, &disks).unwrap() else {
        panic!("expected a solution");
    };
    moves.pop();
    assert!(!verify(&disks, &Solution::Moves(moves)));
}

#[test]
fn test_mismatched_disk_count() {
    assert!(matches!(
        solve(3, &[disk(1, Color::Red)]),
        Err(HanoiError::DiskCountMismatch { .. })
    ));
}
