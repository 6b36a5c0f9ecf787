//! Solver library for Towers of Hanoi with colored disks.
//!
//! A disk may only rest on a disk at least as large and of a different
//! color. The solver finds some move sequence taking every disk from peg A
//! to peg C (or proves none exists), and the executor independently replays
//! a move list to confirm it.

pub mod error;
pub mod executor;
pub mod puzzle;
pub mod rules;
pub mod solver;

// Re-export main types
pub use error::{HanoiError, InvalidMoveError, Result};
pub use executor::{
    apply_move, replay, try_move, undo_move, verify, verify_solution, ReplayResult, ReplayStatus,
};
pub use puzzle::{
    Color, Configuration, Disk, Move, Peg, PegId, PuzzleConfig, Solution, END_PEG, START_PEG,
};
pub use rules::{can_place, is_legal_move, legal_moves};
pub use solver::{
    find_solution, search, solve, SearchOutcome, SearchStats, SolverConfig, SolverResult,
};
