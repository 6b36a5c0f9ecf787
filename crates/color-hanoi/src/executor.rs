//! Move application and solution replay.
//!
//! `apply_move`/`undo_move` are the trusted in-place transitions used by the
//! search. `try_move` adds the full set of checks and backs the verifier,
//! which replays a move list from scratch and reports the first failure.

use tracing::warn;

use crate::error::InvalidMoveError;
use crate::puzzle::{Configuration, Disk, Move, PegId, Solution, END_PEG, START_PEG};
use crate::rules::can_place;

/// Move the top disk of `from` onto `to` without checking placement rules.
///
/// Fails only when `from` is empty.
pub fn apply_move(
    config: &mut Configuration,
    from: PegId,
    to: PegId,
) -> Result<Disk, InvalidMoveError> {
    let disk = config
        .peg_mut(from)
        .pop()
        .ok_or(InvalidMoveError::EmptySource(from))?;
    config.peg_mut(to).push(disk);
    Ok(disk)
}

/// Reverse a move made by `apply_move`. `disk` must be the value it returned.
pub fn undo_move(config: &mut Configuration, from: PegId, to: PegId, disk: Disk) {
    let top = config.peg_mut(to).pop();
    debug_assert_eq!(top, Some(disk), "undo does not match the last applied move");
    config.peg_mut(from).push(disk);
}

/// Apply a recorded move after checking it against the configuration.
pub fn try_move(config: &mut Configuration, mv: &Move) -> Result<Disk, InvalidMoveError> {
    if mv.from == mv.to {
        return Err(InvalidMoveError::SamePeg(mv.from));
    }

    let disk = *config
        .top(mv.from)
        .ok_or(InvalidMoveError::EmptySource(mv.from))?;

    if disk.size != mv.size {
        return Err(InvalidMoveError::SizeMismatch {
            peg: mv.from,
            expected: mv.size,
            found: disk.size,
        });
    }

    if !can_place(&disk, config.peg(mv.to)) {
        if let Some(&top) = config.top(mv.to) {
            return Err(InvalidMoveError::IllegalPlacement {
                disk,
                peg: mv.to,
                top,
            });
        }
    }

    apply_move(config, mv.from, mv.to)
}

/// Result status of replaying a move list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayStatus {
    /// Every move was legal and all disks ended on the end peg
    Solved,
    /// The solution was the unsolvable marker
    Unsolvable,
    /// A move named an empty source peg
    EmptySource,
    /// A move named the same peg as source and destination
    SamePeg,
    /// The recorded size did not match the top disk
    SizeMismatch,
    /// The placement rules rejected a move
    IllegalPlacement,
    /// All moves were legal but disks remain off the end peg
    Incomplete,
}

impl From<&InvalidMoveError> for ReplayStatus {
    fn from(err: &InvalidMoveError) -> Self {
        match err {
            InvalidMoveError::EmptySource(_) => ReplayStatus::EmptySource,
            InvalidMoveError::SamePeg(_) => ReplayStatus::SamePeg,
            InvalidMoveError::IllegalPlacement { .. } => ReplayStatus::IllegalPlacement,
            InvalidMoveError::SizeMismatch { .. } => ReplayStatus::SizeMismatch,
        }
    }
}

/// Result of replaying a move list
#[derive(Debug, Clone)]
pub struct ReplayResult {
    pub status: ReplayStatus,
    /// Moves applied successfully before stopping
    pub moves_replayed: usize,
    /// Configuration after the last successful move
    pub final_config: Configuration,
    /// Human-readable failure reason
    pub reason: Option<String>,
}

impl ReplayResult {
    pub fn is_valid(&self) -> bool {
        self.status == ReplayStatus::Solved
    }
}

/// Replay `moves` from all of `initial_disks` stacked on the start peg.
pub fn replay(initial_disks: &[Disk], moves: &[Move]) -> ReplayResult {
    let mut config = Configuration::stacked_on(START_PEG, initial_disks);

    for (index, mv) in moves.iter().enumerate() {
        if let Err(err) = try_move(&mut config, mv) {
            return ReplayResult {
                status: ReplayStatus::from(&err),
                moves_replayed: index,
                final_config: config,
                reason: Some(format!("move {} ({}): {}", index + 1, mv, err)),
            };
        }
    }

    let on_end_peg = config.peg(END_PEG).len();
    if on_end_peg != initial_disks.len() {
        return ReplayResult {
            status: ReplayStatus::Incomplete,
            moves_replayed: moves.len(),
            reason: Some(format!(
                "only {} of {} disks are on peg {}",
                on_end_peg,
                initial_disks.len(),
                END_PEG
            )),
            final_config: config,
        };
    }

    ReplayResult {
        status: ReplayStatus::Solved,
        moves_replayed: moves.len(),
        final_config: config,
        reason: None,
    }
}

/// Replay a solver result and log the reason for any failure.
pub fn verify_solution(initial_disks: &[Disk], solution: &Solution) -> ReplayResult {
    let result = match solution {
        Solution::Unsolvable => ReplayResult {
            status: ReplayStatus::Unsolvable,
            moves_replayed: 0,
            final_config: Configuration::stacked_on(START_PEG, initial_disks),
            reason: Some("solution is marked unsolvable".to_string()),
        },
        Solution::Moves(moves) => replay(initial_disks, moves),
    };

    if let Some(reason) = &result.reason {
        warn!(status = ?result.status, "verification failed: {}", reason);
    }
    result
}

/// Simple verification: does the move list solve the puzzle?
pub fn verify(initial_disks: &[Disk], solution: &Solution) -> bool {
    verify_solution(initial_disks, solution).is_valid()
}
