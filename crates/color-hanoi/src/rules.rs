//! Placement rules for colored disks.
//!
//! A disk may land on an empty peg, or on a top disk that is at least as
//! large and of a different color. The size check is deliberately
//! non-strict: equal-sized disks of different colors may stack.

use smallvec::SmallVec;

use crate::puzzle::{Configuration, Disk, PegId};

/// Every ordered (source, destination) pair in exploration order:
/// sources A, B, C and, for each, the remaining pegs in the same order.
pub const CANDIDATE_MOVES: [(PegId, PegId); 6] = [
    (PegId::A, PegId::B),
    (PegId::A, PegId::C),
    (PegId::B, PegId::A),
    (PegId::B, PegId::C),
    (PegId::C, PegId::A),
    (PegId::C, PegId::B),
];

/// Check whether `disk` may be placed on a peg holding `destination`.
pub fn can_place(disk: &Disk, destination: &[Disk]) -> bool {
    match destination.last() {
        None => true,
        Some(top) => disk.size <= top.size && disk.color != top.color,
    }
}

/// Check whether the top disk of `from` may move onto `to`.
pub fn is_legal_move(config: &Configuration, from: PegId, to: PegId) -> bool {
    if from == to {
        return false;
    }
    config
        .top(from)
        .map_or(false, |disk| can_place(disk, config.peg(to)))
}

/// All legal moves from `config`, in exploration order.
pub fn legal_moves(config: &Configuration) -> SmallVec<[(PegId, PegId); 6]> {
    CANDIDATE_MOVES
        .iter()
        .copied()
        .filter(|&(from, to)| is_legal_move(config, from, to))
        .collect()
}
