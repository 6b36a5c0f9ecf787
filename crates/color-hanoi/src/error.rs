//! Error types for the colored Hanoi solver.

use thiserror::Error;

use crate::puzzle::{Disk, PegId};

/// Result type alias for solver operations.
pub type Result<T> = std::result::Result<T, HanoiError>;

/// A single move that cannot be carried out on the current configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidMoveError {
    /// Source peg holds no disk.
    #[error("no disk on peg {0}")]
    EmptySource(PegId),

    /// Source and destination are the same peg.
    #[error("source and destination are both peg {0}")]
    SamePeg(PegId),

    /// The legality rules reject the placement.
    #[error("cannot place disk {disk} on peg {peg}: top disk is {top}")]
    IllegalPlacement { disk: Disk, peg: PegId, top: Disk },

    /// The recorded disk size does not match the top of the source peg.
    #[error("disk of size {expected} is not on top of peg {peg} (found size {found})")]
    SizeMismatch { peg: PegId, expected: u32, found: u32 },
}

/// Errors surfaced by the solver and its input layer.
#[derive(Debug, Error)]
pub enum HanoiError {
    /// A move could not be applied.
    #[error("invalid move: {0}")]
    InvalidMove(#[from] InvalidMoveError),

    /// Declared disk count disagrees with the disk list.
    #[error("disk count {declared} does not match {actual} listed disks")]
    DiskCountMismatch { declared: usize, actual: usize },

    /// A configured effort ceiling stopped the search before it finished.
    #[error("search aborted: {0}")]
    SearchAborted(String),

    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
