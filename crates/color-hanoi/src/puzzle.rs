//! Puzzle representation types for colored Towers of Hanoi.
//!
//! Disks, pegs and configurations are plain values. The JSON shapes used by
//! the CLI (`PuzzleConfig`, `Move`, `Solution`) deserialize directly into them.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{HanoiError, Result};

/// Disk color. Only compared for equality by the placement rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Orange,
    Purple,
    Black,
    White,
}

impl Color {
    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Orange => "orange",
            Color::Purple => "purple",
            Color::Black => "black",
            Color::White => "white",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An immutable sized, colored disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Disk {
    pub size: u32,
    pub color: Color,
}

impl Disk {
    pub fn new(size: u32, color: Color) -> Self {
        Self { size, color }
    }
}

impl fmt::Display for Disk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.size, self.color)
    }
}

/// One of the three fixed pegs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PegId {
    A,
    B,
    C,
}

/// Conventional peg every disk starts on.
pub const START_PEG: PegId = PegId::A;

/// Conventional peg every disk must end on.
pub const END_PEG: PegId = PegId::C;

impl PegId {
    /// All pegs in exploration order.
    pub const ALL: [PegId; 3] = [PegId::A, PegId::B, PegId::C];

    pub fn index(self) -> usize {
        match self {
            PegId::A => 0,
            PegId::B => 1,
            PegId::C => 2,
        }
    }
}

impl fmt::Display for PegId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PegId::A => "A",
            PegId::B => "B",
            PegId::C => "C",
        };
        f.write_str(name)
    }
}

/// Disks on one peg, bottom first. The last element is the top.
pub type Peg = SmallVec<[Disk; 8]>;

/// Full assignment of disks to the three pegs.
///
/// Equality and hashing cover peg identity, disk order within each peg and
/// both disk attributes, so two structurally equal configurations always
/// collide in a `HashSet`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Configuration {
    pegs: [Peg; 3],
}

impl Configuration {
    /// Create a configuration with every disk stacked on `peg` in the given order.
    pub fn stacked_on(peg: PegId, disks: &[Disk]) -> Self {
        let mut config = Self::default();
        config.pegs[peg.index()] = disks.iter().copied().collect();
        config
    }

    pub fn peg(&self, id: PegId) -> &[Disk] {
        &self.pegs[id.index()]
    }

    pub(crate) fn peg_mut(&mut self, id: PegId) -> &mut Peg {
        &mut self.pegs[id.index()]
    }

    /// Top disk of a peg, if any.
    pub fn top(&self, id: PegId) -> Option<&Disk> {
        self.pegs[id.index()].last()
    }

    pub fn is_empty(&self, id: PegId) -> bool {
        self.pegs[id.index()].is_empty()
    }

    /// Total number of disks across all pegs.
    pub fn disk_count(&self) -> usize {
        self.pegs.iter().map(|p| p.len()).sum()
    }

    /// Every disk, peg by peg, bottom to top.
    pub fn disks(&self) -> impl Iterator<Item = &Disk> {
        self.pegs.iter().flat_map(|p| p.iter())
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, id) in PegId::ALL.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}:[", id)?;
            for (j, disk) in self.peg(*id).iter().enumerate() {
                if j > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", disk)?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}

/// A recorded relocation of the top disk of `from` onto `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub size: u32,
    pub from: PegId,
    pub to: PegId,
}

impl Move {
    pub fn new(size: u32, from: PegId, to: PegId) -> Self {
        Self { size, from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} -> {}", self.size, self.from, self.to)
    }
}

/// Outcome of a completed search.
///
/// `Unsolvable` is distinct from an empty move list, which is the trivial
/// solution for zero disks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Solution {
    Moves(Vec<Move>),
    Unsolvable,
}

impl Solution {
    pub fn moves(&self) -> Option<&[Move]> {
        match self {
            Solution::Moves(moves) => Some(moves),
            Solution::Unsolvable => None,
        }
    }

    pub fn is_unsolvable(&self) -> bool {
        matches!(self, Solution::Unsolvable)
    }
}

/// Puzzle description read by the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleConfig {
    /// Declared number of disks; defaults to the length of `disks`.
    #[serde(rename = "diskCount", default)]
    pub disk_count: Option<usize>,
    /// Disks on the start peg, bottom first.
    pub disks: Vec<Disk>,
}

impl PuzzleConfig {
    pub fn new(disks: Vec<Disk>) -> Self {
        Self {
            disk_count: None,
            disks,
        }
    }

    /// Declared disk count, checked against the disk list.
    pub fn checked_disk_count(&self) -> Result<usize> {
        let actual = self.disks.len();
        match self.disk_count {
            Some(declared) if declared != actual => {
                Err(HanoiError::DiskCountMismatch { declared, actual })
            }
            _ => Ok(actual),
        }
    }

    /// True when more than one disk is present and all share a color.
    pub fn is_monochrome(&self) -> bool {
        match self.disks.split_first() {
            Some((first, rest)) => !rest.is_empty() && rest.iter().all(|d| d.color == first.color),
            None => false,
        }
    }
}
