//! Depth-first backtracking solver for colored Towers of Hanoi.
//!
//! The search mutates a single configuration in place: each move is applied,
//! explored and undone before the next candidate is tried. Configurations on
//! the active path are held in a visited set so a path never revisits a
//! state; they leave the set again when the search backtracks past them, so
//! sibling branches may still reach the same configuration by another route.
//!
//! The first solution found in the fixed candidate order is returned. It is
//! not necessarily the shortest.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::error::{HanoiError, Result};
use crate::executor::{apply_move, undo_move};
use crate::puzzle::{Configuration, Disk, Move, PegId, PuzzleConfig, Solution, END_PEG, START_PEG};
use crate::rules::{is_legal_move, CANDIDATE_MOVES};

/// Configuration for the solver
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    /// Maximum time to search; `None` searches until done
    pub timeout: Option<Duration>,
    /// Maximum number of configurations to expand; `None` is unbounded
    pub max_expansions: Option<usize>,
}

/// Counters collected during a search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub states_expanded: usize,
    pub moves_applied: usize,
    pub backtracks: usize,
    pub max_depth: usize,
}

/// How a search ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Target reached with these moves
    Solved(Vec<Move>),
    /// No move sequence reaches the target
    Unsolvable,
    /// A configured ceiling stopped the search; nothing is proven
    Aborted(String),
}

/// Result of the solver search
#[derive(Debug, Clone)]
pub struct SolverResult {
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
    /// Whether every reachable branch was explored
    pub search_exhausted: bool,
    /// Time elapsed in milliseconds
    pub time_elapsed_ms: u64,
    /// Why the outcome was reached without a full search, if applicable
    pub reason: Option<String>,
}

impl SolverResult {
    fn new(outcome: SearchOutcome, stats: SearchStats, start_time: Instant) -> Self {
        Self {
            outcome,
            stats,
            search_exhausted: false,
            time_elapsed_ms: start_time.elapsed().as_millis() as u64,
            reason: None,
        }
    }

    fn with_reason(mut self, reason: &str) -> Self {
        self.reason = Some(reason.to_string());
        self
    }

    /// The solution, unless the search was aborted.
    pub fn solution(&self) -> Option<Solution> {
        match &self.outcome {
            SearchOutcome::Solved(moves) => Some(Solution::Moves(moves.clone())),
            SearchOutcome::Unsolvable => Some(Solution::Unsolvable),
            SearchOutcome::Aborted(_) => None,
        }
    }

    /// Convert into a `Solution`, treating an aborted search as an error.
    pub fn into_solution(self) -> Result<Solution> {
        match self.outcome {
            SearchOutcome::Solved(moves) => Ok(Solution::Moves(moves)),
            SearchOutcome::Unsolvable => Ok(Solution::Unsolvable),
            SearchOutcome::Aborted(reason) => Err(HanoiError::SearchAborted(reason)),
        }
    }
}

/// Solve the puzzle of moving `disks` (bottom first) from peg A to peg C.
///
/// Runs without effort limits, so the answer is always exact.
pub fn solve(disk_count: usize, disks: &[Disk]) -> Result<Solution> {
    let puzzle = PuzzleConfig {
        disk_count: Some(disk_count),
        disks: disks.to_vec(),
    };
    find_solution(&puzzle, &SolverConfig::default())?.into_solution()
}

/// Solve a puzzle with the given limits.
///
/// Zero and one disk are answered directly. More than one disk sharing a
/// single color is reported unsolvable without searching. Everything else
/// goes to the general search.
pub fn find_solution(puzzle: &PuzzleConfig, config: &SolverConfig) -> Result<SolverResult> {
    let start_time = Instant::now();
    let disk_count = puzzle.checked_disk_count()?;

    match puzzle.disks.as_slice() {
        [] => {
            return Ok(SolverResult::new(
                SearchOutcome::Solved(Vec::new()),
                SearchStats::default(),
                start_time,
            )
            .with_reason("no disks to move"));
        }
        [disk] => {
            let moves = vec![Move::new(disk.size, START_PEG, END_PEG)];
            return Ok(SolverResult::new(
                SearchOutcome::Solved(moves),
                SearchStats::default(),
                start_time,
            )
            .with_reason("single disk moves directly"));
        }
        _ => {}
    }

    if puzzle.is_monochrome() {
        debug!(disk_count, "all disks share one color, no search needed");
        return Ok(SolverResult::new(
            SearchOutcome::Unsolvable,
            SearchStats::default(),
            start_time,
        )
        .with_reason("all disks share one color"));
    }

    let initial = Configuration::stacked_on(START_PEG, &puzzle.disks);
    let target = Configuration::stacked_on(END_PEG, &puzzle.disks);
    search(&initial, &target, config)
}

/// A node on the active search path
#[derive(Debug, Clone, Copy)]
struct SearchFrame {
    /// Index into `CANDIDATE_MOVES` of the next move to try
    next_candidate: usize,
    /// Move that led from the parent to this node; `None` at the root
    entered_by: Option<(PegId, PegId, Disk)>,
}

impl SearchFrame {
    fn root() -> Self {
        Self {
            next_candidate: 0,
            entered_by: None,
        }
    }

    fn entered_by(from: PegId, to: PegId, disk: Disk) -> Self {
        Self {
            next_candidate: 0,
            entered_by: Some((from, to, disk)),
        }
    }
}

/// Search for a move sequence turning `initial` into `target`.
///
/// The target test compares disk order on every peg, not just membership.
pub fn search(
    initial: &Configuration,
    target: &Configuration,
    config: &SolverConfig,
) -> Result<SolverResult> {
    let start_time = Instant::now();
    let deadline = config.timeout.map(|timeout| start_time + timeout);

    let mut state = initial.clone();
    let mut stats = SearchStats::default();
    let mut moves: Vec<Move> = Vec::new();
    let mut on_path: HashSet<Configuration> = HashSet::new();
    let mut stack: Vec<SearchFrame> = Vec::new();

    debug!(initial = %initial, target = %target, "starting search");

    if state == *target {
        return Ok(SolverResult::new(SearchOutcome::Solved(moves), stats, start_time));
    }

    on_path.insert(state.clone());
    stats.states_expanded = 1;
    stack.push(SearchFrame::root());

    while let Some(frame) = stack.last_mut() {
        if deadline.map_or(false, |deadline| Instant::now() > deadline) {
            return Ok(aborted("timeout", stats, start_time));
        }

        // Next legal candidate for this node
        let mut next = None;
        while frame.next_candidate < CANDIDATE_MOVES.len() {
            let (from, to) = CANDIDATE_MOVES[frame.next_candidate];
            frame.next_candidate += 1;
            if is_legal_move(&state, from, to) {
                next = Some((from, to));
                break;
            }
        }

        let Some((from, to)) = next else {
            // Every candidate tried: leave this node and undo the move into it
            let entered_by = frame.entered_by;
            stack.pop();
            on_path.remove(&state);
            if let Some((from, to, disk)) = entered_by {
                undo_move(&mut state, from, to, disk);
                moves.pop();
                stats.backtracks += 1;
            }
            continue;
        };

        let disk = apply_move(&mut state, from, to)?;
        stats.moves_applied += 1;
        moves.push(Move::new(disk.size, from, to));

        if state == *target {
            debug!(
                moves = moves.len(),
                states_expanded = stats.states_expanded,
                "target reached"
            );
            return Ok(SolverResult::new(SearchOutcome::Solved(moves), stats, start_time));
        }

        if on_path.contains(&state) {
            undo_move(&mut state, from, to, disk);
            moves.pop();
            stats.backtracks += 1;
            continue;
        }

        if config
            .max_expansions
            .map_or(false, |limit| stats.states_expanded >= limit)
        {
            return Ok(aborted("expansion limit reached", stats, start_time));
        }

        trace!(depth = moves.len(), state = %state, "expanding");
        on_path.insert(state.clone());
        stats.states_expanded += 1;
        stats.max_depth = stats.max_depth.max(moves.len());
        stack.push(SearchFrame::entered_by(from, to, disk));
    }

    debug!(
        states_expanded = stats.states_expanded,
        backtracks = stats.backtracks,
        "search exhausted without reaching target"
    );
    let mut result = SolverResult::new(SearchOutcome::Unsolvable, stats, start_time);
    result.search_exhausted = true;
    Ok(result)
}

fn aborted(reason: &str, stats: SearchStats, start_time: Instant) -> SolverResult {
    debug!(reason, states_expanded = stats.states_expanded, "search aborted");
    SolverResult::new(SearchOutcome::Aborted(reason.to_string()), stats, start_time)
}
