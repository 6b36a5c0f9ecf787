//! CLI entry point for the colored Hanoi solver.
//!
//! Usage:
//!   color-hanoi solve <puzzle.json> [options]
//!   color-hanoi solve --stdin [options]
//!   color-hanoi verify <solution.json>
//!   color-hanoi verify --stdin
//!
//! Options:
//!   --timeout <seconds>      Maximum search time (default: unbounded)
//!   --max-expansions <n>     Maximum configurations to expand (default: unbounded)
//!   --log-level <level>      error, warn, info, debug or trace (default: warn)

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use tracing::Level;

use color_hanoi::{
    find_solution, verify, verify_solution, Disk, PuzzleConfig, SearchOutcome, Solution,
    SolverConfig, SolverResult,
};

#[derive(Parser)]
#[command(name = "color-hanoi")]
#[command(about = "Backtracking solver for Towers of Hanoi with colored disks")]
#[command(version)]
struct Cli {
    /// Diagnostic log level (written to stderr)
    #[arg(long, value_enum, default_value = "warn", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for a move sequence taking every disk from peg A to peg C
    Solve {
        /// Path to puzzle JSON file (use --stdin to read from stdin)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Read puzzle from stdin instead of file
        #[arg(long)]
        stdin: bool,

        /// Maximum search time in seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// Maximum number of configurations to expand
        #[arg(long)]
        max_expansions: Option<usize>,
    },
    /// Replay a move list and check that it solves the puzzle
    Verify {
        /// Path to JSON file holding `disks` and `solution`
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Read input from stdin instead of file
        #[arg(long)]
        stdin: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

/// Input format for the verify command
#[derive(Debug, Deserialize)]
struct VerifyInput {
    disks: Vec<Disk>,
    solution: Solution,
}

/// Output format for the solve command
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    solvable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    solution: Option<Solution>,
    verified: bool,
    search_exhausted: bool,
    states_expanded: usize,
    moves_applied: usize,
    backtracks: usize,
    max_depth: usize,
    time_elapsed_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

/// Output format for the verify command
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VerifyOutput {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
    moves_replayed: usize,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(Level::from(cli.log_level))
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    match run(cli.command) {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            process::exit(2);
        }
    }
}

fn run(command: Commands) -> anyhow::Result<i32> {
    match command {
        Commands::Solve {
            file,
            stdin,
            timeout,
            max_expansions,
        } => {
            let json_content = read_input(file, stdin)?;
            let puzzle: PuzzleConfig =
                serde_json::from_str(&json_content).context("failed to parse puzzle JSON")?;

            let config = SolverConfig {
                timeout: timeout.map(Duration::from_secs),
                max_expansions,
            };

            let result = find_solution(&puzzle, &config)?;
            let output = format_result(&puzzle.disks, &result);
            println!("{}", serde_json::to_string_pretty(&output)?);

            Ok(if output.solvable { 0 } else { 1 })
        }
        Commands::Verify { file, stdin } => {
            let json_content = read_input(file, stdin)?;
            let input: VerifyInput = serde_json::from_str(&json_content)
                .context("failed to parse verification JSON")?;

            let result = verify_solution(&input.disks, &input.solution);
            let output = VerifyOutput {
                valid: result.is_valid(),
                reason: result.reason,
                moves_replayed: result.moves_replayed,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);

            Ok(if output.valid { 0 } else { 1 })
        }
    }
}

fn read_input(file: Option<PathBuf>, stdin: bool) -> anyhow::Result<String> {
    if stdin {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read from stdin")?;
        Ok(buffer)
    } else if let Some(path) = file {
        fs::read_to_string(&path).with_context(|| format!("failed to read file {:?}", path))
    } else {
        bail!("must provide either a file path or --stdin");
    }
}

fn format_result(disks: &[Disk], result: &SolverResult) -> SolveOutput {
    let solution = result.solution();
    let verified = match &solution {
        Some(moves @ Solution::Moves(_)) => verify(disks, moves),
        _ => false,
    };

    let reason = match &result.outcome {
        SearchOutcome::Aborted(reason) => Some(reason.clone()),
        _ => result.reason.clone(),
    };

    SolveOutput {
        solvable: matches!(solution, Some(Solution::Moves(_))),
        solution,
        verified,
        search_exhausted: result.search_exhausted,
        states_expanded: result.stats.states_expanded,
        moves_applied: result.stats.moves_applied,
        backtracks: result.stats.backtracks,
        max_depth: result.stats.max_depth,
        time_elapsed_ms: result.time_elapsed_ms,
        reason,
    }
}
