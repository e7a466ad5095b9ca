//! CLI entry point for the sort solver.
//!
//! Usage:
//!   sort-solver solve <puzzle.json> [options]
//!   sort-solver solve --stdin [options]
//!
//! The puzzle JSON is `{"tubes": [[1, 2], [2, 1], []], "capacity": 2}`.
//! The result is printed as JSON on stdout; the exit code is 0 when the
//! puzzle is solvable and 1 otherwise.
//!
//! Options:
//!   --max-states <n>   Abort after discovering this many configurations

mod explorer;
mod moves;
mod path;
mod puzzle;

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use explorer::{solve, SearchConfig, SearchStatus, Solution};
use puzzle::{Move, Puzzle};

#[derive(Parser)]
#[command(name = "sort-solver")]
#[command(about = "Bounded exhaustive solver for ball-sort tube puzzles")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a puzzle and print the move sequence
    Solve {
        /// Path to puzzle JSON file (use --stdin to read from stdin)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Read puzzle from stdin instead of file
        #[arg(long)]
        stdin: bool,

        /// Abort after discovering this many configurations
        #[arg(long)]
        max_states: Option<usize>,
    },
}

/// Output format for a solve run
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    solvable: bool,
    status: SearchStatus,
    moves: Vec<Move>,
    states_discovered: usize,
    time_elapsed_ms: u64,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            file,
            stdin,
            max_states,
        } => {
            // Read puzzle JSON
            let json_content = if stdin {
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .expect("Failed to read from stdin");
                buffer
            } else if let Some(path) = file {
                fs::read_to_string(&path)
                    .unwrap_or_else(|e| panic!("Failed to read file {:?}: {}", path, e))
            } else {
                eprintln!("Error: Must provide either a file path or --stdin");
                std::process::exit(1);
            };

            // Parse puzzle
            let puzzle: Puzzle = match serde_json::from_str(&json_content) {
                Ok(p) => p,
                Err(e) => {
                    eprintln!("Error parsing puzzle JSON: {}", e);
                    std::process::exit(1);
                }
            };

            // Reject malformed configurations before searching
            if let Err(e) = puzzle.validate() {
                eprintln!("Error: invalid puzzle: {}", e);
                std::process::exit(1);
            }

            let config = SearchConfig { max_states };

            // Run the search
            let solution = solve(&puzzle, &config);

            // Print JSON output
            let output = format_solution(&solution);
            println!("{}", serde_json::to_string_pretty(&output).unwrap());

            // Exit with appropriate code
            if solution.status == SearchStatus::Solved {
                std::process::exit(0);
            } else {
                std::process::exit(1);
            }
        }
    }
}

fn format_solution(solution: &Solution) -> SolveOutput {
    SolveOutput {
        solvable: solution.status == SearchStatus::Solved,
        status: solution.status,
        moves: solution.moves.clone(),
        states_discovered: solution.states_discovered,
        time_elapsed_ms: solution.time_elapsed_ms,
    }
}
