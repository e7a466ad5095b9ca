//! Exhaustive exploration of the configuration space.
//!
//! The explorer discovers every configuration reachable from the initial
//! one, deduplicating by fingerprint, and stops as soon as a solved
//! configuration comes off the pending list. The pending list is worked
//! LIFO (fast at finding *a* solution), so the path found first is not
//! necessarily the shortest one.

use std::collections::HashSet;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::moves::legal_moves;
use crate::path::reconstruct_path;
use crate::puzzle::{Move, Puzzle};

/// Configuration for one search run.
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    /// Cap on distinct configurations to discover before the search gives
    /// up. `None` means unbounded; the state space is finite, so the run
    /// still terminates.
    pub max_states: Option<usize>,
}

/// Terminal classification of a discovered configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TerminalStatus {
    /// Every non-empty tube is full and monochrome.
    Solved,
    /// No legal moves and not solved.
    Stuck,
    /// Has legal moves, not solved.
    Open,
}

/// A discovered configuration tagged with its fingerprint and status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateRecord {
    pub fingerprint: String,
    pub status: TerminalStatus,
}

/// One traversed edge of the configuration graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transition {
    pub from_fingerprint: String,
    #[serde(rename = "move")]
    pub mv: Move,
    pub to_fingerprint: String,
}

/// The accumulated graph of one search run.
///
/// Every fingerprint appears at most once in `states`; `transitions` keeps
/// one entry per edge traversed, so a fingerprint can show up as the
/// destination of several transitions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExploredGraph {
    /// Fingerprint of the initial configuration the search started from.
    pub root: String,
    pub states: Vec<StateRecord>,
    pub transitions: Vec<Transition>,
}

impl ExploredGraph {
    /// Whether any discovered configuration is solved.
    pub fn is_solvable(&self) -> bool {
        self.solved_state().is_some()
    }

    /// The solved state record, if the search reached one.
    pub fn solved_state(&self) -> Option<&StateRecord> {
        self.states
            .iter()
            .find(|state| state.status == TerminalStatus::Solved)
    }
}

/// How a search run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchStatus {
    /// A solved configuration was reached.
    Solved,
    /// The reachable space was exhausted without finding a solved state.
    Unsolvable,
    /// The discovered-state cap was hit; the search is incomplete and says
    /// nothing about solvability.
    Aborted,
}

/// Result of the explorer: the graph plus run metrics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub status: SearchStatus,
    pub graph: ExploredGraph,
    /// Distinct fingerprints discovered, expanded or not.
    pub states_discovered: usize,
    pub time_elapsed_ms: u64,
}

/// Explore the configuration space reachable from `puzzle`.
///
/// The configuration must satisfy [`Puzzle::validate`]; exploring an
/// invalid configuration is a precondition violation.
///
/// Each iteration pops one pending configuration. A solved one is recorded
/// and ends the run immediately. A configuration without legal moves is
/// recorded as stuck and not expanded. Anything else is recorded as open
/// and expanded: every legal move yields a transition (recorded even when
/// the successor is already known), and first-time successors join the
/// pending list.
pub fn explore(puzzle: &Puzzle, config: &SearchConfig) -> SearchResult {
    let start_time = Instant::now();
    let root = puzzle.fingerprint();

    let mut graph = ExploredGraph {
        root: root.clone(),
        states: Vec::new(),
        transitions: Vec::new(),
    };

    let mut discovered: HashSet<String> = HashSet::new();
    discovered.insert(root);

    // LIFO pending list, worked from the back.
    let mut pending: Vec<Puzzle> = vec![puzzle.clone()];

    let mut status = SearchStatus::Unsolvable;

    while let Some(current) = pending.pop() {
        if let Some(cap) = config.max_states {
            if discovered.len() > cap {
                status = SearchStatus::Aborted;
                break;
            }
        }

        let fingerprint = current.fingerprint();

        if current.is_solved() {
            graph.states.push(StateRecord {
                fingerprint,
                status: TerminalStatus::Solved,
            });
            status = SearchStatus::Solved;
            break;
        }

        let moves = legal_moves(&current);
        if moves.is_empty() {
            graph.states.push(StateRecord {
                fingerprint,
                status: TerminalStatus::Stuck,
            });
            continue;
        }

        graph.states.push(StateRecord {
            fingerprint: fingerprint.clone(),
            status: TerminalStatus::Open,
        });

        for mv in &moves {
            let successor = current.apply(mv);
            let to_fingerprint = successor.fingerprint();

            // One entry per edge traversed, re-entries included.
            graph.transitions.push(Transition {
                from_fingerprint: fingerprint.clone(),
                mv: *mv,
                to_fingerprint: to_fingerprint.clone(),
            });

            if discovered.insert(to_fingerprint) {
                pending.push(successor);
            }
        }
    }

    SearchResult {
        status,
        states_discovered: discovered.len(),
        time_elapsed_ms: start_time.elapsed().as_millis() as u64,
        graph,
    }
}

/// Outcome of a full solve run: search status plus the reconstructed path.
#[derive(Debug, Clone)]
pub struct Solution {
    pub status: SearchStatus,
    /// Forward move sequence from the initial configuration to the solved
    /// one. Empty when the puzzle is unsolvable, the search aborted, or the
    /// initial configuration is already solved.
    pub moves: Vec<Move>,
    pub states_discovered: usize,
    pub time_elapsed_ms: u64,
}

/// Explore and reconstruct in one call. This is what the CLI runs.
pub fn solve(puzzle: &Puzzle, config: &SearchConfig) -> Solution {
    let result = explore(puzzle, config);
    let moves = reconstruct_path(&result.graph);

    Solution {
        status: result.status,
        moves,
        states_discovered: result.states_discovered,
        time_elapsed_ms: result.time_elapsed_ms,
    }
}
