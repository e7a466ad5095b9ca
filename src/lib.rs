//! Solver library for ball-sort tube puzzles.
//!
//! This crate decides whether a tube configuration is solvable and, when it
//! is, produces an ordered move sequence that sorts every tube into a
//! single-color or empty stack. The search is an exhaustive, bounded
//! exploration of the configuration graph with fingerprint deduplication.

pub mod explorer;
pub mod moves;
pub mod path;
pub mod puzzle;

// Re-export main types
pub use explorer::{
    explore, solve, ExploredGraph, SearchConfig, SearchResult, SearchStatus, Solution,
    StateRecord, TerminalStatus, Transition,
};
pub use moves::{legal_moves, MoveList};
pub use path::reconstruct_path;
pub use puzzle::{InvalidPuzzle, Item, Move, Position, Puzzle, Tube};
