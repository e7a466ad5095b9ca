//! Tube configuration types and the canonical fingerprint encoding.
//!
//! These types serialize directly to the JSON format the CLI consumes and
//! produces.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A color/variant identifier. Carries no meaning beyond equality.
pub type Item = u8;

/// A single tube: a capacity-bounded stack, last element on top.
pub type Tube = Vec<Item>;

/// A slot inside a configuration: tube index plus item index within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub tube_index: usize,
    pub item_index: usize,
}

impl Position {
    pub fn new(tube_index: usize, item_index: usize) -> Self {
        Self {
            tube_index,
            item_index,
        }
    }
}

/// One transfer: pop the top item of the source tube, push it onto the
/// destination tube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    pub fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }
}

/// Precondition violations in an input configuration.
///
/// These are rejected before any search runs; nothing inside the core
/// recovers from them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidPuzzle {
    #[error("capacity must be a positive integer")]
    ZeroCapacity,

    #[error("tube {tube_index} holds {len} items but capacity is {capacity}")]
    OverfullTube {
        tube_index: usize,
        len: usize,
        capacity: usize,
    },
}

/// The complete puzzle configuration: ordered tubes plus the uniform
/// per-tube capacity.
///
/// Values are immutable from the search's point of view: applying a move
/// produces a new `Puzzle`, the parent is never altered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub tubes: Vec<Tube>,
    pub capacity: usize,
}

impl Puzzle {
    /// Build a validated configuration.
    pub fn new(tubes: Vec<Tube>, capacity: usize) -> Result<Self, InvalidPuzzle> {
        let puzzle = Self { tubes, capacity };
        puzzle.validate()?;
        Ok(puzzle)
    }

    /// Check the configuration invariants: positive capacity, no tube
    /// longer than the capacity.
    pub fn validate(&self) -> Result<(), InvalidPuzzle> {
        if self.capacity == 0 {
            return Err(InvalidPuzzle::ZeroCapacity);
        }
        for (tube_index, tube) in self.tubes.iter().enumerate() {
            if tube.len() > self.capacity {
                return Err(InvalidPuzzle::OverfullTube {
                    tube_index,
                    len: tube.len(),
                    capacity: self.capacity,
                });
            }
        }
        Ok(())
    }

    /// Canonical key for deduplication: item values joined with `,`, tubes
    /// joined with `;`. Empty tubes stay visible as empty segments, so two
    /// configurations share a fingerprint iff they are structurally equal.
    pub fn fingerprint(&self) -> String {
        self.tubes
            .iter()
            .map(|tube| {
                tube.iter()
                    .map(|item| item.to_string())
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .collect::<Vec<_>>()
            .join(";")
    }

    /// Whether every non-empty tube is full to capacity and monochrome.
    pub fn is_solved(&self) -> bool {
        self.tubes
            .iter()
            .filter(|tube| !tube.is_empty())
            .all(|tube| tube.len() == self.capacity && tube.iter().all(|&item| item == tube[0]))
    }

    /// Apply a move, producing the successor configuration.
    ///
    /// The move is expected to come from [`crate::moves::legal_moves`]; a
    /// move whose source tube is empty leaves the copy unchanged.
    pub fn apply(&self, mv: &Move) -> Puzzle {
        let mut next = self.clone();
        if let Some(item) = next.tubes[mv.from.tube_index].pop() {
            next.tubes[mv.to.tube_index].push(item);
        }
        next
    }

    /// Replay a move sequence in order, returning the final configuration.
    pub fn replay(&self, moves: &[Move]) -> Puzzle {
        moves.iter().fold(self.clone(), |state, mv| state.apply(mv))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn puzzle(tubes: Vec<Tube>, capacity: usize) -> Puzzle {
        Puzzle { tubes, capacity }
    }

    #[test]
    fn test_fingerprint_encoding() {
        let p = puzzle(vec![vec![1, 2], vec![2, 1], vec![]], 2);
        assert_eq!(p.fingerprint(), "1,2;2,1;");

        let empty = puzzle(vec![vec![], vec![]], 2);
        assert_eq!(empty.fingerprint(), ";");
    }

    #[test]
    fn test_fingerprint_idempotent_and_injective() {
        let p = puzzle(vec![vec![1, 2], vec![2, 1], vec![]], 2);
        assert_eq!(p.fingerprint(), p.fingerprint());

        // Same multiset of tubes, different order: distinct fingerprints.
        let a = puzzle(vec![vec![1], vec![2]], 2);
        let b = puzzle(vec![vec![2], vec![1]], 2);
        assert_ne!(a.fingerprint(), b.fingerprint());

        // Empty tube position matters.
        let c = puzzle(vec![vec![1], vec![]], 2);
        let d = puzzle(vec![vec![], vec![1]], 2);
        assert_ne!(c.fingerprint(), d.fingerprint());
    }

    #[test]
    fn test_is_solved() {
        assert!(puzzle(vec![vec![1, 1], vec![2, 2], vec![]], 2).is_solved());
        assert!(puzzle(vec![vec![], vec![]], 2).is_solved());

        // Mixed tube.
        assert!(!puzzle(vec![vec![1, 2], vec![2, 1], vec![]], 2).is_solved());
        // Monochrome but not full.
        assert!(!puzzle(vec![vec![1], vec![1], vec![]], 2).is_solved());
    }

    #[test]
    fn test_apply_leaves_parent_untouched() {
        let parent = puzzle(vec![vec![1, 2], vec![2, 1], vec![]], 2);
        let mv = Move::new(Position::new(0, 1), Position::new(2, 0));

        let child = parent.apply(&mv);

        assert_eq!(parent.tubes, vec![vec![1, 2], vec![2, 1], vec![]]);
        assert_eq!(child.tubes, vec![vec![1], vec![2, 1], vec![2]]);
    }

    #[test]
    fn test_replay() {
        let start = puzzle(vec![vec![1], vec![1], vec![]], 2);
        let moves = [Move::new(Position::new(0, 0), Position::new(1, 1))];

        let end = start.replay(&moves);

        assert_eq!(end.tubes, vec![vec![], vec![1, 1], vec![]]);
        assert!(end.is_solved());
    }

    #[test]
    fn test_validate() {
        assert!(Puzzle::new(vec![vec![1, 2], vec![]], 2).is_ok());

        assert_eq!(
            Puzzle::new(vec![vec![1]], 0),
            Err(InvalidPuzzle::ZeroCapacity)
        );
        assert_eq!(
            Puzzle::new(vec![vec![1], vec![1, 2, 3]], 2),
            Err(InvalidPuzzle::OverfullTube {
                tube_index: 1,
                len: 3,
                capacity: 2,
            })
        );
    }

    #[test]
    fn test_serde_wire_format() {
        let json = r#"{"tubes": [[1, 2], []], "capacity": 2}"#;
        let p: Puzzle = serde_json::from_str(json).unwrap();
        assert_eq!(p, puzzle(vec![vec![1, 2], vec![]], 2));

        let mv = Move::new(Position::new(0, 1), Position::new(1, 0));
        assert_eq!(
            serde_json::to_string(&mv).unwrap(),
            r#"{"from":{"tubeIndex":0,"itemIndex":1},"to":{"tubeIndex":1,"itemIndex":0}}"#
        );
    }
}
