//! Legal-move enumeration over a tube configuration.
//!
//! This is the leaf of the search: the explorer calls it once per expanded
//! configuration, and an empty result is the signal that a non-solved
//! configuration is stuck.

use smallvec::SmallVec;

use crate::puzzle::{Item, Move, Position, Puzzle};

/// Inline buffer for the per-configuration move list. Typical puzzles have
/// only a handful of legal moves per state.
pub type MoveList = SmallVec<[Move; 16]>;

/// Whether a tube needs no further moves: full to capacity and monochrome.
fn is_settled(tube: &[Item], capacity: usize) -> bool {
    tube.len() == capacity && tube.iter().all(|&item| item == tube[0])
}

/// Enumerate every legal single-step move.
///
/// Ordering is deterministic: source tube index ascending, destination tube
/// index ascending within one source. A source is skipped when empty or
/// settled; a destination is skipped when it is the source, is full, or has
/// a different top item. No side effects.
pub fn legal_moves(puzzle: &Puzzle) -> MoveList {
    let mut moves = MoveList::new();

    for (from_index, from_tube) in puzzle.tubes.iter().enumerate() {
        let top = match from_tube.last() {
            Some(&item) => item,
            None => continue,
        };
        if is_settled(from_tube, puzzle.capacity) {
            continue;
        }

        for (to_index, to_tube) in puzzle.tubes.iter().enumerate() {
            if to_index == from_index
                || to_tube.len() == puzzle.capacity
                || to_tube.last().is_some_and(|&t| t != top)
            {
                continue;
            }

            moves.push(Move::new(
                Position::new(from_index, from_tube.len() - 1),
                Position::new(to_index, to_tube.len()),
            ));
        }
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::Tube;

    fn puzzle(tubes: Vec<Tube>, capacity: usize) -> Puzzle {
        Puzzle { tubes, capacity }
    }

    fn mv(from: (usize, usize), to: (usize, usize)) -> Move {
        Move::new(Position::new(from.0, from.1), Position::new(to.0, to.1))
    }

    #[test]
    fn test_two_mixed_tubes_and_an_empty_one() {
        let p = puzzle(vec![vec![1, 2], vec![2, 1], vec![]], 2);

        let moves = legal_moves(&p);

        assert_eq!(&moves[..], &[mv((0, 1), (2, 0)), mv((1, 1), (2, 0))]);
    }

    #[test]
    fn test_no_moves_when_all_tubes_are_full() {
        let p = puzzle(vec![vec![1, 2], vec![1, 2]], 2);
        assert!(legal_moves(&p).is_empty());
    }

    #[test]
    fn test_no_moves_when_tops_differ_and_destinations_are_full() {
        let p = puzzle(vec![vec![1, 1], vec![2, 2]], 1);
        assert!(legal_moves(&p).is_empty());
    }

    #[test]
    fn test_moves_into_an_empty_tube() {
        let p = puzzle(vec![vec![1], vec![2], vec![]], 2);

        let moves = legal_moves(&p);

        assert_eq!(&moves[..], &[mv((0, 0), (2, 0)), mv((1, 0), (2, 0))]);
    }

    #[test]
    fn test_partial_tube_matching_a_full_tube_top() {
        let p = puzzle(vec![vec![1], vec![2, 1], vec![2]], 2);

        let moves = legal_moves(&p);

        assert_eq!(&moves[..], &[mv((1, 1), (0, 1))]);
    }

    #[test]
    fn test_settled_tube_is_not_a_source() {
        let p = puzzle(vec![vec![1, 1], vec![], vec![2]], 2);

        let moves = legal_moves(&p);

        // Only the lone 2 can move, into the empty tube.
        assert_eq!(&moves[..], &[mv((2, 0), (1, 0))]);
    }

    #[test]
    fn test_enumeration_is_deterministic() {
        let p = puzzle(vec![vec![1, 2], vec![2, 1], vec![], vec![2]], 3);
        assert_eq!(legal_moves(&p), legal_moves(&p));
    }
}
