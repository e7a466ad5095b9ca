//! Backward path reconstruction over an explored graph.

use crate::explorer::ExploredGraph;
use crate::puzzle::Move;

/// Walk backward from the solved state to the search root, returning the
/// move sequence in forward replay order. Empty when the graph holds no
/// solved state or the root itself is solved.
///
/// Several transitions can share a destination fingerprint; the first one
/// in recorded order wins. That edge is always the one that first
/// discovered the state, so the walk strictly retreats toward the root.
/// The walk stops at the root fingerprint; later back-edges into the root
/// must not be followed.
pub fn reconstruct_path(graph: &ExploredGraph) -> Vec<Move> {
    let Some(solved) = graph.solved_state() else {
        return Vec::new();
    };

    let mut moves = Vec::new();
    let mut current = solved.fingerprint.as_str();

    while current != graph.root {
        let Some(transition) = graph
            .transitions
            .iter()
            .find(|t| t.to_fingerprint == current)
        else {
            break;
        };

        moves.push(transition.mv);
        current = transition.from_fingerprint.as_str();
    }

    moves.reverse();
    moves
}
