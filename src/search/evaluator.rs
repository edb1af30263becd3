use crate::*;
use std::collections::BTreeSet;

/// Heuristic scoring from the fugitive's point of view.
///
/// Borrows the per-decision distance table and the fugitive's memory of
/// visited nodes. Both are read-only for the whole decision, so one
/// evaluator is shared by every parallel root search.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    distances: &'a Distances,
    visited: &'a BTreeSet<Node>,
}

impl<'a> Evaluator<'a> {
    pub fn new(distances: &'a Distances, visited: &'a BTreeSet<Node>) -> Self {
        Self { distances, visited }
    }

    /// Whether the pursuers have already won with the fugitive on `at`:
    /// either the board says so, or a pursuer stands on `at`.
    pub fn captured(&self, board: &dyn Board, at: Node) -> bool {
        board.winner().iter().any(Piece::is_pursuer) || board.occupied().contains(&at)
    }

    /// Hops from `node` to the nearest pursuer that can reach it at all.
    pub fn nearest(&self, board: &dyn Board, node: Node) -> Option<Hops> {
        self.distances.nearest(node, board.occupied())
    }

    /// Neighbors of `at` not held by a pursuer; 0 if `at` is not on the map.
    pub fn freedom(&self, board: &dyn Board, at: Node) -> usize {
        let occupied = board.occupied();
        board
            .setup()
            .map
            .neighbors(at)
            .map_or(0, |neighbors| neighbors.filter(|n| !occupied.contains(n)).count())
    }

    /// Value of the fugitive standing on `at`.
    ///
    /// `-∞` once captured, otherwise distance to the nearest reachable
    /// pursuer and freedom of movement, weighted. Unreachable pursuers
    /// contribute nothing to the distance term.
    pub fn position(&self, board: &dyn Board, at: Node) -> Score {
        if self.captured(board, at) {
            return Score::NEG_INFINITY;
        }
        let distance = self.nearest(board, at).unwrap_or(0) as Score;
        let freedom = self.freedom(board, at) as Score;
        DISTANCE_WEIGHT * distance + FREEDOM_WEIGHT * freedom
    }

    /// Side effects of making `mv`, always `<= 0`.
    ///
    /// Revisiting a node is discouraged. Secret and double tickets are
    /// charged for on quiet turns (early game, or the fugitive stays hidden
    /// this round) when no pursuer is within [`SAFE_DISTANCE`] of the source.
    pub fn movement(&self, board: &dyn Board, mv: &Move) -> Score {
        let mut penalty = 0.;
        if self.visited.contains(&mv.destination()) {
            penalty += REPEAT_PENALTY;
        }
        if self.is_quiet(board) && self.is_safe(board, mv.source()) {
            if mv.is_secret() {
                penalty += SECRET_PENALTY;
            }
            if mv.is_double() {
                penalty += DOUBLE_PENALTY;
            }
        }
        penalty
    }

    /// Quick guess at the value of the fugitive making `mv`, for move ordering.
    pub fn estimate(&self, board: &dyn Board, mv: &Move) -> Score {
        self.position(board, mv.destination()) + self.movement(board, mv)
    }

    fn is_quiet(&self, board: &dyn Board) -> bool {
        let round = board.round();
        let setup = board.setup();
        round < setup.rounds() / 2 || !setup.is_reveal(round)
    }
    fn is_safe(&self, board: &dyn Board, node: Node) -> bool {
        self.nearest(board, node)
            .map_or(true, |hops| hops > SAFE_DISTANCE)
    }
}
