use super::*;
use crate::Board;
use crate::Move;
use crate::Node;
use crate::Piece;
use crate::Score;

/// Depth-bounded minimax with alpha-beta pruning.
///
/// Plies alternate between the fugitive, who maximizes, and each pursuer
/// in turn, who minimize. A round is the fugitive's move followed by
/// every pursuer's move in the fixed order of `pursuers`. Hypothetical
/// futures are built as nested [`Projection`]s, so the real board is
/// never touched and independent searches can share it.
///
/// The search is bounded by plies only. It never looks at a clock.
#[derive(Debug, Clone, Copy)]
pub struct Search<'a> {
    evaluator: Evaluator<'a>,
    pursuers: &'a [Piece],
}

impl<'a> Search<'a> {
    pub fn new(evaluator: Evaluator<'a>, pursuers: &'a [Piece]) -> Self {
        Self {
            evaluator,
            pursuers,
        }
    }

    /// Value of the fugitive making `mv` on the real board, looking
    /// `depth` further plies ahead.
    pub fn root(&self, board: &dyn Board, mv: &Move, depth: usize) -> Score {
        let at = mv.destination();
        let ref next = Projection::handoff(board, at, self.pursuers);
        let value = self.alphabeta(
            next,
            at,
            depth,
            Score::NEG_INFINITY,
            Score::INFINITY,
            self.pursuers,
        );
        value + self.evaluator.movement(board, mv)
    }

    /// Minimax value of `board` with the fugitive on `at`.
    ///
    /// `remaining` lists the pursuers still to move this round; when it is
    /// empty the fugitive moves next and a new round starts. The board's
    /// [`Board::moves`] must be those of the piece due to move.
    pub fn alphabeta(
        &self,
        board: &dyn Board,
        at: Node,
        depth: usize,
        alpha: Score,
        beta: Score,
        remaining: &[Piece],
    ) -> Score {
        if depth == 0 || !board.winner().is_empty() || self.evaluator.captured(board, at) {
            return self.evaluator.position(board, at);
        }
        match remaining.split_first() {
            None => self.maximize(board, depth, alpha, beta),
            Some((&pursuer, rest)) => self.minimize(board, pursuer, rest, at, depth, alpha, beta),
        }
    }

    /// Fugitive ply. Each child is searched with bounds shifted by the
    /// move's own penalty, so cutoffs are decided on the same scale the
    /// move is scored on. A fugitive with nowhere to go has lost.
    fn maximize(&self, board: &dyn Board, depth: usize, mut alpha: Score, beta: Score) -> Score {
        let moves = self.fugitive_moves(board);
        let mut best = Score::NEG_INFINITY;
        for mv in moves {
            let to = mv.destination();
            let penalty = self.evaluator.movement(board, &mv);
            let ref next = Projection::handoff(board, to, self.pursuers);
            let value = penalty
                + self.alphabeta(
                    next,
                    to,
                    depth - 1,
                    alpha - penalty,
                    beta - penalty,
                    self.pursuers,
                );
            best = best.max(value);
            alpha = alpha.max(value);
            if alpha >= beta {
                break;
            }
        }
        best
    }

    /// Pursuer ply. A pursuer with nowhere to go passes its turn.
    #[allow(clippy::too_many_arguments)]
    fn minimize(
        &self,
        board: &dyn Board,
        pursuer: Piece,
        rest: &[Piece],
        at: Node,
        depth: usize,
        alpha: Score,
        mut beta: Score,
    ) -> Score {
        let moves = self.pursuer_moves(board, pursuer, rest, at);
        if moves.is_empty() {
            let ref next = Projection::handoff(board, at, rest);
            return self.alphabeta(next, at, depth - 1, alpha, beta, rest);
        }
        let mut worst = Score::INFINITY;
        for mv in moves {
            let ref next = Projection::after_pursuer(board, pursuer, mv.destination(), at, rest);
            let value = self.alphabeta(next, at, depth - 1, alpha, beta, rest);
            worst = worst.min(value);
            beta = beta.min(value);
            if beta <= alpha {
                break;
            }
        }
        worst
    }

    /// Fugitive candidates, most promising first.
    fn fugitive_moves(&self, board: &dyn Board) -> Vec<Move> {
        let mut moves = board
            .moves()
            .into_iter()
            .map(|mv| (self.evaluator.estimate(board, &mv), mv))
            .collect::<Vec<_>>();
        moves.sort_by(|a, b| b.0.total_cmp(&a.0));
        moves.into_iter().map(|(_, mv)| mv).collect()
    }

    /// Pursuer candidates, closest to a capture first.
    fn pursuer_moves(
        &self,
        board: &dyn Board,
        pursuer: Piece,
        rest: &[Piece],
        at: Node,
    ) -> Vec<Move> {
        let mut moves = board
            .moves()
            .into_iter()
            .map(|mv| {
                let to = mv.destination();
                let ref next = Projection::after_pursuer(board, pursuer, to, at, rest);
                (self.evaluator.position(next, at), mv)
            })
            .collect::<Vec<_>>();
        moves.sort_by(|a, b| a.0.total_cmp(&b.0));
        moves.into_iter().map(|(_, mv)| mv).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::*;
    use rand::SeedableRng;
    use std::collections::BTreeSet;

    /// Unpruned minimax over the same tree the search explores.
    fn minimax(
        search: &Search,
        board: &dyn Board,
        at: Node,
        depth: usize,
        remaining: &[Piece],
    ) -> Score {
        let evaluator = search.evaluator;
        if depth == 0 || !board.winner().is_empty() || evaluator.captured(board, at) {
            return evaluator.position(board, at);
        }
        match remaining.split_first() {
            None => board
                .moves()
                .iter()
                .map(|mv| {
                    let to = mv.destination();
                    let ref next = Projection::handoff(board, to, search.pursuers);
                    let value = minimax(search, next, to, depth - 1, search.pursuers);
                    evaluator.movement(board, mv) + value
                })
                .reduce(Score::max)
                .unwrap_or(Score::NEG_INFINITY),
            Some((&pursuer, rest)) => board
                .moves()
                .iter()
                .map(|mv| {
                    let to = mv.destination();
                    let ref next = Projection::after_pursuer(board, pursuer, to, at, rest);
                    minimax(search, next, at, depth - 1, rest)
                })
                .reduce(Score::min)
                .unwrap_or_else(|| {
                    let ref next = Projection::handoff(board, at, rest);
                    minimax(search, next, at, depth - 1, rest)
                }),
        }
    }

    /// A random map with the fugitive and two or three pursuers on distinct nodes.
    fn position(rng: &mut rand::rngs::SmallRng) -> (Table, BTreeSet<Node>) {
        use rand::Rng;
        use rand::seq::SliceRandom;
        let map = Map::random(rng);
        let mut nodes = (0..map.size()).collect::<Vec<_>>();
        nodes.shuffle(rng);
        let visited = nodes[4..7].iter().copied().collect();
        let mut table = Table::new(Setup::standard(map), nodes[0], Tickets::fugitive(3));
        for (i, colour) in Colour::all().into_iter().take(rng.random_range(2..=3)).enumerate() {
            table = table.with_pursuer(colour, nodes[i + 1], Tickets::pursuer());
        }
        (table, visited)
    }

    #[test]
    fn pruning_preserves_value() {
        let ref mut rng = rand::rngs::SmallRng::seed_from_u64(42);
        for _ in 0..12 {
            let (table, ref visited) = position(rng);
            let ref distances = Distances::from(&table.setup().map);
            let ref pursuers = table.pursuers();
            let search = Search::new(Evaluator::new(distances, visited), pursuers);
            let at = table.fugitive();
            for depth in 1..=4 {
                for remaining in [&pursuers[..], &pursuers[1..], &pursuers[..0]] {
                    let ref board = Projection::handoff(&table, at, remaining);
                    let pruned = search.alphabeta(
                        board,
                        at,
                        depth,
                        Score::NEG_INFINITY,
                        Score::INFINITY,
                        remaining,
                    );
                    let full = minimax(&search, board, at, depth, remaining);
                    assert_eq!(pruned, full, "depth {depth}, {} to move", remaining.len());
                }
            }
        }
    }

    #[test]
    fn horizon_is_static_evaluation() {
        let map = (1..5).map(|i| (i - 1, i, Transport::Taxi)).collect::<Map>();
        let table = Table::new(Setup::standard(map), 0, Tickets::fugitive(1))
            .with_pursuer(Colour::Red, 4, Tickets::pursuer());
        let ref distances = Distances::from(&table.setup().map);
        let ref visited = BTreeSet::new();
        let ref pursuers = table.pursuers();
        let evaluator = Evaluator::new(distances, visited);
        let search = Search::new(evaluator, pursuers);
        let value = search.alphabeta(&table, 0, 0, Score::NEG_INFINITY, Score::INFINITY, &[]);
        assert_eq!(value, evaluator.position(&table, 0));
    }

    #[test]
    fn trapped_fugitive_has_lost() {
        // 0 - 1 - 2: the pursuer on 1 blocks the only way out of 0.
        let map = [(0, 1, Transport::Taxi), (1, 2, Transport::Taxi)]
            .into_iter()
            .collect::<Map>();
        let table = Table::new(Setup::standard(map), 0, Tickets::fugitive(1))
            .with_pursuer(Colour::Red, 1, Tickets::pursuer());
        let ref distances = Distances::from(&table.setup().map);
        let ref visited = BTreeSet::new();
        let ref pursuers = table.pursuers();
        let evaluator = Evaluator::new(distances, visited);
        let search = Search::new(evaluator, pursuers);
        let ref board = Projection::handoff(&table, 0, &[]);
        assert!(board.moves().is_empty());
        assert!(evaluator.position(board, 0).is_finite());
        let value = search.alphabeta(board, 0, 3, Score::NEG_INFINITY, Score::INFINITY, &[]);
        assert_eq!(value, Score::NEG_INFINITY);
    }

    #[test]
    fn cornered_fugitive_is_caught() {
        // 0 - 1 - 2: the pursuer on 2 reaches 1 before the fugitive can leave 0.
        let map = [(0, 1, Transport::Taxi), (1, 2, Transport::Taxi)]
            .into_iter()
            .collect::<Map>();
        let table = Table::new(Setup::standard(map), 0, Tickets::fugitive(1))
            .with_pursuer(Colour::Red, 2, Tickets::pursuer());
        let ref distances = Distances::from(&table.setup().map);
        let ref visited = BTreeSet::new();
        let ref pursuers = table.pursuers();
        let search = Search::new(Evaluator::new(distances, visited), pursuers);
        let mv = Move::single(Piece::Fugitive, 0, Ticket::Taxi, 1);
        assert_eq!(search.root(&table, &mv, 1), Score::NEG_INFINITY);
    }
}
