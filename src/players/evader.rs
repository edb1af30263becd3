use super::*;
use crate::*;
use anyhow::Context;
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::time::Duration;
use std::time::Instant;

/// The fugitive's decision engine.
///
/// Each turn it rebuilds the distance table, orders the legal moves by a
/// quick estimate, searches every one of them in parallel and plays the
/// best. The only state kept between turns is the set of nodes it has
/// actually moved to, which discourages running in circles.
#[derive(Debug, Clone)]
pub struct Evader {
    depth: usize,
    visited: BTreeSet<Node>,
}

impl Default for Evader {
    fn default() -> Self {
        Self::with_depth(MAX_DEPTH)
    }
}

impl Evader {
    /// An evader searching `depth` plies, counting its own move. At least one.
    pub fn with_depth(depth: usize) -> Self {
        Self {
            depth: depth.max(1),
            visited: BTreeSet::new(),
        }
    }
    pub fn depth(&self) -> usize {
        self.depth
    }
    /// Nodes moved to on previous turns.
    pub fn visited(&self) -> &BTreeSet<Node> {
        &self.visited
    }

    /// Best legal move on `board` and its score. Does not update memory.
    pub fn choose(&self, board: &dyn Board) -> anyhow::Result<(Move, Score)> {
        let ref pursuers = Self::validate(board)?;
        let moves = board.moves();
        anyhow::ensure!(!moves.is_empty(), "no legal moves for the fugitive");
        anyhow::ensure!(
            moves.iter().all(|m| m.piece().is_fugitive()),
            "board is not waiting on the fugitive"
        );
        let ref distances = Distances::from(&board.setup().map);
        let evaluator = Evaluator::new(distances, &self.visited);
        let search = Search::new(evaluator, pursuers);
        let mut moves = moves
            .into_iter()
            .map(|mv| (evaluator.estimate(board, &mv), mv))
            .collect::<Vec<_>>();
        moves.sort_by(|a, b| b.0.total_cmp(&a.0));
        let depth = self.depth - 1;
        moves
            .par_iter()
            .map(|&(_, mv)| (mv, search.root(board, &mv, depth)))
            .collect::<Vec<_>>()
            .into_iter()
            .inspect(|(mv, score)| log::debug!("[evader] {:<40} {:>+8.1}", mv.to_string(), score))
            .reduce(|best, next| if next.1 > best.1 { next } else { best })
            .context("no legal moves for the fugitive")
    }

    /// Every pursuer must be on the map with an inventory, and the
    /// fugitive must hold tickets. Returns the pursuers in turn order.
    fn validate(board: &dyn Board) -> anyhow::Result<Vec<Piece>> {
        anyhow::ensure!(
            board.players().contains(&Piece::Fugitive),
            "board has no fugitive"
        );
        board
            .tickets(Piece::Fugitive)
            .context("fugitive has no ticket inventory")?;
        let pursuers = board.pursuers();
        for &pursuer in pursuers.iter() {
            board
                .location(pursuer)
                .with_context(|| format!("{} has no location", pursuer))?;
            board
                .tickets(pursuer)
                .with_context(|| format!("{} has no ticket inventory", pursuer))?;
        }
        Ok(pursuers)
    }

    fn remember(&mut self, mv: &Move) {
        self.visited.extend(mv.destinations());
    }
}

impl Player for Evader {
    fn name(&self) -> &str {
        "evader"
    }
    /// The budget is reported against, never enforced: the search is
    /// bounded by depth alone.
    fn decide(&mut self, board: &dyn Board, budget: Duration) -> anyhow::Result<Move> {
        let start = Instant::now();
        let (mv, score) = self.choose(board)?;
        self.remember(&mv);
        let elapsed = start.elapsed();
        log::info!(
            "[evader] round {} chose {} ({:+.1}) in {:?}",
            board.round() + 1,
            mv,
            score,
            elapsed
        );
        if elapsed > budget {
            log::warn!("[evader] decision took {:?}, over the {:?} budget", elapsed, budget);
        }
        Ok(mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUDGET: Duration = Duration::from_secs(15);

    fn line(n: Node) -> Map {
        (1..n).map(|i| (i - 1, i, Transport::Taxi)).collect()
    }
    fn taxis() -> Tickets {
        Tickets::from([(Ticket::Taxi, 10)])
    }

    #[test]
    fn runs_away() {
        let table = Table::new(Setup::standard(line(5)), 2, taxis())
            .with_pursuer(Colour::Red, 4, Tickets::pursuer());
        let mv = Evader::with_depth(2).decide(&table, BUDGET).unwrap();
        assert_eq!(mv, Move::single(Piece::Fugitive, 2, Ticket::Taxi, 1));
    }

    #[test]
    fn plays_a_lost_position() {
        let table = Table::new(Setup::standard(line(3)), 0, taxis())
            .with_pursuer(Colour::Red, 2, Tickets::pursuer());
        let ref mut evader = Evader::with_depth(2);
        let (mv, score) = evader.choose(&table).unwrap();
        assert_eq!(mv.destination(), 1);
        assert_eq!(score, Score::NEG_INFINITY);
    }

    #[test]
    fn avoids_revisiting() {
        // ring 0 - 1 - 3 - 5 - 4 - 2 - 0 with the pursuer opposite the fugitive
        let map = [(0, 1), (1, 3), (3, 5), (5, 4), (4, 2), (2, 0)]
            .into_iter()
            .map(|(a, b)| (a, b, Transport::Taxi))
            .collect::<Map>();
        let table = Table::new(Setup::standard(map), 0, taxis())
            .with_pursuer(Colour::Red, 5, Tickets::pursuer());
        let ref mut evader = Evader::with_depth(2);
        evader.remember(&Move::single(Piece::Fugitive, 2, Ticket::Taxi, 1));
        let mv = evader.decide(&table, BUDGET).unwrap();
        assert_eq!(mv.destination(), 2);
        assert_eq!(evader.visited(), &BTreeSet::from([1, 2]));
    }

    #[test]
    fn remembers_both_legs_of_a_double() {
        let mut evader = Evader::default();
        evader.remember(&Move::double(Piece::Fugitive, 1, (Ticket::Bus, 7), (Ticket::Taxi, 9)));
        assert_eq!(evader.visited(), &BTreeSet::from([7, 9]));
        assert_eq!(evader.depth(), MAX_DEPTH);
    }

    #[test]
    fn alone_it_seeks_space() {
        let table = Table::new(Setup::standard(line(4)), 1, taxis());
        let mv = Evader::with_depth(1).decide(&table, BUDGET).unwrap();
        assert_eq!(mv.destination(), 2);
    }

    #[test]
    fn deeper_search_agrees() {
        let table = Table::new(Setup::standard(line(7)), 3, Tickets::fugitive(2))
            .with_pursuer(Colour::Red, 6, Tickets::pursuer())
            .with_pursuer(Colour::Blue, 5, Tickets::pursuer());
        let mv = Evader::with_depth(4).decide(&table, BUDGET).unwrap();
        assert!(mv.destination() < 3);
    }

    #[test]
    fn surrounded_is_an_error() {
        let table = Table::new(Setup::standard(line(3)), 0, taxis())
            .with_pursuer(Colour::Red, 1, Tickets::pursuer());
        assert!(table.moves().is_empty());
        assert!(Evader::default().decide(&table, BUDGET).is_err());
    }

    #[test]
    fn wrong_turn_is_an_error() {
        let table = Table::new(Setup::standard(line(3)), 0, taxis())
            .with_pursuer(Colour::Red, 2, Tickets::pursuer())
            .with_turn(Piece::Pursuer(Colour::Red));
        assert!(Evader::default().decide(&table, BUDGET).is_err());
    }

    /// Hides every pursuer.
    struct Fog(Table);
    impl Board for Fog {
        fn players(&self) -> BTreeSet<Piece> {
            self.0.players()
        }
        fn setup(&self) -> &Setup {
            self.0.setup()
        }
        fn location(&self, _: Piece) -> Option<Node> {
            None
        }
        fn tickets(&self, piece: Piece) -> Option<&Tickets> {
            self.0.tickets(piece)
        }
        fn travels(&self) -> &[Entry] {
            self.0.travels()
        }
        fn winner(&self) -> BTreeSet<Piece> {
            self.0.winner()
        }
        fn moves(&self) -> Vec<Move> {
            self.0.moves()
        }
    }

    #[test]
    fn unknown_pursuer_is_an_error() {
        let table = Table::new(Setup::standard(line(5)), 0, taxis())
            .with_pursuer(Colour::Red, 4, Tickets::pursuer());
        let error = Evader::default().decide(&Fog(table), BUDGET).unwrap_err();
        assert!(error.to_string().contains("has no location"));
    }
}
