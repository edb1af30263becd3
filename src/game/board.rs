use super::*;
use crate::Node;
use std::collections::BTreeSet;

/// Read-only view of a game in progress.
///
/// The authoritative game lives elsewhere; the search only ever reads it
/// through this trait, and simulates hypothetical futures by wrapping it
/// (see [`Projection`](crate::Projection)).
///
/// Implementations must be shareable across threads: root moves are
/// searched in parallel against the same board.
pub trait Board: Sync {
    /// Every piece in the game, fugitive first, pursuers in turn order.
    fn players(&self) -> BTreeSet<Piece>;
    fn setup(&self) -> &Setup;
    /// Location of a pursuer. The fugitive's location is never public.
    fn location(&self, piece: Piece) -> Option<Node>;
    fn tickets(&self, piece: Piece) -> Option<&Tickets>;
    /// The fugitive's public history, one entry per completed round.
    fn travels(&self) -> &[Entry];
    /// Winning pieces; empty while the game is ongoing.
    fn winner(&self) -> BTreeSet<Piece>;
    /// Legal moves for whichever piece is due to move.
    fn moves(&self) -> Vec<Move>;

    /// Pursuers in turn order.
    fn pursuers(&self) -> Vec<Piece> {
        self.players()
            .into_iter()
            .filter(Piece::is_pursuer)
            .collect()
    }
    /// Nodes currently held by pursuers.
    fn occupied(&self) -> Vec<Node> {
        self.pursuers()
            .into_iter()
            .filter_map(|p| self.location(p))
            .collect()
    }
    /// Index of the round about to be played, 0-based.
    fn round(&self) -> usize {
        self.travels().len()
    }
}
