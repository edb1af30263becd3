use crate::Board;
use crate::Move;
use std::time::Duration;

/// Trait for entities that choose moves.
///
/// Called once per turn by whatever runs the game, with a read-only view
/// of the board and the time allowed for the decision. The board's
/// [`Board::moves`] are the legal moves for this player's turn.
pub trait Player {
    /// Display name.
    fn name(&self) -> &str;
    /// Choose one of the board's legal moves.
    fn decide(&mut self, board: &dyn Board, budget: Duration) -> anyhow::Result<Move>;
}
