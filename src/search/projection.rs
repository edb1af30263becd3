use super::*;
use crate::Board;
use crate::Entry;
use crate::Move;
use crate::Node;
use crate::Piece;
use crate::Setup;
use crate::Tickets;
use std::collections::BTreeSet;

/// Who moves next on a [`Projection`], and from where.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// The fugitive, standing on its simulated location.
    Fugitive(Node),
    /// A pursuer, standing wherever the board says it is.
    Pursuer(Piece),
}

impl Control {
    /// The head of `next`, or the fugitive on `at` once the round is over.
    pub fn next(at: Node, next: &[Piece]) -> Self {
        match next.first() {
            Some(&pursuer) => Self::Pursuer(pursuer),
            None => Self::Fugitive(at),
        }
    }
}

/// A hypothetical board one simulated move ahead of another.
///
/// Wraps a board by reference and overrides at most two facts: one
/// pursuer's location, and whose hypothetical moves [`Board::moves`]
/// reports. Every other query is delegated unchanged. Projections are
/// cheap, never touch the board they wrap, and nest: each ply of the
/// search wraps the projection of its parent.
#[derive(Clone, Copy)]
pub struct Projection<'a> {
    inner: &'a dyn Board,
    relocation: Option<(Piece, Node)>,
    control: Option<Control>,
}

impl<'a> Projection<'a> {
    pub fn new(inner: &'a dyn Board) -> Self {
        Self {
            inner,
            relocation: None,
            control: None,
        }
    }
    /// The pursuer `piece` now stands on `node`.
    pub fn relocate(mut self, piece: Piece, node: Node) -> Self {
        self.relocation = Some((piece, node));
        self
    }
    /// Legal moves are now the hypothetical moves of this mover.
    pub fn control(mut self, control: Control) -> Self {
        self.control = Some(control);
        self
    }
    /// The same board with `next` due to move and the fugitive on `at`.
    ///
    /// This is the board after the fugitive steps to `at`, since its
    /// location is never on the board, and the board after a pursuer with
    /// nowhere to go passes.
    pub fn handoff(inner: &'a dyn Board, at: Node, next: &[Piece]) -> Self {
        Self::new(inner).control(Control::next(at, next))
    }
    /// The board after `pursuer` steps to `to`, with `next` due to move
    /// and the fugitive still on `at`.
    pub fn after_pursuer(
        inner: &'a dyn Board,
        pursuer: Piece,
        to: Node,
        at: Node,
        next: &[Piece],
    ) -> Self {
        Self::new(inner)
            .relocate(pursuer, to)
            .control(Control::next(at, next))
    }
}

impl Board for Projection<'_> {
    fn players(&self) -> BTreeSet<Piece> {
        self.inner.players()
    }
    fn setup(&self) -> &Setup {
        self.inner.setup()
    }
    fn location(&self, piece: Piece) -> Option<Node> {
        match self.relocation {
            Some((moved, node)) if moved == piece => Some(node),
            _ => self.inner.location(piece),
        }
    }
    fn tickets(&self, piece: Piece) -> Option<&Tickets> {
        self.inner.tickets(piece)
    }
    fn travels(&self) -> &[Entry] {
        self.inner.travels()
    }
    fn winner(&self) -> BTreeSet<Piece> {
        self.inner.winner()
    }
    fn moves(&self) -> Vec<Move> {
        match self.control {
            None => self.inner.moves(),
            Some(Control::Fugitive(at)) => expand(self, Piece::Fugitive, at),
            Some(Control::Pursuer(piece)) => match self.location(piece) {
                Some(from) => expand(self, piece, from),
                None => Vec::new(),
            },
        }
    }
}
