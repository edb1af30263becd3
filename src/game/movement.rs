use super::*;
use crate::Node;

/// A move made by one piece.
///
/// `Single` travels one edge on one ticket. `Double` is the fugitive's
/// two consecutive edges in one turn, paid for with a double-move ticket
/// in addition to the two travel tickets; its effective destination is
/// the second one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Move {
    Single {
        piece: Piece,
        source: Node,
        ticket: Ticket,
        target: Node,
    },
    Double {
        piece: Piece,
        source: Node,
        ticket1: Ticket,
        via: Node,
        ticket2: Ticket,
        target: Node,
    },
}

impl Move {
    pub fn single(piece: Piece, source: Node, ticket: Ticket, target: Node) -> Self {
        Self::Single {
            piece,
            source,
            ticket,
            target,
        }
    }
    pub fn double(
        piece: Piece,
        source: Node,
        first: (Ticket, Node),
        second: (Ticket, Node),
    ) -> Self {
        Self::Double {
            piece,
            source,
            ticket1: first.0,
            via: first.1,
            ticket2: second.0,
            target: second.1,
        }
    }
    pub fn piece(&self) -> Piece {
        match *self {
            Self::Single { piece, .. } | Self::Double { piece, .. } => piece,
        }
    }
    pub fn source(&self) -> Node {
        match *self {
            Self::Single { source, .. } | Self::Double { source, .. } => source,
        }
    }
    /// Where the piece ends up.
    pub fn destination(&self) -> Node {
        match *self {
            Self::Single { target, .. } | Self::Double { target, .. } => target,
        }
    }
    /// Every node the piece stops on, in order.
    pub fn destinations(&self) -> Vec<Node> {
        match *self {
            Self::Single { target, .. } => vec![target],
            Self::Double { via, target, .. } => vec![via, target],
        }
    }
    /// Travel tickets spent, in order. Excludes the double-move ticket itself.
    pub fn tickets(&self) -> Vec<Ticket> {
        match *self {
            Self::Single { ticket, .. } => vec![ticket],
            Self::Double {
                ticket1, ticket2, ..
            } => vec![ticket1, ticket2],
        }
    }
    pub fn is_double(&self) -> bool {
        matches!(self, Self::Double { .. })
    }
    pub fn is_secret(&self) -> bool {
        self.tickets().contains(&Ticket::Secret)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single {
                piece,
                source,
                ticket,
                target,
            } => write!(f, "{} {} --{}--> {}", piece, source, ticket, target),
            Self::Double {
                piece,
                source,
                ticket1,
                via,
                ticket2,
                target,
            } => write!(
                f,
                "{} {} --{}--> {} --{}--> {}",
                piece, source, ticket1, via, ticket2, target
            ),
        }
    }
}
