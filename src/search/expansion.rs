use crate::Board;
use crate::Map;
use crate::Move;
use crate::Node;
use crate::Piece;
use crate::Ticket;
use crate::Tickets;

/// Every `(ticket, target)` one edge away from `from` that is paid for
/// with a held ticket and not blocked. One step per qualifying transport.
pub fn steps<'a>(
    map: &'a Map,
    from: Node,
    tickets: &'a Tickets,
    blocked: &'a [Node],
) -> impl Iterator<Item = (Ticket, Node)> + 'a {
    map.neighbors(from)
        .into_iter()
        .flatten()
        .filter(move |target| !blocked.contains(target))
        .flat_map(move |target| {
            map.transports(from, target)
                .iter()
                .map(|transport| transport.ticket())
                .filter(move |&ticket| tickets.has(ticket))
                .map(move |ticket| (ticket, target))
        })
}

/// Hypothetical moves for `piece` standing on `from`, used only inside
/// the search.
///
/// Single moves only: double moves and secret tickets are never
/// simulated, to keep the branching factor down. Targets held by any
/// other pursuer are excluded. Empty once the board has a winner.
pub fn expand(board: &dyn Board, piece: Piece, from: Node) -> Vec<Move> {
    if !board.winner().is_empty() {
        return Vec::new();
    }
    let Some(tickets) = board.tickets(piece) else {
        return Vec::new();
    };
    let blocked = board
        .pursuers()
        .into_iter()
        .filter(|&p| p != piece)
        .filter_map(|p| board.location(p))
        .collect::<Vec<_>>();
    steps(&board.setup().map, from, tickets, &blocked)
        .filter(|(ticket, _)| !ticket.is_scarce())
        .map(|(ticket, target)| Move::single(piece, from, ticket, target))
        .collect()
}
