use super::*;
use crate::Node;
use crate::steps;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// An in-memory [`Board`] that knows where the fugitive really is.
///
/// `Table` is the game master's copy of a position: the CLI loads
/// scenarios into it, and the tests and benchmarks build positions with
/// it directly. It reports capture as a pursuer win and survival past the
/// last scheduled round as a fugitive win, and lists the due piece's legal
/// moves, including secret and double moves for the fugitive. It does not
/// apply moves; each position is built once and read.
#[derive(Debug, Clone)]
pub struct Table {
    setup: Setup,
    fugitive: Node,
    pursuers: BTreeMap<Piece, Node>,
    tickets: BTreeMap<Piece, Tickets>,
    travels: Vec<Entry>,
    turn: Piece,
}

impl Table {
    /// A table with only the fugitive on it, due to move.
    pub fn new(setup: Setup, fugitive: Node, tickets: Tickets) -> Self {
        Self {
            setup,
            fugitive,
            pursuers: BTreeMap::new(),
            tickets: BTreeMap::from([(Piece::Fugitive, tickets)]),
            travels: Vec::new(),
            turn: Piece::Fugitive,
        }
    }
    pub fn with_pursuer(mut self, colour: Colour, at: Node, tickets: Tickets) -> Self {
        self.pursuers.insert(Piece::from(colour), at);
        self.tickets.insert(Piece::from(colour), tickets);
        self
    }
    pub fn with_travels(mut self, travels: Vec<Entry>) -> Self {
        self.travels = travels;
        self
    }
    pub fn with_turn(mut self, piece: Piece) -> Self {
        self.turn = piece;
        self
    }
    /// The fugitive's true location.
    pub fn fugitive(&self) -> Node {
        self.fugitive
    }
    pub fn turn(&self) -> Piece {
        self.turn
    }

    fn captured(&self) -> bool {
        self.pursuers.values().any(|&at| at == self.fugitive)
    }
    fn escaped(&self) -> bool {
        self.turn.is_fugitive() && self.round() >= self.setup.rounds()
    }
    /// Single steps from `from`, with every unblocked neighbor also
    /// reachable on a secret ticket when one is held.
    fn reachable(
        &self,
        from: Node,
        tickets: &Tickets,
        blocked: &[Node],
    ) -> BTreeSet<(Ticket, Node)> {
        let ref map = self.setup.map;
        let mut reachable = steps(map, from, tickets, blocked).collect::<BTreeSet<_>>();
        if tickets.has(Ticket::Secret) {
            reachable.extend(
                map.neighbors(from)
                    .into_iter()
                    .flatten()
                    .filter(|n| !blocked.contains(n))
                    .map(|n| (Ticket::Secret, n)),
            );
        }
        reachable
    }
    fn fugitive_moves(&self) -> Vec<Move> {
        let Some(tickets) = self.tickets.get(&Piece::Fugitive) else {
            return Vec::new();
        };
        let source = self.fugitive;
        let ref blocked = self.occupied();
        let firsts = self.reachable(source, tickets, blocked);
        let mut moves = firsts
            .iter()
            .map(|&(ticket, target)| Move::single(Piece::Fugitive, source, ticket, target))
            .collect::<Vec<_>>();
        if tickets.has(Ticket::Double) && self.round() + 2 <= self.setup.rounds() {
            for &first in firsts.iter() {
                let ref rest = tickets.spend(first.0);
                for second in self.reachable(first.1, rest, blocked) {
                    moves.push(Move::double(Piece::Fugitive, source, first, second));
                }
            }
        }
        moves
    }
    fn pursuer_moves(&self, piece: Piece) -> Vec<Move> {
        let (Some(&source), Some(tickets)) = (self.pursuers.get(&piece), self.tickets.get(&piece))
        else {
            return Vec::new();
        };
        let blocked = self
            .pursuers
            .iter()
            .filter(|(p, _)| **p != piece)
            .map(|(_, &at)| at)
            .collect::<Vec<_>>();
        steps(&self.setup.map, source, tickets, &blocked)
            .map(|(ticket, target)| Move::single(piece, source, ticket, target))
            .collect()
    }
}

impl Board for Table {
    fn players(&self) -> BTreeSet<Piece> {
        std::iter::once(Piece::Fugitive)
            .chain(self.pursuers.keys().copied())
            .collect()
    }
    fn setup(&self) -> &Setup {
        &self.setup
    }
    fn location(&self, piece: Piece) -> Option<Node> {
        self.pursuers.get(&piece).copied()
    }
    fn tickets(&self, piece: Piece) -> Option<&Tickets> {
        self.tickets.get(&piece)
    }
    fn travels(&self) -> &[Entry] {
        &self.travels
    }
    fn winner(&self) -> BTreeSet<Piece> {
        if self.captured() {
            self.pursuers.keys().copied().collect()
        } else if self.escaped() {
            BTreeSet::from([Piece::Fugitive])
        } else {
            BTreeSet::new()
        }
    }
    fn moves(&self) -> Vec<Move> {
        if !self.winner().is_empty() {
            Vec::new()
        } else if self.turn.is_fugitive() {
            self.fugitive_moves()
        } else {
            self.pursuer_moves(self.turn)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Map;
    use crate::Transport;

    /// 0 -taxi- 1 -bus- 2 -taxi- 3, with a ferry 0 ~ 3
    fn setup() -> Setup {
        let map = [
            (0, 1, Transport::Taxi),
            (1, 2, Transport::Bus),
            (2, 3, Transport::Taxi),
            (0, 3, Transport::Ferry),
        ]
        .into_iter()
        .collect::<Map>();
        Setup::standard(map)
    }

    #[test]
    fn fugitive_singles_include_secret_routes() {
        let table = Table::new(setup(), 0, Tickets::from([(Ticket::Taxi, 1), (Ticket::Secret, 1)]));
        let moves = table.moves();
        assert!(moves.contains(&Move::single(Piece::Fugitive, 0, Ticket::Taxi, 1)));
        assert!(moves.contains(&Move::single(Piece::Fugitive, 0, Ticket::Secret, 1)));
        assert!(moves.contains(&Move::single(Piece::Fugitive, 0, Ticket::Secret, 3)));
        assert_eq!(moves.len(), 3);
    }

    #[test]
    fn fugitive_doubles_spend_tickets() {
        let tickets = Tickets::from([(Ticket::Taxi, 1), (Ticket::Bus, 1), (Ticket::Double, 1)]);
        let table = Table::new(setup(), 0, tickets);
        let doubles = table.moves().into_iter().filter(Move::is_double).collect::<Vec<_>>();
        assert_eq!(
            doubles,
            vec![Move::double(Piece::Fugitive, 0, (Ticket::Taxi, 1), (Ticket::Bus, 2))]
        );
    }

    #[test]
    fn no_doubles_in_last_round() {
        let tickets = Tickets::from([(Ticket::Taxi, 2), (Ticket::Double, 1)]);
        let mut travels = vec![Entry::hidden(Ticket::Taxi); 22];
        travels.push(Entry::revealed(Ticket::Taxi, 0));
        let table = Table::new(setup(), 0, tickets).with_travels(travels);
        assert_eq!(table.turn(), Piece::Fugitive);
        assert_eq!(table.travels()[22].location, Some(0));
        assert!(table.winner().is_empty());
        assert!(table.moves().iter().all(|m| !m.is_double()));
    }

    #[test]
    fn pursuers_block_and_capture() {
        let table = Table::new(setup(), 0, Tickets::fugitive(1))
            .with_pursuer(Colour::Red, 1, Tickets::pursuer())
            .with_turn(Piece::Pursuer(Colour::Red));
        assert_eq!(table.turn(), Piece::Pursuer(Colour::Red));
        let moves = table.moves();
        assert!(moves.contains(&Move::single(Piece::Pursuer(Colour::Red), 1, Ticket::Taxi, 0)));
        assert!(moves.contains(&Move::single(Piece::Pursuer(Colour::Red), 1, Ticket::Bus, 2)));
        let caught = Table::new(setup(), 1, Tickets::fugitive(1))
            .with_pursuer(Colour::Red, 1, Tickets::pursuer());
        assert_eq!(caught.winner(), BTreeSet::from([Piece::Pursuer(Colour::Red)]));
        assert!(caught.moves().is_empty());
    }

    #[test]
    fn fugitive_avoids_pursuers() {
        let table = Table::new(setup(), 0, Tickets::from([(Ticket::Taxi, 1), (Ticket::Secret, 1)]))
            .with_pursuer(Colour::Blue, 1, Tickets::pursuer());
        assert!(table.moves().iter().all(|m| m.destination() == 3));
        assert_eq!(table.occupied(), vec![1]);
        assert_eq!(table.pursuers(), vec![Piece::Pursuer(Colour::Blue)]);
    }
}
