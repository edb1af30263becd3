use super::*;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// Remaining ticket counts for one piece.
///
/// Absent ticket types count as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tickets(BTreeMap<Ticket, usize>);

impl Tickets {
    /// Standard pursuer inventory: 11 taxi, 8 bus, 4 underground.
    pub fn pursuer() -> Self {
        Self::from([(Ticket::Taxi, 11), (Ticket::Bus, 8), (Ticket::Underground, 4)])
    }
    /// Standard fugitive inventory, with one secret ticket per pursuer.
    pub fn fugitive(pursuers: usize) -> Self {
        Self::from([
            (Ticket::Taxi, 4),
            (Ticket::Bus, 3),
            (Ticket::Underground, 3),
            (Ticket::Double, 2),
            (Ticket::Secret, pursuers),
        ])
    }
    pub fn count(&self, ticket: Ticket) -> usize {
        self.0.get(&ticket).copied().unwrap_or_default()
    }
    pub fn has(&self, ticket: Ticket) -> bool {
        self.count(ticket) > 0
    }
    /// Inventory after spending one of `ticket`, saturating at zero.
    pub fn spend(&self, ticket: Ticket) -> Self {
        let mut next = self.clone();
        if let Some(n) = next.0.get_mut(&ticket) {
            *n = n.saturating_sub(1);
        }
        next
    }
}

impl<const K: usize> From<[(Ticket, usize); K]> for Tickets {
    fn from(counts: [(Ticket, usize); K]) -> Self {
        Self(BTreeMap::from(counts))
    }
}
