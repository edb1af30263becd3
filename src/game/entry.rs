use super::*;
use crate::Node;
use serde::Deserialize;
use serde::Serialize;

/// One round of the fugitive's public travel log.
///
/// The ticket is always public; the destination only on reveal rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub ticket: Ticket,
    pub location: Option<Node>,
}

impl Entry {
    pub fn hidden(ticket: Ticket) -> Self {
        Self {
            ticket,
            location: None,
        }
    }
    pub fn revealed(ticket: Ticket, location: Node) -> Self {
        Self {
            ticket,
            location: Some(location),
        }
    }
}
