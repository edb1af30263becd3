use serde::Deserialize;
use serde::Serialize;

/// A ticket type held in a piece's inventory.
///
/// `Taxi`, `Bus` and `Underground` pay for the matching transport.
/// `Secret` pays for any transport (including ferries) without revealing
/// which one was used. `Double` lets the fugitive make two moves in one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ticket {
    Taxi,
    Bus,
    Underground,
    Double,
    Secret,
}

impl Ticket {
    pub const fn all() -> [Self; 5] {
        [
            Self::Taxi,
            Self::Bus,
            Self::Underground,
            Self::Double,
            Self::Secret,
        ]
    }
    /// Tickets only the fugitive ever holds.
    pub const fn is_scarce(&self) -> bool {
        matches!(self, Self::Double | Self::Secret)
    }
}

impl std::fmt::Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Taxi => write!(f, "TAXI"),
            Self::Bus => write!(f, "BUS"),
            Self::Underground => write!(f, "UNDERGROUND"),
            Self::Double => write!(f, "DOUBLE"),
            Self::Secret => write!(f, "SECRET"),
        }
    }
}
