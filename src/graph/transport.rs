use crate::game::Ticket;
use serde::Deserialize;
use serde::Serialize;

/// A mode of travel labelling an edge of the map.
///
/// Each mode is paid for with exactly one [`Ticket`]. Ferries can only
/// be boarded on a secret ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    Taxi,
    Bus,
    Underground,
    Ferry,
}

impl Transport {
    pub const fn all() -> [Self; 4] {
        [Self::Taxi, Self::Bus, Self::Underground, Self::Ferry]
    }
    /// The ticket spent to travel by this mode.
    pub const fn ticket(&self) -> Ticket {
        match self {
            Self::Taxi => Ticket::Taxi,
            Self::Bus => Ticket::Bus,
            Self::Underground => Ticket::Underground,
            Self::Ferry => Ticket::Secret,
        }
    }
}

impl std::fmt::Display for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Taxi => write!(f, "taxi"),
            Self::Bus => write!(f, "bus"),
            Self::Underground => write!(f, "underground"),
            Self::Ferry => write!(f, "ferry"),
        }
    }
}
