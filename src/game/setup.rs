use crate::Map;
use crate::REVEALS;
use crate::ROUNDS;

/// Static description of a game: the map and the round schedule.
///
/// `reveals[r]` is true when the fugitive's location is made public
/// after its move in round `r` (0-based). The schedule's length is the
/// number of rounds in the game.
#[derive(Debug, Clone)]
pub struct Setup {
    pub map: Map,
    pub reveals: Vec<bool>,
}

impl Setup {
    pub fn new(map: Map, reveals: Vec<bool>) -> Self {
        Self { map, reveals }
    }
    /// The standard 24-round schedule.
    pub fn standard(map: Map) -> Self {
        let reveals = (1..=ROUNDS).map(|r| REVEALS.contains(&r)).collect();
        Self::new(map, reveals)
    }
    pub fn rounds(&self) -> usize {
        self.reveals.len()
    }
    /// Whether round `round` (0-based) is a reveal round. Rounds past the
    /// end of the schedule are not.
    pub fn is_reveal(&self, round: usize) -> bool {
        self.reveals.get(round).copied().unwrap_or(false)
    }
}
