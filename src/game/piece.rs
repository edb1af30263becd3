use serde::Deserialize;
use serde::Serialize;

/// Pursuer identities, in the order they move within a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Colour {
    Red,
    Green,
    Blue,
    White,
    Yellow,
}

impl Colour {
    pub const fn all() -> [Self; 5] {
        [Self::Red, Self::Green, Self::Blue, Self::White, Self::Yellow]
    }
}

/// A piece on the board: the fugitive or one of the pursuers.
///
/// The derived ordering puts the fugitive first and the pursuers in
/// [`Colour`] order, which is the order they move within a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Piece {
    Fugitive,
    Pursuer(Colour),
}

impl Piece {
    pub const fn is_fugitive(&self) -> bool {
        matches!(self, Self::Fugitive)
    }
    pub const fn is_pursuer(&self) -> bool {
        matches!(self, Self::Pursuer(_))
    }
}

impl From<Colour> for Piece {
    fn from(colour: Colour) -> Self {
        Self::Pursuer(colour)
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fugitive => write!(f, "fugitive"),
            Self::Pursuer(colour) => write!(f, "{:?}", colour),
        }
    }
}
