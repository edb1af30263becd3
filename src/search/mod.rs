mod alphabeta;
mod evaluator;
mod expansion;
mod projection;

pub use alphabeta::*;
pub use evaluator::*;
pub use expansion::*;
pub use projection::*;
