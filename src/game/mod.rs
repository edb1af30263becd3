mod board;
mod entry;
mod movement;
mod piece;
mod setup;
mod table;
mod ticket;
mod tickets;

pub use board::*;
pub use entry::*;
pub use movement::*;
pub use piece::*;
pub use setup::*;
pub use table::*;
pub use ticket::*;
pub use tickets::*;
