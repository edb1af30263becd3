mod distances;
mod map;
mod transport;

pub use distances::*;
pub use map::*;
pub use transport::*;
