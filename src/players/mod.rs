mod evader;
mod player;

pub use evader::*;
pub use player::*;
