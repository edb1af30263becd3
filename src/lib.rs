//! Adversarial search for the fugitive in hidden-movement pursuit games.
//!
//! Given a read-only [`Board`] and the fugitive's legal moves, the
//! [`Evader`] player picks the move that keeps it furthest from capture.
//!
//! # Module Structure
//!
//! - `graph`: Movement map, transport modes, all-pairs hop distances
//! - `game`: Pieces, tickets, moves, travel log, the `Board` trait
//! - `search`: Projected boards, hypothetical moves, evaluation, alpha-beta
//! - `players`: The `Player` trait and the fugitive agent
//! - `scenario`: JSON board positions for the CLI and tests
pub mod game;
pub mod graph;
pub mod players;
pub mod scenario;
pub mod search;

pub use game::*;
pub use graph::*;
pub use players::*;
pub use scenario::*;
pub use search::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Location on the movement map, in `[0, N)`.
pub type Node = usize;
/// Number of edge traversals between two nodes.
pub type Hops = u32;
/// Heuristic value of a position or move, from the fugitive's point of view.
pub type Score = f32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a random instance from the given generator.
    fn random(rng: &mut impl rand::Rng) -> Self;
}

// ============================================================================
// SEARCH PARAMETERS
// ============================================================================
/// Plies searched per decision, counting the root move.
pub const MAX_DEPTH: usize = 7;
/// Hops to the nearest pursuer at or below which the fugitive is in danger.
pub const SAFE_DISTANCE: Hops = 2;

// ============================================================================
// POSITION EVALUATION
// score = DISTANCE_WEIGHT · nearest pursuer + FREEDOM_WEIGHT · free neighbors
// ============================================================================
/// Weight of the hop distance to the nearest reachable pursuer.
pub const DISTANCE_WEIGHT: Score = 20.;
/// Weight of each neighbor not occupied by a pursuer.
pub const FREEDOM_WEIGHT: Score = 10.;

// ============================================================================
// MOVE EVALUATION
// Scarce tickets are conserved unless a pursuer is within SAFE_DISTANCE.
// ============================================================================
/// Returning to a node the fugitive has already visited.
pub const REPEAT_PENALTY: Score = -30.;
/// Spending a secret ticket on a quiet turn.
pub const SECRET_PENALTY: Score = -25.;
/// Spending a double-move ticket on a quiet turn.
pub const DOUBLE_PENALTY: Score = -50.;

// ============================================================================
// GAME DEFAULTS
// ============================================================================
/// Rounds in a standard game.
pub const ROUNDS: usize = 24;
/// Rounds (1-based) after which the fugitive's location is revealed.
pub const REVEALS: [usize; 5] = [3, 8, 13, 18, 24];

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
