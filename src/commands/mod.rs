//! Command implementations

pub mod score;
pub mod simple;
pub mod simulate;
pub mod solve;

pub use score::{ScoreBreakdown, analyze_score};
pub use simple::{play_console, run_simple};
pub use simulate::{GameSummary, SimulationConfig, SimulationResult, run_simulation, simulate_game};
pub use solve::{SolveConfig, SolveResult, solve_letters, validate_letters};
