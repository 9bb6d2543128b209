//! Game orchestration
//!
//! A session deals the hands, alternates player and computer turns, keeps score and
//! decides when the game is over.

mod config;
mod session;

pub use config::GameConfig;
pub use session::{Actor, EndReason, Game, GameError, Outcome, TurnRecord};
