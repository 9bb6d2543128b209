//! Dictionary solving and automated word choice
//!
//! Matching, best-word selection and the opponent policies built on top of them.

mod engine;
mod matcher;
pub mod policy;
mod selector;

pub use engine::{Solution, Solver};
pub use matcher::{can_build, find_all};
pub use policy::{OpponentPolicy, PolicyType, RandomLetters, SolverBacked};
pub use selector::{SolverError, best_word};
