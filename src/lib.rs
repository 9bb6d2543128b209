//! Scrapple
//!
//! A word game played against the computer with Scrabble tiles: make words from your hand,
//! score letter points (doubled for consecutive double letters) and refill from a shared pool
//! until it runs out.
//!
//! # Quick Start
//!
//! ```rust
//! use scrapple::core::{Hand, score};
//! use scrapple::solver::Solver;
//! use scrapple::wordlists::Dictionary;
//!
//! let dictionary: Dictionary = ["BALL", "TALL", "TABLE"].into_iter().map(String::from).collect();
//! let solver = Solver::new(&dictionary);
//!
//! let hand = Hand::from_letters("BALLOTEX");
//! assert_eq!(solver.best_play(&hand), Some(("BALL", 12)));
//! assert_eq!(score("TABLE"), 7);
//! ```

// Tiles, hands, validation and scoring
pub mod core;

// Dictionary search and opponent policies
pub mod solver;

// Word lists
pub mod wordlists;

// Game sessions
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
