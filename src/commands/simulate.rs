//! Automated game simulation
//!
//! Plays many games with the solver on the player's side against the chosen opponent policy.

use crate::game::{EndReason, Game, GameConfig, GameError, Outcome};
use crate::solver::{PolicyType, Solver};
use crate::wordlists::Dictionary;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Configuration for a simulation run
pub struct SimulationConfig {
    pub games: usize,
    /// Base seed; game `i` uses `seed + i`. `None` seeds every game from the OS.
    pub seed: Option<u64>,
    pub opponent: String,
    pub game: GameConfig,
}

impl SimulationConfig {
    #[must_use]
    pub fn new(games: usize) -> Self {
        Self {
            games,
            seed: None,
            opponent: "random".to_string(),
            game: GameConfig::default(),
        }
    }
}

/// Result of a single simulated game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub player_score: u32,
    pub computer_score: u32,
    pub turns: usize,
    pub outcome: Outcome,
    pub end_reason: Option<EndReason>,
}

/// Aggregate statistics over all simulated games
pub struct SimulationResult {
    pub games: usize,
    pub player_wins: usize,
    pub computer_wins: usize,
    pub ties: usize,
    pub average_player_score: f64,
    pub average_computer_score: f64,
    pub average_turns: f64,
    pub best_player_score: u32,
    /// Games per end reason; `None` counts games that never finished
    pub end_reasons: FxHashMap<Option<EndReason>, usize>,
    pub opponent: String,
    pub duration: Duration,
}

/// Play one game to the end with the solver choosing the player's words
///
/// When the solver finds nothing playable the player submits an empty word, which ends the
/// game like any other invalid entry.
///
/// # Errors
///
/// Returns an error if the opponent policy produces a word its hand cannot play.
pub fn simulate_game(
    config: GameConfig,
    dictionary: &Dictionary,
    opponent: &str,
) -> Result<GameSummary, String> {
    let solver = Solver::new(dictionary);
    let policy = PolicyType::from_name(opponent, solver);
    let rng = config.rng();
    let mut game = Game::new(config, dictionary, policy, rng);

    while !game.is_over() {
        let word = solver
            .best_play(game.player_hand())
            .map_or_else(String::new, |(word, _)| word.to_string());
        match game.player_turn(&word) {
            Ok(_) | Err(GameError::InvalidWord(_) | GameError::NotInDictionary(_)) => {}
            Err(err) => return Err(err.to_string()),
        }
        if !game.is_over() {
            game.computer_turn().map_err(|e| e.to_string())?;
        }
    }

    Ok(GameSummary {
        player_score: game.player_score(),
        computer_score: game.computer_score(),
        turns: game.history().len(),
        outcome: game.outcome(),
        end_reason: game.end_reason(),
    })
}

/// Run the simulation in parallel with a progress bar
///
/// # Errors
///
/// Returns an error if `games` is zero or any game fails.
pub fn run_simulation(
    config: &SimulationConfig,
    dictionary: &Dictionary,
) -> Result<SimulationResult, String> {
    if config.games == 0 {
        return Err("Number of games must be at least 1".to_string());
    }

    let start = Instant::now();

    let pb = ProgressBar::new(config.games as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );
    pb.set_message(format!("vs {}", config.opponent));

    let summaries = (0..config.games)
        .into_par_iter()
        .map(|i| {
            let mut game_config = config.game.clone();
            game_config.seed = config.seed.map(|seed| seed.wrapping_add(i as u64));
            let summary = simulate_game(game_config, dictionary, &config.opponent);
            pb.inc(1);
            summary
        })
        .collect::<Result<Vec<_>, _>>()?;

    pb.finish_with_message("Complete!");

    let result = summarize(&summaries, &config.opponent, start.elapsed());
    info!(
        "simulated {} games vs {}: {} wins, {} losses, {} ties",
        result.games, result.opponent, result.player_wins, result.computer_wins, result.ties
    );
    Ok(result)
}

fn summarize(summaries: &[GameSummary], opponent: &str, duration: Duration) -> SimulationResult {
    let games = summaries.len();
    let count = |outcome: Outcome| summaries.iter().filter(|s| s.outcome == outcome).count();
    let average = |total: u64| {
        if games > 0 {
            total as f64 / games as f64
        } else {
            0.0
        }
    };

    let mut end_reasons: FxHashMap<Option<EndReason>, usize> = FxHashMap::default();
    for summary in summaries {
        *end_reasons.entry(summary.end_reason).or_insert(0) += 1;
    }

    SimulationResult {
        games,
        player_wins: count(Outcome::PlayerWins),
        computer_wins: count(Outcome::ComputerWins),
        ties: count(Outcome::Tie),
        average_player_score: average(summaries.iter().map(|s| u64::from(s.player_score)).sum()),
        average_computer_score: average(
            summaries.iter().map(|s| u64::from(s.computer_score)).sum(),
        ),
        average_turns: average(summaries.iter().map(|s| s.turns as u64).sum()),
        best_player_score: summaries.iter().map(|s| s.player_score).max().unwrap_or(0),
        end_reasons,
        opponent: opponent.to_string(),
        duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> GameConfig {
        GameConfig::default().with_seed(seed)
    }

    #[test]
    fn simulated_game_finishes() {
        let dict = Dictionary::embedded();
        let summary = simulate_game(seeded(1), &dict, "random").unwrap();
        assert!(summary.end_reason.is_some());
        assert!(summary.turns <= 100);
    }

    #[test]
    fn same_seed_same_game() {
        let dict = Dictionary::embedded();
        let a = simulate_game(seeded(42), &dict, "solver").unwrap();
        let b = simulate_game(seeded(42), &dict, "solver").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_dictionary_ends_on_first_turn() {
        let dict = Dictionary::default();
        let summary = simulate_game(seeded(7), &dict, "random").unwrap();
        assert_eq!(summary.end_reason, Some(EndReason::InvalidWord));
        assert_eq!(summary.turns, 0);
        assert_eq!(summary.outcome, Outcome::Tie);
    }

    #[test]
    fn simulation_counts_add_up() {
        let dict = Dictionary::embedded();
        let mut config = SimulationConfig::new(8);
        config.seed = Some(100);

        let result = run_simulation(&config, &dict).unwrap();

        assert_eq!(result.games, 8);
        assert_eq!(result.player_wins + result.computer_wins + result.ties, 8);
        assert_eq!(result.end_reasons.values().sum::<usize>(), 8);
        assert!(result.average_player_score <= f64::from(result.best_player_score));
    }

    #[test]
    fn end_reasons_are_keyed_by_reason() {
        let summary = |end_reason| GameSummary {
            player_score: 0,
            computer_score: 0,
            turns: 0,
            outcome: Outcome::Tie,
            end_reason,
        };
        let summaries = [
            summary(Some(EndReason::PoolExhausted)),
            summary(Some(EndReason::InvalidWord)),
            summary(Some(EndReason::PoolExhausted)),
            summary(None),
        ];

        let result = summarize(&summaries, "random", Duration::ZERO);

        assert_eq!(result.end_reasons[&Some(EndReason::PoolExhausted)], 2);
        assert_eq!(result.end_reasons[&Some(EndReason::InvalidWord)], 1);
        assert_eq!(result.end_reasons[&None], 1);
        assert!(!result.end_reasons.contains_key(&Some(EndReason::PlayerOutOfTiles)));
    }

    #[test]
    fn zero_games_is_an_error() {
        let dict = Dictionary::default();
        assert!(run_simulation(&SimulationConfig::new(0), &dict).is_err());
    }
}
