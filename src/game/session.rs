//! A single player-versus-computer game

use super::config::GameConfig;
use crate::core::{Hand, InvalidWord, PlayError, TilePool, check, has_double_letter, score};
use crate::solver::OpponentPolicy;
use crate::wordlists::Dictionary;
use log::{debug, info};
use rand::Rng;
use std::fmt;

/// Who made a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    Player,
    Computer,
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player => f.pad("Player"),
            Self::Computer => f.pad("Computer"),
        }
    }
}

/// One completed turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnRecord {
    pub actor: Actor,
    pub word: String,
    pub score: u32,
    /// The double-letter bonus applied
    pub bonus: bool,
    /// Tiles drawn to refill the hand afterwards
    pub tiles_drawn: usize,
}

/// Why the game stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndReason {
    /// The player submitted a word that could not be played
    InvalidWord,
    /// The tile pool ran out
    PoolExhausted,
    /// The player has no tiles left
    PlayerOutOfTiles,
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWord => write!(f, "invalid word entered"),
            Self::PoolExhausted => write!(f, "the tile pool is empty"),
            Self::PlayerOutOfTiles => write!(f, "the player is out of tiles"),
        }
    }
}

/// Final result of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    PlayerWins,
    ComputerWins,
    Tie,
}

/// Errors from driving a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The player's word cannot be built from their hand
    InvalidWord(InvalidWord),
    /// Strict mode: the word is not in the dictionary
    NotInDictionary(String),
    /// It is the other side's turn
    OutOfTurn(Actor),
    /// The game has already ended
    GameOver,
    /// The opponent policy produced a word its hand cannot play
    Play(PlayError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWord(reason) => write!(f, "invalid word: {reason}"),
            Self::NotInDictionary(word) => write!(f, "'{word}' is not in the dictionary"),
            Self::OutOfTurn(actor) => write!(f, "it is the {actor}'s turn"),
            Self::GameOver => write!(f, "the game is over"),
            Self::Play(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for GameError {}

impl From<PlayError> for GameError {
    fn from(err: PlayError) -> Self {
        Self::Play(err)
    }
}

/// A game between the player and the automated opponent
///
/// The session owns the pool, both hands and the random source. Turns strictly
/// alternate, player first.
pub struct Game<'a, P: OpponentPolicy, R: Rng> {
    config: GameConfig,
    dictionary: &'a Dictionary,
    policy: P,
    rng: R,
    pool: TilePool,
    player: Hand,
    computer: Hand,
    player_score: u32,
    computer_score: u32,
    history: Vec<TurnRecord>,
    next: Actor,
    end: Option<EndReason>,
}

impl<'a, P: OpponentPolicy, R: Rng> Game<'a, P, R> {
    /// Start a game with the standard pool: the player is dealt first, then the computer
    pub fn new(config: GameConfig, dictionary: &'a Dictionary, policy: P, rng: R) -> Self {
        Self::with_pool(config, dictionary, policy, rng, TilePool::standard())
    }

    /// Start a game from a custom pool
    ///
    /// A pool that the initial deal empties leaves nothing to play for: the game is over before the first turn.
    pub fn with_pool(
        config: GameConfig,
        dictionary: &'a Dictionary,
        policy: P,
        mut rng: R,
        mut pool: TilePool,
    ) -> Self {
        let player = Hand::deal(&mut pool, config.hand_size, &mut rng);
        let computer = Hand::deal(&mut pool, config.hand_size, &mut rng);
        debug!("dealt player {player}, computer {computer}, {} tiles left", pool.size());

        let mut game = Self {
            config,
            dictionary,
            policy,
            rng,
            pool,
            player,
            computer,
            player_score: 0,
            computer_score: 0,
            history: Vec::new(),
            next: Actor::Player,
            end: None,
        };
        if game.pool.is_empty() {
            game.finish(EndReason::PoolExhausted);
        }
        game
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn policy(&self) -> &P {
        &self.policy
    }

    #[must_use]
    pub const fn pool(&self) -> &TilePool {
        &self.pool
    }

    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    #[must_use]
    pub const fn computer_hand(&self) -> &Hand {
        &self.computer
    }

    #[must_use]
    pub const fn player_score(&self) -> u32 {
        self.player_score
    }

    #[must_use]
    pub const fn computer_score(&self) -> u32 {
        self.computer_score
    }

    #[must_use]
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    /// Whose turn it is
    #[must_use]
    pub const fn next_actor(&self) -> Actor {
        self.next
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.end.is_some()
    }

    #[must_use]
    pub const fn end_reason(&self) -> Option<EndReason> {
        self.end
    }

    /// Compare the scores; meaningful once the game is over
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        match self.player_score.cmp(&self.computer_score) {
            std::cmp::Ordering::Greater => Outcome::PlayerWins,
            std::cmp::Ordering::Less => Outcome::ComputerWins,
            std::cmp::Ordering::Equal => Outcome::Tie,
        }
    }

    /// Play the player's word
    ///
    /// An invalid word (or, in strict mode, a word missing from the dictionary) ends the game.
    ///
    /// # Errors
    /// Returns `GameError` if the game is over, it is not the player's turn, or the word
    /// cannot be played.
    pub fn player_turn(&mut self, word: &str) -> Result<TurnRecord, GameError> {
        self.ensure_turn(Actor::Player)?;
        let word = word.trim().to_ascii_uppercase();

        if let Err(reason) = check(&word, &self.player) {
            self.finish(EndReason::InvalidWord);
            return Err(GameError::InvalidWord(reason));
        }
        if self.config.strict_dictionary && !self.dictionary.contains(&word) {
            self.finish(EndReason::InvalidWord);
            return Err(GameError::NotInDictionary(word));
        }

        let tiles_drawn = self.player.play(&word, &mut self.pool, &mut self.rng)?;
        let record = TurnRecord {
            actor: Actor::Player,
            score: score(&word),
            bonus: has_double_letter(&word),
            word,
            tiles_drawn,
        };
        self.player_score += record.score;
        self.next = Actor::Computer;
        Ok(self.record(record))
    }

    /// Let the opponent policy choose and play a word
    ///
    /// After the computer's turn the game ends if the pool or the player's hand is empty.
    ///
    /// # Errors
    /// Returns `GameError` if the game is over or it is not the computer's turn.
    pub fn computer_turn(&mut self) -> Result<TurnRecord, GameError> {
        self.ensure_turn(Actor::Computer)?;

        let word = self.policy.choose_word(&self.computer, &mut self.rng);
        let tiles_drawn = self.computer.spend(&word, &mut self.pool, &mut self.rng)?;
        let record = TurnRecord {
            actor: Actor::Computer,
            score: score(&word),
            bonus: has_double_letter(&word),
            word,
            tiles_drawn,
        };
        self.computer_score += record.score;
        self.next = Actor::Player;

        if self.pool.is_empty() {
            self.finish(EndReason::PoolExhausted);
        } else if self.player.is_empty() {
            self.finish(EndReason::PlayerOutOfTiles);
        }
        Ok(self.record(record))
    }

    fn ensure_turn(&self, actor: Actor) -> Result<(), GameError> {
        if self.is_over() {
            Err(GameError::GameOver)
        } else if self.next == actor {
            Ok(())
        } else {
            Err(GameError::OutOfTurn(self.next))
        }
    }

    fn record(&mut self, record: TurnRecord) -> TurnRecord {
        debug!(
            "{} played {} for {} points{}, drew {} tiles, {} left in pool",
            record.actor,
            record.word,
            record.score,
            if record.bonus { " (double bonus)" } else { "" },
            record.tiles_drawn,
            self.pool.size()
        );
        self.history.push(record.clone());
        record
    }

    fn finish(&mut self, reason: EndReason) {
        self.end = Some(reason);
        info!(
            "game over ({reason}): player {} - computer {}",
            self.player_score, self.computer_score
        );
    }
}
