//! Simple console game mode
//!
//! Line-based game against the computer without the TUI

use crate::core::{MIN_WORD_LENGTH, STANDARD_TILES};
use crate::game::{Actor, Game, GameConfig, GameError, Outcome, TurnRecord};
use crate::output::formatters::{format_tiles, score_table, tile_rows};
use crate::solver::{OpponentPolicy, PolicyType, Solver};
use crate::wordlists::Dictionary;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Tiles per row when showing the remaining pool
pub const POOL_ROW: usize = 20;

/// Run the console game on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple(config: GameConfig, dictionary: &Dictionary, opponent: &str) -> Result<(), String> {
    let policy = PolicyType::from_name(opponent, Solver::new(dictionary));
    let rng = config.rng();
    let mut game = Game::new(config, dictionary, policy, rng);

    let stdin = io::stdin();
    let stdout = io::stdout();
    play_console(&mut game, &mut stdin.lock(), &mut stdout.lock())
}

/// Drive a game to the end, reading player words from `input`
///
/// End of input quits early; the scores so far are still reported.
///
/// # Errors
///
/// Returns an error on I/O failure or if the opponent policy produces an unplayable word.
pub fn play_console<P, R, I, O>(
    game: &mut Game<'_, P, R>,
    input: &mut I,
    out: &mut O,
) -> Result<(), String>
where
    P: OpponentPolicy,
    R: Rng,
    I: BufRead,
    O: Write,
{
    write_intro(out, game.config().hand_size).map_err(|e| e.to_string())?;

    while !game.is_over() {
        write_state(out, game).map_err(|e| e.to_string())?;

        match game.next_actor() {
            Actor::Player => {
                let Some(word) = prompt(input, out, "Please enter a word created from your hand")?
                else {
                    writeln!(out, "\nInput closed.").map_err(|e| e.to_string())?;
                    break;
                };
                match game.player_turn(&word) {
                    Ok(record) => write_turn(out, &record).map_err(|e| e.to_string())?,
                    Err(err @ (GameError::InvalidWord(_) | GameError::NotInDictionary(_))) => {
                        writeln!(out, "Invalid word! Game over. ({err})").map_err(|e| e.to_string())?;
                    }
                    Err(err) => return Err(err.to_string()),
                }
            }
            Actor::Computer => {
                prompt(input, out, "Press Enter for the computer's turn")?;
                let record = game.computer_turn().map_err(|e| e.to_string())?;
                write_turn(out, &record).map_err(|e| e.to_string())?;
            }
        }
    }

    write_final(out, game).map_err(|e| e.to_string())
}

/// Show a prompt and read one trimmed line; `None` at end of input
fn prompt<I: BufRead, O: Write>(input: &mut I, out: &mut O, text: &str) -> Result<Option<String>, String> {
    write!(out, "{text}: ").map_err(|e| e.to_string())?;
    out.flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn write_intro<O: Write>(out: &mut O, hand_size: usize) -> io::Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                          SCRAPPLE                            ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;

    writeln!(out, "A modified version of Scrabble. The game starts with a pool of")?;
    writeln!(out, "the following 100 tiles:\n")?;
    for row in tile_rows(STANDARD_TILES.as_bytes(), 50) {
        writeln!(out, "  {row}")?;
    }

    writeln!(out)?;
    writeln!(out, "Each hand is dealt {hand_size} tiles at random. On your turn, make a word")?;
    writeln!(out, "of {MIN_WORD_LENGTH} to {hand_size} letters from your hand. A word that is too short,")?;
    writeln!(out, "too long or uses tiles you do not hold ends the game.\n")?;

    writeln!(out, "Points per letter:")?;
    let (letters, values) = score_table();
    writeln!(out, "{letters}")?;
    writeln!(out, "{values}\n")?;
    writeln!(out, "The score is doubled (BONUS) if the word has consecutive double letters (e.g. BALL).")?;
    writeln!(out, "Hands are refilled from the pool after every word. The game ends when the pool")?;
    writeln!(out, "runs out, and the higher score wins.\n")
}

fn write_state<P: OpponentPolicy, R: Rng, O: Write>(out: &mut O, game: &Game<'_, P, R>) -> io::Result<()> {
    writeln!(out, "{}", "─".repeat(60))?;
    writeln!(out, "Tiles remaining in the pool ({}):", game.pool().size())?;
    for row in tile_rows(&game.pool().letters(), POOL_ROW) {
        writeln!(out, "  {row}")?;
    }
    writeln!(out)?;
    writeln!(out, "Player score:   {}", game.player_score())?;
    writeln!(out, "Computer score: {}\n", game.computer_score())?;
    writeln!(out, "Your hand:           {}", format_tiles(game.player_hand().tiles()))?;
    writeln!(out, "The computer's hand: {}\n", format_tiles(game.computer_hand().tiles()))
}

fn write_turn<O: Write>(out: &mut O, record: &TurnRecord) -> io::Result<()> {
    let who = match record.actor {
        Actor::Player => "You played",
        Actor::Computer => "The computer chose",
    };
    let bonus = if record.bonus { " (BONUS)" } else { "" };
    writeln!(out, "{who}: {} for {} points{bonus}\n", record.word, record.score)
}

fn write_final<P: OpponentPolicy, R: Rng, O: Write>(out: &mut O, game: &Game<'_, P, R>) -> io::Result<()> {
    writeln!(out, "\nFinal Scores:")?;
    writeln!(out, "Player:   {}", game.player_score())?;
    writeln!(out, "Computer: {}", game.computer_score())?;
    if let Some(reason) = game.end_reason() {
        writeln!(out, "Game over: {reason}")?;
    }
    let verdict = match game.outcome() {
        Outcome::PlayerWins => "You win!",
        Outcome::ComputerWins => "Computer wins!",
        Outcome::Tie => "It's a tie!",
    };
    writeln!(out, "{verdict}")
}
