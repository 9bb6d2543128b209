//! TUI application state and logic

use crate::game::{Actor, Game, GameConfig, GameError, Outcome};
use crate::solver::{PolicyType, Solver};
use crate::wordlists::Dictionary;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept on screen
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a> {
    pub dictionary: &'a Dictionary,
    pub solver: Solver<'a>,
    pub config: GameConfig,
    pub opponent: String,
    pub game: Game<'a, PolicyType<'a>, StdRng>,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    games_started: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Typing the player's word
    Word,
    /// Waiting for Enter before the computer moves
    ComputerTurn,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_played: usize,
    pub player_wins: usize,
    pub computer_wins: usize,
    pub ties: usize,
    pub best_score: u32,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, config: GameConfig, opponent: &str) -> Self {
        let solver = Solver::new(dictionary);
        let game = Self::start_game(dictionary, solver, &config, opponent, 0);

        let mut app = Self {
            dictionary,
            solver,
            config,
            opponent: opponent.to_string(),
            game,
            input_mode: InputMode::Word,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            games_started: 1,
        };
        app.add_message(
            "Welcome to Scrapple! Make a word from your hand and press Enter.",
            MessageStyle::Info,
        );
        app
    }

    /// Each new game gets its own seed derived from the configured one
    fn start_game(
        dictionary: &'a Dictionary,
        solver: Solver<'a>,
        config: &GameConfig,
        opponent: &str,
        index: u64,
    ) -> Game<'a, PolicyType<'a>, StdRng> {
        let mut config = config.clone();
        config.seed = config.seed.map(|seed| seed.wrapping_add(index));
        let rng = config.rng();
        Game::new(config, dictionary, PolicyType::from_name(opponent, solver), rng)
    }

    pub fn new_game(&mut self) {
        self.game = Self::start_game(
            self.dictionary,
            self.solver,
            &self.config,
            &self.opponent,
            self.games_started,
        );
        self.games_started += 1;
        self.input_mode = InputMode::Word;
        self.input_buffer.clear();
        self.messages.clear();
        self.add_message("New game started! Your turn.", MessageStyle::Info);
    }

    /// Submit the typed word as the player's move
    pub fn submit_word(&mut self) {
        let word = std::mem::take(&mut self.input_buffer);
        match self.game.player_turn(&word) {
            Ok(record) => {
                let bonus = if record.bonus { " (BONUS)" } else { "" };
                self.add_message(
                    &format!("You played {} for {} points{bonus}", record.word, record.score),
                    MessageStyle::Success,
                );
                self.input_mode = InputMode::ComputerTurn;
                self.add_message("Press Enter for the computer's turn", MessageStyle::Info);
            }
            Err(err @ (GameError::InvalidWord(_) | GameError::NotInDictionary(_))) => {
                self.add_message(&format!("Invalid word! {err}"), MessageStyle::Error);
                self.finish_game();
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn computer_move(&mut self) {
        match self.game.computer_turn() {
            Ok(record) => {
                let bonus = if record.bonus { " (BONUS)" } else { "" };
                self.add_message(
                    &format!(
                        "The computer chose {} for {} points{bonus}",
                        record.word, record.score
                    ),
                    MessageStyle::Info,
                );
                if self.game.is_over() {
                    self.finish_game();
                } else {
                    self.input_mode = InputMode::Word;
                }
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Suggest the best word the current hand allows
    pub fn show_hint(&mut self) {
        match self.solver.best_play(self.game.player_hand()) {
            Some((word, points)) => {
                self.add_message(&format!("Hint: {word} for {points} points"), MessageStyle::Info);
            }
            None => self.add_message("Hint: no dictionary word fits this hand", MessageStyle::Error),
        }
    }

    fn finish_game(&mut self) {
        self.input_mode = InputMode::GameOver;
        self.stats.games_played += 1;
        self.stats.best_score = self.stats.best_score.max(self.game.player_score());

        let (text, style) = match self.game.outcome() {
            Outcome::PlayerWins => {
                self.stats.player_wins += 1;
                ("🏆 You win!", MessageStyle::Success)
            }
            Outcome::ComputerWins => {
                self.stats.computer_wins += 1;
                ("Computer wins!", MessageStyle::Error)
            }
            Outcome::Tie => {
                self.stats.ties += 1;
                ("It's a tie!", MessageStyle::Info)
            }
        };
        if let Some(reason) = self.game.end_reason() {
            self.add_message(&format!("Game over: {reason}"), MessageStyle::Info);
        }
        self.add_message(text, style);
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Whose turn the status bar should show
    #[must_use]
    pub fn turn_label(&self) -> &'static str {
        match (self.input_mode, self.game.next_actor()) {
            (InputMode::GameOver, _) => "Game over",
            (_, Actor::Player) => "Your turn",
            (_, Actor::Computer) => "Computer's turn",
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Word => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Tab => self.show_hint(),
                KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                    if self.input_buffer.len() < self.game.player_hand().capacity() {
                        self.input_buffer.push(c.to_ascii_uppercase());
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_word(),
                _ => {}
            },
            InputMode::ComputerTurn => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Enter | KeyCode::Char(' ') => self.computer_move(),
                _ => {}
            },
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn app(dict: &Dictionary) -> App<'_> {
        App::new(dict, GameConfig::default().with_seed(5), "random")
    }

    #[test]
    fn typing_builds_uppercase_input() {
        let dict = Dictionary::embedded();
        let mut app = app(&dict);
        type_word(&mut app, "ab1c");
        assert_eq!(app.input_buffer, "ABC");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "AB");
    }

    #[test]
    fn input_capped_at_hand_capacity() {
        let dict = Dictionary::embedded();
        let mut app = app(&dict);
        type_word(&mut app, "abcdefghijk");
        assert_eq!(app.input_buffer.len(), 8);
    }

    #[test]
    fn invalid_word_ends_game_and_counts_it() {
        let dict = Dictionary::embedded();
        let mut app = app(&dict);
        type_word(&mut app, "ab");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_played, 1);
        assert_eq!(app.stats.ties, 1);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_mode, InputMode::Word);
        assert!(!app.game.is_over());
    }

    #[test]
    fn valid_word_hands_turn_to_computer() {
        let dict = Dictionary::embedded();
        let mut app = app(&dict);
        let word: String = app.game.player_hand().tiles()[..4]
            .iter()
            .map(|&b| char::from(b))
            .collect();
        type_word(&mut app, &word);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::ComputerTurn);
        assert!(app.game.player_score() > 0);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game.history().len(), 2);
        assert!(matches!(
            app.input_mode,
            InputMode::Word | InputMode::GameOver
        ));
    }

    #[test]
    fn messages_are_capped() {
        let dict = Dictionary::embedded();
        let mut app = app(&dict);
        for _ in 0..10 {
            press(&mut app, KeyCode::Tab);
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
        assert!(app.messages[0].text.starts_with("Hint"));
    }

    #[test]
    fn quit_keys() {
        let dict = Dictionary::embedded();
        let mut app = app(&dict);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit, "q is a letter while typing a word");
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
