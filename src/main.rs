//! Scrapple - CLI
//!
//! Word game against the computer with TUI and console modes, plus solver utilities.

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;
use scrapple::{
    commands::{
        SimulationConfig, SolveConfig, analyze_score, run_simple, run_simulation, solve_letters,
    },
    core::ScoreRule,
    game::GameConfig,
    output::{print_score_breakdown, print_simulation_result, print_solve_result},
    wordlists::Dictionary,
};

#[derive(Parser)]
#[command(
    name = "scrapple",
    about = "Scrapple: a Scrabble-tile word game against the computer",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'embedded' (default) or path to a whitespace-separated word file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for tile draws (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Opponent policy: random (default) or solver
    #[arg(short, long, global = true, default_value = "random")]
    opponent: String,

    /// Reject player words that are not in the dictionary
    #[arg(long, global = true)]
    strict: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Simple console game without the TUI
    Simple,

    /// Find every dictionary word buildable from a set of letters
    Solve {
        /// Letters to solve (3 to 12)
        letters: String,

        /// Score without the double-letter bonus
        #[arg(long)]
        plain: bool,
    },

    /// Show how a word is scored
    Score {
        /// Word to score
        word: String,
    },

    /// Play automated games with the solver against the opponent policy
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        games: usize,
    },
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist: &str) -> Result<Dictionary> {
    match wordlist {
        "embedded" => Ok(Dictionary::embedded()),
        path => Ok(Dictionary::from_file(path)?),
    }
}

/// Game settings from the global flags
fn game_config(cli: &Cli) -> GameConfig {
    GameConfig {
        seed: cli.seed,
        strict_dictionary: cli.strict,
        ..GameConfig::default()
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let dictionary = load_dictionary(&cli.wordlist)?;
    info!("dictionary ready with {} words", dictionary.len());

    let config = game_config(&cli);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&dictionary, config, &cli.opponent),
        Commands::Simple => {
            run_simple(config, &dictionary, &cli.opponent).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Solve { letters, plain } => run_solve_command(&letters, plain, &dictionary),
        Commands::Score { word } => run_score_command(&word, &dictionary),
        Commands::Simulate { games } => {
            run_simulate_command(games, config, &cli.opponent, &dictionary)
        }
    }
}

fn run_play_command(dictionary: &Dictionary, config: GameConfig, opponent: &str) -> Result<()> {
    use scrapple::interactive::{App, run_tui};

    let app = App::new(dictionary, config, opponent);
    run_tui(app)
}

fn run_solve_command(letters: &str, plain: bool, dictionary: &Dictionary) -> Result<()> {
    let mut config = SolveConfig::new(letters.to_string());
    if plain {
        config.rule = ScoreRule::Plain;
    }
    let result = solve_letters(config, dictionary).map_err(|e| anyhow::anyhow!(e))?;

    print_solve_result(&result);
    Ok(())
}

fn run_score_command(word: &str, dictionary: &Dictionary) -> Result<()> {
    let result = analyze_score(word, dictionary).map_err(|e| anyhow::anyhow!(e))?;
    print_score_breakdown(&result);
    Ok(())
}

fn run_simulate_command(
    games: usize,
    config: GameConfig,
    opponent: &str,
    dictionary: &Dictionary,
) -> Result<()> {
    println!("Simulating {games} games against the {opponent} opponent...");

    let mut simulation = SimulationConfig::new(games);
    simulation.seed = config.seed;
    simulation.opponent = opponent.to_string();
    simulation.game = config;

    let result = run_simulation(&simulation, dictionary).map_err(|e| anyhow::anyhow!(e))?;
    print_simulation_result(&result);
    Ok(())
}
