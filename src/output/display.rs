//! Display functions for command results

use super::formatters::{create_progress_bar, word_columns};
use crate::commands::{ScoreBreakdown, SimulationResult, SolveResult};
use crate::core::ScoreRule;
use colored::Colorize;

/// Words per row in the solve listing
pub const SOLVE_COLUMNS: usize = 5;

/// Column width in the solve listing
pub const SOLVE_COLUMN_WIDTH: usize = 15;

/// Print the result of solving a letter pool
pub fn print_solve_result(result: &SolveResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Letters: {}", result.letters.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    if result.matches.is_empty() {
        println!("\n{}", "No words match these letters".red());
        return;
    }

    println!("\n{} words found:\n", result.matches.len());
    for row in word_columns(&result.matches, SOLVE_COLUMNS, SOLVE_COLUMN_WIDTH) {
        println!("  {row}");
    }

    if let Some((word, points)) = &result.best {
        let rule = match result.rule {
            ScoreRule::DoubleLetterBonus => "",
            ScoreRule::Plain => " (no bonus)",
        };
        println!(
            "\nHighest scoring word: {} {}",
            word.bright_green().bold(),
            format!("{points} points{rule}").bright_yellow()
        );
    }
}

/// Print a word's score breakdown
pub fn print_score_breakdown(result: &ScoreBreakdown) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SCORE:".bright_cyan().bold(),
        result.word.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!();
    for (letter, points) in &result.letters {
        println!("   {letter}  {points:>2}");
    }
    println!("   {}", "─".repeat(6).bright_black());
    println!("   Base:  {}", result.base);

    if result.bonus {
        println!("   {}", "Double letter BONUS: x2".bright_green());
    }
    println!(
        "   Total: {}",
        result.total.to_string().bright_yellow().bold()
    );

    let listed = if result.in_dictionary {
        "yes".green()
    } else {
        "no".red()
    };
    println!("\n   In dictionary: {listed}");
}

/// Print the outcome of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SIMULATION RESULTS vs".bright_cyan().bold(),
        result.opponent.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let games = result.games as f64;
    println!("\n📊 {}", "Outcomes:".bright_cyan().bold());
    for (label, count) in [
        ("Player wins  ", result.player_wins),
        ("Computer wins", result.computer_wins),
        ("Ties         ", result.ties),
    ] {
        let pct = if games > 0.0 {
            count as f64 / games * 100.0
        } else {
            0.0
        };
        let bar = create_progress_bar(count as f64, games, 40);
        println!("   {label} {} {count:5} ({pct:5.1}%)", bar.green());
    }

    println!("\n📈 {}", "Scores:".bright_cyan().bold());
    println!("   Games played:      {}", result.games);
    println!(
        "   Avg player score:  {}",
        format!("{:.1}", result.average_player_score)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Avg computer score: {:.1}",
        result.average_computer_score
    );
    println!("   Best player score: {}", result.best_player_score.to_string().green());
    println!("   Avg turns:         {:.1}", result.average_turns);
    println!("   Time taken:        {:.2}s", result.duration.as_secs_f64());

    println!("\n🏁 {}", "Game endings:".bright_cyan().bold());
    let mut reasons: Vec<(String, usize)> = result
        .end_reasons
        .iter()
        .map(|(reason, &count)| {
            let label = reason.map_or_else(|| "unfinished".to_string(), |r| r.to_string());
            (label, count)
        })
        .collect();
    reasons.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    for (reason, count) in reasons {
        println!("   {count:5}  {reason}");
    }
}
