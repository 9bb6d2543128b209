//! TUI rendering with ratatui
//!
//! Hands, scores, pool and turn history for the Scrapple game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{STANDARD_TILES, letter_score};
use crate::game::Actor;
use crate::output::formatters::tile_rows;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Left panel
            Constraint::Percentage(40), // Right panel
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 SCRAPPLE - You vs the Computer")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8),      // Hands and scores
            Constraint::Percentage(40), // Pool
            Constraint::Min(4),         // History
        ])
        .split(area);

    render_hands(f, app, chunks[0]);
    render_pool(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
}

/// Each tile as its letter followed by its point value
fn tile_spans(tiles: &[u8], color: Color) -> Vec<Span<'static>> {
    tiles
        .iter()
        .flat_map(|&tile| {
            [
                Span::styled(
                    format!(" {}", char::from(tile)),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("{:<2}", letter_score(tile)),
                    Style::default().fg(Color::DarkGray),
                ),
            ]
        })
        .collect()
}

fn render_hands(f: &mut Frame, app: &App, area: Rect) {
    let game = &app.game;
    let content = vec![
        Line::from(vec![
            Span::raw("You:      "),
            Span::styled(
                format!("{:>4}", game.player_score()),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" points"),
        ]),
        Line::from(tile_spans(game.player_hand().tiles(), Color::Green)),
        Line::from(""),
        Line::from(vec![
            Span::raw("Computer: "),
            Span::styled(
                format!("{:>4}", game.computer_score()),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" points ({} opponent)", game.policy().name())),
        ]),
        Line::from(tile_spans(game.computer_hand().tiles(), Color::Magenta)),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Hands ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_pool(f: &mut Frame, app: &App, area: Rect) {
    let letters = app.game.pool().letters();
    let lines: Vec<Line> = tile_rows(&letters, 20).into_iter().map(Line::from).collect();

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!(" Pool ({} tiles) ", letters.len()))
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history = app.game.history();
    let history_items: Vec<ListItem> = history
        .iter()
        .rev()
        .enumerate()
        .map(|(i, turn)| {
            let color = match turn.actor {
                Actor::Player => Color::Green,
                Actor::Computer => Color::Magenta,
            };
            let bonus = if turn.bonus { " x2" } else { "" };
            let content = format!(
                "{:>2}. {:<9} {:<9} {:>3}{bonus}",
                history.len() - i,
                turn.actor,
                turn.word,
                turn.score,
            );
            ListItem::new(content).style(Style::default().fg(color))
        })
        .collect();

    let list =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Pool gauge
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_pool_gauge(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_pool_gauge(f: &mut Frame, app: &App, area: Rect) {
    let total = STANDARD_TILES.len();
    let remaining = app.game.pool().size().min(total);
    let used_pct = ((total - remaining) * 100 / total.max(1)) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Tiles Drawn ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(used_pct.min(100))
        .label(format!("{remaining}/{total} tiles left in pool"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Word => (
            " Enter a word from your hand | TAB for a hint ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::ComputerTurn => (
            " Press Enter for the computer's turn ",
            "",
            Color::Magenta,
        ),
        InputMode::GameOver => (
            " GAME OVER | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let turn = Paragraph::new(app.turn_label()).alignment(Alignment::Center);
    f.render_widget(turn, chunks[0]);

    let stats_text = format!(
        "Games: {} | W/L/T: {}/{}/{}",
        app.stats.games_played, app.stats.player_wins, app.stats.computer_wins, app.stats.ties
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let best = Paragraph::new(format!("Best score: {}", app.stats.best_score))
        .alignment(Alignment::Center);
    f.render_widget(best, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::Word => "Enter: Submit | TAB: Hint | Esc: Quit",
        InputMode::ComputerTurn => "Enter: Continue | q: Quit",
        InputMode::GameOver => "n: New Game | q: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;
    use crate::wordlists::Dictionary;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn draws_hands_and_pool() {
        let dict = Dictionary::embedded();
        let app = App::new(&dict, GameConfig::default().with_seed(9), "random");
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();

        terminal.draw(|f| ui(f, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        let screen: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(screen.contains("SCRAPPLE"));
        assert!(screen.contains("Pool (84 tiles)"));
        assert!(screen.contains("84/100 tiles left in pool"));
    }
}
