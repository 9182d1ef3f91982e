//! TUI rendering with ratatui
//!
//! Scoreboard, tile grid, submit button and keyboard.

use super::app::{App, MessageStyle};
use crate::config::BACKSPACE_KEY;
use crate::core::Verdict;
use crate::game::{GuessRow, KeyboardState, RoundStatus, SubmitButton};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let max_guesses = app.controller.config().max_guesses as u16;
    let keyboard_rows = app.controller.config().keyboard_layout.len() as u16;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                 // Scoreboard
            Constraint::Length(max_guesses + 2),   // Tile grid
            Constraint::Length(3),                 // Submit button
            Constraint::Length(keyboard_rows + 2), // Keyboard
            Constraint::Min(3),                    // Messages
            Constraint::Length(1),                 // Status bar
        ])
        .split(f.area());

    render_scoreboard(f, app, chunks[0]);
    render_board(f, app, chunks[1]);
    render_submit_button(f, app, chunks[2]);
    render_keyboard(f, app, chunks[3]);
    render_messages(f, app, chunks[4]);
    render_status(f, app, chunks[5]);
}

/// Background color for a tile or key
const fn verdict_color(verdict: Option<Verdict>) -> Color {
    match verdict {
        Some(Verdict::Correct) => Color::Green,
        Some(Verdict::Present) => Color::Yellow,
        Some(Verdict::Absent) => Color::DarkGray,
        None => Color::Reset,
    }
}

fn tile_span(letter: char, verdict: Option<Verdict>) -> Span<'static> {
    let style = match verdict {
        Some(_) => Style::default()
            .fg(Color::Black)
            .bg(verdict_color(verdict))
            .add_modifier(Modifier::BOLD),
        None => Style::default().add_modifier(Modifier::BOLD),
    };
    Span::styled(format!(" {} ", letter.to_ascii_uppercase()), style)
}

fn render_scoreboard(f: &mut Frame, app: &App, area: Rect) {
    let color = match app.controller.round().status() {
        RoundStatus::InProgress => Color::Cyan,
        RoundStatus::Won => Color::Green,
        RoundStatus::Lost => Color::Red,
    };

    let header = Paragraph::new(app.controller.scoreboard_text().to_string())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(color)),
        );
    f.render_widget(header, area);
}

fn board_line(row: &GuessRow, is_active: bool) -> Line<'static> {
    let spans: Vec<Span> = row
        .tiles()
        .iter()
        .flat_map(|tile| {
            let letter = tile.letter.unwrap_or(if is_active { '_' } else { '·' });
            [tile_span(letter, tile.verdict), Span::raw(" ")]
        })
        .collect();
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let round = app.controller.round();
    let lines: Vec<Line> = round
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| board_line(row, !round.is_ended() && i == round.current_row()))
        .collect();

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_submit_button(f: &mut Frame, app: &App, area: Rect) {
    let color = match app.controller.submit_button() {
        SubmitButton::Disabled => Color::DarkGray,
        SubmitButton::Submit => Color::Green,
        SubmitButton::NotAWord => Color::Red,
        SubmitButton::NewGame => Color::Cyan,
    };

    let button = Paragraph::new(app.controller.submit_label().to_string())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(button, area);
}

fn keyboard_line(layout_row: &str, keyboard: &KeyboardState) -> Line<'static> {
    let spans: Vec<Span> = layout_row
        .chars()
        .flat_map(|key| {
            let span = if key == BACKSPACE_KEY {
                Span::styled(format!(" {key} "), Style::default().fg(Color::White))
            } else {
                tile_span(key, keyboard.verdict_for(key))
            };
            [span, Span::raw(" ")]
        })
        .collect();
    Line::from(spans)
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = app.controller.keyboard();
    let lines: Vec<Line> = app
        .controller
        .config()
        .keyboard_layout
        .iter()
        .map(|row| keyboard_line(row, keyboard))
        .collect();

    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(widget, area);
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(65),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help = Paragraph::new("Letters: type | Backspace: erase | Enter: submit | Esc: quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
