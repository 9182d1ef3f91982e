//! Formatting utilities for terminal output

use crate::core::Verdict;
use crate::game::{GuessRow, KeyboardState};
use colored::{ColoredString, Colorize};

/// Color a single letter by its verdict; unevaluated letters stay plain
#[must_use]
pub fn colored_letter(letter: char, verdict: Option<Verdict>) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match verdict {
        Some(Verdict::Correct) => text.black().on_green().bold(),
        Some(Verdict::Present) => text.black().on_yellow().bold(),
        Some(Verdict::Absent) => text.white().on_bright_black(),
        None => text.bold(),
    }
}

/// Render a board row as colored tiles, `_` for empty slots
#[must_use]
pub fn format_row(row: &GuessRow) -> String {
    row.tiles()
        .iter()
        .map(|tile| colored_letter(tile.letter.unwrap_or('_'), tile.verdict).to_string())
        .collect()
}

/// Render one keyboard row, coloring keys by their best verdict
#[must_use]
pub fn format_keyboard_row(layout_row: &str, keyboard: &KeyboardState) -> String {
    layout_row
        .chars()
        .map(|key| colored_letter(key, keyboard.verdict_for(key)).to_string())
        .collect::<Vec<_>>()
        .join("")
}

/// Plain text form of a verdict row, e.g. "GY---"
#[must_use]
pub fn verdict_codes(verdicts: &[Verdict]) -> String {
    verdicts.iter().map(|v| v.code()).collect()
}
