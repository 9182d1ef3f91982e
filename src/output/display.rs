//! Display functions for command results

use super::formatters::{format_keyboard_row, format_row, verdict_codes};
use crate::commands::{CheckResult, WordListSummary};
use crate::core::to_emoji;
use crate::game::RoundController;
use colored::Colorize;

/// Print the result of checking one guess
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        result.guess.to_uppercase().bright_yellow().bold(),
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}", result.row);
    println!("  {}  {}", to_emoji(&result.verdicts), verdict_codes(&result.verdicts));

    if !result.in_word_list {
        println!("\n{}", "Note: guess is not in the word list".yellow());
    }
    if result.solved {
        println!("\n{}", "✅ Exact match!".green().bold());
    }
}

/// Print the board, scoreboard and keyboard of the current round
pub fn print_board(controller: &RoundController) {
    let round = controller.round();

    println!("\n  {}", controller.scoreboard_text().bright_cyan().bold());
    println!();
    for row in round.rows() {
        println!("  {}", format_row(row));
    }
    println!();
    for (indent, layout_row) in controller.config().keyboard_layout.iter().enumerate() {
        println!(
            "  {}{}",
            " ".repeat(indent * 2),
            format_keyboard_row(layout_row, controller.keyboard())
        );
    }
    println!();
}

/// Print the sizes of the word pools
pub fn print_word_list_summary(summary: &WordListSummary) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "WORD LIST".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());
    println!("   Word length:   {}", summary.word_length);
    println!(
        "   Solutions:     {}",
        summary.solutions.to_string().bright_yellow()
    );
    println!("   Extra guesses: {}", summary.extra_guesses);
    println!("   Total:         {}", summary.solutions + summary.extra_guesses);
}
