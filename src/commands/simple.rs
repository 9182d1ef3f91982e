//! Simple interactive CLI mode
//!
//! Line-based game without TUI: one guess per line.

use crate::core::to_emoji;
use crate::game::{RejectReason, RoundController, RoundStatus, RowOutcome};
use crate::output::print_board;
use colored::Colorize;
use std::io::{self, Write};

/// What a line of input did to the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Quit,
    NewRound,
    Rejected(RejectReason),
    Evaluated(RowOutcome),
}

/// Apply one line of player input to the controller
///
/// The whole line is the guess: it is rejected unless it is exactly one
/// row of letters.
pub fn handle_line(controller: &mut RoundController, input: &str) -> LineOutcome {
    match input.trim().to_lowercase().as_str() {
        "quit" | "q" | "exit" => LineOutcome::Quit,
        "new" | "n" => {
            controller.start_new_round();
            LineOutcome::NewRound
        }
        word => match controller.submit_text(word) {
            Ok(outcome) => LineOutcome::Evaluated(outcome),
            Err(reason) => {
                controller.clear_row();
                LineOutcome::Rejected(reason)
            }
        },
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(controller: &mut RoundController) -> Result<(), String> {
    let word_length = controller.config().word_length;
    let max_guesses = controller.config().max_guesses;

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordle - Simple Mode                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the {word_length}-letter word in {max_guesses} tries.");
    println!("  - {} letter in the right spot", " G ".black().on_green());
    println!("  - {} letter elsewhere in the word", " Y ".black().on_yellow());
    println!("  - {} letter not in the word\n", " - ".white().on_bright_black());
    println!("Commands: 'quit' to exit, 'new' for a new word\n");

    print_board(controller);

    loop {
        let input = get_user_input(&format!("Guess {}", controller.round().row_number()))?;

        match handle_line(controller, &input) {
            LineOutcome::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            LineOutcome::NewRound => {
                println!("\n🔄 New game started!\n");
                print_board(controller);
            }
            LineOutcome::Rejected(reason) => {
                println!("❌ {reason}\n");
            }
            LineOutcome::Evaluated(outcome) => {
                print_board(controller);

                if outcome.status == RoundStatus::InProgress {
                    continue;
                }

                print_round_summary(controller, outcome.status);

                match get_user_input("Play again? (yes/no)")?
                    .to_lowercase()
                    .as_str()
                {
                    "yes" | "y" => {
                        controller.start_new_round();
                        println!("\n🔄 New game started!\n");
                        print_board(controller);
                    }
                    _ => {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                }
            }
        }
    }
}

fn print_round_summary(controller: &RoundController, status: RoundStatus) {
    let round = controller.round();
    let used = round.guesses_used();

    println!("{}", "═".repeat(50).bright_cyan());
    if status == RoundStatus::Won {
        println!(
            "  {} in {} {}",
            "🎉 Solved".bright_green().bold(),
            used.to_string().bright_cyan().bold(),
            if used == 1 { "guess" } else { "guesses" }
        );
    } else {
        println!(
            "  {} The word was {}",
            "😞 Out of guesses.".red().bold(),
            round.target().text().to_uppercase().bright_yellow().bold()
        );
    }

    println!("\n  {used}/{}", round.max_guesses());
    for verdicts in round.rows().iter().filter_map(|row| row.verdicts()) {
        println!("  {}", to_emoji(&verdicts));
    }
    println!("{}", "═".repeat(50).bright_cyan());
    println!();
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
