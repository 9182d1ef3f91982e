//! Guess checking command
//!
//! Evaluates one guess against a chosen target without playing a round.

use crate::core::{Verdict, Word, evaluate, is_win};
use crate::output::formatters::colored_letter;
use crate::wordlists::WordStore;

/// Result of checking a guess
pub struct CheckResult {
    pub guess: String,
    pub target: String,
    pub verdicts: Vec<Verdict>,
    /// Colored tiles ready for printing
    pub row: String,
    pub in_word_list: bool,
    pub solved: bool,
}

/// Evaluate `guess` against `target`
///
/// The guess does not have to be in the word list; the result records
/// whether it is.
///
/// # Errors
///
/// Returns an error if either word is invalid or not of the store's word
/// length.
pub fn check_guess(guess: &str, target: &str, store: &WordStore) -> Result<CheckResult, String> {
    let length = store.word_length();
    let guess_word =
        Word::with_length(guess, length).map_err(|e| format!("Invalid guess: {e}"))?;
    let target_word =
        Word::with_length(target, length).map_err(|e| format!("Invalid target: {e}"))?;

    let verdicts = evaluate(&guess_word, &target_word);
    let row = guess_word
        .chars()
        .iter()
        .zip(&verdicts)
        .map(|(&letter, &verdict)| colored_letter(char::from(letter), Some(verdict)).to_string())
        .collect();

    Ok(CheckResult {
        in_word_list: store.is_acceptable_guess(guess_word.text()),
        solved: is_win(&verdicts),
        guess: guess_word.text().to_string(),
        target: target_word.text().to_string(),
        verdicts,
        row,
    })
}
