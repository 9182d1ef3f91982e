//! Word list loading utilities
//!
//! Reads user-supplied word lists. Validation happens when the list is
//! handed to [`WordStore`](super::WordStore).

use std::fs;
use std::io;
use std::path::Path;

/// Load a word list from a file, one word per line
///
/// Lines are trimmed and blank lines skipped; order is preserved because the
/// solution/guess split is positional.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_tiles::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/solutions.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_word_list(&content))
}

/// Split word list text into trimmed, non-empty lines
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}
