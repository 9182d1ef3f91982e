//! Word lists for Wordle
//!
//! The default list is embedded in the binary; custom lists are loaded from
//! files. Both end up in a [`WordStore`].

mod embedded;
pub mod loader;
mod store;

pub use embedded::{SOLUTION_COUNT, WORDS};
pub use store::{WordListError, WordStore};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solution_count_within_list() {
        assert!(SOLUTION_COUNT > 0);
        assert!(SOLUTION_COUNT <= WORDS.len());
    }

    #[test]
    fn words_are_valid() {
        // All words should be 5 letters, lowercase
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn words_are_unique() {
        let unique: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }
}
