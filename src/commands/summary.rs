//! Word list summary command

use crate::wordlists::WordStore;

/// Sizes of the loaded word pools
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordListSummary {
    pub word_length: usize,
    pub solutions: usize,
    pub extra_guesses: usize,
}

#[must_use]
pub fn summarize_word_list(store: &WordStore) -> WordListSummary {
    WordListSummary {
        word_length: store.word_length(),
        solutions: store.solutions().len(),
        extra_guesses: store.guesses().len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_both_pools() {
        let store = WordStore::new(&["level", "abide", "audio"], 1, 5).unwrap();
        assert_eq!(
            summarize_word_list(&store),
            WordListSummary {
                word_length: 5,
                solutions: 1,
                extra_guesses: 2,
            }
        );
    }
}
