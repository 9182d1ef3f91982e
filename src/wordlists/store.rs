//! Solution and guess pools
//!
//! An ordered word list is split once at load time: the leading words can be
//! drawn as targets, the rest are only accepted as guesses.

use super::{SOLUTION_COUNT, WORDS};
use crate::core::{Word, WordError};
use log::{debug, info};
use rand::Rng;
use rustc_hash::FxHashSet;
use std::fmt;

/// Error raised while building a [`WordStore`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListError {
    InvalidWord {
        line: usize,
        text: String,
        source: WordError,
    },
    SplitOutOfRange {
        split: usize,
        len: usize,
    },
    NoSolutions,
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWord { line, text, source } => {
                write!(f, "Invalid word '{text}' on line {line}: {source}")
            }
            Self::SplitOutOfRange { split, len } => {
                write!(f, "Split point {split} is past the end of a {len}-word list")
            }
            Self::NoSolutions => write!(f, "Word list has no solution words"),
        }
    }
}

impl std::error::Error for WordListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidWord { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Immutable word pools for a session
#[derive(Debug, Clone)]
pub struct WordStore {
    solutions: Vec<Word>,
    guesses: Vec<Word>,
    accepted: FxHashSet<String>,
    word_length: usize,
}

impl WordStore {
    /// Build pools from an ordered list; `words[..split]` are solutions
    ///
    /// # Errors
    ///
    /// Returns `WordListError` if any entry is not a valid word of
    /// `word_length` letters, if `split` exceeds the list, or if the
    /// solution pool would be empty.
    pub fn new<S: AsRef<str>>(
        words: &[S],
        split: usize,
        word_length: usize,
    ) -> Result<Self, WordListError> {
        if split > words.len() {
            return Err(WordListError::SplitOutOfRange {
                split,
                len: words.len(),
            });
        }
        if split == 0 {
            return Err(WordListError::NoSolutions);
        }

        let parsed = words
            .iter()
            .enumerate()
            .map(|(i, text)| {
                Word::with_length(text.as_ref(), word_length).map_err(|source| {
                    WordListError::InvalidWord {
                        line: i + 1,
                        text: text.as_ref().to_string(),
                        source,
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let accepted = parsed.iter().map(|w| w.text().to_string()).collect();
        let mut solutions = parsed;
        let guesses = solutions.split_off(split);

        info!(
            "Loaded {} solutions and {} extra guesses ({word_length} letters)",
            solutions.len(),
            guesses.len()
        );

        Ok(Self {
            solutions,
            guesses,
            accepted,
            word_length,
        })
    }

    /// Pools from the list compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `WordListError` if `word_length` differs from the embedded
    /// words' length.
    pub fn embedded(word_length: usize) -> Result<Self, WordListError> {
        Self::new(WORDS, SOLUTION_COUNT, word_length)
    }

    /// Draw a target uniformly from the solution pool
    pub fn pick_random_target<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        let index = rng.random_range(0..self.solutions.len());
        let target = &self.solutions[index];
        debug!("Picked target #{index} of {}", self.solutions.len());
        target
    }

    /// Whether `candidate` (case-insensitive) is in either pool
    #[must_use]
    pub fn is_acceptable_guess(&self, candidate: &str) -> bool {
        self.accepted.contains(&candidate.to_lowercase())
    }

    #[must_use]
    pub fn solutions(&self) -> &[Word] {
        &self.solutions
    }

    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn small_store() -> WordStore {
        WordStore::new(&["level", "abide", "crane", "eerie", "audio"], 3, 5).unwrap()
    }

    #[test]
    fn split_partitions_pools() {
        let store = small_store();
        let solutions: Vec<&str> = store.solutions().iter().map(Word::text).collect();
        let guesses: Vec<&str> = store.guesses().iter().map(Word::text).collect();

        assert_eq!(solutions, vec!["level", "abide", "crane"]);
        assert_eq!(guesses, vec!["eerie", "audio"]);
    }

    #[test]
    fn acceptable_guess_checks_both_pools() {
        let store = small_store();
        assert!(store.is_acceptable_guess("level"));
        assert!(store.is_acceptable_guess("audio"));
        assert!(store.is_acceptable_guess("AUDIO"));
        assert!(!store.is_acceptable_guess("zzzzz"));
        assert!(!store.is_acceptable_guess("leve"));
    }

    #[test]
    fn random_target_comes_from_solutions() {
        let store = small_store();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            let target = store.pick_random_target(&mut rng);
            assert!(store.solutions().contains(target));
        }
    }

    #[test]
    fn random_target_reaches_every_solution() {
        let store = small_store();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = FxHashSet::default();

        for _ in 0..200 {
            seen.insert(store.pick_random_target(&mut rng).text().to_string());
        }

        assert_eq!(seen.len(), store.solutions().len());
    }

    #[test]
    fn rejects_wrong_length() {
        let err = WordStore::new(&["crane", "cat"], 1, 5).unwrap_err();
        assert!(matches!(err, WordListError::InvalidWord { line: 2, .. }));
    }

    #[test]
    fn rejects_bad_split() {
        assert_eq!(
            WordStore::new(&["crane"], 2, 5).unwrap_err(),
            WordListError::SplitOutOfRange { split: 2, len: 1 }
        );
        assert_eq!(
            WordStore::new(&["crane"], 0, 5).unwrap_err(),
            WordListError::NoSolutions
        );
    }

    #[test]
    fn whole_list_as_solutions() {
        let store = WordStore::new(&["cat", "dog"], 2, 3).unwrap();
        assert_eq!(store.solutions().len(), 2);
        assert!(store.guesses().is_empty());
        assert_eq!(store.word_length(), 3);
    }

    #[test]
    fn embedded_store_loads() {
        let store = WordStore::embedded(5).unwrap();
        assert_eq!(store.solutions().len(), SOLUTION_COUNT);
        assert_eq!(store.solutions().len() + store.guesses().len(), WORDS.len());
        assert!(store.is_acceptable_guess("level"));
        assert!(store.is_acceptable_guess("eerie"));
    }

    #[test]
    fn embedded_split_and_common_guesses() {
        let store = WordStore::embedded(5).unwrap();
        assert_eq!(SOLUTION_COUNT, 2315);
        assert!(store.solutions().iter().any(|w| w.text() == "stare"));
        for guess in ["stare", "tears", "rates", "crane", "adieu", "Roate"] {
            assert!(store.is_acceptable_guess(guess), "{guess} should be accepted");
        }
    }

    #[test]
    fn embedded_store_rejects_other_lengths() {
        assert!(WordStore::embedded(6).is_err());
    }
}
