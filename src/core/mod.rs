//! Core domain types for Wordle
//!
//! Words, verdicts and the guess evaluator. Nothing here knows about rounds,
//! rendering or word lists.

mod verdict;
mod word;

pub use verdict::{Verdict, evaluate, is_win, to_emoji};
pub use word::{Word, WordError};
