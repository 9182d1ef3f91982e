//! Per-letter feedback and guess evaluation
//!
//! Each guessed letter receives one of three verdicts, ordered by strength:
//! - Absent (grey): no unmatched occurrence left in the target
//! - Present (yellow): in the target, but at another position
//! - Correct (green): same letter at the same position

use super::Word;
use std::fmt;

/// Feedback for one letter of a guess
///
/// The derived `Ord` follows declaration order, so `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verdict {
    Absent,
    Present,
    Correct,
}

impl Verdict {
    /// Square emoji used in share text
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }

    /// Single-letter code: `-`, `Y` or `G`
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Absent => '-',
            Self::Present => 'Y',
            Self::Correct => 'G',
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Absent => "absent",
            Self::Present => "present",
            Self::Correct => "correct",
        };
        f.write_str(name)
    }
}

/// Evaluate `guess` against `target`, one verdict per position
///
/// Duplicate letters are handled with a multiset of the target's letters:
/// 1. First pass: mark exact matches and remove them from the pool
/// 2. Second pass, left to right: mark a letter present only while the pool
///    still holds an unmatched occurrence of it
///
/// Both words are expected to have the same length; only the common prefix
/// is compared otherwise.
///
/// # Examples
/// ```
/// use wordle_tiles::core::{Verdict, Word, evaluate};
///
/// let guess = Word::new("eerie").unwrap();
/// let target = Word::new("level").unwrap();
///
/// assert_eq!(
///     evaluate(&guess, &target),
///     vec![
///         Verdict::Present,
///         Verdict::Correct,
///         Verdict::Absent,
///         Verdict::Absent,
///         Verdict::Absent,
///     ]
/// );
/// ```
#[must_use]
pub fn evaluate(guess: &Word, target: &Word) -> Vec<Verdict> {
    let length = guess.len().min(target.len());
    let mut result = vec![Verdict::Absent; length];
    let mut target_available = target.char_counts();

    // First pass: exact position matches
    for (i, (&g, &t)) in guess.chars().iter().zip(target.chars()).enumerate() {
        if g == t {
            result[i] = Verdict::Correct;
            if let Some(count) = target_available.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: wrong position, but an unmatched occurrence remains
    for (i, &g) in guess.chars().iter().take(length).enumerate() {
        if result[i] == Verdict::Correct {
            continue;
        }
        if let Some(count) = target_available.get_mut(&g)
            && *count > 0
        {
            result[i] = Verdict::Present;
            *count -= 1;
        }
    }

    result
}

/// True when every verdict is `Correct`
#[must_use]
pub fn is_win(verdicts: &[Verdict]) -> bool {
    !verdicts.is_empty() && verdicts.iter().all(|&v| v == Verdict::Correct)
}

/// Render a verdict row as emoji squares, e.g. "🟩🟨⬜⬜⬜"
#[must_use]
pub fn to_emoji(verdicts: &[Verdict]) -> String {
    verdicts.iter().map(|v| v.emoji()).collect()
}
