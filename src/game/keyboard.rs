//! Virtual keyboard feedback
//!
//! Each key remembers the strongest verdict any guess has earned for its
//! letter. A key never moves back down the `Absent < Present < Correct`
//! order within a round.

use crate::core::Verdict;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    keys: FxHashMap<char, Verdict>,
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a verdict for `key`, keeping the stronger one
    ///
    /// Returns true if the displayed status changed.
    pub fn record(&mut self, key: char, verdict: Verdict) -> bool {
        let key = key.to_ascii_lowercase();
        match self.keys.get(&key) {
            Some(&current) if current >= verdict => false,
            _ => {
                self.keys.insert(key, verdict);
                true
            }
        }
    }

    /// Best verdict seen for `key`, or `None` if it was never guessed
    #[must_use]
    pub fn verdict_for(&self, key: char) -> Option<Verdict> {
        self.keys.get(&key.to_ascii_lowercase()).copied()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unseen_key_is_unset() {
        let keyboard = KeyboardState::new();
        assert_eq!(keyboard.verdict_for('a'), None);
    }

    #[test]
    fn first_verdict_is_recorded() {
        let mut keyboard = KeyboardState::new();
        assert!(keyboard.record('a', Verdict::Absent));
        assert_eq!(keyboard.verdict_for('a'), Some(Verdict::Absent));
    }

    #[test]
    fn upgrades_are_kept() {
        let mut keyboard = KeyboardState::new();
        keyboard.record('e', Verdict::Absent);
        assert!(keyboard.record('e', Verdict::Present));
        assert!(keyboard.record('e', Verdict::Correct));
        assert_eq!(keyboard.verdict_for('e'), Some(Verdict::Correct));
    }

    #[test]
    fn correct_is_never_downgraded() {
        let mut keyboard = KeyboardState::new();
        keyboard.record('e', Verdict::Correct);

        assert!(!keyboard.record('e', Verdict::Absent));
        assert!(!keyboard.record('e', Verdict::Present));
        assert_eq!(keyboard.verdict_for('e'), Some(Verdict::Correct));
    }

    #[test]
    fn present_is_not_downgraded_to_absent() {
        let mut keyboard = KeyboardState::new();
        keyboard.record('l', Verdict::Present);
        keyboard.record('l', Verdict::Absent);
        assert_eq!(keyboard.verdict_for('l'), Some(Verdict::Present));
    }

    #[test]
    fn keys_are_case_insensitive() {
        let mut keyboard = KeyboardState::new();
        keyboard.record('Q', Verdict::Present);
        assert_eq!(keyboard.verdict_for('q'), Some(Verdict::Present));
    }

    #[test]
    fn clear_forgets_everything() {
        let mut keyboard = KeyboardState::new();
        keyboard.record('a', Verdict::Correct);
        keyboard.clear();
        assert_eq!(keyboard, KeyboardState::new());
    }
}
