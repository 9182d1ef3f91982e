//! State of a single round
//!
//! Cursors are zero-based. `current_row == rows.len()` means every row has
//! been submitted and `current_tile == word_length` means the current row is
//! full.

use super::row::GuessRow;
use crate::core::{Verdict, Word, is_win};

/// Where a round stands after the latest action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    target: Word,
    rows: Vec<GuessRow>,
    current_row: usize,
    current_tile: usize,
    ended: bool,
    won: bool,
}

impl RoundState {
    /// Fresh round with `max_guesses` empty rows sized to the target
    #[must_use]
    pub fn new(target: Word, max_guesses: usize) -> Self {
        let rows = (0..max_guesses).map(|_| GuessRow::new(target.len())).collect();
        Self {
            target,
            rows,
            current_row: 0,
            current_tile: 0,
            ended: false,
            won: false,
        }
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub fn rows(&self) -> &[GuessRow] {
        &self.rows
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.target.len()
    }

    #[must_use]
    pub fn max_guesses(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.current_row
    }

    #[must_use]
    pub const fn current_tile(&self) -> usize {
        self.current_tile
    }

    /// One-based row cursor; `max_guesses + 1` once all rows are used
    #[must_use]
    pub const fn row_number(&self) -> usize {
        self.current_row + 1
    }

    /// One-based tile cursor; `word_length + 1` when the row is full
    #[must_use]
    pub const fn tile_number(&self) -> usize {
        self.current_tile + 1
    }

    #[must_use]
    pub const fn is_ended(&self) -> bool {
        self.ended
    }

    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.won
    }

    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        match (self.ended, self.won) {
            (true, true) => RoundStatus::Won,
            (true, false) => RoundStatus::Lost,
            _ => RoundStatus::InProgress,
        }
    }

    /// The row being typed into, if the round still has one
    #[must_use]
    pub fn active_row(&self) -> Option<&GuessRow> {
        if self.ended {
            None
        } else {
            self.rows.get(self.current_row)
        }
    }

    /// Number of rows already evaluated
    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.rows.iter().filter(|r| r.is_evaluated()).count()
    }

    #[must_use]
    pub fn is_row_full(&self) -> bool {
        self.current_tile == self.word_length()
    }

    /// Put `letter` at the cursor and advance; false if nothing changed
    pub(crate) fn push_letter(&mut self, letter: char) -> bool {
        if self.ended || self.is_row_full() {
            return false;
        }
        let tile = self.current_tile;
        self.rows[self.current_row].set_letter(tile, letter);
        self.current_tile += 1;
        true
    }

    /// Step the cursor back and clear that slot; false at the first slot
    pub(crate) fn pop_letter(&mut self) -> bool {
        if self.ended || self.current_tile == 0 {
            return false;
        }
        self.current_tile -= 1;
        let tile = self.current_tile;
        self.rows[self.current_row].clear_letter(tile);
        true
    }

    /// Record verdicts on the current row and move the round forward
    pub(crate) fn complete_row(&mut self, verdicts: &[Verdict]) -> RoundStatus {
        self.rows[self.current_row].apply_verdicts(verdicts);

        if is_win(verdicts) {
            self.ended = true;
            self.won = true;
        } else {
            self.current_row += 1;
            self.current_tile = 0;
            if self.current_row >= self.rows.len() {
                self.ended = true;
            }
        }

        self.status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Verdict::{Absent as A, Correct as C};

    fn round(target: &str, max_guesses: usize) -> RoundState {
        RoundState::new(Word::new(target).unwrap(), max_guesses)
    }

    #[test]
    fn new_round_starts_at_origin() {
        let state = round("crane", 6);
        assert_eq!(state.rows().len(), 6);
        assert_eq!(state.current_row(), 0);
        assert_eq!(state.current_tile(), 0);
        assert_eq!(state.row_number(), 1);
        assert_eq!(state.tile_number(), 1);
        assert_eq!(state.status(), RoundStatus::InProgress);
        assert!(state.rows().iter().all(|r| r.len() == 5));
    }

    #[test]
    fn push_stops_at_full_row() {
        let mut state = round("cat", 6);
        assert!(state.push_letter('d'));
        assert!(state.push_letter('o'));
        assert!(state.push_letter('g'));
        assert!(state.is_row_full());
        assert_eq!(state.tile_number(), 4);

        assert!(!state.push_letter('s'));
        assert_eq!(state.current_tile(), 3);
        assert_eq!(state.active_row().and_then(GuessRow::text).as_deref(), Some("dog"));
    }

    #[test]
    fn pop_stops_at_first_slot() {
        let mut state = round("cat", 6);
        assert!(!state.pop_letter());

        state.push_letter('d');
        assert!(state.pop_letter());
        assert_eq!(state.current_tile(), 0);
        assert!(state.active_row().is_some_and(GuessRow::is_empty));
        assert!(!state.pop_letter());
    }

    #[test]
    fn losing_row_advances_cursor() {
        let mut state = round("cat", 2);
        for ch in "dog".chars() {
            state.push_letter(ch);
        }

        assert_eq!(state.complete_row(&[A, A, A]), RoundStatus::InProgress);
        assert_eq!(state.current_row(), 1);
        assert_eq!(state.current_tile(), 0);
        assert_eq!(state.guesses_used(), 1);
    }

    #[test]
    fn last_miss_loses() {
        let mut state = round("cat", 1);
        for ch in "dog".chars() {
            state.push_letter(ch);
        }

        assert_eq!(state.complete_row(&[A, A, A]), RoundStatus::Lost);
        assert!(state.is_ended());
        assert!(!state.is_won());
        assert_eq!(state.row_number(), 2);
        assert!(state.active_row().is_none());
        assert!(!state.push_letter('x'));
    }

    #[test]
    fn all_correct_wins_without_advancing() {
        let mut state = round("cat", 6);
        for ch in "cat".chars() {
            state.push_letter(ch);
        }

        assert_eq!(state.complete_row(&[C, C, C]), RoundStatus::Won);
        assert_eq!(state.current_row(), 0);
        assert!(state.is_won());
        assert!(!state.pop_letter());
    }
}
