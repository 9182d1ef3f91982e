//! Tile rows of the board

use crate::core::Verdict;

/// One slot of a guess row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tile {
    pub letter: Option<char>,
    /// `None` until the row has been evaluated
    pub verdict: Option<Verdict>,
}

/// A row of `word_length` tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRow {
    tiles: Vec<Tile>,
}

impl GuessRow {
    #[must_use]
    pub fn new(word_length: usize) -> Self {
        Self {
            tiles: vec![Tile::default(); word_length],
        }
    }

    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// No letters typed yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.iter().all(|t| t.letter.is_none())
    }

    #[must_use]
    pub fn is_evaluated(&self) -> bool {
        self.tiles.iter().all(|t| t.verdict.is_some())
    }

    /// The typed word, available only once the row is full
    #[must_use]
    pub fn text(&self) -> Option<String> {
        self.tiles.iter().map(|t| t.letter).collect()
    }

    /// Verdicts of an evaluated row
    #[must_use]
    pub fn verdicts(&self) -> Option<Vec<Verdict>> {
        self.tiles.iter().map(|t| t.verdict).collect()
    }

    pub(crate) fn set_letter(&mut self, index: usize, letter: char) {
        self.tiles[index].letter = Some(letter);
    }

    pub(crate) fn clear_letter(&mut self, index: usize) {
        self.tiles[index].letter = None;
    }

    pub(crate) fn apply_verdicts(&mut self, verdicts: &[Verdict]) {
        for (tile, &verdict) in self.tiles.iter_mut().zip(verdicts) {
            tile.verdict = Some(verdict);
        }
    }
}
