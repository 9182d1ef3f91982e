//! Round controller
//!
//! Owns the active round and keyboard state and turns player actions
//! (type, backspace, submit, new round) into state transitions. Listeners
//! registered with [`RoundController::subscribe`] are called synchronously
//! after every transition so a renderer can redraw.

use super::keyboard::KeyboardState;
use super::round::{RoundState, RoundStatus};
use crate::config::{BACKSPACE_KEY, GameConfig};
use crate::core::{Verdict, Word, WordError, evaluate};
use crate::wordlists::WordStore;
use log::{debug, info};
use rand::rngs::StdRng;
use std::fmt;

/// Why a submission was refused; refusals never change state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    IncompleteRow,
    NotAWord,
    RoundOver,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompleteRow => write!(f, "Not enough letters"),
            Self::NotAWord => write!(f, "Not in word list"),
            Self::RoundOver => write!(f, "The round is over"),
        }
    }
}

impl std::error::Error for RejectReason {}

/// Result of an accepted submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowOutcome {
    /// Zero-based index of the evaluated row
    pub row: usize,
    pub guess: Word,
    pub verdicts: Vec<Verdict>,
    pub status: RoundStatus,
}

/// Notification sent to listeners after each transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    RoundStarted,
    LetterTyped { row: usize, tile: usize, letter: char },
    LetterErased { row: usize, tile: usize },
    RowRejected(RejectReason),
    RowEvaluated { row: usize, verdicts: Vec<Verdict> },
    RoundEnded(RoundStatus),
}

/// What the submit button currently does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitButton {
    /// Row not full yet
    Disabled,
    Submit,
    NotAWord,
    NewGame,
}

type Listener<'a> = Box<dyn FnMut(&GameEvent) + 'a>;

pub struct RoundController<'a> {
    config: &'a GameConfig,
    store: &'a WordStore,
    rng: StdRng,
    round: RoundState,
    keyboard: KeyboardState,
    listeners: Vec<Listener<'a>>,
}

impl<'a> RoundController<'a> {
    /// Create a controller and start its first round
    ///
    /// # Errors
    ///
    /// Returns an error if the store's words are not `config.word_length`
    /// letters long.
    pub fn new(
        config: &'a GameConfig,
        store: &'a WordStore,
        mut rng: StdRng,
    ) -> Result<Self, String> {
        if store.word_length() != config.word_length {
            return Err(format!(
                "Word list has {}-letter words but the game expects {}",
                store.word_length(),
                config.word_length
            ));
        }

        let target = store.pick_random_target(&mut rng).clone();
        Ok(Self {
            config,
            store,
            rng,
            round: RoundState::new(target, config.max_guesses),
            keyboard: KeyboardState::new(),
            listeners: Vec::new(),
        })
    }

    /// Register a callback fired after every state change
    pub fn subscribe(&mut self, listener: impl FnMut(&GameEvent) + 'a) {
        self.listeners.push(Box::new(listener));
    }

    #[must_use]
    pub const fn round(&self) -> &RoundState {
        &self.round
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        self.config
    }

    /// Replace the round and keyboard with fresh state and a new target
    pub fn start_new_round(&mut self) {
        let target = self.store.pick_random_target(&mut self.rng).clone();
        self.begin(target);
    }

    /// Start a round against a chosen target
    ///
    /// # Errors
    ///
    /// Returns `WordError::InvalidLength` if the target does not match the
    /// configured word length.
    pub fn start_round_with_target(&mut self, target: Word) -> Result<(), WordError> {
        if target.len() != self.config.word_length {
            return Err(WordError::InvalidLength {
                expected: self.config.word_length,
                actual: target.len(),
            });
        }
        self.begin(target);
        Ok(())
    }

    fn begin(&mut self, target: Word) {
        debug!("New round, target has {} letters", target.len());
        self.round = RoundState::new(target, self.config.max_guesses);
        self.keyboard.clear();
        self.emit(&GameEvent::RoundStarted);
    }

    /// Type a letter into the next free slot
    ///
    /// Non-letters, a full row and a finished round are ignored. Returns
    /// true if the board changed.
    pub fn type_char(&mut self, c: char) -> bool {
        if !c.is_ascii_alphabetic() {
            debug!("Ignoring non-letter input {c:?}");
            return false;
        }

        let letter = c.to_ascii_lowercase();
        let (row, tile) = (self.round.current_row(), self.round.current_tile());
        if !self.round.push_letter(letter) {
            return false;
        }

        self.emit(&GameEvent::LetterTyped { row, tile, letter });
        true
    }

    /// Erase the last typed letter of the current row
    ///
    /// Returns false at the first slot or once the round is over.
    pub fn backspace(&mut self) -> bool {
        if !self.round.pop_letter() {
            return false;
        }

        let (row, tile) = (self.round.current_row(), self.round.current_tile());
        self.emit(&GameEvent::LetterErased { row, tile });
        true
    }

    /// Erase every letter of the current row
    pub fn clear_row(&mut self) {
        while self.backspace() {}
    }

    /// Handle a press on the virtual keyboard, including its backspace key
    pub fn press_key(&mut self, key: char) -> bool {
        if key == BACKSPACE_KEY {
            self.backspace()
        } else {
            self.type_char(key)
        }
    }

    /// Evaluate the current row
    ///
    /// # Errors
    ///
    /// Returns a `RejectReason` without changing any state if the round is
    /// over, the row is not full, or the row is not an acceptable word.
    pub fn submit(&mut self) -> Result<RowOutcome, RejectReason> {
        if self.round.is_ended() {
            return self.reject(RejectReason::RoundOver);
        }

        let Some(text) = self.round.active_row().and_then(|row| row.text()) else {
            return self.reject(RejectReason::IncompleteRow);
        };

        if !self.store.is_acceptable_guess(&text) {
            return self.reject(RejectReason::NotAWord);
        }

        let Ok(guess) = Word::with_length(text, self.config.word_length) else {
            return self.reject(RejectReason::NotAWord);
        };

        let verdicts = evaluate(&guess, self.round.target());
        for (&letter, &verdict) in guess.chars().iter().zip(&verdicts) {
            self.keyboard.record(char::from(letter), verdict);
        }

        let row = self.round.current_row();
        let status = self.round.complete_row(&verdicts);
        debug!("Row {} evaluated as {status:?}", row + 1);

        self.emit(&GameEvent::RowEvaluated {
            row,
            verdicts: verdicts.clone(),
        });
        if status != RoundStatus::InProgress {
            info!(
                "Round {} after {} guesses",
                if status == RoundStatus::Won { "won" } else { "lost" },
                self.round.guesses_used()
            );
            self.emit(&GameEvent::RoundEnded(status));
        }

        Ok(RowOutcome {
            row,
            guess,
            verdicts,
            status,
        })
    }

    /// Replace the active row with `text` and submit it
    ///
    /// The text must fill the row exactly. Shorter text is an incomplete row;
    /// longer text or text with non-letters is not a word and is never typed.
    pub fn submit_text(&mut self, text: &str) -> Result<RowOutcome, RejectReason> {
        if self.round.is_ended() {
            return self.reject(RejectReason::RoundOver);
        }

        let length = text.chars().count();
        if length > self.config.word_length || !text.chars().all(|c| c.is_ascii_alphabetic()) {
            return self.reject(RejectReason::NotAWord);
        }

        self.clear_row();
        for c in text.chars() {
            self.type_char(c);
        }
        self.submit()
    }

    fn reject(&mut self, reason: RejectReason) -> Result<RowOutcome, RejectReason> {
        debug!("Submission rejected: {reason}");
        self.emit(&GameEvent::RowRejected(reason));
        Err(reason)
    }

    /// State of the submit button for the current board
    #[must_use]
    pub fn submit_button(&self) -> SubmitButton {
        if self.round.is_ended() {
            return SubmitButton::NewGame;
        }

        match self.round.active_row().and_then(|row| row.text()) {
            Some(text) if self.store.is_acceptable_guess(&text) => SubmitButton::Submit,
            Some(_) => SubmitButton::NotAWord,
            None => SubmitButton::Disabled,
        }
    }

    /// Text shown on the submit button
    #[must_use]
    pub fn submit_label(&self) -> &str {
        let labels = &self.config.labels;
        match self.submit_button() {
            SubmitButton::Disabled | SubmitButton::Submit => &labels.submit,
            SubmitButton::NotAWord => &labels.not_a_word,
            SubmitButton::NewGame => &labels.new_game,
        }
    }

    /// Press the submit button: start a new round when the current one is
    /// over, otherwise submit the row
    ///
    /// Returns `Ok(None)` when a new round was started.
    ///
    /// # Errors
    ///
    /// Returns the `RejectReason` from [`RoundController::submit`].
    pub fn press_submit_button(&mut self) -> Result<Option<RowOutcome>, RejectReason> {
        if self.round.is_ended() {
            self.start_new_round();
            return Ok(None);
        }
        self.submit().map(Some)
    }

    /// Title line: the game name during play, the result afterwards
    #[must_use]
    pub fn scoreboard_text(&self) -> &str {
        let labels = &self.config.labels;
        match self.round.status() {
            RoundStatus::InProgress => &labels.title,
            RoundStatus::Won => &labels.won,
            RoundStatus::Lost => &labels.lost,
        }
    }

    fn emit(&mut self, event: &GameEvent) {
        for listener in &mut self.listeners {
            listener(event);
        }
    }
}
