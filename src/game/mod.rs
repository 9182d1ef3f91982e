//! Game state and turn progression
//!
//! A [`RoundController`] owns one [`RoundState`] and one [`KeyboardState`]
//! at a time and replaces both when a new round starts.

mod controller;
mod keyboard;
mod round;
mod row;

pub use controller::{GameEvent, RejectReason, RoundController, RowOutcome, SubmitButton};
pub use keyboard::KeyboardState;
pub use round::{RoundState, RoundStatus};
pub use row::{GuessRow, Tile};
