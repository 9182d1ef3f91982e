//! Wordle Tiles
//!
//! A terminal Wordle game: tile grid, virtual keyboard, submit button and
//! scoreboard, with exact duplicate-letter feedback.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_tiles::config::GameConfig;
//! use wordle_tiles::game::RoundController;
//! use wordle_tiles::wordlists::WordStore;
//! use rand::SeedableRng;
//!
//! let config = GameConfig::default();
//! let store = WordStore::embedded(config.word_length).unwrap();
//! let mut game = RoundController::new(&config, &store, rand::rngs::StdRng::from_os_rng()).unwrap();
//!
//! for c in "crane".chars() {
//!     game.type_char(c);
//! }
//! let outcome = game.submit().unwrap();
//! println!("{:?}", outcome.verdicts);
//! ```

// Core domain types
pub mod core;

// Session configuration
pub mod config;

// Round state and turn progression
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
