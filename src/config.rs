//! Game configuration
//!
//! Built once at startup and shared by reference with the controller and the
//! presentation layer.

/// Key shown on the virtual keyboard for erasing a letter
pub const BACKSPACE_KEY: char = '⌫';

/// QWERTY layout of the virtual keyboard, top row first
pub const DEFAULT_KEYBOARD_LAYOUT: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm⌫"];

/// Texts shown on the submit button and the scoreboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub submit: String,
    pub not_a_word: String,
    pub new_game: String,
    pub title: String,
    pub won: String,
    pub lost: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            submit: "Submit".to_string(),
            not_a_word: "Not a word".to_string(),
            new_game: "Start New Game".to_string(),
            title: "Wordle".to_string(),
            won: "You Won".to_string(),
            lost: "You Lost".to_string(),
        }
    }
}

/// Immutable settings for every round of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub word_length: usize,
    pub max_guesses: usize,
    pub keyboard_layout: Vec<String>,
    pub labels: Labels,
}

impl GameConfig {
    pub const DEFAULT_WORD_LENGTH: usize = 5;
    pub const DEFAULT_MAX_GUESSES: usize = 6;

    /// Standard rules with a custom word length and guess count
    ///
    /// # Errors
    /// Returns an error if either value is zero.
    pub fn new(word_length: usize, max_guesses: usize) -> Result<Self, String> {
        if word_length == 0 {
            return Err("Word length must be at least 1".to_string());
        }
        if max_guesses == 0 {
            return Err("At least one guess is required".to_string());
        }

        Ok(Self {
            word_length,
            max_guesses,
            ..Self::default()
        })
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: Self::DEFAULT_WORD_LENGTH,
            max_guesses: Self::DEFAULT_MAX_GUESSES,
            keyboard_layout: DEFAULT_KEYBOARD_LAYOUT
                .iter()
                .map(ToString::to_string)
                .collect(),
            labels: Labels::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_standard_rules() {
        let config = GameConfig::default();
        assert_eq!(config.word_length, 5);
        assert_eq!(config.max_guesses, 6);
        assert_eq!(config.keyboard_layout.len(), 3);
        assert!(config.keyboard_layout[2].ends_with(BACKSPACE_KEY));
        assert_eq!(config.labels.submit, "Submit");
    }

    #[test]
    fn keyboard_layout_covers_alphabet() {
        let config = GameConfig::default();
        for letter in 'a'..='z' {
            assert!(
                config.keyboard_layout.iter().any(|row| row.contains(letter)),
                "missing key {letter}"
            );
        }
    }

    #[test]
    fn new_rejects_zero_values() {
        assert!(GameConfig::new(0, 6).is_err());
        assert!(GameConfig::new(5, 0).is_err());

        let config = GameConfig::new(4, 8).unwrap();
        assert_eq!(config.word_length, 4);
        assert_eq!(config.max_guesses, 8);
    }
}
