//! TUI application state and logic

use crate::game::{GameEvent, RoundController, RoundStatus};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::cell::RefCell;
use std::io;
use std::rc::Rc;

/// Application state
pub struct App<'a> {
    pub controller: RoundController<'a>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    events: Rc<RefCell<Vec<GameEvent>>>,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Results of the rounds played in this session
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index `n` counts wins in `n` guesses
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(mut controller: RoundController<'a>) -> Self {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        controller.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        let max_guesses = controller.config().max_guesses;
        let word_length = controller.config().word_length;

        Self {
            controller,
            messages: vec![Message {
                text: format!("Guess the {word_length}-letter word in {max_guesses} tries."),
                style: MessageStyle::Info,
            }],
            stats: Statistics {
                guess_distribution: vec![0; max_guesses + 1],
                ..Statistics::default()
            },
            should_quit: false,
            events,
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(c) => {
                self.controller.type_char(c);
            }
            KeyCode::Backspace => {
                self.controller.backspace();
            }
            KeyCode::Enter => {
                // Rejections arrive as events
                let _ = self.controller.press_submit_button();
            }
            _ => {}
        }

        self.process_events();
    }

    /// Turn controller notifications into messages and statistics
    pub fn process_events(&mut self) {
        let events: Vec<GameEvent> = self.events.borrow_mut().drain(..).collect();

        for event in events {
            match event {
                GameEvent::RoundStarted => {
                    self.messages.clear();
                    self.add_message("New game started!", MessageStyle::Info);
                }
                GameEvent::RowRejected(reason) => {
                    self.add_message(&reason.to_string(), MessageStyle::Error);
                }
                GameEvent::RoundEnded(status) => self.record_result(status),
                GameEvent::LetterTyped { .. }
                | GameEvent::LetterErased { .. }
                | GameEvent::RowEvaluated { .. } => {}
            }
        }
    }

    fn record_result(&mut self, status: RoundStatus) {
        let round = self.controller.round();
        let guess_count = round.guesses_used();
        let target = round.target().text().to_uppercase();

        self.stats.total_games += 1;
        if status == RoundStatus::Won {
            self.stats.games_won += 1;
            if let Some(slot) = self.stats.guess_distribution.get_mut(guess_count) {
                *slot += 1;
            }

            let celebration = match guess_count {
                1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                3 => "✨ SPLENDID! Three guesses! ✨",
                4 => "👏 GREAT JOB! Four guesses! 👏",
                5 => "🎉 NICE WORK! Five guesses! 🎉",
                6 => "😅 PHEW! Got it in six! 😅",
                _ => "🎊 SOLVED! 🎊",
            };
            self.add_message(celebration, MessageStyle::Success);
        } else {
            self.add_message(&format!("The word was {target}"), MessageStyle::Error);
        }

        self.add_message("Press Enter for a new game or Esc to quit.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::core::Word;
    use crate::wordlists::WordStore;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn app<'a>(config: &'a GameConfig, store: &'a WordStore) -> App<'a> {
        let mut controller = RoundController::new(config, store, StdRng::seed_from_u64(11)).unwrap();
        controller
            .start_round_with_target(Word::new("crane").unwrap())
            .unwrap();
        let mut app = App::new(controller);
        app.process_events();
        app
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            app.handle_key(KeyCode::Char(c), KeyModifiers::NONE);
        }
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let config = GameConfig::default();
        let store = WordStore::new(&["crane", "slate"], 1, 5).unwrap();

        let mut first = app(&config, &store);
        first.handle_key(KeyCode::Esc, KeyModifiers::NONE);
        assert!(first.should_quit);

        let mut second = app(&config, &store);
        second.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(second.should_quit);
        assert_eq!(second.controller.round().current_tile(), 0);
    }

    #[test]
    fn typing_and_backspace_edit_row() {
        let config = GameConfig::default();
        let store = WordStore::new(&["crane", "slate"], 1, 5).unwrap();
        let mut app = app(&config, &store);

        type_word(&mut app, "sl");
        app.handle_key(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(app.controller.round().current_tile(), 1);
    }

    #[test]
    fn rejection_shows_error_message() {
        let config = GameConfig::default();
        let store = WordStore::new(&["crane", "slate"], 1, 5).unwrap();
        let mut app = app(&config, &store);

        type_word(&mut app, "zzzzz");
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);

        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert_eq!(last.text, "Not in word list");
    }

    #[test]
    fn win_updates_statistics_and_enter_restarts() {
        let config = GameConfig::default();
        let store = WordStore::new(&["crane", "slate"], 1, 5).unwrap();
        let mut app = app(&config, &store);

        type_word(&mut app, "slate");
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        type_word(&mut app, "crane");
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);

        assert!(app.controller.round().is_won());
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[2], 1);
        assert!((app.stats.win_rate() - 100.0).abs() < f64::EPSILON);

        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.controller.round().status(), RoundStatus::InProgress);
        assert_eq!(app.messages.len(), 1);
    }

    #[test]
    fn loss_counts_game_without_win() {
        let config = GameConfig::new(5, 1).unwrap();
        let store = WordStore::new(&["crane", "slate"], 1, 5).unwrap();
        let mut app = app(&config, &store);

        type_word(&mut app, "slate");
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);

        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert!(app.messages.iter().any(|m| m.text == "The word was CRANE"));
    }
}
