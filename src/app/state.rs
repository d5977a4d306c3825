//! Game state as seen by the terminal shell
//!
//! Owns the current session (if any players are registered), the word
//! being typed, and the message from the last action.

use std::sync::Arc;

use tracing::warn;
use wordtiles::game::{Dictionary, GameSession, SessionError, SubmissionError};

/// Most players a game can be registered with
pub const MAX_PLAYERS: usize = 10;

/// How a feedback message should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Warning,
    Error,
}

/// Message shown after the last action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub text: String,
}

impl Feedback {
    fn success(text: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Success,
            text: text.into(),
        }
    }

    fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Warning,
            text: text.into(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Error,
            text: text.into(),
        }
    }
}

/// Main application state
pub struct App {
    dictionary: Arc<Dictionary>,
    /// Seed for every new session's tile draws
    seed: Option<u64>,
    /// `None` until players are registered
    session: Option<GameSession>,
    /// Dictionary words formable from the current rack
    possible_words: Vec<String>,
    /// Current user input
    pub input: String,
    /// Feedback message from last action
    pub feedback: Option<Feedback>,
}

impl App {
    /// Create a new application instance
    pub fn new(dictionary: Arc<Dictionary>, seed: Option<u64>) -> Self {
        Self {
            dictionary,
            seed,
            session: None,
            possible_words: Vec::new(),
            input: String::new(),
            feedback: None,
        }
    }

    /// The running session, if players are registered
    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    /// Start a new game, replacing any previous one. Blank names are skipped.
    pub fn register_players(&mut self, names: &[String]) -> Result<(), SessionError> {
        let names: Vec<&str> = names
            .iter()
            .map(|n| n.trim())
            .filter(|n| !n.is_empty())
            .collect();

        let dictionary = Arc::clone(&self.dictionary);
        let result = match self.seed {
            Some(seed) => GameSession::with_seed(names, dictionary, seed),
            None => GameSession::new(names, dictionary),
        };

        match result {
            Ok(session) => {
                self.session = Some(session);
                self.input.clear();
                self.refresh_possible_words();
                self.feedback = Some(Feedback::success("Players registered successfully!"));
                Ok(())
            }
            Err(e) => {
                self.feedback = Some(Feedback::warning(e.to_string()));
                Err(e)
            }
        }
    }

    /// Handle character input
    pub fn on_char(&mut self, c: char) {
        self.input.push(c);
    }

    /// Handle backspace
    pub fn on_backspace(&mut self) {
        self.input.pop();
    }

    /// Submit the typed word for the current player
    pub fn on_submit(&mut self) {
        let Some(session) = self.session.as_mut() else {
            self.feedback = Some(Feedback::warning("Please register players first!"));
            return;
        };

        let word = std::mem::take(&mut self.input);
        self.feedback = Some(match session.submit_word(&word) {
            Ok(outcome) => Feedback::success(format!(
                "Word '{}' submitted! Score: {}",
                word, outcome.score
            )),
            Err(e @ SubmissionError::EmptyWord) => Feedback::warning(e.to_string()),
            Err(e @ SubmissionError::Sampling(_)) => {
                warn!(error = %e, "tile draw failed");
                Feedback::error(e.to_string())
            }
            Err(e) => Feedback::error(e.to_string()),
        });
        self.refresh_possible_words();
    }

    /// Replace the rack with 7 fresh tiles
    pub fn on_fetch_tiles(&mut self) {
        let Some(session) = self.session.as_mut() else {
            self.feedback = Some(Feedback::warning("Please register players first!"));
            return;
        };

        self.feedback = Some(match session.fetch_new_tiles() {
            Ok(_) => Feedback::success("New tiles fetched!"),
            Err(e) => {
                warn!(error = %e, "tile draw failed");
                Feedback::error(e.to_string())
            }
        });
        self.refresh_possible_words();
    }

    /// Words the current rack can form
    pub fn possible_words(&self) -> &[String] {
        &self.possible_words
    }

    /// True when a game is running and no dictionary word fits the rack
    pub fn is_stuck(&self) -> bool {
        self.session.is_some() && self.possible_words.is_empty()
    }

    fn refresh_possible_words(&mut self) {
        self.possible_words = self
            .session
            .as_ref()
            .map(GameSession::possible_words)
            .unwrap_or_default();
    }
}
