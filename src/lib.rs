//! Wordtiles - a turn-based word game played from a shared rack of tiles
//!
//! Players take turns forming dictionary words from seven letter tiles.
//! Each accepted word scores the sum of its letter values, the rack is
//! redrawn and the turn passes.

pub mod config;
pub mod game;

pub use config::Config;
pub use game::{Dictionary, GameSession, Rack, SubmissionError, SubmissionOutcome};
