//! Game engine: letters, rack, dictionary, validation, scoring and turns

pub mod dictionary;
pub mod letters;
pub mod rack;
pub mod scoring;
pub mod session;
pub mod turn;
pub mod validation;

pub use dictionary::{Dictionary, DictionaryError};
pub use letters::{Letter, Word, WordError};
pub use rack::{Rack, SamplingError, RACK_SIZE};
pub use scoring::{letter_value, word_score, LETTER_VALUES};
pub use session::{GameSession, PlayedWord, SubmissionOutcome};
pub use turn::{Player, SessionError, TurnOrder};
pub use validation::{validate_word, ScoredWord, SubmissionError};
