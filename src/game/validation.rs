//! Word validation and scoring
//!
//! Checks a submission, in order, for:
//! - Non-blank input
//! - Letter availability on the rack (with multiplicity)
//! - Dictionary presence
//!
//! Validation is pure: it never touches the rack or any score.

use super::dictionary::Dictionary;
use super::letters::{Word, WordError};
use super::rack::{Rack, SamplingError};
use super::scoring::word_score;
use derive_more::{Display, Error};

/// Why a submission was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SubmissionError {
    /// Nothing was entered
    #[display("Please enter a valid word.")]
    EmptyWord,
    /// The rack does not hold enough of some letter
    #[display("You do not have enough tiles to form the word '{word}'.")]
    InsufficientTiles { word: String, missing: Vec<char> },
    /// The word is not in the dictionary
    #[display("Word '{word}' is not valid according to the dictionary.")]
    NotInDictionary { word: String },
    /// Drawing replacement tiles failed
    #[display("{_0}")]
    Sampling(SamplingError),
}

impl SubmissionError {
    /// Short label for the kind of rejection.
    pub fn label(&self) -> &'static str {
        match self {
            SubmissionError::EmptyWord => "Empty Word",
            SubmissionError::InsufficientTiles { .. } => "Insufficient Tiles",
            SubmissionError::NotInDictionary { .. } => "Not In Dictionary",
            SubmissionError::Sampling(_) => "Tile Draw Failed",
        }
    }
}

/// A word that passed validation, with its score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredWord {
    pub word: Word,
    pub score: u32,
}

/// Validate `input` against the rack and dictionary and score it.
pub fn validate_word(
    input: &str,
    rack: &Rack,
    dictionary: &Dictionary,
) -> Result<ScoredWord, SubmissionError> {
    let word = match Word::parse(input) {
        Ok(word) => word,
        Err(WordError::Empty) => return Err(SubmissionError::EmptyWord),
        // Non-letters can never be on the rack
        Err(WordError::InvalidCharacters { invalid }) => {
            return Err(SubmissionError::InsufficientTiles {
                word: input.to_uppercase(),
                missing: invalid,
            })
        }
    };

    if !rack.can_form(&word) {
        return Err(SubmissionError::InsufficientTiles {
            word: word.as_string(),
            missing: rack.missing_letters(&word),
        });
    }

    if !dictionary.contains_word(&word) {
        return Err(SubmissionError::NotInDictionary {
            word: word.as_string(),
        });
    }

    let score = word_score(&word);
    Ok(ScoredWord { word, score })
}
