//! Letter and word value types
//!
//! A `Letter` is always one of the 26 uppercase ASCII letters. A `Word` is a
//! non-empty run of letters. Both are normalized to uppercase at construction,
//! so everything downstream compares and scores uppercase only.

use derive_more::{Display, Error};
use std::fmt;

/// A single tile letter, `A` through `Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// All 26 letters in alphabetical order.
    pub const ALPHABET: [Letter; 26] = {
        let mut letters = [Letter(b'A'); 26];
        let mut i = 0;
        while i < 26 {
            letters[i] = Letter(b'A' + i as u8);
            i += 1;
        }
        letters
    };

    /// Build a letter from a character, uppercasing it first.
    /// Returns `None` for anything outside A-Z.
    pub fn new(c: char) -> Option<Self> {
        let upper = c.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            Some(Letter(upper as u8))
        } else {
            None
        }
    }

    /// The uppercase character for this letter.
    pub fn as_char(self) -> char {
        self.0 as char
    }

    /// Zero-based position in the alphabet (`A` = 0).
    pub fn index(self) -> usize {
        (self.0 - b'A') as usize
    }
}

impl TryFrom<char> for Letter {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Letter::new(c).ok_or(c)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.as_char()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Why raw input could not become a `Word`.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum WordError {
    /// Input was empty or only whitespace
    #[display("word is empty")]
    Empty,
    /// Input contained characters that are not letters
    #[display("word contains non-letter characters: {}", invalid.iter().collect::<String>())]
    InvalidCharacters { invalid: Vec<char> },
}

/// A non-empty sequence of letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    letters: Vec<Letter>,
}

impl Word {
    /// Parse user input into a word.
    ///
    /// Input is uppercased. Blank input is `Empty`; any character outside
    /// A-Z is reported once, in first-occurrence order.
    pub fn parse(input: &str) -> Result<Self, WordError> {
        if input.trim().is_empty() {
            return Err(WordError::Empty);
        }

        let mut letters = Vec::with_capacity(input.len());
        let mut invalid: Vec<char> = Vec::new();
        for c in input.chars() {
            match Letter::new(c) {
                Some(letter) => letters.push(letter),
                None => {
                    if !invalid.contains(&c) {
                        invalid.push(c);
                    }
                }
            }
        }

        if invalid.is_empty() {
            Ok(Word { letters })
        } else {
            Err(WordError::InvalidCharacters { invalid })
        }
    }

    /// The letters of the word, in order.
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Number of letters.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false; kept for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Per-letter counts, indexed by `Letter::index`.
    pub fn letter_counts(&self) -> [usize; 26] {
        letter_counts(&self.letters)
    }

    /// The word as an uppercase string.
    pub fn as_string(&self) -> String {
        self.letters.iter().map(|l| l.as_char()).collect()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

/// Count occurrences of each letter.
pub fn letter_counts(letters: &[Letter]) -> [usize; 26] {
    let mut counts = [0usize; 26];
    for letter in letters {
        counts[letter.index()] += 1;
    }
    counts
}
