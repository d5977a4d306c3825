//! Dictionary of playable words
//!
//! Loaded once from a comma-separated word list where the first field of
//! each row is a word. Words are uppercased on ingestion and duplicates
//! collapse. A small list is embedded at build time for when no file is
//! configured.

use super::letters::Word;
use super::rack::Rack;
use derive_more::{Display, Error};
use once_cell::sync::Lazy;
use std::collections::{BTreeMap, HashSet};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// Embedded word list, one word per row
static WORDS_DATA: &str = include_str!("../../data/dic.csv");

static EMBEDDED: Lazy<Arc<Dictionary>> = Lazy::new(|| {
    Arc::new(Dictionary::from_reader(WORDS_DATA.as_bytes()).expect("embedded word list is well-formed"))
});

/// Errors that can occur while loading a dictionary.
#[derive(Debug, Display, Error)]
pub enum DictionaryError {
    /// The source file could not be opened
    #[display("cannot open dictionary {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },
    /// Reading failed partway through
    #[display("cannot read dictionary at line {line}: {source}")]
    Read { line: usize, source: io::Error },
    /// A row had no fields at all
    #[display("dictionary line {line} is empty")]
    EmptyRow { line: usize },
    /// A row's first field was blank
    #[display("dictionary line {line} has an empty word")]
    EmptyWord { line: usize },
    /// The source held no words
    #[display("dictionary contains no words")]
    Empty,
}

/// An immutable set of uppercase words.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
    /// Letter-only words grouped by length, each bucket sorted
    by_length: BTreeMap<usize, Vec<Word>>,
}

impl Dictionary {
    /// Load a dictionary from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DictionaryError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let dictionary = Self::from_reader(BufReader::new(file))?;
        info!(path = %path.display(), words = dictionary.len(), "loaded dictionary");
        Ok(dictionary)
    }

    /// Parse a dictionary from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, DictionaryError> {
        let mut words = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.map_err(|source| DictionaryError::Read {
                line: line_no,
                source,
            })?;
            let line = line.trim_start_matches('\u{feff}').trim_end_matches('\r');
            if line.trim().is_empty() {
                return Err(DictionaryError::EmptyRow { line: line_no });
            }

            let word = first_field(line);
            if word.is_empty() {
                return Err(DictionaryError::EmptyWord { line: line_no });
            }
            words.push(word);
        }

        if words.is_empty() {
            return Err(DictionaryError::Empty);
        }
        Ok(Self::from_words(words))
    }

    /// Build a dictionary from words already in memory.
    /// Words are uppercased; blank entries are dropped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: HashSet<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_uppercase())
            .filter(|w| !w.is_empty())
            .collect();

        let mut by_length: BTreeMap<usize, Vec<Word>> = BTreeMap::new();
        let mut unplayable = 0usize;
        for w in &words {
            match Word::parse(w) {
                Ok(word) => by_length.entry(word.len()).or_default().push(word),
                Err(_) => unplayable += 1,
            }
        }
        for bucket in by_length.values_mut() {
            bucket.sort_by_key(|w| w.as_string());
        }
        if unplayable > 0 {
            debug!(unplayable, "dictionary words contain non-letter characters");
        }

        Self { words, by_length }
    }

    /// The word list embedded in the binary.
    pub fn embedded() -> Arc<Dictionary> {
        Arc::clone(&EMBEDDED)
    }

    /// Exact lookup. Callers pass uppercase words.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Look up a parsed word.
    pub fn contains_word(&self, word: &Word) -> bool {
        self.contains(&word.as_string())
    }

    /// Returns the total number of words in the dictionary
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the dictionary has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Every dictionary word the rack can form, sorted alphabetically.
    ///
    /// Only buckets no longer than the rack are scanned. An empty rack
    /// forms nothing.
    pub fn formable_words(&self, rack: &Rack) -> Vec<String> {
        if rack.is_empty() {
            return Vec::new();
        }
        let mut found: Vec<String> = self
            .by_length
            .range(1..=rack.len())
            .flat_map(|(_, bucket)| bucket.iter())
            .filter(|word| rack.can_form(word))
            .map(Word::as_string)
            .collect();
        found.sort();
        found
    }
}

/// First comma-separated field, trimmed, unquoted and uppercased.
///
/// Rows are split on the first comma before quotes are removed, so a quoted
/// field containing a comma (`"a,b",x`) yields `A`, not `A,B`. Such a word
/// could never be formed from a rack anyway.
fn first_field(line: &str) -> String {
    let field = line.split(',').next().unwrap_or("");
    field.trim().trim_matches('"').trim().to_uppercase()
}
