//! Command-line and environment configuration
//!
//! Settings come from flags, then environment variables (a `.env` file is
//! read first by the binary). Files default to the OS-standard data
//! directory (via `directories` crate):
//! - Linux: `$XDG_DATA_HOME/wordtiles/` or `~/.local/share/wordtiles/`
//! - macOS: `~/Library/Application Support/wordtiles/`

use crate::game::{Dictionary, DictionaryError};
use clap::Parser;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Name of the word list file looked up in the data and working directories
pub const DICTIONARY_FILE: &str = "dic.csv";

/// Default log file name
pub const LOG_FILE: &str = "wordtiles.log";

/// Wordtiles - form words from a shared rack of letter tiles
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "wordtiles")]
#[command(about = "Turn-based word game played from a shared rack of letter tiles", long_about = None)]
#[command(version)]
pub struct Config {
    /// Word list to validate against (first comma-separated field per row)
    #[arg(short, long, env = "WORDTILES_DICTIONARY")]
    pub dictionary: Option<PathBuf>,

    /// Seed for tile draws, for reproducible games
    #[arg(short, long, env = "WORDTILES_SEED")]
    pub seed: Option<u64>,

    /// Where to write logs
    #[arg(long, env = "WORDTILES_LOG")]
    pub log_file: Option<PathBuf>,
}

/// Where the dictionary was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    /// A word list file
    File(PathBuf),
    /// The list built into the binary
    Embedded,
}

impl Config {
    /// Get the OS-standard data directory, if the platform has one.
    pub fn data_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "wordtiles").map(|dirs| dirs.data_dir().to_path_buf())
    }

    /// Pick the dictionary: explicit path, then `dic.csv` in the data
    /// directory, then `dic.csv` in the working directory, then the
    /// embedded list.
    pub fn dictionary_source(&self) -> DictionarySource {
        self.resolve_dictionary(Self::data_dir().as_deref(), Path::new("."))
    }

    fn resolve_dictionary(&self, data_dir: Option<&Path>, work_dir: &Path) -> DictionarySource {
        if let Some(path) = &self.dictionary {
            return DictionarySource::File(path.clone());
        }
        data_dir
            .into_iter()
            .chain(std::iter::once(work_dir))
            .map(|dir| dir.join(DICTIONARY_FILE))
            .find(|candidate| candidate.is_file())
            .map(DictionarySource::File)
            .unwrap_or(DictionarySource::Embedded)
    }

    /// Load the dictionary from wherever `dictionary_source` points.
    pub fn load_dictionary(&self) -> Result<Arc<Dictionary>, DictionaryError> {
        match self.dictionary_source() {
            DictionarySource::File(path) => Dictionary::load(&path).map(Arc::new),
            DictionarySource::Embedded => {
                let dictionary = Dictionary::embedded();
                info!(words = dictionary.len(), "using embedded dictionary");
                Ok(dictionary)
            }
        }
    }

    /// Log file path: explicit, else the data directory, else the working
    /// directory.
    pub fn log_path(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(|| {
            Self::data_dir()
                .map(|dir| dir.join(LOG_FILE))
                .unwrap_or_else(|| PathBuf::from(LOG_FILE))
        })
    }
}
