//! Word list loading utilities
//!
//! Reads line-delimited and wordset JSON dictionaries, normalises and filters
//! their entries, and merges many sources into one deduplicated `WordList`.

use rayon::prelude::*;
use serde::de::IgnoredAny;
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::core::WORD_LENGTH;

/// Errors raised while reading dictionaries
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("error reading [{}]", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error unmarshalling JSON from [{}]", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// A single dictionary file
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum WordSource {
    /// One word per line
    LineFile(PathBuf),
    /// JSON object keyed by word (wordset-dictionary format)
    WordsetJson(PathBuf),
}

impl WordSource {
    /// Classify a file by extension; `None` for anything that is not a dictionary
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        if extension.eq_ignore_ascii_case("txt") {
            Some(Self::LineFile(path.to_path_buf()))
        } else if extension.eq_ignore_ascii_case("json") {
            Some(Self::WordsetJson(path.to_path_buf()))
        } else {
            None
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::LineFile(path) | Self::WordsetJson(path) => path,
        }
    }

    /// Read the source, returning its normalised Wordle candidates
    ///
    /// # Errors
    /// I/O failures, and malformed JSON for wordset files.
    pub fn read(&self) -> Result<Vec<String>, LoadError> {
        let path = self.path();
        let content = fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;

        let words: Vec<String> = match self {
            Self::LineFile(_) => candidates(content.lines()),
            Self::WordsetJson(_) => {
                let entries: BTreeMap<String, IgnoredAny> =
                    serde_json::from_str(&content).map_err(|source| LoadError::Json {
                        path: path.to_path_buf(),
                        source,
                    })?;
                candidates(entries.keys())
            }
        };

        debug!(source = %path.display(), words = words.len(), "read dictionary");
        Ok(words)
    }
}

/// Trim surrounding whitespace and lowercase
#[must_use]
pub fn normalise(word: &str) -> String {
    word.trim().to_lowercase()
}

/// Exactly five ASCII letters
#[must_use]
pub fn is_wordle_candidate(word: &str) -> bool {
    word.len() == WORD_LENGTH && word.bytes().all(|b| b.is_ascii_alphabetic())
}

fn candidates<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .map(|word| normalise(word.as_ref()))
        .filter(|word| is_wordle_candidate(word))
        .collect()
}

/// Words merged from one or more sources
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    /// Candidates read across all sources, before deduplication
    pub ingested: usize,
    /// Sorted, deduplicated words
    pub words: Vec<String>,
}

impl WordList {
    /// Build a list from already-ingested words
    #[must_use]
    pub fn from_words(mut words: Vec<String>) -> Self {
        let ingested = words.len();
        words.sort_unstable();
        words.dedup();
        Self { ingested, words }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Find every dictionary file under `dir`, recursively, sorted by path
///
/// Symlinked directories are not followed.
///
/// # Errors
/// Returns `LoadError::Io` if a directory cannot be listed.
pub fn discover_sources(dir: &Path) -> Result<Vec<WordSource>, LoadError> {
    let mut sources = Vec::new();
    let mut pending = vec![dir.to_path_buf()];

    while let Some(current) = pending.pop() {
        let entries = fs::read_dir(&current).map_err(|e| LoadError::io(&current, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| LoadError::io(&current, e))?;
            let file_type = entry.file_type().map_err(|e| LoadError::io(&current, e))?;
            let path = entry.path();
            if file_type.is_dir() {
                pending.push(path);
            } else if let Some(source) = WordSource::from_path(&path) {
                sources.push(source);
            }
        }
    }

    sources.sort_by(|a, b| a.path().cmp(b.path()));
    Ok(sources)
}

/// Read all sources in parallel and merge them
///
/// A source that fails to read is logged and skipped; it never aborts the
/// whole compilation.
#[must_use]
pub fn compile_word_list(sources: &[WordSource]) -> WordList {
    let read: Vec<Vec<String>> = sources
        .par_iter()
        .filter_map(|source| match source.read() {
            Ok(words) => Some(words),
            Err(e) => {
                warn!(source = %source.path().display(), error = %e, "skipping dictionary");
                None
            }
        })
        .collect();

    let list = WordList::from_words(read.into_iter().flatten().collect());
    info!(
        sources = sources.len(),
        ingested = list.ingested,
        unique = list.len(),
        "compiled word list"
    );
    list
}

/// Load words from a line-delimited file
///
/// # Errors
///
/// Returns an error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_index::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordList, LoadError> {
    let words = WordSource::LineFile(path.as_ref().to_path_buf()).read()?;
    Ok(WordList::from_words(words))
}

/// Normalise and filter an in-memory slice
///
/// # Examples
/// ```
/// use wordle_index::wordlists::loader::words_from_slice;
///
/// let list = words_from_slice(&["Crane", "slides", "crane", "sl4te"]);
/// assert_eq!(list.words, vec!["crane"]);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> WordList {
    WordList::from_words(candidates(slice))
}

/// Write a word list, one word per line
///
/// # Errors
/// Returns `LoadError::Io` if the file cannot be created or written.
pub fn write_dictionary(path: &Path, list: &WordList) -> Result<(), LoadError> {
    let file = fs::File::create(path).map_err(|e| LoadError::io(path, e))?;
    let mut writer = io::BufWriter::new(file);
    for word in &list.words {
        writeln!(writer, "{word}").map_err(|e| LoadError::io(path, e))?;
    }
    writer.flush().map_err(|e| LoadError::io(path, e))?;

    info!(path = %path.display(), words = list.len(), "wrote dictionary");
    Ok(())
}
