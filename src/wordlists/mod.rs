//! Word lists for the index
//!
//! Provides the embedded dictionary compiled into the binary, plus loaders for
//! line files and wordset JSON directories.

mod embedded;
pub mod loader;

pub use embedded::{EMBEDDED_COUNT, EMBEDDED_WORDS};
pub use loader::{LoadError, WordList, WordSource};

use std::fmt;
use std::path::{Path, PathBuf};

/// Where the dictionary comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    /// Words compiled into the binary
    Embedded,
    /// A line-delimited file
    File(PathBuf),
    /// A directory of line files and wordset JSON files
    Directory(PathBuf),
}

impl DictionarySource {
    /// Interpret a `--wordlist` value: `embedded`, a directory or a file
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value == "embedded" {
            return Self::Embedded;
        }
        let path = Path::new(value);
        if path.is_dir() {
            Self::Directory(path.to_path_buf())
        } else {
            Self::File(path.to_path_buf())
        }
    }

    /// Load the words this source names
    ///
    /// # Errors
    /// Returns `LoadError` if the file or directory cannot be read.
    pub fn load(&self) -> Result<WordList, LoadError> {
        match self {
            Self::Embedded => Ok(loader::words_from_slice(EMBEDDED_WORDS)),
            Self::File(path) => loader::load_from_file(path),
            Self::Directory(dir) => {
                let sources = loader::discover_sources(dir)?;
                Ok(loader::compile_word_list(&sources))
            }
        }
    }
}

impl fmt::Display for DictionarySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => write!(f, "embedded ({EMBEDDED_COUNT} words)"),
            Self::File(path) => write!(f, "file {}", path.display()),
            Self::Directory(dir) => write!(f, "directory {}", dir.display()),
        }
    }
}
