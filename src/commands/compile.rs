//! Dictionary compilation
//!
//! Walks a directory of word sources and writes one sorted, deduplicated
//! dictionary file from them.

use crate::wordlists::loader::{compile_word_list, discover_sources, write_dictionary};
use crate::wordlists::{LoadError, WordList};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// What a compile run produced
#[derive(Debug, Clone)]
pub struct CompileSummary {
    pub sources: usize,
    pub output: PathBuf,
    pub list: WordList,
    pub duration: Duration,
}

/// Compile every source under `dir` into `output`
///
/// Unreadable sources are skipped; only failing to list `dir` or to write
/// `output` is an error.
///
/// # Errors
/// Returns `LoadError::Io` for directory or output failures.
pub fn run_compile(dir: &Path, output: &Path) -> Result<CompileSummary, LoadError> {
    let start = Instant::now();
    let sources = discover_sources(dir)?;
    let list = compile_word_list(&sources);
    write_dictionary(output, &list)?;

    Ok(CompileSummary {
        sources: sources.len(),
        output: output.to_path_buf(),
        list,
        duration: start.elapsed(),
    })
}
