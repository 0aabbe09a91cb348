//! Hasher comparison
//!
//! Builds the index once per identity hasher, times each build and checks
//! that the same sampled searches return the same words from every index.

use crate::config::EngineConfig;
use crate::error::Result;
use crate::index::{HasherKind, WordIndex};
use crate::search::MatchEngine;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Build statistics for one hasher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HasherTiming {
    pub hasher: &'static str,
    pub words: usize,
    pub letters: usize,
    pub build_time: Duration,
}

/// A search whose results differ between indexes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub guess: String,
    pub primary: Vec<String>,
    pub alternate: Vec<String>,
}

/// Result of comparing two hashers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareReport {
    pub primary: HasherTiming,
    pub alternate: HasherTiming,
    /// Searches run on both indexes
    pub searches: usize,
    /// Draws that produced no informative guess
    pub skipped: usize,
    pub mismatches: Vec<Mismatch>,
}

impl CompareReport {
    #[must_use]
    pub fn agreed(&self) -> bool {
        self.primary.words == self.alternate.words && self.mismatches.is_empty()
    }
}

fn timed_build(words: &[String], kind: HasherKind) -> Result<(WordIndex, HasherTiming)> {
    let hasher = kind.hasher();
    let start = Instant::now();
    let index = WordIndex::build(words, hasher.as_ref())?;
    let timing = HasherTiming {
        hasher: index.hasher_name(),
        words: index.len(),
        letters: index.letter_stats().len(),
        build_time: start.elapsed(),
    };
    Ok((index, timing))
}

/// Compare the configured hasher against its alternate over `searches` draws
///
/// # Errors
/// `Error::Collision` if either hasher collides on `words`.
pub fn run_compare(words: &[String], config: &EngineConfig, searches: usize) -> Result<CompareReport> {
    let (primary_index, primary) = timed_build(words, config.hasher)?;
    let (alternate_index, alternate) = timed_build(words, config.hasher.alternate())?;

    let policy = config.match_policy();
    let primary_engine = MatchEngine::new(&primary_index).with_policy(policy);
    let alternate_engine = MatchEngine::new(&alternate_index).with_policy(policy);
    let sampler = config.sampler();
    let mut rng = config.rng();

    let mut report = CompareReport {
        primary,
        alternate,
        searches: 0,
        skipped: 0,
        mismatches: Vec::new(),
    };

    for _ in 0..searches {
        let guess = sampler
            .pick_secret(&primary_index, &mut rng)
            .and_then(|secret| {
                sampler
                    .sample_candidate_guess(&primary_index, &secret, &mut rng)
                    .ok()
            });
        let Some(guess) = guess else {
            report.skipped += 1;
            continue;
        };

        let first = primary_engine.search(&guess)?;
        let second = alternate_engine.search(&guess)?;
        report.searches += 1;

        if first.items != second.items {
            warn!(guess = %guess, "indexes disagree");
            report.mismatches.push(Mismatch {
                guess: guess.to_string(),
                primary: first.items,
                alternate: second.items,
            });
        }
    }

    info!(
        searches = report.searches,
        mismatches = report.mismatches.len(),
        "hasher comparison complete"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::EMBEDDED_WORDS;

    fn embedded() -> Vec<String> {
        EMBEDDED_WORDS.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn hashers_agree_on_embedded_dictionary() {
        let config = EngineConfig {
            seed: Some(4),
            ..EngineConfig::default()
        };
        let report = run_compare(&embedded(), &config, 50).unwrap();

        assert_eq!(report.primary.hasher, "fx");
        assert_eq!(report.alternate.hasher, "blake3");
        assert_eq!(report.primary.words, EMBEDDED_WORDS.len());
        assert_eq!(report.searches + report.skipped, 50);
        assert!(report.agreed(), "{:?}", report.mismatches);
    }

    #[test]
    fn alternate_of_blake3_is_fx() {
        let config = EngineConfig {
            hasher: HasherKind::Blake3,
            seed: Some(4),
            ..EngineConfig::default()
        };
        let report = run_compare(&embedded(), &config, 5).unwrap();
        assert_eq!(report.primary.hasher, "blake3");
        assert_eq!(report.alternate.hasher, "fx");
    }

    #[test]
    fn empty_word_list() {
        let report = run_compare(&[], &EngineConfig::default(), 3).unwrap();
        assert_eq!(report.skipped, 3);
        assert_eq!(report.searches, 0);
        assert!(report.agreed());
    }
}
