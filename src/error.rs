//! Error types for index construction, guess validation and search

use crate::core::WordError;
use thiserror::Error;

/// Errors reported by the indexing and matching engine
///
/// None of these are retried internally; every operation either fully
/// succeeds or returns one of them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Two distinct words produced the same identifier
    #[error("hash collision between {existing} and {incoming} (id {id:#018x})")]
    Collision {
        id: u64,
        existing: String,
        incoming: String,
    },

    /// A word or knowledge sequence has the wrong length
    #[error("{what} must have exactly {expected} items, got {actual}")]
    InvalidLength {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A guess or secret is not a valid word
    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),

    /// A feedback string could not be read as knowledge
    #[error("invalid feedback {0:?}: expected 5 of G/Y/- or 🟩/🟨/⬜")]
    InvalidFeedback(String),

    /// A search was attempted without any positive knowledge
    #[error("searching without knowledge will match the entire dictionary")]
    NoKnowledge,

    /// The candidate sampler gave up
    #[error("no informative guess found for {secret} after {attempts} attempts")]
    SamplingExhausted { secret: String, attempts: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
