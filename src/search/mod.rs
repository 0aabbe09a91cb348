//! Matching guesses against the word index
//!
//! The match engine filters the index by a guess's knowledge; the sampler
//! produces random informative guesses for self-play.

mod engine;
mod sampler;

pub use engine::{
    FullPositionPolicy, KnownLetterPolicy, MatchEngine, MatchPolicy, MatchResult, is_consistent,
};
pub use sampler::{CandidateSampler, DEFAULT_MAX_SAMPLING_ATTEMPTS};
