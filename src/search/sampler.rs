//! Random informative guesses for self-play
//!
//! Draws words from the index until one earns at least some knowledge against
//! a secret. Every draw comes from a caller-supplied RNG, so a fixed seed
//! reproduces the same guesses.

use crate::core::{Guess, KnowledgeRule, Word};
use crate::error::{Error, Result};
use crate::index::WordIndex;
use rand::Rng;
use tracing::{debug, trace, warn};

/// Attempt cap when none is configured
pub const DEFAULT_MAX_SAMPLING_ATTEMPTS: usize = 10_000;

/// Samples random guesses against a secret
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateSampler {
    rule: KnowledgeRule,
    max_attempts: usize,
}

impl Default for CandidateSampler {
    fn default() -> Self {
        Self::new(KnowledgeRule::default(), DEFAULT_MAX_SAMPLING_ATTEMPTS)
    }
}

impl CandidateSampler {
    #[must_use]
    pub const fn new(rule: KnowledgeRule, max_attempts: usize) -> Self {
        Self { rule, max_attempts }
    }

    #[must_use]
    pub const fn rule(&self) -> KnowledgeRule {
        self.rule
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Pick a random index word and derive its knowledge against `secret`,
    /// accepting the first one with a non-`None` entry
    ///
    /// Draws that land on an empty posting list, or on a word that is not a
    /// valid 5-letter guess, still use up an attempt.
    ///
    /// # Errors
    /// `Error::SamplingExhausted` once `max_attempts` draws produced nothing.
    pub fn sample_candidate_guess<R: Rng + ?Sized>(
        &self,
        index: &WordIndex,
        secret: &Word,
        rng: &mut R,
    ) -> Result<Guess> {
        for attempt in 1..=self.max_attempts {
            let Some(picked) = index.pick_random_word(rng) else {
                trace!(attempt, "drew an empty posting list");
                continue;
            };
            let Ok(word) = Word::new(picked) else {
                trace!(attempt, word = picked, "skipping word that is not a valid guess");
                continue;
            };

            let guess = Guess::against_secret(word, secret, self.rule);
            if guess.has_knowledge() {
                debug!(attempt, guess = %guess, secret = %secret, "sampled candidate guess");
                return Ok(guess);
            }
        }

        warn!(secret = %secret, attempts = self.max_attempts, "sampling exhausted");
        Err(Error::SamplingExhausted {
            secret: secret.text().to_string(),
            attempts: self.max_attempts,
        })
    }

    /// Pick a random index word that is a valid secret
    ///
    /// Returns `None` if `max_attempts` draws produced no valid word.
    pub fn pick_secret<R: Rng + ?Sized>(&self, index: &WordIndex, rng: &mut R) -> Option<Word> {
        for _ in 0..self.max_attempts {
            if let Some(secret) = index.pick_random_word(rng).and_then(|w| Word::new(w).ok()) {
                return Some(secret);
            }
        }
        None
    }
}
