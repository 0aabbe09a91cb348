//! Word identity hashing
//!
//! The index identifies words by a 64-bit id. Which function produces the id
//! is a runtime choice: `WordIndex::build` takes any `&dyn IdHasher`, so two
//! indexes over the same words can be built with different hashers and compared.

use clap::ValueEnum;
use rustc_hash::FxHasher;
use std::hash::Hasher;

/// Maps a word to its 64-bit identifier
///
/// Implementations must be deterministic and free of side effects.
pub trait IdHasher: Send + Sync {
    /// Short name used in logs and reports
    fn name(&self) -> &'static str;

    /// Identifier for `word`
    fn hash_word(&self, word: &str) -> u64;
}

/// Fast general-purpose hasher (FxHash)
#[derive(Debug, Clone, Copy, Default)]
pub struct FxIdHasher;

impl IdHasher for FxIdHasher {
    fn name(&self) -> &'static str {
        "fx"
    }

    fn hash_word(&self, word: &str) -> u64 {
        let mut hasher = FxHasher::default();
        hasher.write(word.as_bytes());
        hasher.finish()
    }
}

/// Alternate hasher for cross-validation: the low 8 bytes of a BLAKE3 digest
#[derive(Debug, Clone, Copy, Default)]
pub struct Blake3IdHasher;

impl IdHasher for Blake3IdHasher {
    fn name(&self) -> &'static str {
        "blake3"
    }

    fn hash_word(&self, word: &str) -> u64 {
        let digest = blake3::hash(word.as_bytes());
        let mut id = [0u8; 8];
        id.copy_from_slice(&digest.as_bytes()[..8]);
        u64::from_le_bytes(id)
    }
}

/// Returns the same id for every word
///
/// Only useful for driving the collision path in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedIdHasher(pub u64);

impl IdHasher for FixedIdHasher {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn hash_word(&self, _word: &str) -> u64 {
        self.0
    }
}

/// Adapts a plain function into an `IdHasher`
pub struct FnIdHasher<F> {
    name: &'static str,
    hash: F,
}

impl<F> FnIdHasher<F>
where
    F: Fn(&str) -> u64 + Send + Sync,
{
    pub const fn new(name: &'static str, hash: F) -> Self {
        Self { name, hash }
    }
}

impl<F> IdHasher for FnIdHasher<F>
where
    F: Fn(&str) -> u64 + Send + Sync,
{
    fn name(&self) -> &'static str {
        self.name
    }

    fn hash_word(&self, word: &str) -> u64 {
        (self.hash)(word)
    }
}

/// Hasher selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum HasherKind {
    /// FxHash (default)
    #[default]
    Fx,
    /// Truncated BLAKE3
    Blake3,
}

impl HasherKind {
    #[must_use]
    pub fn hasher(self) -> Box<dyn IdHasher> {
        match self {
            Self::Fx => Box::new(FxIdHasher),
            Self::Blake3 => Box::new(Blake3IdHasher),
        }
    }

    /// The other hasher, for cross-checking
    #[must_use]
    pub const fn alternate(self) -> Self {
        match self {
            Self::Fx => Self::Blake3,
            Self::Blake3 => Self::Fx,
        }
    }
}
