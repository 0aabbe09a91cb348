//! Word index construction
//!
//! Pluggable identity hashers and the immutable inverted index built from them.

mod hasher;
mod word_index;

pub use hasher::{Blake3IdHasher, FixedIdHasher, FnIdHasher, FxIdHasher, HasherKind, IdHasher};
pub use word_index::{SAMPLING_ALPHABET, WordIndex};
