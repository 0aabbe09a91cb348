//! Wordle Index
//!
//! An in-memory dictionary index for Wordle-style guesses: words are stored
//! under a collision-checked hash id with a per-letter posting list, and a
//! guess with per-letter knowledge is matched against every indexed word.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_index::core::{Guess, KnowledgeRule, Word};
//! use wordle_index::index::{FxIdHasher, WordIndex};
//! use wordle_index::search::MatchEngine;
//!
//! let index = WordIndex::build(["beast", "crank", "dense", "sober"], &FxIdHasher).unwrap();
//!
//! // Score a guess against a secret, then search with what it revealed
//! let secret = Word::new("sober").unwrap();
//! let guess = Guess::against_secret(Word::new("blink").unwrap(), &secret, KnowledgeRule::FirstMatch);
//!
//! let result = MatchEngine::new(&index).search(&guess).unwrap();
//! assert_eq!(result.items, vec!["beast", "sober"]);
//! ```

// Core domain types
pub mod core;

// Identity hashers and the word index
pub mod index;

// Match engine and candidate sampler
pub mod search;

// Engine settings
pub mod config;

pub mod error;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{Error, Result};
