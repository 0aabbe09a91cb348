//! Core domain types for Wordle guesses
//!
//! Words, per-letter knowledge and the validated `Guess` the match engine consumes.

mod guess;
mod knowledge;
mod word;

pub use guess::Guess;
pub(crate) use guess::validate_word;
pub use knowledge::{Knowledge, KnowledgeRule, derive_knowledge, knowledge_to_emoji, parse_knowledge};
pub use word::{WORD_LENGTH, Word, WordError};
