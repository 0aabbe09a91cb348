//! A guess word paired with what is known about each of its letters

use super::knowledge::{Knowledge, KnowledgeRule, derive_knowledge, knowledge_to_emoji};
use super::word::{WORD_LENGTH, Word, WordError};
use crate::error::{Error, Result};
use std::fmt;

/// A validated guess
///
/// Only constructed through the checked factories below, so a `Guess` that
/// reaches the match engine always has a 5-letter word and, when present,
/// exactly 5 knowledge entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    word: Word,
    knowledge: Option<[Knowledge; WORD_LENGTH]>,
}

impl Guess {
    /// Create a guess from a word and one knowledge entry per letter
    ///
    /// # Errors
    /// - `Error::InvalidLength` if the word or the knowledge is not 5 long
    /// - `Error::InvalidWord` if the word has non-letter characters
    pub fn new(word: &str, knowledge: &[Knowledge]) -> Result<Self> {
        let word = validate_word(word, "guess")?;
        let knowledge = <[Knowledge; WORD_LENGTH]>::try_from(knowledge).map_err(|_| {
            Error::InvalidLength {
                what: "knowledge",
                expected: WORD_LENGTH,
                actual: knowledge.len(),
            }
        })?;

        Ok(Self {
            word,
            knowledge: Some(knowledge),
        })
    }

    /// Create a guess that carries no knowledge at all
    ///
    /// Searching with such a guess is rejected by the engine.
    ///
    /// # Errors
    /// Same word validation as [`Guess::new`].
    pub fn without_knowledge(word: &str) -> Result<Self> {
        Ok(Self {
            word: validate_word(word, "guess")?,
            knowledge: None,
        })
    }

    /// Create a guess whose knowledge is derived from a known secret
    #[must_use]
    pub fn against_secret(word: Word, secret: &Word, rule: KnowledgeRule) -> Self {
        let knowledge = derive_knowledge(secret, &word, rule);
        Self {
            word,
            knowledge: Some(knowledge),
        }
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn knowledge(&self) -> Option<&[Knowledge; WORD_LENGTH]> {
        self.knowledge.as_ref()
    }

    /// Whether at least one position carries `Full` or `Present`
    #[must_use]
    pub fn has_knowledge(&self) -> bool {
        self.knowledge
            .is_some_and(|knowledge| knowledge.iter().any(|k| k.is_known()))
    }

    /// Distinct letters with any positive knowledge, in guess order
    #[must_use]
    pub fn known_letters(&self) -> Vec<u8> {
        let mut letters = Vec::with_capacity(WORD_LENGTH);
        for (letter, knowledge) in self.letters_with_knowledge() {
            if knowledge.is_known() && !letters.contains(&letter) {
                letters.push(letter);
            }
        }
        letters
    }

    /// `(position, letter)` for every `Full` entry
    #[must_use]
    pub fn full_positions(&self) -> Vec<(usize, u8)> {
        self.letters_with_knowledge()
            .enumerate()
            .filter(|(_, (_, knowledge))| *knowledge == Knowledge::Full)
            .map(|(position, (letter, _))| (position, letter))
            .collect()
    }

    fn letters_with_knowledge(&self) -> impl Iterator<Item = (u8, Knowledge)> + '_ {
        let knowledge = self.knowledge.unwrap_or_default();
        self.word.chars().iter().copied().zip(knowledge)
    }
}

/// Validate a word, reporting a wrong length against `what`
pub(crate) fn validate_word(word: &str, what: &'static str) -> Result<Word> {
    Word::new(word).map_err(|e| match e {
        WordError::InvalidLength(actual) => Error::InvalidLength {
            what,
            expected: WORD_LENGTH,
            actual,
        },
        other => Error::InvalidWord(other),
    })
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.knowledge {
            Some(knowledge) => write!(f, "{} {}", self.word, knowledge_to_emoji(knowledge)),
            None => write!(f, "{} (no knowledge)", self.word),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Knowledge::{Full, Present};

    #[test]
    fn guess_rejects_long_word() {
        let err = Guess::new("slides", &[Knowledge::None; 5]).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidLength {
                what: "guess",
                expected: 5,
                actual: 6
            }
        ));
    }

    #[test]
    fn guess_rejects_short_knowledge() {
        let err = Guess::new("blink", &[Present, Knowledge::None]).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidLength {
                what: "knowledge",
                actual: 2,
                ..
            }
        ));
    }

    #[test]
    fn guess_rejects_non_letters() {
        assert!(matches!(
            Guess::without_knowledge("bl1nk"),
            Err(Error::InvalidWord(WordError::InvalidCharacters))
        ));
    }

    #[test]
    fn known_letters_are_distinct_and_ordered() {
        let guess = Guess::new("sissy", &[Present, Knowledge::None, Full, Present, Present]).unwrap();
        assert_eq!(guess.known_letters(), vec![b's', b'y']);
    }

    #[test]
    fn full_positions_lists_exact_letters() {
        let guess = Guess::new("blink", &[Full, Knowledge::None, Present, Knowledge::None, Full]).unwrap();
        assert_eq!(guess.full_positions(), vec![(0, b'b'), (4, b'k')]);
    }

    #[test]
    fn has_knowledge_requires_a_positive_entry() {
        assert!(!Guess::without_knowledge("blink").unwrap().has_knowledge());
        assert!(!Guess::new("blink", &[Knowledge::None; 5]).unwrap().has_knowledge());
        assert!(
            Guess::new("blink", &[Knowledge::None, Knowledge::None, Knowledge::None, Knowledge::None, Present])
                .unwrap()
                .has_knowledge()
        );
    }

    #[test]
    fn against_secret_derives_knowledge() {
        let secret = Word::new("stick").unwrap();
        let guess = Guess::against_secret(Word::new("cider").unwrap(), &secret, KnowledgeRule::FirstMatch);
        assert_eq!(guess.known_letters(), vec![b'c', b'i']);
        assert!(guess.full_positions().is_empty());
    }

    #[test]
    fn display_shows_emoji() {
        let guess = Guess::new("blink", &[Present, Knowledge::None, Knowledge::None, Knowledge::None, Full]).unwrap();
        assert_eq!(guess.to_string(), "blink 🟨⬜⬜⬜🟩");
    }
}
