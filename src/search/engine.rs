//! Knowledge-driven search over a word index

use crate::core::Guess;
use crate::error::{Error, Result};
use crate::index::WordIndex;
use clap::ValueEnum;
use rustc_hash::FxHashSet;
use tracing::debug;

/// How a candidate must relate to the guess's known letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum KnownLetterPolicy {
    /// The candidate contains every known letter.
    #[default]
    All,
    /// The candidate contains at least one known letter, i.e. every word in
    /// the union of the known letters' posting lists qualifies.
    Any,
}

/// What the positional check does when a guess has no `Full` entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FullPositionPolicy {
    /// Without `Full` knowledge there is nothing to check, so every candidate
    /// passes the positional condition.
    #[default]
    VacuouslyTrue,
    /// The positional condition needs at least one `Full` entry; a guess with
    /// only `Present` knowledge matches nothing.
    RequireFull,
}

/// Filtering rules applied to every candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchPolicy {
    pub known_letters: KnownLetterPolicy,
    pub full_positions: FullPositionPolicy,
}

impl MatchPolicy {
    #[must_use]
    pub const fn new(known_letters: KnownLetterPolicy, full_positions: FullPositionPolicy) -> Self {
        Self {
            known_letters,
            full_positions,
        }
    }
}

/// The words consistent with a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub guess: Guess,
    /// Sorted ascending, no duplicates
    pub items: Vec<String>,
    policy: MatchPolicy,
}

impl MatchResult {
    /// Re-check a single word against this result's guess
    #[must_use]
    pub fn is_consistent(&self, word: &str) -> bool {
        is_consistent(word, &self.guess, self.policy)
    }

    #[must_use]
    pub const fn policy(&self) -> MatchPolicy {
        self.policy
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Whether `word` holds the guess's known letters and agrees with each of
/// its `Full` positions, under `policy`
///
/// Positions past the end of a shorter word never match.
#[must_use]
pub fn is_consistent(word: &str, guess: &Guess, policy: MatchPolicy) -> bool {
    let known = guess.known_letters();
    let mut letters = known.iter().map(|&letter| char::from(letter));

    let contains_known = match policy.known_letters {
        KnownLetterPolicy::All => letters.all(|letter| word.contains(letter)),
        KnownLetterPolicy::Any => letters.any(|letter| word.contains(letter)),
    };

    contains_known && full_positions_hold(word, guess, policy.full_positions)
}

fn full_positions_hold(word: &str, guess: &Guess, policy: FullPositionPolicy) -> bool {
    let full = guess.full_positions();
    if full.is_empty() {
        return policy == FullPositionPolicy::VacuouslyTrue;
    }

    let bytes = word.as_bytes();
    full.iter()
        .all(|&(position, letter)| bytes.get(position) == Some(&letter))
}

/// Filters a borrowed index by guess knowledge
///
/// The engine never copies or mutates the index, so any number of engines
/// (on any number of threads) can share one.
#[derive(Debug, Clone, Copy)]
pub struct MatchEngine<'a> {
    index: &'a WordIndex,
    policy: MatchPolicy,
}

impl<'a> MatchEngine<'a> {
    #[must_use]
    pub fn new(index: &'a WordIndex) -> Self {
        Self {
            index,
            policy: MatchPolicy::default(),
        }
    }

    #[must_use]
    pub const fn with_policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub const fn index(&self) -> &'a WordIndex {
        self.index
    }

    #[must_use]
    pub const fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Find every indexed word consistent with the guess
    ///
    /// Candidates are the union of the posting lists of the guess's known
    /// letters, each evaluated once. Survivors must contain every known letter
    /// and match every `Full` position; [`MatchPolicy`] relaxes the first rule
    /// and decides guesses without any `Full` entry. An empty result is not an
    /// error.
    ///
    /// # Errors
    /// `Error::NoKnowledge` if the guess has no knowledge, or only `None`
    /// entries. The index is not touched in that case.
    ///
    /// # Examples
    /// ```
    /// use wordle_index::core::{Guess, Knowledge};
    /// use wordle_index::index::{FxIdHasher, WordIndex};
    /// use wordle_index::search::MatchEngine;
    ///
    /// let index = WordIndex::build(["beast", "crank", "dense", "sober"], &FxIdHasher).unwrap();
    /// let guess = Guess::new("blink", &[Knowledge::Present, Knowledge::None, Knowledge::None, Knowledge::None, Knowledge::None]).unwrap();
    ///
    /// let result = MatchEngine::new(&index).search(&guess).unwrap();
    /// assert_eq!(result.items, vec!["beast", "sober"]);
    /// ```
    pub fn search(&self, guess: &Guess) -> Result<MatchResult> {
        if !guess.has_knowledge() {
            return Err(Error::NoKnowledge);
        }

        let known = guess.known_letters();
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let mut items: Vec<String> = Vec::new();

        for &letter in &known {
            for &id in self.index.postings(char::from(letter)) {
                let Some(word) = self.index.word(id) else {
                    continue;
                };
                if seen.insert(word) && is_consistent(word, guess, self.policy) {
                    items.push(word.to_string());
                }
            }
        }

        items.sort_unstable();

        debug!(
            guess = %guess,
            candidates = seen.len(),
            matches = items.len(),
            "search complete"
        );

        Ok(MatchResult {
            guess: guess.clone(),
            items,
            policy: self.policy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Knowledge::{self, Full, Present};
    use crate::index::FxIdHasher;
    use std::sync::Arc;

    const NONE: Knowledge = Knowledge::None;

    fn index(words: &[&str]) -> WordIndex {
        WordIndex::build(words, &FxIdHasher).unwrap()
    }

    #[test]
    fn missing_knowledge_is_an_error() {
        let index = index(&["beast"]);
        let engine = MatchEngine::new(&index);

        let guess = Guess::without_knowledge("blink").unwrap();
        assert_eq!(engine.search(&guess), Err(Error::NoKnowledge));
    }

    #[test]
    fn all_none_knowledge_is_an_error() {
        let index = index(&["beast", "crank"]);
        let engine = MatchEngine::new(&index);

        let guess = Guess::new("blink", &[NONE; 5]).unwrap();
        let err = engine.search(&guess).unwrap_err();
        assert_eq!(
            err.to_string(),
            "searching without knowledge will match the entire dictionary"
        );
    }

    #[test]
    fn one_present_letter() {
        let index = index(&["beast", "crank", "dense", "sober"]);
        let guess = Guess::new("blink", &[Present, NONE, NONE, NONE, NONE]).unwrap();

        let result = MatchEngine::new(&index).search(&guess).unwrap();
        assert_eq!(result.items, vec!["beast", "sober"]);
        assert_eq!(result.guess, guess);
    }

    #[test]
    fn two_present_letters_require_both_by_default() {
        let index = index(&["beast", "crank", "dense", "slides", "blend"]);
        let guess = Guess::new("blink", &[Present, Present, NONE, NONE, NONE]).unwrap();

        let result = MatchEngine::new(&index).search(&guess).unwrap();
        assert_eq!(result.items, vec!["blend"]);
    }

    #[test]
    fn any_policy_returns_posting_union() {
        let index = index(&["beast", "crank", "dense", "slides"]);
        let guess = Guess::new("blink", &[Present, Present, NONE, NONE, NONE]).unwrap();

        let policy = MatchPolicy::new(KnownLetterPolicy::Any, FullPositionPolicy::VacuouslyTrue);
        let result = MatchEngine::new(&index).with_policy(policy).search(&guess).unwrap();
        assert_eq!(result.items, vec!["beast", "slides"]);
        assert!(result.items.iter().all(|item| result.is_consistent(item)));
    }

    #[test]
    fn require_full_policy_matches_nothing_without_full() {
        let index = index(&["beast", "crank", "dense", "sober"]);
        let guess = Guess::new("blink", &[Present, NONE, NONE, NONE, NONE]).unwrap();

        let policy = MatchPolicy::new(KnownLetterPolicy::All, FullPositionPolicy::RequireFull);
        let result = MatchEngine::new(&index).with_policy(policy).search(&guess).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.policy(), policy);
    }

    #[test]
    fn full_letters_must_be_in_place() {
        let index = index(&["beast", "blank", "bloke", "sober", "slick"]);
        let guess = Guess::new("blink", &[Full, Full, NONE, NONE, NONE]).unwrap();

        for full_positions in [FullPositionPolicy::VacuouslyTrue, FullPositionPolicy::RequireFull] {
            let policy = MatchPolicy::new(KnownLetterPolicy::All, full_positions);
            let result = MatchEngine::new(&index).with_policy(policy).search(&guess).unwrap();
            assert_eq!(result.items, vec!["blank", "bloke"]);
        }
    }

    #[test]
    fn full_and_present_combine() {
        let index = index(&["crank", "drink", "brick", "prick", "blink"]);
        let guess = Guess::new("after", &[NONE, NONE, NONE, NONE, Present]).unwrap();
        let result = MatchEngine::new(&index).search(&guess).unwrap();
        assert_eq!(result.items, vec!["brick", "crank", "drink", "prick"]);

        // r somewhere, k in place
        let guess = Guess::new("stork", &[NONE, NONE, NONE, Present, Full]).unwrap();
        let result = MatchEngine::new(&index).search(&guess).unwrap();
        assert_eq!(result.items, vec!["brick", "crank", "drink", "prick"]);
    }

    #[test]
    fn full_position_past_word_end_never_matches() {
        let index = index(&["bob", "bobby"]);
        let guess = Guess::new("ahbob", &[NONE, NONE, NONE, Full, Full]).unwrap();
        let result = MatchEngine::new(&index).search(&guess).unwrap();
        assert!(result.items.is_empty());
    }

    #[test]
    fn no_matches_is_not_an_error() {
        let index = index(&["crank", "dense"]);
        let guess = Guess::new("jazzy", &[Present, NONE, NONE, NONE, NONE]).unwrap();
        let result = MatchEngine::new(&index).search(&guess).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn results_are_sorted_and_unique() {
        let index = index(&["sober", "beast", "sober", "bless", "BEAST", "abbey"]);
        let guess = Guess::new("bases", &[Present, NONE, Present, NONE, Present]).unwrap();
        let result = MatchEngine::new(&index).search(&guess).unwrap();

        assert_eq!(result.items, vec!["beast", "bless", "sober"]);
        for item in &result.items {
            assert!(result.is_consistent(item));
        }
    }

    #[test]
    fn shared_index_across_threads() {
        let index = Arc::new(index(&["beast", "crank", "dense", "sober"]));
        let guess = Guess::new("blink", &[Present, NONE, NONE, NONE, NONE]).unwrap();

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let index = Arc::clone(&index);
                    let guess = guess.clone();
                    scope.spawn(move || MatchEngine::new(&index).search(&guess).unwrap().items)
                })
                .collect();

            for handle in handles {
                assert_eq!(handle.join().unwrap(), vec!["beast", "sober"]);
            }
        });
    }
}
