//! Hash-identified word index with a per-letter inverted posting list

use super::hasher::IdHasher;
use crate::error::{Error, Result};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use tracing::{debug, error, info};

/// Letters `pick_random_word` draws from.
///
/// `e` is not in the set, so a word is only reachable through its other
/// letters and words made solely of `e` are never picked.
pub const SAMPLING_ALPHABET: [char; 25] = [
    'a', 'b', 'c', 'd', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Immutable word index
///
/// Built once by [`WordIndex::build`] and read-only afterwards. Every id in a
/// posting list is a key of the id map, and no two distinct words share an id.
#[derive(Debug)]
pub struct WordIndex {
    hasher_name: &'static str,
    id_to_word: FxHashMap<u64, String>,
    word_to_id: FxHashMap<String, u64>,
    letter_to_ids: BTreeMap<char, Vec<u64>>,
}

impl WordIndex {
    /// Build an index from a word sequence
    ///
    /// Words are lowercased and deduplicated by string equality before they
    /// are hashed, so re-ingesting a word is silently merged. Each distinct
    /// letter of a word adds its id once to that letter's posting list.
    ///
    /// # Errors
    /// `Error::Collision` if two distinct words hash to the same id. No
    /// partial index is returned.
    ///
    /// # Examples
    /// ```
    /// use wordle_index::index::{FxIdHasher, WordIndex};
    ///
    /// let index = WordIndex::build(["chunk", "latch", "CHUNK"], &FxIdHasher).unwrap();
    /// assert_eq!(index.len(), 2);
    /// assert_eq!(index.postings('h').len(), 2);
    /// ```
    pub fn build<I>(words: I, hasher: &dyn IdHasher) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut id_to_word: FxHashMap<u64, String> = FxHashMap::default();
        let mut word_to_id: FxHashMap<String, u64> = FxHashMap::default();
        let mut letter_to_ids: BTreeMap<char, Vec<u64>> = BTreeMap::new();
        let mut merged = 0usize;

        for raw in words {
            let word = raw.as_ref().to_lowercase();

            if word_to_id.contains_key(&word) {
                merged += 1;
                debug!(word = %word, "merged duplicate word");
                continue;
            }

            let id = hasher.hash_word(&word);
            if let Some(existing) = id_to_word.get(&id) {
                error!(
                    id,
                    existing = %existing,
                    incoming = %word,
                    hasher = hasher.name(),
                    "hash collision"
                );
                return Err(Error::Collision {
                    id,
                    existing: existing.clone(),
                    incoming: word,
                });
            }

            let mut seen: Vec<char> = Vec::with_capacity(word.len());
            for letter in word.chars() {
                if !seen.contains(&letter) {
                    seen.push(letter);
                    letter_to_ids.entry(letter).or_default().push(id);
                }
            }

            id_to_word.insert(id, word.clone());
            word_to_id.insert(word, id);
        }

        info!(
            words = id_to_word.len(),
            merged,
            letters = letter_to_ids.len(),
            hasher = hasher.name(),
            "built word index"
        );

        Ok(Self {
            hasher_name: hasher.name(),
            id_to_word,
            word_to_id,
            letter_to_ids,
        })
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.id_to_word.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.id_to_word.is_empty()
    }

    /// Name of the hasher that produced the ids
    #[must_use]
    pub const fn hasher_name(&self) -> &'static str {
        self.hasher_name
    }

    /// Resolve an id to its word
    #[inline]
    #[must_use]
    pub fn word(&self, id: u64) -> Option<&str> {
        self.id_to_word.get(&id).map(String::as_str)
    }

    /// Id of an admitted word
    #[must_use]
    pub fn id_of(&self, word: &str) -> Option<u64> {
        self.word_to_id.get(word).copied()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.word_to_id.contains_key(word)
    }

    /// Ids of every word containing `letter`, in admission order
    #[inline]
    #[must_use]
    pub fn postings(&self, letter: char) -> &[u64] {
        self.letter_to_ids.get(&letter).map_or(&[], Vec::as_slice)
    }

    /// All words in lexicographic order
    #[must_use]
    pub fn words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.word_to_id.keys().map(String::as_str).collect();
        words.sort_unstable();
        words
    }

    /// `(letter, posting list size)` for every indexed letter, alphabetically
    #[must_use]
    pub fn letter_stats(&self) -> Vec<(char, usize)> {
        self.letter_to_ids
            .iter()
            .map(|(&letter, ids)| (letter, ids.len()))
            .collect()
    }

    /// Pick a word by first drawing a letter from [`SAMPLING_ALPHABET`], then
    /// an id from that letter's posting list
    ///
    /// Not uniform over words: words with more distinct sampled letters, and
    /// letters with short posting lists, are favoured. Returns `None` when the
    /// drawn letter has no postings.
    pub fn pick_random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        let letter = SAMPLING_ALPHABET.choose(rng)?;
        let id = self.postings(*letter).choose(rng)?;
        self.word(*id)
    }
}
