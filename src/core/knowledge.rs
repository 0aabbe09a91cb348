//! Per-letter knowledge derived from comparing a guess with a secret
//!
//! Each guess position carries one of three values:
//! - `Full` = letter is at this exact position in the secret
//! - `Present` = letter occurs in the secret, but elsewhere
//! - `None` = letter is not (or no longer) accounted for in the secret

use super::word::{WORD_LENGTH, Word};
use clap::ValueEnum;
use std::fmt;

/// Knowledge about one guess letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Knowledge {
    /// Same letter at the same position
    Full,
    /// Letter occurs somewhere else in the secret
    Present,
    /// Nothing known about this letter
    #[default]
    None,
}

impl Knowledge {
    /// Whether this entry carries any positive signal
    #[inline]
    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Parse a single feedback symbol
    ///
    /// Accepts 'G'/'g'/🟩 for `Full`, 'Y'/'y'/🟨 for `Present`, and
    /// '-'/'_'/'.'/⬜ for `None`.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'G' | 'g' | '🟩' => Some(Self::Full),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '.' | '⬜' => Some(Self::None),
            _ => None,
        }
    }

    /// Emoji square for this entry
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Full => '🟩',
            Self::Present => '🟨',
            Self::None => '⬜',
        }
    }
}

impl fmt::Display for Knowledge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Full => "Full",
            Self::Present => "Present",
            Self::None => "None",
        };
        f.write_str(name)
    }
}

/// How repeated guess letters are scored against the secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum KnowledgeRule {
    /// Each guess letter is looked up independently: the first occurrence in
    /// the secret decides `Full` (same index) or `Present`. Secret letters are
    /// never consumed, so a repeated guess letter can be marked more times
    /// than the secret contains it.
    #[default]
    FirstMatch,
    /// Standard Wordle scoring: exact matches consume secret letters first,
    /// then misplaced letters consume what is left, left to right.
    Consuming,
}

/// Derive the knowledge a guess would earn against a known secret
///
/// # Examples
/// ```
/// use wordle_index::core::{Knowledge, KnowledgeRule, Word, derive_knowledge};
///
/// let secret = Word::new("stick").unwrap();
/// let guess = Word::new("cider").unwrap();
/// let knowledge = derive_knowledge(&secret, &guess, KnowledgeRule::FirstMatch);
///
/// assert_eq!(knowledge[0], Knowledge::Present); // c
/// assert_eq!(knowledge[1], Knowledge::Present); // i
/// assert_eq!(knowledge[2], Knowledge::None); // d
/// ```
#[must_use]
pub fn derive_knowledge(
    secret: &Word,
    guess: &Word,
    rule: KnowledgeRule,
) -> [Knowledge; WORD_LENGTH] {
    match rule {
        KnowledgeRule::FirstMatch => first_match(secret, guess),
        KnowledgeRule::Consuming => consuming(secret, guess),
    }
}

fn first_match(secret: &Word, guess: &Word) -> [Knowledge; WORD_LENGTH] {
    let mut knowledge = [Knowledge::None; WORD_LENGTH];

    for (i, &letter) in guess.chars().iter().enumerate() {
        knowledge[i] = match secret.find(letter) {
            Some(pos) if pos == i => Knowledge::Full,
            Some(_) => Knowledge::Present,
            None => Knowledge::None,
        };
    }

    knowledge
}

fn consuming(secret: &Word, guess: &Word) -> [Knowledge; WORD_LENGTH] {
    let mut knowledge = [Knowledge::None; WORD_LENGTH];
    let mut available = secret.char_counts();

    // Allow: index needed to compare guess[i], secret[i] and set knowledge[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        let letter = guess.char_at(i);
        if letter == secret.char_at(i) {
            knowledge[i] = Knowledge::Full;
            if let Some(count) = available.get_mut(&letter) {
                *count = count.saturating_sub(1);
            }
        }
    }

    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if knowledge[i] == Knowledge::Full {
            continue;
        }
        if let Some(count) = available.get_mut(&guess.char_at(i))
            && *count > 0
        {
            knowledge[i] = Knowledge::Present;
            *count -= 1;
        }
    }

    knowledge
}

/// Parse a feedback string like "GY---" or "🟩🟨⬜⬜⬜"
///
/// Returns `None` unless the string holds exactly 5 valid symbols.
///
/// # Examples
/// ```
/// use wordle_index::core::{Knowledge, parse_knowledge};
///
/// let knowledge = parse_knowledge("gy---").unwrap();
/// assert_eq!(knowledge[0], Knowledge::Full);
/// assert_eq!(knowledge[1], Knowledge::Present);
/// assert!(parse_knowledge("gyx--").is_none());
/// ```
#[must_use]
pub fn parse_knowledge(s: &str) -> Option<[Knowledge; WORD_LENGTH]> {
    let symbols: Vec<char> = s.trim().chars().collect();
    if symbols.len() != WORD_LENGTH {
        return None;
    }

    let mut knowledge = [Knowledge::None; WORD_LENGTH];
    for (slot, symbol) in knowledge.iter_mut().zip(symbols) {
        *slot = Knowledge::from_symbol(symbol)?;
    }
    Some(knowledge)
}

/// Render knowledge as emoji squares
#[must_use]
pub fn knowledge_to_emoji(knowledge: &[Knowledge]) -> String {
    knowledge.iter().map(|k| k.emoji()).collect()
}
