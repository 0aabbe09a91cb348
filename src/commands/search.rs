//! Search command
//!
//! Turns a guess word plus either a secret or a feedback pattern into a
//! `Guess` and runs it through the match engine.

use crate::core::{Guess, KnowledgeRule, parse_knowledge, validate_word};
use crate::error::{Error, Result};
use crate::search::{MatchEngine, MatchResult};

/// Where a guess's knowledge comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback<'a> {
    /// Derive knowledge by scoring against this secret
    Secret(&'a str),
    /// Read knowledge from a pattern such as `GY---`
    Pattern(&'a str),
}

impl<'a> Feedback<'a> {
    /// Treat `value` as a pattern when it parses as one, otherwise as a secret
    ///
    /// A token of lowercase letters is always a secret, so `eggys` and
    /// `gyggy` stay words; write all-letter patterns in capitals (`GYYGG`).
    #[must_use]
    pub fn infer(value: &'a str) -> Self {
        let is_word = value.chars().all(|c| c.is_ascii_lowercase());
        if !is_word && parse_knowledge(value).is_some() {
            Self::Pattern(value)
        } else {
            Self::Secret(value)
        }
    }
}

/// Build a guess with knowledge
///
/// # Errors
/// - `Error::InvalidLength` / `Error::InvalidWord` for a bad guess or secret
/// - `Error::InvalidFeedback` for an unreadable pattern
pub fn build_guess(word: &str, feedback: Feedback<'_>, rule: KnowledgeRule) -> Result<Guess> {
    match feedback {
        Feedback::Secret(secret) => {
            let guess = validate_word(word, "guess")?;
            let secret = validate_word(secret, "secret")?;
            Ok(Guess::against_secret(guess, &secret, rule))
        }
        Feedback::Pattern(pattern) => {
            let knowledge =
                parse_knowledge(pattern).ok_or_else(|| Error::InvalidFeedback(pattern.to_string()))?;
            Guess::new(word, &knowledge)
        }
    }
}

/// Build the guess and search for it
///
/// # Errors
/// Any error from [`build_guess`], and `Error::NoKnowledge` when the guess
/// earned nothing.
pub fn run_search(
    engine: &MatchEngine<'_>,
    word: &str,
    feedback: Feedback<'_>,
    rule: KnowledgeRule,
) -> Result<MatchResult> {
    let guess = build_guess(word, feedback, rule)?;
    engine.search(&guess)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Knowledge;
    use crate::index::{FxIdHasher, WordIndex};

    fn index() -> WordIndex {
        WordIndex::build(["beast", "crank", "dense", "sober", "stick", "cider"], &FxIdHasher)
            .unwrap()
    }

    #[test]
    fn infer_feedback() {
        assert_eq!(Feedback::infer("GY---"), Feedback::Pattern("GY---"));
        assert_eq!(Feedback::infer("🟩⬜⬜⬜🟨"), Feedback::Pattern("🟩⬜⬜⬜🟨"));
        assert_eq!(Feedback::infer("stick"), Feedback::Secret("stick"));
    }

    #[test]
    fn lowercase_letters_are_a_secret() {
        assert_eq!(Feedback::infer("gyggy"), Feedback::Secret("gyggy"));
        assert_eq!(Feedback::infer("GYGGY"), Feedback::Pattern("GYGGY"));
        assert_eq!(Feedback::infer("gy---"), Feedback::Pattern("gy---"));
    }

    #[test]
    fn guess_from_secret() {
        let guess = build_guess("cider", Feedback::Secret("stick"), KnowledgeRule::FirstMatch)
            .unwrap();
        assert_eq!(
            guess.knowledge().unwrap(),
            &[
                Knowledge::Present,
                Knowledge::Present,
                Knowledge::None,
                Knowledge::None,
                Knowledge::None
            ]
        );
    }

    #[test]
    fn guess_from_pattern() {
        let guess =
            build_guess("blink", Feedback::Pattern("y----"), KnowledgeRule::FirstMatch).unwrap();
        assert_eq!(guess.known_letters(), vec![b'b']);
    }

    #[test]
    fn bad_inputs() {
        assert_eq!(
            build_guess("blink", Feedback::Pattern("yx---"), KnowledgeRule::FirstMatch),
            Err(Error::InvalidFeedback("yx---".to_string()))
        );
        assert!(matches!(
            build_guess("blink", Feedback::Secret("sticks"), KnowledgeRule::FirstMatch),
            Err(Error::InvalidLength {
                what: "secret",
                expected: 5,
                actual: 6
            })
        ));
        assert!(matches!(
            build_guess("blinks", Feedback::Secret("stick"), KnowledgeRule::FirstMatch),
            Err(Error::InvalidLength { what: "guess", .. })
        ));
    }

    #[test]
    fn search_by_secret_includes_secret() {
        let index = index();
        let engine = MatchEngine::new(&index);

        let result = run_search(&engine, "cider", Feedback::Secret("stick"), KnowledgeRule::FirstMatch)
            .unwrap();
        // c and i are present, nothing is in place
        assert_eq!(result.items, vec!["cider", "stick"]);
        assert!(result.is_consistent("stick"));
    }

    #[test]
    fn search_by_pattern() {
        let index = index();
        let engine = MatchEngine::new(&index);

        let result =
            run_search(&engine, "blink", Feedback::Pattern("Y----"), KnowledgeRule::FirstMatch)
                .unwrap();
        assert_eq!(result.items, vec!["beast", "sober"]);
    }

    #[test]
    fn search_without_knowledge_fails() {
        let index = index();
        let engine = MatchEngine::new(&index);

        let result = run_search(&engine, "audio", Feedback::Secret("perch"), KnowledgeRule::Consuming);
        assert_eq!(result, Err(Error::NoKnowledge));
    }
}
