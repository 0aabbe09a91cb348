//! Engine configuration
//!
//! Every knob of the index, matcher and sampler in one place. Parsed from
//! command-line flags (flattened into the CLI) and usable directly in code
//! through `Default`.

use crate::core::KnowledgeRule;
use crate::index::{HasherKind, IdHasher};
use crate::search::{
    CandidateSampler, DEFAULT_MAX_SAMPLING_ATTEMPTS, FullPositionPolicy, KnownLetterPolicy,
    MatchPolicy,
};
use clap::Args;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Settings shared by every command
#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct EngineConfig {
    /// Identity hasher: fx (default) or blake3
    #[arg(long, global = true, value_enum, default_value_t = HasherKind::Fx)]
    pub hasher: HasherKind,

    /// How repeated guess letters are scored against a secret
    #[arg(long, global = true, value_enum, default_value_t = KnowledgeRule::FirstMatch)]
    pub knowledge_rule: KnowledgeRule,

    /// Whether candidates need every known letter (all) or any of them
    #[arg(long, global = true, value_enum, default_value_t = KnownLetterPolicy::All)]
    pub known_letters: KnownLetterPolicy,

    /// Outcome of the positional check for guesses without exact matches
    #[arg(long = "full-position", global = true, value_enum, default_value_t = FullPositionPolicy::VacuouslyTrue)]
    pub full_positions: FullPositionPolicy,

    /// Maximum random draws before sampling gives up
    #[arg(long = "max-attempts", global = true, default_value_t = DEFAULT_MAX_SAMPLING_ATTEMPTS)]
    pub max_sampling_attempts: usize,

    /// Seed for every random choice (random when omitted)
    #[arg(long, global = true)]
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            hasher: HasherKind::default(),
            knowledge_rule: KnowledgeRule::default(),
            known_letters: KnownLetterPolicy::default(),
            full_positions: FullPositionPolicy::default(),
            max_sampling_attempts: DEFAULT_MAX_SAMPLING_ATTEMPTS,
            seed: None,
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn hasher(&self) -> Box<dyn IdHasher> {
        self.hasher.hasher()
    }

    #[must_use]
    pub const fn match_policy(&self) -> MatchPolicy {
        MatchPolicy::new(self.known_letters, self.full_positions)
    }

    #[must_use]
    pub const fn sampler(&self) -> CandidateSampler {
        CandidateSampler::new(self.knowledge_rule, self.max_sampling_attempts)
    }

    /// RNG seeded from `seed`, or from the OS when no seed is set
    #[must_use]
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }

    /// RNG for one of many independent rounds
    ///
    /// Seeded runs stay reproducible no matter how rounds are scheduled.
    #[must_use]
    pub fn round_rng(&self, round: u64) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(round)),
            None => StdRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn defaults_match_documented_policies() {
        let config = EngineConfig::default();
        assert_eq!(config.hasher, HasherKind::Fx);
        assert_eq!(config.knowledge_rule, KnowledgeRule::FirstMatch);
        assert_eq!(config.match_policy(), MatchPolicy::default());
        assert_eq!(config.sampler().max_attempts(), DEFAULT_MAX_SAMPLING_ATTEMPTS);
        assert_eq!(config.hasher().name(), "fx");
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let config = EngineConfig {
            seed: Some(42),
            ..EngineConfig::default()
        };
        let a: u64 = config.rng().random();
        let b: u64 = config.rng().random();
        assert_eq!(a, b);

        let r1: u64 = config.round_rng(1).random();
        let r2: u64 = config.round_rng(2).random();
        assert_ne!(r1, r2);
    }
}
