//! Self-play simulation
//!
//! Picks random secrets, samples an informative guess for each and checks the
//! search result: every returned word must be consistent with the guess, and
//! the secret itself must come back.

use crate::config::EngineConfig;
use crate::core::Guess;
use crate::error::Error;
use crate::index::WordIndex;
use crate::search::{FullPositionPolicy, MatchEngine};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Outcome of a single round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The search ran and was verified
    Checked(RoundCheck),
    /// No valid secret could be drawn
    NoSecret,
    /// The sampler found no informative guess
    Exhausted { secret: String },
    /// Search failed outright
    Failed { secret: String, error: Error },
}

/// Verification of one round's search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundCheck {
    pub round: u64,
    pub secret: String,
    pub guess: Guess,
    pub matches: usize,
    /// Words in the result that fail the consistency check
    pub inconsistent: Vec<String>,
    pub secret_expected: bool,
    pub secret_found: bool,
}

impl RoundCheck {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.inconsistent.is_empty() && (self.secret_found || !self.secret_expected)
    }
}

/// Aggregate over all rounds
#[derive(Debug, Clone, Default)]
pub struct SimulationReport {
    pub rounds: usize,
    pub checked: usize,
    pub no_secret: usize,
    pub exhausted: usize,
    pub total_matches: usize,
    pub min_matches: usize,
    pub max_matches: usize,
    /// Rounds that failed verification or errored
    pub failures: Vec<RoundOutcome>,
    pub duration: Duration,
}

impl SimulationReport {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }

    #[must_use]
    pub fn average_matches(&self) -> f64 {
        if self.checked == 0 {
            0.0
        } else {
            self.total_matches as f64 / self.checked as f64
        }
    }

    fn record(&mut self, outcome: RoundOutcome) {
        let failed = match &outcome {
            RoundOutcome::Checked(check) => {
                self.checked += 1;
                self.total_matches += check.matches;
                self.min_matches = if self.checked == 1 {
                    check.matches
                } else {
                    self.min_matches.min(check.matches)
                };
                self.max_matches = self.max_matches.max(check.matches);
                !check.passed()
            }
            RoundOutcome::NoSecret => {
                self.no_secret += 1;
                false
            }
            RoundOutcome::Exhausted { .. } => {
                self.exhausted += 1;
                false
            }
            RoundOutcome::Failed { .. } => true,
        };
        if failed {
            self.failures.push(outcome);
        }
    }
}

/// Play one round with its own RNG
#[must_use]
pub fn play_round(index: &WordIndex, config: &EngineConfig, round: u64) -> RoundOutcome {
    let mut rng = config.round_rng(round);
    let sampler = config.sampler();
    let engine = MatchEngine::new(index).with_policy(config.match_policy());

    let Some(secret) = sampler.pick_secret(index, &mut rng) else {
        return RoundOutcome::NoSecret;
    };

    let guess = match sampler.sample_candidate_guess(index, &secret, &mut rng) {
        Ok(guess) => guess,
        Err(Error::SamplingExhausted { secret, .. }) => return RoundOutcome::Exhausted { secret },
        Err(error) => {
            return RoundOutcome::Failed {
                secret: secret.text().to_string(),
                error,
            };
        }
    };

    match engine.search(&guess) {
        Ok(result) => {
            let inconsistent = result
                .items
                .iter()
                .filter(|word| !result.is_consistent(word))
                .cloned()
                .collect();
            RoundCheck {
                round,
                secret: secret.text().to_string(),
                matches: result.len(),
                inconsistent,
                secret_expected: secret_expected(&guess, config),
                secret_found: result.items.binary_search_by(|w| w.as_str().cmp(secret.text())).is_ok(),
                guess,
            }
            .into()
        }
        Err(error) => RoundOutcome::Failed {
            secret: secret.text().to_string(),
            error,
        },
    }
}

impl From<RoundCheck> for RoundOutcome {
    fn from(check: RoundCheck) -> Self {
        Self::Checked(check)
    }
}

/// Both knowledge rules only mark letters the secret holds, so the secret
/// always survives the search, except when the positional check demands a
/// `Full` entry the guess does not have.
fn secret_expected(guess: &Guess, config: &EngineConfig) -> bool {
    config.full_positions == FullPositionPolicy::VacuouslyTrue || !guess.full_positions().is_empty()
}

/// Run `rounds` independent rounds in parallel
#[must_use]
pub fn run_simulation(
    index: &WordIndex,
    config: &EngineConfig,
    rounds: usize,
    show_progress: bool,
) -> SimulationReport {
    let pb = if show_progress {
        ProgressBar::new(rounds as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message("simulating");

    let start = Instant::now();
    let outcomes: Vec<RoundOutcome> = (0..rounds as u64)
        .into_par_iter()
        .map(|round| {
            let outcome = play_round(index, config, round);
            pb.inc(1);
            outcome
        })
        .collect();
    pb.finish_with_message("Complete!");

    let mut report = SimulationReport {
        rounds,
        ..SimulationReport::default()
    };
    for outcome in outcomes {
        report.record(outcome);
    }
    report.duration = start.elapsed();

    if report.passed() {
        info!(
            rounds,
            checked = report.checked,
            exhausted = report.exhausted,
            "simulation passed"
        );
    } else {
        warn!(rounds, failures = report.failures.len(), "simulation found failures");
    }
    report
}

/// Secret of a failed round, for display
#[must_use]
pub fn failure_secret(outcome: &RoundOutcome) -> Option<&str> {
    match outcome {
        RoundOutcome::Checked(check) => Some(check.secret.as_str()),
        RoundOutcome::Exhausted { secret } | RoundOutcome::Failed { secret, .. } => {
            Some(secret.as_str())
        }
        RoundOutcome::NoSecret => None,
    }
}
