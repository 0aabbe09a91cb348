//! Command implementations

pub mod compare;
pub mod compile;
pub mod search;
pub mod shell;
pub mod simulate;

pub use compare::{CompareReport, HasherTiming, Mismatch, run_compare};
pub use compile::{CompileSummary, run_compile};
pub use search::{Feedback, build_guess, run_search};
pub use shell::{Shell, run_shell};
pub use simulate::{RoundCheck, RoundOutcome, SimulationReport, play_round, run_simulation};
