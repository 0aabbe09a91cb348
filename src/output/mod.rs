//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_compare_report, print_compile_summary, print_error, print_index_summary,
    print_letter_stats, print_match_result, print_random_round, print_simulation_report,
};
