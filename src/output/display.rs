//! Display functions for command results

use super::formatters::{create_progress_bar, format_columns, format_guess};
use crate::commands::simulate::failure_secret;
use crate::commands::{CompareReport, CompileSummary, HasherTiming, RoundOutcome, SimulationReport};
use crate::core::Word;
use crate::index::WordIndex;
use crate::search::MatchResult;
use colored::Colorize;
use std::fmt::Display;

const WORDS_PER_ROW: usize = 8;
const MAX_LISTED: usize = 200;

/// Print the words that matched a guess
pub fn print_match_result(result: &MatchResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Guess:   {}", format_guess(&result.guess).bright_yellow().bold());
    println!(
        "Matches: {}",
        result.len().to_string().bright_cyan().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if result.is_empty() {
        println!("{}", "No words match.".bright_black());
    } else {
        let shown = result.items.len().min(MAX_LISTED);
        for row in format_columns(&result.items[..shown], WORDS_PER_ROW) {
            println!("  {row}");
        }
        if shown < result.len() {
            println!("  {}", format!("… and {} more", result.len() - shown).bright_black());
        }
    }
    println!();
}

/// Print a sampled secret with the search it produced
pub fn print_random_round(secret: &Word, result: &MatchResult) {
    println!(
        "\n🎲 Secret: {}",
        secret.text().to_uppercase().bright_green().bold()
    );
    print_match_result(result);
}

/// Print posting list sizes as bars
pub fn print_letter_stats(stats: &[(char, usize)]) {
    let max = stats.iter().map(|&(_, n)| n).max().unwrap_or(0);

    println!("\n📈 {}", "Posting lists:".bright_cyan().bold());
    for &(letter, count) in stats {
        let bar = create_progress_bar(count as f64, max as f64, 30);
        println!("   {letter}: {} {count:5}", bar.green());
    }
    println!();
}

/// Print a one-line summary of a freshly built index
pub fn print_index_summary(index: &WordIndex, source: &impl Display) {
    println!(
        "📚 Indexed {} words from {} ({} hasher)",
        index.len().to_string().bright_cyan().bold(),
        source,
        index.hasher_name()
    );
}

/// Print a non-fatal error
pub fn print_error(error: &impl Display) {
    println!("{} {error}\n", "❌".red());
}

/// Print the result of a simulation run
pub fn print_simulation_report(report: &SimulationReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Rounds:".bright_cyan().bold());
    println!("   Played:           {}", report.rounds);
    println!("   Verified:         {}", report.checked.to_string().green());
    println!("   Sampling gave up: {}", report.exhausted);
    println!("   No secret:        {}", report.no_secret);
    println!("   Time taken:       {:.2}s", report.duration.as_secs_f64());

    println!("\n🔍 {}", "Matches per search:".bright_cyan().bold());
    println!(
        "   Average:          {}",
        format!("{:.2}", report.average_matches()).bright_yellow().bold()
    );
    println!("   Fewest:           {}", report.min_matches);
    println!("   Most:             {}", report.max_matches);

    println!();
    if report.passed() {
        println!("{}", "✅ Every result was consistent".green().bold());
    } else {
        println!(
            "{}",
            format!("❌ {} rounds failed verification", report.failures.len())
                .red()
                .bold()
        );
        for failure in report.failures.iter().take(10) {
            print_failure(failure);
        }
    }
}

fn print_failure(outcome: &RoundOutcome) {
    let secret = failure_secret(outcome).unwrap_or("?");
    match outcome {
        RoundOutcome::Checked(check) => {
            let mut reasons = Vec::new();
            if !check.inconsistent.is_empty() {
                reasons.push(format!("inconsistent: {}", check.inconsistent.join(", ")));
            }
            if check.secret_expected && !check.secret_found {
                reasons.push("secret missing".to_string());
            }
            println!(
                "   round {}: {} vs {} ({})",
                check.round,
                format_guess(&check.guess),
                secret.to_uppercase(),
                reasons.join("; ")
            );
        }
        RoundOutcome::Failed { error, .. } => {
            println!("   {}: {error}", secret.to_uppercase());
        }
        RoundOutcome::Exhausted { .. } | RoundOutcome::NoSecret => {}
    }
}

fn print_timing(timing: &HasherTiming) {
    println!(
        "   {:<8} {:>6} words  {:>3} letters  {:>9.3} ms",
        timing.hasher.bright_white().bold(),
        timing.words,
        timing.letters,
        timing.build_time.as_secs_f64() * 1000.0
    );
}

/// Print the result of a hasher comparison
pub fn print_compare_report(report: &CompareReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "HASHER COMPARISON".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n⏱  {}", "Index builds:".bright_cyan().bold());
    print_timing(&report.primary);
    print_timing(&report.alternate);

    println!("\n🔍 {}", "Cross-checked searches:".bright_cyan().bold());
    println!("   Searches:         {}", report.searches);
    println!("   Skipped draws:    {}", report.skipped);
    println!("   Mismatches:       {}", report.mismatches.len());

    for mismatch in report.mismatches.iter().take(10) {
        println!(
            "   {}: {} vs {} words",
            mismatch.guess,
            mismatch.primary.len(),
            mismatch.alternate.len()
        );
    }

    println!();
    if report.agreed() {
        println!("{}", "✅ Both indexes agree".green().bold());
    } else {
        println!("{}", "❌ Indexes disagree".red().bold());
    }
}

/// Print the result of compiling a dictionary
pub fn print_compile_summary(summary: &CompileSummary) {
    println!("\n📦 {}", "Dictionary compiled".bright_cyan().bold());
    println!("   Sources:          {}", summary.sources);
    println!("   Ingested:         {}", summary.list.ingested);
    println!(
        "   Unique words:     {}",
        summary.list.len().to_string().bright_yellow().bold()
    );
    println!("   Written to:       {}", summary.output.display());
    println!("   Time taken:       {:.2}s", summary.duration.as_secs_f64());
}
