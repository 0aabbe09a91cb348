//! Formatting utilities for terminal output

use crate::core::{Guess, knowledge_to_emoji};

/// Format a guess as `BLINK 🟨⬜⬜⬜🟩`
#[must_use]
pub fn format_guess(guess: &Guess) -> String {
    let word = guess.word().text().to_uppercase();
    match guess.knowledge() {
        Some(knowledge) => format!("{word} {}", knowledge_to_emoji(knowledge)),
        None => word,
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Lay words out in rows of `per_row`
#[must_use]
pub fn format_columns(words: &[String], per_row: usize) -> Vec<String> {
    words
        .chunks(per_row.max(1))
        .map(|row| row.join("  "))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Knowledge;

    #[test]
    fn guess_with_knowledge() {
        let guess = Guess::new(
            "blink",
            &[
                Knowledge::Present,
                Knowledge::None,
                Knowledge::None,
                Knowledge::None,
                Knowledge::Full,
            ],
        )
        .unwrap();
        assert_eq!(format_guess(&guess), "BLINK 🟨⬜⬜⬜🟩");
    }

    #[test]
    fn guess_without_knowledge() {
        let guess = Guess::without_knowledge("blink").unwrap();
        assert_eq!(format_guess(&guess), "BLINK");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(1.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn columns() {
        let words: Vec<String> = ["beast", "crank", "dense"].map(String::from).to_vec();
        assert_eq!(format_columns(&words, 2), vec!["beast  crank", "dense"]);
        assert!(format_columns(&[], 4).is_empty());
    }
}
