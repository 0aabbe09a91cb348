//! Interactive shell
//!
//! Line-oriented REPL over a built index: type a guess with a secret or a
//! feedback pattern and see every consistent word.

use super::search::{Feedback, build_guess};
use crate::core::{Guess, KnowledgeRule, Word};
use crate::error::Result;
use crate::output::{print_error, print_letter_stats, print_match_result, print_random_round};
use crate::search::{CandidateSampler, MatchEngine, MatchResult};
use rand::rngs::StdRng;
use std::io::{self, BufRead, Write};

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand<'a> {
    /// `guess`, `guess secret` or `guess GY---`
    Search {
        word: &'a str,
        feedback: Option<Feedback<'a>>,
    },
    /// Pick a secret and an informative guess at random
    Random,
    /// Posting list size per letter
    Letters,
    Help,
    Quit,
    Empty,
    /// Too many words on the line
    Unrecognised(&'a str),
}

/// Parse a line typed at the prompt
#[must_use]
pub fn parse_command(line: &str) -> ShellCommand<'_> {
    let line = line.trim();
    let parts: Vec<&str> = line.split_whitespace().collect();

    match parts.as_slice() {
        [] => ShellCommand::Empty,
        ["quit" | "q" | "exit"] => ShellCommand::Quit,
        ["help" | "h" | "?"] => ShellCommand::Help,
        ["random" | "r"] => ShellCommand::Random,
        ["letters" | "stats"] => ShellCommand::Letters,
        [word] => ShellCommand::Search {
            word: *word,
            feedback: None,
        },
        [word, feedback] => ShellCommand::Search {
            word: *word,
            feedback: Some(Feedback::infer(*feedback)),
        },
        _ => ShellCommand::Unrecognised(line),
    }
}

/// What a command produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Matches(MatchResult),
    Random { secret: Word, result: MatchResult },
    Letters(Vec<(char, usize)>),
    Help,
    Quit,
    Nothing,
}

/// Shell state: the engine plus the RNG used by `random`
pub struct Shell<'a> {
    engine: MatchEngine<'a>,
    sampler: CandidateSampler,
    rng: StdRng,
}

impl<'a> Shell<'a> {
    #[must_use]
    pub const fn new(engine: MatchEngine<'a>, sampler: CandidateSampler, rng: StdRng) -> Self {
        Self {
            engine,
            sampler,
            rng,
        }
    }

    const fn rule(&self) -> KnowledgeRule {
        self.sampler.rule()
    }

    /// Run one command
    ///
    /// # Errors
    /// Validation and search errors; the shell reports them and keeps going.
    pub fn execute(&mut self, command: &ShellCommand<'_>) -> Result<Reply> {
        match command {
            ShellCommand::Search { word, feedback } => {
                let guess = match feedback {
                    Some(feedback) => build_guess(word, *feedback, self.rule())?,
                    None => Guess::without_knowledge(word)?,
                };
                Ok(Reply::Matches(self.engine.search(&guess)?))
            }
            ShellCommand::Random => {
                let index = self.engine.index();
                let Some(secret) = self.sampler.pick_secret(index, &mut self.rng) else {
                    return Ok(Reply::Nothing);
                };
                let guess = self
                    .sampler
                    .sample_candidate_guess(index, &secret, &mut self.rng)?;
                let result = self.engine.search(&guess)?;
                Ok(Reply::Random { secret, result })
            }
            ShellCommand::Letters => Ok(Reply::Letters(self.engine.index().letter_stats())),
            ShellCommand::Help | ShellCommand::Unrecognised(_) => Ok(Reply::Help),
            ShellCommand::Quit => Ok(Reply::Quit),
            ShellCommand::Empty => Ok(Reply::Nothing),
        }
    }
}

/// Run the shell until `quit` or end of input
///
/// # Errors
///
/// Returns an error only for I/O failures on stdin or stdout.
pub fn run_shell<R: BufRead>(shell: &mut Shell<'_>, mut input: R) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Wordle Index - Shell                       ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    let mut line = String::new();
    loop {
        print!("guess> ");
        io::stdout().flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            println!();
            return Ok(());
        }

        let command = parse_command(&line);
        match shell.execute(&command) {
            Ok(Reply::Matches(result)) => print_match_result(&result),
            Ok(Reply::Random { secret, result }) => print_random_round(&secret, &result),
            Ok(Reply::Letters(stats)) => print_letter_stats(&stats),
            Ok(Reply::Help) => print_help(),
            Ok(Reply::Quit) => {
                println!("\n👋 Bye!\n");
                return Ok(());
            }
            Ok(Reply::Nothing) => {}
            Err(e) => print_error(&e),
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  <guess> <secret>   derive knowledge from a secret, e.g. 'cider stick'");
    println!("  <guess> <pattern>  use feedback, e.g. 'blink Y---G' or 'blink 🟨⬜⬜⬜🟩'");
    println!("                     G/🟩 in place, Y/🟨 elsewhere, -/⬜ absent");
    println!("                     lowercase letters are a secret: use 'GGYYG', not 'ggyyg'");
    println!("  random             sample a secret and an informative guess");
    println!("  letters            posting list size per letter");
    println!("  help, quit\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::index::{FxIdHasher, WordIndex};
    use rand::SeedableRng;
    use std::io::Cursor;

    fn index() -> WordIndex {
        WordIndex::build(["beast", "crank", "dense", "sober", "stick", "cider"], &FxIdHasher)
            .unwrap()
    }

    fn shell(index: &WordIndex) -> Shell<'_> {
        Shell::new(
            MatchEngine::new(index),
            CandidateSampler::default(),
            StdRng::seed_from_u64(3),
        )
    }

    #[test]
    fn parse_commands() {
        assert_eq!(parse_command("  \n"), ShellCommand::Empty);
        assert_eq!(parse_command("quit\n"), ShellCommand::Quit);
        assert_eq!(parse_command("random"), ShellCommand::Random);
        assert_eq!(
            parse_command("blink"),
            ShellCommand::Search {
                word: "blink",
                feedback: None
            }
        );
        assert_eq!(
            parse_command("blink Y----"),
            ShellCommand::Search {
                word: "blink",
                feedback: Some(Feedback::Pattern("Y----"))
            }
        );
        assert_eq!(
            parse_command("cider stick"),
            ShellCommand::Search {
                word: "cider",
                feedback: Some(Feedback::Secret("stick"))
            }
        );
        assert_eq!(
            parse_command("blink ggyyg"),
            ShellCommand::Search {
                word: "blink",
                feedback: Some(Feedback::Secret("ggyyg"))
            }
        );
        assert_eq!(parse_command("a b c"), ShellCommand::Unrecognised("a b c"));
    }

    #[test]
    fn bare_guess_has_no_knowledge() {
        let index = index();
        let mut shell = shell(&index);
        assert_eq!(
            shell.execute(&parse_command("blink")),
            Err(Error::NoKnowledge)
        );
    }

    #[test]
    fn pattern_search() {
        let index = index();
        let mut shell = shell(&index);
        let Ok(Reply::Matches(result)) = shell.execute(&parse_command("blink Y----")) else {
            panic!("expected matches");
        };
        assert_eq!(result.items, vec!["beast", "sober"]);
    }

    #[test]
    fn random_round_contains_secret() {
        let index = index();
        let mut shell = shell(&index);
        for _ in 0..10 {
            let Ok(Reply::Random { secret, result }) = shell.execute(&ShellCommand::Random) else {
                panic!("expected a random round");
            };
            assert!(result.items.iter().any(|w| w == secret.text()));
        }
    }

    #[test]
    fn letters_and_quit() {
        let index = index();
        let mut shell = shell(&index);
        assert!(matches!(
            shell.execute(&ShellCommand::Letters),
            Ok(Reply::Letters(stats)) if !stats.is_empty()
        ));
        assert_eq!(shell.execute(&ShellCommand::Quit), Ok(Reply::Quit));
    }

    #[test]
    fn run_until_quit_or_eof() {
        let index = index();
        let mut shell = shell(&index);
        run_shell(&mut shell, Cursor::new("blink Y----\nnonsense input here\nquit\n")).unwrap();
        run_shell(&mut shell, Cursor::new("cider stick\n")).unwrap();
    }
}
