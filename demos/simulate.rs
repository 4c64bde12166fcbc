//  SIMULATE.rs
//    by Lut99
//
//  Created:
//    16 Oct 2026, 14:02:55
//  Last edited:
//    17 Oct 2026, 15:38:12
//  Auto updated?
//    Yes
//
//  Description:
//!   Steps through runs of a small DFA over `{a, b}` and shows the
//!   language it accepts.
//

use clap::Parser;
use console::style;
use error_trace::toplevel;
use finite_automata::dfa::{DefinitionError, Dfa, RunError, Step};
use humanlog::{DebugMode, HumanLogger};
use log::{debug, error, info};


/***** CONSTANTS *****/
/// The maximum number of words that may be enumerated from the language.
pub const MAX_ENUMERATE: usize = 1024;





/***** ARGUMENTS *****/
/// Defines arguments to the simulator.
#[derive(Debug, Parser)]
pub struct Arguments {
    /// If given, enables more verbose logging.
    #[clap(long, global = true)]
    debug: bool,

    /// If given, prints the first N words accepted by the automaton.
    #[clap(short, long, value_name = "N")]
    enumerate: Option<usize>,
    /// The states (out of 0, 1 and 2) that are accepting.
    #[clap(short, long, value_delimiter = ',', default_value = "2")]
    accepting: Vec<u32>,

    /// The words (over 'a' and 'b') to run the automaton on.
    #[clap(name = "WORDS")]
    words: Vec<String>,
}





/***** HELPER FUNCTIONS *****/
/// Builds the three-state automaton this simulator runs.
///
/// # Arguments
/// - `accepting`: The accepting states.
///
/// # Returns
/// A new [`Dfa`].
///
/// # Errors
/// This function errors if any of the `accepting` states isn't 0, 1 or 2.
fn build(accepting: &[u32]) -> Result<Dfa<u32, char>, DefinitionError<u32, char>> {
    Dfa::builder()
        .transition(0, 'a', 1)
        .transition(0, 'b', 0)
        .transition(1, 'a', 1)
        .transition(1, 'b', 2)
        .transition(2, 'a', 0)
        .transition(2, 'b', 0)
        .start(0)
        .accepting(accepting.iter().copied())
        .build()
}

/// Runs the automaton on a word, printing every configuration on the way.
///
/// # Arguments
/// - `dfa`: The [`Dfa`] to run.
/// - `word`: The word to run it on.
///
/// # Returns
/// Whether the word was accepted.
///
/// # Errors
/// This function errors if the word is not over the automaton's alphabet.
fn simulate(dfa: &mut Dfa<u32, char>, word: &str) -> Result<bool, RunError<u32, char>> {
    dfa.reset(word.chars())?;
    loop {
        if let Some(config) = dfa.config() {
            println!("  {config}");
        }
        if let Step::Exhausted = dfa.step()? {
            break;
        }
    }
    Ok(dfa.config().is_some_and(|config| dfa.is_accepting(config.state)))
}





/***** ENTRYPOINT *****/
fn main() {
    // Parse the CLI arguments
    let args = Arguments::parse();

    // Setup the logger
    if let Err(err) = HumanLogger::terminal(if args.debug { DebugMode::Full } else { DebugMode::HumanFriendly }).init() {
        eprintln!("WARNING: Failed to setup logger: {err} (no logging for this session)");
    }
    info!("finite-automata {} - v{}", env!("CARGO_BIN_NAME"), env!("CARGO_PKG_VERSION"));

    // Early quit if there's nothing to do
    if args.words.is_empty() && args.enumerate.is_none() {
        println!("No words given and nothing to enumerate; nothing to do.");
        std::process::exit(0);
    }
    if args.enumerate.is_some_and(|n| n > MAX_ENUMERATE) {
        error!("The simulator only enumerates up to {MAX_ENUMERATE} words.\nPlease ask for fewer words and try again.");
        std::process::exit(1);
    }

    // Build the automaton
    let mut dfa: Dfa<u32, char> = match build(&args.accepting) {
        Ok(dfa) => dfa,
        Err(err) => {
            error!("{}", toplevel!(("Failed to build automaton"), err));
            std::process::exit(1);
        },
    };
    println!("{dfa}");
    println!();

    // Run all the words
    for word in &args.words {
        debug!("Running automaton on {word:?}...");
        println!("Run on {}:", style(format!("{word:?}")).bold());
        match simulate(&mut dfa, word) {
            Ok(true) => println!("  --> {}", style("ACCEPTED").bold().green()),
            Ok(false) => println!("  --> {}", style("REJECTED").bold().red()),
            Err(err) => {
                error!("{}", toplevel!(("Failed to run automaton on {:?}", word), err));
                std::process::exit(1);
            },
        }
        println!();
    }

    // Enumerate the language, if asked
    if let Some(n) = args.enumerate {
        debug!("Enumerating the first {n} word(s) in the language...");
        println!("First {n} accepted word(s):");
        for word in dfa.language().take(n) {
            match word {
                Ok(word) => {
                    let word: String = word.into_iter().collect();
                    println!("  {}", if word.is_empty() { "ε".into() } else { word });
                },
                Err(err) => {
                    error!("{}", toplevel!(("Failed to enumerate language"), err));
                    std::process::exit(1);
                },
            }
        }
    }
}
