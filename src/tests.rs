//  TESTS.rs
//    by Lut99
//
//  Created:
//    14 Oct 2026, 10:20:36
//  Last edited:
//    17 Oct 2026, 11:03:59
//  Auto updated?
//    Yes
//
//  Description:
//!   Contains some common test functions.
//

#![allow(unused)]

use indexmap::IndexMap;

use crate::dfa::{Dfa, DfaBuilder};


/***** LIBRARY *****/
/// Sets up a logger if wanted.
#[cfg(feature = "log")]
pub fn setup_logger() {
    use humanlog::{DebugMode, HumanLogger};

    // Check if the envs tell us to
    if let Ok(logger) = std::env::var("LOGGER") {
        if logger == "1" || logger == "true" {
            // Create the logger
            if let Err(err) = HumanLogger::terminal(DebugMode::Full).init() {
                eprintln!("WARNING: Failed to setup logger: {err} (no logging for this session)");
            }
        }
    }
}



/// Makes the transition function of the three-state automaton over `{a, b}` that most tests use.
///
/// ```plain
/// (0, a) -> 1    (0, b) -> 0
/// (1, a) -> 1    (1, b) -> 2
/// (2, a) -> 0    (2, b) -> 0
/// ```
pub fn make_delta() -> IndexMap<(u32, char), u32> {
    IndexMap::from([((0, 'a'), 1), ((0, 'b'), 0), ((1, 'a'), 1), ((1, 'b'), 2), ((2, 'a'), 0), ((2, 'b'), 0)])
}

/// Makes a builder prepared with [`make_delta()`] and start state `0`.
pub fn make_builder() -> DfaBuilder<u32, char> { Dfa::builder().transitions(make_delta()).start(0) }

/// Makes the reference automaton with the given accepting states.
#[track_caller]
pub fn make_dfa(accepting: impl IntoIterator<Item = u32>) -> Dfa<u32, char> {
    make_builder().accepting(accepting).build().unwrap_or_else(|err| panic!("Failed to build reference DFA: {err}"))
}

/// Turns a string into a word of [`char`]s.
pub fn make_word(word: &str) -> Vec<char> { word.chars().collect() }
