//  LIB.rs
//    by Lut99
//
//  Created:
//    14 Oct 2026, 10:02:17
//  Last edited:
//    17 Oct 2026, 15:41:08
//  Auto updated?
//    Yes
//
//  Description:
//!   A deterministic finite automaton (DFA) simulator.
//!
//!   Automata are built programmatically from a transition function (see [`Dfa::builder()`]),
//!   validated once at construction time and then used to:
//!   - step through the run on some input word, one symbol at a time, while inspecting the
//!     [configuration](dfa::Config) at every step;
//!   - decide whether a word is [accepted](Dfa::accepts()); or
//!   - [enumerate](Dfa::language()) the accepted language in order of increasing word length.
//

// Declare modules
pub mod collect;
pub mod dfa;
pub mod language;
mod log;
#[cfg(test)]
mod tests;

// Re-exports
pub use collect::collect;
pub use dfa::{Dfa, DfaBuilder};
#[cfg(feature = "macros")]
pub use finite_automata_macros::dfa;
pub use language::Language;
