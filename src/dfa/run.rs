//  RUN.rs
//    by Lut99
//
//  Created:
//    14 Oct 2026, 13:02:48
//  Last edited:
//    17 Oct 2026, 14:58:01
//  Auto updated?
//    Yes
//
//  Description:
//!   Implements running a [`Dfa`] on a word, one symbol at a time.
//!
//!   Every automaton has exactly one run, which goes through three phases:
//!   ```plain
//!   NotStarted --reset()--> InProgress --step()--> ... --step()--> Exhausted
//!                               ^                                       |
//!                               +---------------reset()-----------------+
//!   ```
//!   The [`Config`]uration of the run can be inspected at any point.
//

use std::error;
use std::fmt::{Debug, Display, Formatter, Result as FResult};
use std::hash::Hash;

use enum_debug::EnumDebug;
use itertools::Itertools as _;

use super::{Dfa, TransitionKey};
use crate::log::{debug, trace};


/***** ERRORS *****/
/// Defines the ways in which running a [`Dfa`] can fail.
///
/// Note that reaching the end of the word is _not_ an error; see [`Step::Exhausted`] instead.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RunError<Q, A> {
    /// The word given to [`Dfa::reset()`] contains a symbol not in the alphabet.
    UnknownSymbol { symbol: A, index: usize },
    /// [`Dfa::step()`] was called before any word was given.
    NoActiveRun,
    /// The transition function is undefined for the state and symbol encountered.
    MissingTransition { state: Q, symbol: A },
}
impl<Q: Debug, A: Debug> Display for RunError<Q, A> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult {
        match self {
            Self::UnknownSymbol { symbol, index } => write!(f, "Invalid input symbol {symbol:?} at position {index} (not in the alphabet)"),
            Self::NoActiveRun => write!(f, "Cannot step an automaton that has not been given a word (call `reset()` first)"),
            Self::MissingTransition { state, symbol } => write!(f, "No transition given for ({state:?}, {symbol:?})"),
        }
    }
}
impl<Q: Debug, A: Debug> error::Error for RunError<Q, A> {}





/***** HELPERS *****/
/// Formats a word by concatenating its symbols, or as `ε` if it's empty.
struct WordFormatter<'w, A>(&'w [A]);
impl<'w, A: Display> Display for WordFormatter<'w, A> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult {
        if self.0.is_empty() {
            return write!(f, "ε");
        }
        write!(f, "{}", self.0.iter().join(""))
    }
}





/***** AUXILLARY *****/
/// The phase of a [`Dfa`]'s run.
#[derive(Clone, Copy, Debug, EnumDebug, Eq, Hash, PartialEq)]
pub enum RunStatus {
    /// No word was ever given.
    NotStarted,
    /// There are still symbols left to consume.
    InProgress,
    /// The whole word has been consumed.
    Exhausted,
}

/// What happened when calling [`Dfa::step()`].
#[derive(Clone, Copy, Debug, EnumDebug, Eq, Hash, PartialEq)]
#[must_use]
pub enum Step {
    /// One symbol was consumed.
    Moved,
    /// Nothing was left to consume. The run is over, and stays over until the next
    /// [`Dfa::reset()`].
    Exhausted,
}



/// A snapshot of a run in progress.
///
/// Invariants:
/// - `prefix ++ suffix` is the word given to [`Dfa::reset()`];
/// - `prefix.len()` is the number of steps taken; and
/// - `state` is the state reached by consuming `prefix` from the start state.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Config<'r, Q, A> {
    /// The part of the word consumed so far.
    pub prefix: &'r [A],
    /// The current state.
    pub state:  &'r Q,
    /// The part of the word still to consume.
    pub suffix: &'r [A],
}
impl<'r, Q, A> Config<'r, Q, A> {
    /// Returns the position of the run in the word.
    #[inline]
    pub const fn position(&self) -> usize { self.prefix.len() }

    /// Returns whether the whole word has been consumed.
    #[inline]
    pub const fn is_exhausted(&self) -> bool { self.suffix.is_empty() }
}
impl<'r, Q: Clone, A: Clone> Config<'r, Q, A> {
    /// Copies the borrowed snapshot into an owned one.
    ///
    /// # Returns
    /// An [`OwnedConfig`] with the same contents.
    #[inline]
    pub fn cloned(&self) -> OwnedConfig<Q, A> { OwnedConfig { prefix: self.prefix.to_vec(), state: self.state.clone(), suffix: self.suffix.to_vec() } }
}
impl<'r, Q: Display, A: Display> Display for Config<'r, Q, A> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult { write!(f, "({}, {}, {})", WordFormatter(self.prefix), self.state, WordFormatter(self.suffix)) }
}

/// An owned version of a [`Config`], e.g., to keep around in a [trace](Dfa::trace()).
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct OwnedConfig<Q, A> {
    /// The part of the word consumed so far.
    pub prefix: Vec<A>,
    /// The current state.
    pub state:  Q,
    /// The part of the word still to consume.
    pub suffix: Vec<A>,
}
impl<Q, A> OwnedConfig<Q, A> {
    /// Borrows this configuration as a [`Config`].
    #[inline]
    pub fn as_config(&self) -> Config<'_, Q, A> { Config { prefix: &self.prefix, state: &self.state, suffix: &self.suffix } }
}
impl<Q: Display, A: Display> Display for OwnedConfig<Q, A> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult { self.as_config().fmt(f) }
}



/// The run state kept by a [`Dfa`].
#[derive(Clone, Debug)]
pub(super) enum Run<Q, A> {
    /// No word was ever given.
    NotStarted,
    /// Some word was given and we're somewhere in it.
    Active {
        /// The whole word.
        word:  Vec<A>,
        /// How many symbols of `word` have been consumed.
        pos:   usize,
        /// The current state.
        state: Q,
    },
}
impl<Q, A> Run<Q, A> {
    /// Returns the phase of the run.
    #[inline]
    pub(super) fn status(&self) -> RunStatus {
        match self {
            Self::NotStarted => RunStatus::NotStarted,
            Self::Active { word, pos, .. } if *pos < word.len() => RunStatus::InProgress,
            Self::Active { .. } => RunStatus::Exhausted,
        }
    }

    /// Returns a snapshot of the run, if it is started.
    #[inline]
    pub(super) fn config(&self) -> Option<Config<'_, Q, A>> {
        match self {
            Self::NotStarted => None,
            Self::Active { word, pos, state } => {
                let (prefix, suffix): (&[A], &[A]) = word.split_at(*pos);
                Some(Config { prefix, state, suffix })
            },
        }
    }
}





/***** LIBRARY *****/
impl<Q, A> Dfa<Q, A> {
    /// Returns the phase the run of this automaton is in.
    ///
    /// # Returns
    /// A [`RunStatus`] that is [`RunStatus::NotStarted`] until the first [`Dfa::reset()`].
    #[inline]
    pub fn status(&self) -> RunStatus { self.run.status() }

    /// Returns the current configuration of the run.
    ///
    /// # Returns
    /// A [`Config`] with the consumed prefix, the current state and the remaining suffix, or
    /// [`None`] if no word was ever given (see [`Dfa::reset()`]).
    #[inline]
    pub fn config(&self) -> Option<Config<'_, Q, A>> { self.run.config() }
}
impl<Q, A> Dfa<Q, A>
where
    Q: Clone + Debug + Eq + Hash,
    A: Clone + Debug + Eq + Hash,
{
    /// Starts a new run on the given word.
    ///
    /// Any previous run is forgotten.
    ///
    /// # Arguments
    /// - `word`: The word to run on, as a sequence of symbols.
    ///
    /// # Errors
    /// This function errors if `word` contains a symbol not in the alphabet. The previous run, if
    /// any, is then left untouched.
    pub fn reset(&mut self, word: impl IntoIterator<Item = A>) -> Result<(), RunError<Q, A>> {
        let word: Vec<A> = word.into_iter().collect();
        if let Some((index, symbol)) = word.iter().enumerate().find(|(_, a)| !self.alphabet.contains(*a)) {
            return Err(RunError::UnknownSymbol { symbol: symbol.clone(), index });
        }

        trace!("Resetting run to word {word:?} (start state {:?})", self.start);
        self.run = Run::Active { word, pos: 0, state: self.start.clone() };
        Ok(())
    }

    /// Consumes the next symbol of the word.
    ///
    /// # Returns
    /// [`Step::Moved`] if a symbol was consumed, or [`Step::Exhausted`] if the whole word was
    /// already consumed (in which case nothing happens).
    ///
    /// # Errors
    /// This function errors if:
    /// - No word was ever given ([`RunError::NoActiveRun`]); or
    /// - The transition function has no transition for the current state and the next symbol
    ///   ([`RunError::MissingTransition`]). The run is left as it was.
    pub fn step(&mut self) -> Result<Step, RunError<Q, A>> {
        let Run::Active { word, pos, state } = &mut self.run else {
            return Err(RunError::NoActiveRun);
        };
        let Some(symbol) = word.get(*pos) else {
            trace!("Run on {word:?} is exhausted in state {state:?}");
            return Ok(Step::Exhausted);
        };

        match self.delta.get(&TransitionKey(&*state, symbol)) {
            Some(next) => {
                trace!("δ({state:?}, {symbol:?}) = {next:?}");
                *state = next.clone();
                *pos += 1;
                Ok(Step::Moved)
            },
            None => Err(RunError::MissingTransition { state: state.clone(), symbol: symbol.clone() }),
        }
    }

    /// Decides whether this automaton accepts the given word.
    ///
    /// This [resets](Dfa::reset()) the run to `word` and then [steps](Dfa::step()) until it's
    /// exhausted. Afterwards, the run stays at the end of `word`.
    ///
    /// # Arguments
    /// - `word`: The word to decide on.
    ///
    /// # Returns
    /// True if the run ends in an accepting state, or false otherwise.
    ///
    /// # Errors
    /// This function errors if `word` contains a symbol not in the alphabet, or if the transition
    /// function is undefined somewhere along the run. Note that the latter is not the same as a
    /// rejection: the automaton simply can't tell.
    pub fn accepts(&mut self, word: impl IntoIterator<Item = A>) -> Result<bool, RunError<Q, A>> {
        self.reset(word)?;
        while let Step::Moved = self.step()? {}

        let accepted: bool = self.config().is_some_and(|config| self.accepting.contains(config.state));
        debug!(
            "Word {:?} is {}",
            self.config().map(|config| config.prefix).unwrap_or_default(),
            if accepted { "ACCEPTED" } else { "REJECTED" }
        );
        Ok(accepted)
    }

    /// Runs the automaton on the given word and records every configuration it passes through.
    ///
    /// # Arguments
    /// - `word`: The word to run on.
    ///
    /// # Returns
    /// A list of `word.len() + 1` [`OwnedConfig`]s, starting with `(ε, q0, word)` and ending with
    /// `(word, q, ε)`.
    ///
    /// # Errors
    /// This function errors for the same reasons as [`Dfa::accepts()`].
    pub fn trace(&mut self, word: impl IntoIterator<Item = A>) -> Result<Vec<OwnedConfig<Q, A>>, RunError<Q, A>> {
        self.reset(word)?;

        let mut configs: Vec<OwnedConfig<Q, A>> = Vec::with_capacity(self.config().map(|config| config.suffix.len() + 1).unwrap_or(1));
        loop {
            if let Some(config) = self.config() {
                configs.push(config.cloned());
            }
            if let Step::Exhausted = self.step()? {
                return Ok(configs);
            }
        }
    }
}





/***** TESTS *****/
