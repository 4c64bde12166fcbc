//  MOD.rs
//    by Lut99
//
//  Created:
//    14 Oct 2026, 10:31:12
//  Last edited:
//    17 Oct 2026, 14:58:27
//  Auto updated?
//    Yes
//
//  Description:
//!   Defines the deterministic finite automaton itself.
//!
//!   A [`Dfa`] is the usual five-tuple `(Q, Σ, δ, q0, F)`, where:
//!   - `Q` is a finite set of states;
//!   - `Σ` is a finite set of input symbols (the _alphabet_);
//!   - `δ` is a (partial) transition function `Q × Σ → Q`;
//!   - `q0 ∈ Q` is the start state; and
//!   - `F ⊆ Q` is the set of accepting states.
//!
//!   The definition is validated once, when the automaton is [built](DfaBuilder::build()), and is
//!   read-only afterwards. On top of that, every automaton carries a single _run_ that can be
//!   [reset](Dfa::reset()) to some word and then [stepped](Dfa::step()) through. See the
//!   [`run`]-module for that part.
//

// Nested modules
mod builder;
pub mod run;

// Imports
use std::error;
use std::fmt::{Debug, Display, Formatter, Result as FResult};
use std::hash::Hash;

pub use builder::DfaBuilder;
use indexmap::{Equivalent, IndexMap, IndexSet};
use itertools::Itertools as _;
pub use run::{Config, OwnedConfig, RunError, RunStatus, Step};

use self::run::Run;
use crate::collect::collect;
use crate::log::debug;


/***** ERRORS *****/
/// Defines the ways in which an automaton definition can be inconsistent.
///
/// These are all produced by [`DfaBuilder::build()`], which checks them in the order the variants
/// are listed in.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DefinitionError<Q, A> {
    /// The transition function mentions a state that is not in the state set.
    UndeclaredState { state: Q },
    /// The transition function mentions a symbol that is not in the alphabet.
    UndeclaredSymbol { symbol: A },
    /// One of the accepting states is not in the state set.
    InvalidAcceptingSet { state: Q },
    /// The start state is not in the state set.
    InvalidStartState { state: Q },
}
impl<Q: Debug, A: Debug> Display for DefinitionError<Q, A> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult {
        match self {
            Self::UndeclaredState { state } => write!(f, "Transition function references state {state:?}, which is not in the set of states"),
            Self::UndeclaredSymbol { symbol } => write!(f, "Transition function references symbol {symbol:?}, which is not in the alphabet"),
            Self::InvalidAcceptingSet { state } => write!(f, "Accepting state {state:?} is not in the set of states"),
            Self::InvalidStartState { state } => write!(f, "Start state {state:?} is not in the set of states"),
        }
    }
}
impl<Q: Debug, A: Debug> error::Error for DefinitionError<Q, A> {}





/***** HELPERS *****/
/// A borrowed view on a key of the transition function.
///
/// Hashes and compares exactly like the owned `(Q, A)`-tuple, which means we can look up
/// transitions without cloning the current state and symbol first.
#[derive(Hash)]
struct TransitionKey<'k, Q, A>(&'k Q, &'k A);
impl<'k, Q: Eq, A: Eq> Equivalent<(Q, A)> for TransitionKey<'k, Q, A> {
    #[inline]
    fn equivalent(&self, key: &(Q, A)) -> bool { self.0 == &key.0 && self.1 == &key.1 }
}

/// Formats a set as `{a, b, c}`.
struct SetFormatter<'s, T>(&'s IndexSet<T>);
impl<'s, T: Display> Display for SetFormatter<'s, T> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult { write!(f, "{{{}}}", self.0.iter().join(", ")) }
}





/***** LIBRARY *****/
/// A deterministic finite automaton.
///
/// See the [module-level documentation](self) for the theory. Build one using [`Dfa::builder()`]
/// (or [`Dfa::new()`] if you only want to give a transition function), then either:
/// - [`Dfa::reset()`] it to a word and repeatedly [`Dfa::step()`] through it while looking at the
///   [`Dfa::config()`]; or
/// - ask whether it [`Dfa::accepts()`] a word; or
/// - iterate over its [`Dfa::language()`].
///
/// The definition (`Q`, `Σ`, `δ`, `q0` and `F`) never changes after construction. The run does,
/// which is why all run-related functions take `&mut self`. If you want to run the same automaton
/// in parallel, [clone](Clone) it.
#[derive(Clone, Debug)]
pub struct Dfa<Q, A> {
    /// The set of states, `Q`.
    states:    IndexSet<Q>,
    /// The input alphabet, `Σ`.
    alphabet:  IndexSet<A>,
    /// The transition function, `δ`.
    delta:     IndexMap<(Q, A), Q>,
    /// The start state, `q0`.
    start:     Q,
    /// The accepting states, `F`.
    accepting: IndexSet<Q>,

    /// The run in progress, if any.
    run: Run<Q, A>,
}

// Constructors
impl<Q, A> Dfa<Q, A> {
    /// Returns a builder for a new Dfa.
    ///
    /// # Returns
    /// An empty [`DfaBuilder`]. Without any further configuration, it will build an automaton
    /// without states, which fails because there is no valid start state.
    #[inline]
    pub fn builder() -> DfaBuilder<Q, A> { DfaBuilder::new() }
}
impl<Q, A> Dfa<Q, A>
where
    Q: Clone + Debug + Eq + Hash,
    A: Clone + Debug + Eq + Hash,
{
    /// Constructor for the Dfa that derives the states and alphabet from the transition function.
    ///
    /// # Arguments
    /// - `delta`: The transitions, as `((q, a), q')`-pairs.
    /// - `start`: The start state.
    /// - `accepting`: The accepting states.
    ///
    /// # Returns
    /// A new Dfa with `Q` and `Σ` set to exactly those states and symbols used in `delta`.
    ///
    /// # Errors
    /// This function errors if `start` or any of the `accepting` states do not occur in `delta`.
    #[inline]
    pub fn new(
        delta: impl IntoIterator<Item = ((Q, A), Q)>,
        start: Q,
        accepting: impl IntoIterator<Item = Q>,
    ) -> Result<Self, DefinitionError<Q, A>> {
        Self::from_parts(None, None, delta.into_iter().collect(), start, accepting.into_iter().collect())
    }

    /// Builds a Dfa from its constituents, deriving what's missing and validating the result.
    ///
    /// # Errors
    /// This function errors if the given parts do not define a consistent automaton.
    pub(crate) fn from_parts(
        states: Option<IndexSet<Q>>,
        alphabet: Option<IndexSet<A>>,
        delta: IndexMap<(Q, A), Q>,
        start: Q,
        accepting: IndexSet<Q>,
    ) -> Result<Self, DefinitionError<Q, A>> {
        // Fill in whatever the user left to us
        let (used_states, used_alphabet): (IndexSet<Q>, IndexSet<A>) = collect(&delta);
        let states: IndexSet<Q> = states.unwrap_or_else(|| used_states.clone());
        let alphabet: IndexSet<A> = alphabet.unwrap_or_else(|| used_alphabet.clone());

        // Sanity checks, in order
        if let Some(state) = used_states.into_iter().find(|q| !states.contains(q)) {
            return Err(DefinitionError::UndeclaredState { state });
        }
        if let Some(symbol) = used_alphabet.into_iter().find(|a| !alphabet.contains(a)) {
            return Err(DefinitionError::UndeclaredSymbol { symbol });
        }
        if let Some(state) = accepting.iter().find(|q| !states.contains(*q)) {
            return Err(DefinitionError::InvalidAcceptingSet { state: state.clone() });
        }
        if !states.contains(&start) {
            return Err(DefinitionError::InvalidStartState { state: start });
        }

        debug!(
            "Built DFA with {} state(s), {} symbol(s) and {} transition(s) (start: {:?}, accepting: {:?})",
            states.len(),
            alphabet.len(),
            delta.len(),
            start,
            accepting
        );
        Ok(Self { states, alphabet, delta, start, accepting, run: Run::NotStarted })
    }
}

// Definition
impl<Q, A> Dfa<Q, A> {
    /// Returns the set of states, `Q`.
    #[inline]
    pub const fn states(&self) -> &IndexSet<Q> { &self.states }

    /// Returns the input alphabet, `Σ`.
    #[inline]
    pub const fn alphabet(&self) -> &IndexSet<A> { &self.alphabet }

    /// Returns the transition function, `δ`, exactly as given during construction.
    #[inline]
    pub const fn transitions(&self) -> &IndexMap<(Q, A), Q> { &self.delta }

    /// Returns the start state, `q0`.
    #[inline]
    pub const fn start(&self) -> &Q { &self.start }

    /// Returns the set of accepting states, `F`.
    #[inline]
    pub const fn accepting(&self) -> &IndexSet<Q> { &self.accepting }
}
impl<Q, A> Dfa<Q, A>
where
    Q: Eq + Hash,
    A: Eq + Hash,
{
    /// Applies the transition function once.
    ///
    /// # Arguments
    /// - `state`: The state to transition from.
    /// - `symbol`: The symbol to transition on.
    ///
    /// # Returns
    /// The state `δ(state, symbol)`, or [`None`] if the transition function is undefined there.
    #[inline]
    pub fn transition(&self, state: &Q, symbol: &A) -> Option<&Q> { self.delta.get(&TransitionKey(state, symbol)) }

    /// Checks whether the given state is accepting.
    ///
    /// # Arguments
    /// - `state`: The state to check.
    ///
    /// # Returns
    /// True if `state` is in `F`, or false otherwise.
    #[inline]
    pub fn is_accepting(&self, state: &Q) -> bool { self.accepting.contains(state) }
}

// Formatting
impl<Q: Display, A: Display> Display for Dfa<Q, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult {
        writeln!(f, "DFA (")?;
        writeln!(f, "    Q  = {}", SetFormatter(&self.states))?;
        writeln!(f, "    Σ  = {}", SetFormatter(&self.alphabet))?;
        writeln!(f, "    δ  = {{{}}}", self.delta.iter().map(|((q, a), r)| format!("({q}, {a}) -> {r}")).join(", "))?;
        writeln!(f, "    q0 = {}", self.start)?;
        writeln!(f, "    F  = {}", SetFormatter(&self.accepting))?;
        write!(f, ")")
    }
}





/***** TESTS *****/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{make_builder, make_delta, make_dfa};


    #[test]
    fn test_dfa_default_states() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        let dfa: Dfa<u32, char> = make_dfa([]);
        assert_eq!(dfa.states(), &IndexSet::from([0, 1, 2]));
    }

    #[test]
    fn test_dfa_default_alphabet() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        let dfa: Dfa<u32, char> = make_dfa([]);
        assert_eq!(dfa.alphabet(), &IndexSet::from(['a', 'b']));
    }

    #[test]
    fn test_dfa_new() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        let dfa: Dfa<u32, char> = Dfa::new(make_delta(), 0, [2]).unwrap();
        assert_eq!(dfa.states(), &IndexSet::from([0, 1, 2]));
        assert_eq!(dfa.alphabet(), &IndexSet::from(['a', 'b']));
        assert_eq!(dfa.transitions(), &make_delta());
        assert_eq!(dfa.start(), &0);
        assert_eq!(dfa.accepting(), &IndexSet::from([2]));
    }

    #[test]
    fn test_dfa_explicit_supersets() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        // Explicitly given sets may be larger than what delta uses
        let dfa: Dfa<u32, char> = make_builder().states([0, 1, 2, 3]).alphabet(['a', 'b', 'c']).accepting([3]).build().unwrap();
        assert_eq!(dfa.states(), &IndexSet::from([0, 1, 2, 3]));
        assert_eq!(dfa.alphabet(), &IndexSet::from(['a', 'b', 'c']));
        assert!(dfa.is_accepting(&3));
        assert!(!dfa.is_accepting(&0));
    }

    #[test]
    fn test_dfa_invalid_start() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        let res = Dfa::<u32, char>::builder().states([1, 2, 3]).start(4).build();
        assert_eq!(res.unwrap_err(), DefinitionError::InvalidStartState { state: 4 });
    }

    #[test]
    fn test_dfa_default_start() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        // Falls back to `0`, which is valid here...
        let dfa: Dfa<u32, char> = Dfa::builder().transitions(make_delta()).build().unwrap();
        assert_eq!(dfa.start(), &0);

        // ...but not here
        let res = Dfa::<u32, char>::builder().states([1, 2, 3]).build();
        assert_eq!(res.unwrap_err(), DefinitionError::InvalidStartState { state: 0 });
    }

    #[test]
    fn test_dfa_invalid_states() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        let res = make_builder().states([2, 3, 4]).build();
        assert!(matches!(res, Err(DefinitionError::UndeclaredState { state: 0 | 1 })));
    }

    #[test]
    fn test_dfa_invalid_alphabet() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        let res = make_builder().alphabet(['b', 'c']).build();
        assert_eq!(res.unwrap_err(), DefinitionError::UndeclaredSymbol { symbol: 'a' });
    }

    #[test]
    fn test_dfa_invalid_accepting() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        let res = make_builder().accepting([1, 5]).build();
        assert_eq!(res.unwrap_err(), DefinitionError::InvalidAcceptingSet { state: 5 });
    }

    #[test]
    fn test_dfa_validation_order() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        // Everything is wrong; states are checked first, then symbols, then accepting, then start
        let res = make_builder().states([7]).alphabet(['z']).accepting([8]).start(9).build();
        assert!(matches!(res, Err(DefinitionError::UndeclaredState { .. })));
        let res = make_builder().alphabet(['z']).accepting([8]).start(9).build();
        assert!(matches!(res, Err(DefinitionError::UndeclaredSymbol { .. })));
        let res = make_builder().accepting([8]).start(9).build();
        assert!(matches!(res, Err(DefinitionError::InvalidAcceptingSet { state: 8 })));
    }

    #[test]
    fn test_dfa_invariants() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        let dfa: Dfa<u32, char> = make_dfa([1, 2]);
        assert!(dfa.states().contains(dfa.start()));
        assert!(dfa.accepting().iter().all(|q| dfa.states().contains(q)));
        for ((q, a), r) in dfa.transitions() {
            assert!(dfa.states().contains(q));
            assert!(dfa.alphabet().contains(a));
            assert!(dfa.states().contains(r));
        }
    }

    #[test]
    fn test_dfa_transition() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        let dfa: Dfa<u32, char> = make_dfa([]);
        assert_eq!(dfa.transition(&0, &'a'), Some(&1));
        assert_eq!(dfa.transition(&1, &'b'), Some(&2));
        assert_eq!(dfa.transition(&2, &'c'), None);
        assert_eq!(dfa.transition(&3, &'a'), None);
    }

    #[test]
    fn test_dfa_display() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        let dfa: Dfa<u32, char> = Dfa::new([((0, 'a'), 1), ((1, 'a'), 0)], 0, [1]).unwrap();
        assert_eq!(dfa.to_string(), "DFA (\n    Q  = {0, 1}\n    Σ  = {a}\n    δ  = {(0, a) -> 1, (1, a) -> 0}\n    q0 = 0\n    F  = {1}\n)");
    }

    #[test]
    fn test_definition_error_display() {
        assert_eq!(
            DefinitionError::<u32, char>::InvalidStartState { state: 4 }.to_string(),
            "Start state 4 is not in the set of states"
        );
        assert_eq!(
            DefinitionError::<u32, char>::UndeclaredSymbol { symbol: 'a' }.to_string(),
            "Transition function references symbol 'a', which is not in the alphabet"
        );
    }
}
