//  BUILDER.rs
//    by Lut99
//
//  Created:
//    14 Oct 2026, 11:47:05
//  Last edited:
//    16 Oct 2026, 16:30:44
//  Auto updated?
//    Yes
//
//  Description:
//!   Implements a builder for [`Dfa`]s, where everything is optional.
//

use std::fmt::Debug;
use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};

use super::{DefinitionError, Dfa};


/***** LIBRARY *****/
/// Collects the parts of a [`Dfa`] before validating them all at once.
///
/// All parts are optional:
/// - If [`DfaBuilder::states()`] is never called, `Q` becomes exactly the states used by the
///   transitions;
/// - If [`DfaBuilder::alphabet()`] is never called, `Σ` becomes exactly the symbols used by the
///   transitions;
/// - Without any [`DfaBuilder::transition()`]s, `δ` is empty;
/// - Without a [`DfaBuilder::start()`], `q0` becomes `Q::default()` (which must still be in `Q`);
///   and
/// - Without [`DfaBuilder::accepting()`] states, `F` is empty.
#[derive(Clone, Debug)]
pub struct DfaBuilder<Q, A> {
    /// Any explicitly given states.
    states:    Option<IndexSet<Q>>,
    /// Any explicitly given alphabet.
    alphabet:  Option<IndexSet<A>>,
    /// The transitions given so far.
    delta:     IndexMap<(Q, A), Q>,
    /// The start state, if given.
    start:     Option<Q>,
    /// The accepting states given so far.
    accepting: IndexSet<Q>,
}
impl<Q, A> Default for DfaBuilder<Q, A> {
    #[inline]
    fn default() -> Self { Self::new() }
}
impl<Q, A> DfaBuilder<Q, A> {
    /// Constructor for the DfaBuilder that doesn't set anything yet.
    ///
    /// # Returns
    /// A new DfaBuilder that would build an automaton without states, transitions or accepting
    /// states.
    #[inline]
    pub fn new() -> Self { Self { states: None, alphabet: None, delta: IndexMap::new(), start: None, accepting: IndexSet::new() } }

    /// Sets the start state.
    ///
    /// # Arguments
    /// - `start`: The state that every run starts in. Overwrites any previously given one.
    ///
    /// # Returns
    /// Self for chaining.
    #[inline]
    pub fn start(mut self, start: Q) -> Self {
        self.start = Some(start);
        self
    }
}
impl<Q, A> DfaBuilder<Q, A>
where
    Q: Eq + Hash,
    A: Eq + Hash,
{
    /// Declares states explicitly.
    ///
    /// Calling this at all means `Q` is no longer derived from the transitions. It may be called
    /// multiple times to add more states.
    ///
    /// # Arguments
    /// - `states`: The states to add to `Q`.
    ///
    /// # Returns
    /// Self for chaining.
    #[inline]
    pub fn states(mut self, states: impl IntoIterator<Item = Q>) -> Self {
        self.states.get_or_insert_with(IndexSet::new).extend(states);
        self
    }

    /// Declares symbols explicitly.
    ///
    /// Calling this at all means `Σ` is no longer derived from the transitions. It may be called
    /// multiple times to add more symbols.
    ///
    /// # Arguments
    /// - `alphabet`: The symbols to add to `Σ`.
    ///
    /// # Returns
    /// Self for chaining.
    #[inline]
    pub fn alphabet(mut self, alphabet: impl IntoIterator<Item = A>) -> Self {
        self.alphabet.get_or_insert_with(IndexSet::new).extend(alphabet);
        self
    }

    /// Adds a single transition `δ(state, symbol) = target`.
    ///
    /// If a transition for `(state, symbol)` already exists, it is overwritten.
    ///
    /// # Arguments
    /// - `state`: The state to transition from.
    /// - `symbol`: The symbol to transition on.
    /// - `target`: The state to transition to.
    ///
    /// # Returns
    /// Self for chaining.
    #[inline]
    pub fn transition(mut self, state: Q, symbol: A, target: Q) -> Self {
        self.delta.insert((state, symbol), target);
        self
    }

    /// Adds many transitions at once.
    ///
    /// # Arguments
    /// - `delta`: The transitions to add, as `((q, a), q')`-pairs. Later pairs overwrite earlier
    ///   ones with the same `(q, a)`.
    ///
    /// # Returns
    /// Self for chaining.
    #[inline]
    pub fn transitions(mut self, delta: impl IntoIterator<Item = ((Q, A), Q)>) -> Self {
        self.delta.extend(delta);
        self
    }

    /// Adds accepting states.
    ///
    /// # Arguments
    /// - `accepting`: The states to add to `F`.
    ///
    /// # Returns
    /// Self for chaining.
    #[inline]
    pub fn accepting(mut self, accepting: impl IntoIterator<Item = Q>) -> Self {
        self.accepting.extend(accepting);
        self
    }
}
impl<Q, A> DfaBuilder<Q, A>
where
    Q: Clone + Debug + Default + Eq + Hash,
    A: Clone + Debug + Eq + Hash,
{
    /// Validates everything given so far and builds the automaton.
    ///
    /// # Returns
    /// A new [`Dfa`] that is not running anything yet.
    ///
    /// # Errors
    /// This function errors with a [`DefinitionError`] if the parts don't make up a consistent
    /// automaton. The checks are done in this order:
    /// 1. All states in the transitions must be in `Q`;
    /// 2. All symbols in the transitions must be in `Σ`;
    /// 3. All accepting states must be in `Q`; and
    /// 4. The start state must be in `Q`.
    #[inline]
    pub fn build(self) -> Result<Dfa<Q, A>, DefinitionError<Q, A>> {
        Dfa::from_parts(self.states, self.alphabet, self.delta, self.start.unwrap_or_default(), self.accepting)
    }
}





/***** TESTS *****/
