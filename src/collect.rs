//  COLLECT.rs
//    by Lut99
//
//  Created:
//    14 Oct 2026, 10:11:52
//  Last edited:
//    15 Oct 2026, 17:20:03
//  Auto updated?
//    Yes
//
//  Description:
//!   Derives the states and symbols that a transition function talks
//!   about.
//

use std::hash::Hash;

use indexmap::IndexSet;


/***** LIBRARY FUNCTIONS *****/
/// Returns the states and the alphabet used by the given transition function.
///
/// A state is _used_ if it occurs on either side of a transition; a symbol is used if it labels
/// any transition.
///
/// # Arguments
/// - `delta`: Something iterating over the transitions, as `((q, a), q')`-pairs. This is what you
///   get when iterating over a reference to an [`IndexMap`](indexmap::IndexMap) or a
///   [`HashMap`](std::collections::HashMap) from `(Q, A)` to `Q`.
///
/// # Returns
/// A tuple with the set of used states and the set of used symbols, in that order. Both are empty
/// if `delta` is.
///
/// Elements appear in the order they are first encountered in `delta`, but you should treat this
/// as a convenience, not as something to rely on.
pub fn collect<'d, Q, A, I>(delta: I) -> (IndexSet<Q>, IndexSet<A>)
where
    I: IntoIterator<Item = (&'d (Q, A), &'d Q)>,
    Q: 'd + Clone + Eq + Hash,
    A: 'd + Clone + Eq + Hash,
{
    let mut states: IndexSet<Q> = IndexSet::new();
    let mut alphabet: IndexSet<A> = IndexSet::new();
    for ((q, a), r) in delta {
        // NOTE: Check first to avoid cloning things we already have
        if !states.contains(q) {
            states.insert(q.clone());
        }
        if !states.contains(r) {
            states.insert(r.clone());
        }
        if !alphabet.contains(a) {
            alphabet.insert(a.clone());
        }
    }
    (states, alphabet)
}





/***** TESTS *****/
