//  MOD.rs
//    by Lut99
//
//  Created:
//    15 Oct 2026, 09:31:02
//  Last edited:
//    17 Oct 2026, 13:40:52
//  Auto updated?
//    Yes
//
//  Description:
//!   Enumerates the language of a [`Dfa`], i.e., all words it accepts.
//!
//!   This is done by brute force: for every length `n = 0, 1, 2, ...`, every word in `Σ^n` is
//!   tested and yielded if accepted. Hence, the words come out shortest-first.
//

// Nested modules
mod words;

// Imports
use std::fmt::Debug;
use std::hash::Hash;

pub use words::Words;

use crate::dfa::{Dfa, RunError};
use crate::log::{debug, trace};


/***** LIBRARY *****/
/// Iterates over the words accepted by a [`Dfa`], shortest first.
///
/// Words of the same length come out in the order produced by [`Words`], i.e., lexicographically
/// w.r.t. the order of the automaton's alphabet.
///
/// If the language is infinite, so is this iterator. Use [`Iterator::take()`] or
/// [`Language::up_to()`] to bound it.
///
/// Every candidate is tested with [`Dfa::accepts()`], so the automaton's run is overwritten while
/// iterating. If that fails (because the transition function is incomplete), the error is
/// yielded once and the iteration ends.
#[derive(Debug)]
pub struct Language<'d, Q, A> {
    /// The automaton to test candidates with.
    dfa:     &'d mut Dfa<Q, A>,
    /// The candidates of the current length.
    words:   Words<A>,
    /// If given, the length of the longest words to consider.
    max_len: Option<usize>,
    /// Whether we're done (because we hit `max_len`, ran out of candidates or errored).
    done:    bool,
}
impl<'d, Q, A: Clone> Language<'d, Q, A> {
    /// Constructor for the Language that starts at the empty word.
    ///
    /// # Arguments
    /// - `dfa`: The [`Dfa`] whose language to enumerate.
    ///
    /// # Returns
    /// A new Language iterator.
    #[inline]
    pub fn new(dfa: &'d mut Dfa<Q, A>) -> Self {
        let words: Words<A> = Words::new(dfa.alphabet().iter().cloned(), 0);
        Self { dfa, words, max_len: None, done: false }
    }

    /// Limits the iterator to words of at most the given length.
    ///
    /// # Arguments
    /// - `max_len`: The length of the longest words to yield. All words of this length are still
    ///   considered.
    ///
    /// # Returns
    /// Self for chaining.
    #[inline]
    pub fn up_to(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    /// Returns the length of the words currently being considered.
    #[inline]
    pub fn current_length(&self) -> usize { self.words.length() }
}
impl<'d, Q, A> Iterator for Language<'d, Q, A>
where
    Q: Clone + Debug + Eq + Hash,
    A: Clone + Debug + Eq + Hash,
{
    type Item = Result<Vec<A>, RunError<Q, A>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            match self.words.next() {
                Some(word) => {
                    trace!("Considering candidate {word:?}");
                    match self.dfa.accepts(word.iter().cloned()) {
                        Ok(true) => return Some(Ok(word)),
                        Ok(false) => continue,
                        Err(err) => {
                            self.done = true;
                            return Some(Err(err));
                        },
                    }
                },
                None => {
                    // Nothing left of this length; maybe move on to the next
                    let len: usize = self.words.length();
                    if self.words.alphabet().is_empty() || self.max_len.is_some_and(|max| len >= max) {
                        debug!("Language enumeration done after words of length {len}");
                        self.done = true;
                        return None;
                    }
                    debug!("Enumerated all words of length {len}, moving on to length {}", len + 1);
                    self.words.restart(len + 1);
                },
            }
        }
    }
}



impl<Q, A: Clone> Dfa<Q, A> {
    /// Returns an iterator over all words this automaton accepts.
    ///
    /// See [`Language`] for details.
    ///
    /// # Returns
    /// A [`Language`] iterator that borrows this automaton (and its run) for as long as it lives.
    #[inline]
    pub fn language(&mut self) -> Language<'_, Q, A> { Language::new(self) }
}





/***** TESTS *****/
#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::tests::{make_dfa, make_word};


    /// Collects the given words as [`String`]s, panicking on errors.
    #[track_caller]
    fn strings<Q: Clone + Debug + Eq + Hash>(lang: impl Iterator<Item = Result<Vec<char>, RunError<Q, char>>>) -> Vec<String> {
        lang.map(|w| w.unwrap_or_else(|err| panic!("Failed to enumerate language: {err}")).into_iter().collect()).collect()
    }


    #[test]
    fn test_language_reference() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        let mut dfa: Dfa<u32, char> = make_dfa([2]);
        assert_eq!(strings(dfa.language().take(6)), vec!["ab", "aab", "bab", "aaab", "baab", "bbab"]);
    }

    #[test]
    fn test_language_matches_accepts() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        // Everything enumerated up to length 6 is accepted, and everything else isn't
        let mut dfa: Dfa<u32, char> = make_dfa([0]);
        let lang: Vec<String> = strings(dfa.language().up_to(6));
        let lang_set: HashSet<&String> = lang.iter().collect();
        assert_eq!(lang.len(), lang_set.len());
        for len in 0..=6 {
            for word in Words::new(['a', 'b'], len) {
                let word: String = word.into_iter().collect();
                assert_eq!(dfa.accepts(word.chars()), Ok(lang_set.contains(&word)), "Mismatch for {word:?}");
            }
        }

        // Non-decreasing length
        assert!(lang.windows(2).all(|w| w[0].len() <= w[1].len()));
    }

    #[test]
    fn test_language_finite() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        // Accepts only `a`, `b` and `ab`; everything else ends up in the sink state 3
        let mut dfa: Dfa<u32, char> = Dfa::builder()
            .transitions([((0, 'a'), 1), ((0, 'b'), 2), ((1, 'a'), 3), ((1, 'b'), 2), ((2, 'a'), 3), ((2, 'b'), 3), ((3, 'a'), 3), ((3, 'b'), 3)])
            .start(0)
            .accepting([1, 2])
            .build()
            .unwrap();
        assert_eq!(strings(dfa.language().up_to(5)), vec!["a", "b", "ab"]);
    }

    #[test]
    fn test_language_up_to() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        let mut dfa: Dfa<u32, char> = make_dfa([0, 1, 2]);
        assert_eq!(strings(dfa.language().up_to(0)), vec![""]);
        assert_eq!(strings(dfa.language().up_to(2)), vec!["", "a", "b", "aa", "ab", "ba", "bb"]);
    }

    #[test]
    fn test_language_empty_alphabet() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        // Only the empty word can be accepted, and then it's over
        let mut dfa: Dfa<u32, char> = Dfa::builder().states([0]).accepting([0]).build().unwrap();
        assert_eq!(strings(dfa.language()), vec![""]);
        let mut dfa: Dfa<u32, char> = Dfa::builder().states([0]).build().unwrap();
        assert_eq!(strings(dfa.language()), Vec::<String>::new());
    }

    #[test]
    fn test_language_empty_language() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        let mut dfa: Dfa<u32, char> = make_dfa([]);
        let mut lang = dfa.language().up_to(4);
        assert_eq!(lang.next(), None);
        assert_eq!(lang.current_length(), 4);
        assert_eq!(lang.next(), None);
    }

    #[test]
    fn test_language_error_is_fused() {
        #[cfg(feature = "log")]
        crate::tests::setup_logger();

        // Accepts `a`, but has no clue what to do with `b`
        let mut dfa: Dfa<u32, char> = Dfa::builder().transition(0, 'a', 1).alphabet(['a', 'b']).accepting([1]).build().unwrap();
        let mut lang = dfa.language();
        assert_eq!(lang.next(), Some(Ok(make_word("a"))));
        assert_eq!(lang.next(), Some(Err(RunError::MissingTransition { state: 0, symbol: 'b' })));
        assert_eq!(lang.next(), None);
    }
}
