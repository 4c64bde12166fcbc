//  WORDS.rs
//    by Lut99
//
//  Created:
//    15 Oct 2026, 09:44:21
//  Last edited:
//    16 Oct 2026, 13:57:10
//  Auto updated?
//    Yes
//
//  Description:
//!   Defines an iterator over all words of a fixed length over some
//!   alphabet.
//


/***** LIBRARY *****/
/// Iterates over all words of a given length over an alphabet, i.e., over `Σ^n`.
///
/// Works like an odometer, where every position in the word is a wheel with all the symbols on
/// it. The _last_ position turns fastest. For example, with alphabet `ab` and length 3:
/// ```plain
/// aaa, aab, aba, abb, baa, bab, bba, bbb
/// ```
/// In other words, the words come out in lexicographical order w.r.t. the order of the alphabet.
///
/// Note that `Σ^0` contains exactly one word (the empty one), even if `Σ` is empty, whereas
/// `Σ^n` for `n > 0` is empty if `Σ` is.
#[derive(Clone, Debug)]
pub struct Words<A> {
    /// The symbols to build words with.
    alphabet: Vec<A>,
    /// For every position in the next word, the index of its symbol in `alphabet`.
    wheels:   Vec<usize>,
    /// Whether we've rolled over (i.e., we're done).
    done:     bool,
}
impl<A> Words<A> {
    /// Constructor for Words.
    ///
    /// # Arguments
    /// - `alphabet`: The symbols to build words with. Their order determines the order of the
    ///   words.
    /// - `len`: The length of every word.
    ///
    /// # Returns
    /// A new Words that starts at the word consisting of only the first symbol.
    #[inline]
    pub fn new(alphabet: impl IntoIterator<Item = A>, len: usize) -> Self {
        let alphabet: Vec<A> = alphabet.into_iter().collect();
        let done: bool = len > 0 && alphabet.is_empty();
        Self { alphabet, wheels: vec![0; len], done }
    }

    /// Starts over, but for words of another length.
    ///
    /// # Arguments
    /// - `len`: The new length of every word.
    #[inline]
    pub fn restart(&mut self, len: usize) {
        self.wheels.clear();
        self.wheels.resize(len, 0);
        self.done = len > 0 && self.alphabet.is_empty();
    }



    /// Returns the length of the words produced.
    #[inline]
    pub fn length(&self) -> usize { self.wheels.len() }

    /// Returns the alphabet the words are built from.
    #[inline]
    pub fn alphabet(&self) -> &[A] { &self.alphabet }

    /// Returns the number of words in `Σ^n`.
    ///
    /// # Returns
    /// `|Σ|^n`, or [`None`] if that doesn't fit in a [`usize`].
    #[inline]
    pub fn total(&self) -> Option<usize> { self.alphabet.len().checked_pow(u32::try_from(self.wheels.len()).ok()?) }
}
impl<A: Clone> Iterator for Words<A> {
    type Item = Vec<A>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let word: Vec<A> = self.wheels.iter().map(|i| self.alphabet[*i].clone()).collect();

        // Turn the odometer. If every wheel rolls over (or there are none), we've seen it all.
        self.done = true;
        for wheel in self.wheels.iter_mut().rev() {
            *wheel += 1;
            if *wheel < self.alphabet.len() {
                self.done = false;
                break;
            }
            *wheel = 0;
        }
        Some(word)
    }
}





/***** TESTS *****/
