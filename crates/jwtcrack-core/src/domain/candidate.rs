//! Candidate secret enumeration
//!
//! A mixed-radix counter over alphabet indices. The leading digit is bounded
//! by the worker's partition, every other digit ranges over the whole
//! alphabet, and the last digit varies fastest. When the leading digit
//! overflows the counter grows by one digit, until the maximum length is
//! reached.

use crate::constants::MAX_SYMBOL_WIDTH;
use crate::domain::alphabet::Alphabet;
use std::ops::Range;

/// Enumerates candidate secrets whose leading symbol lies in one partition
///
/// Candidates are produced in `(length, lexicographic index)` order. The index
/// vector and the rendered key are reused across calls.
pub struct CandidateEnumerator<'a> {
    alphabet: &'a Alphabet,
    leading: Range<usize>,
    max_len: usize,
    indices: Vec<usize>,
    key: String,
    exhausted: bool,
}

impl<'a> CandidateEnumerator<'a> {
    /// Create an enumerator positioned before the first candidate
    ///
    /// # Arguments
    /// * `alphabet` - Symbol set (radix k)
    /// * `leading` - Partition bounding the first symbol
    /// * `max_len` - Longest candidate to produce
    pub fn new(alphabet: &'a Alphabet, leading: Range<usize>, max_len: usize) -> Self {
        let exhausted = leading.is_empty() || max_len == 0 || leading.end > alphabet.len();
        Self {
            alphabet,
            leading,
            max_len,
            indices: Vec::with_capacity(max_len),
            key: String::with_capacity(max_len * MAX_SYMBOL_WIDTH),
            exhausted,
        }
    }

    /// Advance to the next candidate
    ///
    /// Returns `false` once the subspace is exhausted, and on every call after
    /// that.
    pub fn next(&mut self) -> bool {
        if self.exhausted {
            return false;
        }

        if self.indices.is_empty() {
            self.indices.push(self.leading.start);
            self.render();
            return true;
        }

        let k = self.alphabet.len();
        for pos in (0..self.indices.len()).rev() {
            let (base, bound) = if pos == 0 {
                (self.leading.start, self.leading.end)
            } else {
                (0, k)
            };

            self.indices[pos] += 1;
            if self.indices[pos] < bound {
                self.render();
                return true;
            }
            self.indices[pos] = base;
        }

        // Leading digit wrapped: every digit is back at its base
        if self.indices.len() == self.max_len {
            self.exhausted = true;
            return false;
        }
        self.indices.push(0);
        self.render();
        true
    }

    /// Current candidate as alphabet indices
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Current candidate rendered as a string
    pub fn as_str(&self) -> &str {
        &self.key
    }

    /// Current candidate as key bytes (UTF-8 of the symbols)
    pub fn as_bytes(&self) -> &[u8] {
        self.key.as_bytes()
    }

    fn render(&mut self) {
        self.key.clear();
        for &i in &self.indices {
            self.key.push(self.alphabet.symbol(i));
        }
    }
}
