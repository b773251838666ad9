//! Candidate alphabet
//!
//! An ordered set of symbols. The position of a symbol in the set is its
//! digit value in the mixed-radix candidate space.

/// Ordered, duplicate-free symbol set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Build an alphabet from a string of symbols
    ///
    /// Repeated symbols keep their first position; later repeats are dropped.
    /// An empty input yields an empty alphabet, which `SearchConfig::validate`
    /// rejects.
    pub fn from_symbols(symbols: &str) -> Self {
        let mut unique: Vec<char> = Vec::with_capacity(symbols.len());
        for c in symbols.chars() {
            if !unique.contains(&c) {
                unique.push(c);
            }
        }
        Self { symbols: unique }
    }

    /// Number of symbols (the radix k)
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbol at `index`
    ///
    /// Panics if `index >= len()`; enumerators only produce in-range indices.
    #[inline]
    pub fn symbol(&self, index: usize) -> char {
        self.symbols[index]
    }

    pub fn as_string(&self) -> String {
        self.symbols.iter().collect()
    }
}
