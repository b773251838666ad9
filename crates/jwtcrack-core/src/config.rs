//! Search and token-decoding configuration

use crate::constants::{DEFAULT_ALPHABET, DEFAULT_MAX_LEN, DEFAULT_WORKER_COUNT, MAX_SECRET_LEN};
use crate::domain::alphabet::Alphabet;
use crate::domain::oracle::HmacAlgorithm;
use crate::domain::token::SignatureEncoding;
use crate::error::ConfigError;

/// Configuration for a brute-force search
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Symbols candidates are built from
    pub alphabet: Alphabet,
    /// Longest candidate to try (in symbols)
    pub max_len: usize,
    /// Number of alphabet partitions (one worker per non-empty partition)
    pub worker_count: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::from_symbols(DEFAULT_ALPHABET),
            max_len: DEFAULT_MAX_LEN,
            worker_count: DEFAULT_WORKER_COUNT,
        }
    }
}

impl SearchConfig {
    /// Set the number of workers
    pub fn with_workers(mut self, worker_count: usize) -> Self {
        self.worker_count = worker_count;
        self
    }

    /// Set the maximum candidate length
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    /// Set the alphabet
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Reject configurations that cannot describe a search space
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.alphabet.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }
        if self.worker_count == 0 {
            return Err(ConfigError::ZeroWorkers);
        }
        if self.max_len == 0 {
            return Err(ConfigError::ZeroMaxLen);
        }
        if self.max_len > MAX_SECRET_LEN {
            return Err(ConfigError::MaxLenTooLarge {
                max_len: self.max_len,
                limit: MAX_SECRET_LEN,
            });
        }
        Ok(())
    }
}

/// How the signature segment and algorithm are obtained from a token
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenOptions {
    /// Transport encoding of the signature segment
    pub encoding: SignatureEncoding,
    /// Algorithm override (None = read `alg` from the header)
    pub algorithm: Option<HmacAlgorithm>,
}

impl TokenOptions {
    /// Set the signature encoding
    pub fn with_encoding(mut self, encoding: SignatureEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Force a specific algorithm instead of reading the header
    pub fn with_algorithm(mut self, algorithm: HmacAlgorithm) -> Self {
        self.algorithm = Some(algorithm);
        self
    }
}
