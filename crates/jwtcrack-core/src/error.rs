//! Error types for secret recovery

use thiserror::Error;

/// Top-level error returned by the search driver
#[derive(Error, Debug)]
pub enum CrackError {
    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HMAC backend error: {0}")]
    Oracle(#[from] OracleError),

    #[error("Failed to start worker pool: {0}")]
    ThreadPool(String),
}

/// Token parsing and decoding errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Malformed token: expected 3 dot-separated segments, found {segments}")]
    Malformed { segments: usize },

    #[error("Malformed token: signature segment is empty")]
    EmptySignature,

    #[error("Signature is not valid base64url: {0}")]
    InvalidSignatureEncoding(String),

    #[error("Header is not valid base64url-encoded JSON: {0}")]
    InvalidHeader(String),

    #[error("Header has no \"alg\" field")]
    MissingAlgorithm,

    #[error("Unsupported algorithm: {0} (only HS256, HS384 and HS512 are supported)")]
    UnsupportedAlgorithm(String),
}

/// Search configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Alphabet must contain at least one symbol")]
    EmptyAlphabet,

    #[error("Worker count must be greater than 0")]
    ZeroWorkers,

    #[error("Maximum secret length must be greater than 0")]
    ZeroMaxLen,

    #[error("Maximum secret length {max_len} exceeds the limit of {limit}")]
    MaxLenTooLarge { max_len: usize, limit: usize },
}

/// Keyed-hash backend failures
///
/// A signature mismatch is never an error; only failures of the primitive
/// itself end up here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OracleError {
    #[error("{0}")]
    Backend(String),
}

impl From<hmac::digest::InvalidLength> for OracleError {
    fn from(err: hmac::digest::InvalidLength) -> Self {
        OracleError::Backend(format!("rejected key: {}", err))
    }
}

impl From<rayon::ThreadPoolBuildError> for CrackError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        CrackError::ThreadPool(err.to_string())
    }
}
