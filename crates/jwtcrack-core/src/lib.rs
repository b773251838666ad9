//! jwtcrack-core - Parallel HMAC secret recovery for compact signed tokens
//!
//! This crate provides functionality to:
//! - Parse `header.payload.signature` tokens and decode their signatures
//! - Enumerate candidate secrets over a bounded alphabet and length range
//! - Search the candidate space on a fixed pool of worker threads, stopping
//!   every worker as soon as one of them reproduces the signature

pub mod app;
pub mod config;
pub mod constants;
pub mod domain;
pub mod error;

// Re-export commonly used types
pub use app::cracker::{Cracker, SearchJob, SearchOutcome, SearchReport, crack};
pub use config::{SearchConfig, TokenOptions};
pub use domain::alphabet::Alphabet;
pub use domain::oracle::{HmacAlgorithm, KeyOracle, MacOracle};
pub use domain::token::{SignatureEncoding, Token};
pub use error::{ConfigError, CrackError, OracleError, TokenError};
