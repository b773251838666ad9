//! Keyed-hash oracle
//!
//! Computes HMAC tags of a fixed message under candidate keys and compares
//! them with the target signature. The primitive itself comes from the
//! RustCrypto `hmac` and `sha2` crates.

use crate::constants::MAX_TAG_SIZE;
use crate::error::{OracleError, TokenError};
use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};
use std::fmt;
use std::str::FromStr;

/// Supported HMAC algorithms (JOSE `alg` names)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HmacAlgorithm {
    #[default]
    Hs256,
    Hs384,
    Hs512,
}

impl HmacAlgorithm {
    /// Tag length in bytes
    pub const fn tag_len(self) -> usize {
        match self {
            Self::Hs256 => 32,
            Self::Hs384 => 48,
            Self::Hs512 => 64,
        }
    }

    /// JOSE name of the algorithm
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hs256 => "HS256",
            Self::Hs384 => "HS384",
            Self::Hs512 => "HS512",
        }
    }
}

impl fmt::Display for HmacAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HmacAlgorithm {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "HS256" => Ok(Self::Hs256),
            "HS384" => Ok(Self::Hs384),
            "HS512" => Ok(Self::Hs512),
            _ => Err(TokenError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

/// Write the tag of `message` under `key` into `out`, returning its length
fn mac_into<M>(key: &[u8], message: &[u8], out: &mut [u8]) -> Result<usize, OracleError>
where
    M: Mac + KeyInit,
{
    let mut mac = <M as Mac>::new_from_slice(key)?;
    mac.update(message);
    let tag = mac.finalize().into_bytes();
    out[..tag.len()].copy_from_slice(&tag);
    Ok(tag.len())
}

/// Decides whether a candidate key reproduces the target signature
///
/// An `Err` is a backend failure, not a mismatch; the search halts on it.
pub trait KeyOracle {
    fn test(&mut self, key: &[u8]) -> Result<bool, OracleError>;
}

/// HMAC comparison oracle for one worker
///
/// The message and target are borrowed for the duration of the search; the
/// tag buffer is owned and sized once to the largest supported tag.
pub struct MacOracle<'a> {
    algorithm: HmacAlgorithm,
    message: &'a [u8],
    target: &'a [u8],
    tag: [u8; MAX_TAG_SIZE],
}

impl<'a> MacOracle<'a> {
    pub fn new(algorithm: HmacAlgorithm, message: &'a [u8], target: &'a [u8]) -> Self {
        Self {
            algorithm,
            message,
            target,
            tag: [0u8; MAX_TAG_SIZE],
        }
    }

    /// Compute the tag of the fixed message under `key`
    pub fn compute(&self, key: &[u8]) -> Result<Vec<u8>, OracleError> {
        let mut out = [0u8; MAX_TAG_SIZE];
        let len = tag_into(self.algorithm, key, self.message, &mut out)?;
        Ok(out[..len].to_vec())
    }

}

impl KeyOracle for MacOracle<'_> {
    /// A target of the wrong length is an ordinary mismatch.
    fn test(&mut self, key: &[u8]) -> Result<bool, OracleError> {
        if self.target.len() != self.algorithm.tag_len() {
            return Ok(false);
        }
        let len = tag_into(self.algorithm, key, self.message, &mut self.tag)?;
        Ok(self.tag[..len] == *self.target)
    }
}

fn tag_into(
    algorithm: HmacAlgorithm,
    key: &[u8],
    message: &[u8],
    out: &mut [u8; MAX_TAG_SIZE],
) -> Result<usize, OracleError> {
    match algorithm {
        HmacAlgorithm::Hs256 => mac_into::<Hmac<Sha256>>(key, message, out),
        HmacAlgorithm::Hs384 => mac_into::<Hmac<Sha384>>(key, message, out),
        HmacAlgorithm::Hs512 => mac_into::<Hmac<Sha512>>(key, message, out),
    }
}
