//! Compact token parsing
//!
//! Splits `header.payload.signature` tokens into the signing input and the
//! target signature, and resolves the HMAC algorithm from the header.

use crate::config::TokenOptions;
use crate::constants::{SEGMENT_SEPARATOR, TOKEN_SEGMENTS};
use crate::domain::oracle::{HmacAlgorithm, MacOracle};
use crate::error::{OracleError, TokenError};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Transport encoding of the signature segment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SignatureEncoding {
    /// URL-safe base64, padding optional (standard for JWS)
    #[default]
    Base64Url,
    /// Compare the segment's text bytes as-is
    Raw,
}

impl fmt::Display for SignatureEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base64Url => f.write_str("base64url"),
            Self::Raw => f.write_str("raw"),
        }
    }
}

impl FromStr for SignatureEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "base64url" | "b64url" => Ok(Self::Base64Url),
            "raw" => Ok(Self::Raw),
            other => Err(format!("unknown signature encoding: {}", other)),
        }
    }
}

/// JOSE header fields relevant to the search
#[derive(Debug, Deserialize)]
struct JoseHeader {
    alg: Option<String>,
}

/// A token split into its three segments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    header: &'a str,
    payload: &'a str,
    signature: &'a str,
}

impl<'a> Token<'a> {
    /// Split a compact token into header, payload and signature
    ///
    /// Anything other than exactly three segments, or an empty signature, is
    /// rejected.
    pub fn parse(token: &'a str) -> Result<Self, TokenError> {
        let segments: Vec<&str> = token.trim().split(SEGMENT_SEPARATOR).collect();
        if segments.len() != TOKEN_SEGMENTS {
            return Err(TokenError::Malformed {
                segments: segments.len(),
            });
        }
        if segments[2].is_empty() {
            return Err(TokenError::EmptySignature);
        }

        Ok(Self {
            header: segments[0],
            payload: segments[1],
            signature: segments[2],
        })
    }

    pub fn header(&self) -> &'a str {
        self.header
    }

    pub fn payload(&self) -> &'a str {
        self.payload
    }

    pub fn signature(&self) -> &'a str {
        self.signature
    }

    /// Bytes covered by the signature: `header.payload`
    pub fn signing_input(&self) -> Vec<u8> {
        let mut input = Vec::with_capacity(self.header.len() + 1 + self.payload.len());
        input.extend_from_slice(self.header.as_bytes());
        input.push(SEGMENT_SEPARATOR as u8);
        input.extend_from_slice(self.payload.as_bytes());
        input
    }

    /// Decode the signature segment into raw bytes
    pub fn decode_signature(&self, encoding: SignatureEncoding) -> Result<Vec<u8>, TokenError> {
        match encoding {
            SignatureEncoding::Base64Url => decode_base64url(self.signature)
                .map_err(TokenError::InvalidSignatureEncoding),
            SignatureEncoding::Raw => Ok(self.signature.as_bytes().to_vec()),
        }
    }

    /// Read the `alg` field of the header
    pub fn header_algorithm(&self) -> Result<HmacAlgorithm, TokenError> {
        let json = decode_base64url(self.header).map_err(TokenError::InvalidHeader)?;
        let header: JoseHeader =
            serde_json::from_slice(&json).map_err(|e| TokenError::InvalidHeader(e.to_string()))?;
        header.alg.ok_or(TokenError::MissingAlgorithm)?.parse()
    }

    /// Resolve the algorithm: explicit override first, then the header
    pub fn algorithm(&self, options: &TokenOptions) -> Result<HmacAlgorithm, TokenError> {
        match options.algorithm {
            Some(algorithm) => Ok(algorithm),
            None => self.header_algorithm(),
        }
    }
}

fn decode_base64url(segment: &str) -> Result<Vec<u8>, String> {
    URL_SAFE_NO_PAD
        .decode(segment.trim_end_matches('='))
        .map_err(|e| e.to_string())
}

/// Build a signed compact token from header and payload JSON
///
/// Both JSON documents are base64url-encoded; the signature is the tag of
/// `header.payload` under `secret`.
pub fn sign_compact(
    header_json: &str,
    payload_json: &str,
    secret: &[u8],
    algorithm: HmacAlgorithm,
) -> Result<String, OracleError> {
    let header = URL_SAFE_NO_PAD.encode(header_json);
    let payload = URL_SAFE_NO_PAD.encode(payload_json);
    let signing_input = format!("{}{}{}", header, SEGMENT_SEPARATOR, payload);

    let tag = MacOracle::new(algorithm, signing_input.as_bytes(), &[]).compute(secret)?;
    Ok(format!(
        "{}{}{}",
        signing_input,
        SEGMENT_SEPARATOR,
        URL_SAFE_NO_PAD.encode(tag)
    ))
}
