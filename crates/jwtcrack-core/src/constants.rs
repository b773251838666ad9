//! Search defaults and HMAC parameters

// =============================================================================
// Search defaults
// =============================================================================

/// Default number of worker threads
pub const DEFAULT_WORKER_COUNT: usize = 4;

/// Default maximum secret length (in symbols)
pub const DEFAULT_MAX_LEN: usize = 6;

/// Longest secret the search accepts
pub const MAX_SECRET_LEN: usize = 64;

/// Default alphabet: uppercase, lowercase and digits (62 symbols)
pub const DEFAULT_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

// =============================================================================
// HMAC parameters
// =============================================================================

/// Largest tag produced by a supported algorithm (HS512)
pub const MAX_TAG_SIZE: usize = 64;

/// Maximum UTF-8 width of a single alphabet symbol
pub const MAX_SYMBOL_WIDTH: usize = 4;

// =============================================================================
// Token format
// =============================================================================

/// Segment separator in compact tokens
pub const SEGMENT_SEPARATOR: char = '.';

/// Number of segments in a signed compact token
pub const TOKEN_SEGMENTS: usize = 3;
