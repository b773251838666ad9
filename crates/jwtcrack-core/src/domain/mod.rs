//! Domain layer - Pure computational logic
//!
//! This module contains the search space, the keyed-hash oracle and token
//! parsing, without any threading.

pub mod alphabet;
pub mod candidate;
pub mod oracle;
pub mod partition;
pub mod token;
