//! Application layer - Use case implementations
//!
//! This module coordinates the domain layer across worker threads.

pub mod coordinator;
pub mod cracker;
pub mod worker;
