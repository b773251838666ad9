//! Search worker loop
//!
//! One worker walks one partition: poll the coordinator, advance the
//! enumerator, test the candidate, repeat.

use crate::app::coordinator::SearchCoordinator;
use crate::domain::candidate::CandidateEnumerator;
use crate::domain::oracle::KeyOracle;
use crate::error::OracleError;
use std::ops::Range;
use tracing::{debug, warn};

/// Why a worker returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerExit {
    /// This worker published the secret
    Matched,
    /// The worker's subspace holds no match
    Exhausted,
    /// Another worker found the secret (or the search was halted) first
    Stopped,
}

/// Per-worker statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerReport {
    pub worker_id: usize,
    /// Partition of leading-symbol indices
    pub range: Range<usize>,
    pub candidates_tested: u64,
    pub exit: WorkerExit,
}

/// Run one worker to completion
///
/// The coordinator is checked before every step, so once any worker has
/// published, this one stops after at most the candidate it is testing.
/// A backend failure halts the whole search and is returned as an error.
pub fn run_worker<O: KeyOracle>(
    worker_id: usize,
    range: Range<usize>,
    mut enumerator: CandidateEnumerator<'_>,
    mut oracle: O,
    coordinator: &SearchCoordinator,
) -> Result<WorkerReport, OracleError> {
    let mut candidates_tested = 0u64;

    let exit = loop {
        if coordinator.should_stop() {
            break WorkerExit::Stopped;
        }
        if !enumerator.next() {
            break WorkerExit::Exhausted;
        }

        candidates_tested += 1;
        match oracle.test(enumerator.as_bytes()) {
            Ok(true) => {
                if coordinator.try_publish(worker_id, enumerator.as_str()) {
                    break WorkerExit::Matched;
                }
                break WorkerExit::Stopped;
            }
            Ok(false) => {}
            Err(e) => {
                warn!(worker_id, error = %e, "HMAC backend failed, halting search");
                coordinator.halt();
                return Err(e);
            }
        }
    };

    debug!(
        worker_id,
        lo = range.start,
        hi = range.end,
        candidates_tested,
        exit = ?exit,
        "worker finished"
    );

    Ok(WorkerReport {
        worker_id,
        range,
        candidates_tested,
        exit,
    })
}
