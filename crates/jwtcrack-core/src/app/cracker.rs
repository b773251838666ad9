//! Search driver
//!
//! Partitions the alphabet, runs one worker per non-empty partition on a
//! dedicated thread pool, waits for all of them and reports the outcome.

use crate::app::coordinator::SearchCoordinator;
use crate::app::worker::{WorkerReport, run_worker};
use crate::config::{SearchConfig, TokenOptions};
use crate::domain::candidate::CandidateEnumerator;
use crate::domain::oracle::{HmacAlgorithm, KeyOracle, MacOracle};
use crate::domain::partition::{partition, subspace_size};
use crate::domain::token::Token;
use crate::error::{CrackError, TokenError};
use std::time::{Duration, Instant};
use tracing::info;

/// Message, target signature and algorithm of one search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchJob {
    /// Bytes the signature covers (`header.payload`)
    pub message: Vec<u8>,
    /// Raw target signature
    pub signature: Vec<u8>,
    pub algorithm: HmacAlgorithm,
}

impl SearchJob {
    pub fn new(message: Vec<u8>, signature: Vec<u8>, algorithm: HmacAlgorithm) -> Self {
        Self {
            message,
            signature,
            algorithm,
        }
    }

    /// Build a job from a compact token string
    pub fn from_token(token: &str, options: &TokenOptions) -> Result<Self, TokenError> {
        let token = Token::parse(token)?;
        Ok(Self {
            message: token.signing_input(),
            signature: token.decode_signature(options.encoding)?,
            algorithm: token.algorithm(options)?,
        })
    }
}

/// Final outcome of a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found { secret: String, worker_id: usize },
    Exhausted,
}

impl SearchOutcome {
    pub fn secret(&self) -> Option<&str> {
        match self {
            Self::Found { secret, .. } => Some(secret),
            Self::Exhausted => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }
}

/// Result of a completed search
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    /// One entry per launched worker, in partition order
    pub workers: Vec<WorkerReport>,
    pub candidates_tested: u64,
    pub elapsed: Duration,
}

impl SearchReport {
    /// Candidates per second (0 if the search took no measurable time)
    pub fn rate(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.candidates_tested as f64 / secs
        } else {
            0.0
        }
    }
}

/// A search that has not been run yet
///
/// `run` consumes the cracker, so a search is executed at most once.
pub struct Cracker<'a> {
    job: &'a SearchJob,
    config: &'a SearchConfig,
}

impl<'a> Cracker<'a> {
    /// Validate the configuration and prepare a search
    pub fn new(job: &'a SearchJob, config: &'a SearchConfig) -> Result<Self, CrackError> {
        config.validate()?;
        Ok(Self { job, config })
    }

    /// Total number of candidates across all partitions
    pub fn search_space(&self) -> u128 {
        subspace_size(
            self.config.alphabet.len(),
            self.config.alphabet.len(),
            self.config.max_len,
        )
    }

    /// Run the search to completion
    pub fn run(self) -> Result<SearchReport, CrackError> {
        let job = self.job;
        self.run_with(|_| MacOracle::new(job.algorithm, &job.message, &job.signature))
    }

    /// Run the search with one oracle per worker built by `oracle_for`
    fn run_with<O, F>(self, oracle_for: F) -> Result<SearchReport, CrackError>
    where
        O: KeyOracle,
        F: Fn(usize) -> O + Sync,
    {
        let config = self.config;
        let alphabet = &config.alphabet;
        let k = alphabet.len();

        // Workers beyond k would only get empty ranges
        let partitions: Vec<_> = partition(k, config.worker_count.min(k))
            .into_iter()
            .filter(|range| !range.is_empty())
            .collect();

        for (worker_id, range) in partitions.iter().enumerate() {
            info!(
                worker_id,
                lo = range.start,
                hi = range.end,
                first = %alphabet.symbol(range.start),
                last = %alphabet.symbol(range.end - 1),
                candidates = %subspace_size(range.len(), k, config.max_len),
                "starting worker"
            );
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(partitions.len())
            .thread_name(|i| format!("jwtcrack-worker-{}", i))
            .build()?;

        let coordinator = SearchCoordinator::new();
        let start = Instant::now();

        // One broadcast task per pool thread; returns after every worker ends
        let results = pool.broadcast(|ctx| {
            let worker_id = ctx.index();
            let range = partitions[worker_id].clone();
            run_worker(
                worker_id,
                range.clone(),
                CandidateEnumerator::new(alphabet, range, config.max_len),
                oracle_for(worker_id),
                &coordinator,
            )
        });

        let elapsed = start.elapsed();
        let workers = results.into_iter().collect::<Result<Vec<_>, _>>()?;
        let candidates_tested = workers.iter().map(|w| w.candidates_tested).sum();

        let outcome = match coordinator.secret() {
            Some(found) => SearchOutcome::Found {
                secret: found.secret.clone(),
                worker_id: found.worker_id,
            },
            None => SearchOutcome::Exhausted,
        };

        info!(
            found = outcome.is_found(),
            candidates_tested,
            elapsed_ms = elapsed.as_millis() as u64,
            "search completed"
        );

        Ok(SearchReport {
            outcome,
            workers,
            candidates_tested,
            elapsed,
        })
    }
}

/// Validate, run and report a search in one call
pub fn crack(job: &SearchJob, config: &SearchConfig) -> Result<SearchReport, CrackError> {
    Cracker::new(job, config)?.run()
}
