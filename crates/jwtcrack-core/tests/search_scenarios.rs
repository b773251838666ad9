//! End-to-end search scenarios
//!
//! Tokens are signed in-process with a known secret, then recovered through
//! the public `crack` entry point.

use jwtcrack_core::app::worker::WorkerExit;
use jwtcrack_core::domain::token::sign_compact;
use jwtcrack_core::{
    Alphabet, CrackError, HmacAlgorithm, SearchConfig, SearchJob, SearchOutcome,
    SignatureEncoding, TokenError, TokenOptions, crack,
};
use rand::Rng;

// =============================================================================
// Helpers
// =============================================================================

const HEADER_HS256: &str = r#"{"alg":"HS256","typ":"JWT"}"#;
const PAYLOAD: &str = r#"{"sub":"1234"}"#;

fn signed_token(header: &str, secret: &str, algorithm: HmacAlgorithm) -> String {
    sign_compact(header, PAYLOAD, secret.as_bytes(), algorithm).unwrap()
}

fn config(alphabet: &str, max_len: usize, workers: usize) -> SearchConfig {
    SearchConfig::default()
        .with_alphabet(Alphabet::from_symbols(alphabet))
        .with_max_len(max_len)
        .with_workers(workers)
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_recovers_two_symbol_secret() {
    let token = signed_token(HEADER_HS256, "ab", HmacAlgorithm::Hs256);
    let job = SearchJob::from_token(&token, &TokenOptions::default()).unwrap();

    let report = crack(&job, &config("ab", 2, 4)).unwrap();
    assert_eq!(report.outcome.secret(), Some("ab"));
}

#[test]
fn test_reports_not_found_when_alphabet_misses_secret() {
    let token = signed_token(HEADER_HS256, "ab", HmacAlgorithm::Hs256);
    let job = SearchJob::from_token(&token, &TokenOptions::default()).unwrap();

    let report = crack(&job, &config("xy", 2, 4)).unwrap();
    assert_eq!(report.outcome, SearchOutcome::Exhausted);
    assert!(report.workers.iter().all(|w| w.exit == WorkerExit::Exhausted));
}

#[test]
fn test_two_segment_token_is_rejected_before_search() {
    let token = signed_token(HEADER_HS256, "ab", HmacAlgorithm::Hs256);
    let truncated = token.rsplit_once('.').unwrap().0;

    let result = SearchJob::from_token(truncated, &TokenOptions::default());
    assert_eq!(result, Err(TokenError::Malformed { segments: 2 }));
}

#[test]
fn test_recovers_hs384_and_hs512_secrets() {
    for (header, algorithm) in [
        (r#"{"alg":"HS384","typ":"JWT"}"#, HmacAlgorithm::Hs384),
        (r#"{"alg":"HS512","typ":"JWT"}"#, HmacAlgorithm::Hs512),
    ] {
        let token = signed_token(header, "c1", algorithm);
        let job = SearchJob::from_token(&token, &TokenOptions::default()).unwrap();
        assert_eq!(job.algorithm, algorithm);

        let report = crack(&job, &config("abc123", 2, 3)).unwrap();
        assert_eq!(report.outcome.secret(), Some("c1"), "{}", algorithm);
    }
}

#[test]
fn test_raw_encoding_never_matches_base64_signature() {
    let token = signed_token(HEADER_HS256, "ab", HmacAlgorithm::Hs256);
    let options = TokenOptions::default().with_encoding(SignatureEncoding::Raw);
    let job = SearchJob::from_token(&token, &options).unwrap();

    // 43 text bytes against a 32-byte tag
    assert_eq!(job.signature.len(), 43);
    let report = crack(&job, &config("ab", 2, 2)).unwrap();
    assert_eq!(report.outcome, SearchOutcome::Exhausted);
}

#[test]
fn test_asymmetric_header_is_rejected() {
    let token = signed_token(r#"{"alg":"ES256"}"#, "ab", HmacAlgorithm::Hs256);
    let result = SearchJob::from_token(&token, &TokenOptions::default());
    assert_eq!(
        result,
        Err(TokenError::UnsupportedAlgorithm("ES256".to_string()))
    );
}

#[test]
fn test_invalid_config_surfaces_as_error() {
    let token = signed_token(HEADER_HS256, "ab", HmacAlgorithm::Hs256);
    let job = SearchJob::from_token(&token, &TokenOptions::default()).unwrap();

    let result = crack(&job, &config("", 2, 2));
    assert!(matches!(result, Err(CrackError::Config(_))));
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn test_outcome_independent_of_worker_count() {
    let alphabet = "abcdef";
    let mut rng = rand::thread_rng();

    for _ in 0..4 {
        let len = rng.gen_range(1..=3);
        let secret: String = (0..len)
            .map(|_| alphabet.as_bytes()[rng.gen_range(0..alphabet.len())] as char)
            .collect();
        let token = signed_token(HEADER_HS256, &secret, HmacAlgorithm::Hs256);
        let job = SearchJob::from_token(&token, &TokenOptions::default()).unwrap();

        for workers in 1..=8 {
            let report = crack(&job, &config(alphabet, 3, workers)).unwrap();
            assert_eq!(
                report.outcome.secret(),
                Some(secret.as_str()),
                "workers = {}",
                workers
            );
        }
    }
}

#[test]
fn test_not_found_independent_of_worker_count() {
    let token = signed_token(HEADER_HS256, "zzzz", HmacAlgorithm::Hs256);
    let job = SearchJob::from_token(&token, &TokenOptions::default()).unwrap();

    for workers in 1..=6 {
        let report = crack(&job, &config("abc", 3, workers)).unwrap();
        assert_eq!(report.outcome, SearchOutcome::Exhausted);
        // Every candidate is tested exactly once across all workers
        assert_eq!(report.candidates_tested, 3 + 9 + 27);
    }
}

#[test]
fn test_siblings_stop_after_match() {
    // Secret is the very first candidate of the first partition
    let token = signed_token(HEADER_HS256, "a", HmacAlgorithm::Hs256);
    let job = SearchJob::from_token(&token, &TokenOptions::default()).unwrap();

    let report = crack(&job, &config("abcdefgh", 7, 4)).unwrap();
    assert_eq!(report.outcome.secret(), Some("a"));

    for worker in &report.workers {
        match worker.exit {
            WorkerExit::Matched => assert_eq!(worker.worker_id, 0),
            WorkerExit::Stopped => {}
            WorkerExit::Exhausted => {
                panic!("worker {} searched its whole subspace", worker.worker_id)
            }
        }
    }
}
