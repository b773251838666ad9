//! HMAC token secret recovery CLI
//!
//! Usage: jwtcrack <token> [workerCount] [maxLen] [alphabet] [options]
//!
//! Options:
//!   --alg <ALG>                   Force HS256, HS384 or HS512 instead of reading the header
//!   --signature-encoding <ENC>    base64url (default) or raw
//!   --quiet, -q                   Only log warnings and errors
//!
//! Example:
//!   jwtcrack eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiIxMjM0In0.<sig> 8 5 abcdef0123
//!
//! Prints `Secret: <secret>` or `No secret found` on stdout; progress goes to stderr.

use clap::{CommandFactory, Parser};
use clap::error::ErrorKind;
use jwtcrack_core::constants::{DEFAULT_ALPHABET, DEFAULT_MAX_LEN, DEFAULT_WORKER_COUNT};
use jwtcrack_core::{
    Alphabet, Cracker, HmacAlgorithm, SearchConfig, SearchJob, SearchOutcome, SignatureEncoding,
    TokenOptions,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "jwtcrack")]
#[command(about = "Recover the HMAC secret of a signed token by exhaustive search")]
struct Cli {
    /// Token to attack (header.payload.signature)
    token: String,

    /// Number of worker threads
    #[arg(value_name = "workerCount", default_value_t = DEFAULT_WORKER_COUNT)]
    worker_count: usize,

    /// Longest secret to try
    #[arg(value_name = "maxLen", default_value_t = DEFAULT_MAX_LEN)]
    max_len: usize,

    /// Symbols secrets are built from
    #[arg(value_name = "alphabet", default_value = DEFAULT_ALPHABET)]
    alphabet: String,

    /// Force the HMAC algorithm instead of reading it from the header
    #[arg(long, value_name = "ALG")]
    alg: Option<HmacAlgorithm>,

    /// Transport encoding of the signature segment
    #[arg(long, value_name = "ENC", default_value_t = SignatureEncoding::Base64Url)]
    signature_encoding: SignatureEncoding,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn init_logging(quiet: bool) {
    let default_level = if quiet { "warn" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn parse_args() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                e.exit();
            }
            let _ = e.print();
            if e.kind() == ErrorKind::MissingRequiredArgument {
                eprintln!("\n{}", Cli::command().render_help());
            }
            std::process::exit(1);
        }
    }
}

fn main() {
    let cli = parse_args();
    init_logging(cli.quiet);

    let mut token_options = TokenOptions::default().with_encoding(cli.signature_encoding);
    if let Some(alg) = cli.alg {
        token_options = token_options.with_algorithm(alg);
    }

    let job = match SearchJob::from_token(&cli.token, &token_options) {
        Ok(job) => job,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let alphabet = Alphabet::from_symbols(&cli.alphabet);
    if alphabet.len() != cli.alphabet.chars().count() {
        warn!(
            given = cli.alphabet.chars().count(),
            unique = alphabet.len(),
            "alphabet contains repeated symbols; duplicates ignored"
        );
    }

    let config = SearchConfig::default()
        .with_workers(cli.worker_count)
        .with_max_len(cli.max_len)
        .with_alphabet(alphabet);

    let cracker = match Cracker::new(&job, &config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    info!(
        algorithm = %job.algorithm,
        alphabet = %config.alphabet.as_string(),
        max_len = config.max_len,
        workers = config.worker_count,
        search_space = %cracker.search_space(),
        "searching"
    );

    let report = match cracker.run() {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    info!(
        candidates = report.candidates_tested,
        elapsed_secs = %format!("{:.2}", report.elapsed.as_secs_f64()),
        rate = %format!("{:.0}/s", report.rate()),
        "done"
    );

    match report.outcome {
        SearchOutcome::Found { secret, .. } => println!("Secret: {}", secret),
        SearchOutcome::Exhausted => println!("No secret found"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_token_is_an_error() {
        let err = Cli::try_parse_from(["jwtcrack"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_help_lists_defaults() {
        let help = Cli::command().render_help().to_string();
        assert!(help.contains(&format!("[default: {}]", DEFAULT_WORKER_COUNT)));
        assert!(help.contains(&format!("[default: {}]", DEFAULT_MAX_LEN)));
        assert!(help.contains(DEFAULT_ALPHABET));
        assert!(help.contains("workerCount"));
    }

    #[test]
    fn test_positional_defaults() {
        let cli = Cli::try_parse_from(["jwtcrack", "a.b.c"]).unwrap();
        assert_eq!(cli.token, "a.b.c");
        assert_eq!(cli.worker_count, DEFAULT_WORKER_COUNT);
        assert_eq!(cli.max_len, DEFAULT_MAX_LEN);
        assert_eq!(cli.alphabet, DEFAULT_ALPHABET);
        assert_eq!(cli.alg, None);
        assert_eq!(cli.signature_encoding, SignatureEncoding::Base64Url);
    }

    #[test]
    fn test_positional_overrides_and_flags() {
        let cli = Cli::try_parse_from([
            "jwtcrack",
            "a.b.c",
            "8",
            "3",
            "xyz",
            "--alg",
            "hs512",
            "--signature-encoding",
            "raw",
            "-q",
        ])
        .unwrap();
        assert_eq!(cli.worker_count, 8);
        assert_eq!(cli.max_len, 3);
        assert_eq!(cli.alphabet, "xyz");
        assert_eq!(cli.alg, Some(HmacAlgorithm::Hs512));
        assert_eq!(cli.signature_encoding, SignatureEncoding::Raw);
        assert!(cli.quiet);
    }

    #[test]
    fn test_unsupported_alg_flag() {
        let err = Cli::try_parse_from(["jwtcrack", "a.b.c", "--alg", "RS256"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }
}
