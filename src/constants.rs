//! Cross-cutting, shared constants.
//!
//! Scoring weights and thresholds live here so the engine, the aggregator and
//! the configuration layer agree on the same defaults.

/// Minimum number of records a dataset needs before it is sampled at all.
///
/// Also the sampling divisor: a dataset of `n` records is verified on
/// `n / MIN_EXAMPLES` records.
pub const MIN_EXAMPLES: usize = 50;

/// Per-record word-set similarity below which verification aborts.
pub const AUTHENTICITY_THRESHOLD: f64 = 0.5;

/// A contribution is valid only when its final score is strictly above this.
pub const VALIDITY_THRESHOLD: f64 = 0.1;

/// Dataset size at which the size factor of the score reaches `1.0`.
pub const SCORE_SIZE_SCALE: f64 = 10_000.0;

pub const QUALITY_WEIGHT: f64 = 0.8;
pub const UNIQUENESS_WEIGHT: f64 = 0.2;

/// Name of the entry every submitted archive must contain.
pub const REQUIRED_ARCHIVE_ENTRY: &str = "examples.data";

/// Name of the file the binary writes the proof response to.
pub const RESULTS_FILENAME: &str = "results.json";

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_WIKIPEDIA_URL: &str = "https://en.wikipedia.org/w/api.php";
pub const DEFAULT_SIXGPT_URL: &str = "https://api.sixgpt.xyz/v1-sixgpt";

/// User-Agent sent to the encyclopedia API, which throttles anonymous clients.
pub const USER_AGENT: &str = concat!(
    "sixgpt-proof/",
    env!("CARGO_PKG_VERSION"),
    " (proof-of-contribution verifier)"
);
