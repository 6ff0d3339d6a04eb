//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `PROOF_*` environment variables.
//! The pool identifier (`PROOF_DLP_ID`) has no default and must be set.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{
    DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SIXGPT_URL, DEFAULT_WIKIPEDIA_URL, MIN_EXAMPLES,
};

/// Proof configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `PROOF_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the submitted archive. Default: `/input`.
    pub input_dir: PathBuf,

    /// Directory the results file is written to. Default: `/output`.
    pub output_dir: PathBuf,

    /// Data liquidity pool the contribution is scored for.
    pub dlp_id: u64,

    /// Minimum dataset size, also the sampling divisor. Default: `50`.
    pub min_examples: usize,

    /// Encyclopedia query endpoint.
    pub wikipedia_url: String,

    /// Base URL of the rating service.
    pub sixgpt_url: String,

    /// Optional API key forwarded to the rating service.
    pub sixgpt_api_key: Option<String>,

    /// Timeout applied to every external call. Default: 30s.
    pub request_timeout: Duration,

    /// Fixed sampler seed; `None` draws from OS entropy.
    pub sample_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("/input"),
            output_dir: PathBuf::from("/output"),
            dlp_id: 0,
            min_examples: MIN_EXAMPLES,
            wikipedia_url: DEFAULT_WIKIPEDIA_URL.to_string(),
            sixgpt_url: DEFAULT_SIXGPT_URL.to_string(),
            sixgpt_api_key: None,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            sample_seed: None,
        }
    }
}

impl Config {
    const ENV_INPUT_DIR: &'static str = "PROOF_INPUT_DIR";
    const ENV_OUTPUT_DIR: &'static str = "PROOF_OUTPUT_DIR";
    const ENV_DLP_ID: &'static str = "PROOF_DLP_ID";
    const ENV_MIN_EXAMPLES: &'static str = "PROOF_MIN_EXAMPLES";
    const ENV_WIKIPEDIA_URL: &'static str = "PROOF_WIKIPEDIA_URL";
    const ENV_SIXGPT_URL: &'static str = "PROOF_SIXGPT_URL";
    const ENV_SIXGPT_API_KEY: &'static str = "PROOF_SIXGPT_API_KEY";
    const ENV_REQUEST_TIMEOUT_SECS: &'static str = "PROOF_REQUEST_TIMEOUT_SECS";
    const ENV_SAMPLE_SEED: &'static str = "PROOF_SAMPLE_SEED";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let dlp_id = match Self::parse_optional_from_env::<u64>(Self::ENV_DLP_ID)? {
            Some(id) => id,
            None => {
                return Err(ConfigError::MissingEnvVar {
                    name: Self::ENV_DLP_ID,
                });
            }
        };

        let input_dir = Self::parse_path_from_env(Self::ENV_INPUT_DIR, defaults.input_dir);
        let output_dir = Self::parse_path_from_env(Self::ENV_OUTPUT_DIR, defaults.output_dir);
        let min_examples = Self::parse_optional_from_env(Self::ENV_MIN_EXAMPLES)?
            .unwrap_or(defaults.min_examples);
        let wikipedia_url =
            Self::parse_string_from_env(Self::ENV_WIKIPEDIA_URL, defaults.wikipedia_url);
        let sixgpt_url = Self::parse_string_from_env(Self::ENV_SIXGPT_URL, defaults.sixgpt_url);
        let sixgpt_api_key = env::var(Self::ENV_SIXGPT_API_KEY)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        let request_timeout = Self::parse_optional_from_env(Self::ENV_REQUEST_TIMEOUT_SECS)?
            .map(Duration::from_secs)
            .unwrap_or(defaults.request_timeout);
        let sample_seed = Self::parse_optional_from_env(Self::ENV_SAMPLE_SEED)?;

        Ok(Self {
            input_dir,
            output_dir,
            dlp_id,
            min_examples,
            wikipedia_url,
            sixgpt_url,
            sixgpt_api_key,
            request_timeout,
            sample_seed,
        })
    }

    /// Validates invariants the pipeline relies on (does not create directories).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_examples == 0 {
            return Err(ConfigError::ZeroMinExamples);
        }

        Self::check_url(Self::ENV_WIKIPEDIA_URL, &self.wikipedia_url)?;
        Self::check_url(Self::ENV_SIXGPT_URL, &self.sixgpt_url)?;

        if !self.input_dir.exists() {
            return Err(ConfigError::PathNotFound {
                path: self.input_dir.clone(),
            });
        }
        if !self.input_dir.is_dir() {
            return Err(ConfigError::NotADirectory {
                path: self.input_dir.clone(),
            });
        }
        if self.output_dir.exists() && !self.output_dir.is_dir() {
            return Err(ConfigError::NotADirectory {
                path: self.output_dir.clone(),
            });
        }

        Ok(())
    }

    fn check_url(name: &'static str, value: &str) -> Result<(), ConfigError> {
        if value.starts_with("http://") || value.starts_with("https://") {
            Ok(())
        } else {
            Err(ConfigError::InvalidUrl {
                name,
                value: value.to_string(),
            })
        }
    }

    fn parse_optional_from_env<T: std::str::FromStr>(
        var_name: &'static str,
    ) -> Result<Option<T>, ConfigError> {
        match env::var(var_name) {
            Ok(value) => {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                trimmed
                    .parse()
                    .map(Some)
                    .map_err(|_| ConfigError::InvalidValue {
                        name: var_name,
                        value,
                    })
            }
            Err(_) => Ok(None),
        }
    }

    fn parse_path_from_env(var_name: &str, default: PathBuf) -> PathBuf {
        env::var(var_name).map(PathBuf::from).unwrap_or(default)
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name).unwrap_or(default)
    }
}
