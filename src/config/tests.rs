use super::*;
use serial_test::serial;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, value) in vars {
        unsafe { env::set_var(key, value) };
    }

    let result = f();

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, _) in vars {
        unsafe { env::remove_var(key) };
    }

    result
}

fn clear_proof_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe {
        env::remove_var("PROOF_INPUT_DIR");
        env::remove_var("PROOF_OUTPUT_DIR");
        env::remove_var("PROOF_DLP_ID");
        env::remove_var("PROOF_MIN_EXAMPLES");
        env::remove_var("PROOF_WIKIPEDIA_URL");
        env::remove_var("PROOF_SIXGPT_URL");
        env::remove_var("PROOF_SIXGPT_API_KEY");
        env::remove_var("PROOF_REQUEST_TIMEOUT_SECS");
        env::remove_var("PROOF_SAMPLE_SEED");
    }
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.input_dir, PathBuf::from("/input"));
    assert_eq!(config.output_dir, PathBuf::from("/output"));
    assert_eq!(config.min_examples, 50);
    assert_eq!(config.wikipedia_url, "https://en.wikipedia.org/w/api.php");
    assert_eq!(config.sixgpt_url, "https://api.sixgpt.xyz/v1-sixgpt");
    assert!(config.sixgpt_api_key.is_none());
    assert_eq!(config.request_timeout, Duration::from_secs(30));
    assert!(config.sample_seed.is_none());
}

#[test]
#[serial]
fn test_from_env_requires_dlp_id() {
    clear_proof_env();

    let err = Config::from_env().unwrap_err();
    assert!(matches!(
        err,
        ConfigError::MissingEnvVar {
            name: "PROOF_DLP_ID"
        }
    ));
}

#[test]
#[serial]
fn test_from_env_with_defaults() {
    clear_proof_env();

    with_env_vars(&[("PROOF_DLP_ID", "7")], || {
        let config = Config::from_env().expect("should parse with defaults");

        assert_eq!(config.dlp_id, 7);
        assert_eq!(config.min_examples, 50);
        assert_eq!(config.input_dir, PathBuf::from("/input"));
    });
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_proof_env();

    with_env_vars(
        &[
            ("PROOF_DLP_ID", "42"),
            ("PROOF_INPUT_DIR", "/tmp/in"),
            ("PROOF_OUTPUT_DIR", "/tmp/out"),
            ("PROOF_MIN_EXAMPLES", "10"),
            ("PROOF_WIKIPEDIA_URL", "http://localhost:9000/api.php"),
            ("PROOF_SIXGPT_URL", "http://localhost:9001"),
            ("PROOF_SIXGPT_API_KEY", "  secret  "),
            ("PROOF_REQUEST_TIMEOUT_SECS", "5"),
            ("PROOF_SAMPLE_SEED", "1337"),
        ],
        || {
            let config = Config::from_env().expect("should parse");

            assert_eq!(config.dlp_id, 42);
            assert_eq!(config.input_dir, PathBuf::from("/tmp/in"));
            assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
            assert_eq!(config.min_examples, 10);
            assert_eq!(config.wikipedia_url, "http://localhost:9000/api.php");
            assert_eq!(config.sixgpt_url, "http://localhost:9001");
            assert_eq!(config.sixgpt_api_key.as_deref(), Some("secret"));
            assert_eq!(config.request_timeout, Duration::from_secs(5));
            assert_eq!(config.sample_seed, Some(1337));
        },
    );
}

#[test]
#[serial]
fn test_from_env_invalid_dlp_id() {
    clear_proof_env();

    with_env_vars(&[("PROOF_DLP_ID", "not-a-number")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                name: "PROOF_DLP_ID",
                ..
            }
        ));
    });
}

#[test]
#[serial]
fn test_from_env_invalid_min_examples() {
    clear_proof_env();

    with_env_vars(
        &[("PROOF_DLP_ID", "1"), ("PROOF_MIN_EXAMPLES", "-3")],
        || {
            let err = Config::from_env().unwrap_err();
            assert!(err.to_string().contains("PROOF_MIN_EXAMPLES"));
        },
    );
}

#[test]
#[serial]
fn test_from_env_blank_api_key_is_none() {
    clear_proof_env();

    with_env_vars(
        &[("PROOF_DLP_ID", "1"), ("PROOF_SIXGPT_API_KEY", "   ")],
        || {
            let config = Config::from_env().expect("should parse");
            assert!(config.sixgpt_api_key.is_none());
        },
    );
}

#[test]
fn test_validate_rejects_zero_min_examples() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        input_dir: dir.path().to_path_buf(),
        min_examples: 0,
        ..Default::default()
    };

    assert!(matches!(
        config.validate(),
        Err(ConfigError::ZeroMinExamples)
    ));
}

#[test]
fn test_validate_rejects_bad_url() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        input_dir: dir.path().to_path_buf(),
        sixgpt_url: "ftp://example.com".to_string(),
        ..Default::default()
    };

    let err = config.validate().unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidUrl {
            name: "PROOF_SIXGPT_URL",
            ..
        }
    ));
}

#[test]
fn test_validate_missing_input_dir() {
    let config = Config {
        input_dir: PathBuf::from("/definitely/not/here/proof-input"),
        ..Default::default()
    };

    assert!(matches!(
        config.validate(),
        Err(ConfigError::PathNotFound { .. })
    ));
}

#[test]
fn test_validate_input_dir_is_file() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let config = Config {
        input_dir: file.path().to_path_buf(),
        ..Default::default()
    };

    assert!(matches!(
        config.validate(),
        Err(ConfigError::NotADirectory { .. })
    ));
}

#[test]
fn test_validate_ok() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        input_dir: dir.path().to_path_buf(),
        output_dir: dir.path().join("out"),
        ..Default::default()
    };

    assert!(config.validate().is_ok());
}
