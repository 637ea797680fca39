//! Configuration layering tests.
//!
//! These touch process-wide environment variables, so every test is
//! serialized.

use std::env;
use std::fs;

use serial_test::serial;
use tempfile::TempDir;

use hotel::config::{Config, ConfigBuilder, OutputFormat};
use hotel::LogLevel;

const HOTEL_VARS: [&str; 4] = [
    "HOTEL_MAXIMUM_LOCK_WAIT_SECONDS",
    "HOTEL_DISABLE_AUTOINIT",
    "HOTEL_OUTPUT_FORMAT",
    "HOTEL_LOG_MODE",
];

fn clear_env() {
    for var in HOTEL_VARS {
        env::remove_var(var);
    }
}

fn write(dir: &TempDir, name: &str, contents: &str) {
    fs::write(dir.path().join(name), contents).unwrap();
}

#[test]
#[serial]
fn test_full_precedence_chain() {
    clear_env();
    let data_dir = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();

    write(
        &data_dir,
        "config.yaml",
        "maximum_lock_wait_seconds: 1\ndisable_autoinit: true\noutput_format: csv\nlog_level: quiet\n",
    );
    write(&project, "hotel.yaml", "maximum_lock_wait_seconds: 2\noutput_format: tsv\n");
    write(&project, "hotel.local.yaml", "maximum_lock_wait_seconds: 3\n");
    env::set_var("HOTEL_OUTPUT_FORMAT", "json");

    let result = ConfigBuilder::new()
        .with_working_dir(project.path())
        .with_data_dir(data_dir.path())
        .with_config(Config {
            log_level: Some(LogLevel::Verbose),
            ..Default::default()
        })
        .build();
    clear_env();
    let config = result.unwrap();

    assert_eq!(config.maximum_lock_wait_seconds, Some(3));
    assert_eq!(config.disable_autoinit, Some(true));
    assert_eq!(config.output_format, Some(OutputFormat::Json));
    assert_eq!(config.log_level, Some(LogLevel::Verbose));
}

#[test]
#[serial]
fn test_project_file_found_from_subdirectory() {
    clear_env();
    let data_dir = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    let nested = project.path().join("a/b/c");
    fs::create_dir_all(&nested).unwrap();
    write(&project, "hotel.yaml", "output_format: tsv\n");

    let config = ConfigBuilder::new()
        .with_working_dir(&nested)
        .with_data_dir(data_dir.path())
        .build()
        .unwrap();

    assert_eq!(config.output_format(), OutputFormat::Tsv);
}

#[test]
#[serial]
fn test_unknown_key_in_file_is_an_error() {
    clear_env();
    let data_dir = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    write(&project, "hotel.yaml", "max_guests: 4\n");

    let result = ConfigBuilder::new()
        .with_working_dir(project.path())
        .with_data_dir(data_dir.path())
        .build();

    assert!(result.is_err());
}

#[test]
#[serial]
fn test_zero_lock_wait_from_env_fails_validation() {
    clear_env();
    env::set_var("HOTEL_MAXIMUM_LOCK_WAIT_SECONDS", "0");

    let result = ConfigBuilder::new().skip_files().build();
    clear_env();

    assert!(result.is_err());
}

#[test]
#[serial]
fn test_skip_env_ignores_variables() {
    clear_env();
    env::set_var("HOTEL_DISABLE_AUTOINIT", "not-a-bool");

    let result = ConfigBuilder::new().skip_files().skip_env().build();
    clear_env();

    assert!(result.unwrap().autoinit());
}
