//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builders with the data directory pre-configured
//! - Shortcuts for adding rooms and booking them

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the hotel data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The data directory is not created; the CLI creates it on first use.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("hotel-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// Get a bare command builder without pre-configured flags.
    ///
    /// The working directory is the temp dir so no project config from the
    /// surrounding checkout is picked up, and `HOTEL_*` variables are cleared.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("hotel").expect("Failed to find hotel binary");
        cmd.current_dir(&self.temp_path)
            .env_remove("HOTEL_DATA_DIR")
            .env_remove("HOTEL_BUSY_TIMEOUT")
            .env_remove("HOTEL_MAXIMUM_LOCK_WAIT_SECONDS")
            .env_remove("HOTEL_DISABLE_AUTOINIT")
            .env_remove("HOTEL_OUTPUT_FORMAT")
            .env_remove("HOTEL_LOG_MODE");
        cmd
    }

    /// Get a command builder with `--data-dir` set to this environment.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Run a command that must succeed and return its trimmed stdout.
    ///
    /// # Panics
    /// Panics if the command fails.
    pub fn run(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run hotel");

        assert!(
            output.status.success(),
            "hotel {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim()
            .to_string()
    }

    /// Add an active STANDARD room and return its identifier.
    pub fn add_room(&self, number: i64) -> String {
        let number = number.to_string();
        self.run(&[
            "room",
            "add",
            "--number",
            &number,
            "--type",
            "STANDARD",
            "--capacity",
            "2",
            "--price",
            "120.00",
        ])
    }

    /// Book a room and return the reservation identifier.
    pub fn create_reservation(&self, room: &str, checkin: &str, checkout: &str) -> String {
        self.run(&[
            "reservation",
            "create",
            "--room",
            room,
            "--guest",
            "Alice Silva",
            "--checkin",
            checkin,
            "--checkout",
            checkout,
            "--amount",
            "480.00",
        ])
    }

    /// Reservations as JSON values.
    pub fn reservations_json(&self, extra: &[&str]) -> Vec<serde_json::Value> {
        let mut args = vec!["reservation", "list", "--format", "json"];
        args.extend_from_slice(extra);
        let stdout = self.run(&args);
        serde_json::from_str(&stdout).expect("list output is not JSON")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
