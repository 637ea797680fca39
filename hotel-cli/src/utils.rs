//! Utility functions for CLI operations.
//!
//! This module provides helpers shared across commands: configuration
//! loading, database opening, and listing output in every format.

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use chrono::NaiveDate;
use serde::Serialize;

use hotel::config::{Config, ConfigBuilder, OutputFormat};
use hotel::database::{default_data_dir, Database, DatabaseConfig, DATABASE_FILE_NAME};
use hotel::dates::{parse_date, DateField};

use crate::error::CliError;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the busy timeout (in seconds).
    pub busy_timeout: Option<u64>,

    /// Disable automatic database initialization.
    pub disable_autoinit: bool,
}

/// Resolves the data directory: the global option, else `~/.hotel`.
pub fn resolve_data_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    match &global.data_dir {
        Some(dir) => Ok(dir.clone()),
        None => default_data_dir()
            .map_err(|_| CliError::Config("Could not determine home directory".to_string())),
    }
}

/// Load hierarchical configuration.
///
/// Files and `HOTEL_*` variables are merged by the library; the data
/// directory option decides where the user config is read from.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let data_dir = resolve_data_dir(global)?;
    ConfigBuilder::new()
        .with_data_dir(&data_dir)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Open the database with options layered over configuration.
///
/// The busy timeout comes from `--busy-timeout`, then the configured lock
/// wait. Auto-initialization is off if either the flag or the
/// configuration disables it.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the database doesn't exist and auto-init
/// is disabled.
pub fn open_database(global: &GlobalOptions, config: &Config) -> Result<Database, CliError> {
    let db_path = resolve_data_dir(global)?.join(DATABASE_FILE_NAME);
    let autoinit = !global.disable_autoinit && config.autoinit();

    if !db_path.exists() && !autoinit {
        return Err(CliError::NoDataDirectory);
    }

    let timeout = global
        .busy_timeout
        .map_or_else(|| config.lock_wait(), Duration::from_secs);

    let db_config = DatabaseConfig::new(db_path)
        .with_busy_timeout(timeout)
        .with_auto_create(autoinit);

    Database::open(db_config).map_err(CliError::from)
}

/// Parses a `YYYY-MM-DD` command-line date.
pub fn parse_day(value: &str) -> Result<NaiveDate, String> {
    parse_date(value, DateField::Checkin)
        .map_err(|_| format!("invalid date '{value}' (expected YYYY-MM-DD)"))
}

/// Picks the listing format: the flag, else configuration.
pub fn output_format(flag: Option<OutputFormat>, config: &Config) -> OutputFormat {
    flag.unwrap_or_else(|| config.output_format())
}

/// Writes records to stdout in the requested format.
///
/// `headers` name the columns for table, CSV and TSV output and `row`
/// renders one record into those columns. JSON output serializes the
/// records themselves.
pub fn print_records<T, F>(
    format: OutputFormat,
    headers: &[&str],
    records: &[T],
    row: F,
) -> Result<(), CliError>
where
    T: Serialize,
    F: Fn(&T) -> Vec<String>,
{
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    match format {
        OutputFormat::Table => {
            let rows: Vec<Vec<String>> = records.iter().map(&row).collect();
            write_table(&mut handle, headers, &rows)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut handle, records)?;
            writeln!(handle)?;
        }
        OutputFormat::Csv | OutputFormat::Tsv => {
            let delimiter = if format == OutputFormat::Csv { b',' } else { b'\t' };
            let mut writer = csv::WriterBuilder::new()
                .delimiter(delimiter)
                .from_writer(handle);
            writer.write_record(headers)?;
            for record in records {
                writer.write_record(row(record))?;
            }
            writer.flush()?;
        }
    }

    Ok(())
}

/// Writes a left-aligned table with uppercase headers.
fn write_table(out: &mut impl Write, headers: &[&str], rows: &[Vec<String>]) -> std::io::Result<()> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let render = |cells: Vec<String>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    writeln!(
        out,
        "{}",
        render(headers.iter().map(|h| h.to_uppercase()).collect())
    )?;
    for row in rows {
        writeln!(out, "{}", render(row.clone()))?;
    }
    Ok(())
}
