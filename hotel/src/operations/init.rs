//! Explicit data directory and database initialization.

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::database::{Database, DatabaseConfig, DATABASE_FILE_NAME};
use crate::error::{Error, Result};

use super::seed::{seed, SeedResult};

/// Options for [`init_database`].
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Data directory to initialize.
    pub data_dir: PathBuf,
    /// Replace an existing database.
    pub overwrite: bool,
    /// Write a commented configuration template.
    pub create_config: bool,
    /// Seed demo data with stays starting on this date.
    pub seed_from: Option<NaiveDate>,
}

impl InitOptions {
    /// Creates options that only create the database.
    #[must_use]
    pub const fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            overwrite: false,
            create_config: false,
            seed_from: None,
        }
    }

    /// Sets whether to replace an existing database.
    #[must_use]
    pub const fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Sets whether to write a configuration template.
    #[must_use]
    pub const fn with_create_config(mut self, create_config: bool) -> Self {
        self.create_config = create_config;
        self
    }

    /// Seeds demo data with stays starting on `today`.
    #[must_use]
    pub const fn with_seed(mut self, today: NaiveDate) -> Self {
        self.seed_from = Some(today);
        self
    }
}

/// What [`init_database`] did.
#[derive(Debug)]
pub struct InitResult {
    /// Whether the data directory was created.
    pub data_dir_created: bool,
    /// Whether an existing database was removed first.
    pub database_replaced: bool,
    /// Whether a configuration template was written.
    pub config_created: bool,
    /// Demo data inserted, if seeding was requested.
    pub seeded: Option<SeedResult>,
    /// The initialized data directory.
    pub data_dir: PathBuf,
}

const DEFAULT_CONFIG_TEMPLATE: &str = r"# hotel configuration

# Seconds to wait for a locked database (default: 5)
# maximum_lock_wait_seconds: 5

# Refuse to create a missing database (default: false)
# disable_autoinit: false

# Listing format: table, json, csv, or tsv (default: table)
# output_format: table

# Log verbosity: quiet, normal, or verbose (default: normal)
# log_level: normal
";

/// Creates the data directory and database, optionally writing a
/// configuration template and seeding demo data.
///
/// # Errors
///
/// Returns an error if:
/// - The database exists and `overwrite` is not set
/// - The directory, database, or template cannot be written
/// - Seeding fails
///
/// # Examples
///
/// ```no_run
/// use chrono::NaiveDate;
/// use hotel::operations::{init_database, InitOptions};
/// use std::path::PathBuf;
///
/// let options = InitOptions::new(PathBuf::from("/tmp/hotel-demo"))
///     .with_seed(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
/// let result = init_database(&options).unwrap();
/// assert!(result.seeded.is_some());
/// ```
pub fn init_database(options: &InitOptions) -> Result<InitResult> {
    let mut result = InitResult {
        data_dir_created: false,
        database_replaced: false,
        config_created: false,
        seeded: None,
        data_dir: options.data_dir.clone(),
    };

    if !options.data_dir.exists() {
        fs::create_dir_all(&options.data_dir)?;
        result.data_dir_created = true;
    }

    let db_path = options.data_dir.join(DATABASE_FILE_NAME);
    if db_path.exists() {
        if !options.overwrite {
            return Err(Error::Conflict {
                details: format!(
                    "database already exists at {}; use --overwrite to replace it",
                    db_path.display()
                ),
            });
        }
        fs::remove_file(&db_path)?;
        for suffix in ["-wal", "-shm"] {
            let sidecar = options.data_dir.join(format!("{DATABASE_FILE_NAME}{suffix}"));
            if sidecar.exists() {
                fs::remove_file(sidecar)?;
            }
        }
        result.database_replaced = true;
    }

    let db = Database::open(DatabaseConfig::new(&db_path))?;

    if let Some(today) = options.seed_from {
        result.seeded = Some(seed(&db, today)?);
    }

    if options.create_config {
        let config_path = options.data_dir.join("config.yaml");
        if !config_path.exists() {
            fs::write(&config_path, DEFAULT_CONFIG_TEMPLATE)?;
            result.config_created = true;
        }
    }

    Ok(result)
}
