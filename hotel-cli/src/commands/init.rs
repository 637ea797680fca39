//! Init command implementation.
//!
//! This module implements the `init` command for explicitly initializing
//! the hotel data directory and database, optionally with demo data.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Args;

use hotel::operations::{init_database, InitOptions};

use crate::error::CliError;
use crate::utils::{parse_day, resolve_data_dir, GlobalOptions};

/// Initialize the hotel data directory and database.
#[derive(Args)]
pub struct InitCommand {
    /// Data directory to initialize
    #[arg(long = "dir", value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Replace an existing database
    #[arg(long)]
    pub overwrite: bool,

    /// Create a commented configuration file
    #[arg(long)]
    pub with_config: bool,

    /// Insert five demo rooms with one reservation each
    #[arg(long)]
    pub seed: bool,

    /// First checkin date of the demo reservations (default: today)
    #[arg(long, value_name = "DATE", value_parser = parse_day, requires = "seed")]
    pub today: Option<NaiveDate>,
}

impl InitCommand {
    /// Execute the init command.
    ///
    /// `--disable-autoinit` has no effect here: creating the database is
    /// the whole point of the command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let data_dir = match self.data_dir {
            Some(dir) => dir,
            None => resolve_data_dir(global)?,
        };

        let mut options = InitOptions::new(data_dir)
            .with_overwrite(self.overwrite)
            .with_create_config(self.with_config);
        if self.seed {
            let today = self.today.unwrap_or_else(|| Local::now().date_naive());
            options = options.with_seed(today);
        }

        let result = init_database(&options)?;

        if global.quiet {
            return Ok(());
        }

        println!("Initialized hotel in: {}", result.data_dir.display());
        if result.data_dir_created {
            println!("  - Created data directory");
        }
        if result.database_replaced {
            println!("  - Recreated database");
        } else {
            println!("  - Created database");
        }
        if result.config_created {
            println!("  - Created default configuration file");
        } else if self.with_config {
            println!("  - Configuration file already exists (not overwritten)");
        }
        if let Some(seeded) = result.seeded {
            println!(
                "  - Seeded {} rooms and {} reservations",
                seeded.rooms.len(),
                seeded.reservations.len()
            );
        }

        Ok(())
    }
}
