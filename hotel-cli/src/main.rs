//! Main entry point for the hotel CLI.
//!
//! - `init`: Create the data directory and database
//! - `room`: Manage the room catalogue
//! - `reservation`: Book and manage reservations
//! - `completions`: Generate shell completion scripts

use clap::Parser;

use hotel::{init_logger, ConfigBuilder, Logger};
use hotel_cli::cli::{Cli, Command};
use hotel_cli::utils::{resolve_data_dir, GlobalOptions};

fn main() {
    let cli = Cli::parse();
    let global = cli.global_options();

    // A logger can only be installed once; a second install is harmless
    let _ = select_logger(&global).install();

    let result = match cli.command {
        Command::Init(cmd) => cmd.execute(&global),
        Command::Room(cmd) => cmd.execute(&global),
        Command::Reservation(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}

/// Chooses the log level: flags, then `HOTEL_LOG_MODE`, then the
/// configured `log_level`.
fn select_logger(global: &GlobalOptions) -> Logger {
    if global.verbose || global.quiet || std::env::var_os(hotel::logging::LOG_MODE_ENV).is_some() {
        return init_logger(global.verbose, global.quiet);
    }

    resolve_data_dir(global)
        .ok()
        .and_then(|dir| ConfigBuilder::new().with_data_dir(&dir).build().ok())
        .map_or_else(
            || init_logger(false, false),
            |config| Logger::new(config.log_level()),
        )
}
