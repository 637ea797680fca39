//! Room command implementation.
//!
//! This module implements `room add|update|delete|show|list`, the
//! catalogue side of the CLI.

use clap::{Args, Subcommand};
use rust_decimal::Decimal;

use hotel::config::OutputFormat;
use hotel::{Room, RoomId, RoomRequest, RoomService};

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, output_format, print_records, GlobalOptions};

/// Column headers for room listings.
const COLUMN_HEADERS: [&str; 6] = ["id", "number", "type", "capacity", "price_per_night", "status"];

/// Manage the room catalogue.
#[derive(Args)]
pub struct RoomCommand {
    #[command(subcommand)]
    pub action: RoomAction,
}

/// Room subcommands.
#[derive(Subcommand)]
pub enum RoomAction {
    /// Add a room and print its identifier
    Add(RoomArgs),

    /// Replace every field of a room
    Update {
        /// Room identifier
        id: String,

        #[command(flatten)]
        fields: RoomArgs,
    },

    /// Delete a room that has no reservations
    Delete {
        /// Room identifier
        id: String,
    },

    /// Show one room
    Show {
        /// Room identifier
        id: String,

        /// Output format
        #[arg(long, value_name = "FORMAT")]
        format: Option<OutputFormat>,
    },

    /// List every room ordered by number
    List {
        /// Output format
        #[arg(long, value_name = "FORMAT")]
        format: Option<OutputFormat>,
    },
}

/// Room fields accepted on the command line.
#[derive(Args)]
pub struct RoomArgs {
    /// Room number shown to guests
    #[arg(long, allow_hyphen_values = true)]
    pub number: i64,

    /// Room type: STANDARD, DELUXE, or SUITE
    #[arg(long = "type", value_name = "TYPE")]
    pub room_type: String,

    /// Number of guests the room sleeps
    #[arg(long, allow_hyphen_values = true)]
    pub capacity: i64,

    /// Nightly rate
    #[arg(long, value_name = "AMOUNT", allow_hyphen_values = true)]
    pub price: Decimal,

    /// Room status: ATIVO or INATIVO
    #[arg(long, default_value = "ATIVO")]
    pub status: String,
}

impl From<RoomArgs> for RoomRequest {
    fn from(args: RoomArgs) -> Self {
        Self {
            number: args.number,
            room_type: args.room_type,
            capacity: args.capacity,
            price_per_night: args.price,
            status: args.status,
        }
    }
}

impl RoomCommand {
    /// Execute the room command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        match self.action {
            RoomAction::Add(args) => {
                let request = RoomRequest::from(args);
                let id = db.immediate(|conn| RoomService::new(conn).create(&request))?;
                println!("{id}");
            }
            RoomAction::Update { id, fields } => {
                let request = RoomRequest::from(fields);
                let id = RoomId::new(id);
                db.immediate(|conn| RoomService::new(conn).update(&id, &request))?;
                if !global.quiet {
                    eprintln!("Updated room {id}");
                }
            }
            RoomAction::Delete { id } => {
                let id = RoomId::new(id);
                if !db.immediate(|conn| RoomService::new(conn).delete(&id))? {
                    return Err(CliError::NotFound(format!("room {id}")));
                }
                if !global.quiet {
                    eprintln!("Deleted room {id}");
                }
            }
            RoomAction::Show { id, format } => {
                let id = RoomId::new(id);
                let room = RoomService::new(&db)
                    .get(&id)?
                    .ok_or_else(|| CliError::NotFound(format!("room {id}")))?;
                print_records(
                    output_format(format, &config),
                    &COLUMN_HEADERS,
                    &[room],
                    room_row,
                )?;
            }
            RoomAction::List { format } => {
                let rooms = RoomService::new(&db).list()?;
                print_records(
                    output_format(format, &config),
                    &COLUMN_HEADERS,
                    &rooms,
                    room_row,
                )?;
            }
        }

        Ok(())
    }
}

fn room_row(room: &Room) -> Vec<String> {
    vec![
        room.id.to_string(),
        room.details.number.to_string(),
        room.details.room_type.to_string(),
        room.details.capacity.to_string(),
        room.details.price_per_night.to_string(),
        room.details.status.to_string(),
    ]
}
