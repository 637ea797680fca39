//! Reservation command implementation.
//!
//! Every write runs inside one immediate transaction, so the overlap
//! check and the write it guards see the same database state.

use clap::{Args, Subcommand};
use rust_decimal::Decimal;

use hotel::config::OutputFormat;
use hotel::{
    Database, Reservation, ReservationId, ReservationRequest, ReservationService,
    ReservationStatus, RoomId,
};

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, output_format, print_records, GlobalOptions};

/// Column headers for reservation listings.
const COLUMN_HEADERS: [&str; 7] = [
    "id",
    "room_id",
    "guest_name",
    "checkin",
    "checkout",
    "status",
    "total_amount",
];

/// Manage reservations.
#[derive(Args)]
pub struct ReservationCommand {
    #[command(subcommand)]
    pub action: ReservationAction,
}

/// Reservation subcommands.
#[derive(Subcommand)]
pub enum ReservationAction {
    /// Book a room and print the reservation identifier
    Create(BookingArgs),

    /// Replace the fields of a reservation
    Update {
        /// Reservation identifier
        id: String,

        #[command(flatten)]
        fields: BookingArgs,
    },

    /// Delete a reservation regardless of status
    Delete {
        /// Reservation identifier
        id: String,
    },

    /// Show one reservation
    Show {
        /// Reservation identifier
        id: String,

        /// Output format
        #[arg(long, value_name = "FORMAT")]
        format: Option<OutputFormat>,
    },

    /// List reservations ordered by checkin
    List {
        /// Only reservations for this room
        #[arg(long, value_name = "ROOM_ID")]
        room: Option<String>,

        /// Only reservations in this status
        #[arg(long, value_name = "STATUS")]
        status: Option<ReservationStatus>,

        /// Output format
        #[arg(long, value_name = "FORMAT")]
        format: Option<OutputFormat>,
    },

    /// Mark a created reservation as checked in
    CheckIn {
        /// Reservation identifier
        id: String,
    },

    /// Mark a checked-in reservation as checked out
    CheckOut {
        /// Reservation identifier
        id: String,
    },

    /// Cancel a created reservation, releasing its nights
    Cancel {
        /// Reservation identifier
        id: String,
    },
}

/// Reservation fields accepted on the command line.
#[derive(Args)]
pub struct BookingArgs {
    /// Identifier of the room to book
    #[arg(long, value_name = "ROOM_ID")]
    pub room: String,

    /// Name of the guest
    #[arg(long, value_name = "NAME")]
    pub guest: String,

    /// Arrival date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub checkin: String,

    /// Departure date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub checkout: String,

    /// Total price of the stay
    #[arg(long, value_name = "AMOUNT", allow_hyphen_values = true)]
    pub amount: Decimal,

    /// Status to set; defaults to CREATED on create and unchanged on update
    #[arg(long, value_name = "STATUS")]
    pub status: Option<String>,
}

impl From<BookingArgs> for ReservationRequest {
    fn from(args: BookingArgs) -> Self {
        let request = Self::new(args.room, args.guest, args.checkin, args.checkout, args.amount);
        match args.status {
            Some(status) => request.with_status(status),
            None => request,
        }
    }
}

impl ReservationCommand {
    /// Execute the reservation command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        match self.action {
            ReservationAction::Create(args) => {
                let request = ReservationRequest::from(args);
                let id = db.immediate(|conn| ReservationService::new(conn).create(request))?;
                println!("{id}");
            }
            ReservationAction::Update { id, fields } => {
                let id = ReservationId::new(id);
                let request = ReservationRequest::from(fields);
                db.immediate(|conn| ReservationService::new(conn).update(&id, request))?;
                report(global, "Updated", &id);
            }
            ReservationAction::Delete { id } => {
                let id = ReservationId::new(id);
                if !db.immediate(|conn| ReservationService::new(conn).delete(&id))? {
                    return Err(CliError::NotFound(format!("reservation {id}")));
                }
                report(global, "Deleted", &id);
            }
            ReservationAction::Show { id, format } => {
                let id = ReservationId::new(id);
                let reservation = ReservationService::new(&db)
                    .get(&id)?
                    .ok_or_else(|| CliError::NotFound(format!("reservation {id}")))?;
                print_records(
                    output_format(format, &config),
                    &COLUMN_HEADERS,
                    &[reservation],
                    reservation_row,
                )?;
            }
            ReservationAction::List {
                room,
                status,
                format,
            } => {
                let reservations = filtered(&db, room.map(RoomId::new), status)?;
                print_records(
                    output_format(format, &config),
                    &COLUMN_HEADERS,
                    &reservations,
                    reservation_row,
                )?;
            }
            ReservationAction::CheckIn { id } => {
                let id = ReservationId::new(id);
                db.immediate(|conn| ReservationService::new(conn).check_in(&id))?;
                report(global, "Checked in", &id);
            }
            ReservationAction::CheckOut { id } => {
                let id = ReservationId::new(id);
                db.immediate(|conn| ReservationService::new(conn).check_out(&id))?;
                report(global, "Checked out", &id);
            }
            ReservationAction::Cancel { id } => {
                let id = ReservationId::new(id);
                db.immediate(|conn| ReservationService::new(conn).cancel(&id))?;
                report(global, "Canceled", &id);
            }
        }

        Ok(())
    }
}

fn filtered(
    db: &Database,
    room: Option<RoomId>,
    status: Option<ReservationStatus>,
) -> Result<Vec<Reservation>, CliError> {
    let mut reservations = ReservationService::new(db).list()?;
    if let Some(room) = room {
        reservations.retain(|r| r.room_id == room);
    }
    if let Some(status) = status {
        reservations.retain(|r| r.status == status);
    }
    Ok(reservations)
}

fn report(global: &GlobalOptions, action: &str, id: &ReservationId) {
    if !global.quiet {
        eprintln!("{action} reservation {id}");
    }
}

fn reservation_row(reservation: &Reservation) -> Vec<String> {
    vec![
        reservation.id.to_string(),
        reservation.room_id.to_string(),
        reservation.guest_name.clone(),
        reservation.stay.checkin().to_string(),
        reservation.stay.checkout().to_string(),
        reservation.status.to_string(),
        reservation.total_amount.to_string(),
    ]
}
