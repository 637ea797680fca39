//! SQLite storage for rooms and reservations.
//!
//! [`Database`] opens a connection with WAL journaling and foreign keys
//! enforced, creating the schema on first use. Both
//! [`ReservationStore`](crate::storage::ReservationStore) and
//! [`RoomStore`](crate::storage::RoomStore) are implemented for
//! [`rusqlite::Connection`], so a service can run against the database,
//! a plain connection, or an open transaction.
//!
//! # Examples
//!
//! ```no_run
//! use hotel::database::{Database, DatabaseConfig};
//! use hotel::operations::ReservationService;
//! use hotel::ReservationRequest;
//! use rust_decimal::Decimal;
//!
//! let mut db = Database::open(DatabaseConfig::new("/tmp/hotel.db")).unwrap();
//!
//! let request = ReservationRequest::new(
//!     "room-id",
//!     "Alice Silva",
//!     "2025-06-01",
//!     "2025-06-05",
//!     Decimal::new(48000, 2),
//! );
//! let id = db
//!     .immediate(|conn| ReservationService::new(conn).create(request))
//!     .unwrap();
//! println!("created {id}");
//! ```

mod config;
mod connection;
mod constraints;
pub mod migrations;
mod reservations;
mod rooms;
mod schema;
mod transaction;

#[cfg(test)]
pub(crate) mod test_util;

pub use config::{
    default_data_dir, resolve_database_path, DatabaseConfig, DATABASE_FILE_NAME, DATA_DIR_ENV,
};
pub use connection::Database;
pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
pub use schema::CURRENT_SCHEMA_VERSION;
