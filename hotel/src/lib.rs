#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # hotel
//!
//! Reservation lifecycle core for a small hotel.
//!
//! This library validates stay dates, prevents double-booking a room,
//! enforces the reservation status state machine, and persists rooms and
//! reservations in SQLite.
//!
//! ## Core Types
//!
//! - [`StayDates`]: A validated half-open `[checkin, checkout)` interval
//! - [`ReservationStatus`]: The reservation state machine
//! - [`ReservationRequest`] and [`Reservation`]: Inbound and stored reservations
//! - [`RoomRequest`] and [`Room`]: The room catalogue
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use hotel::dates::validate_range;
//! use hotel::ReservationStatus;
//!
//! let booked = validate_range("2025-06-01", "2025-06-05").unwrap();
//! let requested = validate_range("2025-06-05", "2025-06-08").unwrap();
//! assert!(!booked.overlaps(&requested));
//!
//! assert!(ReservationStatus::Created.can_transition_to(ReservationStatus::CheckedIn));
//! assert!(!ReservationStatus::CheckedOut.can_transition_to(ReservationStatus::Canceled));
//! ```

pub mod config;
pub mod database;
pub mod dates;
pub mod error;
pub mod logging;
pub mod operations;
pub mod overlap;
pub mod reservation;
pub mod room;
pub mod status;
pub mod storage;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder, OutputFormat};
pub use database::{Database, DatabaseConfig};
pub use dates::StayDates;
pub use error::{Error, ErrorCategory, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{ReservationService, RoomService};
pub use reservation::{NewReservation, Reservation, ReservationId, ReservationRequest, ValidationError};
pub use room::{Room, RoomDetails, RoomId, RoomRequest, RoomStatus, RoomType, RoomValidationError};
pub use status::ReservationStatus;
pub use storage::{ReservationStore, RoomStore};
