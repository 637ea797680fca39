//! Operations over rooms and reservations.
//!
//! The services borrow a store and hold no other state; construct one
//! per unit of work.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use hotel::operations::{seed, ReservationService};
//! use hotel::storage::InMemoryStore;
//!
//! let store = InMemoryStore::new();
//! seed(&store, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()).unwrap();
//!
//! let all = ReservationService::new(&store).list().unwrap();
//! assert_eq!(all.len(), 5);
//! ```

pub mod init;
pub mod reservations;
pub mod rooms;
pub mod seed;

pub use init::{init_database, InitOptions, InitResult};
pub use reservations::ReservationService;
pub use rooms::RoomService;
pub use seed::{seed, SeedResult};
