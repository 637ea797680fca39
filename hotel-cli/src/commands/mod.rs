//! CLI command implementations.
//!
//! - `init`: Create the data directory and database, optionally seeded
//! - `room`: Manage the room catalogue
//! - `reservation`: Book, update, transition, and list reservations
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod init;
pub mod reservation;
pub mod room;

pub use completions::CompletionsCommand;
pub use init::InitCommand;
pub use reservation::ReservationCommand;
pub use room::RoomCommand;
