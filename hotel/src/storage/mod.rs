//! Storage collaborators for reservations and rooms.
//!
//! The reservation and room services never talk to a database directly;
//! they are handed something implementing [`ReservationStore`] or
//! [`RoomStore`]. The SQLite implementations live in
//! [`crate::database`]; [`InMemoryStore`] keeps everything in a `Vec`.

mod memory;

pub use memory::InMemoryStore;

use crate::error::Result;
use crate::overlap::OverlapQuery;
use crate::reservation::{NewReservation, Reservation, ReservationId};
use crate::room::{Room, RoomDetails, RoomId};

/// Persistence operations needed by the reservation service.
#[cfg_attr(test, mockall::automock)]
pub trait ReservationStore {
    /// Stores a new reservation and returns the identifier assigned to it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`](crate::Error::NotFound) if the room does
    /// not exist, or a storage error.
    fn insert_reservation(&self, reservation: &NewReservation) -> Result<ReservationId>;

    /// Overwrites every field of an existing reservation.
    ///
    /// Returns `false` if no reservation has that identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`](crate::Error::NotFound) if the new room
    /// does not exist, or a storage error.
    fn update_reservation(&self, reservation: &Reservation) -> Result<bool>;

    /// Removes a reservation. Returns `false` if it did not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    fn delete_reservation(&self, id: &ReservationId) -> Result<bool>;

    /// Fetches a reservation by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn get_reservation(&self, id: &ReservationId) -> Result<Option<Reservation>>;

    /// Lists every reservation, ordered by checkin date.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn list_reservations(&self) -> Result<Vec<Reservation>>;

    /// Returns `true` if any reservation matches `query`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn has_overlap(&self, query: &OverlapQuery) -> Result<bool>;
}

/// Persistence operations needed by the room service.
#[cfg_attr(test, mockall::automock)]
pub trait RoomStore {
    /// Stores a new room and returns the identifier assigned to it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Conflict`](crate::Error::Conflict) if the room
    /// number is taken, or a storage error.
    fn insert_room(&self, room: &RoomDetails) -> Result<RoomId>;

    /// Overwrites every field of an existing room.
    ///
    /// Returns `false` if no room has that identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Conflict`](crate::Error::Conflict) if the room
    /// number is taken, or a storage error.
    fn update_room(&self, room: &Room) -> Result<bool>;

    /// Removes a room. Returns `false` if it did not exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Conflict`](crate::Error::Conflict) if reservations
    /// still reference the room, or a storage error.
    fn delete_room(&self, id: &RoomId) -> Result<bool>;

    /// Fetches a room by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn get_room(&self, id: &RoomId) -> Result<Option<Room>>;

    /// Lists every room, ordered by number.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn list_rooms(&self) -> Result<Vec<Room>>;
}
