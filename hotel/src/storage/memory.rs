//! A non-persistent store backed by vectors.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::{Error, Result};
use crate::overlap::OverlapQuery;
use crate::reservation::{NewReservation, Reservation, ReservationId};
use crate::room::{Room, RoomDetails, RoomId};

use super::{ReservationStore, RoomStore};

#[derive(Debug, Default)]
struct Tables {
    rooms: Vec<Room>,
    reservations: Vec<Reservation>,
}

impl Tables {
    fn room_exists(&self, id: &RoomId) -> bool {
        self.rooms.iter().any(|r| &r.id == id)
    }

    fn number_taken(&self, number: u32, except: Option<&RoomId>) -> bool {
        self.rooms
            .iter()
            .any(|r| r.details.number == number && Some(&r.id) != except)
    }
}

/// Keeps rooms and reservations in memory.
///
/// Enforces the same referential and uniqueness rules as the SQLite
/// store: reservations must name an existing room, room numbers are
/// unique, and referenced rooms cannot be deleted.
///
/// Both tables sit behind one [`Mutex`], so the store is `Sync` and every
/// call sees a consistent snapshot. Each call holds the lock only for its
/// own duration; a check-then-write sequence spanning several calls is not
/// isolated the way [`Database::immediate`](crate::Database::immediate) is.
///
/// # Examples
///
/// ```
/// use hotel::storage::{InMemoryStore, ReservationStore};
///
/// let store = InMemoryStore::new();
/// assert!(store.list_reservations().unwrap().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // Every mutation completes before the guard drops, so a poisoned lock
    // still holds consistent tables.
    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn missing_room(id: &RoomId) -> Error {
        Error::NotFound {
            resource: format!("room {id}"),
        }
    }

    fn number_taken(number: u32) -> Error {
        Error::Conflict {
            details: format!("room number {number} already exists"),
        }
    }
}

impl ReservationStore for InMemoryStore {
    fn insert_reservation(&self, reservation: &NewReservation) -> Result<ReservationId> {
        let mut tables = self.tables();
        if !tables.room_exists(&reservation.room_id) {
            return Err(Self::missing_room(&reservation.room_id));
        }

        let id = ReservationId::generate();
        tables
            .reservations
            .push(reservation.clone().with_id(id.clone()));
        Ok(id)
    }

    fn update_reservation(&self, reservation: &Reservation) -> Result<bool> {
        let mut tables = self.tables();
        if !tables.room_exists(&reservation.room_id) {
            return Err(Self::missing_room(&reservation.room_id));
        }

        match tables
            .reservations
            .iter_mut()
            .find(|r| r.id == reservation.id)
        {
            Some(existing) => {
                *existing = reservation.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete_reservation(&self, id: &ReservationId) -> Result<bool> {
        let mut tables = self.tables();
        let before = tables.reservations.len();
        tables.reservations.retain(|r| &r.id != id);
        Ok(tables.reservations.len() < before)
    }

    fn get_reservation(&self, id: &ReservationId) -> Result<Option<Reservation>> {
        Ok(self
            .tables()
            .reservations
            .iter()
            .find(|r| &r.id == id)
            .cloned())
    }

    fn list_reservations(&self) -> Result<Vec<Reservation>> {
        let mut all = self.tables().reservations.clone();
        all.sort_by(|a, b| {
            a.stay
                .checkin()
                .cmp(&b.stay.checkin())
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(all)
    }

    fn has_overlap(&self, query: &OverlapQuery) -> Result<bool> {
        Ok(self
            .tables()
            .reservations
            .iter()
            .any(|r| query.is_blocked_by(r)))
    }
}

impl RoomStore for InMemoryStore {
    fn insert_room(&self, room: &RoomDetails) -> Result<RoomId> {
        let mut tables = self.tables();
        if tables.number_taken(room.number, None) {
            return Err(Self::number_taken(room.number));
        }

        let id = RoomId::generate();
        tables.rooms.push(room.clone().with_id(id.clone()));
        Ok(id)
    }

    fn update_room(&self, room: &Room) -> Result<bool> {
        let mut tables = self.tables();
        if tables.number_taken(room.details.number, Some(&room.id)) {
            return Err(Self::number_taken(room.details.number));
        }

        match tables.rooms.iter_mut().find(|r| r.id == room.id) {
            Some(existing) => {
                *existing = room.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete_room(&self, id: &RoomId) -> Result<bool> {
        let mut tables = self.tables();
        if tables.reservations.iter().any(|r| &r.room_id == id) {
            return Err(Error::Conflict {
                details: format!("room {id} still has reservations"),
            });
        }

        let before = tables.rooms.len();
        tables.rooms.retain(|r| &r.id != id);
        Ok(tables.rooms.len() < before)
    }

    fn get_room(&self, id: &RoomId) -> Result<Option<Room>> {
        Ok(self.tables().rooms.iter().find(|r| &r.id == id).cloned())
    }

    fn list_rooms(&self) -> Result<Vec<Room>> {
        let mut all = self.tables().rooms.clone();
        all.sort_by_key(|r| r.details.number);
        Ok(all)
    }
}
