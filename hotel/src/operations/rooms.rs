//! Room catalogue operations.

use log::info;

use crate::error::{Error, Result};
use crate::room::{Room, RoomId, RoomRequest};
use crate::storage::RoomStore;

/// Creates, changes, and removes rooms against a store.
#[derive(Debug)]
pub struct RoomService<'a, S: RoomStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: RoomStore + ?Sized> RoomService<'a, S> {
    /// Creates a service over `store`.
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Adds a room to the catalogue.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RoomValidation`] listing every invalid field,
    /// [`Error::Conflict`] if the number is taken, or a storage error.
    pub fn create(&self, request: &RoomRequest) -> Result<RoomId> {
        let details = request.validate()?;
        let id = self.store.insert_room(&details)?;
        info!("Created room {} ({id})", details.number);
        Ok(id)
    }

    /// Replaces every field of an existing room.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RoomValidation`], [`Error::NotFound`] if no room
    /// has that identifier, [`Error::Conflict`] if the new number is
    /// taken, or a storage error.
    pub fn update(&self, id: &RoomId, request: &RoomRequest) -> Result<()> {
        let room = request.validate()?.with_id(id.clone());
        if self.store.update_room(&room)? {
            info!("Updated room {id}");
            Ok(())
        } else {
            Err(Error::NotFound {
                resource: format!("room {id}"),
            })
        }
    }

    /// Removes a room. Returns `false` if it did not exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Conflict`] if reservations still reference the
    /// room, or a storage error.
    pub fn delete(&self, id: &RoomId) -> Result<bool> {
        let deleted = self.store.delete_room(id)?;
        if deleted {
            info!("Deleted room {id}");
        }
        Ok(deleted)
    }

    /// Fetches a room.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn get(&self, id: &RoomId) -> Result<Option<Room>> {
        self.store.get_room(id)
    }

    /// Lists every room by number.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn list(&self) -> Result<Vec<Room>> {
        self.store.list_rooms()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MockRoomStore;
    use rust_decimal::Decimal;

    fn request(number: i64) -> RoomRequest {
        RoomRequest {
            number,
            room_type: "SUITE".into(),
            capacity: 4,
            price_per_night: Decimal::new(500, 0),
            status: "ATIVO".into(),
        }
    }

    #[test]
    fn test_create_invalid_room_never_reaches_store() {
        let mut store = MockRoomStore::new();
        store.expect_insert_room().never();

        let err = RoomService::new(&store).create(&request(0)).unwrap_err();
        assert!(matches!(err, Error::RoomValidation(ref e) if e.has_field("number")));
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_create_returns_store_id() {
        let mut store = MockRoomStore::new();
        store
            .expect_insert_room()
            .withf(|d| d.number == 301)
            .returning(|_| Ok(RoomId::new("room-301")));

        let id = RoomService::new(&store).create(&request(301)).unwrap();
        assert_eq!(id.as_str(), "room-301");
    }

    #[test]
    fn test_update_missing_room_is_not_found() {
        let mut store = MockRoomStore::new();
        store.expect_update_room().returning(|_| Ok(false));

        let err = RoomService::new(&store)
            .update(&RoomId::new("ghost"), &request(301))
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
