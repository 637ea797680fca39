//! The reservation lifecycle.
//!
//! [`ReservationService`] turns caller requests into stored reservations.
//! Every create and update runs the same gauntlet, in this order:
//!
//! 1. (update only) the reservation must exist
//! 2. (update only) the status change must be allowed
//! 3. required fields must be present
//! 4. checkout must be strictly after checkin
//! 5. the room must be free for those nights
//!
//! The service holds nothing but a borrowed store, so the overlap check and
//! the write are only atomic if the store is a transaction. Use
//! [`Database::immediate`](crate::database::Database::immediate) for that.

use log::{debug, info, warn};

use crate::dates::{validate_range, StayDates};
use crate::error::{Error, Result};
use crate::overlap::has_conflict;
use crate::reservation::{Reservation, ReservationId, ReservationRequest};
use crate::room::RoomId;
use crate::status::{validate_transition, ReservationStatus};
use crate::storage::ReservationStore;

/// Creates, changes, and removes reservations against a store.
///
/// # Examples
///
/// ```
/// use hotel::operations::{ReservationService, RoomService};
/// use hotel::storage::InMemoryStore;
/// use hotel::{ReservationRequest, RoomRequest};
/// use rust_decimal::Decimal;
///
/// let store = InMemoryStore::new();
/// let room = RoomService::new(&store)
///     .create(&RoomRequest {
///         number: 101,
///         room_type: "STANDARD".into(),
///         capacity: 2,
///         price_per_night: Decimal::new(12050, 2),
///         status: "ATIVO".into(),
///     })
///     .unwrap();
///
/// let service = ReservationService::new(&store);
/// let request = ReservationRequest::new(
///     room.as_str(),
///     "Alice Silva",
///     "2025-06-01",
///     "2025-06-05",
///     Decimal::new(48200, 2),
/// );
/// let id = service.create(request.clone()).unwrap();
///
/// // The same nights are no longer available
/// assert!(service.create(request).unwrap_err().is_conflict());
///
/// service.check_in(&id).unwrap();
/// ```
#[derive(Debug)]
pub struct ReservationService<'a, S: ReservationStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: ReservationStore + ?Sized> ReservationService<'a, S> {
    /// Creates a service over `store`.
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Books a room.
    ///
    /// The status defaults to `CREATED` when the request leaves it unset.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A required field is missing or the amount is not positive
    ///   ([`Error::Validation`])
    /// - A date is malformed or checkout is not after checkin
    /// - The room is already booked for any of the nights
    ///   ([`Error::RoomUnavailable`])
    /// - The requested status is unknown ([`Error::UnknownStatus`])
    /// - The room does not exist ([`Error::NotFound`])
    /// - The store fails
    pub fn create(&self, request: ReservationRequest) -> Result<ReservationId> {
        request.validate_fields()?;
        let stay = validate_range(&request.checkin, &request.checkout)?;
        let room_id = RoomId::new(request.room_id.trim());

        self.ensure_available(&room_id, &stay, None)?;

        let status = requested_status(&request)?.unwrap_or_default();
        let reservation = request.into_new_reservation(stay, status);
        let id = self.store.insert_reservation(&reservation)?;

        info!("Created reservation {id} for room {room_id} ({stay}, {status})");
        Ok(id)
    }

    /// Replaces the fields of an existing reservation.
    ///
    /// An unset status keeps the current one. The overlap check only runs
    /// when the room or the dates change, and never counts the reservation
    /// against itself.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No reservation has that identifier ([`Error::NotFound`])
    /// - The status change is not allowed ([`Error::IllegalTransition`],
    ///   [`Error::UnknownStatus`])
    /// - Any check performed by [`create`](Self::create) fails
    pub fn update(&self, id: &ReservationId, request: ReservationRequest) -> Result<()> {
        let current = self.fetch(id)?;

        let next = requested_status(&request)?.unwrap_or(current.status);
        validate_transition(current.status, next)?;

        request.validate_fields()?;
        let stay = validate_range(&request.checkin, &request.checkout)?;
        let room_id = RoomId::new(request.room_id.trim());

        if room_id != current.room_id || stay != current.stay {
            self.ensure_available(&room_id, &stay, Some(id))?;
        } else {
            debug!("Reservation {id} keeps room and dates; skipping overlap check");
        }

        let updated = request.into_new_reservation(stay, next).with_id(current.id);
        if !self.store.update_reservation(&updated)? {
            return Err(not_found(id));
        }

        if current.status == next {
            info!("Updated reservation {id}");
        } else {
            info!("Updated reservation {id} ({} -> {next})", current.status);
        }
        Ok(())
    }

    /// Removes a reservation regardless of its status.
    ///
    /// Returns `false` if it did not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn delete(&self, id: &ReservationId) -> Result<bool> {
        let deleted = self.store.delete_reservation(id)?;
        if deleted {
            info!("Deleted reservation {id}");
        } else {
            debug!("No reservation {id} to delete");
        }
        Ok(deleted)
    }

    /// Fetches a reservation.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn get(&self, id: &ReservationId) -> Result<Option<Reservation>> {
        self.store.get_reservation(id)
    }

    /// Lists every reservation.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn list(&self) -> Result<Vec<Reservation>> {
        self.store.list_reservations()
    }

    /// Moves a `CREATED` reservation to `CHECKED_IN`.
    ///
    /// # Errors
    ///
    /// As for [`update`](Self::update).
    pub fn check_in(&self, id: &ReservationId) -> Result<()> {
        self.transition(id, ReservationStatus::CheckedIn)
    }

    /// Moves a `CHECKED_IN` reservation to `CHECKED_OUT`.
    ///
    /// # Errors
    ///
    /// As for [`update`](Self::update).
    pub fn check_out(&self, id: &ReservationId) -> Result<()> {
        self.transition(id, ReservationStatus::CheckedOut)
    }

    /// Moves a `CREATED` reservation to `CANCELED`, releasing its nights.
    ///
    /// # Errors
    ///
    /// As for [`update`](Self::update).
    pub fn cancel(&self, id: &ReservationId) -> Result<()> {
        self.transition(id, ReservationStatus::Canceled)
    }

    fn transition(&self, id: &ReservationId, next: ReservationStatus) -> Result<()> {
        let current = self.fetch(id)?;
        let request = ReservationRequest::from(&current).with_status(next.as_str());
        self.update(id, request)
    }

    fn fetch(&self, id: &ReservationId) -> Result<Reservation> {
        self.store.get_reservation(id)?.ok_or_else(|| not_found(id))
    }

    fn ensure_available(
        &self,
        room_id: &RoomId,
        stay: &StayDates,
        exclude: Option<&ReservationId>,
    ) -> Result<()> {
        if has_conflict(self.store, room_id, stay, exclude)? {
            warn!("Room {room_id} is already booked during {stay}");
            return Err(Error::RoomUnavailable {
                room_id: room_id.to_string(),
                checkin: stay.checkin(),
                checkout: stay.checkout(),
            });
        }
        Ok(())
    }
}

/// Parses the request's status, treating a blank value as unset.
fn requested_status(request: &ReservationRequest) -> Result<Option<ReservationStatus>> {
    match request.status.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(status) => Ok(Some(status.parse()?)),
    }
}

fn not_found(id: &ReservationId) -> Error {
    Error::NotFound {
        resource: format!("reservation {id}"),
    }
}
