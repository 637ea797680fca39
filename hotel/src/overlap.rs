//! Double-booking detection.
//!
//! Two stays `[a_in, a_out)` and `[b_in, b_out)` overlap iff
//! `a_in < b_out && b_in < a_out`. Only reservations that still hold
//! their room (anything but `CANCELED`) are considered.

use log::debug;

use crate::dates::StayDates;
use crate::error::Result;
use crate::reservation::{Reservation, ReservationId};
use crate::room::RoomId;
use crate::storage::ReservationStore;

/// A question put to a store: is `room_id` free for `stay`, ignoring
/// `exclude`?
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlapQuery {
    /// The room being booked.
    pub room_id: RoomId,
    /// The nights being booked.
    pub stay: StayDates,
    /// A reservation to leave out, typically the one being updated.
    pub exclude: Option<ReservationId>,
}

impl OverlapQuery {
    /// Creates a query with no exclusion.
    #[must_use]
    pub const fn new(room_id: RoomId, stay: StayDates) -> Self {
        Self {
            room_id,
            stay,
            exclude: None,
        }
    }

    /// Leaves `id` out of the check.
    #[must_use]
    pub fn excluding(mut self, id: ReservationId) -> Self {
        self.exclude = Some(id);
        self
    }

    /// Returns `true` if `reservation` conflicts with this query.
    #[must_use]
    pub fn is_blocked_by(&self, reservation: &Reservation) -> bool {
        reservation.blocks(&self.room_id, &self.stay, self.exclude.as_ref())
    }

    /// Returns the reservations among `reservations` that conflict with
    /// this query.
    pub fn conflicts_in<'r>(
        &self,
        reservations: impl IntoIterator<Item = &'r Reservation>,
    ) -> Vec<&'r Reservation> {
        reservations
            .into_iter()
            .filter(|r| self.is_blocked_by(r))
            .collect()
    }
}

/// Reports whether any non-canceled reservation of `room_id` overlaps
/// `stay`, ignoring the reservation `exclude` if given.
///
/// # Errors
///
/// Returns an error if the store cannot be queried.
///
/// # Examples
///
/// ```
/// use hotel::dates::validate_range;
/// use hotel::overlap::has_conflict;
/// use hotel::storage::InMemoryStore;
/// use hotel::RoomId;
///
/// let store = InMemoryStore::new();
/// let stay = validate_range("2025-06-01", "2025-06-05").unwrap();
/// assert!(!has_conflict(&store, &RoomId::new("room-1"), &stay, None).unwrap());
/// ```
pub fn has_conflict<S: ReservationStore + ?Sized>(
    store: &S,
    room_id: &RoomId,
    stay: &StayDates,
    exclude: Option<&ReservationId>,
) -> Result<bool> {
    let mut query = OverlapQuery::new(room_id.clone(), *stay);
    if let Some(id) = exclude {
        query = query.excluding(id.clone());
    }

    let conflict = store.has_overlap(&query)?;
    debug!("Overlap check for room {room_id} over {stay}: conflict={conflict}");
    Ok(conflict)
}
