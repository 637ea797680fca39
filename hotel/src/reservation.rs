//! Reservation types and field validation.
//!
//! A reservation moves through three shapes:
//!
//! - [`ReservationRequest`]: what a caller asks for, with dates and status
//!   still as raw strings.
//! - [`NewReservation`]: a validated booking that has not been stored yet.
//! - [`Reservation`]: a stored booking with its identifier.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dates::StayDates;
use crate::room::RoomId;
use crate::status::ReservationStatus;

#[cfg(test)]
mod proptests;

/// Opaque unique identifier of a reservation.
///
/// # Examples
///
/// ```
/// use hotel::ReservationId;
///
/// let a = ReservationId::generate();
/// let b = ReservationId::generate();
/// assert_ne!(a, b);
/// assert_eq!(a.as_str().len(), 36);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(String);

impl ReservationId {
    /// Wraps an existing identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh random (UUID v4) identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ReservationId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ReservationId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A caller's intent to create or change a reservation.
///
/// Dates and status are kept as the caller supplied them; they are parsed
/// and checked by the reservation service.
///
/// # Examples
///
/// ```
/// use hotel::ReservationRequest;
/// use rust_decimal::Decimal;
///
/// let request = ReservationRequest::new("room-1", "Ana", "2025-06-01", "2025-06-05", Decimal::new(48000, 2))
///     .with_status("CHECKED_IN");
/// assert_eq!(request.status.as_deref(), Some("CHECKED_IN"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationRequest {
    /// Identifier of the room to book.
    pub room_id: String,
    /// Name of the guest.
    pub guest_name: String,
    /// Arrival date, `YYYY-MM-DD`.
    pub checkin: String,
    /// Departure date, `YYYY-MM-DD`.
    pub checkout: String,
    /// Requested status. Unset means `CREATED` on create and "unchanged"
    /// on update.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Total price of the stay.
    pub total_amount: Decimal,
}

impl ReservationRequest {
    /// Creates a request with no explicit status.
    #[must_use]
    pub fn new(
        room_id: impl Into<String>,
        guest_name: impl Into<String>,
        checkin: impl Into<String>,
        checkout: impl Into<String>,
        total_amount: Decimal,
    ) -> Self {
        Self {
            room_id: room_id.into(),
            guest_name: guest_name.into(),
            checkin: checkin.into(),
            checkout: checkout.into(),
            status: None,
            total_amount,
        }
    }

    /// Sets the requested status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Checks the plain field constraints: room reference and guest name
    /// non-empty after trimming, total amount positive.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the first offending field.
    pub fn validate_fields(&self) -> Result<(), ValidationError> {
        if self.room_id.trim().is_empty() {
            return Err(ValidationError::new("room_id", "room reference is required"));
        }

        if self.guest_name.trim().is_empty() {
            return Err(ValidationError::new(
                "guest_name",
                "guest name must be non-empty after trimming whitespace",
            ));
        }

        if self.total_amount <= Decimal::ZERO {
            return Err(ValidationError::new(
                "total_amount",
                format!("total amount must be positive, got {}", self.total_amount),
            ));
        }

        Ok(())
    }

    /// Combines the request's fields with already validated dates and
    /// status.
    ///
    /// Room reference and guest name are trimmed.
    #[must_use]
    pub fn into_new_reservation(self, stay: StayDates, status: ReservationStatus) -> NewReservation {
        NewReservation {
            room_id: RoomId::new(self.room_id.trim()),
            guest_name: self.guest_name.trim().to_string(),
            stay,
            status,
            total_amount: self.total_amount,
        }
    }
}

impl From<&Reservation> for ReservationRequest {
    fn from(reservation: &Reservation) -> Self {
        Self {
            room_id: reservation.room_id.to_string(),
            guest_name: reservation.guest_name.clone(),
            checkin: reservation.stay.checkin().to_string(),
            checkout: reservation.stay.checkout().to_string(),
            status: Some(reservation.status.to_string()),
            total_amount: reservation.total_amount,
        }
    }
}

/// A validated reservation that has not been assigned an identifier yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReservation {
    /// The booked room.
    pub room_id: RoomId,
    /// Name of the guest.
    pub guest_name: String,
    /// The booked nights.
    #[serde(flatten)]
    pub stay: StayDates,
    /// Lifecycle status.
    pub status: ReservationStatus,
    /// Total price of the stay.
    pub total_amount: Decimal,
}

impl NewReservation {
    /// Attaches an identifier, producing a stored reservation.
    #[must_use]
    pub fn with_id(self, id: ReservationId) -> Reservation {
        Reservation {
            id,
            room_id: self.room_id,
            guest_name: self.guest_name,
            stay: self.stay,
            status: self.status,
            total_amount: self.total_amount,
        }
    }
}

/// A stored reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// Unique identifier.
    pub id: ReservationId,
    /// The booked room.
    pub room_id: RoomId,
    /// Name of the guest.
    pub guest_name: String,
    /// The booked nights.
    #[serde(flatten)]
    pub stay: StayDates,
    /// Lifecycle status.
    pub status: ReservationStatus,
    /// Total price of the stay.
    pub total_amount: Decimal,
}

impl Reservation {
    /// Returns `true` if this reservation prevents booking `room_id` for
    /// `stay`.
    ///
    /// A reservation blocks when it is for the same room, is not canceled,
    /// is not the excluded reservation, and its nights overlap `stay`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hotel::dates::validate_range;
    /// use hotel::{NewReservation, ReservationId, ReservationStatus, RoomId};
    /// use rust_decimal::Decimal;
    ///
    /// let booked = NewReservation {
    ///     room_id: RoomId::new("room-1"),
    ///     guest_name: "Ana".into(),
    ///     stay: validate_range("2025-06-01", "2025-06-05").unwrap(),
    ///     status: ReservationStatus::Created,
    ///     total_amount: Decimal::ONE,
    /// }
    /// .with_id(ReservationId::new("r-1"));
    ///
    /// let wanted = validate_range("2025-06-03", "2025-06-07").unwrap();
    /// assert!(booked.blocks(&RoomId::new("room-1"), &wanted, None));
    /// assert!(!booked.blocks(&RoomId::new("room-2"), &wanted, None));
    /// assert!(!booked.blocks(&RoomId::new("room-1"), &wanted, Some(&booked.id)));
    /// ```
    #[must_use]
    pub fn blocks(
        &self,
        room_id: &RoomId,
        stay: &StayDates,
        exclude: Option<&ReservationId>,
    ) -> bool {
        &self.room_id == room_id
            && self.status.occupies_room()
            && exclude != Some(&self.id)
            && self.stay.overlaps(stay)
    }
}

/// Error type for a reservation field that fails validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl ValidationError {
    /// Creates a validation error for `field`.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}
