//! Demo data for a fresh database.

use chrono::{Duration, NaiveDate};
use log::{debug, info};
use rust_decimal::Decimal;

use crate::dates::DATE_FORMAT;
use crate::error::Result;
use crate::reservation::{ReservationId, ReservationRequest};
use crate::room::{RoomId, RoomRequest};
use crate::status::ReservationStatus;
use crate::storage::{ReservationStore, RoomStore};

use super::reservations::ReservationService;
use super::rooms::RoomService;

/// What a call to [`seed`] inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedResult {
    /// Rooms inserted, in number order.
    pub rooms: Vec<RoomId>,
    /// Reservations inserted.
    pub reservations: Vec<ReservationId>,
}

impl SeedResult {
    /// Returns `true` if nothing was inserted because rooms already existed.
    #[must_use]
    pub fn skipped(&self) -> bool {
        self.rooms.is_empty() && self.reservations.is_empty()
    }
}

// number, type, capacity, price in cents, status
const ROOMS: [(i64, &str, i64, i64, &str); 5] = [
    (101, "STANDARD", 1, 12050, "ATIVO"),
    (102, "STANDARD", 2, 18000, "ATIVO"),
    (201, "DELUXE", 3, 25000, "ATIVO"),
    (202, "DELUXE", 2, 30000, "INATIVO"),
    (301, "SUITE", 4, 50000, "ATIVO"),
];

// guest, nights, status, amount in cents; one per seeded room, in order
const RESERVATIONS: [(&str, i64, ReservationStatus, i64); 5] = [
    ("Alice Silva", 2, ReservationStatus::Created, 24000),
    ("Bruno Lima", 3, ReservationStatus::CheckedIn, 54000),
    ("Carla Souza", 2, ReservationStatus::CheckedOut, 50000),
    ("Daniel Rocha", 3, ReservationStatus::Created, 90000),
    ("Elisa Costa", 2, ReservationStatus::Canceled, 100_000),
];

/// Inserts five demo rooms and one demo reservation per room, each
/// starting on `today`.
///
/// Does nothing if any room already exists. Reservations go through
/// [`ReservationService`], so they satisfy every lifecycle rule.
///
/// # Errors
///
/// Returns an error if the store fails.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use hotel::operations::seed;
/// use hotel::storage::InMemoryStore;
///
/// let store = InMemoryStore::new();
/// let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
///
/// let first = seed(&store, today).unwrap();
/// assert_eq!(first.rooms.len(), 5);
///
/// let second = seed(&store, today).unwrap();
/// assert!(second.skipped());
/// ```
pub fn seed<S>(store: &S, today: NaiveDate) -> Result<SeedResult>
where
    S: ReservationStore + RoomStore + ?Sized,
{
    let rooms = RoomService::new(store);
    if !rooms.list()?.is_empty() {
        debug!("Rooms already present; skipping seed");
        return Ok(SeedResult::default());
    }

    let mut result = SeedResult::default();
    for (number, room_type, capacity, cents, status) in ROOMS {
        let id = rooms.create(&RoomRequest {
            number,
            room_type: room_type.into(),
            capacity,
            price_per_night: Decimal::new(cents, 2),
            status: status.into(),
        })?;
        result.rooms.push(id);
    }

    let reservations = ReservationService::new(store);
    let checkin = today.format(DATE_FORMAT).to_string();
    for (room_id, (guest, nights, status, cents)) in result.rooms.iter().zip(RESERVATIONS) {
        let checkout = (today + Duration::days(nights)).format(DATE_FORMAT).to_string();
        let request = ReservationRequest::new(
            room_id.as_str(),
            guest,
            checkin.as_str(),
            checkout,
            Decimal::new(cents, 2),
        )
        .with_status(status.as_str());
        result.reservations.push(reservations.create(request)?);
    }

    info!(
        "Seeded {} rooms and {} reservations",
        result.rooms.len(),
        result.reservations.len()
    );
    Ok(result)
}
