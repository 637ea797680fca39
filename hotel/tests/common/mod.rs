//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the hotel library against a real SQLite file.

use std::path::PathBuf;

use rust_decimal::Decimal;
use tempfile::TempDir;

use hotel::database::{Database, DatabaseConfig};
use hotel::{ReservationRequest, RoomId, RoomRequest, RoomService};

/// Opens a database in a fresh temporary directory.
///
/// The directory is removed when the returned `TempDir` is dropped, so keep
/// it alive for the duration of the test.
#[allow(dead_code)]
pub fn open_temp_database() -> (TempDir, Database) {
    let temp_dir = TempDir::new().unwrap();
    let db = Database::open(DatabaseConfig::new(temp_dir.path().join("hotel.db"))).unwrap();
    (temp_dir, db)
}

/// Returns the database path inside `dir`.
#[allow(dead_code)]
pub fn database_path(dir: &TempDir) -> PathBuf {
    dir.path().join("hotel.db")
}

/// Builds a valid room request with the given number.
#[allow(dead_code)]
pub fn room_request(number: i64) -> RoomRequest {
    RoomRequest {
        number,
        room_type: "STANDARD".into(),
        capacity: 2,
        price_per_night: Decimal::new(12050, 2),
        status: "ATIVO".into(),
    }
}

/// Adds a room through the room service and returns its identifier.
#[allow(dead_code)]
pub fn add_room(db: &Database, number: i64) -> RoomId {
    RoomService::new(db).create(&room_request(number)).unwrap()
}

/// Builder for reservation requests with sensible defaults.
#[allow(dead_code)]
pub struct BookingFixture {
    room_id: String,
    guest_name: String,
    checkin: String,
    checkout: String,
    status: Option<String>,
    total_amount: Decimal,
}

#[allow(dead_code)]
impl BookingFixture {
    /// Starts a four-night booking of `room` from 2025-06-01.
    pub fn new(room: &RoomId) -> Self {
        Self {
            room_id: room.to_string(),
            guest_name: "Alice Silva".into(),
            checkin: "2025-06-01".into(),
            checkout: "2025-06-05".into(),
            status: None,
            total_amount: Decimal::new(48000, 2),
        }
    }

    /// Sets the stay dates.
    pub fn dates(mut self, checkin: &str, checkout: &str) -> Self {
        self.checkin = checkin.into();
        self.checkout = checkout.into();
        self
    }

    /// Sets the guest name.
    pub fn guest(mut self, name: &str) -> Self {
        self.guest_name = name.into();
        self
    }

    /// Sets the requested status.
    pub fn status(mut self, status: &str) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets the total amount.
    pub fn amount(mut self, amount: Decimal) -> Self {
        self.total_amount = amount;
        self
    }

    /// Builds the request.
    pub fn build(self) -> ReservationRequest {
        let request = ReservationRequest::new(
            self.room_id,
            self.guest_name,
            self.checkin,
            self.checkout,
            self.total_amount,
        );
        match self.status {
            Some(status) => request.with_status(status),
            None => request,
        }
    }
}
