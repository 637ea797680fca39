//! Shared helpers for database unit tests.

use rust_decimal::Decimal;
use tempfile::tempdir;

use crate::database::{Database, DatabaseConfig};
use crate::room::{RoomDetails, RoomId, RoomStatus, RoomType};
use crate::storage::RoomStore;

/// Creates a database in a temporary directory.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let db = Database::open(DatabaseConfig::new(path)).unwrap();

    // Keep the directory alive for the lifetime of the test process
    std::mem::forget(dir);

    db
}

/// Inserts an active standard room with the given number.
///
/// # Panics
///
/// Panics if the room cannot be inserted.
pub fn create_test_room(store: &impl RoomStore, number: u32) -> RoomId {
    store
        .insert_room(&RoomDetails {
            number,
            room_type: RoomType::Standard,
            capacity: 2,
            price_per_night: Decimal::new(15000, 2),
            status: RoomStatus::Active,
        })
        .unwrap()
}
