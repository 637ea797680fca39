//! SQLite storage for reservations.

use std::str::FromStr;

use log::debug;
use rusqlite::{params, Connection, OptionalExtension};
use rust_decimal::Decimal;

use crate::dates::{parse_date, DateField, StayDates};
use crate::error::{Error, Result};
use crate::overlap::OverlapQuery;
use crate::reservation::{NewReservation, Reservation, ReservationId};
use crate::room::RoomId;
use crate::status::ReservationStatus;
use crate::storage::ReservationStore;

use super::connection::Database;
use super::constraints::{conversion_failure, from_row_error, violation, Violation};

const INSERT_RESERVATION: &str = r"
    INSERT INTO reservations
    (id, room_id, guest_name, checkin, checkout, status, total_amount)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
";

const UPDATE_RESERVATION: &str = r"
    UPDATE reservations
    SET room_id = ?2, guest_name = ?3, checkin = ?4, checkout = ?5,
        status = ?6, total_amount = ?7
    WHERE id = ?1
";

const DELETE_RESERVATION: &str = "DELETE FROM reservations WHERE id = ?";

const SELECT_RESERVATION: &str = r"
    SELECT id, room_id, guest_name, checkin, checkout, status, total_amount
    FROM reservations
    WHERE id = ?
";

const LIST_RESERVATIONS: &str = r"
    SELECT id, room_id, guest_name, checkin, checkout, status, total_amount
    FROM reservations
    ORDER BY checkin, id
";

// Half-open overlap on YYYY-MM-DD text, which sorts in date order.
// `?2 IS NULL` keeps the check when there is nothing to exclude.
const HAS_OVERLAP: &str = r"
    SELECT EXISTS (
        SELECT 1 FROM reservations
        WHERE room_id = ?1
          AND (?2 IS NULL OR id != ?2)
          AND status != 'CANCELED'
          AND checkin < ?4
          AND ?3 < checkout
    )
";

/// Maps a row to a reservation.
///
/// Expects columns in this order: id, `room_id`, `guest_name`, checkin,
/// checkout, status, `total_amount`.
fn row_to_reservation(row: &rusqlite::Row<'_>) -> rusqlite::Result<Reservation> {
    let id: String = row.get(0)?;
    let room_id: String = row.get(1)?;
    let guest_name: String = row.get(2)?;
    let checkin: String = row.get(3)?;
    let checkout: String = row.get(4)?;
    let status: String = row.get(5)?;
    let total_amount: String = row.get(6)?;

    let checkin =
        parse_date(&checkin, DateField::Checkin).map_err(|e| conversion_failure(3, e))?;
    let checkout =
        parse_date(&checkout, DateField::Checkout).map_err(|e| conversion_failure(4, e))?;
    let stay = StayDates::new(checkin, checkout).map_err(|e| conversion_failure(4, e))?;
    let status =
        ReservationStatus::from_str(&status).map_err(|e| conversion_failure(5, e))?;
    let total_amount =
        Decimal::from_str(&total_amount).map_err(|e| conversion_failure(6, e))?;

    Ok(Reservation {
        id: ReservationId::new(id),
        room_id: RoomId::new(room_id),
        guest_name,
        stay,
        status,
        total_amount,
    })
}

fn missing_room(room_id: &RoomId) -> Error {
    Error::NotFound {
        resource: format!("room {room_id}"),
    }
}

impl ReservationStore for Connection {
    fn insert_reservation(&self, reservation: &NewReservation) -> Result<ReservationId> {
        let id = ReservationId::generate();

        let result = self.execute(
            INSERT_RESERVATION,
            params![
                id.as_str(),
                reservation.room_id.as_str(),
                reservation.guest_name,
                reservation.stay.checkin().to_string(),
                reservation.stay.checkout().to_string(),
                reservation.status.as_str(),
                reservation.total_amount.to_string(),
            ],
        );

        match result {
            Ok(_) => {
                debug!("Inserted reservation {id} for room {}", reservation.room_id);
                Ok(id)
            }
            Err(e) => Err(match violation(&e) {
                Some(Violation::ForeignKey) => missing_room(&reservation.room_id),
                Some(Violation::Unique) => Error::Conflict {
                    details: format!("reservation {id} already exists"),
                },
                _ => Error::Database(e),
            }),
        }
    }

    fn update_reservation(&self, reservation: &Reservation) -> Result<bool> {
        let result = self.execute(
            UPDATE_RESERVATION,
            params![
                reservation.id.as_str(),
                reservation.room_id.as_str(),
                reservation.guest_name,
                reservation.stay.checkin().to_string(),
                reservation.stay.checkout().to_string(),
                reservation.status.as_str(),
                reservation.total_amount.to_string(),
            ],
        );

        match result {
            Ok(rows_affected) => Ok(rows_affected > 0),
            Err(e) if violation(&e) == Some(Violation::ForeignKey) => {
                Err(missing_room(&reservation.room_id))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn delete_reservation(&self, id: &ReservationId) -> Result<bool> {
        let rows_affected = self.execute(DELETE_RESERVATION, [id.as_str()])?;
        Ok(rows_affected > 0)
    }

    fn get_reservation(&self, id: &ReservationId) -> Result<Option<Reservation>> {
        self.query_row(SELECT_RESERVATION, [id.as_str()], row_to_reservation)
            .optional()
            .map_err(from_row_error)
    }

    fn list_reservations(&self) -> Result<Vec<Reservation>> {
        let mut stmt = self.prepare(LIST_RESERVATIONS)?;
        let rows = stmt.query_map([], row_to_reservation)?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(from_row_error)
    }

    fn has_overlap(&self, query: &OverlapQuery) -> Result<bool> {
        let exists: bool = self.query_row(
            HAS_OVERLAP,
            params![
                query.room_id.as_str(),
                query.exclude.as_ref().map(ReservationId::as_str),
                query.stay.checkin().to_string(),
                query.stay.checkout().to_string(),
            ],
            |row| row.get(0),
        )?;
        Ok(exists)
    }
}

impl ReservationStore for Database {
    fn insert_reservation(&self, reservation: &NewReservation) -> Result<ReservationId> {
        self.conn.insert_reservation(reservation)
    }

    fn update_reservation(&self, reservation: &Reservation) -> Result<bool> {
        self.conn.update_reservation(reservation)
    }

    fn delete_reservation(&self, id: &ReservationId) -> Result<bool> {
        self.conn.delete_reservation(id)
    }

    fn get_reservation(&self, id: &ReservationId) -> Result<Option<Reservation>> {
        self.conn.get_reservation(id)
    }

    fn list_reservations(&self) -> Result<Vec<Reservation>> {
        self.conn.list_reservations()
    }

    fn has_overlap(&self, query: &OverlapQuery) -> Result<bool> {
        self.conn.has_overlap(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::{create_test_database, create_test_room};
    use crate::dates::validate_range;

    fn booking(room_id: &RoomId, checkin: &str, checkout: &str) -> NewReservation {
        NewReservation {
            room_id: room_id.clone(),
            guest_name: "Alice Silva".into(),
            stay: validate_range(checkin, checkout).unwrap(),
            status: ReservationStatus::Created,
            total_amount: Decimal::new(24050, 2),
        }
    }

    #[test]
    fn test_insert_and_get_round_trip() {
        let db = create_test_database();
        let room = create_test_room(&db, 101);

        let new = booking(&room, "2025-06-01", "2025-06-05");
        let id = db.insert_reservation(&new).unwrap();
        assert!(!id.as_str().is_empty());

        let fetched = db.get_reservation(&id).unwrap().unwrap();
        assert_eq!(fetched, new.with_id(id));
        assert_eq!(fetched.total_amount.to_string(), "240.50");
    }

    #[test]
    fn test_get_missing_returns_none() {
        let db = create_test_database();
        assert!(db
            .get_reservation(&ReservationId::new("nope"))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_insert_for_missing_room_is_not_found() {
        let db = create_test_database();
        let err = db
            .insert_reservation(&booking(&RoomId::new("ghost"), "2025-06-01", "2025-06-02"))
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("ghost"));
    }

    #[test]
    fn test_update_and_delete() {
        let db = create_test_database();
        let room = create_test_room(&db, 101);
        let id = db
            .insert_reservation(&booking(&room, "2025-06-01", "2025-06-05"))
            .unwrap();

        let mut stored = db.get_reservation(&id).unwrap().unwrap();
        stored.status = ReservationStatus::CheckedIn;
        stored.guest_name = "Bruno Lima".into();
        assert!(db.update_reservation(&stored).unwrap());
        assert_eq!(db.get_reservation(&id).unwrap().unwrap(), stored);

        assert!(db.delete_reservation(&id).unwrap());
        assert!(!db.delete_reservation(&id).unwrap());
        assert!(db.get_reservation(&id).unwrap().is_none());
    }

    #[test]
    fn test_update_missing_returns_false() {
        let db = create_test_database();
        let room = create_test_room(&db, 101);
        let ghost = booking(&room, "2025-06-01", "2025-06-05").with_id(ReservationId::new("ghost"));
        assert!(!db.update_reservation(&ghost).unwrap());
    }

    #[test]
    fn test_update_to_missing_room_is_not_found() {
        let db = create_test_database();
        let room = create_test_room(&db, 101);
        let id = db
            .insert_reservation(&booking(&room, "2025-06-01", "2025-06-05"))
            .unwrap();

        let mut stored = db.get_reservation(&id).unwrap().unwrap();
        stored.room_id = RoomId::new("ghost");
        assert!(db.update_reservation(&stored).unwrap_err().is_not_found());
    }

    #[test]
    fn test_list_is_ordered_by_checkin() {
        let db = create_test_database();
        let room = create_test_room(&db, 101);
        db.insert_reservation(&booking(&room, "2025-07-01", "2025-07-02"))
            .unwrap();
        db.insert_reservation(&booking(&room, "2025-06-01", "2025-06-02"))
            .unwrap();

        let checkins: Vec<_> = db
            .list_reservations()
            .unwrap()
            .iter()
            .map(|r| r.stay.checkin().to_string())
            .collect();
        assert_eq!(checkins, vec!["2025-06-01", "2025-07-01"]);
    }

    #[test]
    fn test_has_overlap_sql_matches_half_open_rule() {
        let db = create_test_database();
        let room = create_test_room(&db, 101);
        let other_room = create_test_room(&db, 102);
        let id = db
            .insert_reservation(&booking(&room, "2025-06-01", "2025-06-05"))
            .unwrap();

        let query = |checkin: &str, checkout: &str| {
            OverlapQuery::new(room.clone(), validate_range(checkin, checkout).unwrap())
        };

        assert!(db.has_overlap(&query("2025-06-03", "2025-06-07")).unwrap());
        assert!(db.has_overlap(&query("2025-05-30", "2025-06-02")).unwrap());
        assert!(db.has_overlap(&query("2025-06-02", "2025-06-03")).unwrap());
        assert!(!db.has_overlap(&query("2025-06-05", "2025-06-08")).unwrap());
        assert!(!db.has_overlap(&query("2025-05-28", "2025-06-01")).unwrap());

        let excluded = query("2025-06-01", "2025-06-05").excluding(id);
        assert!(!db.has_overlap(&excluded).unwrap());

        let elsewhere = OverlapQuery::new(
            other_room,
            validate_range("2025-06-01", "2025-06-05").unwrap(),
        );
        assert!(!db.has_overlap(&elsewhere).unwrap());
    }

    #[test]
    fn test_canceled_rows_do_not_overlap() {
        let db = create_test_database();
        let room = create_test_room(&db, 101);
        let mut canceled = booking(&room, "2025-06-01", "2025-06-05");
        canceled.status = ReservationStatus::Canceled;
        db.insert_reservation(&canceled).unwrap();

        let query = OverlapQuery::new(room, validate_range("2025-06-01", "2025-06-05").unwrap());
        assert!(!db.has_overlap(&query).unwrap());
    }

    #[test]
    fn test_corrupt_status_surfaces_as_unknown_status() {
        let db = create_test_database();
        let room = create_test_room(&db, 101);
        let id = db
            .insert_reservation(&booking(&room, "2025-06-01", "2025-06-05"))
            .unwrap();
        db.connection()
            .execute(
                "UPDATE reservations SET status = 'ARCHIVED' WHERE id = ?",
                [id.as_str()],
            )
            .unwrap();

        let err = db.get_reservation(&id).unwrap_err();
        assert!(matches!(err, Error::UnknownStatus { ref value } if value == "ARCHIVED"));
    }
}
