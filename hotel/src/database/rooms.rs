//! SQLite storage for rooms.

use std::str::FromStr;

use log::debug;
use rusqlite::{params, Connection, OptionalExtension};
use rust_decimal::Decimal;

use crate::error::{Error, Result};
use crate::room::{Room, RoomDetails, RoomId, RoomStatus, RoomType};
use crate::storage::RoomStore;

use super::connection::Database;
use super::constraints::{conversion_failure, violation, Violation};

const INSERT_ROOM: &str = r"
    INSERT INTO rooms (id, number, type, capacity, price_per_night, status)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6)
";

const UPDATE_ROOM: &str = r"
    UPDATE rooms
    SET number = ?2, type = ?3, capacity = ?4, price_per_night = ?5, status = ?6
    WHERE id = ?1
";

const DELETE_ROOM: &str = "DELETE FROM rooms WHERE id = ?";

const SELECT_ROOM: &str = r"
    SELECT id, number, type, capacity, price_per_night, status
    FROM rooms
    WHERE id = ?
";

const LIST_ROOMS: &str = r"
    SELECT id, number, type, capacity, price_per_night, status
    FROM rooms
    ORDER BY number
";

fn row_to_room(row: &rusqlite::Row<'_>) -> rusqlite::Result<Room> {
    let id: String = row.get(0)?;
    let number: u32 = row.get(1)?;
    let room_type: String = row.get(2)?;
    let capacity: u32 = row.get(3)?;
    let price: String = row.get(4)?;
    let status: String = row.get(5)?;

    Ok(RoomDetails {
        number,
        room_type: RoomType::from_str(&room_type).map_err(|e| conversion_failure(2, e))?,
        capacity,
        price_per_night: Decimal::from_str(&price).map_err(|e| conversion_failure(4, e))?,
        status: RoomStatus::from_str(&status).map_err(|e| conversion_failure(5, e))?,
    }
    .with_id(RoomId::new(id)))
}

fn number_taken(number: u32) -> Error {
    Error::Conflict {
        details: format!("room number {number} already exists"),
    }
}

impl RoomStore for Connection {
    fn insert_room(&self, room: &RoomDetails) -> Result<RoomId> {
        let id = RoomId::generate();

        let result = self.execute(
            INSERT_ROOM,
            params![
                id.as_str(),
                room.number,
                room.room_type.as_str(),
                room.capacity,
                room.price_per_night.to_string(),
                room.status.as_str(),
            ],
        );

        match result {
            Ok(_) => {
                debug!("Inserted room {} as {id}", room.number);
                Ok(id)
            }
            Err(e) if violation(&e) == Some(Violation::Unique) => Err(number_taken(room.number)),
            Err(e) => Err(e.into()),
        }
    }

    fn update_room(&self, room: &Room) -> Result<bool> {
        let details = &room.details;
        let result = self.execute(
            UPDATE_ROOM,
            params![
                room.id.as_str(),
                details.number,
                details.room_type.as_str(),
                details.capacity,
                details.price_per_night.to_string(),
                details.status.as_str(),
            ],
        );

        match result {
            Ok(rows_affected) => Ok(rows_affected > 0),
            Err(e) if violation(&e) == Some(Violation::Unique) => {
                Err(number_taken(details.number))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn delete_room(&self, id: &RoomId) -> Result<bool> {
        match self.execute(DELETE_ROOM, [id.as_str()]) {
            Ok(rows_affected) => Ok(rows_affected > 0),
            Err(e) if violation(&e) == Some(Violation::ForeignKey) => Err(Error::Conflict {
                details: format!("room {id} still has reservations"),
            }),
            Err(e) => Err(e.into()),
        }
    }

    fn get_room(&self, id: &RoomId) -> Result<Option<Room>> {
        Ok(self
            .query_row(SELECT_ROOM, [id.as_str()], row_to_room)
            .optional()?)
    }

    fn list_rooms(&self) -> Result<Vec<Room>> {
        let mut stmt = self.prepare(LIST_ROOMS)?;
        let rooms = stmt
            .query_map([], row_to_room)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rooms)
    }
}

impl RoomStore for Database {
    fn insert_room(&self, room: &RoomDetails) -> Result<RoomId> {
        self.conn.insert_room(room)
    }

    fn update_room(&self, room: &Room) -> Result<bool> {
        self.conn.update_room(room)
    }

    fn delete_room(&self, id: &RoomId) -> Result<bool> {
        self.conn.delete_room(id)
    }

    fn get_room(&self, id: &RoomId) -> Result<Option<Room>> {
        self.conn.get_room(id)
    }

    fn list_rooms(&self) -> Result<Vec<Room>> {
        self.conn.list_rooms()
    }
}
