//! Room catalogue types and their field validation.
//!
//! Rooms are referenced by reservations but carry no lifecycle of their
//! own: every field is checked independently and all violations are
//! reported together.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::reservation::ValidationError;

/// Opaque unique identifier of a room.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(String);

impl RoomId {
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

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoomId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for RoomId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Category of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RoomType {
    /// Basic room.
    Standard,
    /// Upgraded room.
    Deluxe,
    /// Multi-room suite.
    Suite,
}

impl RoomType {
    /// Returns the canonical upper-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "STANDARD",
            Self::Deluxe => "DELUXE",
            Self::Suite => "SUITE",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "STANDARD" => Ok(Self::Standard),
            "DELUXE" => Ok(Self::Deluxe),
            "SUITE" => Ok(Self::Suite),
            _ => Err(ValidationError::new(
                "type",
                "must be one of: STANDARD, DELUXE, SUITE",
            )),
        }
    }
}

/// Whether a room is in service.
///
/// Stored and displayed with the names `ATIVO` and `INATIVO`; `ACTIVE` and
/// `INACTIVE` are accepted on input.
///
/// # Examples
///
/// ```
/// use hotel::RoomStatus;
///
/// assert_eq!("ACTIVE".parse::<RoomStatus>().unwrap(), RoomStatus::Active);
/// assert_eq!(RoomStatus::Inactive.to_string(), "INATIVO");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RoomStatus {
    /// Available for booking.
    #[default]
    #[serde(rename = "ATIVO", alias = "ACTIVE")]
    Active,
    /// Out of service.
    #[serde(rename = "INATIVO", alias = "INACTIVE")]
    Inactive,
}

impl RoomStatus {
    /// Returns the stored name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ATIVO",
            Self::Inactive => "INATIVO",
        }
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ATIVO" | "ACTIVE" => Ok(Self::Active),
            "INATIVO" | "INACTIVE" => Ok(Self::Inactive),
            _ => Err(ValidationError::new("status", "must be one of: ATIVO, INATIVO")),
        }
    }
}

/// A caller's intent to create or replace a room.
///
/// Numeric fields are signed and type/status are raw strings so that bad
/// input can be reported field by field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRequest {
    /// Room number shown to guests.
    pub number: i64,
    /// `STANDARD`, `DELUXE`, or `SUITE`.
    #[serde(rename = "type")]
    pub room_type: String,
    /// Number of guests the room sleeps.
    pub capacity: i64,
    /// Nightly rate.
    pub price_per_night: Decimal,
    /// `ATIVO` or `INATIVO`.
    pub status: String,
}

impl RoomRequest {
    /// Validates every field, collecting all violations.
    ///
    /// # Errors
    ///
    /// Returns a [`RoomValidationError`] listing each invalid field.
    ///
    /// # Examples
    ///
    /// ```
    /// use hotel::RoomRequest;
    /// use rust_decimal::Decimal;
    ///
    /// let request = RoomRequest {
    ///     number: 0,
    ///     room_type: "PENTHOUSE".into(),
    ///     capacity: 2,
    ///     price_per_night: Decimal::new(10000, 2),
    ///     status: "ATIVO".into(),
    /// };
    /// let err = request.validate().unwrap_err();
    /// assert_eq!(err.violations().len(), 2);
    /// ```
    pub fn validate(&self) -> Result<RoomDetails, RoomValidationError> {
        let mut violations = Vec::new();

        let number = match u32::try_from(self.number) {
            Ok(n) if n > 0 => Some(n),
            _ => {
                violations.push(ValidationError::new("number", "must be greater than 0"));
                None
            }
        };

        let capacity = match u32::try_from(self.capacity) {
            Ok(c) if c > 0 => Some(c),
            _ => {
                violations.push(ValidationError::new("capacity", "must be greater than 0"));
                None
            }
        };

        if self.price_per_night <= Decimal::ZERO {
            violations.push(ValidationError::new(
                "price_per_night",
                "must be greater than 0",
            ));
        }

        let room_type = self
            .room_type
            .parse::<RoomType>()
            .map_err(|e| violations.push(e))
            .ok();

        let status = self
            .status
            .parse::<RoomStatus>()
            .map_err(|e| violations.push(e))
            .ok();

        match (number, capacity, room_type, status) {
            (Some(number), Some(capacity), Some(room_type), Some(status)) if violations.is_empty() => {
                Ok(RoomDetails {
                    number,
                    room_type,
                    capacity,
                    price_per_night: self.price_per_night,
                    status,
                })
            }
            _ => Err(RoomValidationError { violations }),
        }
    }
}

/// Validated room fields without an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomDetails {
    /// Room number, unique across the hotel.
    pub number: u32,
    /// Room category.
    #[serde(rename = "type")]
    pub room_type: RoomType,
    /// Number of guests the room sleeps.
    pub capacity: u32,
    /// Nightly rate.
    pub price_per_night: Decimal,
    /// Service status.
    pub status: RoomStatus,
}

impl RoomDetails {
    /// Attaches an identifier, producing a stored room.
    #[must_use]
    pub fn with_id(self, id: RoomId) -> Room {
        Room { id, details: self }
    }
}

/// A stored room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique identifier.
    pub id: RoomId,
    /// The room's fields.
    #[serde(flatten)]
    pub details: RoomDetails,
}

/// Error type listing every invalid field of a room request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomValidationError {
    violations: Vec<ValidationError>,
}

impl RoomValidationError {
    /// Returns the individual field violations, in field order.
    #[must_use]
    pub fn violations(&self) -> &[ValidationError] {
        &self.violations
    }

    /// Returns `true` if `field` is among the violations.
    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

impl fmt::Display for RoomValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid room:")?;
        for (i, v) in self.violations.iter().enumerate() {
            let sep = if i == 0 { " " } else { "; " };
            write!(f, "{sep}{} {}", v.field, v.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for RoomValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> RoomRequest {
        RoomRequest {
            number: 101,
            room_type: "STANDARD".into(),
            capacity: 1,
            price_per_night: Decimal::new(12050, 2),
            status: "ATIVO".into(),
        }
    }

    #[test]
    fn test_valid_request() {
        let details = request().validate().unwrap();
        assert_eq!(details.number, 101);
        assert_eq!(details.room_type, RoomType::Standard);
        assert_eq!(details.capacity, 1);
        assert_eq!(details.status, RoomStatus::Active);
    }

    #[test]
    fn test_collects_every_violation() {
        let req = RoomRequest {
            number: -5,
            room_type: "CASTLE".into(),
            capacity: 0,
            price_per_night: Decimal::ZERO,
            status: "OPEN".into(),
        };
        let err = req.validate().unwrap_err();
        assert_eq!(err.violations().len(), 5);
        for field in ["number", "capacity", "price_per_night", "type", "status"] {
            assert!(err.has_field(field), "missing violation for {field}");
        }
    }

    #[test]
    fn test_single_violation() {
        let mut req = request();
        req.capacity = 0;
        let err = req.validate().unwrap_err();
        assert_eq!(err.violations().len(), 1);
        assert!(err.to_string().contains("capacity must be greater than 0"));
    }

    #[test]
    fn test_number_out_of_range() {
        let mut req = request();
        req.number = i64::from(u32::MAX) + 1;
        assert!(req.validate().unwrap_err().has_field("number"));
    }

    #[test]
    fn test_status_aliases() {
        assert_eq!("ATIVO".parse::<RoomStatus>().unwrap(), RoomStatus::Active);
        assert_eq!("ACTIVE".parse::<RoomStatus>().unwrap(), RoomStatus::Active);
        assert_eq!("INATIVO".parse::<RoomStatus>().unwrap(), RoomStatus::Inactive);
        assert_eq!("INACTIVE".parse::<RoomStatus>().unwrap(), RoomStatus::Inactive);
        assert!("inactive".parse::<RoomStatus>().is_err());
    }

    #[test]
    fn test_room_type_parse() {
        assert_eq!("SUITE".parse::<RoomType>().unwrap(), RoomType::Suite);
        assert!("Suite".parse::<RoomType>().is_err());
    }

    #[test]
    fn test_room_serializes_flat() {
        let room = request().validate().unwrap().with_id(RoomId::new("room-1"));
        let json = serde_json::to_value(&room).unwrap();
        assert_eq!(json["id"], "room-1");
        assert_eq!(json["number"], 101);
        assert_eq!(json["type"], "STANDARD");
        assert_eq!(json["status"], "ATIVO");
    }

    #[test]
    fn test_status_serde_alias() {
        let status: RoomStatus = serde_json::from_str("\"INACTIVE\"").unwrap();
        assert_eq!(status, RoomStatus::Inactive);
    }
}
