//! Error types for the hotel library.
//!
//! This module provides the error hierarchy for every operation in the
//! library, using `thiserror` for ergonomic error handling. Each variant
//! belongs to an [`ErrorCategory`] so callers can map failures to an
//! external response without matching on every variant.

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

use crate::dates::{DateError, DateField};
use crate::room::RoomValidationError;
use crate::status::{ReservationStatus, TransitionError};

/// Result type alias for operations that may fail with a hotel error.
///
/// # Examples
///
/// ```
/// use hotel::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(101)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the hotel library.
#[derive(Debug, Error)]
pub enum Error {
    /// A required field was missing or out of bounds.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// One or more room fields failed validation.
    #[error("{0}")]
    RoomValidation(RoomValidationError),

    /// A date string did not match `YYYY-MM-DD`.
    #[error("invalid {field} date '{value}' (expected YYYY-MM-DD)")]
    MalformedDate {
        /// Which side of the stay was malformed.
        field: DateField,
        /// The rejected input.
        value: String,
    },

    /// Checkout was not strictly after checkin.
    #[error("checkout {checkout} must be after checkin {checkin}")]
    InvalidDateRange {
        /// The requested checkin date.
        checkin: NaiveDate,
        /// The requested checkout date.
        checkout: NaiveDate,
    },

    /// The room already has a non-canceled reservation overlapping the stay.
    #[error("room {room_id} is not available from {checkin} to {checkout}")]
    RoomUnavailable {
        /// The room that is already booked.
        room_id: String,
        /// The requested checkin date.
        checkin: NaiveDate,
        /// The requested checkout date.
        checkout: NaiveDate,
    },

    /// A status change is not allowed by the transition table.
    #[error("invalid status transition: {current} -> {next}")]
    IllegalTransition {
        /// The persisted status.
        current: ReservationStatus,
        /// The requested status.
        next: ReservationStatus,
    },

    /// A status string does not name any reservation status.
    #[error("unknown reservation status: {value}")]
    UnknownStatus {
        /// The unrecognized status.
        value: String,
    },

    /// A uniqueness or referential constraint was violated.
    #[error("conflict: {details}")]
    Conflict {
        /// Details about the conflict.
        details: String,
    },

    /// The requested resource was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The data directory was not found and auto-initialization is disabled.
    #[error("data directory not found: {}", path.display())]
    DataDirectoryNotFound {
        /// The expected path to the data directory.
        path: PathBuf,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: i32,
        /// The schema version found in the database.
        found: i32,
    },
}

/// Coarse classification of an [`Error`] for mapping to external responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Missing or malformed request fields.
    InvalidInput,
    /// Scheduling or uniqueness conflict; the caller must change the request.
    Conflict,
    /// A status change the state machine does not allow.
    InvalidTransition,
    /// The referenced reservation or room does not exist.
    NotFound,
    /// Storage or environment failure, reported opaquely.
    Internal,
}

impl Error {
    /// Returns the category this error belongs to.
    ///
    /// # Examples
    ///
    /// ```
    /// use hotel::{Error, ErrorCategory};
    ///
    /// let err = Error::NotFound { resource: "reservation abc".into() };
    /// assert_eq!(err.category(), ErrorCategory::NotFound);
    /// ```
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::Validation { .. } | Self::RoomValidation(_) => ErrorCategory::InvalidInput,
            Self::MalformedDate { .. }
            | Self::InvalidDateRange { .. }
            | Self::RoomUnavailable { .. }
            | Self::Conflict { .. } => ErrorCategory::Conflict,
            Self::IllegalTransition { .. } | Self::UnknownStatus { .. } => {
                ErrorCategory::InvalidTransition
            }
            Self::NotFound { .. } => ErrorCategory::NotFound,
            Self::Database(_)
            | Self::Configuration(_)
            | Self::Io(_)
            | Self::DataDirectoryNotFound { .. }
            | Self::UnsupportedSchemaVersion { .. } => ErrorCategory::Internal,
        }
    }

    /// Returns the HTTP status code a REST front end should answer with.
    ///
    /// # Examples
    ///
    /// ```
    /// use hotel::Error;
    ///
    /// let err = Error::Conflict { details: "room number 101 already exists".into() };
    /// assert_eq!(err.status_code(), 409);
    /// ```
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self.category() {
            ErrorCategory::InvalidInput | ErrorCategory::InvalidTransition => 400,
            ErrorCategory::Conflict => 409,
            ErrorCategory::NotFound => 404,
            ErrorCategory::Internal => 500,
        }
    }

    /// Check if error indicates a missing reservation or room.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if error is a scheduling or uniqueness conflict.
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self.category(), ErrorCategory::Conflict)
    }

    /// Check if error means the database stayed locked past the busy timeout.
    #[must_use]
    pub fn is_lock_timeout(&self) -> bool {
        matches!(
            self,
            Self::Database(rusqlite::Error::SqliteFailure(e, _))
                if matches!(
                    e.code,
                    rusqlite::ErrorCode::DatabaseBusy | rusqlite::ErrorCode::DatabaseLocked
                )
        )
    }
}

impl From<DateError> for Error {
    fn from(err: DateError) -> Self {
        match err {
            DateError::MalformedDate { field, value } => Self::MalformedDate { field, value },
            DateError::InvalidRange { checkin, checkout } => {
                Self::InvalidDateRange { checkin, checkout }
            }
        }
    }
}

impl From<TransitionError> for Error {
    fn from(err: TransitionError) -> Self {
        match err {
            TransitionError::UnknownState { value } => Self::UnknownStatus { value },
            TransitionError::IllegalTransition { current, next } => {
                Self::IllegalTransition { current, next }
            }
        }
    }
}

impl From<crate::reservation::ValidationError> for Error {
    fn from(err: crate::reservation::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl From<RoomValidationError> for Error {
    fn from(err: RoomValidationError) -> Self {
        Self::RoomValidation(err)
    }
}
