//! Reservation status and the transition rules between statuses.
//!
//! A reservation starts out [`Created`](ReservationStatus::Created) and
//! either progresses through check-in and check-out or is canceled:
//!
//! | Current       | Allowed next                  |
//! |---------------|-------------------------------|
//! | `CREATED`     | `CHECKED_IN`, `CANCELED`      |
//! | `CHECKED_IN`  | `CHECKED_OUT`                 |
//! | `CHECKED_OUT` | none                          |
//! | `CANCELED`    | none                          |
//!
//! Re-submitting the current status is always permitted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The lifecycle status of a reservation.
///
/// # Examples
///
/// ```
/// use hotel::ReservationStatus;
///
/// let status: ReservationStatus = "CHECKED_IN".parse().unwrap();
/// assert_eq!(status, ReservationStatus::CheckedIn);
/// assert_eq!(status.to_string(), "CHECKED_IN");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    /// Booked but the guest has not arrived.
    #[default]
    Created,
    /// The guest is in the room.
    CheckedIn,
    /// The guest has left. Terminal.
    CheckedOut,
    /// The booking was called off. Terminal.
    Canceled,
}

impl ReservationStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 4] = [
        Self::Created,
        Self::CheckedIn,
        Self::CheckedOut,
        Self::Canceled,
    ];

    /// Returns the canonical upper-case name of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "CREATED",
            Self::CheckedIn => "CHECKED_IN",
            Self::CheckedOut => "CHECKED_OUT",
            Self::Canceled => "CANCELED",
        }
    }

    /// Returns the statuses reachable from this one in a single step.
    ///
    /// The status itself is not listed even though re-submitting it is
    /// accepted by [`validate_transition`].
    ///
    /// # Examples
    ///
    /// ```
    /// use hotel::ReservationStatus;
    ///
    /// assert_eq!(
    ///     ReservationStatus::Created.allowed_transitions(),
    ///     &[ReservationStatus::CheckedIn, ReservationStatus::Canceled]
    /// );
    /// assert!(ReservationStatus::Canceled.allowed_transitions().is_empty());
    /// ```
    #[must_use]
    pub const fn allowed_transitions(self) -> &'static [Self] {
        match self {
            Self::Created => &[Self::CheckedIn, Self::Canceled],
            Self::CheckedIn => &[Self::CheckedOut],
            Self::CheckedOut | Self::Canceled => &[],
        }
    }

    /// Returns `true` if no other status can follow this one.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        self.allowed_transitions().is_empty()
    }

    /// Returns `true` if moving from this status to `next` is permitted.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self == next || self.allowed_transitions().contains(&next)
    }

    /// Returns `true` if a reservation in this status holds its room.
    ///
    /// Only canceled reservations release their dates.
    #[must_use]
    pub const fn occupies_room(self) -> bool {
        !matches!(self, Self::Canceled)
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReservationStatus {
    type Err = TransitionError;

    /// Parses a status name. Matching is exact and case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CREATED" => Ok(Self::Created),
            "CHECKED_IN" => Ok(Self::CheckedIn),
            "CHECKED_OUT" => Ok(Self::CheckedOut),
            "CANCELED" => Ok(Self::Canceled),
            other => Err(TransitionError::UnknownState {
                value: other.to_string(),
            }),
        }
    }
}

/// Error type for rejected status changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    /// A status string does not name any known status.
    UnknownState {
        /// The unrecognized input.
        value: String,
    },
    /// The requested status cannot follow the current one.
    IllegalTransition {
        /// The status the reservation is in.
        current: ReservationStatus,
        /// The status that was requested.
        next: ReservationStatus,
    },
}

impl fmt::Display for TransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownState { value } => write!(f, "unknown reservation status: {value}"),
            Self::IllegalTransition { current, next } => {
                write!(f, "invalid status transition: {current} -> {next}")
            }
        }
    }
}

impl std::error::Error for TransitionError {}

/// Checks that a reservation may move from `current` to `next`.
///
/// # Errors
///
/// Returns [`TransitionError::IllegalTransition`] if `next` is neither
/// `current` nor one of its allowed successors.
///
/// # Examples
///
/// ```
/// use hotel::status::{validate_transition, ReservationStatus};
///
/// assert!(validate_transition(ReservationStatus::Created, ReservationStatus::CheckedIn).is_ok());
/// assert!(validate_transition(ReservationStatus::Canceled, ReservationStatus::Canceled).is_ok());
/// assert!(validate_transition(ReservationStatus::CheckedIn, ReservationStatus::Created).is_err());
/// ```
pub fn validate_transition(
    current: ReservationStatus,
    next: ReservationStatus,
) -> Result<(), TransitionError> {
    if current.can_transition_to(next) {
        Ok(())
    } else {
        Err(TransitionError::IllegalTransition { current, next })
    }
}

/// Parses both status names and checks the transition between them.
///
/// The current status is parsed first, so a corrupt stored value is
/// reported before a bad request value.
///
/// # Errors
///
/// Returns [`TransitionError::UnknownState`] if either string is not a
/// status name, or [`TransitionError::IllegalTransition`] as for
/// [`validate_transition`].
pub fn validate_transition_str(current: &str, next: &str) -> Result<(), TransitionError> {
    let current: ReservationStatus = current.parse()?;
    let next: ReservationStatus = next.parse()?;
    validate_transition(current, next)
}
