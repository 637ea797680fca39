//! Stay dates and their validation.
//!
//! Checkin and checkout are plain calendar dates with no time-of-day or
//! timezone component. A stay covers the half-open interval
//! `[checkin, checkout)`: the guest leaves on the checkout day, so another
//! guest may arrive that same day.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod proptests;

/// The only accepted textual date layout.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Which side of a stay a date belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateField {
    /// The arrival date.
    Checkin,
    /// The departure date.
    Checkout,
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Checkin => write!(f, "checkin"),
            Self::Checkout => write!(f, "checkout"),
        }
    }
}

/// Error type for rejected stay dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// The input is not a `YYYY-MM-DD` calendar date.
    MalformedDate {
        /// Which input was rejected.
        field: DateField,
        /// The rejected input.
        value: String,
    },
    /// Checkout is on or before checkin.
    InvalidRange {
        /// The parsed checkin date.
        checkin: NaiveDate,
        /// The parsed checkout date.
        checkout: NaiveDate,
    },
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedDate { field, value } => {
                write!(f, "invalid {field} date '{value}' (expected YYYY-MM-DD)")
            }
            Self::InvalidRange { checkin, checkout } => {
                write!(f, "checkout {checkout} must be after checkin {checkin}")
            }
        }
    }
}

impl std::error::Error for DateError {}

/// Parses a single `YYYY-MM-DD` date.
///
/// The input must be four digits, `-`, two digits, `-`, two digits. Unpadded
/// forms such as `2025-6-1` and signed years such as `+2025-6-01` are
/// rejected.
///
/// # Errors
///
/// Returns [`DateError::MalformedDate`] if the input does not parse.
///
/// # Examples
///
/// ```
/// use hotel::dates::{parse_date, DateField};
///
/// let date = parse_date("2025-06-01", DateField::Checkin).unwrap();
/// assert_eq!(date.to_string(), "2025-06-01");
///
/// assert!(parse_date("2025-6-1", DateField::Checkin).is_err());
/// assert!(parse_date("01/06/2025", DateField::Checkout).is_err());
/// assert!(parse_date("-001-01-01", DateField::Checkin).is_err());
/// ```
pub fn parse_date(value: &str, field: DateField) -> Result<NaiveDate, DateError> {
    let malformed = || DateError::MalformedDate {
        field,
        value: value.to_string(),
    };

    if !has_date_shape(value) {
        return Err(malformed());
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| malformed())
}

// chrono's `%Y` takes a sign and a variable width, so the layout is
// checked byte by byte first.
fn has_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Parses and validates a checkin/checkout pair.
///
/// Checkin is parsed first, so when both inputs are malformed the error
/// names the checkin field.
///
/// # Errors
///
/// Returns an error if:
/// - Either input is not a `YYYY-MM-DD` date
/// - Checkout is not strictly after checkin
///
/// # Examples
///
/// ```
/// use hotel::dates::{validate_range, DateError};
///
/// let stay = validate_range("2025-06-01", "2025-06-05").unwrap();
/// assert_eq!(stay.nights(), 4);
///
/// // Same-day stays are rejected
/// assert!(matches!(
///     validate_range("2025-06-01", "2025-06-01"),
///     Err(DateError::InvalidRange { .. })
/// ));
/// ```
pub fn validate_range(checkin: &str, checkout: &str) -> Result<StayDates, DateError> {
    let checkin = parse_date(checkin, DateField::Checkin)?;
    let checkout = parse_date(checkout, DateField::Checkout)?;
    StayDates::new(checkin, checkout)
}

/// A validated stay: checkout is strictly after checkin.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use hotel::StayDates;
///
/// let checkin = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
/// let checkout = NaiveDate::from_ymd_opt(2025, 6, 5).unwrap();
/// let stay = StayDates::new(checkin, checkout).unwrap();
///
/// assert_eq!(stay.checkin(), checkin);
/// assert_eq!(format!("{stay}"), "2025-06-01..2025-06-05");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawStayDates", into = "RawStayDates")]
pub struct StayDates {
    checkin: NaiveDate,
    checkout: NaiveDate,
}

impl StayDates {
    /// Creates a stay from two calendar dates.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::InvalidRange`] if `checkout <= checkin`.
    pub fn new(checkin: NaiveDate, checkout: NaiveDate) -> Result<Self, DateError> {
        if checkout <= checkin {
            Err(DateError::InvalidRange { checkin, checkout })
        } else {
            Ok(Self { checkin, checkout })
        }
    }

    /// Returns the arrival date.
    #[must_use]
    pub const fn checkin(&self) -> NaiveDate {
        self.checkin
    }

    /// Returns the departure date.
    #[must_use]
    pub const fn checkout(&self) -> NaiveDate {
        self.checkout
    }

    /// Returns the number of nights covered by the stay (always at least one).
    #[must_use]
    pub fn nights(&self) -> i64 {
        (self.checkout - self.checkin).num_days()
    }

    /// Returns `true` if the two stays share at least one night.
    ///
    /// Uses half-open interval semantics: a stay ending on the day another
    /// begins does not overlap it.
    ///
    /// # Examples
    ///
    /// ```
    /// use hotel::dates::validate_range;
    ///
    /// let booked = validate_range("2025-06-01", "2025-06-05").unwrap();
    ///
    /// let inside = validate_range("2025-06-03", "2025-06-07").unwrap();
    /// assert!(booked.overlaps(&inside));
    ///
    /// let touching = validate_range("2025-06-05", "2025-06-08").unwrap();
    /// assert!(!booked.overlaps(&touching));
    /// ```
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.checkin < other.checkout && other.checkin < self.checkout
    }

    /// Returns `true` if `date` is one of the nights of this stay.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.checkin <= date && date < self.checkout
    }
}

impl fmt::Display for StayDates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.checkin, self.checkout)
    }
}

#[derive(Serialize, Deserialize)]
struct RawStayDates {
    checkin: String,
    checkout: String,
}

impl TryFrom<RawStayDates> for StayDates {
    type Error = DateError;

    fn try_from(raw: RawStayDates) -> Result<Self, Self::Error> {
        validate_range(&raw.checkin, &raw.checkout)
    }
}

impl From<StayDates> for RawStayDates {
    fn from(stay: StayDates) -> Self {
        Self {
            checkin: stay.checkin.format(DATE_FORMAT).to_string(),
            checkout: stay.checkout.format(DATE_FORMAT).to_string(),
        }
    }
}
