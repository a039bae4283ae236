//! Unified error codes for the booking service
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Reservation errors
//! - 2xxx: Table errors
//! - 9xxx: System errors

use std::fmt;

/// Unified error code enum
///
/// Codes never reach the wire; they pick the HTTP status and the log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request (malformed body, missing query parameter)
    InvalidRequest = 5,

    // ==================== 1xxx: Reservation ====================
    /// Reservation not found
    ReservationNotFound = 1001,
    /// Requested status is not a known status
    InvalidStatus = 1002,
    /// Reservation is finished and can no longer change
    ReservationFinished = 1003,
    /// Reservation is not in the `booked` state
    ReservationNotBooked = 1004,

    // ==================== 2xxx: Table ====================
    /// Table not found
    TableNotFound = 2001,
    /// Table already has a seated reservation
    TableOccupied = 2002,
    /// Table has no seated reservation
    TableNotOccupied = 2003,
    /// Party is larger than the table capacity
    CapacityExceeded = 2004,

    // ==================== 9xxx: System ====================
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default message used when no custom message is given
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",

            ErrorCode::ReservationNotFound => "Reservation not found",
            ErrorCode::InvalidStatus => "Unknown reservation status",
            ErrorCode::ReservationFinished => "a finished reservation cannot be updated",
            ErrorCode::ReservationNotBooked => "Reservation is not booked",

            ErrorCode::TableNotFound => "Table not found",
            ErrorCode::TableOccupied => "Table is occupied",
            ErrorCode::TableNotOccupied => "Table is not occupied",
            ErrorCode::CapacityExceeded => "Table capacity is too small",

            ErrorCode::DatabaseError => "Database error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self, self.code())
    }
}
