//! Unified error system for the booking service
//!
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Error type with code and message
//! - [`ErrorBody`] / [`ApiResponse`]: the `{ error }` and `{ data }` envelopes
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::reservation_not_found(42);
//! assert_eq!(err.code, ErrorCode::ReservationNotFound);
//! assert_eq!(err.message, "Reservation 42 cannot be found.");
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::ErrorCode;
pub use types::{ApiResponse, AppError, AppResult, ErrorBody};
