//! Shared types for the booking service
//!
//! Domain models, the unified error system, the response envelopes and a
//! few utilities used by the server and its tests.

pub mod error;
pub mod models;
pub mod types;
pub mod util;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorBody, ErrorCode};
