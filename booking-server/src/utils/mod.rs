//! Utilities: logging setup, date/time parsing, payload validation helpers

pub mod logger;
pub mod time;
pub mod validation;

pub use validation::Payload;
