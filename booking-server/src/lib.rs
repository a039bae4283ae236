//! booking-server - restaurant reservation and table service
//!
//! REST API over SQLite:
//! - reservations: create, search, edit and move through
//!   `booked → seated → finished` (or `cancelled`)
//! - dining tables: create, seat a reservation, free the table

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod reservations;
pub mod state;
pub mod tables;
pub mod utils;

pub use config::Config;
pub use state::AppState;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
