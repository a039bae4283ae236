//! Reservation rules: business hours, the validation pipeline and the status guard

pub mod hours;
pub mod status;
pub mod validation;

pub use hours::{BusinessHours, HoursError};
pub use status::{check_status_transition, ensure_editable};
pub use validation::{ValidationContext, validate_reservation};
