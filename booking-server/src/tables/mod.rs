//! Dining table rules: creation payloads and the seat / finish checks

use serde_json::Value;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{DiningTable, DiningTableCreate, Reservation, ReservationStatus};

use crate::utils::validation::{
    Payload, integer_value, positive_i32, reject_unknown_fields, require_fields, text_field,
};

pub const TABLE_FIELDS: [&str; 2] = ["table_name", "capacity"];

pub const MIN_TABLE_NAME_LEN: usize = 2;

/// Validate a `POST /tables` payload.
pub fn validate_table(payload: &Payload) -> AppResult<DiningTableCreate> {
    reject_unknown_fields(payload, &TABLE_FIELDS)?;
    require_fields(payload, &TABLE_FIELDS)?;

    let table_name = text_field(payload, "table_name")?;
    if table_name.chars().count() < MIN_TABLE_NAME_LEN {
        return Err(AppError::validation(format!(
            "table_name must be at least {MIN_TABLE_NAME_LEN} characters"
        )));
    }

    // capacity must be a JSON integer, not a numeric string
    let capacity = match payload.get("capacity") {
        Some(Value::Number(n)) => n.as_i64().and_then(positive_i32),
        _ => None,
    }
    .ok_or_else(|| AppError::validation("capacity must be a positive integer"))?;

    Ok(DiningTableCreate {
        table_name: table_name.to_string(),
        capacity,
    })
}

/// Extract the reservation id from a `PUT /tables/:id/seat` payload.
pub fn validate_seat_request(payload: &Payload) -> AppResult<i64> {
    require_fields(payload, &["reservation_id"])?;
    payload
        .get("reservation_id")
        .map(integer_value)
        .and_then(Result::ok)
        .ok_or_else(|| AppError::validation("reservation_id must be a number"))
}

/// Checks run once both rows are loaded, in order: reservation status,
/// capacity, occupancy.
pub fn check_can_seat(table: &DiningTable, reservation: &Reservation) -> AppResult<()> {
    match reservation.status {
        ReservationStatus::Booked => {}
        ReservationStatus::Seated => {
            return Err(AppError::with_message(
                ErrorCode::ReservationNotBooked,
                format!(
                    "Reservation {} is already seated",
                    reservation.reservation_id
                ),
            ));
        }
        status => {
            return Err(AppError::with_message(
                ErrorCode::ReservationNotBooked,
                format!("Reservation {} is {status}", reservation.reservation_id),
            ));
        }
    }

    if reservation.people > table.capacity {
        return Err(AppError::with_message(
            ErrorCode::CapacityExceeded,
            format!(
                "Table {} seats {}, the party has {} people",
                table.table_name, table.capacity, reservation.people
            ),
        ));
    }

    if table.is_occupied() {
        return Err(AppError::with_message(
            ErrorCode::TableOccupied,
            format!("Table {} is occupied", table.table_name),
        ));
    }

    Ok(())
}

/// Returns the id of the reservation seated at `table`.
pub fn check_can_finish(table: &DiningTable) -> AppResult<i64> {
    table.reservation_id.ok_or_else(|| {
        AppError::with_message(
            ErrorCode::TableNotOccupied,
            format!("Table {} is not occupied", table.table_id),
        )
    })
}
