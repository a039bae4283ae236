//! Reservation validation pipeline
//!
//! Create and full update run the same ordered checks against the raw
//! `data` object. The first failing check wins and nothing after it runs.
//! Checks are pure: they read the payload and the [`ValidationContext`] and
//! never touch the database.
//!
//! | # | check                | rejects                                      |
//! |---|----------------------|----------------------------------------------|
//! | 1 | known fields         | keys outside [`RESERVATION_FIELDS`]          |
//! | 2 | required fields      | missing/blank fields, `people` ≤ 0           |
//! | 3 | formats              | non-numeric `people`, unparsable date/time   |
//! | 4 | not in the past      | earlier than the current minute              |
//! | 5 | closed day           | the weekly closed day                        |
//! | 6 | business hours       | before opening or inside the closing buffer  |
//! | 7 | status at creation   | `seated` / `finished` (or an unknown value)  |

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde_json::Value;
use shared::error::{AppError, AppResult};
use shared::models::{ReservationInput, ReservationStatus};

use super::hours::BusinessHours;
use crate::utils::time::{parse_date, parse_time, truncate_to_minute, weekday_name};
use crate::utils::validation::{
    IntegerError, Payload, integer_value, positive_i32, reject_unknown_fields, require_fields,
    text_field,
};

/// Every key a reservation payload may carry. The edit form posts the whole
/// stored row back, so identifiers and timestamps are tolerated (and ignored).
pub const RESERVATION_FIELDS: [&str; 10] = [
    "reservation_id",
    "first_name",
    "last_name",
    "mobile_number",
    "reservation_date",
    "reservation_time",
    "people",
    "status",
    "created_at",
    "updated_at",
];

pub const REQUIRED_FIELDS: [&str; 6] = [
    "first_name",
    "last_name",
    "mobile_number",
    "reservation_date",
    "reservation_time",
    "people",
];

/// Inputs a check may depend on besides the payload
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext<'a> {
    pub hours: &'a BusinessHours,
    /// Restaurant wall-clock time of the request
    pub now: NaiveDateTime,
}

impl<'a> ValidationContext<'a> {
    pub fn new(hours: &'a BusinessHours, now: NaiveDateTime) -> Self {
        Self { hours, now }
    }
}

type Check = fn(&Payload, &ValidationContext<'_>) -> AppResult<()>;

const PIPELINE: [(&str, Check); 7] = [
    ("known_fields", check_known_fields),
    ("required_fields", check_required_fields),
    ("formats", check_formats),
    ("not_in_past", check_not_in_past),
    ("closed_day", check_closed_day),
    ("business_hours", check_business_hours),
    ("creatable_status", check_creatable_status),
];

/// Run every check in order and, if all pass, type the payload.
pub fn validate_reservation(
    payload: &Payload,
    ctx: &ValidationContext<'_>,
) -> AppResult<ReservationInput> {
    for (name, check) in PIPELINE {
        if let Err(err) = check(payload, ctx) {
            tracing::debug!(check = name, error = %err, "Reservation rejected");
            return Err(err);
        }
    }
    to_input(payload)
}

pub fn check_known_fields(payload: &Payload, _ctx: &ValidationContext<'_>) -> AppResult<()> {
    reject_unknown_fields(payload, &RESERVATION_FIELDS)
}

pub fn check_required_fields(payload: &Payload, _ctx: &ValidationContext<'_>) -> AppResult<()> {
    require_fields(payload, &REQUIRED_FIELDS)?;

    // Strings are format-checked in the next stage
    if let Some(Value::Number(n)) = payload.get("people")
        && n.as_i64().and_then(positive_i32).is_none()
    {
        return Err(AppError::validation("people must be a positive integer"));
    }
    Ok(())
}

pub fn check_formats(payload: &Payload, _ctx: &ValidationContext<'_>) -> AppResult<()> {
    for field in ["first_name", "last_name", "mobile_number"] {
        text_field(payload, field)?;
    }
    people(payload)?;
    reservation_date(payload)?;
    reservation_time(payload)?;
    Ok(())
}

pub fn check_not_in_past(payload: &Payload, ctx: &ValidationContext<'_>) -> AppResult<()> {
    let at = reservation_date(payload)?.and_time(reservation_time(payload)?);
    if truncate_to_minute(at) < truncate_to_minute(ctx.now) {
        return Err(AppError::validation("Reservation must be in the future"));
    }
    Ok(())
}

pub fn check_closed_day(payload: &Payload, ctx: &ValidationContext<'_>) -> AppResult<()> {
    if ctx.hours.is_closed_on(reservation_date(payload)?) {
        return Err(AppError::validation(format!(
            "The restaurant is closed on {}",
            weekday_name(ctx.hours.closed_day())
        )));
    }
    Ok(())
}

pub fn check_business_hours(payload: &Payload, ctx: &ValidationContext<'_>) -> AppResult<()> {
    if !ctx.hours.accepts(reservation_time(payload)?) {
        return Err(AppError::validation(format!(
            "Reservations are only accepted between {} and {}",
            ctx.hours.open().format("%H:%M"),
            ctx.hours.last_seating().format("%H:%M")
        )));
    }
    Ok(())
}

pub fn check_creatable_status(payload: &Payload, _ctx: &ValidationContext<'_>) -> AppResult<()> {
    match status(payload)? {
        Some(status @ (ReservationStatus::Seated | ReservationStatus::Finished)) => Err(
            AppError::validation(format!("status cannot be {status}")),
        ),
        _ => Ok(()),
    }
}

// ── Field readers ──

fn people(payload: &Payload) -> AppResult<i32> {
    let value = payload
        .get("people")
        .ok_or_else(|| AppError::validation("Field required: people"))?;
    match integer_value(value) {
        Ok(n) => {
            positive_i32(n).ok_or_else(|| AppError::validation("people must be a positive integer"))
        }
        Err(IntegerError::NotAnInteger) => {
            Err(AppError::validation("people must be a positive integer"))
        }
        Err(IntegerError::NotANumber) => Err(AppError::validation("people must be a number")),
    }
}

fn reservation_date(payload: &Payload) -> AppResult<NaiveDate> {
    payload
        .get("reservation_date")
        .and_then(Value::as_str)
        .and_then(parse_date)
        .ok_or_else(|| {
            AppError::validation("reservation_date must be a date in YYYY-MM-DD format")
        })
}

fn reservation_time(payload: &Payload) -> AppResult<NaiveTime> {
    payload
        .get("reservation_time")
        .and_then(Value::as_str)
        .and_then(parse_time)
        .ok_or_else(|| AppError::validation("reservation_time must be a time in HH:MM format"))
}

fn status(payload: &Payload) -> AppResult<Option<ReservationStatus>> {
    match payload.get("status") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => s
            .parse()
            .map(Some)
            .map_err(|e: shared::models::UnknownStatus| AppError::validation(e.to_string())),
        Some(other) => Err(AppError::validation(format!("unknown status: {other}"))),
    }
}

fn to_input(payload: &Payload) -> AppResult<ReservationInput> {
    Ok(ReservationInput {
        first_name: text_field(payload, "first_name")?.to_string(),
        last_name: text_field(payload, "last_name")?.to_string(),
        mobile_number: text_field(payload, "mobile_number")?.to_string(),
        reservation_date: reservation_date(payload)?,
        reservation_time: reservation_time(payload)?,
        people: people(payload)?,
        status: status(payload)?,
    })
}
