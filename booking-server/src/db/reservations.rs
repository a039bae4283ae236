//! Reservation queries
//!
//! Each function is a single round trip. Errors are returned as-is; the
//! caller decides how they surface.

use chrono::NaiveDate;
use shared::models::{Reservation, ReservationInput, ReservationStatus};
use shared::util::{digits_only, now_millis};
use sqlx::{SqliteExecutor, SqlitePool};

use super::BoxError;

/// Reservations on `date` that are still open (not finished or cancelled),
/// earliest first.
pub async fn list_by_date(
    pool: &SqlitePool,
    date: NaiveDate,
) -> Result<Vec<Reservation>, BoxError> {
    let rows: Vec<Reservation> = sqlx::query_as(
        r#"
        SELECT * FROM reservations
        WHERE reservation_date = ?
          AND status NOT IN ('finished', 'cancelled')
        ORDER BY reservation_time, reservation_id
        "#,
    )
    .bind(date)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Reservations whose mobile number contains the digits of `fragment`,
/// whatever else either side contains. Any status is included.
///
/// Mobile numbers are free text, so digits are compared after the rows are
/// loaded rather than in SQL.
pub async fn search_by_mobile(
    pool: &SqlitePool,
    fragment: &str,
) -> Result<Vec<Reservation>, BoxError> {
    let wanted = digits_only(fragment);
    let rows: Vec<Reservation> = sqlx::query_as(
        "SELECT * FROM reservations ORDER BY reservation_date, reservation_time, reservation_id",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .filter(|r| digits_only(&r.mobile_number).contains(&wanted))
        .collect())
}

pub async fn create(
    pool: &SqlitePool,
    input: &ReservationInput,
) -> Result<Reservation, BoxError> {
    let now = now_millis();
    let row: Reservation = sqlx::query_as(
        r#"
        INSERT INTO reservations (
            first_name, last_name, mobile_number, reservation_date, reservation_time,
            people, status, created_at, updated_at
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(&input.first_name)
    .bind(&input.last_name)
    .bind(&input.mobile_number)
    .bind(input.reservation_date)
    .bind(input.reservation_time)
    .bind(input.people)
    .bind(input.status.unwrap_or_default())
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn read(
    pool: &SqlitePool,
    reservation_id: i64,
) -> Result<Option<Reservation>, BoxError> {
    let row: Option<Reservation> =
        sqlx::query_as("SELECT * FROM reservations WHERE reservation_id = ?")
            .bind(reservation_id)
            .fetch_optional(pool)
            .await?;
    Ok(row)
}

/// Overwrite every editable column; a `None` status keeps the stored one.
/// Returns the refreshed row, or `None` if the id does not exist.
pub async fn update(
    pool: &SqlitePool,
    reservation_id: i64,
    input: &ReservationInput,
) -> Result<Option<Reservation>, BoxError> {
    let row: Option<Reservation> = sqlx::query_as(
        r#"
        UPDATE reservations SET
            first_name = ?,
            last_name = ?,
            mobile_number = ?,
            reservation_date = ?,
            reservation_time = ?,
            people = ?,
            status = COALESCE(?, status),
            updated_at = ?
        WHERE reservation_id = ?
        RETURNING *
        "#,
    )
    .bind(&input.first_name)
    .bind(&input.last_name)
    .bind(&input.mobile_number)
    .bind(input.reservation_date)
    .bind(input.reservation_time)
    .bind(input.people)
    .bind(input.status)
    .bind(now_millis())
    .bind(reservation_id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Set the status only. Takes any executor so table seating can run it
/// inside its transaction.
pub async fn update_status<'e, E>(
    executor: E,
    reservation_id: i64,
    status: ReservationStatus,
) -> Result<Option<Reservation>, BoxError>
where
    E: SqliteExecutor<'e>,
{
    let row: Option<Reservation> = sqlx::query_as(
        "UPDATE reservations SET status = ?, updated_at = ? WHERE reservation_id = ? RETURNING *",
    )
    .bind(status)
    .bind(now_millis())
    .bind(reservation_id)
    .fetch_optional(executor)
    .await?;
    Ok(row)
}

/// Move a `booked` reservation to `seated`. `None` when it is unknown or
/// no longer booked.
pub async fn seat_booked<'e, E>(
    executor: E,
    reservation_id: i64,
) -> Result<Option<Reservation>, BoxError>
where
    E: SqliteExecutor<'e>,
{
    let row: Option<Reservation> = sqlx::query_as(
        r#"
        UPDATE reservations SET status = ?, updated_at = ?
        WHERE reservation_id = ? AND status = ?
        RETURNING *
        "#,
    )
    .bind(ReservationStatus::Seated)
    .bind(now_millis())
    .bind(reservation_id)
    .bind(ReservationStatus::Booked)
    .fetch_optional(executor)
    .await?;
    Ok(row)
}
