//! Dining table queries
//!
//! Seating and finishing touch both tables and run in one transaction.

use shared::models::{DiningTable, DiningTableCreate, ReservationStatus};
use shared::util::now_millis;
use sqlx::SqlitePool;

use super::{BoxError, reservations};

pub async fn list(pool: &SqlitePool) -> Result<Vec<DiningTable>, BoxError> {
    let rows: Vec<DiningTable> =
        sqlx::query_as("SELECT * FROM dining_tables ORDER BY table_name, table_id")
            .fetch_all(pool)
            .await?;
    Ok(rows)
}

pub async fn create(
    pool: &SqlitePool,
    data: &DiningTableCreate,
) -> Result<DiningTable, BoxError> {
    let now = now_millis();
    let row: DiningTable = sqlx::query_as(
        r#"
        INSERT INTO dining_tables (table_name, capacity, created_at, updated_at)
        VALUES (?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(&data.table_name)
    .bind(data.capacity)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn read(pool: &SqlitePool, table_id: i64) -> Result<Option<DiningTable>, BoxError> {
    let row: Option<DiningTable> =
        sqlx::query_as("SELECT * FROM dining_tables WHERE table_id = ?")
            .bind(table_id)
            .fetch_optional(pool)
            .await?;
    Ok(row)
}

/// Result of [`seat`]; nothing is written unless both rows still allow it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeatOutcome {
    Seated(DiningTable),
    /// The table was taken since the caller loaded it
    TableTaken,
    /// The reservation left the `booked` state since the caller loaded it
    NotBooked,
}

/// Assign `reservation_id` to a free table and mark the reservation seated.
pub async fn seat(
    pool: &SqlitePool,
    table_id: i64,
    reservation_id: i64,
) -> Result<SeatOutcome, BoxError> {
    let mut tx = pool.begin().await?;

    let row: Option<DiningTable> = sqlx::query_as(
        r#"
        UPDATE dining_tables SET reservation_id = ?, updated_at = ?
        WHERE table_id = ? AND reservation_id IS NULL
        RETURNING *
        "#,
    )
    .bind(reservation_id)
    .bind(now_millis())
    .bind(table_id)
    .fetch_optional(&mut *tx)
    .await?;

    let Some(table) = row else {
        tx.rollback().await?;
        return Ok(SeatOutcome::TableTaken);
    };

    if reservations::seat_booked(&mut *tx, reservation_id).await?.is_none() {
        tx.rollback().await?;
        return Ok(SeatOutcome::NotBooked);
    }

    tx.commit().await?;
    Ok(SeatOutcome::Seated(table))
}

/// Free the table and mark the reservation seated at it finished.
pub async fn finish(
    pool: &SqlitePool,
    table_id: i64,
    reservation_id: i64,
) -> Result<Option<DiningTable>, BoxError> {
    let mut tx = pool.begin().await?;

    reservations::update_status(&mut *tx, reservation_id, ReservationStatus::Finished).await?;

    let row: Option<DiningTable> = sqlx::query_as(
        r#"
        UPDATE dining_tables SET reservation_id = NULL, updated_at = ?
        WHERE table_id = ? AND reservation_id = ?
        RETURNING *
        "#,
    )
    .bind(now_millis())
    .bind(table_id)
    .bind(reservation_id)
    .fetch_optional(&mut *tx)
    .await?;

    if row.is_none() {
        tx.rollback().await?;
        return Ok(None);
    }
    tx.commit().await?;
    Ok(row)
}
